#![allow(dead_code)]

use std::collections::HashMap;

use nc2::config::Settings;
use nc2::models::CloudAccount;
use serde_json::{json, Value};

pub const TOKEN: &str = "test-jwt";
pub const ORG_ID: &str = "org-42";

pub fn env_map() -> HashMap<&'static str, String> {
    HashMap::from([
        ("API_VERSION", "v2".to_string()),
        ("JSON_WEB_TOKEN", TOKEN.to_string()),
        ("AWS_REGION", "us-west-2".to_string()),
        ("AWS_AVAILABILITY_ZONE", "us-west-2a".to_string()),
        ("EXISTING_VPC_ID", "vpc-0abc".to_string()),
        ("CLUSTER_SUBNET_ID", "subnet-mgmt".to_string()),
        ("PRISM_CENTRAL_SUBNET_ID", "subnet-pc".to_string()),
        ("FLOW_SUBNET_ID", "subnet-flow".to_string()),
        ("CLUSTER_NAME", "nc2-lab".to_string()),
        ("ORGANIZATION_ID", ORG_ID.to_string()),
        ("AOS_VERSION", "7.0.1".to_string()),
        ("MANAGEMENT_ACCESS_CIDR", "10.0.0.0/16".to_string()),
        ("PRISM_ACCESS_CIDR", "192.168.10.0/24".to_string()),
        ("HOST_TYPE", "i4i.metal".to_string()),
        ("NUMBER_OF_HOSTS", "3".to_string()),
        ("SSH_KEY_NAME", "ops-key".to_string()),
        ("NUTANIX_API_BASE_URL", "https://nc2.example.test/".to_string()),
    ])
}

pub fn settings_from(map: &HashMap<&'static str, String>) -> Settings {
    Settings::from_lookup(|name| map.get(name).cloned()).unwrap()
}

pub fn settings() -> Settings {
    settings_from(&env_map())
}

pub fn settings_for(base_url: &str) -> Settings {
    let mut map = env_map();
    map.insert("NUTANIX_API_BASE_URL", base_url.to_string());
    settings_from(&map)
}

pub fn accounts() -> Vec<CloudAccount> {
    ["prod", "staging", "lab"]
        .iter()
        .enumerate()
        .map(|(i, name)| CloudAccount {
            id: format!("acct-{}", i + 1),
            name: format!("{}-billing", name),
            cloud_provider: "aws".to_string(),
            status: "active".to_string(),
        })
        .collect()
}

pub fn accounts_body() -> Value {
    json!({ "data": accounts() })
}

pub fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}
