use std::env;
use std::path::Path;

use crate::error::DeployError;

// Default configuration constants
pub const DEFAULT_API_BASE_URL: &str = "https://cloud.nutanix.com";

pub const ENV_API_VERSION: &str = "API_VERSION";
pub const ENV_TOKEN: &str = "JSON_WEB_TOKEN";
pub const ENV_REGION: &str = "AWS_REGION";
pub const ENV_AVAILABILITY_ZONE: &str = "AWS_AVAILABILITY_ZONE";
pub const ENV_VPC_ID: &str = "EXISTING_VPC_ID";
pub const ENV_CLUSTER_SUBNET_ID: &str = "CLUSTER_SUBNET_ID";
pub const ENV_PRISM_CENTRAL_SUBNET_ID: &str = "PRISM_CENTRAL_SUBNET_ID";
pub const ENV_FLOW_SUBNET_ID: &str = "FLOW_SUBNET_ID";
pub const ENV_CLUSTER_NAME: &str = "CLUSTER_NAME";
pub const ENV_ORGANIZATION_ID: &str = "ORGANIZATION_ID";
pub const ENV_AOS_VERSION: &str = "AOS_VERSION";
pub const ENV_MANAGEMENT_ACCESS_CIDR: &str = "MANAGEMENT_ACCESS_CIDR";
pub const ENV_PRISM_ACCESS_CIDR: &str = "PRISM_ACCESS_CIDR";
pub const ENV_HOST_TYPE: &str = "HOST_TYPE";
pub const ENV_NUMBER_OF_HOSTS: &str = "NUMBER_OF_HOSTS";
pub const ENV_SSH_KEY_NAME: &str = "SSH_KEY_NAME";
pub const ENV_API_BASE_URL: &str = "NUTANIX_API_BASE_URL";

/// Resolved deployment settings, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_version: Option<String>,
    pub token: String,
    pub region: String,
    pub availability_zone: String,
    pub vpc_id: String,
    pub cluster_subnet_id: String,
    pub prism_central_subnet_id: String,
    pub flow_subnet_id: String,
    pub cluster_name: String,
    pub organization_id: String,
    pub aos_version: String,
    pub management_access_cidr: String,
    pub prism_access_cidr: String,
    pub host_type: String,
    pub number_of_hosts: u32,
    pub ssh_key_name: String,
    pub api_base_url: String,
}

impl Settings {
    /// Build settings from the process environment.
    pub fn from_env() -> Result<Self, DeployError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    ///
    /// Values are trimmed and otherwise taken verbatim. Blank values count as
    /// missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DeployError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &'static str| -> Option<String> {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |name: &'static str| -> Result<String, DeployError> {
            optional(name).ok_or(DeployError::MissingConfig(name))
        };

        let hosts_raw = required(ENV_NUMBER_OF_HOSTS)?;
        let number_of_hosts = hosts_raw
            .parse::<u32>()
            .map_err(|e| DeployError::InvalidConfig {
                name: ENV_NUMBER_OF_HOSTS,
                reason: format!("'{}' is not a whole number ({})", hosts_raw, e),
            })?;

        Ok(Self {
            api_version: optional(ENV_API_VERSION),
            token: required(ENV_TOKEN)?,
            region: required(ENV_REGION)?,
            availability_zone: required(ENV_AVAILABILITY_ZONE)?,
            vpc_id: required(ENV_VPC_ID)?,
            cluster_subnet_id: required(ENV_CLUSTER_SUBNET_ID)?,
            prism_central_subnet_id: required(ENV_PRISM_CENTRAL_SUBNET_ID)?,
            flow_subnet_id: required(ENV_FLOW_SUBNET_ID)?,
            cluster_name: required(ENV_CLUSTER_NAME)?,
            organization_id: required(ENV_ORGANIZATION_ID)?,
            aos_version: required(ENV_AOS_VERSION)?,
            management_access_cidr: required(ENV_MANAGEMENT_ACCESS_CIDR)?,
            prism_access_cidr: required(ENV_PRISM_ACCESS_CIDR)?,
            host_type: required(ENV_HOST_TYPE)?,
            number_of_hosts,
            ssh_key_name: required(ENV_SSH_KEY_NAME)?,
            api_base_url: sanitize_base_url(&optional(ENV_API_BASE_URL).unwrap_or_default()),
        })
    }
}

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
