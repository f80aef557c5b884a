use serde::{Deserialize, Serialize};

/// Request body for `POST /api/v2/clusters/aws`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ClusterRequest {
    pub data: ClusterSpec,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ClusterSpec {
    pub advanced_replication: bool,
    pub aos_version: String,
    pub capacity: Vec<Capacity>,
    pub cloud_account_id: String,
    pub data_at_rest_encryption: bool,
    pub host_access_ssh_key: String,
    pub license: String,
    pub name: String,
    pub network: Network,
    pub organization_id: String,
    pub prism_central: PrismCentral,
    pub cluster_fault_tolerance: FaultTolerance,
    pub region: String,
    pub software_tier: String,
    // always serialized, `null` means the cluster never expires
    pub terminate_at: Option<String>,
    pub use_case: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Capacity {
    pub host_type: String,
    pub number_of_hosts: u32,
    pub tenancy: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Network {
    pub availability_zone: String,
    pub fvn_config: FvnConfig,
    pub fvn_enabled: bool,
    pub management_services_access_policy: AccessPolicy,
    pub mode: String,
    pub prism_element_access_policy: AccessPolicy,
    pub test_network_connectivity: bool,
    pub vpc: String,
    pub management_subnet: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FvnConfig {
    pub subnet_cloud_id: String,
}

/// CIDR allow-list guarding a service endpoint
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AccessPolicy {
    pub ip_addresses: Vec<String>,
    pub mode: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PrismCentral {
    pub mode: String,
    pub version: String,
    pub vm_size: String,
    pub management_subnet: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FaultTolerance {
    pub factor: String,
}
