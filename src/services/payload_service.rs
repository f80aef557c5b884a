use crate::config::Settings;
use crate::models::{
    AccessPolicy, Capacity, ClusterRequest, ClusterSpec, FaultTolerance, FvnConfig, Network,
    PrismCentral,
};

pub const LICENSE: &str = "aos";
pub const SOFTWARE_TIER: &str = "pro";
pub const USE_CASE: &str = "general";
pub const TENANCY: &str = "default";
pub const NETWORK_MODE: &str = "existing";
pub const ACCESS_POLICY_MODE: &str = "restricted";
pub const FAULT_TOLERANCE_FACTOR: &str = "1N/1D";
pub const PRISM_CENTRAL_MODE: &str = "new";
pub const PRISM_CENTRAL_VERSION: &str = "pc.2024.3.1.1";
pub const PRISM_CENTRAL_VM_SIZE: &str = "large";

fn restricted_to(cidr: &str) -> AccessPolicy {
    AccessPolicy {
        ip_addresses: vec![cidr.to_string()],
        mode: ACCESS_POLICY_MODE.to_string(),
    }
}

/// Build the create-cluster document for an existing VPC.
///
/// Every field is a constant or a verbatim copy of a setting or the account id.
pub fn build_payload(account_id: &str, settings: &Settings) -> ClusterRequest {
    ClusterRequest {
        data: ClusterSpec {
            advanced_replication: false,
            aos_version: settings.aos_version.clone(),
            capacity: vec![Capacity {
                host_type: settings.host_type.clone(),
                number_of_hosts: settings.number_of_hosts,
                tenancy: TENANCY.to_string(),
            }],
            cloud_account_id: account_id.to_string(),
            data_at_rest_encryption: false,
            host_access_ssh_key: settings.ssh_key_name.clone(),
            license: LICENSE.to_string(),
            name: settings.cluster_name.clone(),
            network: Network {
                availability_zone: settings.availability_zone.clone(),
                fvn_config: FvnConfig {
                    subnet_cloud_id: settings.flow_subnet_id.clone(),
                },
                fvn_enabled: true,
                management_services_access_policy: restricted_to(&settings.management_access_cidr),
                mode: NETWORK_MODE.to_string(),
                prism_element_access_policy: restricted_to(&settings.prism_access_cidr),
                test_network_connectivity: false,
                vpc: settings.vpc_id.clone(),
                management_subnet: settings.cluster_subnet_id.clone(),
            },
            organization_id: settings.organization_id.clone(),
            prism_central: PrismCentral {
                mode: PRISM_CENTRAL_MODE.to_string(),
                version: PRISM_CENTRAL_VERSION.to_string(),
                vm_size: PRISM_CENTRAL_VM_SIZE.to_string(),
                management_subnet: settings.prism_central_subnet_id.clone(),
            },
            cluster_fault_tolerance: FaultTolerance {
                factor: FAULT_TOLERANCE_FACTOR.to_string(),
            },
            region: settings.region.clone(),
            software_tier: SOFTWARE_TIER.to_string(),
            terminate_at: None,
            use_case: USE_CASE.to_string(),
        },
    }
}
