pub mod api_error;
pub mod cloud_account;
pub mod cluster_created;
pub mod cluster_request;
pub mod envelope;

pub use api_error::ApiErrorBody;
pub use cloud_account::CloudAccount;
pub use cluster_created::{ClusterCreated, CreatedClusterData};
pub use cluster_request::{
    AccessPolicy, Capacity, ClusterRequest, ClusterSpec, FaultTolerance, FvnConfig, Network,
    PrismCentral,
};
pub use envelope::DataEnvelope;
