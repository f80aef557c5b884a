use serde::Deserialize;

/// `data` section of an accepted create-cluster response
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CreatedClusterData {
    pub cluster_id: String,
}

/// Outcome of an accepted create-cluster request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterCreated {
    /// HTTP status the API answered with (201 or 202)
    pub status: u16,
    pub cluster_id: String,
}
