use reqwest::Method;

use crate::api::client::Nc2Client;
use crate::error::{ApiStage, DeployError};
use crate::models::{ApiErrorBody, ClusterCreated, ClusterRequest, CreatedClusterData, DataEnvelope};

pub const CREATE_AWS_CLUSTER_ENDPOINT: &str = "/api/v2/clusters/aws";

/// Statuses the create endpoint uses to accept a request.
pub const ACCEPTED_STATUSES: [u16; 2] = [201, 202];

/// Submit a cluster creation request. Issues exactly one POST.
pub async fn create_cluster(
    client: &Nc2Client,
    request: &ClusterRequest,
) -> Result<ClusterCreated, DeployError> {
    let body = serde_json::to_value(request)
        .map_err(|e| DeployError::Transport(format!("Failed to encode request: {}", e)))?;
    let resp = client
        .send(Method::POST, CREATE_AWS_CLUSTER_ENDPOINT, Some(&body))
        .await?;

    if !ACCEPTED_STATUSES.contains(&resp.status) {
        tracing::error!(status = resp.status, "Cluster creation was rejected");
        return Err(DeployError::Remote {
            stage: ApiStage::CreateCluster,
            status: resp.status,
            detail: ApiErrorBody::parse(&resp.body).first_entry(),
            raw: resp.body,
        });
    }

    let envelope: DataEnvelope<CreatedClusterData> = serde_json::from_str(&resp.body)
        .map_err(|e| {
            DeployError::Transport(format!(
                "Cluster creation was accepted (status {}) but the response had no cluster id: {}",
                resp.status, e
            ))
        })?;
    tracing::info!(cluster_id = %envelope.data.cluster_id, "Cluster creation accepted");
    Ok(ClusterCreated {
        status: resp.status,
        cluster_id: envelope.data.cluster_id,
    })
}
