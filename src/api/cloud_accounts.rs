use reqwest::Method;

use crate::api::client::Nc2Client;
use crate::error::{ApiStage, DeployError};
use crate::models::{ApiErrorBody, CloudAccount, DataEnvelope};

pub fn cloud_accounts_endpoint(org_id: &str) -> String {
    format!("/api/v2/organizations/{}/cloud-accounts", org_id)
}

/// Fetch the cloud accounts registered for an organization.
///
/// An empty list is returned as-is; deciding whether that is fatal is left to
/// the caller.
pub async fn load_cloud_accounts(
    client: &Nc2Client,
    org_id: &str,
) -> Result<Vec<CloudAccount>, DeployError> {
    let resp = client
        .send(Method::GET, &cloud_accounts_endpoint(org_id), None)
        .await?;

    if !resp.is_success() {
        tracing::warn!(status = resp.status, "Listing cloud accounts was rejected");
        return Err(DeployError::Remote {
            stage: ApiStage::ListAccounts,
            status: resp.status,
            detail: ApiErrorBody::parse(&resp.body).first_entry(),
            raw: resp.body,
        });
    }

    let envelope: DataEnvelope<Option<Vec<CloudAccount>>> = serde_json::from_str(&resp.body)
        .map_err(|e| DeployError::Transport(format!("Unexpected cloud account list: {}", e)))?;
    let accounts = envelope.data.unwrap_or_default();
    tracing::info!(count = accounts.len(), "Loaded cloud accounts");
    Ok(accounts)
}
