use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;

use crate::api::{create_cluster, Nc2Client};
use crate::config::Settings;
use crate::error::DeployError;
use crate::models::ClusterCreated;
use crate::prompt::Prompt;
use crate::report::{print_banner, print_cancelled, print_payload, print_success};
use crate::services::account_service::select_account;
use crate::services::payload_service::build_payload;

/// How an interactive run ended without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Submitted(ClusterCreated),
    Cancelled,
}

fn submit_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Submitting cluster creation request...");
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

/// Select an account, build and confirm the payload, then submit it once.
pub async fn run<P: Prompt, W: Write>(
    client: &Nc2Client,
    settings: &Settings,
    prompt: &mut P,
    out: &mut W,
) -> Result<Outcome, DeployError> {
    print_banner(out)?;

    let account_id = select_account(client, &settings.organization_id, prompt, out).await?;
    let payload = build_payload(&account_id, settings);
    tracing::debug!(cluster = %settings.cluster_name, "Payload built");

    out.flush()?;
    if prompt.confirm("\nPayload generation complete. Would you like to review the JSON payload?")? {
        print_payload(out, &payload)?;
    }

    out.flush()?;
    if !prompt.confirm("\nDo you want to proceed with cluster creation?")? {
        tracing::info!("Operator cancelled before submission");
        print_cancelled(out)?;
        return Ok(Outcome::Cancelled);
    }

    let spinner = submit_spinner();
    let result = create_cluster(client, &payload).await;
    spinner.finish_and_clear();

    let created = result?;
    print_success(out, &created)?;
    Ok(Outcome::Submitted(created))
}
