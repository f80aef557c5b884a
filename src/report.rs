//! Human-readable console output.

use comfy_table::{modifiers, presets, ContentArrangement, Table};
use std::io::{self, Write};
use terminal_size::{terminal_size, Width};
use yansi::Paint;

use crate::error::{ApiStage, DeployError};
use crate::models::{CloudAccount, ClusterCreated, ClusterRequest};

pub const BANNER_TITLE: &str = "NC2 Cluster Creation - Existing AWS VPC";

pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}\n{}", Paint::new(BANNER_TITLE).bold(), "=".repeat(50))
}

/// 1-indexed table of accounts: number, name, provider, status and,
/// optionally, the account id.
pub fn print_accounts<W: Write>(
    out: &mut W,
    accounts: &[CloudAccount],
    include_ids: bool,
) -> io::Result<()> {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    let mut header = vec!["#", "Name", "Provider", "Status"];
    if include_ids {
        header.push("ID");
    }
    table.set_header(header);
    for (idx, acct) in accounts.iter().enumerate() {
        let mut row = vec![
            (idx + 1).to_string(),
            acct.name.clone(),
            acct.cloud_provider.clone(),
            acct.status.clone(),
        ];
        if include_ids {
            row.push(acct.id.clone());
        }
        table.add_row(row);
    }
    writeln!(out, "\nAvailable Cloud Accounts:\n{table}")
}

pub fn print_payload<W: Write>(out: &mut W, request: &ClusterRequest) -> io::Result<()> {
    let json = serde_json::to_string_pretty(request)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(out, "\nCluster creation payload:\n{}", json)
}

pub fn print_success<W: Write>(out: &mut W, created: &ClusterCreated) -> io::Result<()> {
    writeln!(out, "\nStatus code: {}", created.status)?;
    writeln!(out, "\n{}", Paint::new("Cluster creation request submitted successfully!").green())?;
    writeln!(out, "Cluster ID is: {}\n", Paint::new(&created.cluster_id).cyan())?;
    writeln!(out, "Note: Cluster creation may take 45-60 minutes to complete when FVN is enabled.")?;
    writeln!(out, "Progress can be monitored through the Nutanix console.\n")
}

pub fn print_cancelled<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", Paint::new("Cluster creation cancelled.").yellow())
}

/// Describe a failed run. Remote rejections list every key/value of the
/// first error entry; a rejected create request also echoes the raw body.
pub fn print_failure<W: Write>(out: &mut W, err: &DeployError) -> io::Result<()> {
    match err {
        DeployError::Remote { stage, status, detail, raw } => {
            match stage {
                ApiStage::ListAccounts => {
                    writeln!(out, "{}. Status code: {}", Paint::new(stage).red(), status)?;
                }
                ApiStage::CreateCluster => {
                    writeln!(
                        out,
                        "\n{} (status code {}). Please refer to any error messages below.\n",
                        Paint::new(stage).red(),
                        status
                    )?;
                }
            }
            for (key, value) in detail {
                writeln!(out, "{}: {}", key, value)?;
            }
            if *stage == ApiStage::CreateCluster {
                writeln!(out, "\nRaw output: {}\n", raw)?;
            }
            Ok(())
        }
        other => writeln!(out, "{}", Paint::new(other).red()),
    }
}
