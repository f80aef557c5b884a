use std::io::Write;

use crate::api::{load_cloud_accounts, Nc2Client};
use crate::error::DeployError;
use crate::models::CloudAccount;
use crate::prompt::Prompt;
use crate::report::print_accounts;
use crate::utils::parse_optional_int;

/// Result of checking one line of selection input against `count` entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Zero-based index of the chosen entry
    Chosen(usize),
    NotANumber,
    OutOfRange,
}

pub fn validate_selection(input: &str, count: usize) -> Selection {
    match parse_optional_int(input) {
        None => Selection::NotANumber,
        Some(n) if n >= 1 && (n as u64) <= count as u64 => Selection::Chosen(n as usize - 1),
        Some(_) => Selection::OutOfRange,
    }
}

/// Show the accounts and keep asking until a valid entry is picked.
///
/// There is no attempt limit; only end of input stops the loop early.
pub fn choose_account<'a, P: Prompt, W: Write>(
    accounts: &'a [CloudAccount],
    prompt: &mut P,
    out: &mut W,
) -> Result<&'a CloudAccount, DeployError> {
    if accounts.is_empty() {
        return Err(DeployError::NoCloudAccounts);
    }
    print_accounts(out, accounts, false)?;
    out.flush()?;

    let question = format!("\nSelect the cloud account to use (1-{}): ", accounts.len());
    loop {
        let answer = prompt.ask(&question)?;
        match validate_selection(&answer, accounts.len()) {
            Selection::Chosen(idx) => {
                let account = &accounts[idx];
                tracing::info!(account_id = %account.id, name = %account.name, "Cloud account selected");
                return Ok(account);
            }
            Selection::NotANumber => writeln!(out, "Please enter a valid number.")?,
            Selection::OutOfRange => writeln!(out, "Invalid selection. Please try again.")?,
        }
    }
}

/// List the organization's cloud accounts and return the id the operator picks.
pub async fn select_account<P: Prompt, W: Write>(
    client: &Nc2Client,
    org_id: &str,
    prompt: &mut P,
    out: &mut W,
) -> Result<String, DeployError> {
    let accounts = load_cloud_accounts(client, org_id).await?;
    let account = choose_account(&accounts, prompt, out)?;
    Ok(account.id.clone())
}
