/// Error types for the deployment flow
use std::fmt;
use thiserror::Error;

/// Which remote call rejected the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStage {
    ListAccounts,
    CreateCluster,
}

impl fmt::Display for ApiStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiStage::ListAccounts => write!(f, "Failed to fetch cloud accounts"),
            ApiStage::CreateCluster => write!(f, "Cluster creation failed"),
        }
    }
}

/// Errors that end a run
#[derive(Debug, Error)]
pub enum DeployError {
    /// A required environment variable is absent or blank
    #[error("Missing configuration value: {0}")]
    MissingConfig(&'static str),

    /// An environment variable could not be interpreted
    #[error("Invalid configuration value for {name}: {reason}")]
    InvalidConfig { name: &'static str, reason: String },

    /// The HTTP exchange itself failed or returned something unreadable
    #[error("Network error: {0}")]
    Transport(String),

    /// The management API answered with a non-success status
    #[error("{stage}. Status code: {status}")]
    Remote {
        stage: ApiStage,
        status: u16,
        /// Key/value pairs of the first entry in the `errors` array, in order
        detail: Vec<(String, String)>,
        /// Response body as received
        raw: String,
    },

    /// The organization has no cloud accounts to choose from
    #[error("No cloud accounts found for this organization.")]
    NoCloudAccounts,

    /// Console I/O failed while prompting or printing
    #[error("Console I/O failed: {0}")]
    Input(#[from] std::io::Error),
}

impl DeployError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl From<dialoguer::Error> for DeployError {
    fn from(e: dialoguer::Error) -> Self {
        DeployError::Input(crate::prompt::dialoguer_to_io(e))
    }
}

impl From<reqwest::Error> for DeployError {
    fn from(e: reqwest::Error) -> Self {
        DeployError::Transport(e.to_string())
    }
}
