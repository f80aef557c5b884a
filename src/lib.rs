//! Provision an NC2 cluster into an existing AWS VPC through the NC2
//! management API.
//!
//! A run reads [`config::Settings`] from the environment, lets the operator
//! pick a cloud account, builds a [`models::ClusterRequest`] and, after
//! confirmation, submits it with a single POST.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod prompt;
pub mod report;
pub mod services;
pub mod utils;

pub use config::Settings;
pub use error::{ApiStage, DeployError};
pub use services::{build_payload, run, Outcome};
