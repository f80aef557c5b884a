// Atomic API modules
pub mod client;
pub mod cloud_accounts;
pub mod clusters;

// Re-export commonly used functions
pub use client::{set_trace, trace_enabled, ApiResponse, Nc2Client};
pub use cloud_accounts::load_cloud_accounts;
pub use clusters::create_cluster;
