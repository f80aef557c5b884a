pub mod account_service;
pub mod deploy_service;
pub mod payload_service;

// Re-export commonly used functions
pub use account_service::{choose_account, select_account, validate_selection, Selection};
pub use deploy_service::{run, Outcome};
pub use payload_service::build_payload;
