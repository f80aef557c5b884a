use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CloudAccount {
    pub id: String,
    pub name: String,
    pub cloud_provider: String,
    pub status: String,
}
