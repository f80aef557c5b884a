use serde::{Deserialize, Serialize};

/// Success envelope used by every v2 endpoint: `{"data": ...}`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DataEnvelope<T> {
    pub data: T,
}
