use serde::Deserialize;
use serde_json::{Map, Value};

use crate::utils::value_to_short_string;

/// Error body returned by the management API: `{"errors": [{...}, ...]}`
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub errors: Vec<Map<String, Value>>,
}

impl ApiErrorBody {
    /// Parse a raw response body, yielding an empty error list for anything
    /// that is not the expected shape.
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// Key/value pairs of the first error entry, in document order.
    pub fn first_entry(&self) -> Vec<(String, String)> {
        self.errors
            .first()
            .map(|entry| {
                entry
                    .iter()
                    .map(|(k, v)| (k.clone(), value_to_short_string(v)))
                    .collect()
            })
            .unwrap_or_default()
    }
}
