//! Component reference configuration.

use serde::{Deserialize, Serialize};

fn default_wrapped_accessor() -> String {
    "WrappedComponent".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComponentConfig {
    /// Static property exposing the inner component of a wrapped export.
    #[serde(default = "default_wrapped_accessor")]
    pub wrapped_accessor: String,
}

impl Default for ComponentConfig {
    fn default() -> Self {
        Self {
            wrapped_accessor: default_wrapped_accessor(),
        }
    }
}
