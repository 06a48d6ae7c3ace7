//! Module specifiers written into the generated files.

use serde::{Deserialize, Serialize};

fn default_immutable() -> String {
    "immutable".to_string()
}

fn default_spy_helper() -> String {
    "test/safeSpy".to_string()
}

fn default_renderer() -> String {
    "enzyme".to_string()
}

fn default_serializer() -> String {
    "enzyme-to-json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImportsConfig {
    /// Immutable-collection library, imported as `Immutable`.
    #[serde(default = "default_immutable")]
    pub immutable: String,

    /// Spy helper path relative to the project root, imported as `safeSpy`.
    #[serde(default = "default_spy_helper")]
    pub spy_helper: String,

    /// Module providing `shallow`.
    #[serde(default = "default_renderer")]
    pub renderer: String,

    /// Module whose default export (`toJson`) serializes a render.
    #[serde(default = "default_serializer")]
    pub serializer: String,
}

impl Default for ImportsConfig {
    fn default() -> Self {
        Self {
            immutable: default_immutable(),
            spy_helper: default_spy_helper(),
            renderer: default_renderer(),
            serializer: default_serializer(),
        }
    }
}
