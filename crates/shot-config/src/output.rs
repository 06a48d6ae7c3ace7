//! Output location configuration.

use serde::{Deserialize, Serialize};
use shot_core::NamingConvention;

fn default_tests_dir() -> String {
    "__tests__".to_string()
}

fn default_fixture_suffix() -> String {
    "test_cases".to_string()
}

fn default_test_suffix() -> String {
    "test".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory created beside the component for generated files.
    #[serde(default = "default_tests_dir")]
    pub tests_dir: String,

    /// Fixture file is named `<name>.<fixture_suffix>.<ext>`.
    #[serde(default = "default_fixture_suffix")]
    pub fixture_suffix: String,

    /// Test file is named `<name>.<test_suffix>.<ext>`.
    #[serde(default = "default_test_suffix")]
    pub test_suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            tests_dir: default_tests_dir(),
            fixture_suffix: default_fixture_suffix(),
            test_suffix: default_test_suffix(),
        }
    }
}

impl OutputConfig {
    #[must_use]
    pub fn naming(&self) -> NamingConvention {
        NamingConvention {
            tests_dir: self.tests_dir.clone(),
            fixture_suffix: self.fixture_suffix.clone(),
            test_suffix: self.test_suffix.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_match_core_naming() {
        assert_eq!(OutputConfig::default().naming(), NamingConvention::default());
    }
}
