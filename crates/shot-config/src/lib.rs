//! # shot-config
//!
//! Layered configuration loading for propshot using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PROPSHOT_*` prefix, `__` as separator)
//! 2. Project-level `.propshot/config.toml`
//! 3. User-level `~/.config/propshot/config.toml`
//! 4. Built-in defaults
//!
//! `.env` files are loaded by the binary before the figment is built.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PROPSHOT_OUTPUT__TESTS_DIR` -> `output.tests_dir`,
//! `PROPSHOT_IMPORTS__SPY_HELPER` -> `imports.spy_helper`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use shot_config::ShotConfig;
//!
//! let config = ShotConfig::load_from(std::path::Path::new(".")).expect("config");
//! println!("tests go to {}", config.output.tests_dir);
//! ```

mod component;
mod error;
mod imports;
mod output;

pub use component::ComponentConfig;
pub use error::ConfigError;
pub use imports::ImportsConfig;
pub use output::OutputConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ShotConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub imports: ImportsConfig,
    #[serde(default)]
    pub component: ComponentConfig,
}

impl ShotConfig {
    /// Load configuration using `project_root` for the project-local layer.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load_from(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = project_root.join(".propshot").join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("PROPSHOT_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("propshot").join("config.toml"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let non_empty = [
            ("output.tests_dir", &self.output.tests_dir),
            ("output.fixture_suffix", &self.output.fixture_suffix),
            ("output.test_suffix", &self.output.test_suffix),
            ("imports.immutable", &self.imports.immutable),
            ("imports.spy_helper", &self.imports.spy_helper),
            ("imports.renderer", &self.imports.renderer),
            ("imports.serializer", &self.imports.serializer),
        ];
        for (field, value) in non_empty {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }

        if self.output.fixture_suffix == self.output.test_suffix {
            return Err(ConfigError::InvalidValue {
                field: "output.fixture_suffix".to_string(),
                reason: "must differ from output.test_suffix".to_string(),
            });
        }

        let accessor = &self.component.wrapped_accessor;
        let is_identifier = accessor
            .chars()
            .next()
            .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
            && accessor
                .chars()
                .all(|c| c.is_alphanumeric() || c == '_' || c == '$');
        if !is_identifier {
            return Err(ConfigError::InvalidValue {
                field: "component.wrapped_accessor".to_string(),
                reason: format!("'{accessor}' is not a valid identifier"),
            });
        }

        Ok(())
    }
}
