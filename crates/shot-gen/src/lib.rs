//! # shot-gen
//!
//! The pure propshot pipeline: resolve the component, classify its props,
//! derive scenarios and render the fixture and snapshot-test modules.
//!
//! Nothing here performs I/O; the caller reads the source and writes the
//! returned [`Artifacts`].

pub mod classifier;
pub mod error;
pub mod fixture;
mod js;
pub mod scenario;
pub mod table;
pub mod test_module;

use std::path::Path;

use shot_config::ShotConfig;
use shot_core::{ComponentPaths, ComponentRecord};
use shot_parser::{Resolution, ResolveFailure};
use tracing::debug;

pub use classifier::{ClassifiedProps, classify_schema};
pub use error::GenerateError;
pub use scenario::{Scenario, ScenarioSet};

/// Both generated modules plus the record they were derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub record: ComponentRecord,
    pub fixture_text: String,
    pub test_text: String,
}

/// Run the full pipeline for the component at `path` with contents `source`.
///
/// # Errors
/// Fails when the path cannot be named, the language is unsupported, or the
/// component cannot be resolved unambiguously.
pub fn generate(path: &Path, source: &str, config: &ShotConfig) -> Result<Artifacts, GenerateError> {
    let paths = ComponentPaths::resolve(path, &config.output.naming())?;
    let display = paths.source_path.display().to_string();

    let (schema, is_wrapped) = match shot_parser::resolve_file(&display, source)? {
        Resolution::Direct(schema) => (schema, false),
        Resolution::Wrapped(schema) => (schema, true),
        Resolution::Failed(ResolveFailure::Unparseable { reason }) => {
            return Err(GenerateError::Unparseable {
                path: display,
                reason,
            });
        }
        Resolution::Failed(ResolveFailure::Ambiguous { count }) => {
            return Err(GenerateError::Ambiguous {
                path: display,
                count,
            });
        }
    };

    let record = ComponentRecord::new(paths, schema, is_wrapped);
    let set = ScenarioSet::from_classified(classify_schema(&record.schema));
    debug!(
        component = record.identifier_name(),
        wrapped = record.is_wrapped,
        required = set.required.len(),
        scenarios = ?set.names().collect::<Vec<_>>(),
        "classified component props"
    );

    let fixture_text = fixture::emit_fixture(&record, &set, config);
    let test_text = test_module::emit_test_module(&record, &set, config);
    Ok(Artifacts {
        record,
        fixture_text,
        test_text,
    })
}
