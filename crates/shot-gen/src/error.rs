//! Generation error types for shot-gen.

use shot_core::CoreError;
use shot_parser::ParserError;

/// Terminal failures of the generation pipeline.
///
/// Unclassifiable prop types are not errors; they degrade to `null`.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Parser(#[from] ParserError),

    /// Neither resolution strategy produced a component definition.
    #[error("{path}: could not analyze component definition ({reason})")]
    Unparseable { path: String, reason: String },

    /// The wrapped-definition search found several candidates.
    #[error(
        "{path}: multiple component definitions found ({count}); not generating tests"
    )]
    Ambiguous { path: String, count: usize },
}
