//! Parser error types for shot-parser.

/// Errors that can occur before component resolution starts.
///
/// Resolution outcomes themselves (unparseable, ambiguous) are reported
/// through [`crate::Resolution`], not as errors.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),
}
