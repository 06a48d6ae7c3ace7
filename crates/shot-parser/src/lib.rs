//! # shot-parser
//!
//! ast-grep-based component resolution for propshot.
//!
//! Parses a single JavaScript/TypeScript component module, locates its
//! component definition (directly exported, or hidden behind a
//! higher-order wrapper) and extracts the declared prop schema from
//! `propTypes`, TypeScript/Flow props types and `defaultProps`.

pub mod error;
pub mod parser;
pub mod resolver;

pub use ast_grep_language::SupportLang;
pub use error::ParserError;
pub use parser::{detect_language, parse_source};
pub use resolver::{Resolution, ResolveFailure, resolve};

/// Detect the language of `file_path` and resolve the component in `source`.
///
/// # Errors
/// Returns [`ParserError::UnsupportedLanguage`] for non-JavaScript-family files.
pub fn resolve_file(file_path: &str, source: &str) -> Result<Resolution, ParserError> {
    let lang = detect_language(file_path)
        .ok_or_else(|| ParserError::UnsupportedLanguage(file_path.to_string()))?;
    Ok(resolve(source, lang))
}
