//! Cross-cutting error types for propshot.
//!
//! Parser and generator errors live in their own crates. The binary
//! converges everything into `anyhow`.

use thiserror::Error;

/// Errors raised while deriving naming metadata from the input path.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No component path was supplied.
    #[error("Please provide the path to a component source file")]
    MissingInput,

    /// The path has no file name component (e.g. `..` or `/`).
    #[error("Invalid component path '{0}': no file name")]
    InvalidPath(String),

    /// The path has no extension, so output file names cannot be derived.
    #[error("Invalid component path '{0}': no file extension")]
    MissingExtension(String),
}
