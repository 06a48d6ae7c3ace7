//! # shot-core
//!
//! Core data model shared by every propshot crate:
//!
//! - [`ComponentPaths`]: naming metadata derived from the input path
//! - [`PropSchema`]: ordered prop declarations extracted from source
//! - [`ClassifiedProp`]: a prop with its chosen fixture literal
//! - [`ComponentRecord`]: everything known about one component per run
//!
//! All entities live for a single invocation. Nothing here touches the
//! filesystem; paths are derived lexically.

pub mod errors;
pub mod paths;
pub mod record;
pub mod schema;

pub use errors::CoreError;
pub use paths::{ComponentPaths, NamingConvention};
pub use record::{ClassifiedProp, ComponentRecord, DeclaredType};
pub use schema::{PropDeclaration, PropSchema, TypeAnnotation};
