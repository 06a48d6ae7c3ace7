//! Per-invocation component record and classified props.

use crate::paths::ComponentPaths;
use crate::schema::{PropSchema, TypeAnnotation};

/// Which source the classifier used for a prop's type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredType {
    Annotation(TypeAnnotation),
    Validator(String),
    Unspecified,
}

/// A prop after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedProp {
    pub name: String,
    pub declared: DeclaredType,
    /// Type name used for the table lookup (`string`, `Immutable.List`, ...).
    pub effective_type: String,
    pub required: bool,
    /// Fixture literal, `None` when the type has no mapping.
    pub value: Option<String>,
    pub diagnostic: Option<String>,
}

impl ClassifiedProp {
    /// The literal as emitted: unmapped types become `null`.
    #[must_use]
    pub fn value_literal(&self) -> &str {
        self.value.as_deref().unwrap_or("null")
    }
}

/// Everything known about the target component for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRecord {
    pub paths: ComponentPaths,
    pub schema: PropSchema,
    /// The component was only found through the wrapped-definition search.
    pub is_wrapped: bool,
}

impl ComponentRecord {
    #[must_use]
    pub const fn new(paths: ComponentPaths, schema: PropSchema, is_wrapped: bool) -> Self {
        Self {
            paths,
            schema,
            is_wrapped,
        }
    }

    #[must_use]
    pub fn identifier_name(&self) -> &str {
        &self.paths.identifier_name
    }
}
