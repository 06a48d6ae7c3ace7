//! Property schema extracted from a component definition.

use indexmap::IndexMap;
use indexmap::map::Entry;

/// A static type annotation (TypeScript or Flow) on a single prop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAnnotation {
    /// Source text of the type, e.g. `string | null` or `Immutable.List<Item>`.
    pub raw: String,
    /// `false` when the member was declared with `?:`.
    pub required: bool,
}

impl TypeAnnotation {
    pub fn new(raw: impl Into<String>, required: bool) -> Self {
        Self {
            raw: raw.into(),
            required,
        }
    }
}

/// Everything the source says about one prop.
///
/// A prop may be described by several sources at once (e.g. both
/// `propTypes` and a `Props` type); the classifier decides precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropDeclaration {
    pub annotation: Option<TypeAnnotation>,
    /// Source text of the runtime validator, e.g. `PropTypes.string.isRequired`.
    pub validator: Option<String>,
    /// The prop appears in `defaultProps`.
    pub has_default: bool,
}

/// Ordered mapping from prop name to its declaration.
///
/// Iteration follows first-seen order so generated output is stable for a
/// given source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropSchema {
    props: IndexMap<String, PropDeclaration>,
}

impl PropSchema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.props.len()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropDeclaration> {
        self.props.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropDeclaration)> {
        self.props.iter().map(|(name, decl)| (name.as_str(), decl))
    }

    /// Record a runtime validator. The first validator seen for a name wins.
    pub fn add_validator(&mut self, name: impl Into<String>, raw: impl Into<String>) {
        let decl = self.entry(name.into());
        if decl.validator.is_none() {
            decl.validator = Some(raw.into());
        }
    }

    /// Record a static annotation. The first annotation seen for a name wins.
    pub fn add_annotation(&mut self, name: impl Into<String>, annotation: TypeAnnotation) {
        let decl = self.entry(name.into());
        if decl.annotation.is_none() {
            decl.annotation = Some(annotation);
        }
    }

    /// Mark a prop as having a default value, declaring it if unseen.
    pub fn add_default(&mut self, name: impl Into<String>) {
        self.entry(name.into()).has_default = true;
    }

    fn entry(&mut self, name: String) -> &mut PropDeclaration {
        match self.props.entry(name) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(PropDeclaration::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn keeps_first_seen_order() {
        let mut schema = PropSchema::new();
        schema.add_validator("zeta", "PropTypes.string");
        schema.add_validator("alpha", "PropTypes.bool");
        schema.add_annotation("zeta", TypeAnnotation::new("string", true));
        schema.add_default("middle");

        let names: Vec<_> = schema.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["zeta", "alpha", "middle"]);
    }

    #[test]
    fn merges_sources_for_one_prop() {
        let mut schema = PropSchema::new();
        schema.add_validator("name", "PropTypes.string.isRequired");
        schema.add_annotation("name", TypeAnnotation::new("string", true));
        schema.add_default("name");

        let decl = schema.get("name").expect("declared");
        assert_eq!(decl.validator.as_deref(), Some("PropTypes.string.isRequired"));
        assert_eq!(decl.annotation, Some(TypeAnnotation::new("string", true)));
        assert!(decl.has_default);
        assert_eq!(schema.len(), 1);
    }

    #[test]
    fn first_validator_wins() {
        let mut schema = PropSchema::new();
        schema.add_validator("name", "PropTypes.string");
        schema.add_validator("name", "PropTypes.number");
        assert_eq!(
            schema.get("name").and_then(|d| d.validator.as_deref()),
            Some("PropTypes.string")
        );
    }
}
