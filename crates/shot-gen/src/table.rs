//! Fixed mapping from effective type name to fixture literal.

/// Literal emitted for function-like props.
pub const SPY_LITERAL: &str = "safeSpy()";

/// `(type name, literal)` pairs, keyed case-sensitively and sorted by key.
pub const CLASSIFICATION_TABLE: &[(&str, &str)] = &[
    ("Function", SPY_LITERAL),
    ("Immutable.List", "Immutable.List()"),
    ("Immutable.Map", "Immutable.Map()"),
    ("any", "''"),
    ("bool", "true"),
    ("boolean", "true"),
    ("func", SPY_LITERAL),
    ("function", SPY_LITERAL),
    ("number", "0"),
    ("string", "''"),
    ("union", "''"),
    ("unknown", "Immutable.Map()"),
];

/// Fixture literal for `type_name`, or `None` when the type is unmapped.
#[must_use]
pub fn default_literal(type_name: &str) -> Option<&'static str> {
    CLASSIFICATION_TABLE
        .binary_search_by(|(key, _)| (*key).cmp(type_name))
        .ok()
        .map(|idx| CLASSIFICATION_TABLE[idx].1)
}
