//! Component resolution: source text -> prop schema.
//!
//! Two strategies run in order:
//!
//! - **Direct**: the module exports a component definition (possibly
//!   through an identifier binding). Exactly one exported definition wins.
//! - **Wrapped**: every component definition in the module, regardless of
//!   exports. Used when the export is hidden behind a higher-order wrapper.
//!   Exactly one definition wins; several are ambiguous.
//!
//! A tree with syntax errors fails both strategies.

mod definitions;
mod direct;
mod helpers;
mod props;
mod wrapped;

#[cfg(test)]
mod tests;

use ast_grep_language::SupportLang;
use shot_core::PropSchema;
use tracing::debug;

use crate::parser::{first_syntax_error_line, parse_component_source};

/// Outcome of resolving a component source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The module's export is the component definition.
    Direct(PropSchema),
    /// The component was found only through the wrapped-definition search.
    Wrapped(PropSchema),
    Failed(ResolveFailure),
}

/// Why no component could be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveFailure {
    /// Neither strategy produced a definition (syntax errors or none found).
    Unparseable { reason: String },
    /// The wrapped search found more than one definition.
    Ambiguous { count: usize },
}

impl std::fmt::Display for ResolveFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unparseable { reason } => write!(f, "{reason}"),
            Self::Ambiguous { count } => write!(f, "{count} component definitions found"),
        }
    }
}

/// Resolve the component defined in `source`.
#[must_use]
pub fn resolve(source: &str, lang: SupportLang) -> Resolution {
    let tree = parse_component_source(source, lang);
    let root = tree.root();

    if let Some(line) = first_syntax_error_line(&root) {
        debug!(line, "component source has syntax errors");
        return Resolution::Failed(ResolveFailure::Unparseable {
            reason: format!("syntax error near line {line}"),
        });
    }

    match direct::find(&root) {
        Ok(def) => {
            debug!(line = def.line(), "resolved exported component definition");
            return Resolution::Direct(props::extract_schema(&root, &def));
        }
        Err(miss) => debug!(%miss, "direct resolution failed, searching wrapped definitions"),
    }

    let mut found = wrapped::find_all(&root);
    debug!(count = found.len(), "wrapped component definitions");
    match found.len() {
        0 => Resolution::Failed(ResolveFailure::Unparseable {
            reason: "no component definition found".to_string(),
        }),
        1 => match found.pop() {
            Some(def) => Resolution::Wrapped(props::extract_schema(&root, &def)),
            None => Resolution::Failed(ResolveFailure::Unparseable {
                reason: "no component definition found".to_string(),
            }),
        },
        count => Resolution::Failed(ResolveFailure::Ambiguous { count }),
    }
}
