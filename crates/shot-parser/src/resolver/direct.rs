//! Direct strategy: the module's export is itself a component definition.

use ast_grep_core::Node;
use tracing::debug;

use super::definitions::{Definition, classify};
use super::helpers::{top_level_declarations, unparenthesize};

/// Bound on identifier-to-binding hops (`export default A; const A = B; ...`).
const MAX_BINDING_HOPS: usize = 8;

/// Why the direct strategy did not produce a definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectMiss {
    #[error("no exported component definition")]
    NoExportedDefinition,
    #[error("{0} exported component definitions")]
    MultipleExportedDefinitions(usize),
}

/// Find the single exported component definition of a module.
pub fn find<'r, D: ast_grep_core::Doc>(
    root: &Node<'r, D>,
) -> Result<Definition<'r, D>, DirectMiss> {
    let mut found: Vec<Definition<'r, D>> = Vec::new();

    for stmt in root.children() {
        let kind = stmt.kind();
        let candidates = match kind.as_ref() {
            "export_statement" => exported_from_statement(root, &stmt),
            "expression_statement" => exported_from_commonjs(root, &stmt),
            _ => Vec::new(),
        };
        for def in candidates {
            if !found.iter().any(|f| f.start() == def.start()) {
                found.push(def);
            }
        }
    }

    debug!(count = found.len(), "exported component definitions");
    match found.len() {
        0 => Err(DirectMiss::NoExportedDefinition),
        1 => found.pop().ok_or(DirectMiss::NoExportedDefinition),
        n => Err(DirectMiss::MultipleExportedDefinitions(n)),
    }
}

/// `export default ...`, `export class/function/const ...`, `export { A }`.
fn exported_from_statement<'r, D: ast_grep_core::Doc>(
    root: &Node<'r, D>,
    stmt: &Node<'r, D>,
) -> Vec<Definition<'r, D>> {
    if let Some(decl) = stmt.field("declaration") {
        return declared_definitions(root, decl);
    }
    if let Some(value) = stmt.field("value") {
        return resolve_expression(root, value, None, None, 0)
            .into_iter()
            .collect();
    }
    // `export { A } from './a'` re-exports another module.
    if stmt.field("source").is_some() {
        return Vec::new();
    }

    let mut out = Vec::new();
    for clause in stmt
        .children()
        .filter(|c| c.kind().as_ref() == "export_clause")
    {
        for spec in clause
            .children()
            .filter(|c| c.kind().as_ref() == "export_specifier")
        {
            if let Some(name) = spec.field("name")
                && let Some(def) = resolve_identifier(root, &name.text(), 0)
            {
                out.push(def);
            }
        }
    }
    out
}

/// `module.exports = X` and `exports.default = X`.
fn exported_from_commonjs<'r, D: ast_grep_core::Doc>(
    root: &Node<'r, D>,
    stmt: &Node<'r, D>,
) -> Vec<Definition<'r, D>> {
    let Some(assignment) = stmt
        .children()
        .find(|c| c.kind().as_ref() == "assignment_expression")
    else {
        return Vec::new();
    };
    let is_export_target = assignment
        .field("left")
        .is_some_and(|left| matches!(left.text().as_ref(), "module.exports" | "exports.default"));
    if !is_export_target {
        return Vec::new();
    }
    assignment
        .field("right")
        .and_then(|right| resolve_expression(root, right, None, None, 0))
        .into_iter()
        .collect()
}

/// Definitions introduced by an exported declaration.
fn declared_definitions<'r, D: ast_grep_core::Doc>(
    root: &Node<'r, D>,
    decl: Node<'r, D>,
) -> Vec<Definition<'r, D>> {
    let kind = decl.kind().to_string();
    match kind.as_str() {
        "lexical_declaration" | "variable_declaration" => decl
            .children()
            .filter(|c| c.kind().as_ref() == "variable_declarator")
            .filter_map(|declarator| {
                let name = declarator.field("name")?.text().to_string();
                let value = declarator.field("value")?;
                resolve_expression(root, value, Some(name), Some(declarator), 0)
            })
            .collect(),
        _ => classify(decl, None, None).into_iter().collect(),
    }
}

fn resolve_expression<'r, D: ast_grep_core::Doc>(
    root: &Node<'r, D>,
    expr: Node<'r, D>,
    name: Option<String>,
    declarator: Option<Node<'r, D>>,
    hops: usize,
) -> Option<Definition<'r, D>> {
    let expr = unparenthesize(expr);
    if expr.kind().as_ref() == "identifier" {
        let target = expr.text().to_string();
        return resolve_identifier(root, &target, hops + 1);
    }
    classify(expr, name, declarator)
}

/// Follow an identifier to its top-level class, function or variable binding.
fn resolve_identifier<'r, D: ast_grep_core::Doc>(
    root: &Node<'r, D>,
    target: &str,
    hops: usize,
) -> Option<Definition<'r, D>> {
    if hops > MAX_BINDING_HOPS {
        debug!(target, "gave up following identifier bindings");
        return None;
    }

    for decl in top_level_declarations(root) {
        let kind = decl.kind().to_string();
        match kind.as_str() {
            "lexical_declaration" | "variable_declaration" => {
                let declarator = decl.children().find(|c| {
                    c.kind().as_ref() == "variable_declarator"
                        && c.field("name").is_some_and(|n| n.text() == target)
                });
                if let Some(declarator) = declarator {
                    let value = declarator.field("value")?;
                    return resolve_expression(
                        root,
                        value,
                        Some(target.to_string()),
                        Some(declarator),
                        hops,
                    );
                }
            }
            _ => {
                if decl.field("name").is_some_and(|n| n.text() == target) {
                    return classify(decl, Some(target.to_string()), None);
                }
            }
        }
    }
    None
}
