//! Wrapped strategy: every component definition anywhere in the module.
//!
//! Sees through higher-order wrappers such as
//! `export default connect(mapState)(UserCard)` by ignoring exports
//! entirely. Bodies of found definitions are not searched further.

use ast_grep_core::Node;

use super::definitions::{Definition, DefinitionKind, definition_kind};
use super::helpers::{is_class_kind, is_component_name, is_function_kind, unparenthesize};

/// All component definitions in source order.
pub fn find_all<'r, D: ast_grep_core::Doc>(root: &Node<'r, D>) -> Vec<Definition<'r, D>> {
    let mut out = Vec::new();
    for child in root.children() {
        collect(child, &mut out);
    }
    out
}

fn collect<'r, D: ast_grep_core::Doc>(node: Node<'r, D>, out: &mut Vec<Definition<'r, D>>) {
    match candidate(node) {
        Ok(def) => out.push(def),
        Err(node) => {
            for child in node.children() {
                collect(child, out);
            }
        }
    }
}

/// The definition rooted at `node`, or the node back when there is none.
fn candidate<'r, D: ast_grep_core::Doc>(
    node: Node<'r, D>,
) -> Result<Definition<'r, D>, Node<'r, D>> {
    let kind = node.kind().to_string();
    let k = kind.as_str();

    if k == "variable_declarator" {
        let name = node.field("name").map(|n| n.text().to_string());
        let value = node.field("value").map(unparenthesize);
        if let (Some(name), Some(value)) = (name, value)
            && let Some(def_kind) = definition_kind(&value)
            && (def_kind != DefinitionKind::Function || is_component_name(&name))
        {
            return Ok(Definition::new(def_kind, value, Some(name), Some(node)));
        }
        return Err(node);
    }

    let accepted = if is_class_kind(k) || k == "call_expression" {
        true
    } else if k == "function_declaration" {
        node.field("name")
            .is_some_and(|n| is_component_name(&n.text()))
    } else if is_function_kind(k) {
        // Anonymous functions only count when handed straight to a wrapper call.
        node.parent()
            .is_some_and(|p| p.kind().as_ref() == "arguments")
    } else {
        false
    };

    match accepted.then(|| definition_kind(&node)).flatten() {
        Some(def_kind) => Ok(Definition::new(def_kind, node, None, None)),
        None => Err(node),
    }
}
