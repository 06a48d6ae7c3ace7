//! Node-level helpers shared by the resolver strategies.

use ast_grep_core::Node;

// ── Naming conventions ─────────────────────────────────────────────

/// Component: starts with uppercase letter.
pub(super) fn is_component_name(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// `Component`, `PureComponent`, `React.Component`, `preact.Component`, ...
pub(super) fn is_component_base(superclass: &str) -> bool {
    let last = superclass.rsplit('.').next().unwrap_or(superclass);
    last == "Component" || last == "PureComponent"
}

/// `createClass`, `React.createClass`, `createReactClass`.
pub(super) fn is_create_class_callee(callee: &str) -> bool {
    let last = callee.rsplit('.').next().unwrap_or(callee);
    last == "createClass" || last == "createReactClass"
}

/// Strip one layer of matching quotes from a string-literal key.
pub(super) fn unquote(text: &str) -> &str {
    for quote in ['\'', '"', '`'] {
        if let Some(inner) = text
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    text
}

// ── Render detection ───────────────────────────────────────────────

/// JSX anywhere below `node`, or a `createElement(...)` call.
pub(super) fn renders_elements<D: ast_grep_core::Doc>(node: &Node<D>) -> bool {
    let kind = node.kind();
    let k = kind.as_ref();
    if k == "jsx_element" || k == "jsx_self_closing_element" || k == "jsx_fragment" {
        return true;
    }
    if k == "call_expression"
        && let Some(callee) = node.field("function")
        && callee.text().rsplit('.').next() == Some("createElement")
    {
        return true;
    }
    node.children().any(|c| renders_elements(&c))
}

// ── Class shape ────────────────────────────────────────────────────

pub(super) fn is_class_kind(kind: &str) -> bool {
    matches!(kind, "class_declaration" | "class" | "abstract_class_declaration")
}

pub(super) fn is_function_kind(kind: &str) -> bool {
    matches!(
        kind,
        "function_declaration" | "function_expression" | "function" | "arrow_function"
    )
}

/// Superclass expression without type arguments: `React.Component`.
///
/// Works for both the JavaScript grammar (`class_heritage` holds the
/// expression) and the TypeScript grammar (`extends_clause` inside it).
pub(super) fn superclass_name<D: ast_grep_core::Doc>(class: &Node<D>) -> Option<String> {
    let heritage = class
        .children()
        .find(|c| c.kind().as_ref() == "class_heritage")?;
    let text = heritage.text();
    let rest = text.trim().strip_prefix("extends")?.trim_start();
    let end = rest
        .find(|c: char| c == '<' || c == '{' || c == '(' || c.is_whitespace())
        .unwrap_or(rest.len());
    let name = &rest[..end];
    (!name.is_empty()).then(|| name.to_string())
}

/// First type argument of the superclass: `Props` in `Component<Props, State>`.
pub(super) fn superclass_type_argument<'r, D: ast_grep_core::Doc>(
    class: &Node<'r, D>,
) -> Option<Node<'r, D>> {
    let heritage = class
        .children()
        .find(|c| c.kind().as_ref() == "class_heritage")?;
    let args = find_descendant(&heritage, "type_arguments")?;
    first_type_argument(&args)
}

/// Methods, fields and accessors declared directly in a class body.
pub(super) fn class_members<'r, D: ast_grep_core::Doc>(class: &Node<'r, D>) -> Vec<Node<'r, D>> {
    class
        .field("body")
        .map(|body| body.children().collect())
        .unwrap_or_default()
}

/// Name of a class member across grammars (`property` in JS, `name` in TS).
pub(super) fn member_name<D: ast_grep_core::Doc>(member: &Node<D>) -> Option<String> {
    member
        .field("name")
        .or_else(|| member.field("property"))
        .map(|n| n.text().to_string())
}

pub(super) fn is_static_member<D: ast_grep_core::Doc>(member: &Node<D>) -> bool {
    member.children().any(|c| c.kind().as_ref() == "static")
}

pub(super) fn has_render_method<D: ast_grep_core::Doc>(class: &Node<D>) -> bool {
    class_members(class).iter().any(|m| {
        m.kind().as_ref() == "method_definition" && member_name(m).as_deref() == Some("render")
    })
}

// ── Types ──────────────────────────────────────────────────────────

/// The type node held by a `type_annotation` (skipping the `:` token).
pub(super) fn annotation_type<'r, D: ast_grep_core::Doc>(
    annotation: Node<'r, D>,
) -> Option<Node<'r, D>> {
    if annotation.kind().as_ref() != "type_annotation" {
        return Some(annotation);
    }
    annotation.children().find(|c| c.kind().as_ref() != ":")
}

/// First real child of a `type_arguments` node.
pub(super) fn first_type_argument<'r, D: ast_grep_core::Doc>(
    args: &Node<'r, D>,
) -> Option<Node<'r, D>> {
    args.children()
        .find(|c| !matches!(c.kind().as_ref(), "<" | ">" | ","))
}

/// Source text of a type annotation, without the leading `:`.
pub(super) fn annotation_text<D: ast_grep_core::Doc>(annotation: &Node<D>) -> String {
    annotation
        .text()
        .trim()
        .trim_start_matches(':')
        .trim()
        .to_string()
}

// ── Generic walking ────────────────────────────────────────────────

pub(super) fn find_descendant<'r, D: ast_grep_core::Doc>(
    node: &Node<'r, D>,
    kind: &str,
) -> Option<Node<'r, D>> {
    for child in node.children() {
        if child.kind().as_ref() == kind {
            return Some(child);
        }
        if let Some(found) = find_descendant(&child, kind) {
            return Some(found);
        }
    }
    None
}

/// Skip any number of wrapping parentheses.
pub(super) fn unparenthesize<'r, D: ast_grep_core::Doc>(node: Node<'r, D>) -> Node<'r, D> {
    let mut current = node;
    while current.kind().as_ref() == "parenthesized_expression" {
        let Some(inner) = current
            .children()
            .find(|c| !matches!(c.kind().as_ref(), "(" | ")"))
        else {
            break;
        };
        current = inner;
    }
    current
}

/// Top-level statements, looking through `export` wrappers.
pub(super) fn top_level_declarations<'r, D: ast_grep_core::Doc>(
    root: &Node<'r, D>,
) -> Vec<Node<'r, D>> {
    let mut out = Vec::new();
    for child in root.children() {
        if child.kind().as_ref() == "export_statement" {
            if let Some(decl) = child.field("declaration") {
                out.push(decl);
            }
        } else {
            out.push(child);
        }
    }
    out
}

/// `object` literal returned by a method like `getDefaultProps() { return {...} }`.
pub(super) fn returned_object<'r, D: ast_grep_core::Doc>(
    method: &Node<'r, D>,
) -> Option<Node<'r, D>> {
    let body = method.field("body")?;
    let ret = body
        .children()
        .find(|c| c.kind().as_ref() == "return_statement")?;
    ret.children()
        .map(unparenthesize)
        .find(|c| c.kind().as_ref() == "object")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_names() {
        assert!(is_component_name("UserCard"));
        assert!(!is_component_name("userCard"));
        assert!(!is_component_name(""));
    }

    #[test]
    fn component_bases() {
        assert!(is_component_base("Component"));
        assert!(is_component_base("React.PureComponent"));
        assert!(!is_component_base("EventEmitter"));
    }

    #[test]
    fn create_class_callees() {
        assert!(is_create_class_callee("React.createClass"));
        assert!(is_create_class_callee("createReactClass"));
        assert!(!is_create_class_callee("createStore"));
    }

    #[test]
    fn unquote_strips_one_layer() {
        assert_eq!(unquote("'data-id'"), "data-id");
        assert_eq!(unquote("\"aria-label\""), "aria-label");
        assert_eq!(unquote("plain"), "plain");
        assert_eq!(unquote("'"), "'");
    }
}
