//! Recognising a single AST node as a component definition.

use ast_grep_core::Node;

use super::helpers::{
    has_render_method, is_class_kind, is_component_base, is_create_class_callee,
    is_function_kind, renders_elements, superclass_name, unparenthesize,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionKind {
    /// ES class extending a component base or declaring `render`.
    Class,
    /// Function or arrow function that renders elements.
    Function,
    /// `createClass({...})` / `createReactClass({...})`.
    CreateClass,
}

/// A component definition located in the tree.
pub struct Definition<'r, D: ast_grep_core::Doc> {
    pub kind: DefinitionKind,
    /// The class, function or `createClass` call node.
    pub node: Node<'r, D>,
    /// Binding the definition is reachable under, used to find
    /// `Name.propTypes = {...}` style assignments.
    pub name: Option<String>,
    /// `variable_declarator` holding the definition, for `FC<Props>` annotations.
    pub declarator: Option<Node<'r, D>>,
}

impl<'r, D: ast_grep_core::Doc> Definition<'r, D> {
    pub fn new(
        kind: DefinitionKind,
        node: Node<'r, D>,
        name: Option<String>,
        declarator: Option<Node<'r, D>>,
    ) -> Self {
        let name = name.or_else(|| node.field("name").map(|n| n.text().to_string()));
        Self {
            kind,
            node,
            name,
            declarator,
        }
    }

    /// Byte offset identifying the definition node.
    pub fn start(&self) -> usize {
        self.node.range().start
    }

    pub fn line(&self) -> usize {
        self.node.start_pos().line() + 1
    }
}

/// Classify `node` as a component definition, if it is one.
///
/// `name` and `declarator` describe the binding the node was reached
/// through; declarations fall back to their own `name` field.
pub fn classify<'r, D: ast_grep_core::Doc>(
    node: Node<'r, D>,
    name: Option<String>,
    declarator: Option<Node<'r, D>>,
) -> Option<Definition<'r, D>> {
    let node = unparenthesize(node);
    let definition_kind = definition_kind(&node)?;

    Some(Definition::new(definition_kind, node, name, declarator))
}

/// What kind of definition `node` is, without unwrapping parentheses.
pub fn definition_kind<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<DefinitionKind> {
    let kind = node.kind();
    let k = kind.as_ref();

    if is_class_kind(k) {
        let extends_component = superclass_name(node).is_some_and(|s| is_component_base(&s));
        (extends_component || has_render_method(node)).then_some(DefinitionKind::Class)
    } else if is_function_kind(k) {
        let body = node.field("body")?;
        renders_elements(&body).then_some(DefinitionKind::Function)
    } else if k == "call_expression" {
        let callee = node.field("function")?;
        is_create_class_callee(&callee.text()).then_some(DefinitionKind::CreateClass)
    } else {
        None
    }
}

/// The spec object passed to a `createClass` call.
pub fn create_class_spec<'r, D: ast_grep_core::Doc>(call: &Node<'r, D>) -> Option<Node<'r, D>> {
    call.field("arguments")?
        .children()
        .map(unparenthesize)
        .find(|c| c.kind().as_ref() == "object")
}
