//! Prop schema extraction for a located component definition.
//!
//! Sources are merged in this order so the schema keeps a stable
//! first-seen order:
//! 1. runtime validators (`propTypes`)
//! 2. static annotations (TypeScript / Flow props types)
//! 3. `defaultProps` keys

use ast_grep_core::Node;
use shot_core::{PropSchema, TypeAnnotation};
use tracing::{debug, warn};

use super::definitions::{Definition, DefinitionKind, create_class_spec};
use super::helpers::{
    annotation_text, annotation_type, class_members, first_type_argument, is_static_member,
    member_name, returned_object, superclass_type_argument, top_level_declarations, unparenthesize,
    unquote,
};

/// Bound on alias-to-alias hops while resolving a props type.
const MAX_TYPE_HOPS: usize = 8;

const PROP_TYPES: &str = "propTypes";
const DEFAULT_PROPS: &str = "defaultProps";

/// Build the prop schema of `def`.
pub fn extract_schema<'r, D: ast_grep_core::Doc>(
    root: &Node<'r, D>,
    def: &Definition<'r, D>,
) -> PropSchema {
    let mut schema = PropSchema::new();

    for object in static_objects(root, def, PROP_TYPES) {
        for (name, value) in object_entries(&object) {
            schema.add_validator(name, value);
        }
    }

    if let Some(props_type) = props_type_node(def) {
        collect_type_members(root, &props_type, &mut schema, 0);
    }

    for object in static_objects(root, def, DEFAULT_PROPS) {
        for (name, _) in object_entries(&object) {
            schema.add_default(name);
        }
    }

    debug!(
        component = def.name.as_deref().unwrap_or("<anonymous>"),
        line = def.line(),
        props = schema.len(),
        "extracted prop schema"
    );
    schema
}

// ── propTypes / defaultProps objects ───────────────────────────────

/// Every object literal attached to the component under `property`.
fn static_objects<'r, D: ast_grep_core::Doc>(
    root: &Node<'r, D>,
    def: &Definition<'r, D>,
    property: &str,
) -> Vec<Node<'r, D>> {
    let mut out = Vec::new();

    match def.kind {
        DefinitionKind::Class => {
            for member in class_members(&def.node) {
                if member_name(&member).as_deref() != Some(property) {
                    continue;
                }
                let kind = member.kind().to_string();
                match kind.as_str() {
                    // `static propTypes = {...}`
                    "field_definition" | "public_field_definition" if is_static_member(&member) => {
                        if let Some(value) = member.field("value").map(unparenthesize)
                            && value.kind().as_ref() == "object"
                        {
                            out.push(value);
                        }
                    }
                    // `static get propTypes() { return {...}; }`
                    "method_definition" if is_static_member(&member) => {
                        out.extend(returned_object(&member));
                    }
                    _ => {}
                }
            }
        }
        DefinitionKind::CreateClass => {
            if let Some(spec) = create_class_spec(&def.node) {
                out.extend(create_class_objects(&spec, property));
            }
        }
        DefinitionKind::Function => {}
    }

    if let Some(name) = def.name.as_deref() {
        out.extend(assigned_objects(root, name, property));
    }
    out
}

/// `propTypes: {...}` or `getDefaultProps() { return {...} }` in a createClass spec.
fn create_class_objects<'r, D: ast_grep_core::Doc>(
    spec: &Node<'r, D>,
    property: &str,
) -> Vec<Node<'r, D>> {
    let mut out = Vec::new();
    for entry in spec.children() {
        let kind = entry.kind().to_string();
        match kind.as_str() {
            "pair" => {
                let key = entry.field("key").map(|k| unquote(&k.text()).to_string());
                let Some(value) = entry.field("value").map(unparenthesize) else {
                    continue;
                };
                if key.as_deref() == Some(property) && value.kind().as_ref() == "object" {
                    out.push(value);
                } else if property == DEFAULT_PROPS && key.as_deref() == Some("getDefaultProps") {
                    // `getDefaultProps: function () { return {...}; }`
                    out.extend(returned_object(&value));
                }
            }
            "method_definition" if property == DEFAULT_PROPS => {
                if member_name(&entry).as_deref() == Some("getDefaultProps") {
                    out.extend(returned_object(&entry));
                }
            }
            _ => {}
        }
    }
    out
}

/// `Name.propTypes = {...};` at the top level of the module.
fn assigned_objects<'r, D: ast_grep_core::Doc>(
    root: &Node<'r, D>,
    name: &str,
    property: &str,
) -> Vec<Node<'r, D>> {
    let mut out = Vec::new();
    for stmt in root.children() {
        if stmt.kind().as_ref() != "expression_statement" {
            continue;
        }
        let Some(assignment) = stmt
            .children()
            .find(|c| c.kind().as_ref() == "assignment_expression")
        else {
            continue;
        };
        let targets_component = assignment.field("left").is_some_and(|left| {
            left.kind().as_ref() == "member_expression"
                && left.field("object").is_some_and(|o| o.text() == name)
                && left.field("property").is_some_and(|p| p.text() == property)
        });
        if targets_component
            && let Some(value) = assignment.field("right").map(unparenthesize)
            && value.kind().as_ref() == "object"
        {
            out.push(value);
        }
    }
    out
}

/// `(name, value text)` for each named entry of an object literal.
fn object_entries<D: ast_grep_core::Doc>(object: &Node<D>) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for entry in object.children() {
        let kind = entry.kind().to_string();
        match kind.as_str() {
            "pair" => {
                let Some(key) = entry.field("key") else {
                    continue;
                };
                if key.kind().as_ref() == "computed_property_name" {
                    warn!(key = %key.text(), "skipping computed prop name");
                    continue;
                }
                let value = entry
                    .field("value")
                    .map(|v| v.text().to_string())
                    .unwrap_or_default();
                out.push((unquote(&key.text()).to_string(), value));
            }
            "shorthand_property_identifier" => {
                let name = entry.text().to_string();
                out.push((name.clone(), name));
            }
            "spread_element" => {
                debug!(spread = %entry.text(), "skipping spread in prop object");
            }
            _ => {}
        }
    }
    out
}

// ── Static annotations ─────────────────────────────────────────────

/// The type node describing the component's props, if annotated.
fn props_type_node<'r, D: ast_grep_core::Doc>(def: &Definition<'r, D>) -> Option<Node<'r, D>> {
    match def.kind {
        DefinitionKind::Function => {
            first_parameter_type(&def.node).or_else(|| declarator_type_argument(def))
        }
        DefinitionKind::Class => superclass_type_argument(&def.node).or_else(|| {
            // Flow: `props: Props;` declared on the class body.
            class_members(&def.node)
                .into_iter()
                .find(|m| {
                    !is_static_member(m)
                        && m.field("type").is_some()
                        && member_name(m).as_deref() == Some("props")
                })
                .and_then(|m| m.field("type"))
                .and_then(annotation_type)
        }),
        DefinitionKind::CreateClass => None,
    }
}

/// Type of the first parameter: `(props: Props)` or `({ a, b }: Props)`.
fn first_parameter_type<'r, D: ast_grep_core::Doc>(func: &Node<'r, D>) -> Option<Node<'r, D>> {
    let params = func.field("parameters")?;
    let first = params
        .children()
        .find(|c| !matches!(c.kind().as_ref(), "(" | ")" | ","))?;
    first.field("type").and_then(annotation_type)
}

/// `Props` in `const Card: React.FC<Props> = ...`.
fn declarator_type_argument<'r, D: ast_grep_core::Doc>(
    def: &Definition<'r, D>,
) -> Option<Node<'r, D>> {
    let annotated = def.declarator.as_ref()?.field("type").and_then(annotation_type)?;
    let args = annotated
        .children()
        .find(|c| c.kind().as_ref() == "type_arguments")?;
    first_type_argument(&args)
}

/// Add every member of a props type to the schema.
fn collect_type_members<D: ast_grep_core::Doc>(
    root: &Node<D>,
    type_node: &Node<D>,
    schema: &mut PropSchema,
    hops: usize,
) {
    if hops > MAX_TYPE_HOPS {
        debug!("gave up following props type aliases");
        return;
    }

    let kind = type_node.kind().to_string();
    match kind.as_str() {
        "object_type" | "interface_body" => {
            for member in type_node.children() {
                if member.kind().as_ref() == "property_signature" {
                    add_property_signature(&member, schema);
                }
            }
        }
        "type_identifier" | "identifier" => {
            let name = type_node.text().to_string();
            match find_type_body(root, &name) {
                Some(body) => collect_type_members(root, &body, schema, hops + 1),
                None => debug!(type_name = %name, "props type is not declared in this module"),
            }
        }
        "intersection_type" | "parenthesized_type" => {
            for part in type_node.children() {
                collect_type_members(root, &part, schema, hops + 1);
            }
        }
        // `Readonly<Props>` and friends wrap the real props type.
        "generic_type" => {
            if let Some(args) = type_node.field("type_arguments")
                && let Some(inner) = first_type_argument(&args)
            {
                collect_type_members(root, &inner, schema, hops + 1);
            }
        }
        "&" | "(" | ")" => {}
        other => debug!(kind = other, "unsupported props type"),
    }
}

fn add_property_signature<D: ast_grep_core::Doc>(member: &Node<D>, schema: &mut PropSchema) {
    let Some(name) = member.field("name") else {
        return;
    };
    let optional = member.children().any(|c| c.kind().as_ref() == "?");
    let raw = member
        .field("type")
        .map(|t| annotation_text(&t))
        .unwrap_or_default();
    schema.add_annotation(
        unquote(&name.text()).to_string(),
        TypeAnnotation::new(raw, !optional),
    );
}

/// Body of a top-level `type Name = {...}` or `interface Name {...}`.
fn find_type_body<'r, D: ast_grep_core::Doc>(root: &Node<'r, D>, name: &str) -> Option<Node<'r, D>> {
    top_level_declarations(root).into_iter().find_map(|decl| {
        let field = match decl.kind().as_ref() {
            "type_alias_declaration" => "value",
            "interface_declaration" => "body",
            _ => return None,
        };
        if decl.field("name").is_some_and(|n| n.text() == name) {
            decl.field(field)
        } else {
            None
        }
    })
}
