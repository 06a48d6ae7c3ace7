use pretty_assertions::assert_eq;
use rstest::rstest;

use super::{direct_schema, names, resolve_js};

#[test]
fn exported_class_with_static_prop_types() {
    let schema = direct_schema(resolve_js(include_str!(
        "../../../tests/fixtures/user_card.js"
    )));
    assert_eq!(names(&schema), vec!["name", "age", "onSelect", "tags"]);

    let age = schema.get("age").expect("age declared");
    assert_eq!(age.validator.as_deref(), Some("PropTypes.number"));
    assert!(age.has_default);
}

#[test]
fn commonjs_export_of_create_class_binding() {
    let schema = direct_schema(resolve_js(include_str!(
        "../../../tests/fixtures/create_class_card.js"
    )));
    assert_eq!(names(&schema), vec!["label", "color", "size"]);
    assert!(schema.get("size").is_some_and(|p| p.validator.is_none()));
}

#[rstest]
#[case::default_identifier(
    "const Card = ({ name }) => <div>{name}</div>;\n\
     Card.propTypes = { name: PropTypes.string };\n\
     export default Card;\n"
)]
#[case::named_const(
    "export const Card = ({ name }) => <div>{name}</div>;\n\
     Card.propTypes = { name: PropTypes.string };\n"
)]
#[case::export_clause(
    "function Card({ name }) { return <div>{name}</div>; }\n\
     Card.propTypes = { name: PropTypes.string };\n\
     export { Card };\n"
)]
#[case::default_function(
    "export default function Card({ name }) { return <div>{name}</div>; }\n\
     Card.propTypes = { name: PropTypes.string };\n"
)]
fn export_forms(#[case] source: &str) {
    let schema = direct_schema(resolve_js(source));
    assert_eq!(names(&schema), vec!["name"]);
}

#[test]
fn identifier_chain_is_followed() {
    let source = "class Inner extends React.Component { render() { return <i />; } }\n\
                  Inner.propTypes = { size: PropTypes.number };\n\
                  const Alias = Inner;\n\
                  export default Alias;\n";
    let schema = direct_schema(resolve_js(source));
    assert_eq!(names(&schema), vec!["size"]);
}

#[test]
fn static_getter_prop_types() {
    let source = "export default class Card extends Component {\n\
                    static get propTypes() { return { open: PropTypes.bool }; }\n\
                    render() { return <div />; }\n\
                  }\n";
    let schema = direct_schema(resolve_js(source));
    assert_eq!(names(&schema), vec!["open"]);
}

#[test]
fn component_without_props_has_empty_schema() {
    let schema = direct_schema(resolve_js(
        "export default function Empty() { return <div />; }\n",
    ));
    assert!(schema.is_empty());
}

#[test]
fn several_exported_definitions_are_a_direct_miss() {
    use crate::parser::parse_source;
    use ast_grep_language::SupportLang;

    use super::super::direct::{DirectMiss, find};

    let tree = parse_source(
        "export const A = () => <a />;\nexport const B = () => <b />;\n",
        SupportLang::JavaScript,
    );
    let miss = find(&tree.root()).err();
    assert_eq!(miss, Some(DirectMiss::MultipleExportedDefinitions(2)));
    assert_eq!(
        DirectMiss::MultipleExportedDefinitions(2).to_string(),
        "2 exported component definitions"
    );
}
