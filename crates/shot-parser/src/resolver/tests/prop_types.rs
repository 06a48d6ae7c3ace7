use pretty_assertions::assert_eq;

use super::{direct_schema, names, resolve_js};

#[test]
fn validator_text_is_kept_verbatim() {
    let source = "export default class Card extends React.Component {\n\
                    static propTypes = {\n\
                      items: ImmutablePropTypes.list.isRequired,\n\
                      kind: PropTypes.oneOfType([PropTypes.string, PropTypes.number]),\n\
                    };\n\
                    render() { return <div />; }\n\
                  }\n";
    let schema = direct_schema(resolve_js(source));
    assert_eq!(
        schema.get("items").and_then(|p| p.validator.as_deref()),
        Some("ImmutablePropTypes.list.isRequired")
    );
    assert_eq!(
        schema.get("kind").and_then(|p| p.validator.as_deref()),
        Some("PropTypes.oneOfType([PropTypes.string, PropTypes.number])")
    );
}

#[test]
fn quoted_keys_are_unquoted() {
    let source = "const Card = () => <div />;\n\
                  Card.propTypes = { 'data-id': PropTypes.string, \"aria-label\": PropTypes.string };\n\
                  export default Card;\n";
    let schema = direct_schema(resolve_js(source));
    assert_eq!(names(&schema), vec!["data-id", "aria-label"]);
}

#[test]
fn spread_entries_are_skipped() {
    let source = "const Card = () => <div />;\n\
                  Card.propTypes = { ...Base.propTypes, title: PropTypes.string };\n\
                  export default Card;\n";
    let schema = direct_schema(resolve_js(source));
    assert_eq!(names(&schema), vec!["title"]);
}

#[test]
fn default_props_declare_missing_props() {
    let source = "const Card = () => <div />;\n\
                  Card.propTypes = { title: PropTypes.string };\n\
                  Card.defaultProps = { title: 'x', theme: 'dark' };\n\
                  export default Card;\n";
    let schema = direct_schema(resolve_js(source));
    assert_eq!(names(&schema), vec!["title", "theme"]);

    let theme = schema.get("theme").expect("theme declared");
    assert!(theme.has_default);
    assert!(theme.validator.is_none());
    assert!(theme.annotation.is_none());
}

#[test]
fn first_validator_wins() {
    let source = "const Card = () => <div />;\n\
                  Card.propTypes = { size: PropTypes.number };\n\
                  Card.propTypes = { size: PropTypes.string };\n\
                  export default Card;\n";
    let schema = direct_schema(resolve_js(source));
    assert_eq!(
        schema.get("size").and_then(|p| p.validator.as_deref()),
        Some("PropTypes.number")
    );
}
