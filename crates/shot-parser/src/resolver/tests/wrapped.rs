use pretty_assertions::assert_eq;

use super::{names, resolve_js, wrapped_schema};

#[test]
fn higher_order_export_finds_inner_class() {
    let schema = wrapped_schema(resolve_js(include_str!(
        "../../../tests/fixtures/connected_card.js"
    )));
    assert_eq!(names(&schema), vec!["name", "visible"]);
}

#[test]
fn anonymous_function_passed_to_wrapper() {
    let source = "export default withTheme(function ({ theme }) { return <div>{theme}</div>; });\n";
    let schema = wrapped_schema(resolve_js(source));
    assert!(schema.is_empty());
}

#[test]
fn helpers_alongside_wrapped_component_are_ignored() {
    let source = "function format(value) { return String(value); }\n\
                  const Price = ({ amount }) => <b>{format(amount)}</b>;\n\
                  Price.propTypes = { amount: PropTypes.number.isRequired };\n\
                  export default memo(Price);\n";
    let schema = wrapped_schema(resolve_js(source));
    assert_eq!(names(&schema), vec!["amount"]);
}
