use pretty_assertions::assert_eq;

use super::super::{Resolution, ResolveFailure};
use super::resolve_js;

#[test]
fn syntax_error_is_unparseable() {
    let resolution = resolve_js(include_str!("../../../tests/fixtures/broken.js"));
    match resolution {
        Resolution::Failed(ResolveFailure::Unparseable { reason }) => {
            assert!(reason.starts_with("syntax error near line"), "{reason}");
        }
        other => panic!("expected unparseable, got {other:?}"),
    }
}

#[test]
fn truncated_class_is_unparseable() {
    let resolution = resolve_js(include_str!("../../../tests/fixtures/truncated_class.js"));
    assert!(
        matches!(
            resolution,
            Resolution::Failed(ResolveFailure::Unparseable { ref reason })
                if reason.starts_with("syntax error near line")
        ),
        "{resolution:?}"
    );
}

#[test]
fn module_without_components_is_unparseable() {
    let resolution = resolve_js("export const add = (a, b) => a + b;\n");
    assert_eq!(
        resolution,
        Resolution::Failed(ResolveFailure::Unparseable {
            reason: "no component definition found".to_string()
        })
    );
}

#[test]
fn several_wrapped_candidates_are_ambiguous() {
    let resolution = resolve_js(include_str!("../../../tests/fixtures/two_components.js"));
    assert_eq!(
        resolution,
        Resolution::Failed(ResolveFailure::Ambiguous { count: 2 })
    );
}

#[test]
fn ambiguity_message_counts_definitions() {
    let failure = ResolveFailure::Ambiguous { count: 3 };
    assert_eq!(failure.to_string(), "3 component definitions found");
}
