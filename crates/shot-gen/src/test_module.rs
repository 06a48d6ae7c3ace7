//! Snapshot-test module emitter.

use shot_config::ShotConfig;
use shot_core::ComponentRecord;

use crate::js::quote;
use crate::scenario::ScenarioSet;

/// Namespace the fixture module is imported under.
const FIXTURES_NAMESPACE: &str = "testCases";

/// Shallow render of the scenario component.
///
/// Plain TypeScript modules cannot contain JSX, so they call
/// `React.createElement` directly.
fn render_call(extension: &str) -> &'static str {
    match extension {
        "ts" | "mts" | "cts" => "shallow(React.createElement(Component, props))",
        _ => "shallow(<Component {...props} />)",
    }
}

/// Render the snapshot-test module text.
#[must_use]
pub fn emit_test_module(record: &ComponentRecord, set: &ScenarioSet, config: &ShotConfig) -> String {
    let mut lines = vec![
        "import React from 'react';".to_string(),
        format!("import {{ shallow }} from {};", quote(&config.imports.renderer)),
        format!("import toJson from {};", quote(&config.imports.serializer)),
        format!(
            "import * as {FIXTURES_NAMESPACE} from {};",
            quote(&record.paths.fixture_module_specifier())
        ),
        String::new(),
        format!(
            "describe({}, () => {{",
            quote(&format!("<{} />", record.identifier_name()))
        ),
    ];

    let render = render_call(&record.paths.extension);
    for (idx, scenario) in set.scenarios.iter().enumerate() {
        if idx > 0 {
            lines.push(String::new());
        }
        lines.extend([
            format!("  describe({}, () => {{", quote(&scenario.description)),
            "    let wrapper;".to_string(),
            String::new(),
            "    beforeEach(() => {".to_string(),
            format!(
                "      const {{ component: Component, props }} = {FIXTURES_NAMESPACE}.{};",
                scenario.name
            ),
            format!("      wrapper = {render};"),
            "    });".to_string(),
            String::new(),
            "    it('matches snapshot', () => {".to_string(),
            "      expect(toJson(wrapper)).toMatchSnapshot();".to_string(),
            "    });".to_string(),
            "  });".to_string(),
        ]);
    }
    lines.push("});".to_string());

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
