//! Fixture module emitter.

use shot_config::ShotConfig;
use shot_core::{ClassifiedProp, ComponentRecord};

use crate::js::{property_key, quote};
use crate::scenario::{Scenario, ScenarioSet};

const NO_PROPS_COMMENT: &str = "// could not find any props";
const NO_REQUIRED_PROPS_COMMENT: &str = "// could not find required props";

/// Identifier the spy helper is imported under; the table's function literal calls it.
pub const SPY_IMPORT: &str = "safeSpy";
/// Identifier the immutable-collection library is imported under.
pub const IMMUTABLE_IMPORT: &str = "Immutable";

/// Reference to the component as written in every scenario.
#[must_use]
pub fn component_reference(record: &ComponentRecord, config: &ShotConfig) -> String {
    if record.is_wrapped {
        format!(
            "{}.{}",
            record.identifier_name(),
            config.component.wrapped_accessor
        )
    } else {
        record.identifier_name().to_string()
    }
}

/// Render the fixture module text.
#[must_use]
pub fn emit_fixture(record: &ComponentRecord, set: &ScenarioSet, config: &ShotConfig) -> String {
    let paths = &record.paths;
    let mut root = paths.project_root_prefix();
    if root.is_empty() {
        root.push('.');
    }
    let spy_path = format!("{root}/{}", config.imports.spy_helper.trim_start_matches('/'));

    let mut lines = vec![
        format!(
            "import {IMMUTABLE_IMPORT} from {};",
            quote(&config.imports.immutable)
        ),
        format!("import {SPY_IMPORT} from {};", quote(&spy_path)),
        format!(
            "import {} from {};",
            record.identifier_name(),
            quote(&paths.component_module_specifier())
        ),
    ];

    let component = component_reference(record, config);
    for scenario in &set.scenarios {
        lines.push(String::new());
        scenario_block(&mut lines, scenario, &component, set);
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn scenario_block(lines: &mut Vec<String>, scenario: &Scenario, component: &str, set: &ScenarioSet) {
    lines.push(format!("export const {} = {{", scenario.name));
    lines.push(format!("  description: {},", quote(&scenario.description)));
    lines.push(format!("  component: {component},"));

    match &scenario.extra {
        None if set.schema_empty => lines.push(format!("  props: {{}} {NO_PROPS_COMMENT}")),
        None if set.required.is_empty() => {
            lines.push(format!("  props: {{}} {NO_REQUIRED_PROPS_COMMENT}"));
        }
        None => {
            lines.push("  props: {".to_string());
            let last = set.required.len() - 1;
            for (idx, prop) in set.required.iter().enumerate() {
                lines.push(prop_line(prop, idx != last));
            }
            lines.push("  }".to_string());
        }
        Some(extra) => {
            lines.push("  props: {".to_string());
            for prop in &set.required {
                lines.push(prop_line(prop, true));
            }
            lines.push(prop_line(extra, false));
            lines.push("  }".to_string());
        }
    }
    lines.push("};".to_string());
}

fn prop_line(prop: &ClassifiedProp, comma: bool) -> String {
    let mut line = format!("    {}: {}", property_key(&prop.name), prop.value_literal());
    if comma {
        line.push(',');
    }
    if let Some(diagnostic) = &prop.diagnostic {
        line.push_str(" // ");
        line.push_str(diagnostic);
    }
    line
}
