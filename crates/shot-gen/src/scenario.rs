//! Scenario derivation: one `base` scenario plus one per optional prop.

use shot_core::ClassifiedProp;

use crate::classifier::ClassifiedProps;
use crate::js::{camel_identifier, is_identifier, is_reserved_word};

/// Export name of the scenario holding only required props.
pub const BASE_SCENARIO: &str = "base";

/// A named set of props the component is rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// Exported binding in the fixture module; a valid, unique identifier.
    pub name: String,
    /// `description` field, the raw prop name for optional scenarios.
    pub description: String,
    /// The optional prop this scenario adds on top of the required ones.
    pub extra: Option<ClassifiedProp>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioSet {
    /// Props present in every scenario.
    pub required: Vec<ClassifiedProp>,
    /// `base` first, then one per optional prop in schema order.
    pub scenarios: Vec<Scenario>,
    /// The component declares no props at all.
    pub schema_empty: bool,
}

impl ScenarioSet {
    #[must_use]
    pub fn from_classified(classified: ClassifiedProps) -> Self {
        let schema_empty = classified.is_empty();
        let mut scenarios = Vec::with_capacity(classified.optional.len() + 1);
        scenarios.push(Scenario {
            name: BASE_SCENARIO.to_string(),
            description: BASE_SCENARIO.to_string(),
            extra: None,
        });

        for prop in classified.optional {
            let name = unique_name(&prop.name, &scenarios);
            scenarios.push(Scenario {
                name,
                description: prop.name.clone(),
                extra: Some(prop),
            });
        }

        Self {
            required: classified.required,
            scenarios,
            schema_empty,
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.scenarios.iter().map(|s| s.name.as_str())
    }
}

fn unique_name(prop_name: &str, taken: &[Scenario]) -> String {
    let mut name = if is_identifier(prop_name) {
        prop_name.to_string()
    } else {
        camel_identifier(prop_name)
    };
    while is_reserved_word(&name) || taken.iter().any(|s| s.name == name) {
        name.push_str("Prop");
    }
    name
}
