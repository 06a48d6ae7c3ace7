mod direct;
mod failures;
mod prop_types;
mod wrapped;

use ast_grep_language::SupportLang;
use shot_core::PropSchema;

use super::{Resolution, resolve};

fn resolve_js(source: &str) -> Resolution {
    resolve(source, SupportLang::JavaScript)
}

fn resolve_tsx(source: &str) -> Resolution {
    resolve(source, SupportLang::Tsx)
}

fn direct_schema(resolution: Resolution) -> PropSchema {
    match resolution {
        Resolution::Direct(schema) => schema,
        other => panic!("expected direct resolution, got {other:?}"),
    }
}

fn wrapped_schema(resolution: Resolution) -> PropSchema {
    match resolution {
        Resolution::Wrapped(schema) => schema,
        other => panic!("expected wrapped resolution, got {other:?}"),
    }
}

fn names(schema: &PropSchema) -> Vec<&str> {
    schema.iter().map(|(name, _)| name).collect()
}
