//! Property classification: declared type -> required flag and fixture literal.
//!
//! Precedence per prop: static annotation, then runtime validator, then
//! the untyped fallback (`any` with a diagnostic).

use shot_core::{ClassifiedProp, DeclaredType, PropDeclaration, PropSchema};
use tracing::debug;

use crate::table::default_literal;

/// Diagnostic attached to props with no type information.
pub const UNDEDUCED_DIAGNOSTIC: &str = "Could not deduce prop type";

const REQUIRED_MARKER: &str = ".isRequired";

/// Props split by required flag, each in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedProps {
    pub required: Vec<ClassifiedProp>,
    pub optional: Vec<ClassifiedProp>,
}

impl ClassifiedProps {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.optional.is_empty()
    }
}

/// Classify every prop of `schema`, preserving its order.
#[must_use]
pub fn classify_schema(schema: &PropSchema) -> ClassifiedProps {
    let mut out = ClassifiedProps::default();
    for (name, decl) in schema.iter() {
        let prop = classify_prop(name, decl);
        if prop.value.is_none() {
            debug!(prop = name, effective_type = %prop.effective_type, "no fixture literal for type");
        }
        if prop.required {
            out.required.push(prop);
        } else {
            out.optional.push(prop);
        }
    }
    out
}

/// Classify a single prop.
#[must_use]
pub fn classify_prop(name: &str, decl: &PropDeclaration) -> ClassifiedProp {
    let (declared, effective_type, required, diagnostic) =
        match (&decl.annotation, &decl.validator) {
            (Some(annotation), _) => (
                DeclaredType::Annotation(annotation.clone()),
                annotation_type_name(&annotation.raw),
                annotation.required,
                None,
            ),
            (None, Some(validator)) => {
                let (type_name, required) = validator_type_name(validator);
                (
                    DeclaredType::Validator(validator.clone()),
                    type_name,
                    required,
                    None,
                )
            }
            (None, None) => (
                DeclaredType::Unspecified,
                "any".to_string(),
                false,
                Some(UNDEDUCED_DIAGNOSTIC.to_string()),
            ),
        };

    ClassifiedProp {
        name: name.to_string(),
        declared,
        value: default_literal(&effective_type).map(str::to_string),
        effective_type,
        required,
        diagnostic,
    }
}

/// Effective type name of a static annotation.
///
/// Takes the first top-level union alternative and normalises it:
/// `?T` -> `T`, `N<..>` -> `N`, `T[]` -> `Array`, function types ->
/// `Function`, object types -> `Object`, string and number literals ->
/// `literal`.
#[must_use]
pub fn annotation_type_name(raw: &str) -> String {
    let first = first_union_alternative(raw.trim());
    let ty = first.strip_prefix('?').unwrap_or(first).trim();

    if is_function_type(ty) {
        return "Function".to_string();
    }
    if let Some(inner) = ty.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        return annotation_type_name(inner);
    }
    if ty.starts_with('{') {
        return "Object".to_string();
    }
    if ty.starts_with(['\'', '"', '`']) || ty.parse::<f64>().is_ok() {
        return "literal".to_string();
    }
    if ty.ends_with("[]") {
        return "Array".to_string();
    }
    match ty.split_once('<') {
        Some((head, _)) => head.trim().to_string(),
        None => ty.to_string(),
    }
}

/// Effective type name and required flag of a runtime validator.
///
/// `PropTypes.string.isRequired` -> (`string`, true);
/// `PropTypes.oneOfType([...])` -> (`union`, false).
#[must_use]
pub fn validator_type_name(raw: &str) -> (String, bool) {
    let required = raw.contains(REQUIRED_MARKER);
    let head = raw.split('(').next().unwrap_or(raw).trim();
    let head = head.strip_suffix(REQUIRED_MARKER).unwrap_or(head);
    let name = head.rsplit('.').next().unwrap_or(head).trim();

    let name = if name == "oneOfType" { "union" } else { name };
    (name.to_string(), required)
}

/// First `|` alternative outside any brackets, skipping a leading empty one.
fn first_union_alternative(ty: &str) -> &str {
    let mut depth = 0i32;
    let mut start = 0;
    let mut prev = '\0';
    for (idx, c) in ty.char_indices() {
        match c {
            '(' | '[' | '{' | '<' => depth += 1,
            // `=>` is not a closing bracket.
            '>' if prev == '=' => {}
            ')' | ']' | '}' | '>' => depth -= 1,
            '|' if depth == 0 => {
                let alt = ty[start..idx].trim();
                if !alt.is_empty() {
                    return alt;
                }
                start = idx + 1;
            }
            _ => {}
        }
        prev = c;
    }
    ty[start..].trim()
}

/// Arrow signatures: `(a: A) => B`, `<T>(x: T) => T`.
fn is_function_type(ty: &str) -> bool {
    if !(ty.starts_with('(') || ty.starts_with('<')) {
        return false;
    }
    let mut depth = 0i32;
    let mut prev = '\0';
    for c in ty.chars() {
        match c {
            '(' | '[' | '{' | '<' => depth += 1,
            '>' if prev == '=' => {
                if depth == 0 {
                    return true;
                }
            }
            ')' | ']' | '}' | '>' => depth -= 1,
            _ => {}
        }
        prev = c;
    }
    false
}
