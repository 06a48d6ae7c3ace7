//! ast-grep wrapper and language detection from file extensions.

use ast_grep_core::Node;
use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;
use tracing::debug;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Detect the component language from a file path extension.
///
/// Returns `None` for anything outside the JavaScript family.
#[must_use]
pub fn detect_language(file_path: &str) -> Option<SupportLang> {
    let ext = file_path.rsplit('.').next()?;
    match ext {
        "js" | "jsx" | "mjs" | "cjs" => Some(SupportLang::JavaScript),
        "ts" | "mts" | "cts" => Some(SupportLang::TypeScript),
        "tsx" => Some(SupportLang::Tsx),
        _ => None,
    }
}

/// Parse source code into an ast-grep tree for the given language.
#[must_use]
pub fn parse_source(source: &str, lang: SupportLang) -> AstTree {
    use ast_grep_language::LanguageExt;
    lang.ast_grep(source)
}

/// Parse a component file, retrying JavaScript as TSX on syntax errors.
///
/// Plain `.js` components often carry Flow-style prop annotations that the
/// JavaScript grammar rejects but the TSX grammar accepts. When neither
/// grammar parses cleanly, the JavaScript tree is returned with its errors.
#[must_use]
pub fn parse_component_source(source: &str, lang: SupportLang) -> AstTree {
    let tree = parse_source(source, lang);
    if lang != SupportLang::JavaScript || first_syntax_error_line(&tree.root()).is_none() {
        return tree;
    }

    let annotated = parse_source(source, SupportLang::Tsx);
    if first_syntax_error_line(&annotated.root()).is_none() {
        debug!("javascript grammar rejected source, using tsx grammar");
        annotated
    } else {
        tree
    }
}

/// 1-based line of the first `ERROR` or MISSING node, if any.
///
/// tree-sitter repairs truncated input (e.g. an unclosed class body) by
/// inserting zero-width MISSING tokens instead of an `ERROR` node.
pub fn first_syntax_error_line<D: ast_grep_core::Doc>(node: &Node<D>) -> Option<usize> {
    if node.kind().as_ref() == "ERROR" || node.is_missing() {
        return Some(node.start_pos().line() + 1);
    }
    node.children().find_map(|child| first_syntax_error_line(&child))
}
