//! TreeSitter-based TSX/TypeScript parsing
//!
//! The rewrite engine only reads syntax trees; all changes are planned as
//! byte-range edits (see [`crate::edit`]) and the result is re-parsed for
//! the next pass.

pub mod jsx;
pub mod scope;

use thiserror::Error;
use tree_sitter::{Node, Tree};

/// Supported languages and their extensions
pub static SUPPORTED_LANGUAGES: &[(&str, &[&str])] = &[
    ("tsx", &["tsx", "jsx", "js", "mjs", "cjs"]),
    ("typescript", &["ts", "mts", "cts"]),
];

/// Errors that can occur during parsing
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Failed to parse: {0}")]
    Parse(String),
    #[error("TreeSitter error: {0}")]
    TreeSitter(String),
    #[error("Syntax error at line {line}, column {column}")]
    Syntax { line: u32, column: u32 },
}

/// Detect language from file path extension
pub fn detect_language(path: &str) -> &'static str {
    let ext = path.rsplit('.').next().unwrap_or("");
    match ext.to_lowercase().as_str() {
        "tsx" | "jsx" | "js" | "mjs" | "cjs" => "tsx",
        "ts" | "mts" | "cts" => "typescript",
        _ => "unknown",
    }
}

/// Get TreeSitter language for a language name
fn get_tree_sitter_language(lang: &str) -> Result<tree_sitter::Language, ParseError> {
    match lang {
        "tsx" | "jsx" | "javascript" | "js" => Ok(tree_sitter_typescript::LANGUAGE_TSX.into()),
        "typescript" | "ts" => Ok(tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()),
        _ => Err(ParseError::UnsupportedLanguage(lang.to_string())),
    }
}

/// Parse a source string into a tree-sitter tree.
///
/// Trees containing `ERROR` or missing nodes are rejected: planning edits
/// against a recovered tree could splice text into the wrong place.
pub fn parse_source(source: &str, lang: &str) -> Result<Tree, ParseError> {
    let language = get_tree_sitter_language(lang)?;

    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| ParseError::TreeSitter(e.to_string()))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ParseError::Parse("Failed to parse source".to_string()))?;

    if tree.root_node().has_error() {
        let (line, column) = first_error(tree.root_node())
            .map(|n| {
                let p = n.start_position();
                (p.row as u32 + 1, p.column as u32 + 1)
            })
            .unwrap_or((1, 1));
        return Err(ParseError::Syntax { line, column });
    }

    Ok(tree)
}

/// Source text covered by `node`.
pub fn node_text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    &source[node.byte_range()]
}

/// Named children of `node`, collected.
pub fn named_children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

/// Whether `node` has a direct anonymous child with the given kind
/// (e.g. the `type` keyword of `import type`).
pub fn has_keyword_child(node: Node<'_>, keyword: &str) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|child| !child.is_named() && child.kind() == keyword);
    found
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}
