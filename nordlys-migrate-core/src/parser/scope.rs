//! Lexical scope helpers
//!
//! Just enough scoping to tell whether a JSX tag name refers to the
//! module-level import or to something declared closer to the element.

use tree_sitter::Node;

use super::{named_children, node_text};

const FUNCTION_KINDS: &[&str] = &[
    "function_declaration",
    "function_expression",
    "function",
    "generator_function_declaration",
    "arrow_function",
    "method_definition",
];

/// Names bound by a binding pattern (identifier, object/array
/// destructuring, defaults, rest, typed parameters).
pub fn pattern_names(pattern: Node<'_>, source: &str) -> Vec<String> {
    pattern_identifiers(pattern)
        .into_iter()
        .map(|n| node_text(n, source).to_string())
        .collect()
}

/// The identifier nodes a binding pattern declares. Default values are
/// not part of the result.
pub fn pattern_identifiers<'t>(pattern: Node<'t>) -> Vec<Node<'t>> {
    let mut nodes = Vec::new();
    collect_pattern_identifiers(pattern, &mut nodes);
    nodes
}

fn collect_pattern_identifiers<'t>(node: Node<'t>, nodes: &mut Vec<Node<'t>>) {
    match node.kind() {
        "identifier" | "shorthand_property_identifier_pattern" => nodes.push(node),
        "pair_pattern" => {
            if let Some(value) = node.child_by_field_name("value") {
                collect_pattern_identifiers(value, nodes);
            }
        }
        "object_assignment_pattern" | "assignment_pattern" => {
            if let Some(left) = node.child_by_field_name("left") {
                collect_pattern_identifiers(left, nodes);
            }
        }
        "required_parameter" | "optional_parameter" => {
            if let Some(pattern) = node.child_by_field_name("pattern") {
                collect_pattern_identifiers(pattern, nodes);
            }
        }
        "object_pattern" | "array_pattern" | "rest_pattern" | "formal_parameters" => {
            for child in named_children(node) {
                collect_pattern_identifiers(child, nodes);
            }
        }
        _ => {}
    }
}

/// Names declared by one statement (variables, functions, classes).
pub fn declared_names(statement: Node<'_>, source: &str) -> Vec<String> {
    match statement.kind() {
        "lexical_declaration" | "variable_declaration" => named_children(statement)
            .into_iter()
            .filter(|d| d.kind() == "variable_declarator")
            .filter_map(|d| d.child_by_field_name("name"))
            .flat_map(|n| pattern_names(n, source))
            .collect(),
        "function_declaration" | "generator_function_declaration" | "class_declaration" => statement
            .child_by_field_name("name")
            .map(|n| vec![node_text(n, source).to_string()])
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Whether `name`, as seen from `node`, is bound by a declaration nested
/// inside the module rather than at the top level.
pub fn is_shadowed(node: Node<'_>, name: &str, source: &str) -> bool {
    let mut current = node.parent();
    while let Some(scope) = current {
        if scope.kind() == "program" {
            return false;
        }
        if binds_name(scope, name, source) {
            return true;
        }
        current = scope.parent();
    }
    false
}

fn binds_name(scope: Node<'_>, name: &str, source: &str) -> bool {
    let kind = scope.kind();
    if FUNCTION_KINDS.contains(&kind) {
        if let Some(params) = scope.child_by_field_name("parameters") {
            if pattern_names(params, source).iter().any(|n| n == name) {
                return true;
            }
        }
        // `x => ...`
        if let Some(param) = scope.child_by_field_name("parameter") {
            if pattern_names(param, source).iter().any(|n| n == name) {
                return true;
            }
        }
        // Named function expressions bind their own name inside
        if kind == "function_expression" || kind == "function" {
            if let Some(fn_name) = scope.child_by_field_name("name") {
                if node_text(fn_name, source) == name {
                    return true;
                }
            }
        }
        return false;
    }
    match kind {
        "statement_block" | "switch_body" | "class_body" => named_children(scope)
            .into_iter()
            .any(|stmt| declared_names(stmt, source).iter().any(|n| n == name)),
        "catch_clause" => scope
            .child_by_field_name("parameter")
            .is_some_and(|p| pattern_names(p, source).iter().any(|n| n == name)),
        "for_in_statement" => scope
            .child_by_field_name("left")
            .is_some_and(|p| pattern_names(p, source).iter().any(|n| n == name)),
        "for_statement" => scope
            .child_by_field_name("initializer")
            .is_some_and(|init| declared_names(init, source).iter().any(|n| n == name)),
        _ => false,
    }
}
