//! Unused-binding pruner
//!
//! Runs on the re-parsed output of the rewrite pass. Top-level import
//! specifiers, single-declarator destructuring declarations and
//! non-exported type aliases whose names are never referenced are removed.
//! Counting is purely syntactic and removals do not cascade.

use std::collections::{HashMap, HashSet};
use std::ops::Range;
use tree_sitter::Node;

use crate::edit::Edit;
use crate::imports::ImportTable;
use crate::parser::jsx::contains_jsx;
use crate::parser::scope::pattern_identifiers;
use crate::parser::{named_children, node_text};
use crate::render::import_statement;
use crate::source_utils::{line_indent, statement_removal_range};

/// Identifier kinds that count as references.
const REFERENCE_KINDS: &[&str] = &["identifier", "type_identifier", "shorthand_property_identifier"];

/// Reference counts for one file.
#[derive(Debug, Default)]
struct UsageGraph {
    counts: HashMap<String, usize>,
}

impl UsageGraph {
    /// Count references under `root`, skipping import declarations,
    /// re-exports and the nodes in `declarations`.
    fn build(root: Node<'_>, source: &str, declarations: &HashSet<Range<usize>>) -> Self {
        let mut graph = UsageGraph::default();
        let mut cursor = root.walk();
        loop {
            let node = cursor.node();
            let skip_subtree = node.kind() == "import_statement"
                || (node.kind() == "export_statement" && node.child_by_field_name("source").is_some());

            if !skip_subtree
                && REFERENCE_KINDS.contains(&node.kind())
                && !declarations.contains(&node.byte_range())
            {
                *graph.counts.entry(node_text(node, source).to_string()).or_default() += 1;
            }

            if !skip_subtree && cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return graph;
                }
            }
        }
    }

    fn is_used(&self, name: &str) -> bool {
        self.counts.get(name).is_some_and(|&n| n > 0)
    }
}

/// A top-level destructuring declaration with one declarator.
struct Destructure<'t> {
    statement: Node<'t>,
    pattern: Node<'t>,
}

fn destructures(root: Node<'_>) -> Vec<Destructure<'_>> {
    named_children(root)
        .into_iter()
        .filter(|s| matches!(s.kind(), "lexical_declaration" | "variable_declaration"))
        .filter_map(|statement| {
            let declarators: Vec<Node<'_>> = named_children(statement)
                .into_iter()
                .filter(|d| d.kind() == "variable_declarator")
                .collect();
            let [declarator] = declarators.as_slice() else {
                return None;
            };
            let pattern = declarator.child_by_field_name("name")?;
            matches!(pattern.kind(), "object_pattern" | "array_pattern")
                .then_some(Destructure { statement, pattern })
        })
        .collect()
}

fn type_aliases(root: Node<'_>) -> Vec<Node<'_>> {
    named_children(root)
        .into_iter()
        .filter(|s| s.kind() == "type_alias_declaration")
        .collect()
}

/// Plan the removal of unused top-level bindings under `root`.
pub fn prune_unused(root: Node<'_>, source: &str) -> Vec<Edit> {
    let imports = ImportTable::from_tree(root, source);
    let destructures = destructures(root);
    let aliases = type_aliases(root);

    let mut declarations: HashSet<Range<usize>> = HashSet::new();
    for d in &destructures {
        declarations.extend(pattern_identifiers(d.pattern).iter().map(|n| n.byte_range()));
    }
    for alias in &aliases {
        if let Some(name) = alias.child_by_field_name("name") {
            declarations.insert(name.byte_range());
        }
    }

    let mut graph = UsageGraph::build(root, source, &declarations);
    if contains_jsx(root) {
        // Classic JSX runtime
        *graph.counts.entry("React".to_string()).or_default() += 1;
    }

    let mut edits = Vec::new();
    let remove = |start: usize, end: usize| {
        let (start, end) = statement_removal_range(source, start, end);
        Edit::delete(start, end)
    };

    for statement in &imports.statements {
        let default = statement.default.as_deref().filter(|d| graph.is_used(d));
        let namespace = statement.namespace.as_deref().filter(|n| graph.is_used(n));
        let named: Vec<String> = statement
            .named
            .iter()
            .filter(|s| graph.is_used(&s.local))
            .map(|s| s.source.clone())
            .collect();

        let had_default = statement.default.is_some();
        let had_namespace = statement.namespace.is_some();
        let unchanged = default.is_some() == had_default
            && namespace.is_some() == had_namespace
            && named.len() == statement.named.len();
        if unchanged || (!had_default && !had_namespace && statement.named.is_empty()) {
            continue;
        }

        if default.is_none() && namespace.is_none() && named.is_empty() {
            edits.push(remove(statement.span.start, statement.span.end));
        } else {
            let text = import_statement(
                statement.type_only,
                default,
                namespace,
                &named,
                &statement.module,
                statement.multiline,
            );
            edits.push(Edit::replace(statement.span.start, statement.span.end, text));
        }
    }

    for d in &destructures {
        let statement = d.statement;
        if d.pattern.kind() == "array_pattern" {
            let all_unused = pattern_identifiers(d.pattern)
                .iter()
                .all(|n| !graph.is_used(node_text(*n, source)));
            if all_unused {
                edits.push(remove(statement.start_byte(), statement.end_byte()));
            }
            continue;
        }

        let properties = named_children(d.pattern);
        // Dropping a property would change what a rest element collects
        if properties.iter().any(|p| p.kind() == "rest_pattern") {
            continue;
        }
        let kept: Vec<Node<'_>> = properties
            .iter()
            .copied()
            .filter(|p| pattern_identifiers(*p).iter().any(|n| graph.is_used(node_text(*n, source))))
            .collect();
        if kept.len() == properties.len() {
            continue;
        }
        if kept.is_empty() {
            edits.push(remove(statement.start_byte(), statement.end_byte()));
            continue;
        }
        let texts: Vec<&str> = kept.iter().map(|p| node_text(*p, source)).collect();
        let pattern_text = node_text(d.pattern, source);
        let rendered = if pattern_text.contains('\n') {
            let indent = line_indent(source, statement.start_byte());
            let mut out = String::from("{\n");
            for text in texts {
                out.push_str(&format!("{}  {},\n", indent, text));
            }
            out.push_str(indent);
            out.push('}');
            out
        } else {
            format!("{{ {} }}", texts.join(", "))
        };
        edits.push(Edit::replace(d.pattern.start_byte(), d.pattern.end_byte(), rendered));
    }

    for alias in &aliases {
        let Some(name) = alias.child_by_field_name("name") else {
            continue;
        };
        if !graph.is_used(node_text(name, source)) {
            edits.push(remove(alias.start_byte(), alias.end_byte()));
        }
    }

    edits
}
