//! Per-file migration pipeline
//!
//! Pass 1 plans element rewrites, the stylesheet and import edits against
//! the parsed input and splices them in one go. Pass 2 re-parses the result
//! and prunes bindings the rewrite left unused.

use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::ops::Range;
use std::path::Path;
use thiserror::Error;
use tree_sitter::Node;

use crate::components::{rewrite_element, RewriteContext};
use crate::config::{ConfigError, MigrationConfig};
use crate::diagnostics::{DiagnosticKind, DiagnosticSink, Diagnostics, Located};
use crate::edit::{apply_edits, apply_within, Edit, EditError};
use crate::imports::{ImportRewriter, ImportTable, Resolution};
use crate::parser::jsx::{collect_elements, ElementView};
use crate::parser::scope::is_shadowed;
use crate::parser::{detect_language, node_text, parse_source, ParseError};
use crate::prune::prune_unused;
use crate::stylesheet::StyleSheetEmitter;

#[derive(Error, Debug)]
pub enum MigrateError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Failed to apply edits: {0}")]
    Edit(#[from] EditError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result of migrating one source text.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationOutcome {
    #[serde(skip)]
    pub output: String,
    pub changed: bool,
    pub rewritten_elements: usize,
    pub diagnostics: Diagnostics,
}

/// One matched element and the edits planned for it.
struct PlannedElement {
    span: Range<usize>,
    edits: Vec<Edit>,
    /// Still present in the output, not consumed by an enclosing rewrite
    emitted: bool,
}

impl MigrationOutcome {
    fn unchanged(source: &str) -> Self {
        MigrationOutcome {
            output: source.to_string(),
            changed: false,
            rewritten_elements: 0,
            diagnostics: Diagnostics::new(),
        }
    }
}

/// Migrate one source text written in `language` (`tsx` or `typescript`).
pub fn migrate_source(source: &str, language: &str, config: &MigrationConfig) -> Result<MigrationOutcome, MigrateError> {
    let tree = parse_source(source, language)?;
    let root = tree.root_node();

    let table = ImportTable::from_tree(root, source);
    if !table.has_legacy(config) {
        return Ok(MigrationOutcome::unchanged(source));
    }

    let mut diagnostics = Diagnostics::new();
    let identifiers = identifiers(root, source);
    let binding = StyleSheetEmitter::choose_binding(&config.stylesheet_binding, |name| identifiers.contains(name));
    let mut stylesheet = StyleSheetEmitter::new(binding);
    let mut imports = ImportRewriter::new(&table, config, source);
    let mut planned: Vec<PlannedElement> = Vec::new();

    for node in collect_elements(root) {
        let Some(view) = ElementView::from_node(node, source) else {
            continue;
        };
        let (component, imported, root_name, namespace) = match table.resolve(&view.tag, config) {
            Resolution::NotLegacy => continue,
            Resolution::Unmapped { name, root } => {
                if !is_shadowed(node, &root, source) {
                    let mut located = Located::new(&mut diagnostics, view.line, view.column, &view.tag);
                    imports.report_unmapped(&name, &mut located);
                }
                continue;
            }
            Resolution::Component { component, imported, root, namespace } => (component, imported, root, namespace),
        };
        if is_shadowed(node, &root_name, source) {
            continue;
        }

        let target = config.target(component);
        let tag = if !namespace && imports.relocates(&imported) {
            view.tag.clone()
        } else {
            imports.ensure(&target.module, &target.name);
            target.name.clone()
        };

        let rewrite = {
            let mut ctx = RewriteContext { stylesheet: &mut stylesheet, container: &config.container };
            rewrite_element(&view, component, &tag, source, &mut ctx, &mut diagnostics)
        };
        if rewrite.wrapped {
            imports.ensure(&config.layout_module, &config.container);
        }
        planned.push(PlannedElement { span: view.span.clone(), edits: rewrite.edits, emitted: true });
    }

    fold_nested(&mut planned, source)?;
    let rewritten_elements = planned.iter().filter(|p| p.emitted).count();
    let mut edits: Vec<Edit> = planned.into_iter().flat_map(|p| p.edits).collect();

    if let Some(appendix) = stylesheet.render_appendix(source) {
        imports.ensure(&config.layout_module, "StyleSheet");
        edits.push(Edit::insert(source.len(), appendix));
    }
    edits.extend(imports.plan(&mut diagnostics));

    let mut output = apply_edits(source, &edits)?;
    let changed = output != source;
    if changed {
        output = prune_pass(output, language, &mut diagnostics)?;
    }

    Ok(MigrationOutcome {
        changed: output != source,
        output,
        rewritten_elements,
        diagnostics,
    })
}

/// Fold the rewrites of elements nested in a region an enclosing rewrite
/// replaces (an attribute value, folded children) into that replacement's
/// text. `apply_edits` then discards the inner edits as nested.
///
/// `planned` is in pre-order, so walking it backwards settles every element
/// before its ancestors. An inner element whose source text no longer
/// appears in the replacement was consumed by the outer rule (a `leftIcon`
/// reduced to `icon`, a dropped prop) and is not emitted.
fn fold_nested(planned: &mut [PlannedElement], source: &str) -> Result<(), EditError> {
    for i in (0..planned.len()).rev() {
        let (head, tail) = planned.split_at_mut(i + 1);
        let outer = &mut head[i];
        let mut cursors = vec![0usize; outer.edits.len()];
        let mut settled_until = 0;

        for j in 0..tail.len() {
            let span = tail[j].span.clone();
            if span.start >= outer.span.end {
                break;
            }
            if span.start < settled_until {
                continue;
            }
            let Some(k) = outer
                .edits
                .iter()
                .position(|e| e.start < e.end && e.start <= span.start && span.end <= e.end)
            else {
                continue;
            };
            settled_until = span.end;

            let inner: Vec<Edit> = tail[j..]
                .iter()
                .take_while(|p| p.span.start < span.end)
                .flat_map(|p| p.edits.iter().cloned())
                .collect();
            let rewritten = apply_within(source, span.clone(), &inner)?;
            let original = &source[span.clone()];

            let edit = &mut outer.edits[k];
            match edit.text[cursors[k]..].find(original) {
                Some(found) => {
                    let at = cursors[k] + found;
                    edit.text.replace_range(at..at + original.len(), &rewritten);
                    cursors[k] = at + rewritten.len();
                }
                None => {
                    for consumed in tail[j..].iter_mut().take_while(|p| p.span.start < span.end) {
                        consumed.emitted = false;
                    }
                }
            }
        }
    }
    Ok(())
}

/// Re-parse the rewritten text and drop bindings nothing references.
fn prune_pass(output: String, language: &str, sink: &mut dyn DiagnosticSink) -> Result<String, MigrateError> {
    let tree = match parse_source(&output, language) {
        Ok(tree) => tree,
        Err(e) => {
            sink.record(
                DiagnosticKind::Internal,
                format!("rewritten source does not parse ({}), unused imports were not pruned", e),
            );
            return Ok(output);
        }
    };
    let edits = prune_unused(tree.root_node(), &output);
    if edits.is_empty() {
        return Ok(output);
    }
    Ok(apply_edits(&output, &edits)?)
}

/// Migrate the file at `path`, picking the grammar from its extension.
/// The file itself is not written.
pub fn migrate_file(path: &Path, config: &MigrationConfig) -> Result<MigrationOutcome, MigrateError> {
    let language = detect_language(path.to_str().unwrap_or(""));
    let source = fs::read_to_string(path).map_err(ParseError::from)?;
    migrate_source(&source, language, config)
}

/// Every identifier-like name in the file.
fn identifiers(root: Node<'_>, source: &str) -> HashSet<String> {
    let mut names = HashSet::new();
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if matches!(
            node.kind(),
            "identifier" | "type_identifier" | "shorthand_property_identifier" | "shorthand_property_identifier_pattern"
        ) {
            names.insert(node_text(node, source).to_string());
        }
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return names;
            }
        }
    }
}
