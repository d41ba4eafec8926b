//! Import binding table and import rewriting
//!
//! [`ImportTable`] records every top-level `import` so element tags can be
//! traced back to a legacy module. [`ImportRewriter`] then plans the import
//! edits for a file: same-name components move to their target modules,
//! retagged components get their new export ensured, and configured path
//! redirects are applied.

use indexmap::IndexMap;
use std::collections::HashSet;
use std::ops::Range;
use std::str::FromStr;
use tree_sitter::Node;

use crate::components::LegacyComponent;
use crate::config::MigrationConfig;
use crate::diagnostics::{DiagnosticKind, DiagnosticSink, Located};
use crate::edit::Edit;
use crate::parser::{has_keyword_child, named_children, node_text};
use crate::render::{import_statement, js_string};
use crate::source_utils::{offset_to_position, statement_removal_range};

/// One `{ name as alias }` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpecifier {
    /// Exported name
    pub name: String,
    /// Local binding
    pub local: String,
    /// Inline `type` marker
    pub type_only: bool,
    pub span: Range<usize>,
    pub source: String,
}

/// One `import ... from '...'` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    pub span: Range<usize>,
    pub module: String,
    /// The quoted module path
    pub module_span: Range<usize>,
    /// `import type { ... }`
    pub type_only: bool,
    pub default: Option<String>,
    pub default_span: Option<Range<usize>>,
    pub namespace: Option<String>,
    pub named: Vec<ImportSpecifier>,
    /// Named specifiers spread over several lines
    pub multiline: bool,
}

impl ImportStatement {
    fn from_node(node: Node<'_>, source: &str) -> Option<ImportStatement> {
        let module_node = node.child_by_field_name("source")?;
        let quoted = node_text(module_node, source);
        let module = quoted.get(1..quoted.len().saturating_sub(1))?.to_string();

        let mut statement = ImportStatement {
            span: node.byte_range(),
            module,
            module_span: module_node.byte_range(),
            type_only: has_keyword_child(node, "type"),
            default: None,
            default_span: None,
            namespace: None,
            named: Vec::new(),
            multiline: false,
        };

        // Side-effect imports have no clause
        let Some(clause) = named_children(node).into_iter().find(|c| c.kind() == "import_clause") else {
            return Some(statement);
        };
        for part in named_children(clause) {
            match part.kind() {
                "identifier" => {
                    statement.default = Some(node_text(part, source).to_string());
                    statement.default_span = Some(part.byte_range());
                }
                "namespace_import" => {
                    statement.namespace = named_children(part)
                        .into_iter()
                        .find(|c| c.kind() == "identifier")
                        .map(|c| node_text(c, source).to_string());
                }
                "named_imports" => {
                    statement.multiline = node_text(part, source).contains('\n');
                    for spec in named_children(part) {
                        if spec.kind() != "import_specifier" {
                            continue;
                        }
                        let Some(name) = spec.child_by_field_name("name") else {
                            continue;
                        };
                        let name = node_text(name, source).to_string();
                        let local = spec
                            .child_by_field_name("alias")
                            .map(|a| node_text(a, source).to_string())
                            .unwrap_or_else(|| name.clone());
                        statement.named.push(ImportSpecifier {
                            name,
                            local,
                            type_only: has_keyword_child(spec, "type"),
                            span: spec.byte_range(),
                            source: node_text(spec, source).to_string(),
                        });
                    }
                }
                _ => {}
            }
        }
        Some(statement)
    }

    /// Whether anything other than the `removed` specifiers would remain.
    fn keeps_something(&self, removed: &HashSet<Range<usize>>) -> bool {
        self.default.is_some() || self.namespace.is_some() || self.named.iter().any(|s| !removed.contains(&s.span))
    }
}

/// How an element tag reaches the legacy module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Not bound to a legacy import
    NotLegacy,
    /// A component with a rule. `root` is the local binding the tag starts
    /// with; `namespace` is set for `NB.Box` style tags.
    Component {
        component: LegacyComponent,
        imported: String,
        root: String,
        namespace: bool,
    },
    /// Bound to a legacy import, but no rule exists (`Center`, `Alert.Icon`)
    Unmapped { name: String, root: String },
}

/// Per-file import binding table.
#[derive(Debug, Clone, Default)]
pub struct ImportTable {
    pub statements: Vec<ImportStatement>,
}

impl ImportTable {
    /// Collect the top-level import statements under `root`.
    pub fn from_tree(root: Node<'_>, source: &str) -> Self {
        let statements = named_children(root)
            .into_iter()
            .filter(|n| n.kind() == "import_statement")
            .filter_map(|n| ImportStatement::from_node(n, source))
            .collect();
        ImportTable { statements }
    }

    pub fn has_legacy(&self, config: &MigrationConfig) -> bool {
        self.statements.iter().any(|s| config.is_legacy_source(&s.module))
    }

    fn legacy<'a>(&'a self, config: &'a MigrationConfig) -> impl Iterator<Item = &'a ImportStatement> + 'a {
        self.statements.iter().filter(move |s| config.is_legacy_source(&s.module))
    }

    /// Trace a JSX tag to a legacy import.
    pub fn resolve(&self, tag: &str, config: &MigrationConfig) -> Resolution {
        let mut parts = tag.split('.');
        let root = parts.next().unwrap_or(tag).to_string();
        let members: Vec<&str> = parts.collect();

        for statement in self.legacy(config).filter(|s| !s.type_only) {
            if statement.namespace.as_deref() == Some(root.as_str()) {
                return match members.as_slice() {
                    [member] => match LegacyComponent::from_str(member) {
                        Ok(component) => Resolution::Component {
                            component,
                            imported: member.to_string(),
                            root,
                            namespace: true,
                        },
                        Err(_) => Resolution::Unmapped { name: member.to_string(), root },
                    },
                    _ => Resolution::Unmapped { name: members.join("."), root },
                };
            }
            let Some(spec) = statement.named.iter().find(|n| n.local == root && !n.type_only) else {
                continue;
            };
            if !members.is_empty() {
                let name = format!("{}.{}", spec.name, members.join("."));
                return Resolution::Unmapped { name, root };
            }
            return match LegacyComponent::from_str(&spec.name) {
                Ok(component) => Resolution::Component {
                    component,
                    imported: spec.name.clone(),
                    root,
                    namespace: false,
                },
                Err(_) => Resolution::Unmapped { name: spec.name.clone(), root },
            };
        }
        Resolution::NotLegacy
    }
}

/// Module a statement points at once redirects are applied.
fn effective_module<'s>(config: &'s MigrationConfig, statement: &'s ImportStatement) -> &'s str {
    config.redirect(&statement.module).unwrap_or(&statement.module)
}

/// Plans all import edits for one file.
pub struct ImportRewriter<'a> {
    table: &'a ImportTable,
    config: &'a MigrationConfig,
    source: &'a str,
    /// module → exports that must be importable, in first-seen order
    ensured: IndexMap<String, Vec<String>>,
    reported: HashSet<String>,
}

impl<'a> ImportRewriter<'a> {
    pub fn new(table: &'a ImportTable, config: &'a MigrationConfig, source: &'a str) -> Self {
        ImportRewriter {
            table,
            config,
            source,
            ensured: IndexMap::new(),
            reported: HashSet::new(),
        }
    }

    /// Whether a named legacy import of `imported` moves to its own
    /// statement. That is the case when the target keeps the exported name;
    /// other components are retagged and their legacy specifier is left for
    /// the pruner.
    pub fn relocates(&self, imported: &str) -> bool {
        match LegacyComponent::from_str(imported) {
            Ok(component) => self.config.target(component).name == imported,
            Err(_) => false,
        }
    }

    /// Make `name` importable from `module`.
    pub fn ensure(&mut self, module: &str, name: &str) {
        let names = self.ensured.entry(module.to_string()).or_default();
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }

    /// Record one `unmapped-component` warning per name.
    pub fn report_unmapped(&mut self, name: &str, sink: &mut dyn DiagnosticSink) {
        if self.reported.insert(name.to_string()) {
            sink.record(
                DiagnosticKind::UnmappedComponent,
                format!("`{}` has no migration rule, left unchanged", name),
            );
        }
    }

    /// Plan the import edits.
    pub fn plan(&mut self, sink: &mut dyn DiagnosticSink) -> Vec<Edit> {
        let table = self.table;
        let config = self.config;

        for statement in table.legacy(config).filter(|s| !s.type_only) {
            for spec in statement.named.iter().filter(|s| !s.type_only) {
                if LegacyComponent::from_str(&spec.name).is_err() {
                    let (line, column) = offset_to_position(self.source, spec.span.start);
                    let mut located = Located::new(sink, line, column, &spec.local);
                    self.report_unmapped(&spec.name, &mut located);
                }
            }
        }

        // module → (value specifiers, type-only specifiers)
        let mut generated: IndexMap<String, (Vec<String>, Vec<String>)> = IndexMap::new();
        let mut relocated: HashSet<Range<usize>> = HashSet::new();
        for statement in table.legacy(config) {
            for spec in &statement.named {
                let Ok(component) = LegacyComponent::from_str(&spec.name) else {
                    continue;
                };
                if !self.relocates(&spec.name) {
                    continue;
                }
                let module = self.redirected(&config.target(component).module);
                let entry = generated.entry(module).or_default();
                if statement.type_only {
                    entry.1.push(spec.source.clone());
                } else {
                    entry.0.push(spec.source.clone());
                }
                relocated.insert(spec.span.clone());
            }
        }

        // Names still missing, keyed by the module they end up imported from
        let mut missing: IndexMap<String, Vec<String>> = IndexMap::new();
        for (module, names) in &self.ensured {
            let module = self.redirected(module);
            for name in names {
                if self.already_imported(&module, name) {
                    continue;
                }
                let entry = missing.entry(module.clone()).or_default();
                if !entry.contains(name) {
                    entry.push(name.clone());
                }
            }
        }

        let mut edits = Vec::new();
        for (module, names) in missing {
            if let Some(edit) = self.merge_into_existing(&module, &names) {
                edits.push(edit);
                continue;
            }
            let entry = generated.entry(module).or_default();
            for name in names {
                if !entry.0.contains(&name) {
                    entry.0.push(name);
                }
            }
        }

        let mut new_statements: Vec<String> = Vec::new();
        for (module, (values, types)) in &generated {
            if !values.is_empty() {
                new_statements.push(import_statement(false, None, None, values, module, false));
            }
            if !types.is_empty() {
                new_statements.push(import_statement(true, None, None, types, module, false));
            }
        }
        let mut pending = (!new_statements.is_empty()).then(|| new_statements.join("\n"));

        for statement in table.legacy(config) {
            let touched = statement.named.iter().any(|s| relocated.contains(&s.span));
            let redirect = config.redirect(&statement.module);
            let prefix = pending.take();

            if !touched && redirect.is_none() {
                if let Some(prefix) = prefix {
                    edits.push(Edit::insert(statement.span.start, format!("{}\n", prefix)));
                }
                continue;
            }

            let remainder = statement.keeps_something(&relocated).then(|| {
                let named: Vec<String> = statement
                    .named
                    .iter()
                    .filter(|s| !relocated.contains(&s.span))
                    .map(|s| s.source.clone())
                    .collect();
                import_statement(
                    statement.type_only,
                    statement.default.as_deref(),
                    statement.namespace.as_deref(),
                    &named,
                    redirect.unwrap_or(&statement.module),
                    statement.multiline,
                )
            });

            match (prefix, remainder) {
                (Some(prefix), Some(rest)) => edits.push(Edit::replace(
                    statement.span.start,
                    statement.span.end,
                    format!("{}\n{}", prefix, rest),
                )),
                (Some(text), None) | (None, Some(text)) => {
                    edits.push(Edit::replace(statement.span.start, statement.span.end, text))
                }
                (None, None) => {
                    let (start, end) = statement_removal_range(self.source, statement.span.start, statement.span.end);
                    edits.push(Edit::delete(start, end));
                }
            }
        }

        // Other imports only have their path swapped
        for statement in table.statements.iter().filter(|s| !config.is_legacy_source(&s.module)) {
            if let Some(path) = config.redirect(&statement.module) {
                edits.push(Edit::replace(
                    statement.module_span.start,
                    statement.module_span.end,
                    js_string(path),
                ));
            }
        }

        edits
    }

    fn redirected(&self, module: &str) -> String {
        self.config.redirect(module).unwrap_or(module).to_string()
    }

    /// A value import from `module` already binds `name` under its own name.
    fn already_imported(&self, module: &str, name: &str) -> bool {
        self.table.statements.iter().any(|s| {
            effective_module(self.config, s) == module
                && !s.type_only
                && s.named.iter().any(|n| n.name == name && n.local == name && !n.type_only)
        })
    }

    /// Insert `names` into an existing value import from `module`, as one
    /// edit so a default-only import gets a single named clause.
    fn merge_into_existing(&self, module: &str, names: &[String]) -> Option<Edit> {
        let statement = self.table.statements.iter().find(|s| {
            effective_module(self.config, s) == module
                && !s.type_only
                && s.namespace.is_none()
                && !self.config.is_legacy_source(&s.module)
                && (!s.named.is_empty() || s.default.is_some())
        })?;
        match (statement.named.last(), &statement.default_span) {
            (Some(last), _) => {
                let separator = if statement.multiline { ",\n  " } else { ", " };
                let text: String = names.iter().map(|name| format!("{}{}", separator, name)).collect();
                Some(Edit::insert(last.span.end, text))
            }
            (None, Some(default)) => Some(Edit::insert(default.end, format!(", {{ {} }}", names.join(", ")))),
            (None, None) => None,
        }
    }
}
