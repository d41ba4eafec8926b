//! Attribute partitioning
//!
//! Splits an element's attributes into the DIRECT, TRANSFORM, STYLE, DROP
//! and unrecognized buckets of a [`PropTable`]. Every attribute index lands
//! in exactly one bucket.

use super::{Class, Convert, PropTable, Rename, UnknownPolicy};
use crate::diagnostics::{DiagnosticKind, DiagnosticSink};
use crate::parser::jsx::Attribute;
use crate::render::{jsx_expr_attr, jsx_string_attr};
use crate::tokens::{convert, Token};

/// One generated style property.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleEntry {
    /// Source attribute index
    pub index: usize,
    pub key: &'static str,
    /// JS expression
    pub value: String,
    order: usize,
}

/// Result of [`partition`]. Indices point into the attribute slice.
#[derive(Debug, Default)]
pub struct Partition {
    pub direct: Vec<usize>,
    /// Index and rendered replacement attribute
    pub transformed: Vec<(usize, String)>,
    /// Ordered by style rule declaration order
    pub style: Vec<StyleEntry>,
    pub dropped: Vec<usize>,
    /// Index and whether it is kept in the output
    pub unrecognized: Vec<(usize, bool)>,
}

impl Partition {
    /// Attributes that survive on the element, in source order, as
    /// `(name, text)` pairs. Spreads are named `...`.
    pub fn kept(&self, attributes: &[Attribute]) -> Vec<(String, String)> {
        let mut kept: Vec<(usize, String, String)> = Vec::new();
        for &i in &self.direct {
            kept.push((i, attributes[i].name().to_string(), attributes[i].source.clone()));
        }
        for (i, text) in &self.transformed {
            let name = text.split('=').next().unwrap_or(text).to_string();
            kept.push((*i, name, text.clone()));
        }
        for &(i, keep) in &self.unrecognized {
            if keep {
                kept.push((i, attributes[i].name().to_string(), attributes[i].source.clone()));
            }
        }
        kept.sort_by_key(|(i, _, _)| *i);
        kept.into_iter().map(|(_, name, text)| (name, text)).collect()
    }
}

/// Partition `attributes` with `table`, recording warnings into `sink`.
pub fn partition(attributes: &[Attribute], table: &'static PropTable, sink: &mut dyn DiagnosticSink) -> Partition {
    let mut result = Partition::default();
    let classes: Vec<Option<Class>> = attributes
        .iter()
        .map(|a| a.name.as_deref().map(|n| table.classify(n)))
        .collect();

    // Names held by attributes that stay as they are
    let held = |name: &str| {
        attributes.iter().zip(&classes).any(|(a, class)| {
            a.name.as_deref() == Some(name)
                && match class {
                    Some(Class::Direct) => true,
                    Some(Class::Unrecognized) => table.unknown == UnknownPolicy::KeepWithWarning,
                    _ => false,
                }
        })
    };

    let mut renamed_to: Vec<(&'static str, &str)> = Vec::new();
    let mut style_keys: Vec<(&'static str, &str)> = Vec::new();

    for (i, (attr, class)) in attributes.iter().zip(&classes).enumerate() {
        let Some(class) = class else {
            sink.record(
                DiagnosticKind::SpreadAttribute,
                format!("spread `{}` cannot be classified, kept as is", attr.source),
            );
            result.unrecognized.push((i, true));
            continue;
        };
        let name = attr.name();
        match *class {
            Class::Drop { warn } => {
                if warn {
                    sink.record(
                        DiagnosticKind::UnsupportedProp,
                        format!("prop `{}` has no Nordlys equivalent, dropped", name),
                    );
                }
                result.dropped.push(i);
            }
            Class::Transform(rename) => {
                if held(rename.to) {
                    sink.record(
                        DiagnosticKind::Collision,
                        format!(
                            "`{}` would be renamed to `{}`, which is already set; `{}` dropped",
                            name, rename.to, name
                        ),
                    );
                    result.dropped.push(i);
                } else if let Some((_, first)) = renamed_to.iter().find(|(to, _)| *to == rename.to) {
                    sink.record(
                        DiagnosticKind::Collision,
                        format!(
                            "`{}` and `{}` both rename to `{}`; `{}` dropped",
                            first, name, rename.to, name
                        ),
                    );
                    result.dropped.push(i);
                } else {
                    renamed_to.push((rename.to, name));
                    result.transformed.push((i, render_rename(attr, rename, sink)));
                }
            }
            Class::Style { rule, order } => {
                if let Some((_, first)) = style_keys.iter().find(|(key, _)| *key == rule.key) {
                    sink.record(
                        DiagnosticKind::Collision,
                        format!(
                            "`{}` and `{}` both set style `{}`; `{}` dropped",
                            first, name, rule.key, name
                        ),
                    );
                    result.dropped.push(i);
                    continue;
                }
                style_keys.push((rule.key, name));
                let value = match rule.convert {
                    Convert::Verbatim => attr.value_js(),
                    Convert::Scale(scale) => match attr.token() {
                        Some(token) => convert(scale.map(), &token, sink).to_js(),
                        None => {
                            sink.record(
                                DiagnosticKind::UnmappedToken,
                                format!(
                                    "dynamic value for `{}` is not a {} token, passed through unchanged",
                                    name,
                                    scale.map().name
                                ),
                            );
                            attr.value_js()
                        }
                    },
                };
                result.style.push(StyleEntry { index: i, key: rule.key, value, order });
            }
            Class::Direct => result.direct.push(i),
            Class::Unrecognized => {
                let keep = table.unknown == UnknownPolicy::KeepWithWarning;
                let outcome = if keep { "kept as is" } else { "dropped" };
                sink.record(
                    DiagnosticKind::UnrecognizedProp,
                    format!("unknown prop `{}` {}", name, outcome),
                );
                result.unrecognized.push((i, keep));
            }
        }
    }

    result.style.sort_by_key(|entry| entry.order);
    result
}

/// Render a renamed attribute, remapping static values if the rename asks for it.
fn render_rename(attr: &Attribute, rename: &Rename, sink: &mut dyn DiagnosticSink) -> String {
    let Convert::Scale(scale) = rename.convert else {
        return attr.renamed(rename.to);
    };
    match attr.token() {
        Some(token) => match convert(scale.map(), &token, sink) {
            Token::Name(value) => jsx_string_attr(rename.to, &value),
            Token::Number(value) => jsx_expr_attr(rename.to, &value),
        },
        None => {
            sink.record(
                DiagnosticKind::UnmappedToken,
                format!(
                    "dynamic value for `{}` is not a {} token, passed through unchanged",
                    attr.name(),
                    scale.map().name
                ),
            );
            attr.renamed(rename.to)
        }
    }
}
