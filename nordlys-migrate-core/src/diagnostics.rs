//! Diagnostics channel
//!
//! Every non-fatal problem found while rewriting (unmapped tokens, unknown
//! props, unsupported shapes) is recorded through a [`DiagnosticSink`]
//! passed down the call chain. Nothing here aborts a rewrite.

use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Category of a diagnostic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Display, AsRefStr, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DiagnosticKind {
    /// A token had no entry in its scale map and was passed through
    UnmappedToken,
    /// An attribute name no bucket of the component's table knows
    UnrecognizedProp,
    /// A known legacy prop with no target equivalent, dropped
    UnsupportedProp,
    /// Custom composite logic did not find the prop combination it expects
    UnsupportedShape,
    /// A renamed or style prop collided with one already emitted
    Collision,
    /// A `{...spread}` attribute whose contents cannot be classified
    SpreadAttribute,
    /// A legacy import with no migration rule
    UnmappedComponent,
    /// A pipeline step was skipped
    Internal,
}

/// A single recorded warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

/// Receiver for diagnostics.
pub trait DiagnosticSink {
    fn record(&mut self, kind: DiagnosticKind, message: String);
}

/// Collects diagnostics in recording order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of diagnostics of the given kind
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.entries.iter().filter(|d| d.kind == kind).count()
    }

    /// Render as `warning: <file>:<message>` lines, one per entry.
    pub fn render(&self, file: &str) -> String {
        let mut out = String::new();
        for d in &self.entries {
            out.push_str(&format!("warning: {}:{} [{}]\n", file, d.message, d.kind));
        }
        out
    }
}

impl DiagnosticSink for Diagnostics {
    fn record(&mut self, kind: DiagnosticKind, message: String) {
        self.entries.push(Diagnostic { kind, message });
    }
}

/// Sink adapter that prefixes every message with an element location.
///
/// Messages come out as `<line>:<col>: <Tag> <message>`.
pub struct Located<'a> {
    inner: &'a mut dyn DiagnosticSink,
    prefix: String,
}

impl<'a> Located<'a> {
    pub fn new(inner: &'a mut dyn DiagnosticSink, line: u32, column: u32, tag: &str) -> Self {
        Self {
            inner,
            prefix: format!("{}:{}: <{}>", line, column, tag),
        }
    }
}

impl DiagnosticSink for Located<'_> {
    fn record(&mut self, kind: DiagnosticKind, message: String) {
        self.inner.record(kind, format!("{} {}", self.prefix, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_kind_names_are_kebab_case() {
        assert_eq!(DiagnosticKind::UnmappedToken.to_string(), "unmapped-token");
        assert_eq!(
            DiagnosticKind::from_str("spread-attribute").unwrap(),
            DiagnosticKind::SpreadAttribute
        );
    }

    #[test]
    fn test_located_prefixes_messages() {
        let mut diagnostics = Diagnostics::new();
        {
            let mut sink = Located::new(&mut diagnostics, 3, 7, "Box");
            sink.record(DiagnosticKind::UnrecognizedProp, "prop `shadow` kept".to_string());
        }
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.entries()[0].message, "3:7: <Box> prop `shadow` kept");
        assert_eq!(diagnostics.count(DiagnosticKind::UnrecognizedProp), 1);
    }

    #[test]
    fn test_render_lines() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.record(DiagnosticKind::Collision, "1:1: <Input> x".to_string());
        assert_eq!(diagnostics.render("a.tsx"), "warning: a.tsx:1:1: <Input> x [collision]\n");
    }
}
