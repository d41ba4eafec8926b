//! Text rendering for generated code
//!
//! Generated code follows one fixed policy: single-quoted JS strings,
//! 2-space indentation, no tabs. Synthesized JSX string attributes use
//! double quotes.

/// Quote `s` as a single-quoted JS string literal.
pub fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}

/// Render a JSX attribute with a string value.
///
/// Falls back to an expression container when the text cannot sit inside
/// a double-quoted JSX string.
pub fn jsx_string_attr(name: &str, value: &str) -> String {
    if value.contains('"') || value.contains('\n') {
        format!("{}={{{}}}", name, js_string(value))
    } else {
        format!("{}=\"{}\"", name, value)
    }
}

/// Render a JSX attribute whose value is a JS expression.
pub fn jsx_expr_attr(name: &str, expr: &str) -> String {
    format!("{}={{{}}}", name, expr)
}

/// Render text as a JSX child, escaping through an expression when needed.
pub fn jsx_child_text(text: &str) -> String {
    if text.contains(['{', '}', '<', '>']) {
        format!("{{{}}}", js_string(text))
    } else {
        text.to_string()
    }
}

/// Layout for a rendered opening tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagLayout {
    /// All attributes on one line
    Inline,
    /// One attribute per line, indented two spaces past the tag
    Multiline,
}

/// Render an opening (or self-closing) tag.
pub fn open_tag(tag: &str, attributes: &[String], self_closing: bool, layout: TagLayout, indent: &str) -> String {
    let close = if self_closing { "/>" } else { ">" };
    if attributes.is_empty() {
        return if self_closing {
            format!("<{} />", tag)
        } else {
            format!("<{}>", tag)
        };
    }
    match layout {
        TagLayout::Inline => {
            let sep = if self_closing { " " } else { "" };
            format!("<{} {}{}{}", tag, attributes.join(" "), sep, close)
        }
        TagLayout::Multiline => {
            let mut out = format!("<{}", tag);
            for attribute in attributes {
                out.push('\n');
                out.push_str(indent);
                out.push_str("  ");
                out.push_str(attribute);
            }
            out.push('\n');
            out.push_str(indent);
            out.push_str(close);
            out
        }
    }
}

pub fn close_tag(tag: &str) -> String {
    format!("</{}>", tag)
}

/// Render `import ... from '<module>';`.
///
/// `named` holds specifier texts (`Button`, `Box as B`, `type Props`).
pub fn import_statement(
    type_only: bool,
    default: Option<&str>,
    namespace: Option<&str>,
    named: &[String],
    module: &str,
    multiline_named: bool,
) -> String {
    let mut clause: Vec<String> = Vec::new();
    if let Some(default) = default {
        clause.push(default.to_string());
    }
    if let Some(namespace) = namespace {
        clause.push(format!("* as {}", namespace));
    }
    if !named.is_empty() {
        if multiline_named {
            let mut block = String::from("{\n");
            for specifier in named {
                block.push_str("  ");
                block.push_str(specifier);
                block.push_str(",\n");
            }
            block.push('}');
            clause.push(block);
        } else {
            clause.push(format!("{{ {} }}", named.join(", ")));
        }
    }
    let keyword = if type_only { "import type" } else { "import" };
    format!("{} {} from {};", keyword, clause.join(", "), js_string(module))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string_escapes() {
        assert_eq!(js_string("it's"), "'it\\'s'");
        assert_eq!(js_string("blue.500"), "'blue.500'");
    }

    #[test]
    fn test_jsx_string_attr_falls_back_to_expression() {
        assert_eq!(jsx_string_attr("text", "Save"), "text=\"Save\"");
        assert_eq!(jsx_string_attr("text", "Say \"hi\""), "text={'Say \"hi\"'}");
    }

    #[test]
    fn test_open_tag_inline() {
        let attrs = vec!["a={1}".to_string(), "b".to_string()];
        assert_eq!(open_tag("View", &attrs, false, TagLayout::Inline, ""), "<View a={1} b>");
        assert_eq!(open_tag("View", &attrs, true, TagLayout::Inline, ""), "<View a={1} b />");
        assert_eq!(open_tag("View", &[], true, TagLayout::Inline, ""), "<View />");
    }

    #[test]
    fn test_open_tag_multiline() {
        let attrs = vec!["a={1}".to_string(), "b".to_string()];
        assert_eq!(
            open_tag("Stack", &attrs, false, TagLayout::Multiline, "  "),
            "<Stack\n    a={1}\n    b\n  >"
        );
    }

    #[test]
    fn test_import_statement() {
        assert_eq!(
            import_statement(false, None, None, &["Button".to_string()], "@nordlys/native/button", false),
            "import { Button } from '@nordlys/native/button';"
        );
        assert_eq!(
            import_statement(true, None, None, &["Props".to_string()], "x", false),
            "import type { Props } from 'x';"
        );
        assert_eq!(
            import_statement(false, Some("React"), None, &["useState".to_string()], "react", true),
            "import React, {\n  useState,\n} from 'react';"
        );
    }
}
