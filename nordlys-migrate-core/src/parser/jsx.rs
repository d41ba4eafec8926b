//! Read model over JSX elements
//!
//! Rewriters never touch tree-sitter nodes directly. Each element is
//! snapshotted into an [`ElementView`]: tag text, attributes with their
//! verbatim source, children, and the byte spans needed to plan edits.

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;
use tree_sitter::Node;

use super::{named_children, node_text};
use crate::render::js_string;
use crate::source_utils::{line_indent, offset_to_position};
use crate::tokens::Token;

static JSX_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\n\s*").expect("valid regex"));

/// Node kinds that are JSX elements
pub const ELEMENT_KINDS: &[&str] = &["jsx_element", "jsx_self_closing_element"];

/// Snapshot of one JSX element.
#[derive(Debug, Clone)]
pub struct ElementView {
    /// Tag text as written (`Box`, `NB.Box`, `Alert.Icon`)
    pub tag: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Child>,
    /// Whole element
    pub span: Range<usize>,
    /// Opening (or self-closing) tag
    pub open_span: Range<usize>,
    pub close_span: Option<Range<usize>>,
    /// Non-blank children, from the first one to the last one
    pub content_span: Option<Range<usize>>,
    pub line: u32,
    pub column: u32,
    /// Leading whitespace of the line the element starts on
    pub indent: String,
    /// Whether the opening tag spans several lines
    pub multiline_open: bool,
}

/// One attribute of an opening tag.
#[derive(Debug, Clone)]
pub struct Attribute {
    /// `None` for spread attributes
    pub name: Option<String>,
    pub value: AttrValue,
    /// Verbatim source of the whole attribute
    pub source: String,
}

#[derive(Debug, Clone)]
pub enum AttrValue {
    /// Bare attribute (`isDisabled`)
    Flag,
    /// String attribute, content without quotes
    Str(String),
    /// Expression container (`{...}`) or a bare element value
    Expr { source: String, literal: Literal },
    /// `{...rest}`
    Spread,
}

/// Statically known shape of an expression value.
#[derive(Debug, Clone)]
pub enum Literal {
    Number(String),
    Str(String),
    Element(Box<ElementView>),
    /// Any other expression
    Dynamic,
}

#[derive(Debug, Clone)]
pub enum Child {
    /// Raw `jsx_text`, whitespace included
    Text(String),
    /// `{expr}`; `inner` is the expression without braces, empty for `{}`
    /// and comment-only containers
    Expr { source: String, inner: String, has_jsx: bool },
    Element(Box<ElementView>),
}

impl Attribute {
    pub fn is_spread(&self) -> bool {
        self.name.is_none()
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("...")
    }

    /// The value as a JS expression (`true` for flags).
    pub fn value_js(&self) -> String {
        match &self.value {
            AttrValue::Flag => "true".to_string(),
            AttrValue::Str(s) => js_string(s),
            AttrValue::Expr { source, .. } => source.clone(),
            AttrValue::Spread => self.source.clone(),
        }
    }

    /// Static token value, if the attribute holds a string or numeric literal.
    pub fn token(&self) -> Option<Token> {
        match &self.value {
            AttrValue::Str(s) => Some(Token::Name(s.clone())),
            AttrValue::Expr { literal: Literal::Str(s), .. } => Some(Token::Name(s.clone())),
            AttrValue::Expr { literal: Literal::Number(n), .. } => Some(Token::Number(n.clone())),
            _ => None,
        }
    }

    /// Static string value.
    pub fn static_str(&self) -> Option<&str> {
        match &self.value {
            AttrValue::Str(s) => Some(s),
            AttrValue::Expr { literal: Literal::Str(s), .. } => Some(s),
            _ => None,
        }
    }

    /// Source of the value as it would appear after `name=`.
    pub fn value_source(&self) -> &str {
        match self.source.find('=') {
            Some(eq) if !self.is_spread() => self.source[eq + 1..].trim_start(),
            _ => "",
        }
    }

    /// Same value under a different name, keeping the original quoting.
    pub fn renamed(&self, new_name: &str) -> String {
        match self.value {
            AttrValue::Flag => new_name.to_string(),
            _ => format!("{}={}", new_name, self.value_source()),
        }
    }
}

impl Child {
    /// Whitespace-only text or an empty/comment expression container.
    pub fn is_blank(&self) -> bool {
        match self {
            Child::Text(text) => text.trim().is_empty(),
            Child::Expr { inner, .. } => inner.trim().is_empty(),
            Child::Element(_) => false,
        }
    }
}

impl ElementView {
    /// Snapshot a `jsx_element` or `jsx_self_closing_element`.
    pub fn from_node(node: Node<'_>, source: &str) -> Option<ElementView> {
        let (open, close) = match node.kind() {
            "jsx_self_closing_element" => (node, None),
            "jsx_element" => (
                node.child_by_field_name("open_tag")?,
                node.child_by_field_name("close_tag"),
            ),
            _ => return None,
        };
        // Fragments have no name
        let tag = node_text(open.child_by_field_name("name")?, source).to_string();

        let mut cursor = open.walk();
        let attributes = open
            .children_by_field_name("attribute", &mut cursor)
            .filter_map(|attr| read_attribute(attr, source))
            .collect();

        let child_nodes: Vec<Node<'_>> = if close.is_some() {
            named_children(node)
                .into_iter()
                .filter(|c| c.id() != open.id() && close.map_or(true, |cl| cl.id() != c.id()))
                .collect()
        } else {
            Vec::new()
        };
        let mut children = Vec::new();
        let mut content_span: Option<Range<usize>> = None;
        for child_node in child_nodes {
            let Some(child) = read_child(child_node, source) else {
                continue;
            };
            if !child.is_blank() {
                let range = trimmed_range(source, child_node.byte_range());
                content_span = Some(match content_span {
                    Some(existing) => existing.start..range.end,
                    None => range,
                });
            }
            children.push(child);
        }

        let (line, column) = offset_to_position(source, node.start_byte());
        Some(ElementView {
            tag,
            attributes,
            children,
            span: node.byte_range(),
            open_span: open.byte_range(),
            close_span: close.map(|c| c.byte_range()),
            content_span,
            line,
            column,
            indent: line_indent(source, node.start_byte()).to_string(),
            multiline_open: node_text(open, source).contains('\n'),
        })
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name.as_deref() == Some(name))
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Children, without the blank ones.
    pub fn content(&self) -> Vec<&Child> {
        self.children.iter().filter(|c| !c.is_blank()).collect()
    }
}

/// Collapse JSX text whitespace the way JSX does: lines are trimmed and
/// joined, whitespace-only lines vanish.
pub fn normalize_jsx_text(text: &str) -> String {
    JSX_WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// All JSX elements under `root`, in pre-order.
pub fn collect_elements<'t>(root: Node<'t>) -> Vec<Node<'t>> {
    let mut out = Vec::new();
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if ELEMENT_KINDS.contains(&node.kind()) {
            out.push(node);
        }
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return out;
            }
        }
    }
}

/// Whether any JSX element or fragment exists under `root`.
pub fn contains_jsx(root: Node<'_>) -> bool {
    let mut cursor = root.walk();
    loop {
        let kind = cursor.node().kind();
        if ELEMENT_KINDS.contains(&kind) || kind == "jsx_fragment" {
            return true;
        }
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return false;
            }
        }
    }
}

fn read_attribute(node: Node<'_>, source: &str) -> Option<Attribute> {
    let text = node_text(node, source).to_string();
    match node.kind() {
        "jsx_attribute" => {
            let parts = named_children(node);
            let name = node_text(*parts.first()?, source).to_string();
            let value = match parts.get(1) {
                None => AttrValue::Flag,
                Some(value) => read_value(*value, source),
            };
            Some(Attribute { name: Some(name), value, source: text })
        }
        // `{...props}`
        "jsx_expression" => Some(Attribute { name: None, value: AttrValue::Spread, source: text }),
        _ => None,
    }
}

fn read_value(node: Node<'_>, source: &str) -> AttrValue {
    match node.kind() {
        "string" => AttrValue::Str(unquote(node_text(node, source)).to_string()),
        "jsx_expression" => match expression_of(node) {
            Some(expr) => AttrValue::Expr {
                source: node_text(expr, source).to_string(),
                literal: read_literal(expr, source),
            },
            None => AttrValue::Expr { source: String::new(), literal: Literal::Dynamic },
        },
        _ => AttrValue::Expr {
            source: node_text(node, source).to_string(),
            literal: read_literal(node, source),
        },
    }
}

fn read_literal(node: Node<'_>, source: &str) -> Literal {
    match node.kind() {
        "number" => Literal::Number(node_text(node, source).to_string()),
        "string" => {
            let inner = unquote(node_text(node, source));
            if inner.contains('\\') {
                Literal::Dynamic
            } else {
                Literal::Str(inner.to_string())
            }
        }
        "jsx_element" | "jsx_self_closing_element" => match ElementView::from_node(node, source) {
            Some(view) => Literal::Element(Box::new(view)),
            None => Literal::Dynamic,
        },
        "parenthesized_expression" => match named_children(node).first() {
            Some(inner) => read_literal(*inner, source),
            None => Literal::Dynamic,
        },
        _ => Literal::Dynamic,
    }
}

fn read_child(node: Node<'_>, source: &str) -> Option<Child> {
    match node.kind() {
        "jsx_text" | "html_character_reference" => Some(Child::Text(node_text(node, source).to_string())),
        "jsx_expression" => Some(Child::Expr {
            source: node_text(node, source).to_string(),
            inner: expression_of(node)
                .map(|e| node_text(e, source).to_string())
                .unwrap_or_default(),
            has_jsx: contains_jsx(node),
        }),
        "jsx_element" | "jsx_self_closing_element" => {
            ElementView::from_node(node, source).map(|v| Child::Element(Box::new(v)))
        }
        "jsx_fragment" => Some(Child::Expr {
            source: node_text(node, source).to_string(),
            inner: node_text(node, source).to_string(),
            has_jsx: true,
        }),
        _ => None,
    }
}

/// `range` without its leading and trailing whitespace.
fn trimmed_range(source: &str, range: Range<usize>) -> Range<usize> {
    let text = &source[range.clone()];
    let start = range.start + (text.len() - text.trim_start().len());
    let end = range.end - (text.len() - text.trim_end().len());
    start..end.max(start)
}

/// The expression inside `{ ... }`, skipping comments.
fn expression_of(container: Node<'_>) -> Option<Node<'_>> {
    named_children(container).into_iter().find(|c| c.kind() != "comment")
}

fn unquote(text: &str) -> &str {
    if text.len() >= 2 {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_source;

    fn first_element(source: &str) -> ElementView {
        let tree = parse_source(source, "tsx").unwrap();
        let nodes = collect_elements(tree.root_node());
        ElementView::from_node(nodes[0], source).unwrap()
    }

    #[test]
    fn test_reads_attributes() {
        let view = first_element("const a = <Box bg=\"blue.500\" p={4} isDisabled {...rest} />;");
        assert_eq!(view.tag, "Box");
        assert!(view.close_span.is_none());
        let names: Vec<&str> = view.attributes.iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["bg", "p", "isDisabled", "..."]);
        assert_eq!(view.attributes[0].static_str(), Some("blue.500"));
        assert_eq!(view.attributes[1].token(), Some(Token::Number("4".to_string())));
        assert!(matches!(view.attributes[2].value, AttrValue::Flag));
        assert!(view.attributes[3].is_spread());
        assert_eq!(view.attributes[3].source, "{...rest}");
    }

    #[test]
    fn test_reads_children_and_spans() {
        let source = "const a = (\n  <Button onPress={go}>\n    Save\n  </Button>\n);";
        let view = first_element(source);
        assert_eq!(view.indent, "  ");
        assert_eq!(view.line, 2);
        assert_eq!(&source[view.open_span.clone()], "<Button onPress={go}>");
        assert_eq!(&source[view.content_span.clone().unwrap()], "Save");
        let content = view.content();
        assert_eq!(content.len(), 1);
        match content[0] {
            Child::Text(text) => assert_eq!(normalize_jsx_text(text), "Save"),
            other => panic!("unexpected child {:?}", other),
        }
    }

    #[test]
    fn test_element_valued_expression() {
        let view = first_element("const a = <Button leftIcon={<Icon name=\"plus\" />} />;");
        match &view.attributes[0].value {
            AttrValue::Expr { literal: Literal::Element(icon), .. } => {
                assert_eq!(icon.tag, "Icon");
                assert_eq!(icon.attribute("name").and_then(|a| a.static_str()), Some("plus"));
            }
            other => panic!("unexpected value {:?}", other),
        }
    }

    #[test]
    fn test_renamed_keeps_quoting() {
        let view = first_element("const a = <Input placeholder='Email' isDisabled />;");
        assert_eq!(view.attributes[0].renamed("label"), "label='Email'");
        assert_eq!(view.attributes[1].renamed("disabled"), "disabled");
    }

    #[test]
    fn test_member_tag_and_preorder() {
        let tree = parse_source("const a = <NB.Box><NB.Text>hi</NB.Text></NB.Box>;", "tsx").unwrap();
        let source = "const a = <NB.Box><NB.Text>hi</NB.Text></NB.Box>;";
        let tags: Vec<String> = collect_elements(tree.root_node())
            .into_iter()
            .filter_map(|n| ElementView::from_node(n, source))
            .map(|v| v.tag)
            .collect();
        assert_eq!(tags, vec!["NB.Box", "NB.Text"]);
    }

    #[test]
    fn test_normalize_jsx_text() {
        assert_eq!(normalize_jsx_text("\n    Save\n    changes\n  "), "Save changes");
    }
}
