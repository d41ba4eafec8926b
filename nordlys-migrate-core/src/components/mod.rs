//! Structural rewriters
//!
//! Every legacy component is described by a [`ComponentRule`]: a static
//! prop table, how styles reach the element, and a hook for composite
//! props. [`rewrite_element`] is the one driver all of them share.

pub mod alert;
pub mod avatar;
pub mod badge;
pub mod button;
pub mod icon;
pub mod input;
pub mod layout;
pub mod pressable;
pub mod stack;
pub mod switch;
pub mod typography;

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::diagnostics::{DiagnosticKind, DiagnosticSink, Located};
use crate::edit::Edit;
use crate::parser::jsx::{normalize_jsx_text, Child, ElementView};
use crate::props::{partition, PropTable, StyleEntry};
use crate::render::{close_tag, jsx_expr_attr, jsx_string_attr, open_tag, TagLayout};
use crate::stylesheet::StyleSheetEmitter;

/// Legacy components with a migration rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, EnumIter)]
pub enum LegacyComponent {
    Box,
    HStack,
    VStack,
    Button,
    Switch,
    Avatar,
    Input,
    Pressable,
    Text,
    Heading,
    Alert,
    Badge,
    Icon,
}

impl LegacyComponent {
    /// Built-in `(module, export)` target. `Box` and `Pressable` come from
    /// the configured layout module instead.
    pub fn default_target(self) -> (&'static str, &'static str) {
        match self {
            LegacyComponent::Box => ("react-native", "View"),
            LegacyComponent::Pressable => ("react-native", "Pressable"),
            LegacyComponent::HStack | LegacyComponent::VStack => ("@nordlys/native/stack", "Stack"),
            LegacyComponent::Text | LegacyComponent::Heading => ("@nordlys/native/typography", "Typography"),
            LegacyComponent::Button => ("@nordlys/native/button", "Button"),
            LegacyComponent::Switch => ("@nordlys/native/switch", "Switch"),
            LegacyComponent::Avatar => ("@nordlys/native/avatar", "Avatar"),
            LegacyComponent::Input => ("@nordlys/native/input", "Input"),
            LegacyComponent::Alert => ("@nordlys/native/alert", "Alert"),
            LegacyComponent::Badge => ("@nordlys/native/badge", "Badge"),
            LegacyComponent::Icon => ("@nordlys/native/icon", "Icon"),
        }
    }

    pub fn rule(self) -> &'static ComponentRule {
        match self {
            LegacyComponent::Box => &layout::RULE,
            LegacyComponent::HStack => &stack::HSTACK_RULE,
            LegacyComponent::VStack => &stack::VSTACK_RULE,
            LegacyComponent::Button => &button::RULE,
            LegacyComponent::Switch => &switch::RULE,
            LegacyComponent::Avatar => &avatar::RULE,
            LegacyComponent::Input => &input::RULE,
            LegacyComponent::Pressable => &pressable::RULE,
            LegacyComponent::Text => &typography::TEXT_RULE,
            LegacyComponent::Heading => &typography::HEADING_RULE,
            LegacyComponent::Alert => &alert::RULE,
            LegacyComponent::Badge => &badge::RULE,
            LegacyComponent::Icon => &icon::RULE,
        }
    }
}

/// How generated styles reach the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Styling {
    /// The target takes a `style` prop
    StyleProp,
    /// The target takes no style; wrap it in the layout container
    Wrapper,
}

/// Composite-prop hook, run after partitioning.
pub type Customize = fn(&ElementView, &mut ElementPlan, &mut dyn DiagnosticSink);

pub struct ComponentRule {
    pub table: &'static PropTable,
    pub styling: Styling,
    pub customize: Customize,
}

/// Hook for components without composite props.
pub fn no_customization(_: &ElementView, _: &mut ElementPlan, _: &mut dyn DiagnosticSink) {}

/// An attribute of the element being emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedAttr {
    pub name: String,
    pub text: String,
}

/// What happens to the element's children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildrenPlan {
    Keep,
    /// Children were folded into a prop; the element becomes self-closing
    Drop,
    /// Insert text around the non-blank children
    Wrap { before: String, after: String },
    /// New children for an element that had none
    Replace(String),
}

/// The element as it will be emitted.
#[derive(Debug, Clone)]
pub struct ElementPlan {
    pub tag: String,
    pub attributes: Vec<PlannedAttr>,
    pub children: ChildrenPlan,
    pub style: Vec<StyleEntry>,
}

impl ElementPlan {
    pub fn has(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name == name)
    }

    pub fn push(&mut self, name: &str, text: String) {
        self.attributes.push(PlannedAttr { name: name.to_string(), text });
    }

    pub fn prepend(&mut self, name: &str, text: String) {
        self.attributes.insert(0, PlannedAttr { name: name.to_string(), text });
    }

    /// Replace attribute `name` in place; returns false if it is absent.
    pub fn replace(&mut self, name: &str, new_name: &str, text: String) -> bool {
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(attr) => {
                attr.name = new_name.to_string();
                attr.text = text;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<PlannedAttr> {
        let pos = self.attributes.iter().position(|a| a.name == name)?;
        Some(self.attributes.remove(pos))
    }
}

/// Per-file state the driver writes into.
pub struct RewriteContext<'a> {
    pub stylesheet: &'a mut StyleSheetEmitter,
    /// Layout container tag used for wrappers
    pub container: &'a str,
}

/// Planned edits for one element.
#[derive(Debug, Default)]
pub struct Rewrite {
    pub edits: Vec<Edit>,
    /// The element was wrapped in the layout container
    pub wrapped: bool,
}

/// Plan the rewrite of one matched element.
///
/// `tag` is the tag to emit (already resolved against the import plan).
pub fn rewrite_element(
    view: &ElementView,
    component: LegacyComponent,
    tag: &str,
    source: &str,
    ctx: &mut RewriteContext<'_>,
    sink: &mut dyn DiagnosticSink,
) -> Rewrite {
    let mut sink = Located::new(sink, view.line, view.column, &view.tag);
    let rule = component.rule();

    let part = partition(&view.attributes, rule.table, &mut sink);
    let mut plan = ElementPlan {
        tag: tag.to_string(),
        attributes: part
            .kept(&view.attributes)
            .into_iter()
            .map(|(name, text)| PlannedAttr { name, text })
            .collect(),
        children: ChildrenPlan::Keep,
        style: part.style,
    };

    (rule.customize)(view, &mut plan, &mut sink);

    let mut wrapper: Option<String> = None;
    if !plan.style.is_empty() {
        let block = ctx.stylesheet.declare(component.as_ref());
        for entry in &plan.style {
            ctx.stylesheet.add_property(&block, entry.key, entry.value.clone());
        }
        let reference = ctx.stylesheet.reference(&block);
        match rule.styling {
            Styling::StyleProp => merge_style(&mut plan, &reference),
            Styling::Wrapper => wrapper = Some(reference),
        }
    }

    let edits = plan_edits(view, &plan, wrapper.as_deref(), ctx.container)
        .into_iter()
        .filter(|e| e.start == e.end || source.get(e.start..e.end) != Some(e.text.as_str()))
        .collect();

    Rewrite { edits, wrapped: wrapper.is_some() }
}

/// Point `style` at the generated block, keeping an existing style after it.
fn merge_style(plan: &mut ElementPlan, reference: &str) {
    let existing = plan.attributes.iter().find(|a| a.name == "style").map(|a| a.text.clone());
    match existing {
        Some(text) => {
            let value = text.split_once('=').map(|(_, v)| v.trim()).unwrap_or("");
            let inner = value
                .strip_prefix('{')
                .and_then(|v| v.strip_suffix('}'))
                .unwrap_or(value)
                .trim();
            let merged = jsx_expr_attr("style", &format!("[{}, {}]", reference, inner));
            plan.replace("style", "style", merged);
        }
        None => plan.push("style", jsx_expr_attr("style", reference)),
    }
}

fn plan_edits(view: &ElementView, plan: &ElementPlan, wrapper: Option<&str>, container: &str) -> Vec<Edit> {
    let texts: Vec<String> = plan.attributes.iter().map(|a| a.text.clone()).collect();
    let layout = if view.multiline_open { TagLayout::Multiline } else { TagLayout::Inline };
    let indent = view.indent.as_str();
    let open = |self_closing: bool| open_tag(&plan.tag, &texts, self_closing, layout, indent);

    let (prefix, suffix) = match wrapper {
        Some(reference) => (
            format!("<{} style={{{}}}>\n{}  ", container, reference, indent),
            format!("\n{}{}", indent, close_tag(container)),
        ),
        None => (String::new(), String::new()),
    };

    let whole = |body: String| vec![Edit::replace(view.span.start, view.span.end, format!("{}{}{}", prefix, body, suffix))];

    match (&view.close_span, &plan.children) {
        (_, ChildrenPlan::Replace(inner)) => whole(format!("{}{}{}", open(false), inner, close_tag(&plan.tag))),
        (None, _) | (Some(_), ChildrenPlan::Drop) => whole(open(true)),
        (Some(close), children) => {
            let mut edits = vec![
                Edit::replace(view.open_span.start, view.open_span.end, format!("{}{}", prefix, open(false))),
                Edit::replace(close.start, close.end, format!("{}{}", close_tag(&plan.tag), suffix)),
            ];
            if let (ChildrenPlan::Wrap { before, after }, Some(content)) = (children, &view.content_span) {
                edits.push(Edit::insert(content.start, before.clone()));
                edits.push(Edit::insert(content.end, after.clone()));
            }
            edits
        }
    }
}

/// Fold plain-text children (or one expression child) into a `text` prop.
///
/// Anything else keeps its children and records an `unsupported-shape`
/// warning.
pub fn children_to_text(view: &ElementView, plan: &mut ElementPlan, sink: &mut dyn DiagnosticSink) {
    let content = view.content();
    if content.is_empty() {
        return;
    }
    if plan.has("text") {
        sink.record(
            DiagnosticKind::Collision,
            "children and `text` are both set; children kept".to_string(),
        );
        return;
    }

    let all_text = content.iter().all(|c| matches!(c, Child::Text(_)));
    if all_text {
        let text = content
            .iter()
            .filter_map(|c| match c {
                Child::Text(t) => Some(normalize_jsx_text(t)),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join(" ");
        plan.push("text", jsx_string_attr("text", &text));
        plan.children = ChildrenPlan::Drop;
        return;
    }

    if let [Child::Expr { inner, has_jsx: false, .. }] = content.as_slice() {
        plan.push("text", jsx_expr_attr("text", inner));
        plan.children = ChildrenPlan::Drop;
        return;
    }

    sink.record(
        DiagnosticKind::UnsupportedShape,
        "children are not plain text, kept as children".to_string(),
    );
}
