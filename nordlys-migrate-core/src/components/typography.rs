//! `Text` / `Heading` → `Typography`

use super::{no_customization, ComponentRule, ElementPlan, Styling};
use crate::diagnostics::DiagnosticSink;
use crate::parser::jsx::ElementView;
use crate::props::{rename, PropTable, UnknownPolicy, FONT_NAMES, MARGIN, PADDING, SHARED};
use crate::render::jsx_string_attr;

pub static TABLE: PropTable = PropTable {
    direct: &[
        "key",
        "ref",
        "testID",
        "nativeID",
        "type",
        "size",
        "color",
        "textAlign",
        "numberOfLines",
        "onPress",
        "selectable",
        "children",
        "accessibilityLabel",
        "accessibilityRole",
    ],
    transform: &[rename("noOfLines", "numberOfLines")],
    // Typography takes no style; any of these forces a wrapper
    style: &[MARGIN, PADDING],
    drop: &[],
    unsupported: &[FONT_NAMES],
    shared: SHARED,
    unknown: UnknownPolicy::DropWithWarning,
};

pub static TEXT_RULE: ComponentRule = ComponentRule {
    table: &TABLE,
    styling: Styling::Wrapper,
    customize: no_customization,
};

pub static HEADING_RULE: ComponentRule = ComponentRule {
    table: &TABLE,
    styling: Styling::Wrapper,
    customize: heading,
};

fn heading(_: &ElementView, plan: &mut ElementPlan, _: &mut dyn DiagnosticSink) {
    if !plan.has("type") {
        plan.prepend("type", jsx_string_attr("type", "heading"));
    }
}
