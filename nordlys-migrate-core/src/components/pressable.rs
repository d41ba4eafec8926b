//! `Pressable` → react-native `Pressable`

use super::{ComponentRule, ElementPlan, Styling};
use crate::diagnostics::DiagnosticSink;
use crate::parser::jsx::ElementView;
use crate::props::{rename, PropTable, UnknownPolicy, BACKGROUND, MARGIN, PADDING, RADIUS, SHARED, SIZING};
use crate::render::jsx_string_attr;

pub static TABLE: PropTable = PropTable {
    direct: &[
        "key",
        "ref",
        "testID",
        "nativeID",
        "style",
        "children",
        "onPress",
        "onPressIn",
        "onPressOut",
        "onLongPress",
        "disabled",
        "hitSlop",
        "accessibilityLabel",
        "accessibilityHint",
        "accessibilityRole",
        "accessibilityState",
    ],
    transform: &[rename("isDisabled", "disabled")],
    style: &[BACKGROUND, PADDING, MARGIN, SIZING, RADIUS],
    drop: &[],
    unsupported: &[&["isPressed", "isHovered", "isFocused", "isFocusVisible"]],
    shared: SHARED,
    unknown: UnknownPolicy::KeepWithWarning,
};

pub static RULE: ComponentRule = ComponentRule {
    table: &TABLE,
    styling: Styling::StyleProp,
    customize,
};

fn customize(_: &ElementView, plan: &mut ElementPlan, _: &mut dyn DiagnosticSink) {
    if plan.has("onPress") && !plan.has("accessibilityRole") {
        plan.push("accessibilityRole", jsx_string_attr("accessibilityRole", "button"));
    }
}
