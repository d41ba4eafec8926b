//! `Box` → layout container (`View`)

use super::{no_customization, ComponentRule, Styling};
use crate::props::{PropTable, UnknownPolicy, BACKGROUND, BORDER, FLEX, MARGIN, PADDING, RADIUS, SHARED, SIZING};

pub static TABLE: PropTable = PropTable {
    direct: &[
        "key",
        "ref",
        "testID",
        "nativeID",
        "style",
        "children",
        "onLayout",
        "pointerEvents",
        "accessible",
        "accessibilityLabel",
        "accessibilityHint",
        "accessibilityRole",
    ],
    transform: &[],
    style: &[BACKGROUND, PADDING, MARGIN, SIZING, RADIUS, BORDER, FLEX],
    drop: &[],
    unsupported: &[&[
        "shadow",
        "safeArea",
        "safeAreaTop",
        "safeAreaBottom",
        "safeAreaLeft",
        "safeAreaRight",
        "safeAreaX",
        "safeAreaY",
    ]],
    shared: SHARED,
    unknown: UnknownPolicy::KeepWithWarning,
};

pub static RULE: ComponentRule = ComponentRule {
    table: &TABLE,
    styling: Styling::StyleProp,
    customize: no_customization,
};
