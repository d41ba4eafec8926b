//! `Alert`

use super::{no_customization, ComponentRule, Styling};
use crate::props::{remap, PropTable, UnknownPolicy, MARGIN, SHARED};
use crate::tokens::Scale;

pub static TABLE: PropTable = PropTable {
    direct: &[
        "key",
        "ref",
        "testID",
        "nativeID",
        "title",
        "description",
        "action",
        "onClose",
        "style",
        "children",
        "accessibilityLabel",
    ],
    transform: &[remap("status", "variant", Scale::AlertVariant)],
    style: &[MARGIN],
    drop: &[],
    unsupported: &[&["variant", "colorScheme"]],
    shared: SHARED,
    unknown: UnknownPolicy::KeepWithWarning,
};

pub static RULE: ComponentRule = ComponentRule {
    table: &TABLE,
    styling: Styling::StyleProp,
    customize: no_customization,
};
