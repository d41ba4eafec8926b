//! Prop classification tables
//!
//! Each component carries one static [`PropTable`]. The partitioner in
//! [`partition`] consumes any table the same way; component modules only
//! add composite-prop logic on top.

pub mod partition;

pub use partition::{partition, Partition, StyleEntry};

use crate::tokens::Scale;

/// How a prop value is converted on its way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convert {
    Verbatim,
    Scale(Scale),
}

/// A prop that becomes a stylesheet property.
#[derive(Debug, Clone, Copy)]
pub struct StyleRule {
    pub prop: &'static str,
    pub key: &'static str,
    pub convert: Convert,
}

/// A 1:1 rename, optionally remapping static values.
#[derive(Debug, Clone, Copy)]
pub struct Rename {
    pub from: &'static str,
    pub to: &'static str,
    pub convert: Convert,
}

/// What happens to props no bucket knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownPolicy {
    KeepWithWarning,
    DropWithWarning,
}

/// Per-component classification.
///
/// DIRECT, TRANSFORM, STYLE and DROP (`drop` + `unsupported` + `shared`)
/// are pairwise disjoint.
#[derive(Debug)]
pub struct PropTable {
    pub direct: &'static [&'static str],
    pub transform: &'static [Rename],
    /// Style rule groups; the flattened order is the property order of the
    /// generated block
    pub style: &'static [&'static [StyleRule]],
    /// Dropped silently (layout-only or superseded by composite logic)
    pub drop: &'static [&'static str],
    /// Dropped with an `unsupported-prop` warning
    pub unsupported: &'static [&'static [&'static str]],
    /// Shared cross-cutting drop sets
    pub shared: &'static [&'static [&'static str]],
    pub unknown: UnknownPolicy,
}

/// Bucket a prop name falls into.
#[derive(Debug, Clone, Copy)]
pub enum Class {
    Drop { warn: bool },
    Transform(&'static Rename),
    /// `order` is the rule's position in the flattened style list
    Style { rule: &'static StyleRule, order: usize },
    Direct,
    Unrecognized,
}

impl PropTable {
    /// Classify `name`, checking DROP, TRANSFORM, STYLE, DIRECT in that order.
    pub fn classify(&'static self, name: &str) -> Class {
        if self.drop.contains(&name) || self.shared.iter().any(|set| set.contains(&name)) {
            return Class::Drop { warn: false };
        }
        if self.unsupported.iter().any(|set| set.contains(&name)) {
            return Class::Drop { warn: true };
        }
        if let Some(rename) = self.transform.iter().find(|r| r.from == name) {
            return Class::Transform(rename);
        }
        if let Some((order, rule)) = self.style_rules().enumerate().find(|(_, r)| r.prop == name) {
            return Class::Style { rule, order };
        }
        if self.direct.contains(&name) {
            return Class::Direct;
        }
        Class::Unrecognized
    }

    pub fn style_rules(&'static self) -> impl Iterator<Item = &'static StyleRule> {
        self.style.iter().flat_map(|group| group.iter())
    }

    /// Every prop name the table knows, bucket by bucket.
    pub fn known_names(&'static self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        names.extend(self.direct.iter().copied());
        names.extend(self.transform.iter().map(|r| r.from));
        names.extend(self.style_rules().map(|r| r.prop));
        names.extend(self.drop.iter().copied());
        names.extend(self.unsupported.iter().flat_map(|set| set.iter().copied()));
        names.extend(self.shared.iter().flat_map(|set| set.iter().copied()));
        names
    }
}

pub const fn verbatim(prop: &'static str, key: &'static str) -> StyleRule {
    StyleRule { prop, key, convert: Convert::Verbatim }
}

pub const fn scaled(prop: &'static str, key: &'static str, scale: Scale) -> StyleRule {
    StyleRule { prop, key, convert: Convert::Scale(scale) }
}

pub const fn rename(from: &'static str, to: &'static str) -> Rename {
    Rename { from, to, convert: Convert::Verbatim }
}

pub const fn remap(from: &'static str, to: &'static str, scale: Scale) -> Rename {
    Rename { from, to, convert: Convert::Scale(scale) }
}

// Shared drop sets

/// Interaction-state and internal sub-component style props
pub const PSEUDO_STATE: &[&str] = &[
    "_pressed",
    "_hover",
    "_focus",
    "_focusVisible",
    "_disabled",
    "_invalid",
    "_readOnly",
    "_checked",
    "_text",
    "_icon",
    "_stack",
    "_spinner",
    "_loading",
];

pub const THEME: &[&str] = &["_light", "_dark"];

pub const PLATFORM: &[&str] = &["_web", "_ios", "_android", "_important"];

pub const SHARED: &[&[&str]] = &[PSEUDO_STATE, THEME, PLATFORM];

// Style rule groups

pub const BACKGROUND: &[StyleRule] = &[
    verbatim("bg", "backgroundColor"),
    verbatim("bgColor", "backgroundColor"),
    verbatim("background", "backgroundColor"),
    verbatim("backgroundColor", "backgroundColor"),
];

pub const PADDING: &[StyleRule] = &[
    verbatim("p", "padding"),
    verbatim("padding", "padding"),
    verbatim("px", "paddingHorizontal"),
    verbatim("paddingX", "paddingHorizontal"),
    verbatim("py", "paddingVertical"),
    verbatim("paddingY", "paddingVertical"),
    verbatim("pt", "paddingTop"),
    verbatim("paddingTop", "paddingTop"),
    verbatim("pr", "paddingRight"),
    verbatim("paddingRight", "paddingRight"),
    verbatim("pb", "paddingBottom"),
    verbatim("paddingBottom", "paddingBottom"),
    verbatim("pl", "paddingLeft"),
    verbatim("paddingLeft", "paddingLeft"),
];

pub const MARGIN: &[StyleRule] = &[
    verbatim("m", "margin"),
    verbatim("margin", "margin"),
    verbatim("mx", "marginHorizontal"),
    verbatim("marginX", "marginHorizontal"),
    verbatim("my", "marginVertical"),
    verbatim("marginY", "marginVertical"),
    verbatim("mt", "marginTop"),
    verbatim("marginTop", "marginTop"),
    verbatim("mr", "marginRight"),
    verbatim("marginRight", "marginRight"),
    verbatim("mb", "marginBottom"),
    verbatim("marginBottom", "marginBottom"),
    verbatim("ml", "marginLeft"),
    verbatim("marginLeft", "marginLeft"),
];

pub const SIZING: &[StyleRule] = &[
    verbatim("w", "width"),
    verbatim("width", "width"),
    verbatim("h", "height"),
    verbatim("height", "height"),
    verbatim("minW", "minWidth"),
    verbatim("minWidth", "minWidth"),
    verbatim("maxW", "maxWidth"),
    verbatim("maxWidth", "maxWidth"),
    verbatim("minH", "minHeight"),
    verbatim("minHeight", "minHeight"),
    verbatim("maxH", "maxHeight"),
    verbatim("maxHeight", "maxHeight"),
];

pub const RADIUS: &[StyleRule] = &[
    scaled("rounded", "borderRadius", Scale::Radius),
    scaled("borderRadius", "borderRadius", Scale::Radius),
];

pub const BORDER: &[StyleRule] = &[
    verbatim("borderColor", "borderColor"),
    verbatim("borderWidth", "borderWidth"),
    verbatim("borderTopWidth", "borderTopWidth"),
    verbatim("borderBottomWidth", "borderBottomWidth"),
    verbatim("borderLeftWidth", "borderLeftWidth"),
    verbatim("borderRightWidth", "borderRightWidth"),
    verbatim("borderStyle", "borderStyle"),
];

pub const FLEX: &[StyleRule] = &[
    verbatim("flex", "flex"),
    verbatim("flexDirection", "flexDirection"),
    verbatim("flexDir", "flexDirection"),
    verbatim("flexWrap", "flexWrap"),
    verbatim("flexGrow", "flexGrow"),
    verbatim("flexShrink", "flexShrink"),
    verbatim("flexBasis", "flexBasis"),
    verbatim("alignItems", "alignItems"),
    verbatim("alignSelf", "alignSelf"),
    verbatim("justifyContent", "justifyContent"),
    verbatim("position", "position"),
    verbatim("top", "top"),
    verbatim("right", "right"),
    verbatim("bottom", "bottom"),
    verbatim("left", "left"),
    verbatim("zIndex", "zIndex"),
    verbatim("overflow", "overflow"),
    verbatim("opacity", "opacity"),
];

// Name sets for tables that drop instead of styling

pub const MARGIN_NAMES: &[&str] = &[
    "m", "margin", "mx", "marginX", "my", "marginY", "mt", "marginTop", "mr", "marginRight", "mb",
    "marginBottom", "ml", "marginLeft",
];

pub const PADDING_NAMES: &[&str] = &[
    "p", "padding", "px", "paddingX", "py", "paddingY", "pt", "paddingTop", "pr", "paddingRight", "pb",
    "paddingBottom", "pl", "paddingLeft",
];

pub const SIZING_NAMES: &[&str] = &[
    "w", "width", "h", "height", "minW", "minWidth", "maxW", "maxWidth", "minH", "minHeight", "maxH", "maxHeight",
];

pub const COLOR_NAMES: &[&str] = &[
    "bg", "bgColor", "background", "backgroundColor", "color", "borderColor", "borderWidth", "rounded",
    "borderRadius",
];

pub const FONT_NAMES: &[&str] = &[
    "bold",
    "italic",
    "underline",
    "strikeThrough",
    "highlight",
    "sub",
    "fontWeight",
    "fontSize",
    "fontFamily",
    "fontStyle",
    "lineHeight",
    "letterSpacing",
    "isTruncated",
];

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE: PropTable = PropTable {
        direct: &["testID"],
        transform: &[rename("isDisabled", "disabled")],
        style: &[PADDING, RADIUS],
        drop: &["hStackProps"],
        unsupported: &[&["shadow"]],
        shared: SHARED,
        unknown: UnknownPolicy::KeepWithWarning,
    };

    #[test]
    fn test_classify_order() {
        assert!(matches!(SAMPLE.classify("shadow"), Class::Drop { warn: true }));
        assert!(matches!(SAMPLE.classify("_dark"), Class::Drop { warn: false }));
        assert!(matches!(SAMPLE.classify("isDisabled"), Class::Transform(r) if r.to == "disabled"));
        assert!(matches!(SAMPLE.classify("testID"), Class::Direct));
        assert!(matches!(SAMPLE.classify("onWhatever"), Class::Unrecognized));
    }

    #[test]
    fn test_style_order_follows_flattened_rules() {
        match SAMPLE.classify("rounded") {
            Class::Style { rule, order } => {
                assert_eq!(rule.key, "borderRadius");
                assert_eq!(order, PADDING.len());
            }
            other => panic!("unexpected class {:?}", other),
        }
    }
}
