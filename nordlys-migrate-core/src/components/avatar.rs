//! `Avatar`: variant props collapse into one `icon` or `image` composite

use super::{ComponentRule, ElementPlan, Styling};
use crate::diagnostics::{DiagnosticKind, DiagnosticSink};
use crate::parser::jsx::ElementView;
use crate::props::{PropTable, UnknownPolicy, SHARED};
use crate::render::jsx_expr_attr;

/// Variant props in precedence order
const VARIANTS: &[&str] = &["iconName", "imageUri", "imageSource"];

pub static TABLE: PropTable = PropTable {
    direct: &["key", "ref", "testID", "nativeID", "size", "letters", "onPress", "accessibilityLabel"],
    transform: &[],
    style: &[],
    // Consumed by the composite logic below
    drop: &["iconName", "imageUri", "imageSource", "bg", "bgColor"],
    unsupported: &[&["source", "badge"]],
    shared: SHARED,
    unknown: UnknownPolicy::KeepWithWarning,
};

pub static RULE: ComponentRule = ComponentRule {
    table: &TABLE,
    styling: Styling::StyleProp,
    customize,
};

fn customize(view: &ElementView, plan: &mut ElementPlan, sink: &mut dyn DiagnosticSink) {
    if view.has_attribute("letters") {
        sink.record(
            DiagnosticKind::UnsupportedShape,
            "`letters` has no Nordlys equivalent, kept as is".to_string(),
        );
    }

    let present: Vec<&str> = VARIANTS.iter().copied().filter(|v| view.has_attribute(v)).collect();
    let fill = view.attribute("bgColor").or_else(|| view.attribute("bg"));
    if let Some(fill) = fill {
        if present.first() != Some(&"iconName") {
            sink.record(
                DiagnosticKind::UnsupportedProp,
                format!("`{}` only applies to icon avatars, dropped", fill.name()),
            );
        }
    }

    let Some(&chosen) = present.first() else {
        if !view.has_attribute("letters") {
            sink.record(
                DiagnosticKind::UnsupportedShape,
                "none of `iconName`, `imageUri`, `imageSource` or `letters` is set, only direct props kept"
                    .to_string(),
            );
        }
        return;
    };
    if present.len() > 1 {
        sink.record(
            DiagnosticKind::UnsupportedShape,
            format!("several avatar variants set ({}), using `{}`", present.join(", "), chosen),
        );
    }

    let (name, value) = match chosen {
        "iconName" => {
            let icon = view.attribute("iconName").map(|a| a.value_js()).unwrap_or_default();
            let value = match fill {
                Some(fill) => format!("{{ name: {}, fill: {} }}", icon, fill.value_js()),
                None => format!("{{ name: {} }}", icon),
            };
            ("icon", value)
        }
        other => {
            let source = view.attribute(other).map(|a| a.value_js()).unwrap_or_default();
            let value = if other == "imageUri" {
                format!("{{ source: {{ uri: {} }} }}", source)
            } else {
                format!("{{ source: {} }}", source)
            };
            ("image", value)
        }
    };

    if plan.has(name) {
        sink.record(
            DiagnosticKind::Collision,
            format!("`{}` would be synthesized from `{}` but is already set; `{}` dropped", name, chosen, chosen),
        );
        return;
    }
    plan.push(name, jsx_expr_attr(name, &value));
}

#[cfg(test)]
mod tests {
    use crate::components::tests::run;
    use crate::components::LegacyComponent;
    use crate::diagnostics::DiagnosticKind;

    #[test]
    fn test_image_uri_collapses_into_image() {
        let (out, diagnostics, _) = run(
            "const a = <Avatar imageUri=\"X\" size=\"md\" />;",
            LegacyComponent::Avatar,
            "Avatar",
        );
        assert_eq!(out, "const a = <Avatar size=\"md\" image={{ source: { uri: 'X' } }} />;");
        assert!(!out.contains("imageUri"));
        assert!(!out.contains("icon="));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_icon_name_takes_fill_from_background() {
        let (out, _, _) = run(
            "const a = <Avatar iconName=\"user\" bgColor=\"blue.100\" />;",
            LegacyComponent::Avatar,
            "Avatar",
        );
        assert_eq!(out, "const a = <Avatar icon={{ name: 'user', fill: 'blue.100' }} />;");
    }

    #[test]
    fn test_precedence_with_warning() {
        let (out, diagnostics, _) = run(
            "const a = <Avatar imageSource={pic} iconName={name} />;",
            LegacyComponent::Avatar,
            "Avatar",
        );
        assert_eq!(out, "const a = <Avatar icon={{ name: name }} />;");
        assert_eq!(diagnostics.count(DiagnosticKind::UnsupportedShape), 1);
    }

    #[test]
    fn test_image_source() {
        let (out, _, _) = run("const a = <Avatar imageSource={pic} />;", LegacyComponent::Avatar, "Avatar");
        assert_eq!(out, "const a = <Avatar image={{ source: pic }} />;");
    }

    #[test]
    fn test_letters_are_kept_with_warning() {
        let (out, diagnostics, _) = run("const a = <Avatar letters=\"AB\" />;", LegacyComponent::Avatar, "Avatar");
        assert_eq!(out, "const a = <Avatar letters=\"AB\" />;");
        assert_eq!(diagnostics.count(DiagnosticKind::UnsupportedShape), 1);
    }

    #[test]
    fn test_background_without_icon_warns() {
        for source in [
            "const a = <Avatar letters=\"AB\" bg=\"red.100\" />;",
            "const a = <Avatar size=\"sm\" bgColor=\"red.100\" />;",
            "const a = <Avatar imageUri={uri} bg=\"red.100\" />;",
        ] {
            let (out, diagnostics, _) = run(source, LegacyComponent::Avatar, "Avatar");
            assert!(!out.contains("red.100"), "{}", out);
            assert_eq!(diagnostics.count(DiagnosticKind::UnsupportedProp), 1, "{}", source);
        }
    }

    #[test]
    fn test_no_variant_degrades_to_direct_props() {
        let (out, diagnostics, _) = run("const a = <Avatar size=\"sm\" />;", LegacyComponent::Avatar, "Avatar");
        assert_eq!(out, "const a = <Avatar size=\"sm\" />;");
        assert_eq!(diagnostics.count(DiagnosticKind::UnsupportedShape), 1);
    }
}
