//! `Button`

use super::{children_to_text, ComponentRule, ElementPlan, Styling};
use crate::diagnostics::{DiagnosticKind, DiagnosticSink};
use crate::parser::jsx::{AttrValue, ElementView, Literal};
use crate::props::{rename, PropTable, UnknownPolicy, COLOR_NAMES, MARGIN_NAMES, PADDING_NAMES, SHARED, SIZING_NAMES};
use crate::render::{jsx_expr_attr, jsx_string_attr};

pub static TABLE: PropTable = PropTable {
    direct: &[
        "key",
        "ref",
        "testID",
        "nativeID",
        "onPress",
        "onLongPress",
        "variant",
        "size",
        "text",
        "icon",
        "leftIcon",
        "accessibilityLabel",
        "accessibilityHint",
    ],
    transform: &[rename("isDisabled", "disabled"), rename("isLoading", "loading")],
    style: &[],
    drop: &[],
    unsupported: &[
        MARGIN_NAMES,
        PADDING_NAMES,
        SIZING_NAMES,
        COLOR_NAMES,
        &["rightIcon", "startIcon", "endIcon", "colorScheme", "isLoadingText", "spinnerPlacement"],
    ],
    shared: SHARED,
    unknown: UnknownPolicy::DropWithWarning,
};

pub static RULE: ComponentRule = ComponentRule {
    table: &TABLE,
    styling: Styling::StyleProp,
    customize,
};

fn customize(view: &ElementView, plan: &mut ElementPlan, sink: &mut dyn DiagnosticSink) {
    left_icon(view, plan, sink);
    children_to_text(view, plan, sink);
}

/// `leftIcon={<Icon name="plus" />}` → `icon="plus"`
fn left_icon(view: &ElementView, plan: &mut ElementPlan, sink: &mut dyn DiagnosticSink) {
    let Some(attr) = view.attribute("leftIcon") else {
        return;
    };
    let name = match &attr.value {
        AttrValue::Expr { literal: Literal::Element(icon), .. } => icon.attribute("name"),
        _ => None,
    };
    let Some(name) = name else {
        sink.record(
            DiagnosticKind::UnsupportedShape,
            "`leftIcon` is not an icon element with a `name`, kept as is".to_string(),
        );
        return;
    };
    if plan.has("icon") {
        sink.record(
            DiagnosticKind::Collision,
            "`leftIcon` would become `icon`, which is already set; `leftIcon` dropped".to_string(),
        );
        plan.remove("leftIcon");
        return;
    }
    let text = match name.static_str() {
        Some(value) => jsx_string_attr("icon", value),
        None => jsx_expr_attr("icon", &name.value_js()),
    };
    plan.replace("leftIcon", "icon", text);
}

#[cfg(test)]
mod tests {
    use crate::components::tests::run;
    use crate::components::LegacyComponent;
    use crate::diagnostics::DiagnosticKind;

    #[test]
    fn test_left_icon_and_text_children() {
        let (out, diagnostics, sheet) = run(
            "const a = <Button leftIcon={<Icon name=\"plus\" />} isDisabled={busy} onPress={save}>\n  Save\n</Button>;",
            LegacyComponent::Button,
            "Button",
        );
        assert_eq!(
            out,
            "const a = <Button icon=\"plus\" disabled={busy} onPress={save} text=\"Save\" />;"
        );
        assert!(diagnostics.is_empty());
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_expression_child_becomes_text_expression() {
        let (out, _, _) = run("const a = <Button>{t('save')}</Button>;", LegacyComponent::Button, "Button");
        assert_eq!(out, "const a = <Button text={t('save')} />;");
    }

    #[test]
    fn test_unsupported_left_icon_shape_is_kept() {
        let (out, diagnostics, _) = run("const a = <Button leftIcon={icon} />;", LegacyComponent::Button, "Button");
        assert_eq!(out, "const a = <Button leftIcon={icon} />;");
        assert_eq!(diagnostics.count(DiagnosticKind::UnsupportedShape), 1);
    }

    #[test]
    fn test_layout_props_and_unknowns_are_dropped() {
        let (out, diagnostics, _) = run(
            "const a = <Button mt={2} colorScheme=\"primary\" foo=\"bar\" />;",
            LegacyComponent::Button,
            "Button",
        );
        assert_eq!(out, "const a = <Button />;");
        assert_eq!(diagnostics.count(DiagnosticKind::UnsupportedProp), 2);
        assert_eq!(diagnostics.count(DiagnosticKind::UnrecognizedProp), 1);
    }

    #[test]
    fn test_element_children_are_kept() {
        let (out, diagnostics, _) = run(
            "const a = <Button><Spinner /></Button>;",
            LegacyComponent::Button,
            "Button",
        );
        assert_eq!(out, "const a = <Button><Spinner /></Button>;");
        assert_eq!(diagnostics.count(DiagnosticKind::UnsupportedShape), 1);
    }
}
