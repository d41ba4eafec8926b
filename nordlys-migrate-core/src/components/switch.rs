//! `Switch`: children become `Switch.Label`, `label` becomes
//! `Switch.Description`

use super::{ChildrenPlan, ComponentRule, ElementPlan, Styling};
use crate::diagnostics::DiagnosticSink;
use crate::parser::jsx::ElementView;
use crate::props::{rename, PropTable, UnknownPolicy, MARGIN, SHARED};
use crate::render::jsx_child_text;

pub static TABLE: PropTable = PropTable {
    direct: &[
        "key",
        "ref",
        "testID",
        "nativeID",
        "value",
        "onValueChange",
        "disabled",
        "size",
        "accessibilityLabel",
    ],
    transform: &[
        rename("isChecked", "value"),
        rename("onToggle", "onValueChange"),
        rename("isDisabled", "disabled"),
    ],
    style: &[MARGIN],
    drop: &["label", "hStackProps", "childrenProps", "switchPosition"],
    unsupported: &[&[
        "defaultIsChecked",
        "isInvalid",
        "onTrackColor",
        "offTrackColor",
        "onThumbColor",
        "offThumbColor",
    ]],
    shared: SHARED,
    unknown: UnknownPolicy::DropWithWarning,
};

pub static RULE: ComponentRule = ComponentRule {
    table: &TABLE,
    styling: Styling::Wrapper,
    customize,
};

fn customize(view: &ElementView, plan: &mut ElementPlan, _: &mut dyn DiagnosticSink) {
    let indent = format!("{}  ", view.indent);
    let description = view.attribute("label").map(|label| {
        let content = match label.static_str() {
            Some(text) => jsx_child_text(text),
            None => format!("{{{}}}", label.value_js()),
        };
        format!("<{tag}.Description>{}</{tag}.Description>", content, tag = plan.tag)
    });

    if view.content().is_empty() {
        if let Some(description) = description {
            plan.children = ChildrenPlan::Replace(format!("\n{}{}\n{}", indent, description, view.indent));
        }
        return;
    }

    let mut after = format!("</{}.Label>", plan.tag);
    if let Some(description) = description {
        after.push('\n');
        after.push_str(&indent);
        after.push_str(&description);
    }
    plan.children = ChildrenPlan::Wrap { before: format!("<{}.Label>", plan.tag), after };
}

#[cfg(test)]
mod tests {
    use crate::components::tests::run;
    use crate::components::LegacyComponent;
    use crate::diagnostics::DiagnosticKind;

    #[test]
    fn test_children_become_label() {
        let (out, diagnostics, _) = run(
            "const a = (\n  <Switch isChecked={on} onToggle={toggle}>\n    Wi-Fi\n  </Switch>\n);",
            LegacyComponent::Switch,
            "Switch",
        );
        assert_eq!(
            out,
            "const a = (\n  <Switch value={on} onValueChange={toggle}>\n    <Switch.Label>Wi-Fi</Switch.Label>\n  </Switch>\n);"
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_label_prop_becomes_description() {
        let (out, _, _) = run(
            "const a = <Switch label=\"Sync\" hStackProps={{ space: 2 }} />;",
            LegacyComponent::Switch,
            "Switch",
        );
        assert_eq!(
            out,
            "const a = <Switch>\n  <Switch.Description>Sync</Switch.Description>\n</Switch>;"
        );
    }

    #[test]
    fn test_label_after_children() {
        let (out, _, _) = run(
            "const a = <Switch label={hint}>Wi-Fi</Switch>;",
            LegacyComponent::Switch,
            "Switch",
        );
        assert_eq!(
            out,
            "const a = <Switch><Switch.Label>Wi-Fi</Switch.Label>\n  <Switch.Description>{hint}</Switch.Description></Switch>;"
        );
    }

    #[test]
    fn test_margins_go_to_wrapper() {
        let (out, diagnostics, _) = run("const a = <Switch mb={4} colorScheme=\"x\" />;", LegacyComponent::Switch, "Switch");
        assert_eq!(out, "const a = <View style={styles.switch0}>\n  <Switch />\n</View>;");
        assert_eq!(diagnostics.count(DiagnosticKind::UnrecognizedProp), 1);
    }
}
