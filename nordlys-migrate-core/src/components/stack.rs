//! `HStack` / `VStack` → `Stack` with an explicit direction

use super::{ComponentRule, ElementPlan, Styling};
use crate::diagnostics::DiagnosticSink;
use crate::parser::jsx::ElementView;
use crate::props::{scaled, verbatim, PropTable, StyleRule, UnknownPolicy, BACKGROUND, MARGIN, PADDING, RADIUS, SHARED, SIZING};
use crate::render::jsx_string_attr;
use crate::tokens::Scale;

const GAP: &[StyleRule] = &[scaled("space", "gap", Scale::Spacing), scaled("gap", "gap", Scale::Spacing)];

const ALIGNMENT: &[StyleRule] = &[
    scaled("align", "alignItems", Scale::Align),
    scaled("justify", "justifyContent", Scale::Justify),
];

const FLEX_ITEM: &[StyleRule] = &[
    verbatim("flex", "flex"),
    verbatim("flexGrow", "flexGrow"),
    verbatim("flexShrink", "flexShrink"),
    verbatim("flexWrap", "flexWrap"),
    verbatim("alignSelf", "alignSelf"),
];

pub static TABLE: PropTable = PropTable {
    direct: &["key", "ref", "testID", "nativeID", "style", "children", "reverse", "onPress", "accessibilityLabel"],
    transform: &[],
    style: &[GAP, MARGIN, PADDING, BACKGROUND, ALIGNMENT, RADIUS, SIZING, FLEX_ITEM],
    // Superseded by the direction the tag implies
    drop: &["direction"],
    unsupported: &[&["divider"]],
    shared: SHARED,
    unknown: UnknownPolicy::KeepWithWarning,
};

pub static HSTACK_RULE: ComponentRule = ComponentRule {
    table: &TABLE,
    styling: Styling::StyleProp,
    customize: row,
};

pub static VSTACK_RULE: ComponentRule = ComponentRule {
    table: &TABLE,
    styling: Styling::StyleProp,
    customize: column,
};

fn row(_: &ElementView, plan: &mut ElementPlan, _: &mut dyn DiagnosticSink) {
    plan.prepend("direction", jsx_string_attr("direction", "row"));
}

fn column(_: &ElementView, plan: &mut ElementPlan, _: &mut dyn DiagnosticSink) {
    plan.prepend("direction", jsx_string_attr("direction", "column"));
}

#[cfg(test)]
mod tests {
    use crate::components::tests::run;
    use crate::components::LegacyComponent;
    use crate::diagnostics::DiagnosticKind;

    #[test]
    fn test_hstack_gets_row_direction() {
        let (out, diagnostics, sheet) = run(
            "const a = <HStack space={4} align=\"center\" justify=\"between\" testID=\"row\">{items}</HStack>;",
            LegacyComponent::HStack,
            "Stack",
        );
        assert_eq!(
            out,
            "const a = <Stack direction=\"row\" testID=\"row\" style={styles.hstack0}>{items}</Stack>;"
        );
        assert_eq!(
            sheet.render().unwrap(),
            "const styles = StyleSheet.create({\n  hstack0: {\n    gap: 'md',\n    alignItems: 'center',\n    justifyContent: 'space-between',\n  },\n});\n"
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_vstack_divider_is_dropped_with_warning() {
        let (out, diagnostics, _) = run(
            "const a = <VStack divider={<Divider />} reverse />;",
            LegacyComponent::VStack,
            "Stack",
        );
        assert_eq!(out, "const a = <Stack direction=\"column\" reverse />;");
        assert_eq!(diagnostics.count(DiagnosticKind::UnsupportedProp), 1);
    }

    #[test]
    fn test_spacing_tokens_shift() {
        let (_, _, sheet) = run("const a = <VStack space=\"xl\" />;", LegacyComponent::VStack, "Stack");
        assert!(sheet.render().unwrap().contains("gap: '2xl',"));
    }
}
