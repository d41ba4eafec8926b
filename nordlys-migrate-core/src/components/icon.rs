//! `Icon`

use super::{no_customization, ComponentRule, Styling};
use crate::props::{remap, rename, PropTable, UnknownPolicy, MARGIN_NAMES, SHARED};
use crate::tokens::Scale;

pub static TABLE: PropTable = PropTable {
    direct: &["key", "ref", "testID", "nativeID", "name", "accessibilityLabel"],
    transform: &[rename("color", "fill"), remap("size", "size", Scale::IconSize)],
    style: &[],
    drop: &["as"],
    unsupported: &[MARGIN_NAMES],
    shared: SHARED,
    unknown: UnknownPolicy::DropWithWarning,
};

pub static RULE: ComponentRule = ComponentRule {
    table: &TABLE,
    styling: Styling::StyleProp,
    customize: no_customization,
};

#[cfg(test)]
mod tests {
    use crate::components::tests::run;
    use crate::components::LegacyComponent;
    use crate::diagnostics::DiagnosticKind;

    #[test]
    fn test_size_and_fill() {
        let (out, diagnostics, _) = run(
            "const a = <Icon as={MaterialIcons} name=\"add\" size={18} color=\"white\" />;",
            LegacyComponent::Icon,
            "Icon",
        );
        assert_eq!(out, "const a = <Icon name=\"add\" size=\"2xl\" fill=\"white\" />;");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_margins_are_unsupported() {
        let (out, diagnostics, _) = run("const a = <Icon name=\"x\" mr={2} size=\"sm\" />;", LegacyComponent::Icon, "Icon");
        assert_eq!(out, "const a = <Icon name=\"x\" size=\"xl\" />;");
        assert_eq!(diagnostics.count(DiagnosticKind::UnsupportedProp), 1);
    }
}
