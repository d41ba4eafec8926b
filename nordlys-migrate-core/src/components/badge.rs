//! `Badge`

use super::{children_to_text, ComponentRule, Styling};
use crate::props::{remap, PropTable, UnknownPolicy, MARGIN, SHARED};
use crate::tokens::Scale;

pub static TABLE: PropTable = PropTable {
    direct: &["key", "ref", "testID", "nativeID", "text", "size", "accessibilityLabel"],
    transform: &[remap("colorScheme", "variant", Scale::BadgeVariant)],
    style: &[MARGIN],
    drop: &[],
    unsupported: &[&["variant", "leftIcon", "rightIcon", "startIcon", "endIcon"]],
    shared: SHARED,
    unknown: UnknownPolicy::DropWithWarning,
};

pub static RULE: ComponentRule = ComponentRule {
    table: &TABLE,
    styling: Styling::Wrapper,
    customize: children_to_text,
};

#[cfg(test)]
mod tests {
    use crate::components::tests::run;
    use crate::components::LegacyComponent;
    use crate::diagnostics::DiagnosticKind;

    #[test]
    fn test_colour_scheme_and_text() {
        let (out, diagnostics, _) = run(
            "const a = <Badge colorScheme=\"coolGray\" variant=\"solid\">New</Badge>;",
            LegacyComponent::Badge,
            "Badge",
        );
        assert_eq!(out, "const a = <Badge variant=\"neutral\" text=\"New\" />;");
        assert_eq!(diagnostics.count(DiagnosticKind::UnsupportedProp), 1);
    }

    #[test]
    fn test_unknown_scheme_passes_through() {
        let (out, diagnostics, _) = run("const a = <Badge colorScheme=\"teal\" />;", LegacyComponent::Badge, "Badge");
        assert_eq!(out, "const a = <Badge variant=\"teal\" />;");
        assert_eq!(diagnostics.count(DiagnosticKind::UnmappedToken), 1);
    }

    #[test]
    fn test_margins_wrap() {
        let (out, _, _) = run("const a = <Badge ml={1}>3</Badge>;", LegacyComponent::Badge, "Badge");
        assert_eq!(out, "const a = <View style={styles.badge0}>\n  <Badge text=\"3\" />\n</View>;");
    }
}
