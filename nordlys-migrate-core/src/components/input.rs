//! `Input`

use super::{no_customization, ComponentRule, Styling};
use crate::props::{rename, PropTable, UnknownPolicy, MARGIN, PADDING, SHARED};

pub static TABLE: PropTable = PropTable {
    direct: &[
        "key",
        "ref",
        "testID",
        "nativeID",
        "value",
        "defaultValue",
        "onChange",
        "label",
        "disabled",
        "readOnly",
        "type",
        "secureTextEntry",
        "keyboardType",
        "autoCapitalize",
        "autoComplete",
        "autoCorrect",
        "autoFocus",
        "maxLength",
        "multiline",
        "onBlur",
        "onFocus",
        "onSubmitEditing",
        "returnKeyType",
        "accessibilityLabel",
    ],
    transform: &[
        rename("onChangeText", "onChange"),
        rename("placeholder", "label"),
        rename("isDisabled", "disabled"),
        rename("isReadOnly", "readOnly"),
    ],
    style: &[MARGIN, PADDING],
    drop: &[],
    unsupported: &[&["variant", "isFullWidth", "isRequired", "isInvalid", "placeholderTextColor", "focusOutlineColor"]],
    shared: SHARED,
    unknown: UnknownPolicy::KeepWithWarning,
};

pub static RULE: ComponentRule = ComponentRule {
    table: &TABLE,
    styling: Styling::Wrapper,
    customize: no_customization,
};

#[cfg(test)]
mod tests {
    use crate::components::tests::run;
    use crate::components::LegacyComponent;
    use crate::diagnostics::DiagnosticKind;

    #[test]
    fn test_renames() {
        let (out, diagnostics, _) = run(
            "const a = <Input placeholder=\"Email\" onChangeText={setEmail} isReadOnly />;",
            LegacyComponent::Input,
            "Input",
        );
        assert_eq!(out, "const a = <Input label=\"Email\" onChange={setEmail} readOnly />;");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_placeholder_does_not_clobber_label() {
        let (out, diagnostics, _) = run(
            "const a = <Input label=\"Email\" placeholder=\"you@example.com\" />;",
            LegacyComponent::Input,
            "Input",
        );
        assert_eq!(out, "const a = <Input label=\"Email\" />;");
        assert_eq!(diagnostics.count(DiagnosticKind::Collision), 1);
    }

    #[test]
    fn test_element_injection_props_pass_through() {
        let (out, diagnostics, _) = run(
            "const a = <Input InputLeftElement={<Icon name=\"mail\" />} />;",
            LegacyComponent::Input,
            "Input",
        );
        assert_eq!(out, "const a = <Input InputLeftElement={<Icon name=\"mail\" />} />;");
        assert_eq!(diagnostics.count(DiagnosticKind::UnrecognizedProp), 1);
    }
}
