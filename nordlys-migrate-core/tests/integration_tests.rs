/// Integration tests for nordlys-migrate-core
///
/// These tests run the whole pipeline (parse, rewrite, imports, stylesheet,
/// prune) and verify:
/// 1. Fixture files migrate to their expected output
/// 2. Re-running on migrated output changes nothing
/// 3. Provenance: only elements bound to a legacy import are rewritten
/// 4. Config files drive sources, targets and redirects

use std::fs;
use std::path::PathBuf;
use nordlys_migrate_core::{
    migrate_file, migrate_source, DiagnosticKind, MigrationConfig, MigrationOutcome,
};

fn get_test_fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn migrate(source: &str) -> MigrationOutcome {
    migrate_source(source, "tsx", &MigrationConfig::default()).expect("Should migrate")
}

#[test]
fn test_profile_card_fixture() {
    let dir = get_test_fixtures_dir();
    let outcome = migrate_file(&dir.join("profile_card.tsx"), &MigrationConfig::default())
        .expect("Should migrate fixture");
    let expected = fs::read_to_string(dir.join("profile_card.expected.tsx")).unwrap();

    assert!(outcome.changed);
    assert_eq!(outcome.rewritten_elements, 5);
    assert_eq!(outcome.output, expected);

    // `bold` has no Nordlys equivalent
    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(outcome.diagnostics.entries()[0].kind, DiagnosticKind::UnsupportedProp);
    assert!(outcome.diagnostics.entries()[0].message.starts_with("14:7: <Text>"));
}

#[test]
fn test_expected_fixture_is_a_fixed_point() {
    let dir = get_test_fixtures_dir();
    let outcome = migrate_file(&dir.join("profile_card.expected.tsx"), &MigrationConfig::default()).unwrap();
    assert!(!outcome.changed);
    assert!(outcome.diagnostics.is_empty());
}

#[test]
fn test_idempotent_with_leftover_legacy_import() {
    let source = r#"import { Badge, type IBadgeProps } from 'native-base';

type Variant = IBadgeProps['variant'];

export const New = (v: Variant) => <Badge colorScheme="success">New</Badge>;
"#;
    let first = migrate(source);
    assert!(first.changed);
    assert!(first.output.contains("import { Badge } from '@nordlys/native/badge';"));
    // Only referenced from an indexed-access type, still retained
    assert!(first.output.contains("import { type IBadgeProps } from 'native-base';"));
    assert!(first.output.contains("text=\"New\""));

    let second = migrate(&first.output);
    assert!(!second.changed);
    assert_eq!(second.output, first.output);
}

#[test]
fn test_file_without_legacy_import_is_untouched() {
    let source = "import { Box } from './ui';\nexport const A = () => <Box p={4} rounded=\"md\" />;\n";
    let outcome = migrate(source);
    assert!(!outcome.changed);
    assert_eq!(outcome.output, source);
    assert_eq!(outcome.rewritten_elements, 0);
    assert!(outcome.diagnostics.is_empty());
}

#[test]
fn test_local_component_with_same_name_is_ignored() {
    let source = r#"import { Box } from 'native-base';
import { Button } from './Button';
export const A = () => <Box><Button isDisabled /></Box>;
"#;
    let outcome = migrate(source);
    assert_eq!(
        outcome.output,
        r#"import { View } from 'react-native';
import { Button } from './Button';
export const A = () => <View><Button isDisabled /></View>;
"#
    );
    assert_eq!(outcome.rewritten_elements, 1);
}

#[test]
fn test_shadowed_binding_is_ignored() {
    let source = r#"import { Box } from 'native-base';

const Local = () => {
  const Box = (props: any) => null;
  return <Box p={2} />;
};

export const A = () => <Box p={1} />;
"#;
    let outcome = migrate(source);
    assert!(outcome.output.contains("return <Box p={2} />;"));
    assert!(outcome.output.contains("export const A = () => <View style={styles.box0} />;"));
    assert!(outcome.output.contains("    padding: 1,\n"));
    assert!(!outcome.output.contains("padding: 2"));
    assert_eq!(outcome.rewritten_elements, 1);
}

#[test]
fn test_namespace_import() {
    let source = "import * as NB from 'native-base';\nexport const A = () => <NB.Button onPress={go}>Go</NB.Button>;\n";
    let outcome = migrate(source);
    assert_eq!(
        outcome.output,
        "import { Button } from '@nordlys/native/button';\nexport const A = () => <Button onPress={go} text=\"Go\" />;\n"
    );
}

#[test]
fn test_unmapped_component_warns_once_and_is_kept() {
    let source = "import { Center } from 'native-base';\nexport const A = () => <Center><Center /></Center>;\n";
    let outcome = migrate(source);
    assert!(!outcome.changed);
    assert_eq!(outcome.output, source);
    assert_eq!(outcome.diagnostics.count(DiagnosticKind::UnmappedComponent), 1);
}

#[test]
fn test_avatar_variants_collapse() {
    let source = "import { Avatar } from 'native-base';\nexport const A = ({ uri }: { uri: string }) => <Avatar imageUri={uri} iconName=\"user\" />;\n";
    let outcome = migrate(source);
    assert_eq!(
        outcome.output,
        "import { Avatar } from '@nordlys/native/avatar';\nexport const A = ({ uri }: { uri: string }) => <Avatar icon={{ name: 'user' }} />;\n"
    );
    assert_eq!(outcome.diagnostics.count(DiagnosticKind::UnsupportedShape), 1);
}

#[test]
fn test_stylesheet_is_deterministic() {
    let source = r#"import { Box, VStack } from 'native-base';

export const A = () => (
  <VStack space="xl" p={2}>
    <Box m={1} />
    <Box rounded="md" />
  </VStack>
);
"#;
    let first = migrate(source);
    let again = migrate(source);
    assert_eq!(first.output, again.output);

    let sheet = &first.output[first.output.find("const styles").unwrap()..];
    let vstack = sheet.find("vstack0").unwrap();
    let box0 = sheet.find("box0").unwrap();
    let box1 = sheet.find("box1").unwrap();
    assert!(vstack < box0 && box0 < box1);
    assert!(sheet.contains("gap: '2xl',\n    padding: 2,"));
    assert!(sheet.contains("borderRadius: 'sm',"));
}

#[test]
fn test_unknown_token_passes_through() {
    let source = "import { HStack } from 'native-base';\nexport const A = () => <HStack space=\"huge\" />;\n";
    let outcome = migrate(source);
    assert!(outcome.output.contains("gap: 'huge',"));
    assert_eq!(outcome.diagnostics.count(DiagnosticKind::UnmappedToken), 1);
}

#[test]
fn test_typescript_grammar_without_jsx() {
    let source = "import { Box, type IBoxProps } from 'native-base';\nexport type P = IBoxProps;\n";
    let outcome = migrate_source(source, "typescript", &MigrationConfig::default()).unwrap();
    // Nothing to rewrite, nothing to relocate
    assert!(!outcome.changed);
}

#[test]
fn test_config_file_drives_sources_targets_and_redirects() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("nordlys.toml");
    fs::write(
        &config_path,
        r#"legacy-sources = ["@acme/native-base"]

[targets.Button]
module = "@acme/ui"
name = "Button"

[redirects]
"native-base/theme" = "@nordlys/theme"
"#,
    )
    .unwrap();
    let config = MigrationConfig::load(&config_path).unwrap();

    let source_path = dir.path().join("Go.tsx");
    fs::write(
        &source_path,
        r#"import { Button } from '@acme/native-base';
import { ids } from 'native-base/theme';
export const A = () => <Button isLoading testID={ids.go}>Go</Button>;
"#,
    )
    .unwrap();

    let outcome = migrate_file(&source_path, &config).unwrap();
    assert_eq!(
        outcome.output,
        r#"import { Button } from '@acme/ui';
import { ids } from '@nordlys/theme';
export const A = () => <Button loading testID={ids.go} text="Go" />;
"#
    );
}

#[test]
fn test_icon_inside_kept_attribute_of_wrapped_input() {
    let source = r#"import { Icon, Input } from 'native-base';
export const A = () => <Input mt={2} InputLeftElement={<Icon name="mail" color="red" size={18} />} />;
"#;
    let outcome = migrate(source);
    assert_eq!(
        outcome.output,
        r#"import { Icon } from '@nordlys/native/icon';
import { Input } from '@nordlys/native/input';
import { View, StyleSheet } from 'react-native';
export const A = () => <View style={styles.input0}>
  <Input InputLeftElement={<Icon name="mail" fill="red" size="2xl" />} />
</View>;

const styles = StyleSheet.create({
  input0: {
    marginTop: 2,
  },
});
"#
    );
    assert_eq!(outcome.rewritten_elements, 2);
    // Only the pass-through of `InputLeftElement` itself
    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(outcome.diagnostics.count(DiagnosticKind::UnrecognizedProp), 1);

    let second = migrate(&outcome.output);
    assert!(!second.changed);
}

#[test]
fn test_icon_inside_unnamed_left_icon_is_migrated() {
    let source = r#"import { Button, Icon } from 'native-base';
export const A = () => <Button leftIcon={<Icon as={MI} color="white" size={18} />}>Go</Button>;
"#;
    let outcome = migrate(source);
    assert!(outcome
        .output
        .contains(r#"<Button leftIcon={<Icon fill="white" size="2xl" />} text="Go" />"#));
    assert!(outcome.output.contains("import { Icon } from '@nordlys/native/icon';"));
    assert_eq!(outcome.rewritten_elements, 2);
    assert_eq!(outcome.diagnostics.count(DiagnosticKind::UnsupportedShape), 1);
}

#[test]
fn test_icon_reduced_into_button_prop_is_not_counted() {
    let source = r#"import { Button, Icon } from 'native-base';
export const A = () => <Button leftIcon={<Icon name="plus" />}>Add</Button>;
"#;
    let outcome = migrate(source);
    assert_eq!(
        outcome.output,
        r#"import { Button } from '@nordlys/native/button';
export const A = () => <Button icon="plus" text="Add" />;
"#
    );
    assert_eq!(outcome.rewritten_elements, 1);
}

#[test]
fn test_ensured_names_join_a_default_only_import() {
    let source = r#"import RN from 'react-native';
import { Box } from 'native-base';
export const A = () => <Box p={2} testID={RN.Platform.OS} />;
"#;
    let outcome = migrate(source);
    assert_eq!(
        outcome.output,
        r#"import RN, { View, StyleSheet } from 'react-native';
export const A = () => <View testID={RN.Platform.OS} style={styles.box0} />;

const styles = StyleSheet.create({
  box0: {
    padding: 2,
  },
});
"#
    );
    assert!(outcome.diagnostics.is_empty());
}
