//! Property-based tests for registration, lookup and resolution.

use mcfg::{parse_str, Document, DocumentError, FieldKind, SectionKind};
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = FieldKind> {
    prop_oneof![Just(FieldKind::String), Just(FieldKind::List)]
}

fn single_field(kind: FieldKind, name: &str, value: &str) -> Document {
    let mut doc = Document::new();
    doc.register_sector("s")
        .unwrap()
        .register_section(SectionKind::Fields, "f")
        .unwrap()
        .register_field(kind, name, value)
        .unwrap();
    doc
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// A registered field is found by its full path with the kind and value it was given.
    #[test]
    fn prop_registered_field_round_trips(
        name in "[a-z][a-z0-9_]{0,12}",
        kind in kind_strategy(),
        value in "[ -~]{0,40}",
    ) {
        let doc = single_field(kind.clone(), &name, &value);
        let field = doc.find_field(&format!("s/f/{name}")).unwrap();
        prop_assert_eq!(field.kind(), &kind);
        prop_assert_eq!(field.value(), value.as_str());
    }

    /// Parsed field declarations keep their space-free values verbatim.
    #[test]
    fn prop_parsed_field_round_trips(
        name in "[a-z][a-z0-9_]{0,12}",
        value in "[a-zA-Z0-9:./_$()-]{0,30}",
    ) {
        let doc = parse_str(&format!("sector s\nfields f:\nstr {name} \"{value}\"\n")).unwrap();
        prop_assert_eq!(doc.find_field(&format!("s/f/{name}")).unwrap().value(), value.as_str());
    }

    /// Text without a reference opener is returned unchanged.
    #[test]
    fn prop_reference_free_text_is_unchanged(text in "\\PC{0,60}") {
        prop_assume!(!text.contains("$("));
        let doc = single_field(FieldKind::String, "x", "value");
        prop_assert_eq!(doc.resolve(&text, "s/f/"), text);
    }

    /// A reference to a reference-free string field yields exactly its value.
    #[test]
    fn prop_string_reference_yields_value(
        name in "[a-z][a-z0-9_]{0,12}",
        value in "[a-zA-Z0-9 .:/_-]{0,30}",
    ) {
        let doc = single_field(FieldKind::String, &name, &value);
        prop_assert_eq!(doc.resolve(&format!("$({name})"), "s/f/"), value);
    }

    /// A glued prefix is repeated before every list element.
    #[test]
    fn prop_list_prefix_wraps_every_element(
        prefix in "[a-z-]{1,4}",
        elements in prop::collection::vec("[a-z0-9]{1,5}", 1..6),
    ) {
        let doc = single_field(FieldKind::List, "l", &elements.join(":"));
        let expected = elements
            .iter()
            .map(|e| format!("{prefix}{e}"))
            .collect::<Vec<_>>()
            .join(" ");
        prop_assert_eq!(doc.resolve(&format!("{prefix}$(l)"), "s/f/"), expected);
    }

    /// Registering a duplicate sibling fails and leaves the document as it was.
    #[test]
    fn prop_duplicate_field_rejected(
        name in "[a-z][a-z0-9_]{0,12}",
        first in "[a-z]{0,10}",
        second in "[a-z]{0,10}",
    ) {
        let mut doc = single_field(FieldKind::String, &name, &first);
        let before = doc.clone();

        let result = doc
            .current_section_mut()
            .unwrap()
            .register_field(FieldKind::List, &name, &second)
            .map(|_| ());
        prop_assert_eq!(result, Err(DocumentError::DuplicateField(name.clone())));
        prop_assert_eq!(doc, before);
    }
}
