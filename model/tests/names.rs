use model::{is_legal_name, is_legal_namespace_name, name_tag, Name, PropertyList};
use proptest::prelude::*;

fn ascii_name() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,24}"
}

proptest! {
    #[test]
    fn generated_names_are_legal(name in ascii_name()) {
        let units: Vec<u16> = name.encode_utf16().collect();
        prop_assert!(is_legal_name(&units));
    }

    #[test]
    fn joined_names_are_legal_namespaces(
        parts in prop::collection::vec(ascii_name(), 1..5),
        leading in any::<bool>(),
    ) {
        let mut ns = parts.join("/");
        if leading {
            ns.insert(0, '/');
        }
        let units: Vec<u16> = ns.encode_utf16().collect();
        prop_assert!(is_legal_namespace_name(&units));
    }

    #[test]
    fn tag_ignores_ascii_case(name in ascii_name()) {
        let upper: Vec<u16> = name.to_ascii_uppercase().encode_utf16().collect();
        let lower: Vec<u16> = name.to_ascii_lowercase().encode_utf16().collect();
        prop_assert_eq!(name_tag(&upper), name_tag(&lower));
    }

    #[test]
    fn property_list_finds_every_member(
        names in prop::collection::vec(ascii_name(), 0..16),
    ) {
        let list = PropertyList::new(names.iter().map(|n| Name::new(n)).collect());
        for name in &names {
            prop_assert!(list.contains(&Name::new(&name.to_ascii_lowercase())));
        }
    }
}

#[test]
fn leading_digit_is_illegal() {
    let units: Vec<u16> = "1st".encode_utf16().collect();
    assert!(!is_legal_name(&units));
}
