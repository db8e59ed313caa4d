//! Property tests for constant-name derivation.

use std::path::PathBuf;

use proptest::prelude::*;

use packmule::ConstName;

fn clean_segment() -> impl Strategy<Value = String> {
    // Stems and extensions a well-behaved asset tree would actually use
    proptest::string::string_regex("[a-z][a-z0-9_]{0,12}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Derivation of a clean `stem.ext` always succeeds and
    /// yields `UPPER(ext)_UPPER(stem)`.
    #[test]
    fn property_clean_names_derive(stem in clean_segment(), ext in clean_segment()) {
        let path = PathBuf::from(format!("{stem}.{ext}"));
        let name = ConstName::derive(&path).expect("clean segments derive cleanly");
        prop_assert_eq!(
            name.as_str(),
            format!("{}_{}", ext.to_uppercase(), stem.to_uppercase())
        );
    }

    /// PROPERTY: A successful derivation is always a valid identifier:
    /// ASCII alphanumerics/underscore, not starting with a digit.
    #[test]
    fn property_derived_names_are_identifiers(path in "[ -~]{1,24}") {
        if let Ok(name) = ConstName::derive(&PathBuf::from(path)) {
            let s = name.as_str();
            prop_assert!(!s.is_empty());
            prop_assert!(s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
            prop_assert!(!s.starts_with(|c: char| c.is_ascii_digit()));
        }
    }

    /// PROPERTY: Derivation never panics on arbitrary path-ish input.
    #[test]
    fn property_derive_never_panics(path in "(?s).{0,64}") {
        let _ = ConstName::derive(&PathBuf::from(path));
    }
}
