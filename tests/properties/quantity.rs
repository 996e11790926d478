//! Property tests for resource quantities.

use proptest::prelude::*;

use apidefaults::Quantity;

use crate::strategies::quantity;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing never panics, whatever the input.
    #[test]
    fn property_parse_never_panics(input in "\\PC{0,24}") {
        let _ = input.parse::<Quantity>();
    }

    /// PROPERTY: the canonical form parses back to the same amount.
    #[test]
    fn property_canonical_form_parses_back(q in quantity()) {
        let text = q.to_string();
        let parsed: Quantity = text.parse().unwrap();
        prop_assert_eq!(parsed, q);
    }

    /// PROPERTY: a copy compares equal and is unaffected by changes to the original.
    #[test]
    fn property_copy_is_independent(q in quantity(), delta in quantity()) {
        let mut original = q.copy();
        let copy = original.copy();
        original.add(&delta);
        prop_assert_eq!(&copy, &q);
        prop_assert!(original > copy);
    }
}
