//! Property tests for name validation and variant matching.

use logokit_core::*;
use proptest::prelude::*;

/// Names drawn from the allowed character class.
fn valid_name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,24}"
}

/// Names guaranteed to contain at least one disallowed character.
fn invalid_name_strategy() -> impl Strategy<Value = String> {
    (
        "[A-Za-z0-9_-]{0,8}",
        "[ ./\\\\:@!?*#éü\t]",
        "[A-Za-z0-9_-]{0,8}",
    )
        .prop_map(|(head, bad, tail)| format!("{head}{bad}{tail}"))
}

proptest! {
    /// Valid names pass through unchanged and in order.
    #[test]
    fn valid_names_preserved_in_order(names in prop::collection::vec(valid_name_strategy(), 0..16)) {
        let outcome = validate_names(&names);
        prop_assert!(outcome.errors.is_empty());
        prop_assert_eq!(outcome.valid_names, names);
    }

    /// Any disallowed character yields the character-class message.
    #[test]
    fn invalid_names_report_character_class(name in invalid_name_strategy()) {
        let err = validate_name(&name).unwrap_err();
        let message = err.to_string();
        prop_assert!(message.contains("alphanumeric characters, hyphens, or underscores"));
        prop_assert!(!message.contains("cannot be empty"));
    }

    /// Mixed input splits into the two lists without reordering either.
    #[test]
    fn mixed_names_partition(
        entries in prop::collection::vec(
            prop_oneof![
                valid_name_strategy().prop_map(|n| (n, true)),
                invalid_name_strategy().prop_map(|n| (n, false)),
            ],
            0..16,
        )
    ) {
        let names: Vec<&str> = entries.iter().map(|(n, _)| n.as_str()).collect();
        let outcome = validate_names(&names);

        let expected_valid: Vec<String> =
            entries.iter().filter(|(_, ok)| *ok).map(|(n, _)| n.clone()).collect();
        let expected_invalid: Vec<String> =
            entries.iter().filter(|(_, ok)| !*ok).map(|(n, _)| n.clone()).collect();

        prop_assert_eq!(outcome.valid_names, expected_valid);
        let reported: Vec<String> = outcome.errors.into_iter().map(|e| e.name).collect();
        prop_assert_eq!(reported, expected_invalid);
    }

    /// Resolution returns a subsequence of the library, always including an
    /// exact (case-insensitive) match.
    #[test]
    fn resolution_is_ordered_subsequence(
        brand in "[a-z]{1,8}",
        library in prop::collection::vec("[a-z]{1,8}(_dark|_light|-[a-z]{1,4}_wordmark)?", 0..20),
    ) {
        let mut library = library;
        library.sort();
        let found = resolve_variants(&brand.to_uppercase(), &library);

        let mut cursor = library.iter();
        for id in &found {
            prop_assert!(cursor.any(|candidate| candidate == id));
        }
        if library.contains(&brand) {
            prop_assert!(found.contains(&brand));
        }
    }

    /// Filtering is the identity without flags. With flags it never invents
    /// identifiers and never keeps one marked only with unrequested variants.
    #[test]
    fn filtering_only_removes(
        candidates in prop::collection::vec("[a-z]{1,6}(_dark|_light|_wordmark)?", 0..12),
        dark in any::<bool>(),
        light in any::<bool>(),
        wordmark in any::<bool>(),
    ) {
        let options = ProcessOptions { dark, light, wordmark };
        let filtered = filter_by_variants(&candidates, &options);

        if !options.filters_variants() {
            prop_assert_eq!(&filtered, &candidates);
            return Ok(());
        }
        for id in &filtered {
            prop_assert!(candidates.contains(id));
        }
        for id in &filtered {
            let unrequested = Variant::ALL
                .into_iter()
                .filter(|v| !options.wants(*v))
                .all(|v| !v.is_marked_in(id) || options.requested().iter().any(|r| r.is_marked_in(id)));
            prop_assert!(unrequested);
        }
    }
}

#[test]
fn unflagged_filter_keeps_marked_identifiers() {
    let candidates = ["a_dark", "b_light", "c_wordmark", "d"];
    assert_eq!(
        filter_by_variants(&candidates, &ProcessOptions::default()),
        candidates.to_vec()
    );
}

#[test]
fn empty_name_uses_empty_message() {
    let outcome = validate_names([""]);
    assert!(outcome.valid_names.is_empty());
    assert_eq!(outcome.errors[0].error.to_string(), "Logo name cannot be empty");
}
