use crate::utils::catalog;
use proptest::prelude::*;
use state_stats::utils::{deslugify, slugify};

/// The detail-view link of a two-word name
#[test]
fn test_two_word_round_trip() {
    assert_eq!(slugify("Tamil Nadu"), "tamil-nadu");
    assert_eq!(deslugify("tamil-nadu"), "Tamil Nadu");
}

/// Every entity resolves from its own slug
#[test]
fn test_resolve_every_entity() {
    let catalog = catalog();
    let index = catalog.entities();

    for entity in index.entities() {
        let resolved = index.resolve_slug(&entity.slug()).unwrap();
        assert_eq!(resolved.name, entity.name);
    }

    // lowercase connectives are only recovered through the index
    assert_eq!(
        deslugify("andaman-and-nicobar-islands"),
        "Andaman And Nicobar Islands"
    );
    assert_eq!(
        index.resolve_slug("andaman-and-nicobar-islands").unwrap().name,
        "Andaman and Nicobar Islands"
    );
    assert!(index.resolve_slug("atlantis").is_none());
}

proptest! {
    /// Simple capitalised names survive slugify then deslugify
    #[test]
    fn prop_capitalised_names_round_trip(words in proptest::collection::vec("[A-Z][a-z]{1,10}", 1..4)) {
        let name = words.join(" ");
        let slug = slugify(&name);
        prop_assert!(!slug.contains(' '));
        prop_assert_eq!(deslugify(&slug), name);
    }
}
