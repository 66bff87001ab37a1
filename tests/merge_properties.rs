//! Property-based tests for merging and field-path addressing.
//!
//! - merge totality and whole-value replacement for arbitrary overrides
//! - path injectivity and round-trip for arbitrary configuration trees
//! - the same two properties over rendered sections

use std::collections::HashSet;

use landing_sections::config::shallow_merge;
use landing_sections::field_path::leaves;
use landing_sections::{FieldPath, Hero, Pricing, Section, SectionConfig, SectionKind};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-zA-Z0-9 &<>#/]{0,12}".prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(4, 48, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map(arb_key(), inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

/// Record keys, including empty keys and keys that look like paths
fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-z]{1,6}",
        1 => "[a-z.\\[\\]0-9]{0,6}",
    ]
}

/// Partial overrides mixing real section keys with unknown ones
fn arb_override(keys: &'static [&'static str]) -> impl Strategy<Value = Value> {
    let key = prop_oneof![
        prop::sample::select(keys).prop_map(str::to_string),
        arb_key(),
    ];
    prop::collection::btree_map(key, arb_value(), 0..5)
        .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>()))
}

const HERO_KEYS: &[&str] = &[
    "title",
    "subtitle",
    "description",
    "ctaText",
    "ctaHref",
    "secondaryCtaText",
    "secondaryCtaHref",
    "features",
    "stats",
    "badgeText",
];

const PRICING_KEYS: &[&str] = &["sectionTitle", "sectionSubtitle", "guarantee", "note", "plans"];

fn assert_rendered_paths_sound(section: &dyn Section) {
    let rendered = section.render();
    let mut seen = HashSet::new();
    for field in &rendered.fields {
        assert!(seen.insert(field.path.clone()), "duplicate path {}", field.path);
        assert_eq!(
            section.config().get(&field.path),
            Some(&field.value),
            "path {} does not resolve to the rendered value",
            field.path
        );
    }
}

proptest! {
    #[test]
    fn merge_is_total_and_replaces_whole_values(overrides in arb_override(HERO_KEYS)) {
        let defaults = SectionKind::Hero.default_value();
        let merged = SectionConfig::merge(SectionKind::Hero, &overrides);
        let merged = merged.as_value();

        let default_map = defaults.as_object().unwrap();
        let override_map = overrides.as_object().unwrap();

        for (key, default_value) in default_map {
            let value = merged.get(key);
            prop_assert!(value.is_some(), "missing key {}", key);
            match override_map.get(key) {
                Some(o) => prop_assert_eq!(value.unwrap(), o),
                None => prop_assert_eq!(value.unwrap(), default_value),
            }
        }
        for (key, o) in override_map {
            prop_assert_eq!(merged.get(key), Some(o));
        }
    }

    #[test]
    fn merge_with_empty_override_is_identity(base in arb_override(PRICING_KEYS)) {
        prop_assert_eq!(shallow_merge(base.clone(), json!({})), base);
    }

    #[test]
    fn leaf_paths_are_injective_and_round_trip(value in arb_value()) {
        let found = leaves(&value);
        let unique: HashSet<&FieldPath> = found.iter().map(|(p, _)| p).collect();
        prop_assert_eq!(unique.len(), found.len());

        for (path, leaf) in &found {
            prop_assert_eq!(path.resolve(&value), Some(*leaf));
            if !path.is_root() {
                let reparsed: FieldPath = path.to_string().parse().unwrap();
                prop_assert_eq!(&reparsed, path);
            }
        }
    }

    #[test]
    fn rendered_hero_paths_are_sound(overrides in arb_override(HERO_KEYS)) {
        assert_rendered_paths_sound(&Hero::new(&overrides));
    }

    #[test]
    fn rendered_pricing_paths_are_sound(
        overrides in arb_override(PRICING_KEYS),
        yearly in any::<bool>(),
    ) {
        let mut pricing = Pricing::new(&overrides);
        if yearly {
            pricing.toggle_billing();
        }
        assert_rendered_paths_sound(&pricing);
    }
}

#[test]
fn merge_of_defaults_with_empty_override_is_exact() {
    for kind in SectionKind::ALL {
        let merged = SectionConfig::merge(kind, &json!({}));
        assert_eq!(merged.as_value(), &kind.default_value());
    }
}

#[test]
fn merge_does_not_splice_sequences() {
    let merged = SectionConfig::merge(
        SectionKind::Pricing,
        &json!({"plans": [{"name": "Only"}]}),
    );
    let plans = merged.as_value()["plans"].as_array().unwrap();
    assert_eq!(plans.len(), 1);
    assert!(plans[0].get("price").is_none());
}
