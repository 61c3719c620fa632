//! Filter predicate behavior over small hand-built collections, plus
//! property checks that the filter only ever narrows its input.

use proptest::prelude::*;

use dexplorer::domain::{filter_records, matches, Bound, FilterKey, FilterSet, RangeStat};
use dexplorer::Record;

fn record(id: u32, name: &str, type1: &str, hp: u32) -> Record {
    let mut record = Record::new(id, name, type1);
    record.hp = hp;
    record
}

fn starters() -> Vec<Record> {
    vec![record(1, "Bulba", "Grass", 45), record(2, "Charm", "Fire", 39)]
}

fn names(records: &[Record]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn search_keeps_only_name_matches() {
    let result = filter_records(&starters(), &FilterSet::new(), "char");
    assert_eq!(names(&result), vec!["Charm"]);
}

#[test]
fn search_is_case_insensitive() {
    let result = filter_records(&starters(), &FilterSet::new(), "BULB");
    assert_eq!(names(&result), vec!["Bulba"]);
}

#[test]
fn min_bound_excludes_lower_stats() {
    let mut filters = FilterSet::new();
    filters.set(FilterKey::Range(RangeStat::Hp, Bound::Min), "40");

    let result = filter_records(&starters(), &filters, "");
    assert_eq!(names(&result), vec!["Bulba"]);
}

#[test]
fn bounds_are_inclusive() {
    let mut filters = FilterSet::new();
    filters.set(FilterKey::Range(RangeStat::Hp, Bound::Min), "39");
    filters.set(FilterKey::Range(RangeStat::Hp, Bound::Max), "45");

    assert_eq!(filter_records(&starters(), &filters, "").len(), 2);
}

#[test]
fn max_bound_excludes_higher_stats() {
    let mut fast = record(3, "Zippy", "Electric", 30);
    fast.speed = 120;
    let mut slow = record(4, "Slowpo", "Water", 90);
    slow.speed = 15;

    let mut filters = FilterSet::new();
    filters.set(FilterKey::Range(RangeStat::Speed, Bound::Max), "100");

    let result = filter_records(&[fast, slow], &filters, "");
    assert_eq!(names(&result), vec!["Slowpo"]);
}

#[test]
fn legendary_true_excludes_ordinary_records() {
    let mut filters = FilterSet::new();
    filters.set(FilterKey::Legendary, "true");

    let ordinary = record(1, "Bulba", "Grass", 45);
    assert!(!matches(&ordinary, &filters, ""));

    let mut mythic = record(150, "Mewtwo", "Psychic", 106);
    mythic.legendary = true;
    assert!(matches(&mythic, &filters, ""));
}

#[test]
fn legendary_other_values_mean_not_legendary() {
    let mut filters = FilterSet::new();
    filters.set(FilterKey::Legendary, "false");

    let mut mythic = record(150, "Mewtwo", "Psychic", 106);
    mythic.legendary = true;
    assert!(!matches(&mythic, &filters, ""));
    assert!(matches(&record(1, "Bulba", "Grass", 45), &filters, ""));
}

#[test]
fn exact_keys_fold_case() {
    let mut filters = FilterSet::new();
    filters.set(FilterKey::Type1, "gRaSs");
    assert_eq!(names(&filter_records(&starters(), &filters, "")), vec!["Bulba"]);
}

#[test]
fn generation_compares_as_text() {
    let mut gen2 = record(152, "Chiko", "Grass", 45);
    gen2.generation = 2;
    let mut gen1 = record(1, "Bulba", "Grass", 45);
    gen1.generation = 1;

    let mut filters = FilterSet::new();
    filters.set(FilterKey::Generation, "2");
    assert_eq!(names(&filter_records(&[gen1, gen2], &filters, "")), vec!["Chiko"]);
}

#[test]
fn missing_secondary_type_never_matches_type2_filter() {
    let mut dual = record(1, "Bulba", "Grass", 45);
    dual.type2 = Some("Poison".to_string());
    let single = record(4, "Charm", "Fire", 39);

    let mut filters = FilterSet::new();
    filters.set(FilterKey::Type2, "poison");
    assert_eq!(names(&filter_records(&[dual, single], &filters, "")), vec!["Bulba"]);
}

#[test]
fn every_filter_must_hold() {
    let mut filters = FilterSet::new();
    filters.set(FilterKey::Type1, "Grass");
    filters.set(FilterKey::Range(RangeStat::Hp, Bound::Max), "40");

    assert!(filter_records(&starters(), &filters, "").is_empty());
}

#[test]
fn unparsable_bounds_are_ignored() {
    let mut filters = FilterSet::new();
    filters.set(FilterKey::Range(RangeStat::Attack, Bound::Min), "strong");
    assert_eq!(filter_records(&starters(), &filters, "").len(), 2);
}

#[test]
fn oversized_bounds_still_constrain() {
    let mut filters = FilterSet::new();
    filters.set(FilterKey::Range(RangeStat::Hp, Bound::Min), "99999999999999999999");
    assert!(filter_records(&starters(), &filters, "").is_empty());

    let mut filters = FilterSet::new();
    filters.set(FilterKey::Range(RangeStat::Hp, Bound::Max), "99999999999999999999");
    filters.set(FilterKey::Range(RangeStat::Hp, Bound::Min), "-99999999999999999999");
    assert_eq!(filter_records(&starters(), &filters, "").len(), 2);
}

fn arb_record() -> impl Strategy<Value = Record> {
    (
        1u32..1000,
        "[A-Za-z]{1,10}",
        prop::sample::select(vec!["Grass", "Fire", "Water", "Electric"]),
        0u32..256,
        0u32..256,
        any::<bool>(),
    )
        .prop_map(|(id, name, type1, hp, speed, legendary)| {
            let mut record = Record::new(id, name, type1);
            record.hp = hp;
            record.speed = speed;
            record.legendary = legendary;
            record
        })
}

fn arb_filters() -> impl Strategy<Value = FilterSet> {
    (
        prop::option::of(prop::sample::select(vec!["grass", "fire", "water"])),
        prop::option::of(0u32..256),
        prop::option::of(0u32..256),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(type1, hp_min, speed_max, legendary)| {
            let mut filters = FilterSet::new();
            if let Some(t) = type1 {
                filters.set(FilterKey::Type1, t);
            }
            if let Some(n) = hp_min {
                filters.set(FilterKey::Range(RangeStat::Hp, Bound::Min), &n.to_string());
            }
            if let Some(n) = speed_max {
                filters.set(FilterKey::Range(RangeStat::Speed, Bound::Max), &n.to_string());
            }
            if let Some(flag) = legendary {
                filters.set(FilterKey::Legendary, &flag.to_string());
            }
            filters
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn filtering_keeps_an_ordered_subset(
        records in prop::collection::vec(arb_record(), 0..30),
        filters in arb_filters(),
        search in "[a-z]{0,2}",
    ) {
        let kept = filter_records(&records, &filters, &search);
        prop_assert!(kept.len() <= records.len());

        let mut rest = records.iter();
        for record in &kept {
            prop_assert!(rest.any(|r| r == record));
        }
    }

    #[test]
    fn filtering_is_idempotent(
        records in prop::collection::vec(arb_record(), 0..30),
        filters in arb_filters(),
        search in "[a-z]{0,2}",
    ) {
        let once = filter_records(&records, &filters, &search);
        let twice = filter_records(&once, &filters, &search);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn empty_criteria_keep_everything(records in prop::collection::vec(arb_record(), 0..30)) {
        prop_assert_eq!(filter_records(&records, &FilterSet::new(), ""), records);
    }
}
