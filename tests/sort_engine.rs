//! Sort ordering: direction per option, stability, and collation.

use proptest::prelude::*;

use dexplorer::domain::{sort_records, SortOption};
use dexplorer::Record;

fn with_speed(id: u32, name: &str, speed: u32) -> Record {
    let mut record = Record::new(id, name, "Normal");
    record.speed = speed;
    record
}

fn ids(records: &[Record]) -> Vec<u32> {
    records.iter().map(|r| r.id).collect()
}

#[test]
fn speed_puts_fastest_first() {
    let records = vec![with_speed(1, "Bulba", 45), with_speed(4, "Charm", 65)];
    assert_eq!(ids(&sort_records(&records, SortOption::Speed)), vec![4, 1]);
}

#[test]
fn id_is_ascending() {
    let records = vec![with_speed(7, "Squirt", 43), with_speed(1, "Bulba", 45), with_speed(4, "Charm", 65)];
    assert_eq!(ids(&sort_records(&records, SortOption::Id)), vec![1, 4, 7]);
}

#[test]
fn name_ignores_case() {
    let records = vec![
        with_speed(1, "eevee", 55),
        with_speed(2, "Abra", 90),
        with_speed(3, "charm", 65),
    ];
    let sorted = sort_records(&records, SortOption::Name);
    let names: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Abra", "charm", "eevee"]);
}

#[test]
fn accented_names_sort_with_their_base_letters() {
    let records = vec![
        with_speed(1, "Flareon", 65),
        with_speed(2, "Flabébé", 42),
        with_speed(3, "Eevee", 55),
        with_speed(4, "Électrode", 150),
        with_speed(5, "Furret", 90),
    ];
    let sorted = sort_records(&records, SortOption::Name);
    let names: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Eevee", "Électrode", "Flabébé", "Flareon", "Furret"]);
}

#[test]
fn equal_keys_keep_input_order() {
    let records = vec![with_speed(9, "A", 50), with_speed(3, "B", 50), with_speed(5, "C", 50)];
    assert_eq!(ids(&sort_records(&records, SortOption::Speed)), vec![9, 3, 5]);
}

#[test]
fn input_is_left_untouched() {
    let records = vec![with_speed(2, "B", 10), with_speed(1, "A", 20)];
    let _ = sort_records(&records, SortOption::Id);
    assert_eq!(ids(&records), vec![2, 1]);
}

fn arb_records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec((1u32..500, 0u32..200, 0u32..200, 0u32..200, 0u32..200), 0..40).prop_map(
        |rows| {
            rows.into_iter()
                .map(|(id, hp, attack, defense, speed)| {
                    let mut record = Record::new(id, format!("r{id}"), "Normal");
                    record.hp = hp;
                    record.attack = attack;
                    record.defense = defense;
                    record.speed = speed;
                    record
                })
                .collect()
        },
    )
}

fn stat(record: &Record, option: SortOption) -> u32 {
    match option {
        SortOption::Hp => record.hp,
        SortOption::Attack => record.attack,
        SortOption::Defense => record.defense,
        SortOption::Speed => record.speed,
        SortOption::Id | SortOption::Name => 0,
    }
}

proptest! {
    #[test]
    fn stat_orders_are_non_increasing(records in arb_records()) {
        for option in [SortOption::Hp, SortOption::Attack, SortOption::Defense, SortOption::Speed] {
            let sorted = sort_records(&records, option);
            prop_assert_eq!(sorted.len(), records.len());
            for pair in sorted.windows(2) {
                prop_assert!(stat(&pair[0], option) >= stat(&pair[1], option));
            }
        }
    }

    #[test]
    fn id_order_is_non_decreasing(records in arb_records()) {
        let sorted = sort_records(&records, SortOption::Id);
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].id <= pair[1].id);
        }
    }

    #[test]
    fn equal_stats_keep_their_input_order(speeds in prop::collection::vec(0u32..5, 0..40)) {
        let records: Vec<Record> = speeds
            .iter()
            .enumerate()
            .map(|(idx, speed)| with_speed(idx as u32, "r", *speed))
            .collect();

        let sorted = sort_records(&records, SortOption::Speed);
        for pair in sorted.windows(2) {
            if pair[0].speed == pair[1].speed {
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }
}
