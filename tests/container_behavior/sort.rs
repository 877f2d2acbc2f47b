//! Sorting shared handles

use crate::{oracle, population, COUNT};
use roster::{is_sorted_by_id, sort_by_id, Expectation, HasRecord};

#[test]
fn test_sort_shared_handles_by_id() {
    let oracle = oracle();
    let mut records = population(COUNT).shared(&oracle);

    oracle.expect(Expectation::Never);
    sort_by_id(&mut records);
    oracle.verify().unwrap();

    for (index, record) in records.iter().enumerate() {
        assert_eq!(record.id() as usize, index + 1);
    }

    oracle.expect(Expectation::Exactly(COUNT));
    drop(records);
    oracle.verify().unwrap();
}

#[test]
fn test_sort_values_by_id() {
    let oracle = oracle();
    let mut records = population(COUNT).tracked(&oracle);

    sort_by_id(&mut records);
    assert!(is_sorted_by_id(&records));
    assert_eq!(records.first().map(|r| r.id()), Some(1));
    assert_eq!(records.last().map(|r| r.id()), Some(COUNT as u32));

    oracle.expect(Expectation::Exactly(COUNT));
    drop(records);
    oracle.verify().unwrap();
}

#[test]
fn test_sort_already_sorted_is_noop() {
    let mut records = population(COUNT).records();
    sort_by_id(&mut records);
    let before: Vec<_> = records.iter().map(|r| (r.id(), r.category())).collect();
    sort_by_id(&mut records);
    let after: Vec<_> = records.iter().map(|r| (r.id(), r.category())).collect();
    assert_eq!(before, after);
}
