//! Stable partition and move-out of exclusive handles

use crate::{oracle, population, COUNT};
use roster::{
    erase_empty, move_out, split_by_category, stable_partition, Category, Expectation, HasRecord,
};

#[test]
fn test_stable_partition_then_move_out() {
    let oracle = oracle();
    let mut humans: Vec<Option<_>> = population(COUNT)
        .boxed(&oracle)
        .into_iter()
        .map(Some)
        .collect();
    let original: Vec<u32> = humans.iter().flatten().map(|r| r.id()).collect();

    oracle.expect(Expectation::Never);
    let split = stable_partition(&mut humans, |slot| {
        slot.as_ref().map_or(false, |r| r.category() == Category::A)
    });
    let a = move_out(&mut humans[..split]);
    let b = move_out(&mut humans[split..]);
    oracle.verify().unwrap();

    assert!(a.iter().all(|r| r.category() == Category::A));
    assert!(b.iter().all(|r| r.category() == Category::B));

    // Relative order survives within each group.
    let expected_a: Vec<u32> = original
        .iter()
        .copied()
        .filter(|id| a.iter().any(|r| r.id() == *id))
        .collect();
    assert_eq!(a.iter().map(|r| r.id()).collect::<Vec<_>>(), expected_a);

    let old_size = humans.len();
    assert!(humans.iter().all(Option::is_none));
    assert_eq!(erase_empty(&mut humans), old_size);
    assert!(humans.is_empty());
    assert_eq!(old_size, a.len() + b.len());
    oracle.verify().unwrap();

    oracle.expect(Expectation::Exactly(COUNT));
    drop((a, b));
    oracle.verify().unwrap();
}

#[test]
fn test_split_by_category_pipeline() {
    let oracle = oracle();
    let mut source: Vec<Option<_>> = population(COUNT)
        .boxed(&oracle)
        .into_iter()
        .map(Some)
        .collect();

    oracle.expect(Expectation::Never);
    let split = split_by_category(&mut source, Category::B);
    oracle.verify().unwrap();

    assert!(source.is_empty());
    assert_eq!(split.erased, COUNT);
    assert_eq!(split.total(), COUNT);
    assert!(split.matching.iter().all(|r| r.category() == Category::B));
    assert!(split.rest.iter().all(|r| r.category() == Category::A));

    oracle.expect(Expectation::Exactly(COUNT));
    drop(split);
    oracle.verify().unwrap();
}

#[test]
fn test_removing_one_handle_drops_one_record() {
    let oracle = oracle();
    let mut records = population(COUNT).boxed(&oracle);

    oracle.expect(Expectation::Exactly(1));
    records.retain(|r| r.id() != 1);
    oracle.verify().unwrap();
    assert_eq!(records.len(), COUNT - 1);
}
