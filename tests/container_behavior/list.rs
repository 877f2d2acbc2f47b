//! Linked-list insertion, removal, sort and splice

use crate::{oracle, population};
use roster::{sort_list, splice_range, Category, Expectation, HasRecord, Record};
use std::collections::LinkedList;

const LIST_COUNT: usize = 10;

#[test]
fn test_list_push_pop_sort_splice() {
    let oracle = oracle();
    let source = population(LIST_COUNT).tracked(&oracle);

    let mut list: LinkedList<_> = source.iter().cloned().collect();
    oracle.expect(Expectation::AtLeast(1));
    drop(source);
    oracle.verify().unwrap();

    list.push_back(oracle.track(Record::new(Category::B, 15)));
    assert_eq!(list.back().map(|r| r.id()), Some(15));
    assert_eq!(list.back().map(|r| r.category()), Some(Category::B));

    oracle.expect(Expectation::Exactly(1));
    drop(list.pop_back());
    oracle.verify().unwrap();

    oracle.expect(Expectation::Never);
    sort_list(&mut list);
    oracle.verify().unwrap();

    for (index, record) in list.iter().enumerate() {
        assert_eq!(record.id() as usize, index + 1);
    }

    let mut spliced = LinkedList::new();
    let moved = splice_range(&mut spliced, 0, &mut list, 2, 5).unwrap();
    oracle.verify().unwrap();

    assert_eq!(moved, 3);
    assert_eq!(spliced.len(), 3);
    let ids: Vec<u32> = spliced.iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec![3, 4, 5]);
    assert_eq!(list.len(), LIST_COUNT - 3);
}

#[test]
fn test_splice_out_of_range_keeps_lists() {
    let oracle = oracle();
    let mut list: LinkedList<_> = population(LIST_COUNT).tracked(&oracle).into_iter().collect();
    let mut other = LinkedList::new();

    oracle.expect(Expectation::Never);
    assert!(splice_range(&mut other, 0, &mut list, 5, LIST_COUNT + 1).is_err());
    oracle.verify().unwrap();

    assert_eq!(list.len(), LIST_COUNT);
    assert!(other.is_empty());
}
