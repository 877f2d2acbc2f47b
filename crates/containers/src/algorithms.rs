//! Sequence algorithms over record containers
//!
//! Sorting, copying partition, in-place stable partition, and the
//! moved-from slot handling used when exclusive handles are moved out of a
//! container. Moved-from slots are modelled as `None` in a `Vec<Option<T>>`.

use crate::access::HasRecord;
use roster_core::Category;
use tracing::debug;

/// Sort ascending by identifier (stable)
pub fn sort_by_id<T: HasRecord>(items: &mut [T]) {
    items.sort_by(|a, b| a.record().cmp_by_id(b.record()));
    debug!(len = items.len(), "Sorted by id");
}

/// Whether identifiers never decrease along `items`
pub fn is_sorted_by_id<'a, T, I>(items: I) -> bool
where
    T: HasRecord + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut previous: Option<u32> = None;
    for item in items {
        let id = item.id();
        if previous.map_or(false, |p| p > id) {
            return false;
        }
        previous = Some(id);
    }
    true
}

/// Copy each element into the first output if `pred` holds, else the second
///
/// The source is left untouched; every element is cloned exactly once.
pub fn partition_copy<T, F>(items: &[T], mut pred: F) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut matching = Vec::new();
    let mut rest = Vec::new();
    for item in items {
        if pred(item) {
            matching.push(item.clone());
        } else {
            rest.push(item.clone());
        }
    }
    debug!(matching = matching.len(), rest = rest.len(), "Partition copy");
    (matching, rest)
}

/// Reorder `items` so that elements satisfying `pred` come first
///
/// Relative order is kept within both groups. Returns the number of
/// matching elements, which is the index of the first non-matching one.
/// Runs without allocating; `pred` is called once per element, in order.
pub fn stable_partition<T, F>(items: &mut [T], mut pred: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    let split = partition_rotate(items, &mut pred);
    debug!(len = items.len(), split, "Stable partition");
    split
}

fn partition_rotate<T, F>(items: &mut [T], pred: &mut F) -> usize
where
    F: FnMut(&T) -> bool,
{
    match items.len() {
        0 => 0,
        1 => usize::from(pred(&items[0])),
        len => {
            let mid = len / 2;
            let left = partition_rotate(&mut items[..mid], pred);
            let right = partition_rotate(&mut items[mid..], pred);
            // [left true | left false | right true | right false]
            items[left..mid + right].rotate_left(mid - left);
            left + right
        }
    }
}

/// Take every element out of `slots`, leaving `None` behind
pub fn move_out<T>(slots: &mut [Option<T>]) -> Vec<T> {
    slots.iter_mut().filter_map(Option::take).collect()
}

/// Remove empty slots, returning how many were removed
pub fn erase_empty<T>(slots: &mut Vec<Option<T>>) -> usize {
    let before = slots.len();
    slots.retain(Option::is_some);
    before - slots.len()
}

/// Outcome of [`split_by_category`]
#[derive(Debug)]
pub struct Split<T> {
    /// Elements with the requested category, in original relative order
    pub matching: Vec<T>,
    /// All other elements, in original relative order
    pub rest: Vec<T>,
    /// Moved-from slots erased from the source
    pub erased: usize,
}

impl<T> Split<T> {
    /// Elements across both groups
    pub fn total(&self) -> usize {
        self.matching.len() + self.rest.len()
    }
}

/// Stable-partition `source` by category, move both halves out, then erase
/// the moved-from slots
///
/// `source` is empty afterwards. Slots that were already empty are erased
/// too and do not appear in either group.
pub fn split_by_category<T: HasRecord>(
    source: &mut Vec<Option<T>>,
    category: Category,
) -> Split<T> {
    let split = stable_partition(source, |slot| {
        slot.as_ref().map_or(false, |item| item.category() == category)
    });

    let matching = move_out(&mut source[..split]);
    let rest = move_out(&mut source[split..]);
    let erased = erase_empty(source);

    debug!(
        %category,
        matching = matching.len(),
        rest = rest.len(),
        erased,
        "Split by category"
    );
    Split {
        matching,
        rest,
        erased,
    }
}
