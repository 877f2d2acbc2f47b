//! Linked-list operations
//!
//! `LinkedList` has neither a sort nor a positional splice in std. Both are
//! built here from `split_off` and `append`, so elements are moved between
//! nodes and never cloned or dropped.

use crate::access::HasRecord;
use roster_core::{Error, Result};
use std::cmp::Ordering;
use std::collections::LinkedList;
use tracing::debug;

/// Sort ascending by identifier (stable merge sort)
pub fn sort_list<T: HasRecord>(list: &mut LinkedList<T>) {
    let len = list.len();
    if len < 2 {
        return;
    }

    let mut right = list.split_off(len / 2);
    sort_list(list);
    sort_list(&mut right);

    let mut left = std::mem::take(list);
    loop {
        let take_right = match (left.front(), right.front()) {
            (Some(l), Some(r)) => r.record().cmp_by_id(l.record()) == Ordering::Less,
            _ => break,
        };
        let next = if take_right {
            right.pop_front()
        } else {
            left.pop_front()
        };
        if let Some(item) = next {
            list.push_back(item);
        }
    }
    list.append(&mut left);
    list.append(&mut right);
}

/// Move `src[start..end]` into `dst` before position `at`
///
/// Relative order of the moved elements is preserved. Returns how many
/// elements moved.
///
/// # Errors
///
/// `RangeOutOfBounds` when the source range is inverted or past the end of
/// `src`, or when `at` is past the end of `dst`. Neither list is modified on
/// error.
pub fn splice_range<T>(
    dst: &mut LinkedList<T>,
    at: usize,
    src: &mut LinkedList<T>,
    start: usize,
    end: usize,
) -> Result<usize> {
    if start > end || end > src.len() {
        return Err(Error::RangeOutOfBounds {
            start,
            end,
            len: src.len(),
        });
    }
    if at > dst.len() {
        return Err(Error::RangeOutOfBounds {
            start: at,
            end: at,
            len: dst.len(),
        });
    }

    let mut moved = src.split_off(start);
    let mut tail = moved.split_off(end - start);
    src.append(&mut tail);

    let count = moved.len();
    let mut after = dst.split_off(at);
    dst.append(&mut moved);
    dst.append(&mut after);

    debug!(start, end, at, count, "Spliced range");
    Ok(count)
}
