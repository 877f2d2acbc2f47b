//! Container algorithms for roster
//!
//! This crate runs the container behaviors checked against records:
//! - Population: seeded record generation by value, shared or exclusive handle
//! - Algorithms: sort, partition copy, stable partition, moved-from slot handling
//! - Map: identifier-keyed ordered map with lower/upper bound queries
//! - List: linked-list sort and positional splice

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod access;
pub mod algorithms;
pub mod list;
pub mod map;
pub mod population;

pub use access::HasRecord;
pub use algorithms::{
    erase_empty, is_sorted_by_id, move_out, partition_copy, sort_by_id, split_by_category,
    stable_partition, Split,
};
pub use list::{sort_list, splice_range};
pub use map::RecordMap;
pub use population::{is_id_permutation, Population};
