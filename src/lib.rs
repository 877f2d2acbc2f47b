//! Roster - container behavior checks with a drop-counting oracle
//!
//! Roster runs standard container algorithms (sorting, partitioning, ordered
//! map bound queries, list splicing) over a small record type, and counts how
//! many records are torn down along the way.
//!
//! # Quick Start
//!
//! ```
//! use roster::{sort_by_id, DropOracle, Expectation, Population, PopulationConfig};
//!
//! let oracle = DropOracle::new();
//! let mut population = Population::new(&PopulationConfig::default().with_seed(7))?;
//! let mut records = population.shared(&oracle);
//!
//! oracle.expect(Expectation::Never);
//! sort_by_id(&mut records);
//! oracle.verify()?;
//!
//! oracle.expect(Expectation::Exactly(20));
//! drop(records);
//! oracle.verify()?;
//! # Ok::<(), roster::Error>(())
//! ```

pub use roster_containers::*;
pub use roster_core::*;
