//! Container Behavior Test Suite
//!
//! Runs the standard container algorithms over populations of records and
//! checks both the resulting values and the number of records torn down.
//!
//! ## Areas Covered
//!
//! - `sort`: sorting shared handles by identifier
//! - `partition`: copying partition over shared handles
//! - `ownership`: stable partition and move-out of exclusive handles
//! - `map`: identifier-keyed map lookups, replacement and bounds
//! - `list`: linked-list insertion, removal, sort and splice
//! - `properties`: property tests over population size and seed
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test container_behavior
//!
//! # Map checks only
//! cargo test --test container_behavior map::
//!
//! # Replay a failing population
//! ROSTER_SEED=1234 cargo test --test container_behavior -- --nocapture
//! ```

use std::sync::Once;

use roster::{DropOracle, Population, PopulationConfig};

static INIT_TRACING: Once = Once::new();

/// Install a test-writer subscriber once per process
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Population of `count` records, honoring `ROSTER_SEED`
pub fn population(count: usize) -> Population {
    init_tracing();
    let config = PopulationConfig::default()
        .with_count(count)
        .seed_from_env();
    Population::new(&config).expect("valid population config")
}

/// Fresh oracle for one test case
pub fn oracle() -> DropOracle {
    DropOracle::new()
}

/// Default population size for the fixtures
pub const COUNT: usize = 20;

mod list;
mod ownership;
mod sort;
