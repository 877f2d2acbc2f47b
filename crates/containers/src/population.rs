//! Population fixtures
//!
//! A [`Population`] generates `count` records with identifiers `1..=count`
//! and random categories, then optionally shuffles them. The same records can
//! be produced by value, as tracked values, or behind shared or exclusive
//! ownership handles.
//!
//! The RNG seed is always logged so a failing check can be replayed with
//! `ROSTER_SEED`.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use roster_core::{Category, DropOracle, PopulationConfig, Record, Result, Tracked};
use std::sync::Arc;
use tracing::debug;

/// Seeded record generator
pub struct Population {
    count: usize,
    shuffle: bool,
    seed: u64,
    rng: StdRng,
}

impl Population {
    /// Create a generator from a validated config
    pub fn new(config: &PopulationConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        debug!(count = config.count, seed, shuffle = config.shuffle, "Population created");

        Ok(Population {
            count: config.count,
            shuffle: config.shuffle,
            seed,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Seed driving this generator
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of records per batch
    pub fn count(&self) -> usize {
        self.count
    }

    /// Generate a batch of plain records
    ///
    /// Successive calls continue the RNG stream, so batches differ.
    pub fn records(&mut self) -> Vec<Record> {
        let mut records: Vec<Record> = (1..=self.count)
            .map(|id| {
                let category = if self.rng.gen_bool(0.5) {
                    Category::A
                } else {
                    Category::B
                };
                Record::new(category, id as u32)
            })
            .collect();

        if self.shuffle {
            records.shuffle(&mut self.rng);
        }
        debug!(count = records.len(), "Generated records");
        records
    }

    /// Generate records tracked by `oracle`, stored by value
    pub fn tracked(&mut self, oracle: &DropOracle) -> Vec<Tracked<Record>> {
        self.records().into_iter().map(|r| oracle.track(r)).collect()
    }

    /// Generate records tracked by `oracle`, behind shared handles
    pub fn shared(&mut self, oracle: &DropOracle) -> Vec<Arc<Tracked<Record>>> {
        self.records()
            .into_iter()
            .map(|r| Arc::new(oracle.track(r)))
            .collect()
    }

    /// Generate records tracked by `oracle`, behind exclusive handles
    pub fn boxed(&mut self, oracle: &DropOracle) -> Vec<Box<Tracked<Record>>> {
        self.records()
            .into_iter()
            .map(|r| Box::new(oracle.track(r)))
            .collect()
    }
}

/// Whether `ids` is a permutation of `1..=n` for its own length `n`
pub fn is_id_permutation<I>(ids: I) -> bool
where
    I: IntoIterator<Item = u32>,
{
    let mut ids: Vec<u32> = ids.into_iter().collect();
    ids.sort_unstable();
    ids.iter()
        .enumerate()
        .all(|(index, &id)| id as usize == index + 1)
}
