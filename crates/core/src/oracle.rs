//! Drop-counting oracle
//!
//! A [`DropOracle`] counts how many tracked values have been torn down. Values
//! are tracked by holding a [`DropToken`], usually through the [`Tracked`]
//! wrapper. A check declares an [`Expectation`], runs an algorithm, and then
//! calls [`DropOracle::verify`] to compare the drops observed since the
//! declaration against it.
//!
//! The oracle is an ordinary value: each check creates its own and hands it to
//! whatever needs to issue tokens. Clones share the same counter.
//!
//! # Example
//!
//! ```
//! use roster_core::{DropOracle, Expectation};
//!
//! let oracle = DropOracle::new();
//! let values: Vec<_> = (0..3).map(|i| oracle.track(i)).collect();
//!
//! oracle.expect(Expectation::Exactly(3));
//! drop(values);
//! assert!(oracle.verify().is_ok());
//! ```

use crate::error::OracleError;
use parking_lot::Mutex;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Expected number of drops within a verification window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// Exactly this many drops
    Exactly(usize),
    /// This many drops or more
    AtLeast(usize),
    /// No drops at all
    Never,
}

impl Expectation {
    /// Whether `actual` drops satisfy this expectation
    pub fn is_satisfied_by(self, actual: usize) -> bool {
        match self {
            Expectation::Exactly(n) => actual == n,
            Expectation::AtLeast(n) => actual >= n,
            Expectation::Never => actual == 0,
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Exactly(n) => write!(f, "exactly {}", n),
            Expectation::AtLeast(n) => write!(f, "at least {}", n),
            Expectation::Never => write!(f, "no"),
        }
    }
}

#[derive(Default)]
struct OracleState {
    issued: AtomicUsize,
    drops: AtomicUsize,
    window: Mutex<Window>,
}

#[derive(Default)]
struct Window {
    expectation: Option<Expectation>,
    baseline: usize,
}

/// Shared drop counter with a single expectation window
#[derive(Clone, Default)]
pub struct DropOracle {
    state: Arc<OracleState>,
}

impl DropOracle {
    /// Create an oracle with no drops recorded and no expectation
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a token whose drop is counted by this oracle
    pub fn token(&self) -> DropToken {
        self.state.issued.fetch_add(1, Ordering::Relaxed);
        DropToken {
            state: Arc::clone(&self.state),
        }
    }

    /// Wrap `value` so that dropping it is counted
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        Tracked {
            value,
            token: self.token(),
        }
    }

    /// Total drops recorded since creation
    pub fn drops(&self) -> usize {
        self.state.drops.load(Ordering::Relaxed)
    }

    /// Total tokens issued since creation
    pub fn issued(&self) -> usize {
        self.state.issued.load(Ordering::Relaxed)
    }

    /// Tokens issued and not yet dropped
    pub fn live(&self) -> usize {
        self.issued().saturating_sub(self.drops())
    }

    /// Declare the expectation for a new window starting now
    pub fn expect(&self, expectation: Expectation) {
        let mut window = self.state.window.lock();
        window.expectation = Some(expectation);
        window.baseline = self.drops();
        debug!(%expectation, baseline = window.baseline, "Drop expectation declared");
    }

    /// Drops observed since the current window opened
    pub fn window_drops(&self) -> usize {
        let baseline = self.state.window.lock().baseline;
        self.drops().saturating_sub(baseline)
    }

    /// Check the drops observed since [`expect`](Self::expect) against the expectation
    ///
    /// The window stays open, so a later `verify` sees any further drops too.
    pub fn verify(&self) -> Result<(), OracleError> {
        let window = self.state.window.lock();
        let expected = window.expectation.ok_or(OracleError::NoExpectation)?;
        let actual = self.drops().saturating_sub(window.baseline);

        if expected.is_satisfied_by(actual) {
            debug!(%expected, actual, "Drop expectation satisfied");
            Ok(())
        } else {
            Err(OracleError::Mismatch { expected, actual })
        }
    }

    /// Verify the current window, then open a new one with `next`
    pub fn checkpoint(&self, next: Expectation) -> Result<(), OracleError> {
        self.verify()?;
        self.expect(next);
        Ok(())
    }

    /// Verify and close the current window
    pub fn finish(&self) -> Result<(), OracleError> {
        self.verify()?;
        self.state.window.lock().expectation = None;
        Ok(())
    }
}

impl fmt::Debug for DropOracle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropOracle")
            .field("issued", &self.issued())
            .field("drops", &self.drops())
            .finish()
    }
}

/// Counts one drop on its oracle when dropped
///
/// Cloning issues a fresh token on the same oracle: the clone is a separate
/// object with its own teardown.
pub struct DropToken {
    state: Arc<OracleState>,
}

impl Clone for DropToken {
    fn clone(&self) -> Self {
        self.state.issued.fetch_add(1, Ordering::Relaxed);
        DropToken {
            state: Arc::clone(&self.state),
        }
    }
}

impl Drop for DropToken {
    fn drop(&mut self) {
        self.state.drops.fetch_add(1, Ordering::Relaxed);
    }
}

impl fmt::Debug for DropToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DropToken")
    }
}

/// A value whose drop is counted by a [`DropOracle`]
#[derive(Clone)]
pub struct Tracked<T> {
    value: T,
    token: DropToken,
}

impl<T> Tracked<T> {
    /// Unwrap the value; the wrapper's drop is counted immediately
    pub fn into_inner(self) -> T {
        let Tracked { value, token } = self;
        drop(token);
        value
    }
}

impl<T> Deref for Tracked<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for Tracked<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}
