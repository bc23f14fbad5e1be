// crates/core/src/strategies.rs
pub mod fibonacci;
pub mod memoized;
pub mod recursive;

use std::{fmt, str::FromStr};

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use stair_ways_shared_kernel::{DomainResult, MaxStep, StairCount, WayCount};

pub use fibonacci::Fibonacci;
pub use memoized::Memoized;
pub use recursive::Recursive;

/// A way-counting implementation.
///
/// All implementations honour the same contract: the stair heights 0 and 1
/// count as themselves, every other height counts the ordered sequences of
/// moves of size `1..=max_step` summing to it.
pub trait WayCounter: Send + Sync {
    fn name(&self) -> &'static str;

    fn count(&self, stairs: StairCount, max_step: MaxStep) -> WayCount;
}

/// Seed heights count as themselves in every strategy.
#[inline]
pub(crate) fn seed_count(stairs: StairCount) -> Option<WayCount> {
    stairs.is_seed().then(|| WayCount::from(stairs.value()))
}

/// Selects one of the interchangeable counting implementations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Sliding-window recurrence. O(n·m) time at worst, O(m) memory.
    #[default]
    Fibonacci,
    /// Plain top-down recursion. Exponential time.
    Recursive,
    /// Top-down recursion with a per-call cache.
    Memoized,
}

impl Strategy {
    pub const ALL: [Self; 3] = [Self::Fibonacci, Self::Recursive, Self::Memoized];

    pub fn counter(self) -> &'static dyn WayCounter {
        match self {
            Self::Fibonacci => &Fibonacci,
            Self::Recursive => &Recursive,
            Self::Memoized => &Memoized,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fibonacci => "fibonacci",
            Self::Recursive => "recursive",
            Self::Memoized => "memoized",
        }
    }

    /// Counts with already-validated inputs.
    pub fn count(self, stairs: StairCount, max_step: MaxStep) -> WayCount {
        tracing::debug!(strategy = self.as_str(), input = %stairs.describe(max_step), "counting ways");
        self.counter().count(stairs, max_step)
    }

    /// Validates raw integers, then counts.
    ///
    /// # Errors
    ///
    /// Returns [`stair_ways_shared_kernel::DomainError::InvalidArgument`] when
    /// `stair_count` is negative or `max_step` is not positive. Nothing is
    /// computed in that case.
    pub fn evaluate(self, stair_count: i64, max_step: i64) -> DomainResult<BigUint> {
        let stairs = StairCount::try_from(stair_count)?;
        let max_step = MaxStep::try_from(max_step)?;
        Ok(self.count(stairs, max_step).into_inner())
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fibonacci" | "fib" | "iterative" => Ok(Self::Fibonacci),
            "recursive" | "naive" => Ok(Self::Recursive),
            "memoized" | "memo" => Ok(Self::Memoized),
            other => Err(format!("Unknown strategy: {other}")),
        }
    }
}
