// crates/shared-kernel/src/value_objects/steps.rs
use std::{fmt, num::NonZeroU64};

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Target height of the staircase. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StairCount(u64);

impl StairCount {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// `true` for the two seed heights (0 and 1), whose count is the height itself.
    #[inline]
    pub const fn is_seed(self) -> bool {
        self.0 <= 1
    }
}

impl Default for StairCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for StairCount {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<StairCount> for u64 {
    fn from(value: StairCount) -> Self {
        value.0
    }
}

impl TryFrom<i64> for StairCount {
    type Error = DomainError;

    fn try_from(value: i64) -> DomainResult<Self> {
        u64::try_from(value).map(Self).map_err(|_| DomainError::InvalidArgument {
            argument: "stair_count",
            value: i128::from(value),
            reason: "cannot have negative stairs",
        })
    }
}

/// Inclusive upper bound on the size of a single move. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaxStep(NonZeroU64);

impl MaxStep {
    /// Single-step moves only.
    pub const ONE: Self = Self(NonZeroU64::MIN);

    /// # Errors
    ///
    /// Returns [`DomainError::InvalidArgument`] when `value` is zero.
    pub fn new(value: u64) -> DomainResult<Self> {
        NonZeroU64::new(value).map(Self).ok_or(DomainError::InvalidArgument {
            argument: "max_step",
            value: i128::from(value),
            reason: "must be greater than 0",
        })
    }

    #[inline]
    pub const fn from_nonzero(value: NonZeroU64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }

    #[inline]
    pub const fn is_single(self) -> bool {
        self.0.get() == 1
    }
}

impl From<NonZeroU64> for MaxStep {
    fn from(value: NonZeroU64) -> Self {
        Self(value)
    }
}

impl From<MaxStep> for u64 {
    fn from(value: MaxStep) -> Self {
        value.get()
    }
}

impl TryFrom<u64> for MaxStep {
    type Error = DomainError;

    fn try_from(value: u64) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl TryFrom<i64> for MaxStep {
    type Error = DomainError;

    fn try_from(value: i64) -> DomainResult<Self> {
        u64::try_from(value)
            .ok()
            .and_then(NonZeroU64::new)
            .map(Self)
            .ok_or(DomainError::InvalidArgument {
                argument: "max_step",
                value: i128::from(value),
                reason: "must be greater than 0",
            })
    }
}

mod display {
    use std::fmt;

    use super::{MaxStep, StairCount};

    impl fmt::Display for StairCount {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.value())
        }
    }

    impl fmt::Display for MaxStep {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.get())
        }
    }
}

impl StairCount {
    /// Formats the input pair for log lines.
    pub fn describe(self, max_step: MaxStep) -> impl fmt::Display {
        struct Pair(StairCount, MaxStep);
        impl fmt::Display for Pair {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "stairs={} max_step={}", self.0, self.1)
            }
        }
        Pair(self, max_step)
    }
}
