// crates/core/src/lib.rs
//! Counting the ways to climb a staircase when each move covers between one
//! and `max_step` stairs.
//!
//! The primary implementation is [`Fibonacci`], an iterative recurrence over a
//! sliding window of the last `max_step` terms. [`Recursive`] and [`Memoized`]
//! implement the same contract and exist to cross-check it.
//!
//! ```
//! assert_eq!(stair_ways_core::count_ways(7, 2).unwrap().to_string(), "21");
//! assert!(stair_ways_core::count_ways(-1, 2).is_err());
//! ```
#![allow(clippy::multiple_crate_versions)]

pub mod limits;
pub mod scenarios;
pub mod sequence;
pub mod strategies;
pub mod verify;
pub mod window;

use num_bigint::BigUint;
use serde::Serialize;
use stair_ways_shared_kernel::{DomainResult, ErrorContext, MaxStep, Result, StairCount, WayCount};

pub use limits::Limits;
pub use scenarios::{SCENARIOS, Scenario, ScenarioOutcome, Verdict, run_scenarios};
pub use sequence::{SequenceEntry, Ways, sequence, sequence_entries};
pub use strategies::{Fibonacci, Memoized, Recursive, Strategy, WayCounter};
pub use verify::{GridSpec, Mismatch, MonotonicityViolation, VerificationReport, verify_grid};
pub use window::SlidingWindow;

/// Number of ways to climb `stair_count` stairs taking `1..=max_step` at a time.
///
/// Heights 0 and 1 return themselves; a `max_step` of 1 yields 1 for every
/// taller staircase.
///
/// # Errors
///
/// Returns `InvalidArgument` when `stair_count < 0` or `max_step <= 0`.
pub fn count_ways(stair_count: i64, max_step: i64) -> DomainResult<BigUint> {
    Strategy::Fibonacci.evaluate(stair_count, max_step)
}

/// [`count_ways`] by plain recursion. Exponential time.
///
/// # Errors
///
/// Same as [`count_ways`].
pub fn count_ways_recursive(stair_count: i64, max_step: i64) -> DomainResult<BigUint> {
    Strategy::Recursive.evaluate(stair_count, max_step)
}

/// [`count_ways`] by recursion with a per-call cache.
///
/// # Errors
///
/// Same as [`count_ways`].
pub fn count_ways_memoized(stair_count: i64, max_step: i64) -> DomainResult<BigUint> {
    Strategy::Memoized.evaluate(stair_count, max_step)
}

/// A single count together with the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountReport {
    pub stairs: StairCount,
    pub max_step: MaxStep,
    pub strategy: Strategy,
    pub ways: WayCount,
}

/// Validates raw input, applies `limits`, then counts with `strategy`.
///
/// # Errors
///
/// Returns a domain error for invalid arguments and an application error when
/// the stair count is above the strategy's limit.
pub fn count_checked(strategy: Strategy, stair_count: i64, max_step: i64, limits: &Limits) -> Result<CountReport> {
    let stairs = StairCount::try_from(stair_count).context("STAIRS")?;
    let max_step = MaxStep::try_from(max_step).context("MAX_STEP")?;
    limits.check(strategy, stairs, max_step)?;
    let ways = strategy.count(stairs, max_step);
    Ok(CountReport { stairs, max_step, strategy, ways })
}
