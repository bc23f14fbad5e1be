// crates/core/src/verify.rs
//! Differential check of the counting strategies over a grid of inputs.

use std::num::NonZeroU64;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use stair_ways_shared_kernel::{ApplicationResult, MaxStep, StairCount, WayCount};

use crate::{limits::Limits, strategies::Strategy};

/// Inclusive grid bounds: heights `0..=max_stairs`, widths `1..=max_step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub max_stairs: StairCount,
    pub max_step: MaxStep,
}

impl GridSpec {
    pub const DEFAULT_MAX_STAIRS: StairCount = StairCount::new(20);
    pub const DEFAULT_MAX_STEP: MaxStep = match NonZeroU64::new(8) {
        Some(step) => MaxStep::from_nonzero(step),
        None => panic!("default max_step must be non-zero"),
    };

    /// Widths actually evaluated for `stairs`. Every strategy computes a width
    /// above `stairs + 2` exactly as it computes `stairs + 2`.
    fn widths_for(&self, stairs: StairCount) -> u64 {
        self.max_step.get().min(stairs.value().saturating_add(2))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyResult {
    pub strategy: Strategy,
    pub ways: WayCount,
}

/// Strategies disagreeing on one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub stairs: StairCount,
    pub max_step: MaxStep,
    pub results: Vec<StrategyResult>,
}

/// A wider step bound produced fewer ways than a narrower one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonotonicityViolation {
    pub stairs: StairCount,
    pub max_step: MaxStep,
    pub previous: WayCount,
    pub current: WayCount,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    /// Grid cells evaluated by at least one strategy.
    pub cells: usize,
    /// Cells where two or more strategies were compared.
    pub compared: usize,
    /// Strategy evaluations left out because of [`Limits`].
    pub skipped: usize,
    /// Grid cells not evaluated because their width is past `stairs + 2` and
    /// so repeats the widest evaluated cell of the row.
    pub saturated: u64,
    pub mismatches: Vec<Mismatch>,
    pub violations: Vec<MonotonicityViolation>,
}

impl VerificationReport {
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty() && self.violations.is_empty()
    }

    fn merge(&mut self, other: Self) {
        self.cells += other.cells;
        self.compared += other.compared;
        self.skipped += other.skipped;
        self.saturated = self.saturated.saturating_add(other.saturated);
        self.mismatches.extend(other.mismatches);
        self.violations.extend(other.violations);
    }
}

/// Compares every admitted strategy on every grid cell and checks that counts
/// never decrease as `max_step` widens.
///
/// # Errors
///
/// Returns [`stair_ways_shared_kernel::ApplicationError::LimitExceeded`] when
/// `grid.max_stairs` is above `limits.max_stairs`. Nothing is evaluated then.
pub fn verify_grid(grid: &GridSpec, limits: &Limits) -> ApplicationResult<VerificationReport> {
    limits.check(Strategy::Fibonacci, grid.max_stairs, grid.max_step)?;
    let heights = 0..=grid.max_stairs.value();

    #[cfg(feature = "parallel")]
    let report = heights
        .into_par_iter()
        .map(|n| verify_row(grid, StairCount::new(n), limits))
        .reduce(VerificationReport::default, merged);
    #[cfg(not(feature = "parallel"))]
    let report = heights
        .map(|n| verify_row(grid, StairCount::new(n), limits))
        .fold(VerificationReport::default(), merged);

    tracing::info!(
        cells = report.cells,
        compared = report.compared,
        skipped = report.skipped,
        saturated = report.saturated,
        mismatches = report.mismatches.len(),
        violations = report.violations.len(),
        "grid verification finished"
    );
    Ok(report)
}

fn merged(mut acc: VerificationReport, row: VerificationReport) -> VerificationReport {
    acc.merge(row);
    acc
}

fn verify_row(grid: &GridSpec, stairs: StairCount, limits: &Limits) -> VerificationReport {
    let widths = grid.widths_for(stairs);
    let mut report = VerificationReport { saturated: grid.max_step.get() - widths, ..VerificationReport::default() };
    let mut previous: Option<WayCount> = None;

    for width in 1..=widths {
        let Ok(max_step) = MaxStep::new(width) else { continue };

        let mut results = Vec::with_capacity(Strategy::ALL.len());
        for strategy in Strategy::ALL {
            if limits.admits(strategy, stairs, max_step) {
                results.push(StrategyResult { strategy, ways: strategy.count(stairs, max_step) });
            } else {
                report.skipped += 1;
            }
        }
        let Some(first) = results.first().map(|r| r.ways.clone()) else { continue };

        report.cells += 1;
        if results.len() > 1 {
            report.compared += 1;
        }
        if results.iter().any(|r| r.ways != first) {
            tracing::warn!(input = %stairs.describe(max_step), "strategies disagree");
            report.mismatches.push(Mismatch { stairs, max_step, results });
        }

        if stairs.value() >= 2 {
            if let Some(prev) = previous.as_ref().filter(|prev| first < **prev) {
                report.violations.push(MonotonicityViolation {
                    stairs,
                    max_step,
                    previous: prev.clone(),
                    current: first.clone(),
                });
            }
        }
        previous = Some(first);
    }
    report
}
