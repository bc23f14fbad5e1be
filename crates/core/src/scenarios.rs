// crates/core/src/scenarios.rs
//! Canonical staircases with known answers.

use std::num::NonZeroU64;

use serde::Serialize;
use stair_ways_shared_kernel::{MaxStep, StairCount, WayCount};

use crate::{limits::Limits, strategies::Strategy};

/// A staircase with a known number of ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub index: usize,
    pub stairs: StairCount,
    pub max_step: MaxStep,
    pub expected: u64,
}

const fn scenario(index: usize, stairs: u64, max_step: u64, expected: u64) -> Scenario {
    let max_step = match NonZeroU64::new(max_step) {
        Some(step) => MaxStep::from_nonzero(step),
        None => panic!("scenario max_step must be non-zero"),
    };
    Scenario { index, stairs: StairCount::new(stairs), max_step, expected }
}

pub const SCENARIOS: [Scenario; 7] = [
    scenario(0, 0, 2, 0),
    scenario(1, 1, 2, 1),
    scenario(2, 2, 2, 2),
    scenario(3, 7, 2, 21),
    scenario(4, 40, 1, 1),
    scenario(5, 16, 7, 31_489),
    scenario(6, 30, 30, 536_870_912),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Verdict {
    Passed,
    Failed { actual: WayCount },
    Skipped { limit: u64 },
}

/// Result of one scenario under one strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioOutcome {
    pub index: usize,
    pub stairs: StairCount,
    pub max_step: MaxStep,
    pub expected: WayCount,
    pub strategy: Strategy,
    #[serde(flatten)]
    pub verdict: Verdict,
}

impl ScenarioOutcome {
    pub const fn is_failure(&self) -> bool {
        matches!(self.verdict, Verdict::Failed { .. })
    }
}

impl Scenario {
    pub fn run(&self, strategy: Strategy, limits: &Limits) -> ScenarioOutcome {
        let verdict = if limits.admits(strategy, self.stairs, self.max_step) {
            let actual = strategy.count(self.stairs, self.max_step);
            if actual == self.expected {
                Verdict::Passed
            } else {
                Verdict::Failed { actual }
            }
        } else {
            Verdict::Skipped { limit: limits.limit_for(strategy, self.max_step) }
        };

        ScenarioOutcome {
            index: self.index,
            stairs: self.stairs,
            max_step: self.max_step,
            expected: WayCount::from(self.expected),
            strategy,
            verdict,
        }
    }
}

/// Runs every scenario with every strategy, scenario-major.
pub fn run_scenarios(limits: &Limits) -> Vec<ScenarioOutcome> {
    let outcomes: Vec<_> = SCENARIOS
        .iter()
        .flat_map(|scenario| Strategy::ALL.into_iter().map(move |strategy| scenario.run(strategy, limits)))
        .collect();

    let failed = outcomes.iter().filter(|o| o.is_failure()).count();
    tracing::info!(total = outcomes.len(), failed, "example scenarios evaluated");
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_sequential() {
        for (position, scenario) in SCENARIOS.iter().enumerate() {
            assert_eq!(scenario.index, position);
        }
    }

    #[test]
    fn default_limits_skip_only_the_widest_recursion() {
        let outcomes = run_scenarios(&Limits::default());
        assert_eq!(outcomes.len(), SCENARIOS.len() * Strategy::ALL.len());
        assert!(outcomes.iter().all(|o| !o.is_failure()));

        let skipped: Vec<_> = outcomes
            .iter()
            .filter(|o| matches!(o.verdict, Verdict::Skipped { .. }))
            .map(|o| (o.index, o.strategy))
            .collect();
        assert_eq!(skipped, vec![(6, Strategy::Recursive)]);
    }

    #[test]
    fn single_step_scenario_runs_recursively() {
        let outcome = SCENARIOS[4].run(Strategy::Recursive, &Limits::default());
        assert_eq!(outcome.verdict, Verdict::Passed);
    }

    #[test]
    fn outcome_serializes_flat() {
        let outcome = SCENARIOS[3].run(Strategy::Fibonacci, &Limits::default());
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "passed");
        assert_eq!(json["expected"], "21");
        assert_eq!(json["strategy"], "fibonacci");
    }
}
