// crates/core/src/limits.rs
use serde::{Deserialize, Serialize};
use stair_ways_shared_kernel::{ApplicationError, ApplicationResult, MaxStep, StairCount};

use crate::strategies::Strategy;

/// Upper bounds on the stair count each strategy is asked to evaluate.
///
/// The counting functions themselves accept any height; these bounds are
/// applied by callers that take heights from untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    /// Applies to every strategy.
    pub max_stairs: u64,
    /// Exponential time: keep small. Applies when more than one move size is usable.
    pub recursive_max_stairs: u64,
    /// Recursion depth equals the stair count.
    pub memoized_max_stairs: u64,
}

impl Limits {
    pub const DEFAULT_MAX_STAIRS: u64 = 100_000;
    pub const DEFAULT_RECURSIVE_MAX_STAIRS: u64 = 25;
    pub const DEFAULT_MEMOIZED_MAX_STAIRS: u64 = 5_000;

    /// No bounds at all. Intended for tests.
    pub const fn unbounded() -> Self {
        Self {
            max_stairs: u64::MAX,
            recursive_max_stairs: u64::MAX,
            memoized_max_stairs: u64::MAX,
        }
    }

    /// Effective bound for `strategy` at `max_step`, never above `max_stairs`.
    ///
    /// With `max_step == 1` plain recursion is a single chain of calls, as
    /// deep as the memoized form and no slower, so it gets the larger of the
    /// two recursive bounds.
    pub const fn limit_for(&self, strategy: Strategy, max_step: MaxStep) -> u64 {
        let own = match strategy {
            Strategy::Fibonacci => self.max_stairs,
            Strategy::Recursive if max_step.is_single() => {
                if self.recursive_max_stairs > self.memoized_max_stairs {
                    self.recursive_max_stairs
                } else {
                    self.memoized_max_stairs
                }
            }
            Strategy::Recursive => self.recursive_max_stairs,
            Strategy::Memoized => self.memoized_max_stairs,
        };
        if own < self.max_stairs { own } else { self.max_stairs }
    }

    pub const fn admits(&self, strategy: Strategy, stairs: StairCount, max_step: MaxStep) -> bool {
        stairs.value() <= self.limit_for(strategy, max_step)
    }

    /// # Errors
    ///
    /// Returns [`ApplicationError::LimitExceeded`] when `stairs` is above the
    /// bound for `strategy` at `max_step`.
    pub fn check(&self, strategy: Strategy, stairs: StairCount, max_step: MaxStep) -> ApplicationResult<()> {
        if self.admits(strategy, stairs, max_step) {
            Ok(())
        } else {
            Err(ApplicationError::LimitExceeded {
                strategy: strategy.to_string(),
                stair_count: stairs.value(),
                limit: self.limit_for(strategy, max_step),
            })
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_stairs: Self::DEFAULT_MAX_STAIRS,
            recursive_max_stairs: Self::DEFAULT_RECURSIVE_MAX_STAIRS,
            memoized_max_stairs: Self::DEFAULT_MEMOIZED_MAX_STAIRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(m: u64) -> MaxStep {
        MaxStep::new(m).unwrap()
    }

    #[test]
    fn global_bound_caps_strategy_bounds() {
        let limits = Limits { max_stairs: 10, recursive_max_stairs: 50, memoized_max_stairs: 5 };
        assert_eq!(limits.limit_for(Strategy::Recursive, step(2)), 10);
        assert_eq!(limits.limit_for(Strategy::Recursive, MaxStep::ONE), 10);
        assert_eq!(limits.limit_for(Strategy::Memoized, step(2)), 5);
        assert_eq!(limits.limit_for(Strategy::Fibonacci, step(2)), 10);
    }

    #[test]
    fn single_step_recursion_is_bounded_by_depth() {
        let limits = Limits::default();
        assert_eq!(limits.limit_for(Strategy::Recursive, MaxStep::ONE), Limits::DEFAULT_MEMOIZED_MAX_STAIRS);
        assert!(limits.admits(Strategy::Recursive, StairCount::new(40), MaxStep::ONE));
        assert!(!limits.admits(Strategy::Recursive, StairCount::new(40), step(2)));
        assert!(!limits.admits(Strategy::Recursive, StairCount::new(30), step(30)));

        let wide = Limits { recursive_max_stairs: 9_000, ..Limits::default() };
        assert_eq!(wide.limit_for(Strategy::Recursive, MaxStep::ONE), 9_000);
    }

    #[test]
    fn check_reports_the_effective_limit() {
        let err = Limits::default().check(Strategy::Recursive, StairCount::new(30), step(30)).unwrap_err();
        match err {
            ApplicationError::LimitExceeded { strategy, stair_count, limit } => {
                assert_eq!(strategy, "recursive");
                assert_eq!(stair_count, 30);
                assert_eq!(limit, Limits::DEFAULT_RECURSIVE_MAX_STAIRS);
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let limits: Limits = serde_json::from_str(r#"{"recursive_max_stairs": 12}"#).unwrap();
        assert_eq!(limits.recursive_max_stairs, 12);
        assert_eq!(limits.max_stairs, Limits::DEFAULT_MAX_STAIRS);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<Limits, _> = serde_json::from_str(r#"{"max_stair": 12}"#);
        assert!(result.is_err());
    }
}
