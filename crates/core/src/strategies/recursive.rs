// crates/core/src/strategies/recursive.rs
use num_bigint::BigUint;
use num_traits::One;
use stair_ways_shared_kernel::{MaxStep, StairCount, WayCount};

use super::{WayCounter, seed_count};

/// Brute-force top-down counter.
///
/// Every way is enumerated once, so running time is proportional to the
/// answer itself. Recursion depth is `stairs`. Reference use only; callers
/// bound `stairs` through [`crate::Limits`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Recursive;

impl WayCounter for Recursive {
    fn name(&self) -> &'static str {
        "recursive"
    }

    fn count(&self, stairs: StairCount, max_step: MaxStep) -> WayCount {
        if let Some(seed) = seed_count(stairs) {
            return seed;
        }
        WayCount::new(ways(stairs.value(), max_step.get()))
    }
}

fn ways(remaining: u64, max_step: u64) -> BigUint {
    if remaining == 0 {
        return BigUint::one();
    }
    // Moves past the top are never generated, so no negative base case is needed.
    (1..=max_step.min(remaining)).map(|step| ways(remaining - step, max_step)).sum()
}
