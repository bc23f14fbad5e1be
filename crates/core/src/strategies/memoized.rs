// crates/core/src/strategies/memoized.rs
use hashbrown::HashMap;
use num_bigint::BigUint;
use num_traits::One;
use stair_ways_shared_kernel::{MaxStep, StairCount, WayCount};

use super::{WayCounter, seed_count};

/// Top-down counter caching every visited height.
///
/// O(n·m) additions, O(n) cache entries, recursion depth O(n). The cache
/// lives for one `count` call only.
#[derive(Debug, Clone, Copy, Default)]
pub struct Memoized;

impl WayCounter for Memoized {
    fn name(&self) -> &'static str {
        "memoized"
    }

    fn count(&self, stairs: StairCount, max_step: MaxStep) -> WayCount {
        if let Some(seed) = seed_count(stairs) {
            return seed;
        }
        let mut memo = Memo::new(max_step.get());
        let ways = memo.ways(stairs.value());
        tracing::trace!(%stairs, %max_step, cached = memo.cache.len(), "memo filled");
        WayCount::new(ways)
    }
}

struct Memo {
    max_step: u64,
    cache: HashMap<u64, BigUint>,
}

impl Memo {
    fn new(max_step: u64) -> Self {
        Self { max_step, cache: HashMap::new() }
    }

    fn ways(&mut self, remaining: u64) -> BigUint {
        if remaining == 0 {
            return BigUint::one();
        }
        if let Some(hit) = self.cache.get(&remaining) {
            return hit.clone();
        }

        let mut total = BigUint::default();
        for step in 1..=self.max_step.min(remaining) {
            total += self.ways(remaining - step);
        }
        self.cache.insert(remaining, total.clone());
        total
    }
}
