// crates/core/src/strategies/fibonacci.rs
use stair_ways_shared_kernel::{MaxStep, StairCount, WayCount};

use super::{WayCounter, seed_count};
use crate::window::SlidingWindow;

/// Iterative counter: each term is the sum of the previous `max_step` terms,
/// the m-wide generalisation of the Fibonacci recurrence.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fibonacci;

impl WayCounter for Fibonacci {
    fn name(&self) -> &'static str {
        "fibonacci"
    }

    fn count(&self, stairs: StairCount, max_step: MaxStep) -> WayCount {
        if let Some(seed) = seed_count(stairs) {
            return seed;
        }
        // Only one move size, so only one way up.
        if max_step.is_single() {
            return WayCount::one();
        }

        // The window never grows past `stairs + 2` terms, so a wider capacity is moot.
        let capacity = max_step.get().min(stairs.value().saturating_add(2));
        let mut window = SlidingWindow::seeded(capacity);
        for _ in 0..stairs.value() {
            window.advance();
        }
        tracing::trace!(%stairs, %max_step, width = window.len(), "window settled");
        WayCount::new(window.latest().clone())
    }
}
