// crates/core/src/window.rs
use std::collections::VecDeque;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Bounded run of the most recent recurrence terms, oldest first.
///
/// Every new term is the sum of the terms currently held. A running total is
/// kept alongside the buffer so advancing costs one addition and at most one
/// subtraction instead of re-summing up to `capacity` big integers.
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    terms: VecDeque<BigUint>,
    capacity: usize,
    total: BigUint,
}

impl SlidingWindow {
    /// Largest buffer allocated up front; the deque grows past it on demand.
    const PREALLOC_LIMIT: usize = 1024;

    /// Creates the window seeded with the terms `[0, 1]`.
    ///
    /// `capacity` is the widest window the recurrence will ever need. It is
    /// clamped to `usize::MAX` on narrow targets; a window can never hold more
    /// terms than the loop produces anyway. Capacities below 2 are raised to 2;
    /// single-step staircases never reach the window.
    pub fn seeded(capacity: u64) -> Self {
        let capacity = usize::try_from(capacity).unwrap_or(usize::MAX).max(2);
        let mut terms = VecDeque::with_capacity(capacity.min(Self::PREALLOC_LIMIT).saturating_add(1));
        terms.push_back(BigUint::zero());
        terms.push_back(BigUint::one());
        Self { terms, capacity, total: BigUint::one() }
    }

    /// Appends the next term (the sum of the window), evicting the oldest term
    /// once the window is wider than its capacity. Returns the new term.
    pub fn advance(&mut self) -> &BigUint {
        let next = self.total.clone();
        self.total += &next;
        self.terms.push_back(next);
        if self.terms.len() > self.capacity {
            if let Some(oldest) = self.terms.pop_front() {
                self.total -= oldest;
            }
        }
        self.latest()
    }

    /// Most recently appended term.
    pub fn latest(&self) -> &BigUint {
        // Never empty: seeded with two terms and eviction only happens after a push.
        self.terms.back().unwrap_or_else(|| unreachable!("window is never empty"))
    }

    pub(crate) fn len(&self) -> usize {
        self.terms.len()
    }

    /// Sum of the held terms, i.e. the value the next `advance` will append.
    pub const fn total(&self) -> &BigUint {
        &self.total
    }

    pub fn terms(&self) -> impl Iterator<Item = &BigUint> {
        self.terms.iter()
    }
}
