// crates/core/src/sequence.rs
use serde::Serialize;
use stair_ways_shared_kernel::{MaxStep, StairCount, WayCount};

use crate::window::SlidingWindow;

/// Yields the way counts for heights `0, 1, 2, …` with a fixed `max_step`.
///
/// One window is shared across all heights, so listing the first `n` counts
/// costs the same as computing the `n`-th alone.
#[derive(Debug, Clone)]
pub struct Ways {
    max_step: MaxStep,
    next_height: Option<u64>,
    window: Option<SlidingWindow>,
}

impl Ways {
    pub fn new(max_step: MaxStep) -> Self {
        Self { max_step, next_height: Some(0), window: None }
    }

    fn count_at(&mut self, height: u64) -> WayCount {
        if height <= 1 {
            return WayCount::from(height);
        }
        if self.max_step.is_single() {
            return WayCount::one();
        }
        let max_step = self.max_step.get();
        let window = self.window.get_or_insert_with(|| SlidingWindow::seeded(max_step));
        // Height 2 needs two fresh terms; every later height needs one.
        if height == 2 {
            window.advance();
        }
        WayCount::new(window.advance().clone())
    }
}

impl Iterator for Ways {
    type Item = (StairCount, WayCount);

    fn next(&mut self) -> Option<Self::Item> {
        let height = self.next_height?;
        self.next_height = height.checked_add(1);
        Some((StairCount::new(height), self.count_at(height)))
    }
}

/// One row of a sequence listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceEntry {
    pub stairs: StairCount,
    pub max_step: MaxStep,
    pub ways: WayCount,
}

/// Rows for every height from 0 through `up_to` inclusive, produced lazily.
pub fn sequence_entries(up_to: StairCount, max_step: MaxStep) -> impl Iterator<Item = SequenceEntry> {
    let len = usize::try_from(up_to.value()).map_or(usize::MAX, |n| n.saturating_add(1));
    Ways::new(max_step).take(len).map(move |(stairs, ways)| SequenceEntry { stairs, max_step, ways })
}

/// Collected form of [`sequence_entries`].
pub fn sequence(up_to: StairCount, max_step: MaxStep) -> Vec<SequenceEntry> {
    sequence_entries(up_to, max_step).collect()
}
