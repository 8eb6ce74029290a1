//! Allocation (decision) model.
//!
//! An allocation records how many people travel on each day. It is the
//! output of every solver and the unit the exhaustive enumerator yields.
//! The sum and per-day capacity invariants are enforced by the cost
//! evaluator rather than by this type, so partial or deliberately broken
//! allocations can still be represented and rejected with a typed error.

use serde::{Deserialize, Serialize};

/// People transported per day.
///
/// For a valid allocation against an instance, `flown` sums to the
/// population and stays within each day's capacity; the derived
/// remaining-profile then never goes negative.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Allocation {
    /// People transported on each day.
    pub flown: Vec<u32>,
}

impl Allocation {
    /// Creates an allocation from per-day counts.
    pub fn new(flown: Vec<u32>) -> Self {
        Self { flown }
    }

    /// The all-zero allocation over `days` days.
    pub fn zeros(days: usize) -> Self {
        Self {
            flown: vec![0; days],
        }
    }

    /// Number of days this allocation covers.
    #[inline]
    pub fn days(&self) -> usize {
        self.flown.len()
    }

    /// Total people transported across all days.
    pub fn total_flown(&self) -> u64 {
        self.flown.iter().map(|&f| u64::from(f)).sum()
    }

    /// People still waiting at the end of each day, for the given
    /// starting population.
    ///
    /// Entry `d` is `population - flown[0..=d]`, the head count the
    /// holding price is charged on. Counts saturate at zero so the
    /// profile is well-defined even for an over-full allocation (which
    /// the cost evaluator rejects separately).
    pub fn remaining(&self, population: u32) -> Vec<u32> {
        let mut waiting = population;
        self.flown
            .iter()
            .map(|&f| {
                waiting = waiting.saturating_sub(f);
                waiting
            })
            .collect()
    }
}
