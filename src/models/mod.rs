//! Evacuation domain models.
//!
//! Provides the core data types: the immutable problem description
//! ([`Instance`]), the per-day transport decision vector ([`Allocation`]),
//! and a solver result pairing an allocation with its cost ([`Solution`]).

mod allocation;
mod instance;

pub use allocation::Allocation;
pub use instance::Instance;

use serde::{Deserialize, Serialize};

/// A solver result: an allocation together with its total cost.
///
/// Produced fresh by every solver call and owned by the caller. The cost
/// is always the one computed by
/// [`evaluate_cost`](crate::solver::evaluate_cost) for the allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// People transported per day.
    pub allocation: Allocation,
    /// Total cost of the allocation.
    pub cost: f64,
}
