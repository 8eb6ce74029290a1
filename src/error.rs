//! Typed failures for cost evaluation and solving.
//!
//! Infeasibility and invalid allocations are reported as catchable,
//! structured errors — never as sentinel values or message strings.
//! Instance construction errors live in [`crate::validation`].

use thiserror::Error;

/// An allocation that violates the instance's invariants.
///
/// Raised by the cost evaluator, which is the single scoring authority;
/// propagating it keeps the solvers and the enumerator self-checking.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocationError {
    /// The allocation covers a different number of days than the instance.
    #[error("allocation covers {actual} days but the instance has {expected}")]
    LengthMismatch {
        /// Days in the instance.
        expected: usize,
        /// Days in the allocation.
        actual: usize,
    },

    /// The allocation does not transport exactly the whole population.
    #[error("allocation transports {actual} people but the population is {expected}")]
    SumMismatch {
        /// The instance's population.
        expected: u32,
        /// Total people transported by the allocation.
        actual: u64,
    },

    /// A day transports more people than it has seats.
    #[error("day {day} transports {flown} people but only has {capacity} seats")]
    CapacityExceeded {
        /// Offending day index.
        day: usize,
        /// People the allocation puts on that day.
        flown: u32,
        /// Seats available on that day.
        capacity: u32,
    },
}

/// A solver failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// Not enough seats remain to relocate everyone.
    ///
    /// `demand` people still need seats, but only `available` remain on
    /// the days that could serve them: the whole horizon for the upfront
    /// feasibility check, or just the final day when the online policy
    /// must force the remainder onto it.
    #[error("infeasible: {demand} people left but only {available} seats available")]
    Infeasible {
        /// People still needing transport.
        demand: u32,
        /// Seats available to them.
        available: u64,
    },

    /// A solver produced an allocation the cost evaluator rejected.
    #[error("invalid allocation: {0}")]
    InvalidAllocation(#[from] AllocationError),
}

/// Result type alias for solver operations.
pub type SolveResult<T> = std::result::Result<T, SolveError>;
