//! Allocation cost evaluation.
//!
//! The single source of truth for scoring: every solver and the
//! exhaustive enumerator's oracle price allocations through
//! [`evaluate_cost`], never through a private re-derivation.

use crate::error::AllocationError;
use crate::models::{Allocation, Instance};

/// Checks an allocation against the instance's invariants.
///
/// # Errors
/// - [`AllocationError::LengthMismatch`] if the day counts differ
/// - [`AllocationError::CapacityExceeded`] if any day is over-booked
/// - [`AllocationError::SumMismatch`] if the totals transported differ
///   from the population
pub fn validate_allocation(
    instance: &Instance,
    allocation: &Allocation,
) -> Result<(), AllocationError> {
    if allocation.days() != instance.days() {
        return Err(AllocationError::LengthMismatch {
            expected: instance.days(),
            actual: allocation.days(),
        });
    }

    for (day, (&flown, &capacity)) in allocation
        .flown
        .iter()
        .zip(instance.capacity())
        .enumerate()
    {
        if flown > capacity {
            return Err(AllocationError::CapacityExceeded {
                day,
                flown,
                capacity,
            });
        }
    }

    let total = allocation.total_flown();
    if total != u64::from(instance.population()) {
        return Err(AllocationError::SumMismatch {
            expected: instance.population(),
            actual: total,
        });
    }

    Ok(())
}

/// Computes the total cost of a valid allocation.
///
/// Day `d` charges `flown[d] * transport_price[d]` for the travelers plus
/// `holding_price[d]` for every person still waiting after day `d`'s
/// flights are resolved.
///
/// # Example
///
/// ```
/// use evac_schedule::models::{Allocation, Instance};
/// use evac_schedule::solver::evaluate_cost;
///
/// let instance = Instance::new(
///     10,
///     vec![5, 5, 5],
///     vec![10.0, 10.0, 10.0],
///     vec![15.0, 15.0, 15.0],
/// )
/// .unwrap();
///
/// // Day 0: 5 fly (50) + 5 wait (75); day 1: 5 fly (50).
/// let cost = evaluate_cost(&instance, &Allocation::new(vec![5, 5, 0])).unwrap();
/// assert_eq!(cost, 175.0);
/// ```
///
/// # Errors
/// Rejects allocations violating the sum or capacity invariants; see
/// [`validate_allocation`].
pub fn evaluate_cost(
    instance: &Instance,
    allocation: &Allocation,
) -> Result<f64, AllocationError> {
    validate_allocation(instance, allocation)?;

    let mut waiting = instance.population();
    let mut total = 0.0;
    for (day, &flown) in allocation.flown.iter().enumerate() {
        // Validation guarantees the cumulative flown never exceeds the
        // population, so this cannot underflow.
        waiting -= flown;
        total += f64::from(flown) * instance.transport_price()[day]
            + f64::from(waiting) * instance.holding_price()[day];
    }
    Ok(total)
}
