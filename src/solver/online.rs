//! Myopic online solver.
//!
//! # Algorithm
//!
//! Days are visited strictly in chronological order and every decision is
//! irrevocable. On each day before the last, the policy compares only
//! that day's two prices: if flying is no dearer than one more night's
//! holding (`transport_price[d] <= holding_price[d]`), it fills the day's
//! seats with as many of the remaining people as fit; otherwise everyone
//! waits. On the last day the whole remainder is forced onto the plane.
//!
//! The one-step comparison is the policy — it never looks ahead, which
//! is exactly what makes it analyzable against the offline optimum as a
//! competitive algorithm. It is provably suboptimal in general.
//!
//! # Reference
//! Borodin & El-Yaniv (1998), "Online Computation and Competitive Analysis", Ch. 1

use crate::error::{SolveError, SolveResult};
use crate::models::{Allocation, Instance, Solution};
use crate::solver::evaluate_cost;

/// Computes an allocation day-by-day using only each day's own prices.
///
/// # Errors
/// [`SolveError::Infeasible`] when the horizon's total capacity is below
/// the population, or when the policy's forced last-day remainder does
/// not fit the last day's seats.
pub fn solve_online(instance: &Instance) -> SolveResult<Solution> {
    if !instance.is_feasible() {
        return Err(SolveError::Infeasible {
            demand: instance.population(),
            available: instance.total_capacity(),
        });
    }

    let last = instance.days() - 1;
    let mut flown = vec![0_u32; instance.days()];
    let mut remaining = instance.population();

    for day in 0..last {
        if instance.transport_price()[day] <= instance.holding_price()[day] {
            let boarding = remaining.min(instance.capacity()[day]);
            flown[day] = boarding;
            remaining -= boarding;
        }
    }

    if remaining > instance.capacity()[last] {
        return Err(SolveError::Infeasible {
            demand: remaining,
            available: u64::from(instance.capacity()[last]),
        });
    }
    flown[last] = remaining;

    let allocation = Allocation::new(flown);
    let cost = evaluate_cost(instance, &allocation)?;
    Ok(Solution { allocation, cost })
}
