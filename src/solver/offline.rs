//! Exact offline solver.
//!
//! # Algorithm
//!
//! The cost model decomposes per person: someone leaving on day `d` pays
//! the holding prices of every day before `d` plus day `d`'s transport
//! price, independently of who else travels. Minimizing total cost
//! therefore reduces to a scalar per day:
//!
//! 1. Compute `leave_cost[d] = holding_price[0] + .. + holding_price[d-1]
//!    + transport_price[d]` via one prefix-sum pass.
//! 2. Sort days ascending by leave cost.
//! 3. Fill the cheapest days to capacity until everyone is assigned.
//!
//! Any allocation sending a person on a dearer day while a cheaper day
//! has spare seats improves by moving that person, so the greedy result
//! is optimal. Ties in leave cost are broken by day index (stable sort);
//! the choice never affects the total cost.
//!
//! # Complexity
//! O(m log m) for m days.
//!
//! # Reference
//! Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4: exchange arguments

use crate::error::{SolveError, SolveResult};
use crate::models::{Allocation, Instance, Solution};
use crate::solver::evaluate_cost;

/// Computes a cost-minimal allocation with full knowledge of all days.
///
/// # Example
///
/// ```
/// use evac_schedule::models::Instance;
/// use evac_schedule::solver::solve_offline;
///
/// let instance = Instance::new(
///     100,
///     vec![50, 30, 40],
///     vec![10.0, 10.0, 10.0],
///     vec![15.0, 15.0, 15.0],
/// )
/// .unwrap();
///
/// let solution = solve_offline(&instance).unwrap();
/// assert_eq!(solution.allocation.total_flown(), 100);
/// ```
///
/// # Errors
/// [`SolveError::Infeasible`] when the horizon's total capacity is below
/// the population. The check runs before any allocation work.
pub fn solve_offline(instance: &Instance) -> SolveResult<Solution> {
    if !instance.is_feasible() {
        return Err(SolveError::Infeasible {
            demand: instance.population(),
            available: instance.total_capacity(),
        });
    }

    let days = instance.days();

    // leave_cost[d] = holding paid while waiting for day d, plus the fare.
    let mut leave_cost = Vec::with_capacity(days);
    let mut held_so_far = 0.0;
    for day in 0..days {
        leave_cost.push(held_so_far + instance.transport_price()[day]);
        held_so_far += instance.holding_price()[day];
    }

    let mut order: Vec<usize> = (0..days).collect();
    order.sort_by(|&a, &b| leave_cost[a].total_cmp(&leave_cost[b]));

    let mut flown = vec![0_u32; days];
    let mut remaining = instance.population();
    for &day in &order {
        if remaining == 0 {
            break;
        }
        let boarding = remaining.min(instance.capacity()[day]);
        flown[day] = boarding;
        remaining -= boarding;
    }

    let allocation = Allocation::new(flown);
    let cost = evaluate_cost(instance, &allocation)?;
    Ok(Solution { allocation, cost })
}
