//! Exhaustive enumeration of feasible allocations.
//!
//! A brute-force oracle for validating the solvers on small instances:
//! it yields every allocation satisfying the sum and per-day capacity
//! constraints. The search space is combinatorial, so this is a testing
//! tool, not a production solver — a few tens of people and days is the
//! practical limit.
//!
//! # Algorithm
//!
//! An explicit FIFO worklist of partial allocations, expanded day by
//! day. A popped partial with `unassigned` people left is abandoned when
//! the capacity of its unvisited days cannot cover them (checked against
//! precomputed suffix sums, before any expansion). On the last day the
//! whole remainder is forced, completing the allocation. Traversal order
//! is an implementation detail; callers must not rely on it.
//!
//! The sequence is lazy: each `next()` does a bounded amount of work, so
//! a caller can cap consumption without materializing the whole space.

use std::collections::VecDeque;

use crate::error::AllocationError;
use crate::models::{Allocation, Instance, Solution};
use crate::solver::evaluate_cost;

/// A day-by-day partial allocation awaiting expansion.
struct PartialAllocation {
    /// Next day to decide.
    day: usize,
    /// People already assigned to days before `day`.
    assigned: u32,
    /// Per-day counts; entries from `day` onward are still zero.
    flown: Vec<u32>,
}

/// Lazy, finite, non-restartable sequence of every feasible allocation.
///
/// Created by [`enumerate_allocations`]. An infeasible instance yields
/// an empty sequence.
pub struct AllocationEnumerator<'a> {
    instance: &'a Instance,
    /// `suffix_capacity[d]` = seats available on days `d..`.
    suffix_capacity: Vec<u64>,
    queue: VecDeque<PartialAllocation>,
}

/// Enumerates every allocation satisfying the sum and capacity
/// constraints of `instance`.
///
/// # Example
///
/// ```
/// use evac_schedule::enumeration::enumerate_allocations;
/// use evac_schedule::models::Instance;
///
/// let instance = Instance::new(5, vec![3, 3, 3], vec![1.0; 3], vec![1.0; 3]).unwrap();
/// assert_eq!(enumerate_allocations(&instance).count(), 12);
/// ```
pub fn enumerate_allocations(instance: &Instance) -> AllocationEnumerator<'_> {
    let days = instance.days();

    let mut suffix_capacity = vec![0_u64; days];
    let mut total = 0_u64;
    for day in (0..days).rev() {
        total += u64::from(instance.capacity()[day]);
        suffix_capacity[day] = total;
    }

    let mut queue = VecDeque::new();
    queue.push_back(PartialAllocation {
        day: 0,
        assigned: 0,
        flown: vec![0; days],
    });

    AllocationEnumerator {
        instance,
        suffix_capacity,
        queue,
    }
}

impl Iterator for AllocationEnumerator<'_> {
    type Item = Allocation;

    fn next(&mut self) -> Option<Allocation> {
        let last = self.instance.days() - 1;

        while let Some(partial) = self.queue.pop_front() {
            let day = partial.day;
            let unassigned = self.instance.population() - partial.assigned;

            // Abandon paths that can no longer seat everyone.
            if u64::from(unassigned) > self.suffix_capacity[day] {
                continue;
            }

            if day == last {
                // The pruning check above guarantees the remainder fits.
                let mut flown = partial.flown;
                flown[last] = unassigned;
                return Some(Allocation::new(flown));
            }

            let most = self.instance.capacity()[day].min(unassigned);
            for boarding in 0..=most {
                let mut flown = partial.flown.clone();
                flown[day] = boarding;
                self.queue.push_back(PartialAllocation {
                    day: day + 1,
                    assigned: partial.assigned + boarding,
                    flown,
                });
            }
        }

        None
    }
}

/// Scores every enumerated allocation and returns the cheapest.
///
/// Returns `None` for an infeasible instance. Validation use only — the
/// offline solver computes the same cost without the combinatorial sweep.
///
/// # Errors
/// Propagates the cost evaluator's [`AllocationError`] so that a defect
/// in the enumerator surfaces as a typed failure instead of a bad score.
pub fn brute_force_minimum(instance: &Instance) -> Result<Option<Solution>, AllocationError> {
    let mut best: Option<Solution> = None;
    for allocation in enumerate_allocations(instance) {
        let cost = evaluate_cost(instance, &allocation)?;
        if best.as_ref().is_none_or(|b| cost < b.cost) {
            best = Some(Solution { allocation, cost });
        }
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;
    use crate::generate::InstanceSpace;
    use crate::solver::{solve_offline, solve_online, validate_allocation};

    fn instance(
        population: u32,
        capacity: Vec<u32>,
        transport: Vec<f64>,
        holding: Vec<f64>,
    ) -> Instance {
        Instance::new(population, capacity, transport, holding).unwrap()
    }

    #[test]
    fn test_enumerates_all_ways() {
        // 5 people over three 3-seat days: 12 distinct allocations.
        let instance = instance(5, vec![3, 3, 3], vec![1.0; 3], vec![1.0; 3]);
        let allocations: Vec<Allocation> = enumerate_allocations(&instance).collect();
        assert_eq!(allocations.len(), 12);

        let distinct: HashSet<&Allocation> = allocations.iter().collect();
        assert_eq!(distinct.len(), 12);

        for allocation in &allocations {
            assert!(validate_allocation(&instance, allocation).is_ok());
        }
    }

    #[test]
    fn test_every_allocation_is_valid() {
        let instance = instance(7, vec![4, 2, 5], vec![1.0; 3], vec![1.0; 3]);
        let mut count = 0;
        for allocation in enumerate_allocations(&instance) {
            assert!(validate_allocation(&instance, &allocation).is_ok());
            count += 1;
        }
        assert!(count > 0);
    }

    #[test]
    fn test_infeasible_yields_nothing() {
        let instance = instance(10, vec![2, 2], vec![1.0; 2], vec![1.0; 2]);
        assert_eq!(enumerate_allocations(&instance).count(), 0);
    }

    #[test]
    fn test_zero_population_single_allocation() {
        let instance = instance(0, vec![2, 2], vec![1.0; 2], vec![1.0; 2]);
        let allocations: Vec<Allocation> = enumerate_allocations(&instance).collect();
        assert_eq!(allocations, vec![Allocation::zeros(2)]);
    }

    #[test]
    fn test_single_day_forces_everyone() {
        let instance = instance(4, vec![4], vec![1.0], vec![1.0]);
        let allocations: Vec<Allocation> = enumerate_allocations(&instance).collect();
        assert_eq!(allocations, vec![Allocation::new(vec![4])]);
    }

    #[test]
    fn test_lazy_partial_consumption() {
        // Taking a few items must not require the full space.
        let instance = instance(10, vec![10; 6], vec![1.0; 6], vec![1.0; 6]);
        let first: Vec<Allocation> = enumerate_allocations(&instance).take(3).collect();
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_minimum_matches_offline_solver() {
        let cases = [
            instance(
                10,
                vec![5, 5, 5],
                vec![10.0, 10.0, 10.0],
                vec![15.0, 15.0, 15.0],
            ),
            instance(6, vec![4, 4], vec![100.0, 1.0], vec![2.0, 2.0]),
            instance(8, vec![3, 3, 3, 3], vec![4.0, 3.0, 2.0, 1.0], vec![0.5; 4]),
            instance(12, vec![2, 6, 4, 3], vec![7.0, 1.0, 9.0, 2.0], vec![3.0, 0.0, 5.0, 1.0]),
        ];
        for instance in &cases {
            let oracle = brute_force_minimum(instance).unwrap().unwrap();
            let solution = solve_offline(instance).unwrap();
            assert!(
                (oracle.cost - solution.cost).abs() < 1e-9,
                "oracle {} vs solver {}",
                oracle.cost,
                solution.cost
            );
        }
    }

    #[test]
    fn test_minimum_matches_offline_on_sampled_instances() {
        let space = InstanceSpace::default()
            .with_population(10)
            .with_days(4)
            .with_capacity_range(1, 4)
            .with_transport_range(1, 20)
            .with_holding_range(0, 20);
        for seed in 0..8 {
            let instance = space.sample(&mut SmallRng::seed_from_u64(seed));
            let oracle = brute_force_minimum(&instance).unwrap().unwrap();
            let offline = solve_offline(&instance).unwrap();
            let online = solve_online(&instance).unwrap();
            assert!(
                (oracle.cost - offline.cost).abs() < 1e-9,
                "seed {seed}: oracle {} vs offline {}",
                oracle.cost,
                offline.cost
            );
            assert!(online.cost >= oracle.cost - 1e-9);
        }
    }

    #[test]
    fn test_brute_force_minimum_infeasible() {
        let instance = instance(10, vec![2, 2], vec![1.0; 2], vec![1.0; 2]);
        assert_eq!(brute_force_minimum(&instance).unwrap(), None);
    }

    #[test]
    fn test_known_minimum_value() {
        let instance = instance(
            10,
            vec![5, 5, 5],
            vec![10.0, 10.0, 10.0],
            vec![15.0, 15.0, 15.0],
        );
        let oracle = brute_force_minimum(&instance).unwrap().unwrap();
        assert_eq!(oracle.cost, 175.0);
        assert_eq!(oracle.allocation.flown, vec![5, 5, 0]);
    }
}
