//! Competitive ratio of the online policy against the offline optimum.

use crate::error::SolveResult;
use crate::models::Instance;
use crate::solver::{solve_offline, solve_online};

/// Ratio of an online cost to an offline cost.
///
/// The offline cost is optimal, so for correct solvers the ratio is
/// always `>= 1`; a smaller value signals a defect in one of them. A
/// zero offline cost means a free schedule exists: the ratio is `1.0`
/// when the online policy also paid nothing, infinite otherwise.
pub fn cost_ratio(online_cost: f64, offline_cost: f64) -> f64 {
    if offline_cost == 0.0 {
        if online_cost == 0.0 {
            1.0
        } else {
            f64::INFINITY
        }
    } else {
        online_cost / offline_cost
    }
}

/// Runs both solvers on the instance and returns online / offline cost.
///
/// # Example
///
/// ```
/// use evac_schedule::models::Instance;
/// use evac_schedule::solver::competitive_ratio;
///
/// let instance = Instance::new(
///     100,
///     vec![50, 30, 40],
///     vec![10.0, 10.0, 10.0],
///     vec![15.0, 15.0, 15.0],
/// )
/// .unwrap();
///
/// assert!(competitive_ratio(&instance).unwrap() >= 1.0);
/// ```
///
/// # Errors
/// Propagates [`SolveError::Infeasible`](crate::error::SolveError) from
/// either solver.
pub fn competitive_ratio(instance: &Instance) -> SolveResult<f64> {
    let offline = solve_offline(instance)?;
    let online = solve_online(instance)?;
    Ok(cost_ratio(online.cost, offline.cost))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;

    #[test]
    fn test_ratio_is_one_when_policies_agree() {
        let instance = Instance::new(
            100,
            vec![50, 30, 40],
            vec![10.0, 10.0, 10.0],
            vec![15.0, 15.0, 15.0],
        )
        .unwrap();
        let ratio = competitive_ratio(&instance).unwrap();
        assert!((ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ratio_penalizes_myopia() {
        // Holding is free, so offline flies everyone on the cheap first
        // day; the online rule sees 1.0 > 0.0 and waits for the dear one.
        let instance = Instance::new(
            10,
            vec![10, 10],
            vec![1.0, 50.0],
            vec![0.0, 0.0],
        )
        .unwrap();
        let ratio = competitive_ratio(&instance).unwrap();
        assert!((ratio - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_ratio_at_least_one() {
        let instance = Instance::new(
            10,
            vec![4, 4, 10],
            vec![1.0, 30.0, 5.0],
            vec![2.0, 2.0, 2.0],
        )
        .unwrap();
        assert!(competitive_ratio(&instance).unwrap() >= 1.0);
    }

    #[test]
    fn test_ratio_propagates_infeasibility() {
        let instance = Instance::new(20, vec![5, 5], vec![1.0, 1.0], vec![1.0, 1.0]).unwrap();
        assert!(matches!(
            competitive_ratio(&instance).unwrap_err(),
            SolveError::Infeasible { .. }
        ));
    }

    #[test]
    fn test_zero_population_ratio() {
        let instance = Instance::new(0, vec![5], vec![10.0], vec![15.0]).unwrap();
        assert_eq!(competitive_ratio(&instance).unwrap(), 1.0);
    }

    #[test]
    fn test_cost_ratio_zero_offline() {
        assert_eq!(cost_ratio(0.0, 0.0), 1.0);
        assert_eq!(cost_ratio(5.0, 0.0), f64::INFINITY);
        assert_eq!(cost_ratio(6.0, 3.0), 2.0);
    }
}
