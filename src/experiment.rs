//! Solver comparison runs and batch ratio statistics.
//!
//! A single experiment runs both solvers on one instance and records the
//! costs, the wall-clock time each solver took, and the competitive
//! ratio. Batch runs sample instances from an [`InstanceSpace`] and
//! aggregate the observed ratios.
//!
//! Instances are independent, so callers wanting parallel sweeps can
//! split the batch across threads and merge the ratio samples.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::error::SolveResult;
use crate::generate::InstanceSpace;
use crate::models::{Instance, Solution};
use crate::solver::{cost_ratio, solve_offline, solve_online};

/// The outcome of running both solvers on one instance.
#[derive(Debug, Clone)]
pub struct SolverComparison {
    /// Offline (optimal) solution.
    pub offline: Solution,
    /// Online (myopic) solution.
    pub online: Solution,
    /// Online cost divided by offline cost.
    pub ratio: f64,
    /// Wall-clock time of the offline solve.
    pub offline_elapsed: Duration,
    /// Wall-clock time of the online solve.
    pub online_elapsed: Duration,
}

/// Runs both solvers on an instance and collects costs, timings, and the
/// competitive ratio.
///
/// # Errors
/// Propagates [`SolveError::Infeasible`](crate::error::SolveError) from
/// either solver.
pub fn run_experiment(instance: &Instance) -> SolveResult<SolverComparison> {
    let started = Instant::now();
    let offline = solve_offline(instance)?;
    let offline_elapsed = started.elapsed();

    let started = Instant::now();
    let online = solve_online(instance)?;
    let online_elapsed = started.elapsed();

    let ratio = cost_ratio(online.cost, offline.cost);

    Ok(SolverComparison {
        offline,
        online,
        ratio,
        offline_elapsed,
        online_elapsed,
    })
}

/// Summary statistics over a sample of competitive ratios.
#[derive(Debug, Clone, PartialEq)]
pub struct RatioStats {
    /// Number of ratios in the sample.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Smallest observed ratio.
    pub min: f64,
    /// Largest observed ratio.
    pub max: f64,
}

impl RatioStats {
    /// Computes statistics over a ratio sample.
    ///
    /// An empty sample yields all-zero statistics.
    pub fn from_ratios(ratios: &[f64]) -> Self {
        if ratios.is_empty() {
            return Self {
                count: 0,
                mean: 0.0,
                std_dev: 0.0,
                min: 0.0,
                max: 0.0,
            };
        }

        let count = ratios.len();
        let mean = ratios.iter().sum::<f64>() / count as f64;
        let variance = ratios.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / count as f64;
        let min = ratios.iter().copied().fold(f64::INFINITY, f64::min);
        let max = ratios.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            count,
            mean,
            std_dev: variance.sqrt(),
            min,
            max,
        }
    }
}

/// Samples `n_experiments` instances from the space, runs both solvers
/// on each, and aggregates the competitive ratios.
///
/// # Example
///
/// ```
/// use evac_schedule::experiment::run_random_experiments;
/// use evac_schedule::generate::InstanceSpace;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let space = InstanceSpace::default();
/// let mut rng = SmallRng::seed_from_u64(1);
/// let stats = run_random_experiments(&space, 20, &mut rng).unwrap();
/// assert_eq!(stats.count, 20);
/// assert!(stats.min >= 1.0);
/// ```
///
/// # Errors
/// Stops at the first infeasible sample. Spaces force the last day's
/// capacity to the population, so this only happens with a hand-built
/// space whose sampled instances the online policy cannot finish.
pub fn run_random_experiments<R: Rng>(
    space: &InstanceSpace,
    n_experiments: usize,
    rng: &mut R,
) -> SolveResult<RatioStats> {
    let mut ratios = Vec::with_capacity(n_experiments);
    for _ in 0..n_experiments {
        let instance = space.sample(rng);
        let comparison = run_experiment(&instance)?;
        ratios.push(comparison.ratio);
    }
    Ok(RatioStats::from_ratios(&ratios))
}
