//! Evacuation solvers and cost evaluation.
//!
//! Provides the single scoring authority ([`evaluate_cost`]), the exact
//! offline solver, the myopic online solver, and the competitive ratio
//! comparing the two.
//!
//! # Algorithms
//!
//! `solve_offline` knows every day's prices up front and is exact: the
//! cost model decomposes per person, so sorting days by leave cost and
//! filling the cheapest first is optimal by an exchange argument.
//!
//! `solve_online` is causal: it walks days chronologically and commits
//! each decision using only that day's own prices. It is deliberately
//! suboptimal — its value is the ratio to the offline optimum.
//!
//! # References
//!
//! - Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4: Greedy Algorithms
//! - Borodin & El-Yaniv (1998), "Online Computation and Competitive Analysis"

mod cost;
mod offline;
mod online;
mod ratio;

pub use cost::{evaluate_cost, validate_allocation};
pub use offline::solve_offline;
pub use online::solve_online;
pub use ratio::{competitive_ratio, cost_ratio};
