//! Evacuation scheduling: exact offline solver, myopic online solver,
//! and competitive-ratio analysis.
//!
//! Models the evacuation problem: a fixed population must be relocated
//! within a bounded number of days. Each day offers a limited number of
//! transport seats at a per-person price, and every person still waiting
//! at the end of a day pays that day's holding (hotel) price. The goal
//! is to decide how many people travel on each day at minimum total cost.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Instance`, `Allocation`, `Solution`
//! - **`validation`**: Instance integrity checks (array alignment, price sanity)
//! - **`error`**: Typed solver failures — `Infeasible`, `InvalidAllocation`
//! - **`solver`**: Cost evaluation, offline optimum, online policy, competitive ratio
//! - **`enumeration`**: Brute-force enumeration of all feasible allocations
//! - **`generate`**: Random instance sampling and adversarial instance families
//! - **`parse`**: The five-line on-disk instance format
//! - **`experiment`**: Solver comparison runs and batch ratio statistics
//!
//! # Architecture
//!
//! The solver core is synchronous, single-threaded, and purely
//! computational: instances are read-only, every call returns a fresh
//! allocation, and no state is shared between invocations. Batch
//! experiments over independent instances can therefore be parallelized
//! by the caller without coordination.
//!
//! # References
//!
//! - Borodin & El-Yaniv (1998), "Online Computation and Competitive Analysis"
//! - Sleator & Tarjan (1985), "Amortized Efficiency of List Update and Paging Rules"

pub mod enumeration;
pub mod error;
pub mod experiment;
pub mod generate;
pub mod models;
pub mod parse;
pub mod solver;
pub mod validation;
