//! Evacuation instance model.
//!
//! An instance describes one evacuation problem: how many people must be
//! relocated, over how many days, and what each day costs. Instances are
//! immutable once constructed; solvers only ever borrow them.

use serde::{Deserialize, Serialize};

use crate::validation::{validate_instance, ValidationError};

/// An immutable evacuation problem.
///
/// The three per-day arrays are aligned by index and always have the same
/// length, which defines the scheduling horizon. Day `d` offers
/// `capacity[d]` seats at `transport_price[d]` per person, and every
/// person still waiting at the end of day `d` pays `holding_price[d]`.
///
/// Construction goes through [`Instance::new`], which enforces the
/// alignment and price invariants, so solvers never observe a malformed
/// instance.
///
/// # Example
///
/// ```
/// use evac_schedule::models::Instance;
///
/// let instance = Instance::new(
///     100,
///     vec![100, 500, 250],
///     vec![50.0, 100.0, 150.0],
///     vec![10.0, 1.0, 100.0],
/// )
/// .unwrap();
///
/// assert_eq!(instance.days(), 3);
/// assert!(instance.is_feasible());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    population: u32,
    capacity: Vec<u32>,
    transport_price: Vec<f64>,
    holding_price: Vec<f64>,
}

impl Instance {
    /// Creates a validated instance.
    ///
    /// # Errors
    /// Returns every detected problem: an empty horizon, price arrays not
    /// aligned with the capacity array, or negative/non-finite prices.
    pub fn new(
        population: u32,
        capacity: Vec<u32>,
        transport_price: Vec<f64>,
        holding_price: Vec<f64>,
    ) -> Result<Self, Vec<ValidationError>> {
        validate_instance(&capacity, &transport_price, &holding_price)?;
        Ok(Self {
            population,
            capacity,
            transport_price,
            holding_price,
        })
    }

    /// Total people to relocate.
    #[inline]
    pub fn population(&self) -> u32 {
        self.population
    }

    /// Number of scheduling days.
    #[inline]
    pub fn days(&self) -> usize {
        self.capacity.len()
    }

    /// Seats available per day.
    #[inline]
    pub fn capacity(&self) -> &[u32] {
        &self.capacity
    }

    /// Per-person transport price per day.
    #[inline]
    pub fn transport_price(&self) -> &[f64] {
        &self.transport_price
    }

    /// Per-person holding price per day.
    #[inline]
    pub fn holding_price(&self) -> &[f64] {
        &self.holding_price
    }

    /// Seats available across the whole horizon.
    pub fn total_capacity(&self) -> u64 {
        self.capacity.iter().map(|&c| u64::from(c)).sum()
    }

    /// Whether the whole population fits in the horizon's seats.
    ///
    /// Feasibility is a property of the instance alone, independent of
    /// any solver.
    pub fn is_feasible(&self) -> bool {
        self.total_capacity() >= u64::from(self.population)
    }
}
