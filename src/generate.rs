//! Random instance generation.
//!
//! An [`InstanceSpace`] describes a family of instances: a fixed
//! population and horizon with per-day capacities and prices drawn
//! uniformly from configured ranges. The last day's capacity is always
//! forced to the population, so every sampled instance is feasible and
//! the online policy's forced last day cannot overflow.
//!
//! The space also produces its adversarial member — the instance family
//! that drives the myopic online policy to its worst ratio — and the
//! analytic upper bound that family approaches.

use rand::Rng;

use crate::models::Instance;

/// A family of evacuation instances with uniformly drawn prices.
///
/// Prices are drawn as whole currency units; the analytic ratio bound
/// and the adversary construction rely on the configured extremes, not
/// on the draws.
///
/// # Example
///
/// ```
/// use evac_schedule::generate::InstanceSpace;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let space = InstanceSpace::default().with_population(50).with_days(5);
/// let mut rng = SmallRng::seed_from_u64(7);
/// let instance = space.sample(&mut rng);
/// assert!(instance.is_feasible());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceSpace {
    /// People to relocate.
    pub population: u32,
    /// Scheduling days; must be at least 1.
    pub days: usize,
    /// Smallest per-day seat count drawn.
    pub capacity_min: u32,
    /// Largest per-day seat count drawn.
    pub capacity_max: u32,
    /// Smallest per-person transport price drawn.
    pub transport_min: u32,
    /// Largest per-person transport price drawn.
    pub transport_max: u32,
    /// Smallest per-person holding price drawn.
    pub holding_min: u32,
    /// Largest per-person holding price drawn.
    pub holding_max: u32,
}

impl Default for InstanceSpace {
    fn default() -> Self {
        Self {
            population: 100,
            days: 10,
            capacity_min: 1,
            capacity_max: 50,
            transport_min: 10,
            transport_max: 100,
            holding_min: 10,
            holding_max: 100,
        }
    }
}

impl InstanceSpace {
    /// Sets the population.
    pub fn with_population(mut self, population: u32) -> Self {
        self.population = population;
        self
    }

    /// Sets the number of scheduling days.
    pub fn with_days(mut self, days: usize) -> Self {
        self.days = days;
        self
    }

    /// Sets the per-day capacity range (inclusive).
    pub fn with_capacity_range(mut self, min: u32, max: u32) -> Self {
        self.capacity_min = min;
        self.capacity_max = max;
        self
    }

    /// Sets the transport price range (inclusive).
    pub fn with_transport_range(mut self, min: u32, max: u32) -> Self {
        self.transport_min = min;
        self.transport_max = max;
        self
    }

    /// Sets the holding price range (inclusive).
    pub fn with_holding_range(mut self, min: u32, max: u32) -> Self {
        self.holding_min = min;
        self.holding_max = max;
        self
    }

    /// Draws a random instance from this space.
    ///
    /// The last day's capacity is set to the population so the instance
    /// is always feasible.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Instance {
        let mut capacity: Vec<u32> = (0..self.days)
            .map(|_| rng.random_range(self.capacity_min..=self.capacity_max))
            .collect();
        if let Some(last) = capacity.last_mut() {
            *last = self.population;
        }

        let transport_price = (0..self.days)
            .map(|_| f64::from(rng.random_range(self.transport_min..=self.transport_max)))
            .collect();
        let holding_price = (0..self.days)
            .map(|_| f64::from(rng.random_range(self.holding_min..=self.holding_max)))
            .collect();

        Instance::new(self.population, capacity, transport_price, holding_price)
            .expect("sampled arrays are aligned and prices are finite")
    }

    /// The adversarial member of this space.
    ///
    /// Every day has full capacity; day 0 carries the cheapest transport
    /// price and every later day the dearest; holding prices sit a hair
    /// below the transport prices. The online rule therefore waits every
    /// day and pays the maximal fare on the last, while the offline
    /// optimum flies everyone on day 0 — driving the ratio towards
    /// [`ratio_upper_bound`](Self::ratio_upper_bound).
    pub fn adversary(&self) -> Instance {
        let capacity = vec![self.population; self.days];

        let mut transport_price = vec![f64::from(self.transport_max); self.days];
        transport_price[0] = f64::from(self.transport_min);
        let holding_price = transport_price.iter().map(|p| p - 1e-9).collect();

        Instance::new(self.population, capacity, transport_price, holding_price)
            .expect("adversary arrays are aligned and prices are finite")
    }

    /// Analytic upper bound on the competitive ratio over this space:
    /// `(transport_max * (days - 1) + transport_min) / transport_min`.
    pub fn ratio_upper_bound(&self) -> f64 {
        (f64::from(self.transport_max) * (self.days as f64 - 1.0) + f64::from(self.transport_min))
            / f64::from(self.transport_min)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;
    use crate::solver::competitive_ratio;

    #[test]
    fn test_sample_within_ranges() {
        let space = InstanceSpace::default();
        let mut rng = SmallRng::seed_from_u64(42);
        let instance = space.sample(&mut rng);

        assert_eq!(instance.population(), 100);
        assert_eq!(instance.days(), 10);
        assert_eq!(instance.capacity()[9], 100);
        for day in 0..9 {
            let c = instance.capacity()[day];
            assert!((1..=50).contains(&c));
        }
        for &p in instance.transport_price() {
            assert!((10.0..=100.0).contains(&p));
        }
        for &h in instance.holding_price() {
            assert!((10.0..=100.0).contains(&h));
        }
    }

    #[test]
    fn test_sample_is_always_feasible() {
        let space = InstanceSpace::default().with_capacity_range(0, 3);
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            assert!(space.sample(&mut rng).is_feasible());
        }
    }

    #[test]
    fn test_sample_is_deterministic_under_seed() {
        let space = InstanceSpace::default();
        let a = space.sample(&mut SmallRng::seed_from_u64(9));
        let b = space.sample(&mut SmallRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_builder_setters() {
        let space = InstanceSpace::default()
            .with_population(20)
            .with_days(4)
            .with_capacity_range(2, 8)
            .with_transport_range(1, 5)
            .with_holding_range(0, 2);
        assert_eq!(space.population, 20);
        assert_eq!(space.days, 4);
        assert_eq!((space.capacity_min, space.capacity_max), (2, 8));
        assert_eq!((space.transport_min, space.transport_max), (1, 5));
        assert_eq!((space.holding_min, space.holding_max), (0, 2));
    }

    #[test]
    fn test_adversary_approaches_upper_bound() {
        let space = InstanceSpace::default();
        let ratio = competitive_ratio(&space.adversary()).unwrap();
        let bound = space.ratio_upper_bound();
        assert!(ratio >= 1.0);
        assert!(ratio <= bound);
        assert!((bound - ratio).abs() < 1e-6);
    }

    #[test]
    fn test_ratio_upper_bound_value() {
        // (100 * 9 + 10) / 10 for the default space.
        let space = InstanceSpace::default();
        assert!((space.ratio_upper_bound() - 91.0).abs() < 1e-12);
    }

    #[test]
    fn test_adversary_shape() {
        let space = InstanceSpace::default().with_days(3);
        let adversary = space.adversary();
        assert_eq!(adversary.capacity(), &[100, 100, 100]);
        assert_eq!(adversary.transport_price(), &[10.0, 100.0, 100.0]);
        for (t, h) in adversary
            .transport_price()
            .iter()
            .zip(adversary.holding_price())
        {
            assert!(h < t);
        }
    }
}
