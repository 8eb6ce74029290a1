//! Input validation for evacuation instances.
//!
//! Checks structural integrity of the per-day arrays before an
//! [`Instance`](crate::models::Instance) is constructed. Detects:
//! - An empty scheduling horizon (zero days)
//! - Price arrays misaligned with the capacity array
//! - Negative or non-finite prices
//!
//! Solvers never see an invalid instance: construction is the only gate.

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The instance has no scheduling days.
    EmptyHorizon,
    /// A price array is not aligned day-by-day with the capacity array.
    LengthMismatch,
    /// A price is negative, NaN, or infinite.
    InvalidPrice,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the per-day arrays of an evacuation instance.
///
/// Checks:
/// 1. At least one scheduling day
/// 2. Transport and holding prices aligned index-by-index with capacities
/// 3. Every price finite and non-negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_instance(
    capacity: &[u32],
    transport_price: &[f64],
    holding_price: &[f64],
) -> ValidationResult {
    let mut errors = Vec::new();

    if capacity.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyHorizon,
            "instance has no scheduling days",
        ));
    }

    if transport_price.len() != capacity.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!(
                "{} transport prices for {} days of capacity",
                transport_price.len(),
                capacity.len()
            ),
        ));
    }

    if holding_price.len() != capacity.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!(
                "{} holding prices for {} days of capacity",
                holding_price.len(),
                capacity.len()
            ),
        ));
    }

    check_prices(&mut errors, transport_price, "transport");
    check_prices(&mut errors, holding_price, "holding");

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_prices(errors: &mut Vec<ValidationError>, prices: &[f64], label: &str) {
    for (day, &price) in prices.iter().enumerate() {
        if !price.is_finite() || price < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPrice,
                format!("{label} price on day {day} is {price}"),
            ));
        }
    }
}
