//! Carbon-equivalence conversions
//!
//! Fixed linear factors used when translating sequestration estimates into
//! everyday comparisons.

use crate::utils::formatting::finite_or_zero;

/// Passenger cars taken off the road for one year, per tCO2e
pub const CARS_PER_TONNE: f64 = 0.216;

/// Tree seedlings grown for ten years, per tCO2e
pub const TREES_PER_TONNE: f64 = 16.5;

/// Midpoint of a summed estimate range
pub fn midpoint(low: f64, high: f64) -> f64 {
    finite_or_zero((low + high) / 2.0)
}

/// Cars-per-year equivalent, rounded
pub fn cars_equivalent(tonnes: f64) -> i64 {
    (finite_or_zero(tonnes) * CARS_PER_TONNE).round() as i64
}

/// Tree-seedling equivalent, rounded
pub fn trees_equivalent(tonnes: f64) -> i64 {
    (finite_or_zero(tonnes) * TREES_PER_TONNE).round() as i64
}
