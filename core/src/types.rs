//! Shared primitive types used across the engine.

/// A currency amount in euros.
pub type Euro = f64;

/// A count of cases or analyses. The input schema carries every numeric
/// field as an IEEE-754 double, volumes included, so counts are `f64`
/// throughout rather than integers.
pub type Count = f64;
