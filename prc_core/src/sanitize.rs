//! Clamping of user-supplied numbers into their valid ranges
//!
//! The pipeline never rejects a malformed number. Every raw input is pulled
//! back to the nearest valid bound, and NaN goes to the lower bound.

/// Pipeline constants
pub mod constants {
    /// Reference window of a degradation profile, in hours
    pub const REFERENCE_WINDOW_HOURS: f64 = 24.0;

    /// Upper bound of any time-scaled reduction fraction
    pub const MAX_EFFECTIVE_REDUCTION: f64 = 0.95;

    /// Absolute tolerance under which two confrontation sums are equal
    pub const EQUIVALENCE_TOLERANCE: f64 = 1e-6;

    /// Element strength when none is given
    pub const FULL_STRENGTH_PERCENT: u8 = 100;
}

/// Clamp a strength percentage into [0, 100]
pub fn clamp_percent(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u8
}

/// Clamp a count or quantity to a non-negative integer
pub fn clamp_count(raw: f64) -> u32 {
    if raw.is_nan() {
        return 0;
    }
    raw.floor().clamp(0.0, u32::MAX as f64) as u32
}

/// Clamp a base reduction fraction into [0, 1]
pub fn clamp_fraction(raw: f64) -> f64 {
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, 1.0)
}

/// Clamp an elapsed time to a non-negative, finite number of hours
pub fn clamp_hours(raw: f64) -> f64 {
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, f64::MAX)
}

/// Clamp a coefficient or factor to be non-negative
pub fn clamp_non_negative(raw: f64) -> f64 {
    if raw.is_nan() {
        return 0.0;
    }
    raw.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_percent() {
        assert_eq!(clamp_percent(150.0), 100);
        assert_eq!(clamp_percent(-3.0), 0);
        assert_eq!(clamp_percent(72.4), 72);
        assert_eq!(clamp_percent(f64::NAN), 0);
    }

    #[test]
    fn test_clamp_count() {
        assert_eq!(clamp_count(-1.0), 0);
        assert_eq!(clamp_count(3.9), 3);
        assert_eq!(clamp_count(f64::NAN), 0);
    }

    #[test]
    fn test_clamp_hours() {
        assert!((clamp_hours(-12.0) - 0.0).abs() < f64::EPSILON);
        assert!((clamp_hours(36.0) - 36.0).abs() < f64::EPSILON);
        assert!(clamp_hours(f64::INFINITY).is_finite());
    }

    #[test]
    fn test_clamp_fraction() {
        assert!((clamp_fraction(1.4) - 1.0).abs() < f64::EPSILON);
        assert!((clamp_fraction(-0.2) - 0.0).abs() < f64::EPSILON);
        assert!((clamp_fraction(0.35) - 0.35).abs() < f64::EPSILON);
    }
}
