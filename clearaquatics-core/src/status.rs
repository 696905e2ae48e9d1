//! Classifies a reading against its ideal band.
//!
//! Inside the band (bounds inclusive) is `Good`. Outside it, the distance to
//! the violated bound is taken as a fraction of that bound; anything beyond
//! half the bound is `Critical`, the rest `Warning`.
//!
//! A zero bound has no meaningful fraction, so any excursion past a zero bound
//! is `Critical`. Fractions use the bound's magnitude, so a negative bound
//! never turns an excursion into a negative deviation.
//!
//! NaN inputs and `ideal_min > ideal_max` are caller errors; the store rejects
//! them before classifying.

use clearaquatics_schemas::water::ParameterStatus;

/// Deviations strictly above this fraction are critical.
pub const CRITICAL_DEVIATION: f64 = 0.5;

pub fn classify(value: f64, ideal_min: f64, ideal_max: f64) -> ParameterStatus {
    match deviation(value, ideal_min, ideal_max) {
        None => ParameterStatus::Good,
        Some(d) if d > CRITICAL_DEVIATION => ParameterStatus::Critical,
        Some(_) => ParameterStatus::Warning,
    }
}

/// Fractional distance from the violated bound, or `None` when in band.
/// Infinite when the violated bound is zero.
pub fn deviation(value: f64, ideal_min: f64, ideal_max: f64) -> Option<f64> {
    if value < ideal_min {
        Some(fraction_of(ideal_min - value, ideal_min))
    } else if value > ideal_max {
        Some(fraction_of(value - ideal_max, ideal_max))
    } else {
        None
    }
}

fn fraction_of(distance: f64, bound: f64) -> f64 {
    if bound == 0.0 {
        f64::INFINITY
    } else {
        distance / bound.abs()
    }
}

/// Human-readable note for an out-of-range value, e.g. `0.10ppm above maximum`.
pub fn range_note(value: f64, ideal_min: f64, ideal_max: f64, unit: &str) -> Option<String> {
    if value < ideal_min {
        Some(format!("{:.2}{} below minimum", ideal_min - value, unit))
    } else if value > ideal_max {
        Some(format!("{:.2}{} above maximum", value - ideal_max, unit))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ParameterStatus::*;

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(classify(6.5, 6.5, 7.5), Good);
        assert_eq!(classify(7.5, 6.5, 7.5), Good);
        assert_eq!(classify(7.0, 6.5, 7.5), Good);
    }

    #[test]
    fn small_excursion_above_is_warning() {
        // (7.6 - 7.5) / 7.5 is about 0.013
        assert_eq!(classify(7.6, 6.5, 7.5), Warning);
    }

    #[test]
    fn below_minimum_scales_with_the_minimum() {
        assert_eq!(classify(6.4, 6.5, 7.5), Warning);
        // exactly half the minimum away is still a warning
        assert_eq!(classify(4.0, 8.0, 12.0), Warning);
        assert_eq!(classify(3.9, 8.0, 12.0), Critical);
    }

    #[test]
    fn above_maximum_scales_with_the_maximum() {
        assert_eq!(classify(81.0, 75.0, 79.0), Warning);
        assert_eq!(classify(30.0, 0.0, 20.0), Warning);
        assert_eq!(classify(30.1, 0.0, 20.0), Critical);
    }

    #[test]
    fn ammonia_double_the_limit_is_critical() {
        assert_eq!(classify(0.5, 0.0, 0.25), Critical);
        assert_eq!(classify(0.3, 0.0, 0.25), Warning);
    }

    #[test]
    fn any_excursion_past_a_zero_bound_is_critical() {
        assert_eq!(classify(-0.01, 0.0, 0.25), Critical);
        assert_eq!(classify(0.01, -1.0, 0.0), Critical);
        assert_eq!(deviation(-0.01, 0.0, 0.25), Some(f64::INFINITY));
        assert_eq!(classify(0.0, 0.0, 0.25), Good);
    }

    #[test]
    fn negative_bounds_use_magnitude() {
        let d = deviation(-3.0, -2.0, 5.0).unwrap();
        assert!((d - 0.5).abs() < 1e-12);
        assert_eq!(classify(-3.0, -2.0, 5.0), Warning);
    }

    #[test]
    fn range_note_reports_distance_and_unit() {
        assert_eq!(range_note(6.4, 6.5, 7.5, ""), Some("0.10 below minimum".to_string()));
        assert_eq!(range_note(81.0, 75.0, 79.0, "°F"), Some("2.00°F above maximum".to_string()));
        assert_eq!(range_note(7.0, 6.5, 7.5, ""), None);
    }
}
