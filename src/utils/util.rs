//! # Utility Module
//!
//! Small numeric helpers shared by the vector and camera code.
//!
//! ## `within_tolerance`
//!
//! Floating point values coming out of vector arithmetic rarely compare equal
//! bit for bit. `within_tolerance` answers whether two scalars differ by
//! strictly less than a given tolerance.
//!
//! ## `clamp_cosine`
//!
//! A cosine computed as `dot / (|a| * |b|)` can overshoot `[-1, 1]` by a
//! rounding error, and `acos` returns NaN outside that domain.

/// Returns `true` when `a` and `b` differ by strictly less than `tolerance`.
///
/// # Examples
///
/// ```
/// use sightline::utils::util::within_tolerance;
///
/// assert!(within_tolerance(1.0, 1.00001, 0.0001));
/// assert!(!within_tolerance(1.0, 1.01, 0.0001));
/// ```
pub fn within_tolerance(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

/// Clamps a cosine into the domain accepted by `f64::acos`.
///
/// # Examples
///
/// ```
/// use sightline::utils::util::clamp_cosine;
///
/// assert_eq!(clamp_cosine(1.0000000000000002), 1.0);
/// assert_eq!(clamp_cosine(-1.5), -1.0);
/// assert_eq!(clamp_cosine(0.5), 0.5);
/// ```
pub fn clamp_cosine(cosine: f64) -> f64 {
    cosine.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_tolerance_is_strict() {
        // A difference equal to the tolerance is not "within" it.
        assert!(!within_tolerance(0.0, 0.5, 0.5));
        assert!(within_tolerance(0.0, 0.25, 0.5));
    }

    #[test]
    fn test_within_tolerance_is_symmetric() {
        assert_eq!(
            within_tolerance(3.0, 3.00005, 0.0001),
            within_tolerance(3.00005, 3.0, 0.0001)
        );
    }

    #[test]
    fn test_clamp_cosine_overshoot() {
        // Rounding can push a cosine one ulp past the domain of acos.
        let overshoot = 1.0 + f64::EPSILON;
        assert!(overshoot.acos().is_nan());
        assert_eq!(clamp_cosine(overshoot).acos(), 0.0);
    }

    #[test]
    fn test_clamp_cosine_within_bounds() {
        assert_eq!(clamp_cosine(-0.25), -0.25);
    }
}
