use super::GEOMETRIC_TOLERANCE;

/// Resolves the governing tolerance for a binary predicate between two
/// tolerance-bearing operands.
///
/// An explicit override wins outright. Otherwise the widest of the two
/// operand tolerances applies, floored at [`GEOMETRIC_TOLERANCE`], so the
/// resolution is symmetric in its operands and equality predicates built on
/// it hold regardless of which operand is consulted first.
#[must_use]
pub fn resolve_tolerance(first: f64, second: f64, override_tolerance: Option<f64>) -> f64 {
    match override_tolerance {
        Some(tolerance) => tolerance,
        None => first.max(second).max(GEOMETRIC_TOLERANCE),
    }
}

/// Returns whether `a` and `b` are equal within `tolerance`.
///
/// `+Infinity` equals only `+Infinity` and `-Infinity` only `-Infinity`;
/// mixed infinities are never equal. `NaN` equals nothing.
#[must_use]
pub fn are_equal(a: f64, b: f64, tolerance: f64) -> bool {
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    (a - b).abs() <= tolerance
}

/// Returns whether `a` is strictly greater than `b`, beyond the tolerance
/// band around `b`.
///
/// A value within tolerance of the boundary is treated as equal, so it
/// satisfies the inclusive comparison but not this strict one.
#[must_use]
pub fn is_greater_than(a: f64, b: f64, tolerance: f64) -> bool {
    if a.is_infinite() || b.is_infinite() {
        return a > b;
    }
    a - b > tolerance
}

/// Returns whether `a` is strictly less than `b`, beyond the tolerance band.
#[must_use]
pub fn is_less_than(a: f64, b: f64, tolerance: f64) -> bool {
    if a.is_infinite() || b.is_infinite() {
        return a < b;
    }
    b - a > tolerance
}

/// Returns whether `a` is greater than or within tolerance of `b`.
#[must_use]
pub fn is_greater_than_or_equal_to(a: f64, b: f64, tolerance: f64) -> bool {
    are_equal(a, b, tolerance) || is_greater_than(a, b, tolerance)
}

/// Returns whether `a` is less than or within tolerance of `b`.
#[must_use]
pub fn is_less_than_or_equal_to(a: f64, b: f64, tolerance: f64) -> bool {
    are_equal(a, b, tolerance) || is_less_than(a, b, tolerance)
}

/// Returns whether `value` is positive, outside the dead-band around zero.
#[must_use]
pub fn is_positive_sign(value: f64, tolerance: f64) -> bool {
    is_greater_than(value, 0.0, tolerance)
}

/// Returns whether `value` is negative, outside the dead-band around zero.
#[must_use]
pub fn is_negative_sign(value: f64, tolerance: f64) -> bool {
    is_less_than(value, 0.0, tolerance)
}

/// Returns whether `value` lies within the symmetric dead-band of width
/// `tolerance` around zero.
#[must_use]
pub fn is_zero_sign(value: f64, tolerance: f64) -> bool {
    are_equal(value, 0.0, tolerance)
}

/// Returns whether `value` lies within `[min, max]`, widened by `tolerance`
/// at both ends.
#[must_use]
pub fn is_within_inclusive(value: f64, min: f64, max: f64, tolerance: f64) -> bool {
    is_greater_than_or_equal_to(value, min, tolerance)
        && is_less_than_or_equal_to(value, max, tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    // ── are_equal ──

    #[test]
    fn equal_within_tolerance() {
        assert!(are_equal(1.0, 1.0 + 5e-11, TOL));
        assert!(are_equal(1.0 + 5e-11, 1.0, TOL));
    }

    #[test]
    fn not_equal_beyond_tolerance() {
        assert!(!are_equal(1.0, 1.0 + 2e-10, TOL));
    }

    #[test]
    fn equal_is_reflexive_for_infinities() {
        assert!(are_equal(f64::INFINITY, f64::INFINITY, TOL));
        assert!(are_equal(f64::NEG_INFINITY, f64::NEG_INFINITY, TOL));
    }

    #[test]
    fn mixed_infinities_never_equal() {
        assert!(!are_equal(f64::INFINITY, f64::NEG_INFINITY, TOL));
        assert!(!are_equal(f64::NEG_INFINITY, f64::INFINITY, TOL));
    }

    #[test]
    fn infinity_not_equal_to_finite() {
        assert!(!are_equal(f64::INFINITY, 1e300, TOL));
        assert!(!are_equal(1e300, f64::NEG_INFINITY, TOL));
    }

    #[test]
    fn nan_equals_nothing() {
        assert!(!are_equal(f64::NAN, f64::NAN, TOL));
        assert!(!are_equal(f64::NAN, 0.0, TOL));
    }

    // ── ordering ──

    #[test]
    fn strict_excludes_boundary_band() {
        // Within tolerance of the boundary: inclusive holds, strict does not.
        let a = 2.0 + 5e-11;
        assert!(!is_greater_than(a, 2.0, TOL));
        assert!(is_greater_than_or_equal_to(a, 2.0, TOL));
        assert!(is_less_than_or_equal_to(a, 2.0, TOL));
        assert!(!is_less_than(2.0, a, TOL));
    }

    #[test]
    fn strict_beyond_band() {
        assert!(is_greater_than(2.0 + 1e-9, 2.0, TOL));
        assert!(is_less_than(2.0, 2.0 + 1e-9, TOL));
    }

    #[test]
    fn ordering_with_infinities() {
        assert!(is_greater_than(f64::INFINITY, 0.0, TOL));
        assert!(is_less_than(f64::NEG_INFINITY, 0.0, TOL));
        assert!(!is_greater_than(f64::INFINITY, f64::INFINITY, TOL));
        assert!(is_greater_than_or_equal_to(f64::INFINITY, f64::INFINITY, TOL));
    }

    // ── sign classification ──

    #[test]
    fn sign_dead_band_is_symmetric() {
        assert!(is_zero_sign(5e-11, TOL));
        assert!(is_zero_sign(-5e-11, TOL));
        assert!(!is_positive_sign(5e-11, TOL));
        assert!(!is_negative_sign(-5e-11, TOL));
    }

    #[test]
    fn sign_outside_dead_band() {
        assert!(is_positive_sign(1e-9, TOL));
        assert!(is_negative_sign(-1e-9, TOL));
        assert!(!is_zero_sign(1e-9, TOL));
    }

    #[test]
    fn sign_classification_is_exclusive() {
        for value in [-1.0, -1e-9, 0.0, 5e-11, 1e-9, 1.0, f64::INFINITY] {
            let classified = [
                is_negative_sign(value, TOL),
                is_zero_sign(value, TOL),
                is_positive_sign(value, TOL),
            ];
            assert_eq!(
                classified.iter().filter(|&&c| c).count(),
                1,
                "value={value} classified={classified:?}"
            );
        }
    }

    // ── ranges ──

    #[test]
    fn within_inclusive_widens_at_both_ends() {
        assert!(is_within_inclusive(0.5, 0.0, 1.0, TOL));
        assert!(is_within_inclusive(-5e-11, 0.0, 1.0, TOL));
        assert!(is_within_inclusive(1.0 + 5e-11, 0.0, 1.0, TOL));
        assert!(!is_within_inclusive(1.0 + 1e-9, 0.0, 1.0, TOL));
    }

    // ── tolerance resolution ──

    #[test]
    fn resolution_is_symmetric() {
        assert_eq!(
            resolve_tolerance(1e-3, 1e-5, None),
            resolve_tolerance(1e-5, 1e-3, None)
        );
        assert_eq!(resolve_tolerance(1e-3, 1e-5, None), 1e-3);
    }

    #[test]
    fn resolution_floors_at_default() {
        assert_eq!(resolve_tolerance(1e-12, 1e-13, None), GEOMETRIC_TOLERANCE);
    }

    #[test]
    fn resolution_override_wins() {
        assert_eq!(resolve_tolerance(1e-3, 1e-5, Some(1e-2)), 1e-2);
        assert_eq!(resolve_tolerance(1e-3, 1e-5, Some(0.0)), 0.0);
    }
}
