use std::f64::consts::{PI, TAU};

use crate::error::{GeometryError, Result};
use crate::numerics::{are_equal, resolve_tolerance, GEOMETRIC_TOLERANCE};

use super::{AngularOffset, CartesianOffset};

/// Wraps an angle in radians into `(-pi, pi]`.
///
/// The raw value is first reduced modulo a full turn honoring its sign,
/// then re-centered so the result always lies in the half-open interval
/// `(-pi, pi]`. Wrapping is idempotent.
///
/// Non-finite input maps to `+Infinity` for both `+Infinity` and
/// `-Infinity`. This mapping is provisional rather than a mathematical
/// convention; callers that care about directed infinite angles should
/// check finiteness first.
#[must_use]
pub fn wrap_within_positive_negative_pi(radians: f64) -> f64 {
    if radians.is_infinite() {
        return f64::INFINITY;
    }
    let wrapped = radians % TAU;
    if wrapped > PI {
        wrapped - TAU
    } else if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// An angle carrying both its raw and normalized radian measure.
///
/// `radians()` is always in `(-pi, pi]`; `radians_raw()` preserves the
/// value the angle was constructed from, so multi-turn inputs remain
/// distinguishable.
#[derive(Debug, Clone, Copy)]
pub struct Angle {
    radians_raw: f64,
    radians: f64,
    tolerance: f64,
}

impl Angle {
    /// Creates an angle from radians with the default tolerance.
    #[must_use]
    pub fn from_radians(radians: f64) -> Self {
        Self::from_radians_with_tolerance(radians, GEOMETRIC_TOLERANCE)
    }

    /// Creates an angle from radians with an explicit tolerance.
    #[must_use]
    pub fn from_radians_with_tolerance(radians: f64, tolerance: f64) -> Self {
        Self {
            radians_raw: radians,
            radians: wrap_within_positive_negative_pi(radians),
            tolerance,
        }
    }

    /// Creates an angle from degrees with the default tolerance.
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    /// Creates the angle of the direction from the origin to `(x, y)`.
    #[must_use]
    pub fn from_origin(x: f64, y: f64) -> Self {
        Self::from_radians(y.atan2(x))
    }

    /// Creates the slope angle of a directed offset.
    #[must_use]
    pub fn from_offset(offset: &CartesianOffset) -> Self {
        Self::from_radians_with_tolerance(offset.y().atan2(offset.x()), offset.tolerance())
    }

    /// Returns the normalized radian measure, in `(-pi, pi]`.
    #[must_use]
    pub fn radians(&self) -> f64 {
        self.radians
    }

    /// Returns the raw radian measure the angle was constructed from.
    #[must_use]
    pub fn radians_raw(&self) -> f64 {
        self.radians_raw
    }

    /// Returns the normalized measure in degrees.
    #[must_use]
    pub fn degrees(&self) -> f64 {
        self.radians.to_degrees()
    }

    /// Returns the tolerance used in comparisons involving this angle.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns whether the normalized measures of two angles are equal
    /// within the resolved tolerance of the pair.
    #[must_use]
    pub fn is_equal_to(&self, other: &Self) -> bool {
        let tolerance = resolve_tolerance(self.tolerance, other.tolerance, None);
        are_equal(self.radians, other.radians, tolerance)
    }

    /// Returns the sum of the raw measures as a new angle.
    #[must_use]
    pub fn plus(&self, other: &Self) -> Self {
        Self::from_radians_with_tolerance(
            self.radians_raw + other.radians_raw,
            resolve_tolerance(self.tolerance, other.tolerance, None),
        )
    }

    /// Returns the difference of the raw measures as a new angle.
    #[must_use]
    pub fn minus(&self, other: &Self) -> Self {
        Self::from_radians_with_tolerance(
            self.radians_raw - other.radians_raw,
            resolve_tolerance(self.tolerance, other.tolerance, None),
        )
    }

    /// Returns this angle scaled by `multiplier`.
    #[must_use]
    pub fn multiplied_by(&self, multiplier: f64) -> Self {
        Self::from_radians_with_tolerance(self.radians_raw * multiplier, self.tolerance)
    }

    /// Returns this angle divided by `denominator`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] when `denominator` is zero.
    pub fn divided_by(&self, denominator: f64) -> Result<Self> {
        if denominator == 0.0 {
            return Err(GeometryError::DivideByZero {
                context: "dividing an angle",
            });
        }
        Ok(Self::from_radians_with_tolerance(
            self.radians_raw / denominator,
            self.tolerance,
        ))
    }

    /// Returns the directed angular offset from this angle to `other`.
    #[must_use]
    pub fn offset_to(&self, other: Self) -> AngularOffset {
        AngularOffset::new(*self, other)
    }
}
