use crate::error::{GeometryError, Result};
use crate::numerics::resolve_tolerance;

use super::{Angle, CartesianCoordinate, PolarCoordinate};

/// The directed difference `J - I` between two Cartesian coordinates.
///
/// The offset keeps both endpoints, so it can be re-anchored or scaled
/// about its own origin `I` without losing where it came from.
#[derive(Debug, Clone, Copy)]
pub struct CartesianOffset {
    i: CartesianCoordinate,
    j: CartesianCoordinate,
    tolerance: f64,
}

impl CartesianOffset {
    /// Creates the directed offset from `i` to `j`.
    #[must_use]
    pub fn new(i: CartesianCoordinate, j: CartesianCoordinate) -> Self {
        let tolerance = resolve_tolerance(i.tolerance(), j.tolerance(), None);
        Self { i, j, tolerance }
    }

    /// Creates an offset of the given separations anchored at the origin.
    #[must_use]
    pub fn from_components(x: f64, y: f64) -> Self {
        Self::new(
            CartesianCoordinate::origin(),
            CartesianCoordinate::new(x, y),
        )
    }

    /// Returns the starting coordinate `I`.
    #[must_use]
    pub fn i(&self) -> CartesianCoordinate {
        self.i
    }

    /// Returns the ending coordinate `J`.
    #[must_use]
    pub fn j(&self) -> CartesianCoordinate {
        self.j
    }

    /// Returns the x-separation `J.x - I.x`.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.j.x() - self.i.x()
    }

    /// Returns the y-separation `J.y - I.y`.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.j.y() - self.i.y()
    }

    /// Returns the tolerance used in comparisons involving this offset.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the straight-line separation length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.x().hypot(self.y())
    }

    /// Returns the slope angle of the separation.
    #[must_use]
    pub fn slope_angle(&self) -> Angle {
        Angle::from_offset(self)
    }

    /// Returns the offset running the opposite way, from `J` to `I`.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.j, self.i)
    }

    /// Returns this offset with its separation scaled about `I`.
    #[must_use]
    pub fn scaled_by(&self, multiplier: f64) -> Self {
        let j = CartesianCoordinate::with_tolerance(
            self.i.x() + self.x() * multiplier,
            self.i.y() + self.y() * multiplier,
            self.j.tolerance(),
        );
        Self::new(self.i, j)
    }

    /// Returns this offset with its separation divided by `denominator`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] when `denominator` is zero.
    pub fn divided_by(&self, denominator: f64) -> Result<Self> {
        if denominator == 0.0 {
            return Err(GeometryError::DivideByZero {
                context: "dividing an offset",
            });
        }
        Ok(self.scaled_by(1.0 / denominator))
    }

    /// Returns the component-wise sum of two separations, anchored at this
    /// offset's `I`.
    #[must_use]
    pub fn plus(&self, other: &Self) -> Self {
        let j = CartesianCoordinate::with_tolerance(
            self.j.x() + other.x(),
            self.j.y() + other.y(),
            self.j.tolerance(),
        );
        Self::new(self.i, j)
    }

    /// Returns the component-wise difference of two separations, anchored
    /// at this offset's `I`.
    #[must_use]
    pub fn minus(&self, other: &Self) -> Self {
        let j = CartesianCoordinate::with_tolerance(
            self.j.x() - other.x(),
            self.j.y() - other.y(),
            self.j.tolerance(),
        );
        Self::new(self.i, j)
    }

    /// Converts the separation to polar form: its length and slope angle.
    #[must_use]
    pub fn to_polar(&self) -> PolarCoordinate {
        PolarCoordinate::with_tolerance(self.length(), self.slope_angle(), self.tolerance)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_4;

    use super::*;

    const TOL: f64 = 1e-10;

    fn c(x: f64, y: f64) -> CartesianCoordinate {
        CartesianCoordinate::new(x, y)
    }

    #[test]
    fn separations_are_j_minus_i() {
        let offset = CartesianOffset::new(c(1.0, 2.0), c(4.0, -2.0));
        assert!((offset.x() - 3.0).abs() < TOL);
        assert!((offset.y() + 4.0).abs() < TOL);
        assert!((offset.length() - 5.0).abs() < TOL);
    }

    #[test]
    fn reversed_negates_separations() {
        let offset = CartesianOffset::new(c(1.0, 2.0), c(4.0, -2.0)).reversed();
        assert!((offset.x() + 3.0).abs() < TOL);
        assert!((offset.y() - 4.0).abs() < TOL);
    }

    #[test]
    fn slope_angle_of_diagonal() {
        let offset = CartesianOffset::from_components(1.0, 1.0);
        assert!((offset.slope_angle().radians() - FRAC_PI_4).abs() < TOL);
    }

    #[test]
    fn scaling_is_anchored_at_i() {
        let offset = CartesianOffset::new(c(1.0, 1.0), c(3.0, 1.0)).scaled_by(2.0);
        assert!(offset.i().is_equal_to(&c(1.0, 1.0)));
        assert!(offset.j().is_equal_to(&c(5.0, 1.0)));
    }

    #[test]
    fn divide_by_zero_is_reported() {
        let offset = CartesianOffset::from_components(1.0, 1.0);
        assert!(matches!(
            offset.divided_by(0.0),
            Err(GeometryError::DivideByZero { .. })
        ));
    }

    #[test]
    fn division_halves_separation() {
        let offset = CartesianOffset::from_components(4.0, 2.0).divided_by(2.0).unwrap();
        assert!((offset.x() - 2.0).abs() < TOL);
        assert!((offset.y() - 1.0).abs() < TOL);
    }

    #[test]
    fn plus_and_minus_combine_separations() {
        let a = CartesianOffset::from_components(1.0, 2.0);
        let b = CartesianOffset::from_components(3.0, -1.0);
        let sum = a.plus(&b);
        assert!((sum.x() - 4.0).abs() < TOL);
        assert!((sum.y() - 1.0).abs() < TOL);
        let diff = a.minus(&b);
        assert!((diff.x() + 2.0).abs() < TOL);
        assert!((diff.y() - 3.0).abs() < TOL);
    }

    #[test]
    fn polar_form_carries_length_and_angle() {
        let polar = CartesianOffset::from_components(3.0, 4.0).to_polar();
        assert!((polar.radius() - 5.0).abs() < TOL);
        assert!((polar.azimuth().radians() - (4.0_f64).atan2(3.0)).abs() < TOL);
    }
}
