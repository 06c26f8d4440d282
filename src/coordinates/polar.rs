use crate::numerics::{are_equal, resolve_tolerance, GEOMETRIC_TOLERANCE};

use super::{Angle, CartesianCoordinate};

/// An immutable polar coordinate: a radius and an azimuth about the origin.
#[derive(Debug, Clone, Copy)]
pub struct PolarCoordinate {
    radius: f64,
    azimuth: Angle,
    tolerance: f64,
}

impl PolarCoordinate {
    /// Creates a polar coordinate with the default tolerance.
    #[must_use]
    pub fn new(radius: f64, azimuth: Angle) -> Self {
        Self::with_tolerance(radius, azimuth, GEOMETRIC_TOLERANCE)
    }

    /// Creates a polar coordinate with an explicit tolerance.
    #[must_use]
    pub fn with_tolerance(radius: f64, azimuth: Angle, tolerance: f64) -> Self {
        Self {
            radius,
            azimuth,
            tolerance,
        }
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the azimuth.
    #[must_use]
    pub fn azimuth(&self) -> Angle {
        self.azimuth
    }

    /// Returns the tolerance used in comparisons involving this coordinate.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns whether two polar coordinates are equal within the resolved
    /// tolerance of the pair.
    #[must_use]
    pub fn is_equal_to(&self, other: &Self) -> bool {
        let tolerance = resolve_tolerance(self.tolerance, other.tolerance, None);
        are_equal(self.radius, other.radius, tolerance)
            && are_equal(self.azimuth.radians(), other.azimuth.radians(), tolerance)
    }

    /// Converts to Cartesian form about the origin.
    #[must_use]
    pub fn to_cartesian(&self) -> CartesianCoordinate {
        CartesianCoordinate::with_tolerance(
            self.radius * self.azimuth.radians().cos(),
            self.radius * self.azimuth.radians().sin(),
            self.tolerance,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn cartesian_conversion() {
        let polar = PolarCoordinate::new(2.0, Angle::from_radians(FRAC_PI_2));
        let cartesian = polar.to_cartesian();
        assert!(cartesian.is_equal_to(&CartesianCoordinate::new(0.0, 2.0)));
    }

    #[test]
    fn equality_compares_radius_and_azimuth() {
        let a = PolarCoordinate::new(2.0, Angle::from_radians(1.0));
        let b = PolarCoordinate::new(2.0 + 1e-9, Angle::from_radians(1.0));
        let c = PolarCoordinate::new(2.0, Angle::from_radians(1.5));
        assert!(a.is_equal_to(&b));
        assert!(!a.is_equal_to(&c));
    }
}
