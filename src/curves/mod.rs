//! The analytic curve kinds and their shared dispatch surface.
//!
//! [`Curve`] is a closed sum over the five kinds; operations that only
//! some kinds support report [`GeometryError::UnsupportedCapability`]
//! instead of being absent, so callers can hold a mixed collection of
//! curves behind one type.

mod conic;
mod elliptical;
mod hyperbolic;
mod linear;
mod parabolic;
mod range;
mod spiral;

pub use conic::ConicSection;
pub use elliptical::EllipticalCurve;
pub use hyperbolic::HyperbolicCurve;
pub use linear::LinearCurve;
pub use parabolic::ParabolicCurve;
pub use range::{CurveLimit, CurveRange};
pub use spiral::LogarithmicSpiralCurve;

use crate::coordinates::{Angle, CartesianCoordinate};
use crate::error::{GeometryError, Result};

/// Any of the five analytic curve kinds.
#[derive(Debug, Clone)]
pub enum Curve {
    Linear(LinearCurve),
    Elliptical(EllipticalCurve),
    Parabolic(ParabolicCurve),
    Hyperbolic(HyperbolicCurve),
    LogarithmicSpiral(LogarithmicSpiralCurve),
}

impl Curve {
    /// Returns a short name for the curve kind, used in diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Linear(_) => "linear",
            Self::Elliptical(_) => "elliptical",
            Self::Parabolic(_) => "parabolic",
            Self::Hyperbolic(_) => "hyperbolic",
            Self::LogarithmicSpiral(_) => "logarithmic spiral",
        }
    }

    /// Returns the tolerance used in comparisons involving this curve.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        match self {
            Self::Linear(curve) => curve.tolerance(),
            Self::Elliptical(curve) => curve.tolerance(),
            Self::Parabolic(curve) => curve.tolerance(),
            Self::Hyperbolic(curve) => curve.tolerance(),
            Self::LogarithmicSpiral(curve) => curve.tolerance(),
        }
    }

    /// Returns whether the Cartesian coordinate lies on the curve.
    ///
    /// The spiral lives in a polar frame about the origin; the coordinate
    /// is converted before its membership test.
    #[must_use]
    pub fn is_intersecting_coordinate(&self, coordinate: &CartesianCoordinate) -> bool {
        match self {
            Self::Linear(curve) => curve.is_intersecting_coordinate(coordinate),
            Self::Elliptical(curve) => curve.is_intersecting_coordinate(coordinate),
            Self::Parabolic(curve) => curve.is_intersecting_coordinate(coordinate),
            Self::Hyperbolic(curve) => curve.is_intersecting_coordinate(coordinate),
            Self::LogarithmicSpiral(curve) => {
                curve.is_intersecting_coordinate(&coordinate.to_polar())
            }
        }
    }

    /// Solves the curve for x at the given y, in the curve's natural
    /// frame.
    ///
    /// # Errors
    ///
    /// Propagates the kind's own solve errors, and returns
    /// [`GeometryError::UnsupportedCapability`] for the spiral, which has
    /// no single-valued Cartesian form.
    pub fn x_at_y(&self, y: f64) -> Result<f64> {
        match self {
            Self::Linear(curve) => curve.x_at_y(y),
            Self::Elliptical(curve) => curve.x_at_y(y),
            Self::Parabolic(curve) => Ok(curve.x_at_y(y)),
            Self::Hyperbolic(curve) => Ok(curve.x_at_y(y)),
            Self::LogarithmicSpiral(_) => Err(self.unsupported("solving x at y")),
        }
    }

    /// Solves the curve for y at the given x, in the curve's natural
    /// frame.
    ///
    /// # Errors
    ///
    /// Propagates the kind's own solve errors, and returns
    /// [`GeometryError::UnsupportedCapability`] for the spiral.
    pub fn y_at_x(&self, x: f64) -> Result<f64> {
        match self {
            Self::Linear(curve) => curve.y_at_x(x),
            Self::Elliptical(curve) => curve.y_at_x(x),
            Self::Parabolic(curve) => curve.y_at_x(x),
            Self::Hyperbolic(curve) => curve.y_at_x(x),
            Self::LogarithmicSpiral(_) => Err(self.unsupported("solving y at x")),
        }
    }

    /// Evaluates the x of the curve's Cartesian parametric equation at
    /// the given rotation about the curve's local origin.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::UnsupportedCapability`] for the spiral,
    /// whose parametric form is polar.
    pub fn x_by_rotation_about_origin(&self, rotation: &Angle) -> Result<f64> {
        match self {
            Self::Linear(curve) => Ok(curve.parametric_equation().x_at(rotation.radians_raw())),
            Self::Elliptical(curve) => {
                Ok(curve.parametric_equation().x_at(rotation.radians_raw()))
            }
            Self::Parabolic(curve) => Ok(curve.parametric_equation().x_at(rotation.radians_raw())),
            Self::Hyperbolic(curve) => {
                Ok(curve.parametric_equation().x_at(rotation.radians_raw()))
            }
            Self::LogarithmicSpiral(_) => {
                Err(self.unsupported("evaluating x by rotation about the origin"))
            }
        }
    }

    /// Evaluates the y of the curve's Cartesian parametric equation at
    /// the given rotation about the curve's local origin.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::UnsupportedCapability`] for the spiral.
    pub fn y_by_rotation_about_origin(&self, rotation: &Angle) -> Result<f64> {
        match self {
            Self::Linear(curve) => Ok(curve.parametric_equation().y_at(rotation.radians_raw())),
            Self::Elliptical(curve) => {
                Ok(curve.parametric_equation().y_at(rotation.radians_raw()))
            }
            Self::Parabolic(curve) => Ok(curve.parametric_equation().y_at(rotation.radians_raw())),
            Self::Hyperbolic(curve) => {
                Ok(curve.parametric_equation().y_at(rotation.radians_raw()))
            }
            Self::LogarithmicSpiral(_) => {
                Err(self.unsupported("evaluating y by rotation about the origin"))
            }
        }
    }

    /// Evaluates both parametric axes into a coordinate at the given
    /// rotation about the curve's local origin.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::UnsupportedCapability`] for the spiral.
    pub fn coordinate_by_rotation_about_origin(
        &self,
        rotation: &Angle,
    ) -> Result<CartesianCoordinate> {
        Ok(CartesianCoordinate::with_tolerance(
            self.x_by_rotation_about_origin(rotation)?,
            self.y_by_rotation_about_origin(rotation)?,
            self.tolerance(),
        ))
    }

    /// Returns the curve's default range: the kind-specific pair of
    /// coordinates that bound it when no explicit range is given.
    #[must_use]
    pub fn default_range(&self) -> CurveRange {
        match self {
            Self::Linear(curve) => CurveRange::between_trusted(curve.i(), curve.j()),
            Self::Elliptical(curve) => *curve.default_range(),
            Self::Parabolic(curve) => *curve.default_range(),
            Self::Hyperbolic(curve) => *curve.default_range(),
            Self::LogarithmicSpiral(curve) => *curve.default_range(),
        }
    }

    fn unsupported(&self, operation: &'static str) -> GeometryError {
        GeometryError::UnsupportedCapability {
            operation,
            curve: self.kind_name(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn c(x: f64, y: f64) -> CartesianCoordinate {
        CartesianCoordinate::new(x, y)
    }

    fn sample_curves() -> Vec<Curve> {
        vec![
            Curve::Linear(LinearCurve::new(c(0.0, 0.0), c(1.0, 1.0))),
            Curve::Elliptical(EllipticalCurve::new(c(5.0, 0.0), c(3.0, 0.0), 4.0).unwrap()),
            Curve::Parabolic(ParabolicCurve::new(c(0.0, 0.0), c(2.0, 0.0)).unwrap()),
            Curve::Hyperbolic(HyperbolicCurve::new(c(3.0, 0.0), c(5.0, 0.0), 3.0).unwrap()),
            Curve::LogarithmicSpiral(LogarithmicSpiralCurve::new(2.0, 0.5).unwrap()),
        ]
    }

    #[test]
    fn kind_names_are_distinct() {
        let curves = sample_curves();
        let mut names: Vec<_> = curves.iter().map(Curve::kind_name).collect();
        names.dedup();
        assert_eq!(names.len(), curves.len());
    }

    #[test]
    fn membership_dispatches_per_kind() {
        let curves = sample_curves();
        // One on-curve point per kind, in order.
        let on = [
            c(2.0, 2.0),
            c(0.0, 4.0),
            c(2.0, 4.0),
            c(3.0, 0.0),
            c(2.0, 0.0),
        ];
        for (curve, point) in curves.iter().zip(on) {
            assert!(
                curve.is_intersecting_coordinate(&point),
                "{}",
                curve.kind_name()
            );
        }
        for curve in &curves {
            assert!(!curve.is_intersecting_coordinate(&c(111.0, 17.3)));
        }
    }

    #[test]
    fn axis_solves_dispatch_and_report_unsupported() {
        let curves = sample_curves();
        assert!((curves[0].y_at_x(3.0).unwrap() - 3.0).abs() < TOL);
        assert!((curves[1].y_at_x(0.0).unwrap() - 4.0).abs() < TOL);
        assert!((curves[2].x_at_y(4.0).unwrap() - 2.0).abs() < TOL);
        assert!((curves[3].x_at_y(0.0).unwrap() - 3.0).abs() < TOL);
        assert!(matches!(
            curves[4].y_at_x(1.0),
            Err(GeometryError::UnsupportedCapability { .. })
        ));
        assert!(matches!(
            curves[4].x_at_y(1.0),
            Err(GeometryError::UnsupportedCapability { .. })
        ));
    }

    #[test]
    fn parametric_evaluation_through_the_dispatch() {
        let ellipse = Curve::Elliptical(
            EllipticalCurve::new(c(5.0, 0.0), c(3.0, 0.0), 4.0).unwrap(),
        );
        let at_zero = ellipse
            .coordinate_by_rotation_about_origin(&Angle::from_radians(0.0))
            .unwrap();
        assert!(at_zero.is_equal_to(&c(5.0, 0.0)));
        let quarter = ellipse
            .coordinate_by_rotation_about_origin(&Angle::from_radians(
                std::f64::consts::FRAC_PI_2,
            ))
            .unwrap();
        assert!(quarter.is_equal_to(&c(0.0, 4.0)));

        let spiral = Curve::LogarithmicSpiral(LogarithmicSpiralCurve::new(2.0, 0.5).unwrap());
        assert!(matches!(
            spiral.coordinate_by_rotation_about_origin(&Angle::from_radians(0.0)),
            Err(GeometryError::UnsupportedCapability { .. })
        ));
    }

    #[test]
    fn default_ranges_per_kind() {
        let line = Curve::Linear(LinearCurve::new(c(1.0, 1.0), c(4.0, 5.0)));
        let range = line.default_range();
        assert!(range.start().limit().is_equal_to(&c(1.0, 1.0)));
        assert!(range.end().limit().is_equal_to(&c(4.0, 5.0)));
        assert!((range.length_linear() - 5.0).abs() < TOL);

        // The closed ellipse starts and ends at its major vertex.
        let ellipse = Curve::Elliptical(
            EllipticalCurve::new(c(5.0, 0.0), c(3.0, 0.0), 4.0).unwrap(),
        );
        let range = ellipse.default_range();
        assert!(range.start().limit().is_equal_to(&c(5.0, 0.0)));
        assert!(range.end().limit().is_equal_to(&c(5.0, 0.0)));
        assert!(range.length_linear().abs() < TOL);
    }
}
