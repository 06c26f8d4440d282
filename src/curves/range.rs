use crate::coordinates::{Angle, AngularOffset, CartesianCoordinate};
use crate::error::{GeometryError, Result};
use crate::numerics::resolve_tolerance;

use super::Curve;

/// One verified end of a bounded stretch of curve.
///
/// A limit is only ever built through a curve: either the coordinate is
/// checked against the curve's membership test, or it is solved from one
/// axis value and trusted because the curve produced it.
#[derive(Debug, Clone, Copy)]
pub struct CurveLimit {
    limit: CartesianCoordinate,
}

impl CurveLimit {
    /// Creates a limit at a coordinate claimed to lie on the curve.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CoordinateNotOnTarget`] when the curve's
    /// membership test rejects the coordinate.
    pub fn at_coordinate(curve: &Curve, coordinate: CartesianCoordinate) -> Result<Self> {
        if !curve.is_intersecting_coordinate(&coordinate) {
            return Err(GeometryError::CoordinateNotOnTarget {
                x: coordinate.x(),
                y: coordinate.y(),
                target: curve.kind_name(),
            });
        }
        Ok(Self { limit: coordinate })
    }

    /// Creates a limit by solving the curve at the given `x`, in the
    /// curve's natural frame. The solved coordinate is trusted.
    ///
    /// # Errors
    ///
    /// Propagates the curve's solve errors: the value may be outside the
    /// curve's domain, or the curve may not support axis solves.
    pub fn by_x(curve: &Curve, x: f64) -> Result<Self> {
        let y = curve.y_at_x(x)?;
        Ok(Self {
            limit: CartesianCoordinate::with_tolerance(x, y, curve.tolerance()),
        })
    }

    /// Creates a limit by solving the curve at the given `y`, in the
    /// curve's natural frame. The solved coordinate is trusted.
    ///
    /// # Errors
    ///
    /// Propagates the curve's solve errors: the value may be outside the
    /// curve's domain, or the curve may not support axis solves.
    pub fn by_y(curve: &Curve, y: f64) -> Result<Self> {
        let x = curve.x_at_y(y)?;
        Ok(Self {
            limit: CartesianCoordinate::with_tolerance(x, y, curve.tolerance()),
        })
    }

    /// Creates a limit from a coordinate the caller vouches for, used by
    /// the curves themselves when building their default ranges.
    #[must_use]
    pub(crate) fn trusted(limit: CartesianCoordinate) -> Self {
        Self { limit }
    }

    /// Returns the limiting coordinate.
    #[must_use]
    pub fn limit(&self) -> CartesianCoordinate {
        self.limit
    }
}

/// A bounded stretch of curve between two limits.
///
/// The range stores only its two end coordinates; measures that need the
/// shape between them (arc length along a conic, say) belong to the curve,
/// not the range.
#[derive(Debug, Clone, Copy)]
pub struct CurveRange {
    start: CurveLimit,
    end: CurveLimit,
    tolerance: f64,
}

impl CurveRange {
    /// Creates a range whose ends are both verified against the curve.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CoordinateNotOnTarget`] when either
    /// coordinate fails the curve's membership test.
    pub fn new(
        curve: &Curve,
        start: CartesianCoordinate,
        end: CartesianCoordinate,
    ) -> Result<Self> {
        Ok(Self::between(
            CurveLimit::at_coordinate(curve, start)?,
            CurveLimit::at_coordinate(curve, end)?,
        ))
    }

    /// Creates a range between two already-built limits.
    #[must_use]
    pub fn between(start: CurveLimit, end: CurveLimit) -> Self {
        let tolerance = resolve_tolerance(
            start.limit().tolerance(),
            end.limit().tolerance(),
            None,
        );
        Self {
            start,
            end,
            tolerance,
        }
    }

    /// Creates a range from two coordinates the caller vouches for, used
    /// by the curves themselves when building their default ranges.
    #[must_use]
    pub(crate) fn between_trusted(start: CartesianCoordinate, end: CartesianCoordinate) -> Self {
        Self::between(CurveLimit::trusted(start), CurveLimit::trusted(end))
    }

    /// Returns the starting limit.
    #[must_use]
    pub fn start(&self) -> &CurveLimit {
        &self.start
    }

    /// Returns the ending limit.
    #[must_use]
    pub fn end(&self) -> &CurveLimit {
        &self.end
    }

    /// Returns the tolerance used in comparisons involving this range.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the straight-line distance between the two limits.
    #[must_use]
    pub fn length_linear(&self) -> f64 {
        self.start.limit().distance_to(&self.end.limit())
    }

    /// Returns the unsigned x-extent between the two limits.
    #[must_use]
    pub fn length_x(&self) -> f64 {
        (self.end.limit().x() - self.start.limit().x()).abs()
    }

    /// Returns the unsigned y-extent between the two limits.
    #[must_use]
    pub fn length_y(&self) -> f64 {
        (self.end.limit().y() - self.start.limit().y()).abs()
    }

    /// Returns the unsigned difference between the limits' polar radii
    /// about the origin.
    #[must_use]
    pub fn radial_extent(&self) -> f64 {
        (self.end.limit().to_polar().radius() - self.start.limit().to_polar().radius()).abs()
    }

    /// Returns the azimuthal sweep between the limits' polar azimuths
    /// about the origin.
    #[must_use]
    pub fn azimuthal_extent(&self) -> AngularOffset {
        self.start
            .limit()
            .to_polar()
            .azimuth()
            .offset_to(self.end.limit().to_polar().azimuth())
    }

    /// Returns the rotation of the straight chord from start to end.
    #[must_use]
    pub fn rotation(&self) -> Angle {
        self.start.limit().offset_to(self.end.limit()).slope_angle()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_4;

    use super::super::LinearCurve;
    use super::*;

    const TOL: f64 = 1e-10;

    fn c(x: f64, y: f64) -> CartesianCoordinate {
        CartesianCoordinate::new(x, y)
    }

    fn diagonal() -> Curve {
        // y = x through the origin.
        Curve::Linear(LinearCurve::new(c(0.0, 0.0), c(1.0, 1.0)))
    }

    // ── limits ──

    #[test]
    fn limit_verifies_membership() {
        let curve = diagonal();
        let on = CurveLimit::at_coordinate(&curve, c(3.0, 3.0)).unwrap();
        assert!(on.limit().is_equal_to(&c(3.0, 3.0)));
        assert!(matches!(
            CurveLimit::at_coordinate(&curve, c(3.0, 4.0)),
            Err(GeometryError::CoordinateNotOnTarget { .. })
        ));
    }

    #[test]
    fn limit_solved_from_one_axis_is_trusted() {
        let curve = diagonal();
        let by_x = CurveLimit::by_x(&curve, 2.0).unwrap();
        assert!(by_x.limit().is_equal_to(&c(2.0, 2.0)));
        let by_y = CurveLimit::by_y(&curve, -1.5).unwrap();
        assert!(by_y.limit().is_equal_to(&c(-1.5, -1.5)));
    }

    #[test]
    fn limit_solve_propagates_curve_errors() {
        // A horizontal line has no single x for a given y.
        let horizontal = Curve::Linear(LinearCurve::new(c(0.0, 2.0), c(4.0, 2.0)));
        assert!(CurveLimit::by_y(&horizontal, 2.0).is_err());
    }

    // ── ranges ──

    #[test]
    fn range_construction_verifies_both_ends() {
        let curve = diagonal();
        let range = CurveRange::new(&curve, c(0.0, 0.0), c(3.0, 3.0)).unwrap();
        assert!(range.start().limit().is_equal_to(&c(0.0, 0.0)));
        assert!(range.end().limit().is_equal_to(&c(3.0, 3.0)));
        assert!(CurveRange::new(&curve, c(0.0, 0.0), c(3.0, 4.0)).is_err());
    }

    #[test]
    fn extent_measures() {
        let curve = diagonal();
        let range = CurveRange::new(&curve, c(1.0, 1.0), c(4.0, 4.0)).unwrap();
        assert!((range.length_linear() - 18.0_f64.sqrt()).abs() < TOL);
        assert!((range.length_x() - 3.0).abs() < TOL);
        assert!((range.length_y() - 3.0).abs() < TOL);
        assert!((range.rotation().radians() - FRAC_PI_4).abs() < TOL);
    }

    #[test]
    fn polar_extents_about_the_origin() {
        let curve = diagonal();
        let range = CurveRange::new(&curve, c(1.0, 1.0), c(2.0, 2.0)).unwrap();
        assert!((range.radial_extent() - 2.0_f64.sqrt()).abs() < TOL);
        // Both ends share the same azimuth, so the sweep is zero.
        assert!(range.azimuthal_extent().delta().radians().abs() < TOL);
    }
}
