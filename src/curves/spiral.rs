use std::f64::consts::{FRAC_PI_2, TAU};
use std::sync::{Arc, OnceLock};

use crate::coordinates::{Angle, PolarCoordinate};
use crate::error::{GeometryError, Result};
use crate::numerics::{are_equal, is_zero_sign, resolve_tolerance, GEOMETRIC_TOLERANCE};
use crate::parametrics::components::{ExponentialSpiralParametric, IdentityParametric};
use crate::parametrics::PolarParametricEquation;

use super::range::CurveRange;

/// A logarithmic spiral `r = a * e^(b * theta)`, centered on the origin of
/// its polar frame.
///
/// `a` is the radius where the spiral crosses the polar axis at zero
/// rotation; `b` controls how fast the radius grows per unit of rotation.
/// A zero `b` degenerates to the circle of radius `a`.
#[derive(Debug, Clone)]
pub struct LogarithmicSpiralCurve {
    radius_at_origin: f64,
    radius_change_with_rotation: f64,
    tolerance: f64,
    equation: OnceLock<PolarParametricEquation>,
    range: OnceLock<CurveRange>,
}

impl LogarithmicSpiralCurve {
    /// Creates a spiral from its axis-crossing radius `a` and growth
    /// rate `b`, using the default comparison tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] when `a` is not positive.
    pub fn new(radius_at_origin: f64, radius_change_with_rotation: f64) -> Result<Self> {
        Self::with_tolerance(
            radius_at_origin,
            radius_change_with_rotation,
            GEOMETRIC_TOLERANCE,
        )
    }

    /// Creates a spiral with an explicit comparison tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] when `a` is not positive.
    pub fn with_tolerance(
        radius_at_origin: f64,
        radius_change_with_rotation: f64,
        tolerance: f64,
    ) -> Result<Self> {
        if radius_at_origin <= 0.0 {
            return Err(GeometryError::InvalidArgument(
                "the axis-crossing radius of a spiral must be positive".into(),
            ));
        }
        Ok(Self {
            radius_at_origin,
            radius_change_with_rotation,
            tolerance,
            equation: OnceLock::new(),
            range: OnceLock::new(),
        })
    }

    /// Returns the radius `a` where the spiral crosses the polar axis.
    #[must_use]
    pub fn radius_at_origin(&self) -> f64 {
        self.radius_at_origin
    }

    /// Returns the growth rate `b` of the radius per unit rotation.
    #[must_use]
    pub fn radius_change_with_rotation(&self) -> f64 {
        self.radius_change_with_rotation
    }

    /// Returns the tolerance used in comparisons involving this curve.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Evaluates the radius `a * e^(b * theta)` at the given rotation.
    ///
    /// The raw (unwrapped) measure of the angle is used, so successive
    /// turns keep growing the radius.
    #[must_use]
    pub fn radius_at_angle(&self, angle: &Angle) -> f64 {
        self.radius_at_origin
            * (self.radius_change_with_rotation * angle.radians_raw()).exp()
    }

    /// Returns the tangential angle of the spiral at the given rotation:
    /// the polar tangential angle is constant, so the world tangent
    /// direction advances one-for-one with the rotation.
    #[must_use]
    pub fn tangential_angle(&self, angle: &Angle) -> Angle {
        Angle::from_radians(angle.radians_raw())
    }

    /// Returns the constant angle between the radius vector and the
    /// tangent, `atan(1 / b)`.
    ///
    /// A zero growth rate makes the spiral a circle, whose tangent is
    /// perpendicular to the radius; that case is answered directly rather
    /// than divided through.
    #[must_use]
    pub fn polar_tangential_angle(&self) -> Angle {
        if is_zero_sign(self.radius_change_with_rotation, self.tolerance) {
            return Angle::from_radians(FRAC_PI_2);
        }
        Angle::from_radians((1.0 / self.radius_change_with_rotation).atan())
    }

    /// Evaluates the curvature `e^(-b * theta) / (a * sqrt(1 + b^2))` at
    /// the given rotation.
    #[must_use]
    pub fn curvature_at_angle(&self, angle: &Angle) -> f64 {
        let b = self.radius_change_with_rotation;
        (-b * angle.radians_raw()).exp() / (self.radius_at_origin * (1.0 + b * b).sqrt())
    }

    /// Evaluates the spiral into a polar coordinate at the given rotation.
    #[must_use]
    pub fn coordinate_at_angle(&self, angle: &Angle) -> PolarCoordinate {
        PolarCoordinate::with_tolerance(self.radius_at_angle(angle), *angle, self.tolerance)
    }

    /// Returns whether the polar coordinate lies on the spiral.
    ///
    /// The coordinate's wrapped azimuth reaches the spiral on infinitely
    /// many turns; membership holds when some whole number of turns `k`
    /// satisfies `r = a * e^(b * (theta + k * tau))` within the resolved
    /// tolerance of the pair.
    #[must_use]
    pub fn is_intersecting_coordinate(&self, coordinate: &PolarCoordinate) -> bool {
        let tolerance = resolve_tolerance(self.tolerance, coordinate.tolerance(), None);
        if coordinate.radius() <= 0.0 {
            return false;
        }
        let b = self.radius_change_with_rotation;
        if is_zero_sign(b, tolerance) {
            return are_equal(coordinate.radius(), self.radius_at_origin, tolerance);
        }
        let turns = ((coordinate.radius() / self.radius_at_origin).ln() / b
            - coordinate.azimuth().radians())
            / TAU;
        let nearest = turns.round();
        let radius_at_nearest = self.radius_at_angle(&Angle::from_radians(
            coordinate.azimuth().radians() + nearest * TAU,
        ));
        are_equal(coordinate.radius(), radius_at_nearest, tolerance)
    }

    /// Returns the lazily-built polar parametric equation
    /// `{a e^(b t), t}`.
    pub fn parametric_equation(&self) -> &PolarParametricEquation {
        self.equation.get_or_init(|| {
            PolarParametricEquation::new(
                Arc::new(ExponentialSpiralParametric::new(
                    self.radius_at_origin,
                    self.radius_change_with_rotation,
                )),
                Arc::new(IdentityParametric),
            )
        })
    }

    /// Returns the lazily-built default range, spanning one full turn from
    /// the axis crossing.
    pub fn default_range(&self) -> &CurveRange {
        self.range.get_or_init(|| {
            let start = self
                .coordinate_at_angle(&Angle::from_radians(0.0))
                .to_cartesian();
            let end = self
                .coordinate_at_angle(&Angle::from_radians(TAU))
                .to_cartesian();
            CurveRange::between_trusted(start, end)
        })
    }
}
