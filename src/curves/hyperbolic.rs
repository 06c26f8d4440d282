use std::sync::{Arc, OnceLock};

use crate::coordinates::{Angle, CartesianCoordinate};
use crate::error::{GeometryError, Result};
use crate::numerics::{are_equal, is_greater_than_or_equal_to, resolve_tolerance};
use crate::parametrics::components::{SecantParametric, TangentParametric};
use crate::parametrics::CartesianParametricEquation;

use super::conic::{self, ConicSection};
use super::range::CurveRange;

/// The right branch of a hyperbola `x^2/a^2 - y^2/b^2 = 1` in the
/// focus-directrix model.
///
/// The focal axis points from the major vertex toward its focus, away
/// from the center; the local origin (the center) therefore sits the
/// semi-major distance `a` behind the vertex.
#[derive(Debug, Clone)]
pub struct HyperbolicCurve {
    section: ConicSection,
    equation: OnceLock<CartesianParametricEquation>,
    range: OnceLock<CurveRange>,
}

impl HyperbolicCurve {
    /// Creates a hyperbola from its major vertex, the nearer focus, and
    /// the semi-major distance `a`. The focal distance follows as
    /// `c = a + d` with `d` the vertex-to-focus gap.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] when `a` is not positive
    /// or the vertex and focus coincide.
    pub fn new(
        vertex_major: CartesianCoordinate,
        focus: CartesianCoordinate,
        a: f64,
    ) -> Result<Self> {
        if a <= 0.0 {
            return Err(GeometryError::InvalidArgument(
                "the semi-major distance of a hyperbola must be positive".into(),
            ));
        }
        let section = ConicSection::from_vertex_and_focus(vertex_major, focus, a)?;
        Ok(Self {
            section,
            equation: OnceLock::new(),
            range: OnceLock::new(),
        })
    }

    /// Creates a hyperbola from its major vertex, the focal-axis rotation,
    /// the semi-major distance `a`, and the vertex-to-focus gap.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] when `a` is not positive
    /// or the vertex-to-focus gap is not positive.
    pub fn from_rotation(
        vertex_major: CartesianCoordinate,
        rotation: Angle,
        a: f64,
        distance_from_vertex_major_to_focus: f64,
    ) -> Result<Self> {
        if a <= 0.0 {
            return Err(GeometryError::InvalidArgument(
                "the semi-major distance of a hyperbola must be positive".into(),
            ));
        }
        let section = ConicSection::from_rotation(
            vertex_major,
            rotation,
            a,
            distance_from_vertex_major_to_focus,
        )?;
        Ok(Self {
            section,
            equation: OnceLock::new(),
            range: OnceLock::new(),
        })
    }

    /// Returns the shared conic backing state.
    #[must_use]
    pub fn section(&self) -> &ConicSection {
        &self.section
    }

    /// Returns the semi-major distance `a`.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.section.distance_from_vertex_major_to_local_origin()
    }

    /// Returns the semi-minor distance `b = sqrt(c^2 - a^2)`, derived on
    /// access from the recomputed focal distance.
    #[must_use]
    pub fn b(&self) -> f64 {
        let a = self.a();
        let c = self.distance_from_focus_to_local_origin();
        (c * c - a * a).abs().sqrt()
    }

    /// Returns the tolerance used in comparisons involving this curve.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.section.tolerance()
    }

    /// Returns the local origin (the center), the semi-major distance
    /// behind the vertex along the focal axis.
    #[must_use]
    pub fn local_origin(&self) -> CartesianCoordinate {
        self.section.point_along_axis(-self.a())
    }

    /// Returns the focal distance `c`, recomputed from the backing
    /// geometry rather than read from a stored copy.
    #[must_use]
    pub fn distance_from_focus_to_local_origin(&self) -> f64 {
        self.section.focus().distance_to(&self.local_origin())
    }

    /// Returns the eccentricity `e = c / a`, greater than 1 for every
    /// hyperbola.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] for a degenerate zero
    /// semi-major distance.
    pub fn eccentricity(&self) -> Result<f64> {
        conic::eccentricity(self.distance_from_focus_to_local_origin(), self.a())
    }

    /// Returns the semi-latus rectum `b^2 / a`.
    #[must_use]
    pub fn semilatus_rectum_distance(&self) -> f64 {
        let b = self.b();
        b * b / self.a()
    }

    /// Returns the distance from the focus to the directrix,
    /// `(c^2 - a^2) / c`.
    #[must_use]
    pub fn distance_from_focus_to_directrix(&self) -> f64 {
        conic::focus_to_directrix_distance(
            self.a(),
            self.distance_from_focus_to_local_origin(),
            self.tolerance(),
        )
    }

    /// Returns the foot of the directrix on the focal axis, between the
    /// center and the major vertex.
    #[must_use]
    pub fn coordinate_of_directrix(&self) -> CartesianCoordinate {
        conic::point_along_rotation(
            &self.section.focus(),
            &self.section.rotation(),
            -self.distance_from_focus_to_directrix(),
        )
    }

    /// Returns the second focus, mirrored through the center onto the
    /// conjugate branch.
    #[must_use]
    pub fn focus_secondary(&self) -> CartesianCoordinate {
        let offset = -self.a() - self.distance_from_focus_to_local_origin();
        self.section.point_along_axis(offset)
    }

    /// Returns the conjugate-axis endpoints, straddling the center
    /// perpendicular to the focal axis at the semi-minor distance.
    #[must_use]
    pub fn vertices_minor(&self) -> (CartesianCoordinate, CartesianCoordinate) {
        conic::perpendicular_offsets(&self.local_origin(), &self.section.rotation(), self.b())
    }

    /// Returns the focus-relative radius at `angle` from the right focus.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] for a degenerate zero
    /// semi-major distance.
    pub fn radius_about_focus_right(&self, angle: &Angle) -> Result<f64> {
        Ok(conic::radius_about_focus_right(
            self.semilatus_rectum_distance(),
            self.eccentricity()?,
            angle,
        ))
    }

    /// Returns the focus-relative radius measured from the left:
    /// `radius_left(angle) = radius_right(pi - angle)`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] for a degenerate zero
    /// semi-major distance.
    pub fn radius_about_focus_left(&self, angle: &Angle) -> Result<f64> {
        Ok(conic::radius_about_focus_left(
            self.semilatus_rectum_distance(),
            self.eccentricity()?,
            angle,
        ))
    }

    /// Solves `x = a * sqrt(1 + (y/b)^2)` in the local frame; every `y`
    /// is reachable on a hyperbola. The positive branch is returned.
    #[must_use]
    pub fn x_at_y(&self, y: f64) -> f64 {
        let ratio = y / self.b();
        self.a() * (1.0 + ratio * ratio).sqrt()
    }

    /// Solves `y = b * sqrt((x/a)^2 - 1)` in the local frame, returning
    /// the positive branch; mirror the result for the negative branch.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::OutOfRange`] when `|x|` falls inside the
    /// semi-major distance, between the branches.
    pub fn y_at_x(&self, x: f64) -> Result<f64> {
        let a = self.a();
        if !is_greater_than_or_equal_to(x.abs(), a, self.tolerance()) {
            return Err(GeometryError::OutOfRange {
                parameter: "x",
                value: x,
                reason: format!("no hyperbola point exists inside |x| < {a}"),
            });
        }
        let ratio = x / a;
        Ok(self.b() * (ratio * ratio - 1.0).max(0.0).sqrt())
    }

    /// Returns whether the coordinate satisfies
    /// `(x/a)^2 - (y/b)^2 = 1` in the local frame, within the resolved
    /// tolerance of the pair.
    #[must_use]
    pub fn is_intersecting_coordinate(&self, coordinate: &CartesianCoordinate) -> bool {
        let tolerance = resolve_tolerance(self.tolerance(), coordinate.tolerance(), None);
        let local = self.section.to_local(&self.local_origin(), coordinate);
        let x_ratio = local.x() / self.a();
        let y_ratio = local.y() / self.b();
        are_equal(x_ratio * x_ratio - y_ratio * y_ratio, 1.0, tolerance)
    }

    /// Returns the lazily-built local-frame parametric equation
    /// `{a sec(t), b tan(t)}`, which traces the right branch for
    /// `t` in `(-pi/2, pi/2)`.
    pub fn parametric_equation(&self) -> &CartesianParametricEquation {
        self.equation.get_or_init(|| {
            CartesianParametricEquation::new(
                Arc::new(SecantParametric::new(self.a())),
                Arc::new(TangentParametric::new(self.b())),
            )
        })
    }

    /// Returns the lazily-built default range, spanning the latus rectum
    /// through the focus.
    pub fn default_range(&self) -> &CurveRange {
        self.range.get_or_init(|| {
            let (start, end) = conic::perpendicular_offsets(
                &self.section.focus(),
                &self.section.rotation(),
                self.semilatus_rectum_distance(),
            );
            CurveRange::between_trusted(start, end)
        })
    }
}
