use std::sync::{Arc, OnceLock};

use crate::coordinates::{Angle, CartesianCoordinate};
use crate::error::{GeometryError, Result};
use crate::numerics::{are_equal, is_greater_than_or_equal_to, resolve_tolerance};
use crate::parametrics::components::{ParabolicAxialParametric, ParabolicTransverseParametric};
use crate::parametrics::CartesianParametricEquation;

use super::conic::{self, ConicSection};
use super::range::CurveRange;

/// A parabola `y^2 = 4ax` in the focus-directrix model.
///
/// The local origin coincides with the vertex, so the stored major
/// distance doubles as the focal distance `a`; the curve opens along the
/// focal axis.
#[derive(Debug, Clone)]
pub struct ParabolicCurve {
    section: ConicSection,
    equation: OnceLock<CartesianParametricEquation>,
    range: OnceLock<CurveRange>,
}

impl ParabolicCurve {
    /// Creates a parabola from its vertex and focus.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] when the vertex and
    /// focus coincide.
    pub fn new(vertex_major: CartesianCoordinate, focus: CartesianCoordinate) -> Result<Self> {
        let a = vertex_major.distance_to(&focus);
        let section = ConicSection::from_vertex_and_focus(vertex_major, focus, a)?;
        Ok(Self {
            section,
            equation: OnceLock::new(),
            range: OnceLock::new(),
        })
    }

    /// Creates a parabola from its vertex, the focal-axis rotation, and
    /// the focal distance `a`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] when `a` is not positive.
    pub fn from_rotation(
        vertex_major: CartesianCoordinate,
        rotation: Angle,
        a: f64,
    ) -> Result<Self> {
        let section = ConicSection::from_rotation(vertex_major, rotation, a, a)?;
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

    /// Returns the focal distance `a`.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.section.distance_from_vertex_major_to_local_origin()
    }

    /// Returns the tolerance used in comparisons involving this curve.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.section.tolerance()
    }

    /// Returns the local origin, which is the vertex itself.
    #[must_use]
    pub fn local_origin(&self) -> CartesianCoordinate {
        self.section.vertex_major()
    }

    /// Returns the focus-to-origin distance `c`, recomputed from the
    /// backing geometry. For a parabola this equals `a`.
    #[must_use]
    pub fn distance_from_focus_to_local_origin(&self) -> f64 {
        self.section.focus().distance_to(&self.local_origin())
    }

    /// Returns the eccentricity, which is 1 for every parabola.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] for a degenerate zero focal
    /// distance.
    pub fn eccentricity(&self) -> Result<f64> {
        conic::eccentricity(self.distance_from_focus_to_local_origin(), self.a())
    }

    /// Returns the semi-latus rectum `2a`.
    #[must_use]
    pub fn semilatus_rectum_distance(&self) -> f64 {
        2.0 * self.a()
    }

    /// Returns the distance from the focus to the directrix, `2a`.
    ///
    /// The central-conic formula degenerates here (the vertex is the
    /// local origin), so the parabola supplies its own closed form.
    #[must_use]
    pub fn distance_from_focus_to_directrix(&self) -> f64 {
        2.0 * self.a()
    }

    /// Returns the foot of the directrix on the focal axis, the focal
    /// distance behind the vertex.
    #[must_use]
    pub fn coordinate_of_directrix(&self) -> CartesianCoordinate {
        conic::point_along_rotation(
            &self.section.focus(),
            &self.section.rotation(),
            -self.distance_from_focus_to_directrix(),
        )
    }

    /// Returns the latus-rectum endpoints: the curve points straddling the
    /// focus perpendicular to the axis, at the semi-latus rectum distance.
    #[must_use]
    pub fn vertices_minor(&self) -> (CartesianCoordinate, CartesianCoordinate) {
        conic::perpendicular_offsets(
            &self.section.focus(),
            &self.section.rotation(),
            self.semilatus_rectum_distance(),
        )
    }

    /// Returns the focus-relative radius at `angle` from the focus.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] for a degenerate zero focal
    /// distance.
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
    /// Returns [`GeometryError::DivideByZero`] for a degenerate zero focal
    /// distance.
    pub fn radius_about_focus_left(&self, angle: &Angle) -> Result<f64> {
        Ok(conic::radius_about_focus_left(
            self.semilatus_rectum_distance(),
            self.eccentricity()?,
            angle,
        ))
    }

    /// Solves `x = y^2 / (4a)` in the local frame.
    #[must_use]
    pub fn x_at_y(&self, y: f64) -> f64 {
        y * y / (4.0 * self.a())
    }

    /// Solves `y = 2 * sqrt(a * x)` in the local frame, returning the
    /// positive branch; mirror the result for the negative branch.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::OutOfRange`] when `x` is negative, behind
    /// the vertex.
    pub fn y_at_x(&self, x: f64) -> Result<f64> {
        if !is_greater_than_or_equal_to(x, 0.0, self.tolerance()) {
            return Err(GeometryError::OutOfRange {
                parameter: "x",
                value: x,
                reason: "the parabola opens along positive x".into(),
            });
        }
        Ok(2.0 * (self.a() * x.max(0.0)).sqrt())
    }

    /// Returns whether the coordinate lies on the parabola, within the
    /// resolved tolerance of the pair.
    #[must_use]
    pub fn is_intersecting_coordinate(&self, coordinate: &CartesianCoordinate) -> bool {
        let tolerance = resolve_tolerance(self.tolerance(), coordinate.tolerance(), None);
        let local = self.section.to_local(&self.local_origin(), coordinate);
        are_equal(local.y() * local.y(), 4.0 * self.a() * local.x(), tolerance)
    }

    /// Returns the lazily-built local-frame parametric equation
    /// `{a t^2, 2 a t}`.
    pub fn parametric_equation(&self) -> &CartesianParametricEquation {
        self.equation.get_or_init(|| {
            CartesianParametricEquation::new(
                Arc::new(ParabolicAxialParametric::new(self.a())),
                Arc::new(ParabolicTransverseParametric::new(self.a())),
            )
        })
    }

    /// Returns the lazily-built default range, spanning the latus rectum.
    pub fn default_range(&self) -> &CurveRange {
        self.range.get_or_init(|| {
            let (start, end) = self.vertices_minor();
            CurveRange::between_trusted(start, end)
        })
    }
}
