use std::f64::consts::FRAC_PI_2;
use std::sync::{Arc, OnceLock};

use crate::coordinates::{Angle, CartesianCoordinate};
use crate::error::{GeometryError, Result};
use crate::numerics::{are_equal, is_within_inclusive, resolve_tolerance};
use crate::parametrics::components::{CosineParametric, SineParametric};
use crate::parametrics::CartesianParametricEquation;

use super::conic::{self, ConicSection};
use super::range::CurveRange;

/// An ellipse in the focus-directrix model.
///
/// Backed by a [`ConicSection`] plus the minor-vertex distance `b`; the
/// local origin is the center, at distance `a` from the major vertex along
/// the focal axis.
#[derive(Debug, Clone)]
pub struct EllipticalCurve {
    section: ConicSection,
    distance_from_vertex_minor_to_major_axis: f64,
    equation: OnceLock<CartesianParametricEquation>,
    range: OnceLock<CurveRange>,
}

impl EllipticalCurve {
    /// Creates an ellipse from the major vertex, the focus, and the minor
    /// vertex distance `b`.
    ///
    /// The major distance follows as `a = (b^2 + d^2) / (2d)` with `d` the
    /// vertex-to-focus separation, which always yields `b <= a`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] when `b` is not positive
    /// or the vertex and focus coincide.
    pub fn new(
        vertex_major: CartesianCoordinate,
        focus: CartesianCoordinate,
        distance_from_vertex_minor_to_major_axis: f64,
    ) -> Result<Self> {
        if distance_from_vertex_minor_to_major_axis <= 0.0 {
            return Err(GeometryError::InvalidArgument(
                "minor vertex distance must be positive".into(),
            ));
        }
        let b = distance_from_vertex_minor_to_major_axis;
        let d = vertex_major.distance_to(&focus);
        if d == 0.0 {
            return Err(GeometryError::InvalidArgument(
                "the major vertex and focus must be distinct".into(),
            ));
        }
        let a = (b * b + d * d) / (2.0 * d);
        let section = ConicSection::from_vertex_and_focus(vertex_major, focus, a)?;
        Ok(Self {
            section,
            distance_from_vertex_minor_to_major_axis: b,
            equation: OnceLock::new(),
            range: OnceLock::new(),
        })
    }

    /// Creates an ellipse from the major vertex, the focal-axis rotation,
    /// the major distance `a`, and the vertex-to-focus separation.
    ///
    /// Yields state equivalent to [`Self::new`] for the derived focus.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] when the separation does
    /// not fit inside the major distance.
    pub fn from_rotation(
        vertex_major: CartesianCoordinate,
        rotation: Angle,
        a: f64,
        distance_from_vertex_major_to_focus: f64,
    ) -> Result<Self> {
        if a <= 0.0 {
            return Err(GeometryError::InvalidArgument(
                "major vertex distance must be positive".into(),
            ));
        }
        let c = a - distance_from_vertex_major_to_focus;
        if c < 0.0 {
            return Err(GeometryError::InvalidArgument(
                "the focus of an ellipse lies between the vertex and the center".into(),
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
            distance_from_vertex_minor_to_major_axis: (a * a - c * c).sqrt(),
            equation: OnceLock::new(),
            range: OnceLock::new(),
        })
    }

    /// Returns the shared conic backing state.
    #[must_use]
    pub fn section(&self) -> &ConicSection {
        &self.section
    }

    /// Returns the major distance `a`.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.section.distance_from_vertex_major_to_local_origin()
    }

    /// Returns the minor vertex distance `b`.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.distance_from_vertex_minor_to_major_axis
    }

    /// Returns the tolerance used in comparisons involving this curve.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.section.tolerance()
    }

    /// Returns the center of the ellipse.
    #[must_use]
    pub fn local_origin(&self) -> CartesianCoordinate {
        self.section.point_along_axis(self.a())
    }

    /// Returns the focus-to-center distance `c`, recomputed from the
    /// backing geometry.
    #[must_use]
    pub fn distance_from_focus_to_local_origin(&self) -> f64 {
        self.section.focus().distance_to(&self.local_origin())
    }

    /// Returns the eccentricity `c / a`, in `[0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] for a degenerate zero major
    /// distance.
    pub fn eccentricity(&self) -> Result<f64> {
        conic::eccentricity(self.distance_from_focus_to_local_origin(), self.a())
    }

    /// Returns the semi-latus rectum `b^2 / a`.
    #[must_use]
    pub fn semilatus_rectum_distance(&self) -> f64 {
        self.b() * self.b() / self.a()
    }

    /// Returns the distance from the focus to its directrix.
    #[must_use]
    pub fn distance_from_focus_to_directrix(&self) -> f64 {
        conic::focus_to_directrix_distance(
            self.a(),
            self.distance_from_focus_to_local_origin(),
            self.tolerance(),
        )
    }

    /// Returns the foot of the directrix on the focal axis, behind the
    /// major vertex.
    #[must_use]
    pub fn coordinate_of_directrix(&self) -> CartesianCoordinate {
        conic::point_along_rotation(
            &self.section.focus(),
            &self.section.rotation(),
            -self.distance_from_focus_to_directrix(),
        )
    }

    /// Returns the foot of the second directrix, mirrored through the
    /// center beyond the second focus.
    #[must_use]
    pub fn coordinate_of_directrix_secondary(&self) -> CartesianCoordinate {
        conic::point_along_rotation(
            &self.focus_secondary(),
            &self.section.rotation(),
            self.distance_from_focus_to_directrix(),
        )
    }

    /// Returns the second focus: the first mirrored through the center, at
    /// `2c` along the rotation axis.
    #[must_use]
    pub fn focus_secondary(&self) -> CartesianCoordinate {
        let c = self.distance_from_focus_to_local_origin();
        let rotation = self.section.rotation().radians();
        let focus = self.section.focus();
        CartesianCoordinate::with_tolerance(
            focus.x() + 2.0 * c * rotation.cos(),
            focus.y() + 2.0 * c * rotation.sin(),
            self.tolerance(),
        )
    }

    /// Returns the minor vertices, one on each side of the major axis.
    #[must_use]
    pub fn vertices_minor(&self) -> (CartesianCoordinate, CartesianCoordinate) {
        conic::perpendicular_offsets(&self.local_origin(), &self.section.rotation(), self.b())
    }

    /// Returns the focus-relative radius at `angle` from the right focus.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] for a degenerate zero major
    /// distance.
    pub fn radius_about_focus_right(&self, angle: &Angle) -> Result<f64> {
        Ok(conic::radius_about_focus_right(
            self.semilatus_rectum_distance(),
            self.eccentricity()?,
            angle,
        ))
    }

    /// Returns the focus-relative radius measured from the left focus:
    /// `radius_left(angle) = radius_right(pi - angle)`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] for a degenerate zero major
    /// distance.
    pub fn radius_about_focus_left(&self, angle: &Angle) -> Result<f64> {
        Ok(conic::radius_about_focus_left(
            self.semilatus_rectum_distance(),
            self.eccentricity()?,
            angle,
        ))
    }

    /// Solves `x = a * sqrt(1 - (y/b)^2)` in the local frame, returning
    /// the positive root.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::OutOfRange`] when `|y| > b`.
    pub fn x_at_y(&self, y: f64) -> Result<f64> {
        let b = self.b();
        if !is_within_inclusive(y, -b, b, self.tolerance()) {
            return Err(GeometryError::OutOfRange {
                parameter: "y",
                value: y,
                reason: format!("the ellipse spans y in [-{b}, {b}]"),
            });
        }
        Ok(self.a() * (1.0 - (y / b).powi(2)).max(0.0).sqrt())
    }

    /// Solves `y = b * sqrt(1 - (x/a)^2)` in the local frame, returning
    /// the positive root.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::OutOfRange`] when `|x| > a`.
    pub fn y_at_x(&self, x: f64) -> Result<f64> {
        let a = self.a();
        if !is_within_inclusive(x, -a, a, self.tolerance()) {
            return Err(GeometryError::OutOfRange {
                parameter: "x",
                value: x,
                reason: format!("the ellipse spans x in [-{a}, {a}]"),
            });
        }
        Ok(self.b() * (1.0 - (x / a).powi(2)).max(0.0).sqrt())
    }

    /// Returns whether the coordinate lies on the ellipse, within the
    /// resolved tolerance of the pair.
    #[must_use]
    pub fn is_intersecting_coordinate(&self, coordinate: &CartesianCoordinate) -> bool {
        let tolerance = resolve_tolerance(self.tolerance(), coordinate.tolerance(), None);
        let local = self.section.to_local(&self.local_origin(), coordinate);
        let normalized = (local.x() / self.a()).powi(2) + (local.y() / self.b()).powi(2);
        are_equal(normalized, 1.0, tolerance)
    }

    /// Returns the total perimeter `4 * a * E(e)`, with `E` the complete
    /// elliptic integral of the second kind evaluated by the
    /// arithmetic-geometric-mean iteration.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] for a degenerate zero major
    /// distance.
    pub fn perimeter(&self) -> Result<f64> {
        let e = self.eccentricity()?;
        Ok(4.0 * self.a() * complete_elliptic_integral_second_kind(e, self.tolerance()))
    }

    /// Arc length between two parametric positions.
    ///
    /// # Errors
    ///
    /// Always returns [`GeometryError::NotImplemented`]: the incomplete
    /// elliptic integral bound has no confirmed contract yet.
    pub fn arc_length_between(&self, _start: f64, _end: f64) -> Result<f64> {
        Err(GeometryError::NotImplemented {
            operation: "elliptical arc length between positions",
        })
    }

    /// Chord between two parametric positions.
    ///
    /// # Errors
    ///
    /// Always returns [`GeometryError::NotImplemented`].
    pub fn chord_between(&self, _start: f64, _end: f64) -> Result<f64> {
        Err(GeometryError::NotImplemented {
            operation: "elliptical chord between positions",
        })
    }

    /// Tangent vector at a relative position.
    ///
    /// # Errors
    ///
    /// Always returns [`GeometryError::NotImplemented`].
    pub fn tangent_vector_by_position(&self, _relative_position: f64) -> Result<crate::vectors::Vector> {
        Err(GeometryError::NotImplemented {
            operation: "elliptical tangent by position",
        })
    }

    /// Normal vector at a relative position.
    ///
    /// # Errors
    ///
    /// Always returns [`GeometryError::NotImplemented`].
    pub fn normal_vector_by_position(&self, _relative_position: f64) -> Result<crate::vectors::Vector> {
        Err(GeometryError::NotImplemented {
            operation: "elliptical normal by position",
        })
    }

    /// Returns the lazily-built local-frame parametric equation
    /// `{a cos t, b sin t}`.
    pub fn parametric_equation(&self) -> &CartesianParametricEquation {
        self.equation.get_or_init(|| {
            CartesianParametricEquation::new(
                Arc::new(CosineParametric::new(self.a())),
                Arc::new(SineParametric::new(self.b())),
            )
        })
    }

    /// Returns the lazily-built default range: the full closed revolution
    /// starting and ending at the major vertex.
    pub fn default_range(&self) -> &CurveRange {
        self.range.get_or_init(|| {
            CurveRange::between_trusted(self.section.vertex_major(), self.section.vertex_major())
        })
    }
}

/// Complete elliptic integral of the second kind `E(k)` by the
/// arithmetic-geometric-mean iteration, converged to `tolerance`.
fn complete_elliptic_integral_second_kind(k: f64, tolerance: f64) -> f64 {
    let mut a = 1.0_f64;
    let mut b = (1.0 - k * k).sqrt();
    let mut c = k;
    let mut sum = 0.5 * c * c;
    let mut factor = 0.5;
    while c.abs() > tolerance {
        let a_next = 0.5 * (a + b);
        let b_next = (a * b).sqrt();
        c = 0.5 * (a - b);
        a = a_next;
        b = b_next;
        factor *= 2.0;
        sum += factor * c * c;
    }
    (FRAC_PI_2 / a) * (1.0 - sum)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use super::*;

    const TOL: f64 = 1e-10;

    fn c(x: f64, y: f64) -> CartesianCoordinate {
        CartesianCoordinate::new(x, y)
    }

    /// The reference ellipse: a = 5, b = 4, c = 3, centered at the
    /// origin with the focal axis along x.
    fn reference() -> EllipticalCurve {
        EllipticalCurve::new(c(5.0, 0.0), c(3.0, 0.0), 4.0).unwrap()
    }

    #[test]
    fn reference_ellipse_derivations() {
        let ellipse = reference();
        assert!((ellipse.a() - 5.0).abs() < TOL);
        assert!((ellipse.b() - 4.0).abs() < TOL);
        assert!(ellipse.local_origin().is_equal_to(&c(0.0, 0.0)));
        assert!((ellipse.distance_from_focus_to_local_origin() - 3.0).abs() < 1e-9);
        let e = ellipse.eccentricity().unwrap();
        assert!((0.0..1.0).contains(&e));
        assert!((e - 0.6).abs() < 1e-9);
        assert!((ellipse.semilatus_rectum_distance() - 3.2).abs() < TOL);
        assert!((ellipse.distance_from_focus_to_directrix() - 16.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn circle_case_drives_eccentricity_to_zero() {
        // b = a: the focus sits at the center.
        let circle = EllipticalCurve::new(c(1.0, 0.0), c(0.0, 0.0), 1.0).unwrap();
        assert!((circle.a() - 1.0).abs() < TOL);
        assert!(circle.eccentricity().unwrap().abs() < 1e-9);
        assert!(circle.distance_from_focus_to_directrix().is_infinite());
    }

    #[test]
    fn construction_paths_are_equivalent() {
        let from_focus = reference();
        let from_rotation =
            EllipticalCurve::from_rotation(c(5.0, 0.0), Angle::from_radians(PI), 5.0, 2.0)
                .unwrap();
        assert!((from_focus.a() - from_rotation.a()).abs() < TOL);
        assert!((from_focus.b() - from_rotation.b()).abs() < 1e-9);
        assert!(from_focus
            .section()
            .focus()
            .is_equal_to(&from_rotation.section().focus()));
        assert!(from_focus
            .local_origin()
            .is_equal_to(&from_rotation.local_origin()));
    }

    #[test]
    fn invalid_minor_distance_is_rejected() {
        assert!(EllipticalCurve::new(c(5.0, 0.0), c(3.0, 0.0), 0.0).is_err());
        assert!(EllipticalCurve::new(c(5.0, 0.0), c(3.0, 0.0), -1.0).is_err());
    }

    #[test]
    fn second_focus_mirrors_through_center() {
        let ellipse = reference();
        assert!(ellipse.focus_secondary().is_equal_to(&c(-3.0, 0.0)));
    }

    #[test]
    fn directrix_feet_sit_at_a_squared_over_c() {
        let ellipse = reference();
        assert!(ellipse
            .coordinate_of_directrix()
            .is_equal_to(&c(25.0 / 3.0, 0.0)));
        assert!(ellipse
            .coordinate_of_directrix_secondary()
            .is_equal_to(&c(-25.0 / 3.0, 0.0)));
    }

    #[test]
    fn minor_vertices_straddle_the_axis() {
        let (above, below) = reference().vertices_minor();
        assert!(above.is_equal_to(&c(0.0, -4.0)) || above.is_equal_to(&c(0.0, 4.0)));
        assert!((above.y() + below.y()).abs() < 1e-9);
        assert!(above.x().abs() < 1e-9);
    }

    #[test]
    fn axis_solves() {
        let ellipse = reference();
        assert!((ellipse.y_at_x(0.0).unwrap() - 4.0).abs() < TOL);
        assert!((ellipse.x_at_y(0.0).unwrap() - 5.0).abs() < TOL);
        assert!((ellipse.y_at_x(5.0).unwrap()).abs() < TOL);
        // (3, 3.2): the semi-latus rectum point above the focus.
        assert!((ellipse.y_at_x(3.0).unwrap() - 3.2).abs() < TOL);
        assert!(matches!(
            ellipse.y_at_x(5.1),
            Err(GeometryError::OutOfRange { .. })
        ));
        assert!(ellipse.x_at_y(4.1).is_err());
    }

    #[test]
    fn coordinate_membership_in_world_frame() {
        let ellipse = reference();
        assert!(ellipse.is_intersecting_coordinate(&c(5.0, 0.0)));
        assert!(ellipse.is_intersecting_coordinate(&c(0.0, 4.0)));
        assert!(ellipse.is_intersecting_coordinate(&c(3.0, 3.2)));
        assert!(!ellipse.is_intersecting_coordinate(&c(5.0, 1.0)));
        assert!(!ellipse.is_intersecting_coordinate(&c(0.0, 0.0)));
    }

    #[test]
    fn focus_radii() {
        let ellipse = reference();
        // At 90 degrees from the focus, the radius is the semi-latus rectum.
        let quarter = Angle::from_radians(std::f64::consts::FRAC_PI_2);
        assert!((ellipse.radius_about_focus_right(&quarter).unwrap() - 3.2).abs() < TOL);
        // Along the axis: a - c toward the vertex, a + c away.
        assert!((ellipse
            .radius_about_focus_right(&Angle::from_radians(0.0))
            .unwrap()
            - 2.0)
            .abs()
            < TOL);
        assert!((ellipse
            .radius_about_focus_right(&Angle::from_radians(PI))
            .unwrap()
            - 8.0)
            .abs()
            < TOL);
        // Left/right symmetry.
        let angle = Angle::from_radians(0.7);
        let mirrored = Angle::from_radians(PI - 0.7);
        assert!((ellipse.radius_about_focus_left(&angle).unwrap()
            - ellipse.radius_about_focus_right(&mirrored).unwrap())
        .abs()
            < TOL);
    }

    #[test]
    fn perimeter_of_a_circle_is_exact() {
        let circle = EllipticalCurve::new(c(2.0, 0.0), c(0.0, 0.0), 2.0).unwrap();
        assert_relative_eq!(circle.perimeter().unwrap(), 4.0 * PI, epsilon = 1e-9);
    }

    #[test]
    fn perimeter_matches_the_reference_value() {
        // P(a=5, b=4) = 28.3617 to four decimals.
        assert_relative_eq!(reference().perimeter().unwrap(), 28.3617, epsilon = 1e-3);
    }

    #[test]
    fn stubbed_operations_surface_explicitly() {
        let ellipse = reference();
        assert!(matches!(
            ellipse.arc_length_between(0.0, 1.0),
            Err(GeometryError::NotImplemented { .. })
        ));
        assert!(matches!(
            ellipse.chord_between(0.0, 1.0),
            Err(GeometryError::NotImplemented { .. })
        ));
        assert!(ellipse.tangent_vector_by_position(0.5).is_err());
        assert!(ellipse.normal_vector_by_position(0.5).is_err());
    }

    #[test]
    fn parametric_equation_traces_the_local_frame() {
        let ellipse = reference();
        let equation = ellipse.parametric_equation();
        assert!((equation.x_at(0.0) - 5.0).abs() < TOL);
        assert!((equation.y_at(std::f64::consts::FRAC_PI_2) - 4.0).abs() < TOL);
        // Memoized once.
        assert!(std::ptr::eq(equation, ellipse.parametric_equation()));
    }
}
