//! Shared focus-directrix model of the conic-section curves.
//!
//! The three conic variants store the same backing fields through
//! [`ConicSection`] and derive everything else through the free functions
//! here, recomputed on every access so the derived values can never drift
//! from the immutable backing state.

use crate::coordinates::{Angle, CartesianCoordinate};
use crate::error::{GeometryError, Result};
use crate::numerics::resolve_tolerance;
use crate::parametrics::components::ConicFocusRadiusParametric;
use crate::parametrics::ParametricFunction;

/// The immutable backing fields shared by every conic-section curve.
///
/// `rotation` is the direction of the focal axis, pointing from the major
/// vertex toward its focus. Where the local origin sits along that axis is
/// variant-specific (at the center for an ellipse or hyperbola, at the
/// vertex for a parabola), so each variant derives it; everything stored
/// here is variant-independent.
#[derive(Debug, Clone)]
pub struct ConicSection {
    vertex_major: CartesianCoordinate,
    focus: CartesianCoordinate,
    distance_from_vertex_major_to_local_origin: f64,
    rotation: Angle,
    tolerance: f64,
}

impl ConicSection {
    /// Creates the backing state from the major vertex, the focus, and the
    /// distance `a` from the major vertex to the local origin.
    ///
    /// The rotation is derived from the focus's direction from the vertex.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] when `a` is negative or
    /// when the vertex and focus coincide.
    pub fn from_vertex_and_focus(
        vertex_major: CartesianCoordinate,
        focus: CartesianCoordinate,
        distance_from_vertex_major_to_local_origin: f64,
    ) -> Result<Self> {
        if distance_from_vertex_major_to_local_origin < 0.0 {
            return Err(GeometryError::InvalidArgument(
                "distance from the major vertex to the local origin must be non-negative".into(),
            ));
        }
        if vertex_major.is_equal_to(&focus) {
            return Err(GeometryError::InvalidArgument(
                "the major vertex and focus must be distinct".into(),
            ));
        }
        let rotation = Angle::from_offset(&vertex_major.offset_to(focus));
        Ok(Self {
            vertex_major,
            focus,
            distance_from_vertex_major_to_local_origin,
            rotation,
            tolerance: resolve_tolerance(vertex_major.tolerance(), focus.tolerance(), None),
        })
    }

    /// Creates the backing state from the major vertex, the focal-axis
    /// rotation, the distance `a` from the vertex to the local origin, and
    /// the distance from the vertex to the focus.
    ///
    /// The focus is derived by offsetting the vertex along the rotation;
    /// the resulting state is equivalent to what
    /// [`Self::from_vertex_and_focus`] yields for that focus.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] when `a` is negative or
    /// the focus distance is not positive.
    pub fn from_rotation(
        vertex_major: CartesianCoordinate,
        rotation: Angle,
        distance_from_vertex_major_to_local_origin: f64,
        distance_from_vertex_major_to_focus: f64,
    ) -> Result<Self> {
        if distance_from_vertex_major_to_local_origin < 0.0 {
            return Err(GeometryError::InvalidArgument(
                "distance from the major vertex to the local origin must be non-negative".into(),
            ));
        }
        if distance_from_vertex_major_to_focus <= 0.0 {
            return Err(GeometryError::InvalidArgument(
                "distance from the major vertex to the focus must be positive".into(),
            ));
        }
        let focus = CartesianCoordinate::with_tolerance(
            vertex_major.x() + distance_from_vertex_major_to_focus * rotation.radians().cos(),
            vertex_major.y() + distance_from_vertex_major_to_focus * rotation.radians().sin(),
            vertex_major.tolerance(),
        );
        Ok(Self {
            vertex_major,
            focus,
            distance_from_vertex_major_to_local_origin,
            rotation,
            tolerance: vertex_major.tolerance(),
        })
    }

    /// Returns the major vertex.
    #[must_use]
    pub fn vertex_major(&self) -> CartesianCoordinate {
        self.vertex_major
    }

    /// Returns the focus.
    #[must_use]
    pub fn focus(&self) -> CartesianCoordinate {
        self.focus
    }

    /// Returns the distance `a` from the major vertex to the local origin.
    #[must_use]
    pub fn distance_from_vertex_major_to_local_origin(&self) -> f64 {
        self.distance_from_vertex_major_to_local_origin
    }

    /// Returns the focal-axis rotation.
    #[must_use]
    pub fn rotation(&self) -> Angle {
        self.rotation
    }

    /// Returns the tolerance used in comparisons involving this conic.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the distance from the major vertex to the focus.
    #[must_use]
    pub fn distance_from_vertex_major_to_focus(&self) -> f64 {
        self.vertex_major.distance_to(&self.focus)
    }

    /// Returns the point at `distance` from the major vertex along the
    /// focal axis (positive toward the focus).
    #[must_use]
    pub fn point_along_axis(&self, distance: f64) -> CartesianCoordinate {
        CartesianCoordinate::with_tolerance(
            self.vertex_major.x() + distance * self.rotation.radians().cos(),
            self.vertex_major.y() + distance * self.rotation.radians().sin(),
            self.tolerance,
        )
    }

    /// Maps a world coordinate into the frame centered on `local_origin`
    /// with the focal axis as +x.
    #[must_use]
    pub fn to_local(
        &self,
        local_origin: &CartesianCoordinate,
        coordinate: &CartesianCoordinate,
    ) -> CartesianCoordinate {
        let unrotated = coordinate.rotated_about(
            local_origin,
            &Angle::from_radians(-self.rotation.radians()),
        );
        CartesianCoordinate::with_tolerance(
            unrotated.x() - local_origin.x(),
            unrotated.y() - local_origin.y(),
            self.tolerance,
        )
    }
}

/// Eccentricity `e = c / a` of a conic with focus-to-origin distance `c`
/// and vertex-to-origin distance `a`.
///
/// # Errors
///
/// Returns [`GeometryError::DivideByZero`] when `a` is zero.
pub fn eccentricity(c: f64, a: f64) -> Result<f64> {
    if a == 0.0 {
        return Err(GeometryError::DivideByZero {
            context: "deriving eccentricity with a zero vertex distance",
        });
    }
    Ok(c / a)
}

/// Distance from the focus to the directrix for a central conic:
/// `|a^2 - c^2| / c`.
///
/// A circle (`c` zero within tolerance) has its directrix at infinity.
#[must_use]
pub fn focus_to_directrix_distance(a: f64, c: f64, tolerance: f64) -> f64 {
    if crate::numerics::is_zero_sign(c, tolerance) {
        return f64::INFINITY;
    }
    (a * a - c * c).abs() / c
}

/// Focus-relative radius of a conic at `angle` from the right focus:
/// `r = p / (1 + e * cos(angle))` with `p` the semi-latus rectum.
#[must_use]
pub fn radius_about_focus_right(semilatus_rectum: f64, eccentricity: f64, angle: &Angle) -> f64 {
    ConicFocusRadiusParametric::new(semilatus_rectum, eccentricity).base_at(angle.radians_raw())
}

/// Focus-relative radius measured from the left focus:
/// `radius_left(angle) = radius_right(pi - angle)`.
#[must_use]
pub fn radius_about_focus_left(semilatus_rectum: f64, eccentricity: f64, angle: &Angle) -> f64 {
    radius_about_focus_right(
        semilatus_rectum,
        eccentricity,
        &Angle::from_radians(std::f64::consts::PI - angle.radians_raw()),
    )
}

/// Returns the point at a signed distance from `anchor` along the focal
/// axis (positive toward the rotation direction).
#[must_use]
pub fn point_along_rotation(
    anchor: &CartesianCoordinate,
    rotation: &Angle,
    distance: f64,
) -> CartesianCoordinate {
    CartesianCoordinate::with_tolerance(
        anchor.x() + distance * rotation.radians().cos(),
        anchor.y() + distance * rotation.radians().sin(),
        anchor.tolerance(),
    )
}

/// Returns the pair of points offset perpendicular to the focal axis from
/// `anchor`, one on each side, at the given distance.
#[must_use]
pub fn perpendicular_offsets(
    anchor: &CartesianCoordinate,
    rotation: &Angle,
    distance: f64,
) -> (CartesianCoordinate, CartesianCoordinate) {
    let perpendicular = rotation.radians() + std::f64::consts::FRAC_PI_2;
    let dx = distance * perpendicular.cos();
    let dy = distance * perpendicular.sin();
    (
        CartesianCoordinate::with_tolerance(anchor.x() + dx, anchor.y() + dy, anchor.tolerance()),
        CartesianCoordinate::with_tolerance(anchor.x() - dx, anchor.y() - dy, anchor.tolerance()),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    const TOL: f64 = 1e-10;

    fn c(x: f64, y: f64) -> CartesianCoordinate {
        CartesianCoordinate::new(x, y)
    }

    #[test]
    fn rotation_is_derived_from_focus_direction() {
        // Vertex at (5, 0), focus at (3, 0): the focal axis points -x.
        let section = ConicSection::from_vertex_and_focus(c(5.0, 0.0), c(3.0, 0.0), 5.0).unwrap();
        assert!((section.rotation().radians().abs() - PI).abs() < TOL);
        assert!((section.distance_from_vertex_major_to_focus() - 2.0).abs() < TOL);
    }

    #[test]
    fn construction_paths_are_equivalent() {
        let from_focus =
            ConicSection::from_vertex_and_focus(c(5.0, 0.0), c(3.0, 0.0), 5.0).unwrap();
        let from_rotation =
            ConicSection::from_rotation(c(5.0, 0.0), Angle::from_radians(PI), 5.0, 2.0).unwrap();
        assert!(from_focus.focus().is_equal_to(&from_rotation.focus()));
        assert!(from_focus
            .vertex_major()
            .is_equal_to(&from_rotation.vertex_major()));
        assert!((from_focus.rotation().radians().abs()
            - from_rotation.rotation().radians().abs())
        .abs()
            < TOL);
    }

    #[test]
    fn coincident_vertex_and_focus_are_rejected() {
        assert!(ConicSection::from_vertex_and_focus(c(1.0, 1.0), c(1.0, 1.0), 2.0).is_err());
    }

    #[test]
    fn eccentricity_ratio() {
        assert!((eccentricity(3.0, 5.0).unwrap() - 0.6).abs() < TOL);
        assert!(matches!(
            eccentricity(3.0, 0.0),
            Err(GeometryError::DivideByZero { .. })
        ));
    }

    #[test]
    fn directrix_distance_of_a_circle_is_infinite() {
        assert_eq!(focus_to_directrix_distance(5.0, 0.0, TOL), f64::INFINITY);
        assert_eq!(focus_to_directrix_distance(5.0, 1e-12, TOL), f64::INFINITY);
        // Ellipse a=5, c=3: (25 - 9) / 3.
        assert!((focus_to_directrix_distance(5.0, 3.0, TOL) - 16.0 / 3.0).abs() < TOL);
    }

    #[test]
    fn focus_radius_left_right_symmetry() {
        let p = 3.2;
        let e = 0.6;
        for radians in [0.0, 0.3, FRAC_PI_2, 2.0] {
            let angle = Angle::from_radians(radians);
            let mirrored = Angle::from_radians(PI - radians);
            assert!(
                (radius_about_focus_left(p, e, &angle)
                    - radius_about_focus_right(p, e, &mirrored))
                .abs()
                    < TOL
            );
        }
    }

    #[test]
    fn perpendicular_offsets_straddle_the_axis() {
        let (above, below) =
            perpendicular_offsets(&c(1.0, 1.0), &Angle::from_radians(0.0), 2.0);
        assert!(above.is_equal_to(&c(1.0, 3.0)));
        assert!(below.is_equal_to(&c(1.0, -1.0)));
    }
}
