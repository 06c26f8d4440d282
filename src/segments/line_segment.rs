use crate::coordinates::{Angle, CartesianCoordinate, CartesianOffset};
use crate::curves::LinearCurve;
use crate::error::{GeometryError, Result};
use crate::numerics::{is_within_inclusive, resolve_tolerance};
use crate::vectors::Vector;

use super::extents::BoundingExtents;

/// A bounded straight stretch between two endpoints.
///
/// The segment carries the infinite [`LinearCurve`] through its endpoints
/// and restricts it to the precomputed [`BoundingExtents`]; every
/// transform rebuilds both from the transformed endpoints.
#[derive(Debug, Clone)]
pub struct LineSegment {
    i: CartesianCoordinate,
    j: CartesianCoordinate,
    extents: BoundingExtents,
    curve: LinearCurve,
    tolerance: f64,
}

impl LineSegment {
    /// Creates a segment between two endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] when the endpoints
    /// coincide.
    pub fn new(i: CartesianCoordinate, j: CartesianCoordinate) -> Result<Self> {
        if i.is_equal_to(&j) {
            return Err(GeometryError::InvalidArgument(
                "a segment requires two distinct endpoints".into(),
            ));
        }
        Ok(Self {
            i,
            j,
            extents: BoundingExtents::from_coordinates(&i, &j),
            curve: LinearCurve::new(i, j),
            tolerance: resolve_tolerance(i.tolerance(), j.tolerance(), None),
        })
    }

    /// Returns the starting endpoint `I`.
    #[must_use]
    pub fn i(&self) -> CartesianCoordinate {
        self.i
    }

    /// Returns the ending endpoint `J`.
    #[must_use]
    pub fn j(&self) -> CartesianCoordinate {
        self.j
    }

    /// Returns the bounding extents.
    #[must_use]
    pub fn extents(&self) -> &BoundingExtents {
        &self.extents
    }

    /// Returns the infinite line through the endpoints.
    #[must_use]
    pub fn curve(&self) -> &LinearCurve {
        &self.curve
    }

    /// Returns the tolerance used in comparisons involving this segment.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the endpoint separation.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.i.distance_to(&self.j)
    }

    /// Returns the slope of the carrying line.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] only if the segment has
    /// degenerated, which construction prevents.
    pub fn slope(&self) -> Result<f64> {
        self.curve.slope()
    }

    /// Returns the direction vector from `I` to `J`, anchored at `I`.
    #[must_use]
    pub fn vector(&self) -> Vector {
        Vector::from_coordinates(self.i, self.j)
    }

    /// Returns the midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> CartesianCoordinate {
        CartesianCoordinate::with_tolerance(
            0.5 * (self.i.x() + self.j.x()),
            0.5 * (self.i.y() + self.j.y()),
            self.tolerance,
        )
    }

    /// Returns whether the coordinate lies on the segment: on the carrying
    /// line and inside the extents.
    #[must_use]
    pub fn includes_coordinate(&self, coordinate: &CartesianCoordinate) -> bool {
        self.curve.is_intersecting_coordinate(coordinate) && self.extents.contains(coordinate)
    }

    /// Returns the coordinate at the relative position `t`, with `t = 0`
    /// at `I` and `t = 1` at `J`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::OutOfRange`] when `t` falls outside
    /// `[0, 1]`.
    pub fn coordinate_at_relative_position(&self, t: f64) -> Result<CartesianCoordinate> {
        if !is_within_inclusive(t, 0.0, 1.0, self.tolerance) {
            return Err(GeometryError::OutOfRange {
                parameter: "relative position",
                value: t,
                reason: "segment positions run from 0 at I to 1 at J".into(),
            });
        }
        Ok(CartesianCoordinate::with_tolerance(
            self.i.x() + t * (self.j.x() - self.i.x()),
            self.i.y() + t * (self.j.y() - self.i.y()),
            self.tolerance,
        ))
    }

    /// Splits the segment at the relative position `t` into the stretch
    /// before and the stretch after.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::OutOfRange`] when `t` falls outside
    /// `[0, 1]`, and [`GeometryError::InvalidArgument`] when `t` sits on
    /// an endpoint, where one half would be degenerate.
    pub fn split_by_relative_position(&self, t: f64) -> Result<(Self, Self)> {
        let at = self.coordinate_at_relative_position(t)?;
        Ok((Self::new(self.i, at)?, Self::new(at, self.j)?))
    }

    /// Splits the segment at a coordinate on it.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::CoordinateNotOnTarget`] when the
    /// coordinate misses the segment, and
    /// [`GeometryError::InvalidArgument`] when it sits on an endpoint.
    pub fn split_at_coordinate(&self, coordinate: &CartesianCoordinate) -> Result<(Self, Self)> {
        if !self.includes_coordinate(coordinate) {
            return Err(GeometryError::CoordinateNotOnTarget {
                x: coordinate.x(),
                y: coordinate.y(),
                target: "line segment",
            });
        }
        Ok((Self::new(self.i, *coordinate)?, Self::new(*coordinate, self.j)?))
    }

    /// Merges two collinear segments sharing exactly one endpoint into a
    /// single segment spanning their outer endpoints.
    ///
    /// The result runs from this segment's free endpoint to the other's,
    /// so a reversed neighbor is re-oriented rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] when the segments share
    /// no endpoint or their carrying lines differ.
    pub fn merge_with(&self, other: &Self) -> Result<Self> {
        if !self.curve.is_parallel(&other.curve) {
            return Err(GeometryError::InvalidArgument(
                "segments on different carrying lines cannot be merged".into(),
            ));
        }
        let (start, end) = if self.j.is_equal_to(&other.i) {
            (self.i, other.j)
        } else if self.j.is_equal_to(&other.j) {
            (self.i, other.i)
        } else if self.i.is_equal_to(&other.i) {
            (self.j, other.j)
        } else if self.i.is_equal_to(&other.j) {
            (self.j, other.i)
        } else {
            return Err(GeometryError::InvalidArgument(
                "segments must share an endpoint to be merged".into(),
            ));
        };
        Self::new(start, end)
    }

    /// Returns the bridging segment from this segment's `J` to the other's
    /// `I`, or `None` when the two already share an endpoint and no bridge
    /// is needed.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] when the gap between the
    /// bridge endpoints is degenerate.
    pub fn join_with(&self, other: &Self) -> Result<Option<Self>> {
        let shares_endpoint = self.j.is_equal_to(&other.i)
            || self.j.is_equal_to(&other.j)
            || self.i.is_equal_to(&other.i)
            || self.i.is_equal_to(&other.j);
        if shares_endpoint {
            return Ok(None);
        }
        Ok(Some(Self::new(self.j, other.i)?))
    }

    /// Returns this segment translated by the offset's separation.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] only if translation
    /// degenerates the endpoints, which it cannot.
    pub fn translated_by(&self, offset: &CartesianOffset) -> Result<Self> {
        Self::new(self.i + *offset, self.j + *offset)
    }

    /// Returns this segment uniformly scaled about `reference`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] when the multiplier is
    /// zero, which collapses the segment onto the reference point.
    pub fn scaled_from_point(&self, reference: &CartesianCoordinate, multiplier: f64) -> Result<Self> {
        let scale = |point: &CartesianCoordinate| {
            CartesianCoordinate::with_tolerance(
                reference.x() + multiplier * (point.x() - reference.x()),
                reference.y() + multiplier * (point.y() - reference.y()),
                point.tolerance(),
            )
        };
        Self::new(scale(&self.i), scale(&self.j))
    }

    /// Returns this segment rotated about `reference` by `angle`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] only if rotation
    /// degenerates the endpoints, which it cannot.
    pub fn rotated_about(&self, reference: &CartesianCoordinate, angle: &Angle) -> Result<Self> {
        Self::new(
            self.i.rotated_about(reference, angle),
            self.j.rotated_about(reference, angle),
        )
    }

    /// Returns this segment skewed within the reference box spanned by
    /// `stationary` and `skewing`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] for a degenerate reference
    /// box.
    pub fn skewed_within_box(
        &self,
        stationary: &CartesianCoordinate,
        skewing: &CartesianCoordinate,
        magnitude: &CartesianOffset,
    ) -> Result<Self> {
        Self::new(
            self.i.skewed_within_box(stationary, skewing, magnitude)?,
            self.j.skewed_within_box(stationary, skewing, magnitude)?,
        )
    }

    /// Returns this segment mirrored about the x-axis.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] only if mirroring
    /// degenerates the endpoints, which it cannot.
    pub fn mirrored_about_x(&self) -> Result<Self> {
        Self::new(self.i.mirrored_about_x(), self.j.mirrored_about_x())
    }

    /// Returns this segment mirrored about the y-axis.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] only if mirroring
    /// degenerates the endpoints, which it cannot.
    pub fn mirrored_about_y(&self) -> Result<Self> {
        Self::new(self.i.mirrored_about_y(), self.j.mirrored_about_y())
    }

    /// Returns this segment reflected across the infinite line through
    /// `line_i` and `line_j`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] when the mirror line is
    /// degenerate.
    pub fn mirrored_about_line(
        &self,
        line_i: &CartesianCoordinate,
        line_j: &CartesianCoordinate,
    ) -> Result<Self> {
        Self::new(
            self.i.mirrored_about_line(line_i, line_j)?,
            self.j.mirrored_about_line(line_i, line_j)?,
        )
    }
}
