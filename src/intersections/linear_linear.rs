use crate::coordinates::CartesianCoordinate;
use crate::curves::LinearCurve;
use crate::error::Result;
use crate::segments::LineSegment;

/// Returns whether two infinite lines meet at a single point.
///
/// Parallel lines, coincident ones included, do not: they meet nowhere or
/// everywhere, never at one point.
#[must_use]
pub fn are_intersecting(first: &LinearCurve, second: &LinearCurve) -> bool {
    !first.is_parallel(second)
}

/// Returns the single intersection point of two infinite lines.
///
/// # Errors
///
/// Returns [`crate::GeometryError::InvalidArgument`] when the lines are
/// parallel.
pub fn intersection_coordinate(
    first: &LinearCurve,
    second: &LinearCurve,
) -> Result<CartesianCoordinate> {
    first.line_intersect(second)
}

/// Returns the intersection of two bounded segments, or `None` when their
/// carrying lines are parallel or meet outside either segment.
///
/// The extents are checked first so detached segments never reach the
/// line solve.
#[must_use]
pub fn segment_intersection(
    first: &LineSegment,
    second: &LineSegment,
) -> Option<CartesianCoordinate> {
    if !first.extents().overlaps(second.extents()) {
        return None;
    }
    let point = first.curve().line_intersect(second.curve()).ok()?;
    if first.includes_coordinate(&point) && second.includes_coordinate(&point) {
        return Some(point);
    }
    None
}
