//! Pairwise curve intersection, dispatched over the [`Curve`] sum.
//!
//! Only the pairs with a confirmed closed-form solve are wired up;
//! everything else reports [`GeometryError::NotImplemented`] rather than
//! silently returning nothing.

pub mod linear_elliptical;
pub mod linear_linear;

use crate::coordinates::CartesianCoordinate;
use crate::curves::Curve;
use crate::error::{GeometryError, Result};

/// Returns the intersection points of two curves.
///
/// Two crossing lines yield one point; parallel lines yield none. A line
/// and an ellipse yield up to two, with tangency counted once. The pair
/// order does not matter.
///
/// # Errors
///
/// Returns [`GeometryError::NotImplemented`] for curve pairs without a
/// closed-form solve.
pub fn intersection_coordinates(
    first: &Curve,
    second: &Curve,
) -> Result<Vec<CartesianCoordinate>> {
    match (first, second) {
        (Curve::Linear(a), Curve::Linear(b)) => {
            if linear_linear::are_intersecting(a, b) {
                Ok(vec![linear_linear::intersection_coordinate(a, b)?])
            } else {
                Ok(Vec::new())
            }
        }
        (Curve::Linear(line), Curve::Elliptical(ellipse))
        | (Curve::Elliptical(ellipse), Curve::Linear(line)) => {
            Ok(linear_elliptical::intersection_coordinates(line, ellipse))
        }
        _ => Err(GeometryError::NotImplemented {
            operation: "intersection for this curve pair",
        }),
    }
}

/// Returns whether two curves intersect at least once.
///
/// # Errors
///
/// Returns [`GeometryError::NotImplemented`] for curve pairs without a
/// closed-form solve.
pub fn are_intersecting(first: &Curve, second: &Curve) -> Result<bool> {
    Ok(!intersection_coordinates(first, second)?.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::curves::{EllipticalCurve, LinearCurve, LogarithmicSpiralCurve};

    use super::*;

    fn c(x: f64, y: f64) -> CartesianCoordinate {
        CartesianCoordinate::new(x, y)
    }

    #[test]
    fn line_line_through_the_dispatch() {
        let first = Curve::Linear(LinearCurve::new(c(0.0, 0.0), c(1.0, 1.0)));
        let second = Curve::Linear(LinearCurve::new(c(0.0, 4.0), c(4.0, 0.0)));
        let points = intersection_coordinates(&first, &second).unwrap();
        assert_eq!(points.len(), 1);
        assert!(points[0].is_equal_to(&c(2.0, 2.0)));
        assert!(are_intersecting(&first, &second).unwrap());

        let parallel = Curve::Linear(LinearCurve::new(c(0.0, 1.0), c(1.0, 2.0)));
        assert!(intersection_coordinates(&first, &parallel)
            .unwrap()
            .is_empty());
        assert!(!are_intersecting(&first, &parallel).unwrap());
    }

    #[test]
    fn line_ellipse_is_order_independent() {
        let line = Curve::Linear(LinearCurve::new(c(-10.0, 0.0), c(10.0, 0.0)));
        let ellipse =
            Curve::Elliptical(EllipticalCurve::new(c(5.0, 0.0), c(3.0, 0.0), 4.0).unwrap());
        let forward = intersection_coordinates(&line, &ellipse).unwrap();
        let backward = intersection_coordinates(&ellipse, &line).unwrap();
        assert_eq!(forward.len(), 2);
        assert_eq!(backward.len(), 2);
        for (f, b) in forward.iter().zip(&backward) {
            assert!(f.is_equal_to(b));
        }
    }

    #[test]
    fn unsolved_pairs_are_reported() {
        let line = Curve::Linear(LinearCurve::new(c(0.0, 0.0), c(1.0, 1.0)));
        let spiral = Curve::LogarithmicSpiral(LogarithmicSpiralCurve::new(2.0, 0.5).unwrap());
        assert!(matches!(
            intersection_coordinates(&line, &spiral),
            Err(GeometryError::NotImplemented { .. })
        ));
        let ellipse =
            Curve::Elliptical(EllipticalCurve::new(c(5.0, 0.0), c(3.0, 0.0), 4.0).unwrap());
        assert!(matches!(
            intersection_coordinates(&ellipse, &ellipse),
            Err(GeometryError::NotImplemented { .. })
        ));
    }
}
