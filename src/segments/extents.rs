use crate::coordinates::CartesianCoordinate;
use crate::numerics::{is_within_inclusive, resolve_tolerance};

/// The axis-aligned bounding box of a segment, precomputed at
/// construction so membership tests never re-derive the min/max pair.
#[derive(Debug, Clone, Copy)]
pub struct BoundingExtents {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    tolerance: f64,
}

impl BoundingExtents {
    /// Creates the extents spanning two coordinates.
    #[must_use]
    pub fn from_coordinates(i: &CartesianCoordinate, j: &CartesianCoordinate) -> Self {
        Self {
            x_min: i.x().min(j.x()),
            x_max: i.x().max(j.x()),
            y_min: i.y().min(j.y()),
            y_max: i.y().max(j.y()),
            tolerance: resolve_tolerance(i.tolerance(), j.tolerance(), None),
        }
    }

    /// Returns the smallest x in the box.
    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// Returns the largest x in the box.
    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Returns the smallest y in the box.
    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    /// Returns the largest y in the box.
    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Returns whether the coordinate lies inside the box, with the box
    /// edges widened by the resolved tolerance of the pair.
    #[must_use]
    pub fn contains(&self, coordinate: &CartesianCoordinate) -> bool {
        let tolerance = resolve_tolerance(self.tolerance, coordinate.tolerance(), None);
        is_within_inclusive(coordinate.x(), self.x_min, self.x_max, tolerance)
            && is_within_inclusive(coordinate.y(), self.y_min, self.y_max, tolerance)
    }

    /// Returns whether two boxes overlap, with the edges widened by the
    /// resolved tolerance of the pair.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        let tolerance = resolve_tolerance(self.tolerance, other.tolerance, None);
        self.x_min <= other.x_max + tolerance
            && other.x_min <= self.x_max + tolerance
            && self.y_min <= other.y_max + tolerance
            && other.y_min <= self.y_max + tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: f64, y: f64) -> CartesianCoordinate {
        CartesianCoordinate::new(x, y)
    }

    #[test]
    fn min_max_are_order_independent() {
        let forward = BoundingExtents::from_coordinates(&c(1.0, 5.0), &c(4.0, 2.0));
        let backward = BoundingExtents::from_coordinates(&c(4.0, 2.0), &c(1.0, 5.0));
        for extents in [forward, backward] {
            assert!((extents.x_min() - 1.0).abs() < 1e-12);
            assert!((extents.x_max() - 4.0).abs() < 1e-12);
            assert!((extents.y_min() - 2.0).abs() < 1e-12);
            assert!((extents.y_max() - 5.0).abs() < 1e-12);
        }
    }

    #[test]
    fn containment_is_edge_inclusive() {
        let extents = BoundingExtents::from_coordinates(&c(0.0, 0.0), &c(4.0, 4.0));
        assert!(extents.contains(&c(2.0, 2.0)));
        assert!(extents.contains(&c(0.0, 0.0)));
        assert!(extents.contains(&c(4.0, 4.0)));
        // Just inside the tolerance band around the edge.
        assert!(extents.contains(&c(4.0 + 1e-9, 2.0)));
        assert!(!extents.contains(&c(4.1, 2.0)));
        assert!(!extents.contains(&c(2.0, -0.1)));
    }

    #[test]
    fn overlap_detection() {
        let a = BoundingExtents::from_coordinates(&c(0.0, 0.0), &c(2.0, 2.0));
        let b = BoundingExtents::from_coordinates(&c(1.0, 1.0), &c(3.0, 3.0));
        let apart = BoundingExtents::from_coordinates(&c(5.0, 5.0), &c(6.0, 6.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&apart));
        // Touching at a corner counts.
        let corner = BoundingExtents::from_coordinates(&c(2.0, 2.0), &c(3.0, 3.0));
        assert!(a.overlaps(&corner));
    }
}
