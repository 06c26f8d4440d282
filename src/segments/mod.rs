//! Bounded segments: curves restricted to a precomputed bounding box.

mod extents;
mod line_segment;

pub use extents::BoundingExtents;
pub use line_segment::LineSegment;
