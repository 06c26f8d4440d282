use std::ops::{Add, Sub};

use crate::error::{GeometryError, Result};
use crate::numerics::{are_equal, resolve_tolerance, Point2, Rotation2, GEOMETRIC_TOLERANCE};

use super::{Angle, CartesianOffset, PolarCoordinate};

/// An immutable 2D point with an attached comparison tolerance.
#[derive(Debug, Clone, Copy)]
pub struct CartesianCoordinate {
    x: f64,
    y: f64,
    tolerance: f64,
}

impl CartesianCoordinate {
    /// Creates a coordinate with the default tolerance.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self::with_tolerance(x, y, GEOMETRIC_TOLERANCE)
    }

    /// Creates a coordinate with an explicit tolerance.
    #[must_use]
    pub fn with_tolerance(x: f64, y: f64, tolerance: f64) -> Self {
        Self { x, y, tolerance }
    }

    /// Creates the origin coordinate.
    #[must_use]
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Creates a coordinate from polar form.
    #[must_use]
    pub fn from_polar(polar: &PolarCoordinate) -> Self {
        polar.to_cartesian()
    }

    /// Returns the x-coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns the tolerance used in comparisons involving this coordinate.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns whether both components of two coordinates are equal within
    /// the resolved tolerance of the pair.
    #[must_use]
    pub fn is_equal_to(&self, other: &Self) -> bool {
        let tolerance = resolve_tolerance(self.tolerance, other.tolerance, None);
        are_equal(self.x, other.x, tolerance) && are_equal(self.y, other.y, tolerance)
    }

    /// Returns the straight-line distance to `other`.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Returns the directed offset from this coordinate to `other`.
    #[must_use]
    pub fn offset_to(&self, other: Self) -> CartesianOffset {
        CartesianOffset::new(*self, other)
    }

    /// Returns the directed offset from `other` to this coordinate.
    #[must_use]
    pub fn offset_from(&self, other: Self) -> CartesianOffset {
        CartesianOffset::new(other, *self)
    }

    /// Returns this coordinate uniformly scaled about the origin.
    #[must_use]
    pub fn scaled_by(&self, multiplier: f64) -> Self {
        Self::with_tolerance(self.x * multiplier, self.y * multiplier, self.tolerance)
    }

    /// Returns this coordinate divided by `denominator`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] when `denominator` is zero.
    pub fn divided_by(&self, denominator: f64) -> Result<Self> {
        if denominator == 0.0 {
            return Err(GeometryError::DivideByZero {
                context: "dividing a coordinate",
            });
        }
        Ok(Self::with_tolerance(
            self.x / denominator,
            self.y / denominator,
            self.tolerance,
        ))
    }

    /// Returns this coordinate rotated about `reference` by `angle`.
    #[must_use]
    pub fn rotated_about(&self, reference: &Self, angle: &Angle) -> Self {
        // Translate to the reference, rotate, translate back.
        let local = Point2::new(self.x - reference.x, self.y - reference.y);
        let rotated = Rotation2::new(angle.radians_raw()) * local;
        Self::with_tolerance(
            rotated.x + reference.x,
            rotated.y + reference.y,
            self.tolerance,
        )
    }

    /// Returns this coordinate mirrored about the x-axis.
    #[must_use]
    pub fn mirrored_about_x(&self) -> Self {
        Self::with_tolerance(self.x, -self.y, self.tolerance)
    }

    /// Returns this coordinate mirrored about the y-axis.
    #[must_use]
    pub fn mirrored_about_y(&self) -> Self {
        Self::with_tolerance(-self.x, self.y, self.tolerance)
    }

    /// Returns this coordinate reflected across the infinite line through
    /// `line_i` and `line_j`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] when the two line points
    /// coincide.
    pub fn mirrored_about_line(&self, line_i: &Self, line_j: &Self) -> Result<Self> {
        let dx = line_j.x - line_i.x;
        let dy = line_j.y - line_i.y;
        let length_squared = dx * dx + dy * dy;
        if length_squared == 0.0 {
            return Err(GeometryError::InvalidArgument(
                "mirror line requires two distinct points".into(),
            ));
        }

        // Project onto the line, then reflect through the foot point.
        let t = ((self.x - line_i.x) * dx + (self.y - line_i.y) * dy) / length_squared;
        let foot_x = line_i.x + t * dx;
        let foot_y = line_i.y + t * dy;
        Ok(Self::with_tolerance(
            2.0 * foot_x - self.x,
            2.0 * foot_y - self.y,
            self.tolerance,
        ))
    }

    /// Returns this coordinate skewed within the reference box spanned by
    /// `stationary` and `skewing`.
    ///
    /// Points on the stationary edges of the box do not move; points on the
    /// skewing edges shift by the full `magnitude`. Each component shifts in
    /// proportion to the coordinate's position across the box in the
    /// opposite axis.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] when the box is degenerate
    /// (zero height for an x-shift, zero width for a y-shift).
    pub fn skewed_within_box(
        &self,
        stationary: &Self,
        skewing: &Self,
        magnitude: &CartesianOffset,
    ) -> Result<Self> {
        let mut x = self.x;
        let mut y = self.y;

        if magnitude.x() != 0.0 {
            let height = skewing.y - stationary.y;
            if height == 0.0 {
                return Err(GeometryError::DivideByZero {
                    context: "skewing across a zero-height reference box",
                });
            }
            x += magnitude.x() * (self.y - stationary.y) / height;
        }
        if magnitude.y() != 0.0 {
            let width = skewing.x - stationary.x;
            if width == 0.0 {
                return Err(GeometryError::DivideByZero {
                    context: "skewing across a zero-width reference box",
                });
            }
            y += magnitude.y() * (self.x - stationary.x) / width;
        }

        Ok(Self::with_tolerance(x, y, self.tolerance))
    }

    /// Converts this coordinate to polar form about the origin.
    #[must_use]
    pub fn to_polar(&self) -> PolarCoordinate {
        PolarCoordinate::with_tolerance(
            self.x.hypot(self.y),
            Angle::from_origin(self.x, self.y),
            self.tolerance,
        )
    }
}

impl Sub for CartesianCoordinate {
    type Output = CartesianOffset;

    /// `self - other` is the directed offset from `other` to `self`.
    fn sub(self, other: Self) -> CartesianOffset {
        CartesianOffset::new(other, self)
    }
}

impl Add<CartesianOffset> for CartesianCoordinate {
    type Output = Self;

    /// Translates the coordinate by the offset's separation.
    fn add(self, offset: CartesianOffset) -> Self {
        Self::with_tolerance(
            self.x + offset.x(),
            self.y + offset.y(),
            resolve_tolerance(self.tolerance, offset.tolerance(), None),
        )
    }
}
