use std::sync::{Arc, OnceLock};

use crate::coordinates::CartesianCoordinate;
use crate::error::{GeometryError, Result};
use crate::numerics::{are_equal, is_zero_sign, resolve_tolerance};
use crate::parametrics::components::LinearParametric;
use crate::parametrics::CartesianParametricEquation;
use crate::vectors::Vector;

/// An infinite line through two control points `I` and `J`.
///
/// The parametric domain maps `t = 0` to `I` and `t = 1` to `J`.
#[derive(Debug, Clone)]
pub struct LinearCurve {
    i: CartesianCoordinate,
    j: CartesianCoordinate,
    tolerance: f64,
    equation: OnceLock<CartesianParametricEquation>,
}

impl LinearCurve {
    /// Creates a line through the two control points.
    #[must_use]
    pub fn new(i: CartesianCoordinate, j: CartesianCoordinate) -> Self {
        Self {
            i,
            j,
            tolerance: resolve_tolerance(i.tolerance(), j.tolerance(), None),
            equation: OnceLock::new(),
        }
    }

    /// Returns the first control point `I`.
    #[must_use]
    pub fn i(&self) -> CartesianCoordinate {
        self.i
    }

    /// Returns the second control point `J`.
    #[must_use]
    pub fn j(&self) -> CartesianCoordinate {
        self.j
    }

    /// Returns the tolerance used in comparisons involving this curve.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the separation between the control points.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.i.distance_to(&self.j)
    }

    /// Returns the direction vector from `I` to `J`, anchored at `I`.
    #[must_use]
    pub fn vector(&self) -> Vector {
        Vector::from_coordinates(self.i, self.j)
    }

    /// Returns the lazily-built parametric equation, interpolating each
    /// axis from `I` to `J`.
    pub fn parametric_equation(&self) -> &CartesianParametricEquation {
        self.equation.get_or_init(|| {
            CartesianParametricEquation::new(
                Arc::new(LinearParametric::new(self.i.x(), self.j.x())),
                Arc::new(LinearParametric::new(self.i.y(), self.j.y())),
            )
        })
    }

    /// Returns the slope `rise / run`.
    ///
    /// A vertical line yields `+Infinity` when `J` is above `I` and
    /// `-Infinity` when below.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] when both rise and run
    /// are zero.
    pub fn slope(&self) -> Result<f64> {
        let run = self.j.x() - self.i.x();
        let rise = self.j.y() - self.i.y();
        if is_zero_sign(run, self.tolerance) && is_zero_sign(rise, self.tolerance) {
            return Err(GeometryError::InvalidArgument(
                "slope is undefined for coincident control points".into(),
            ));
        }
        if is_zero_sign(run, self.tolerance) {
            return Ok(if rise > 0.0 {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            });
        }
        Ok(rise / run)
    }

    /// Returns the y-intercept, or `+Infinity` for a vertical line.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] when the control points
    /// coincide.
    pub fn intercept_y(&self) -> Result<f64> {
        let slope = self.slope()?;
        if slope.is_infinite() {
            return Ok(f64::INFINITY);
        }
        Ok(self.i.y() - slope * self.i.x())
    }

    /// Returns the x-intercept, or `+Infinity` for a horizontal line.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] when the control points
    /// coincide.
    pub fn intercept_x(&self) -> Result<f64> {
        let slope = self.slope()?;
        if is_zero_sign(slope, self.tolerance) {
            return Ok(f64::INFINITY);
        }
        if slope.is_infinite() {
            return Ok(self.i.x());
        }
        Ok(self.i.x() - self.i.y() / slope)
    }

    /// Returns whether the line is horizontal.
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        are_equal(self.i.y(), self.j.y(), self.tolerance)
    }

    /// Returns whether the line is vertical.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        are_equal(self.i.x(), self.j.x(), self.tolerance)
    }

    /// Returns whether two lines are parallel.
    ///
    /// The vertical degenerate case is handled explicitly before falling
    /// back to numeric slope comparison.
    #[must_use]
    pub fn is_parallel(&self, other: &Self) -> bool {
        let tolerance = resolve_tolerance(self.tolerance, other.tolerance, None);
        match (self.is_vertical(), other.is_vertical()) {
            (true, true) => true,
            (true, false) | (false, true) => false,
            (false, false) => match (self.slope(), other.slope()) {
                (Ok(a), Ok(b)) => are_equal(a, b, tolerance),
                _ => false,
            },
        }
    }

    /// Returns whether two lines are perpendicular.
    #[must_use]
    pub fn is_perpendicular(&self, other: &Self) -> bool {
        let tolerance = resolve_tolerance(self.tolerance, other.tolerance, None);
        match (self.is_vertical(), other.is_vertical()) {
            (true, true) => false,
            (true, false) => other.is_horizontal(),
            (false, true) => self.is_horizontal(),
            (false, false) => match (self.slope(), other.slope()) {
                (Ok(a), Ok(b)) => are_equal(a * b, -1.0, tolerance),
                _ => false,
            },
        }
    }

    /// Returns the x for a given y on the line.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] for a horizontal line,
    /// where x is not a function of y.
    pub fn x_at_y(&self, y: f64) -> Result<f64> {
        if self.is_vertical() {
            return Ok(self.i.x());
        }
        if self.is_horizontal() {
            return Err(GeometryError::InvalidArgument(
                "x is not a function of y on a horizontal line".into(),
            ));
        }
        let run = self.j.x() - self.i.x();
        let rise = self.j.y() - self.i.y();
        Ok(self.i.x() + (y - self.i.y()) * run / rise)
    }

    /// Returns the y for a given x on the line.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] for a vertical line,
    /// where y is not a function of x.
    pub fn y_at_x(&self, x: f64) -> Result<f64> {
        if self.is_vertical() {
            return Err(GeometryError::InvalidArgument(
                "y is not a function of x on a vertical line".into(),
            ));
        }
        let slope = self.slope()?;
        Ok(self.i.y() + slope * (x - self.i.x()))
    }

    /// Returns whether the coordinate lies on the infinite line, within the
    /// resolved tolerance of the pair.
    #[must_use]
    pub fn is_intersecting_coordinate(&self, coordinate: &CartesianCoordinate) -> bool {
        let tolerance = resolve_tolerance(self.tolerance, coordinate.tolerance(), None);
        let length = self.length();
        if is_zero_sign(length, tolerance) {
            return self.i.is_equal_to(coordinate);
        }
        // Perpendicular distance from the point to the infinite line.
        let cross = (self.j.x() - self.i.x()) * (coordinate.y() - self.i.y())
            - (self.j.y() - self.i.y()) * (coordinate.x() - self.i.x());
        is_zero_sign(cross / length, tolerance)
    }

    /// Returns the intersection of two infinite lines.
    ///
    /// The four degenerate configurations (one or both lines vertical, one
    /// or both horizontal) are branched on before the general
    /// slope-intercept solve.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] when the lines are
    /// parallel.
    pub fn line_intersect(&self, other: &Self) -> Result<CartesianCoordinate> {
        let tolerance = resolve_tolerance(self.tolerance, other.tolerance, None);
        if self.is_parallel(other) {
            return Err(GeometryError::InvalidArgument(
                "parallel lines do not intersect at a point".into(),
            ));
        }

        if self.is_vertical() {
            let x = self.i.x();
            return Ok(CartesianCoordinate::with_tolerance(
                x,
                other.y_at_x(x)?,
                tolerance,
            ));
        }
        if other.is_vertical() {
            let x = other.i.x();
            return Ok(CartesianCoordinate::with_tolerance(
                x,
                self.y_at_x(x)?,
                tolerance,
            ));
        }
        if self.is_horizontal() {
            let y = self.i.y();
            return Ok(CartesianCoordinate::with_tolerance(
                other.x_at_y(y)?,
                y,
                tolerance,
            ));
        }
        if other.is_horizontal() {
            let y = other.i.y();
            return Ok(CartesianCoordinate::with_tolerance(
                self.x_at_y(y)?,
                y,
                tolerance,
            ));
        }

        let slope_1 = self.slope()?;
        let slope_2 = other.slope()?;
        let intercept_1 = self.intercept_y()?;
        let intercept_2 = other.intercept_y()?;
        let x = (intercept_2 - intercept_1) / (slope_1 - slope_2);
        Ok(CartesianCoordinate::with_tolerance(
            x,
            slope_1 * x + intercept_1,
            tolerance,
        ))
    }

    /// Returns the perpendicular projection of a point onto this line.
    ///
    /// Built the way the geometry reads: an auxiliary line through the
    /// point along this line's normal direction, intersected with this
    /// line.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] when the control points
    /// coincide (the line has no direction).
    pub fn coordinate_of_perpendicular_projection(
        &self,
        point: &CartesianCoordinate,
    ) -> Result<CartesianCoordinate> {
        let normal = self.vector().unit_normal_vector()?;
        let through = CartesianCoordinate::with_tolerance(
            point.x() + normal.x_component(),
            point.y() + normal.y_component(),
            point.tolerance(),
        );
        let auxiliary = Self::new(*point, through);
        self.line_intersect(&auxiliary)
    }
}
