use crate::coordinates::{Angle, CartesianCoordinate};
use crate::error::{GeometryError, Result};
use crate::numerics::{
    are_equal, is_negative_sign, is_positive_sign, is_zero_sign, resolve_tolerance, Rotation2,
    Vector2, GEOMETRIC_TOLERANCE,
};

/// A 2D vector with a location anchor.
///
/// The location anchors the vector for tangent/normal derivation but takes
/// no part in its algebra; two vectors with equal components are
/// algebraically identical wherever they sit.
#[derive(Debug, Clone, Copy)]
pub struct Vector {
    x_component: f64,
    y_component: f64,
    location: CartesianCoordinate,
    tolerance: f64,
}

impl Vector {
    /// Creates a vector from raw components, anchored at the origin.
    #[must_use]
    pub fn new(x_component: f64, y_component: f64) -> Self {
        Self::with_location(x_component, y_component, CartesianCoordinate::origin())
    }

    /// Creates a vector from raw components anchored at `location`.
    #[must_use]
    pub fn with_location(x_component: f64, y_component: f64, location: CartesianCoordinate) -> Self {
        Self {
            x_component,
            y_component,
            location,
            tolerance: GEOMETRIC_TOLERANCE,
        }
    }

    /// Creates the vector pointing from `i` to `j`, anchored at `i`.
    #[must_use]
    pub fn from_coordinates(i: CartesianCoordinate, j: CartesianCoordinate) -> Self {
        Self {
            x_component: j.x() - i.x(),
            y_component: j.y() - i.y(),
            location: i,
            tolerance: resolve_tolerance(i.tolerance(), j.tolerance(), None),
        }
    }

    /// Returns the x-component.
    #[must_use]
    pub fn x_component(&self) -> f64 {
        self.x_component
    }

    /// Returns the y-component.
    #[must_use]
    pub fn y_component(&self) -> f64 {
        self.y_component
    }

    /// Returns the location anchoring this vector.
    #[must_use]
    pub fn location(&self) -> CartesianCoordinate {
        self.location
    }

    /// Returns the tolerance used in comparisons involving this vector.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    fn components(&self) -> Vector2 {
        Vector2::new(self.x_component, self.y_component)
    }

    /// Returns the vector's magnitude.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.components().norm()
    }

    /// Returns the dot product with `other`.
    #[must_use]
    pub fn dot_product(&self, other: &Self) -> f64 {
        self.components().dot(&other.components())
    }

    /// Returns the scalar (z) cross product with `other`.
    #[must_use]
    pub fn cross_product(&self, other: &Self) -> f64 {
        self.x_component * other.y_component - self.y_component * other.x_component
    }

    /// Returns the signed area of the triangle spanned with `other`:
    /// half the cross product.
    #[must_use]
    pub fn area(&self, other: &Self) -> f64 {
        0.5 * self.cross_product(other)
    }

    /// Returns the concavity/collinearity value with `other`:
    /// `dot / (|v1| * |v2|)`, clamped to `[-1, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] when either vector has zero
    /// magnitude.
    pub fn concavity_collinearity(&self, other: &Self) -> Result<f64> {
        let denominator = self.magnitude() * other.magnitude();
        if denominator == 0.0 {
            return Err(GeometryError::DivideByZero {
                context: "classifying a zero-magnitude vector",
            });
        }
        Ok((self.dot_product(other) / denominator).clamp(-1.0, 1.0))
    }

    fn resolved_tolerance(&self, other: &Self) -> f64 {
        resolve_tolerance(self.tolerance, other.tolerance, None)
    }

    /// Returns whether the two vectors are collinear and point the same way
    /// (concavity/collinearity value of 1).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] when either vector has zero
    /// magnitude.
    pub fn is_collinear_same_direction(&self, other: &Self) -> Result<bool> {
        let c = self.concavity_collinearity(other)?;
        Ok(are_equal(c, 1.0, self.resolved_tolerance(other)))
    }

    /// Returns whether the two vectors are concave: pointing partly the
    /// same way without being collinear (value strictly between 0 and 1).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] when either vector has zero
    /// magnitude.
    pub fn is_concave(&self, other: &Self) -> Result<bool> {
        let c = self.concavity_collinearity(other)?;
        let tolerance = self.resolved_tolerance(other);
        Ok(is_positive_sign(c, tolerance) && !are_equal(c, 1.0, tolerance))
    }

    /// Returns whether the two vectors are orthogonal (value of 0).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] when either vector has zero
    /// magnitude.
    pub fn is_orthogonal(&self, other: &Self) -> Result<bool> {
        let c = self.concavity_collinearity(other)?;
        Ok(is_zero_sign(c, self.resolved_tolerance(other)))
    }

    /// Returns whether the two vectors are convex: pointing partly opposite
    /// ways without being collinear (value strictly between -1 and 0).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] when either vector has zero
    /// magnitude.
    pub fn is_convex(&self, other: &Self) -> Result<bool> {
        let c = self.concavity_collinearity(other)?;
        let tolerance = self.resolved_tolerance(other);
        Ok(is_negative_sign(c, tolerance) && !are_equal(c, -1.0, tolerance))
    }

    /// Returns whether the two vectors are collinear and point opposite
    /// ways (value of -1).
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] when either vector has zero
    /// magnitude.
    pub fn is_collinear_opposite_direction(&self, other: &Self) -> Result<bool> {
        let c = self.concavity_collinearity(other)?;
        Ok(are_equal(c, -1.0, self.resolved_tolerance(other)))
    }

    /// Returns whether the curvature implied by following this vector and
    /// then `other` bends to the left of the directed path (positive signed
    /// area).
    #[must_use]
    pub fn is_concave_inside(&self, other: &Self) -> bool {
        is_positive_sign(self.area(other), self.resolved_tolerance(other))
    }

    /// Returns whether the curvature bends to the right of the directed
    /// path (negative signed area).
    #[must_use]
    pub fn is_convex_inside(&self, other: &Self) -> bool {
        is_negative_sign(self.area(other), self.resolved_tolerance(other))
    }

    /// Returns this vector normalized to unit magnitude.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] for a zero-magnitude vector.
    pub fn unit_vector(&self) -> Result<Self> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(GeometryError::DivideByZero {
                context: "normalizing a zero-magnitude vector",
            });
        }
        Ok(Self {
            x_component: self.x_component / magnitude,
            y_component: self.y_component / magnitude,
            location: self.location,
            tolerance: self.tolerance,
        })
    }

    /// Returns the unit tangent along this vector: `(dx, dy) / |v|`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] for a zero-magnitude vector.
    pub fn unit_tangent_vector(&self) -> Result<Self> {
        self.unit_vector()
    }

    /// Returns the unit normal to this vector: `(-dy, dx) / |v|`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] for a zero-magnitude vector.
    pub fn unit_normal_vector(&self) -> Result<Self> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(GeometryError::DivideByZero {
                context: "deriving the normal of a zero-magnitude vector",
            });
        }
        Ok(Self {
            x_component: -self.y_component / magnitude,
            y_component: self.x_component / magnitude,
            location: self.location,
            tolerance: self.tolerance,
        })
    }

    /// Returns this vector rotated by `angle` about its location.
    #[must_use]
    pub fn rotated_by(&self, angle: &Angle) -> Self {
        let rotated = Rotation2::new(angle.radians_raw()) * self.components();
        Self {
            x_component: rotated.x,
            y_component: rotated.y,
            location: self.location,
            tolerance: self.tolerance,
        }
    }

    /// Returns this vector with both components scaled.
    #[must_use]
    pub fn scaled_by(&self, multiplier: f64) -> Self {
        Self {
            x_component: self.x_component * multiplier,
            y_component: self.y_component * multiplier,
            location: self.location,
            tolerance: self.tolerance,
        }
    }

    /// Returns this vector with both components divided by `denominator`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] when `denominator` is zero.
    pub fn divided_by(&self, denominator: f64) -> Result<Self> {
        if denominator == 0.0 {
            return Err(GeometryError::DivideByZero {
                context: "dividing a vector",
            });
        }
        Ok(self.scaled_by(1.0 / denominator))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    const TOL: f64 = 1e-10;

    fn v(x: f64, y: f64) -> Vector {
        Vector::new(x, y)
    }

    // ── algebra ──

    #[test]
    fn magnitude_and_products() {
        let a = v(3.0, 4.0);
        let b = v(1.0, 0.0);
        assert!((a.magnitude() - 5.0).abs() < TOL);
        assert!((a.dot_product(&b) - 3.0).abs() < TOL);
        assert!((a.cross_product(&b) + 4.0).abs() < TOL);
    }

    #[test]
    fn from_coordinates_anchors_at_i() {
        let i = CartesianCoordinate::new(1.0, 1.0);
        let j = CartesianCoordinate::new(4.0, 5.0);
        let vector = Vector::from_coordinates(i, j);
        assert!((vector.x_component() - 3.0).abs() < TOL);
        assert!((vector.y_component() - 4.0).abs() < TOL);
        assert!(vector.location().is_equal_to(&i));
    }

    // ── classification ──

    #[test]
    fn classification_is_mutually_exclusive() {
        let reference = v(1.0, 0.0);
        let cases = [
            v(2.0, 0.0),   // collinear, same direction
            v(1.0, 1.0),   // concave
            v(0.0, 1.0),   // orthogonal
            v(-1.0, 1.0),  // convex
            v(-3.0, 0.0),  // collinear, opposite direction
        ];
        for (index, other) in cases.iter().enumerate() {
            let classified = [
                reference.is_collinear_same_direction(other).unwrap(),
                reference.is_concave(other).unwrap(),
                reference.is_orthogonal(other).unwrap(),
                reference.is_convex(other).unwrap(),
                reference.is_collinear_opposite_direction(other).unwrap(),
            ];
            assert_eq!(
                classified.iter().filter(|&&c| c).count(),
                1,
                "case {index}: {classified:?}"
            );
            assert!(classified[index], "case {index}: {classified:?}");
        }
    }

    #[test]
    fn classification_matches_concavity_value() {
        let a = v(1.0, 0.0);
        let b = v(1.0, 1.0);
        let c = a.concavity_collinearity(&b).unwrap();
        assert!((c - 1.0 / 2.0_f64.sqrt()).abs() < TOL);
        assert!(a.is_concave(&b).unwrap());
    }

    #[test]
    fn zero_vector_classification_is_reported() {
        let zero = v(0.0, 0.0);
        assert!(matches!(
            v(1.0, 0.0).is_orthogonal(&zero),
            Err(GeometryError::DivideByZero { .. })
        ));
    }

    #[test]
    fn inside_variants_use_signed_area() {
        let along = v(1.0, 0.0);
        let left = v(0.0, 1.0);
        let right = v(0.0, -1.0);
        assert!(along.is_concave_inside(&left));
        assert!(!along.is_convex_inside(&left));
        assert!(along.is_convex_inside(&right));
        // Collinear path: neither side.
        assert!(!along.is_concave_inside(&v(2.0, 0.0)));
        assert!(!along.is_convex_inside(&v(2.0, 0.0)));
    }

    // ── tangent / normal ──

    #[test]
    fn unit_tangent_and_normal() {
        let vector = v(3.0, 4.0);
        let tangent = vector.unit_tangent_vector().unwrap();
        let normal = vector.unit_normal_vector().unwrap();
        assert!((tangent.x_component() - 0.6).abs() < TOL);
        assert!((tangent.y_component() - 0.8).abs() < TOL);
        assert!((normal.x_component() + 0.8).abs() < TOL);
        assert!((normal.y_component() - 0.6).abs() < TOL);
        assert!(tangent.is_orthogonal(&normal).unwrap());
    }

    #[test]
    fn zero_vector_normalization_is_reported() {
        assert!(v(0.0, 0.0).unit_vector().is_err());
        assert!(v(0.0, 0.0).unit_normal_vector().is_err());
    }

    // ── transforms ──

    #[test]
    fn rotation_by_quarter_turn() {
        let rotated = v(1.0, 0.0).rotated_by(&Angle::from_radians(FRAC_PI_2));
        assert!(rotated.x_component().abs() < TOL);
        assert!((rotated.y_component() - 1.0).abs() < TOL);
    }

    #[test]
    fn divide_by_zero_is_reported() {
        assert!(matches!(
            v(1.0, 2.0).divided_by(0.0),
            Err(GeometryError::DivideByZero { .. })
        ));
    }
}
