use std::sync::Arc;

use crate::coordinates::CartesianCoordinate;
use crate::error::Result;

use super::{ParametricComponent, ParametricFunction};

/// A Cartesian parametric equation: paired x and y components over one
/// shared parameter.
#[derive(Debug, Clone)]
pub struct CartesianParametricEquation {
    x: ParametricComponent,
    y: ParametricComponent,
}

impl CartesianParametricEquation {
    /// Creates an equation from the two axis functions.
    #[must_use]
    pub fn new(
        x_function: Arc<dyn ParametricFunction>,
        y_function: Arc<dyn ParametricFunction>,
    ) -> Self {
        Self {
            x: ParametricComponent::new(x_function),
            y: ParametricComponent::new(y_function),
        }
    }

    /// Creates an equation from two already-built components.
    #[must_use]
    pub fn from_components(x: ParametricComponent, y: ParametricComponent) -> Self {
        Self { x, y }
    }

    /// Returns the x component.
    #[must_use]
    pub fn x(&self) -> &ParametricComponent {
        &self.x
    }

    /// Returns the y component.
    #[must_use]
    pub fn y(&self) -> &ParametricComponent {
        &self.y
    }

    /// Evaluates x at the current differentiation level.
    #[must_use]
    pub fn x_at(&self, parameter: f64) -> f64 {
        self.x.value_at(parameter)
    }

    /// Evaluates y at the current differentiation level.
    #[must_use]
    pub fn y_at(&self, parameter: f64) -> f64 {
        self.y.value_at(parameter)
    }

    /// Evaluates the first derivative of x.
    #[must_use]
    pub fn x_prime_at(&self, parameter: f64) -> f64 {
        self.x.prime_at(parameter)
    }

    /// Evaluates the first derivative of y.
    #[must_use]
    pub fn y_prime_at(&self, parameter: f64) -> f64 {
        self.y.prime_at(parameter)
    }

    /// Evaluates the second derivative of x.
    #[must_use]
    pub fn x_prime_double_at(&self, parameter: f64) -> f64 {
        self.x.prime_double_at(parameter)
    }

    /// Evaluates the second derivative of y.
    #[must_use]
    pub fn y_prime_double_at(&self, parameter: f64) -> f64 {
        self.y.prime_double_at(parameter)
    }

    /// Evaluates both axes into a coordinate.
    #[must_use]
    pub fn coordinate_at(&self, parameter: f64) -> CartesianCoordinate {
        CartesianCoordinate::new(self.x_at(parameter), self.y_at(parameter))
    }

    /// Returns whether both axes have a deeper derivative.
    #[must_use]
    pub fn has_differential(&self) -> bool {
        self.x.has_differential() && self.y.has_differential()
    }

    /// Steps both axes one level deeper into their chains.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeometryError::OutOfRange`] when either chain has
    /// no deeper derivative.
    pub fn differentiated(&self) -> Result<Self> {
        Ok(Self {
            x: self.x.differentiated()?,
            y: self.y.differentiated()?,
        })
    }

    /// Returns this equation with both axes scaled by `multiplier`.
    #[must_use]
    pub fn multiplied_by(&self, multiplier: f64) -> Self {
        Self {
            x: self.x.multiplied_by(multiplier),
            y: self.y.multiplied_by(multiplier),
        }
    }

    /// Returns this equation with both axes divided by `denominator`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeometryError::DivideByZero`] when `denominator`
    /// is zero.
    pub fn divided_by(&self, denominator: f64) -> Result<Self> {
        Ok(Self {
            x: self.x.divided_by(denominator)?,
            y: self.y.divided_by(denominator)?,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::super::components::{CosineParametric, SineParametric};
    use super::*;

    const TOL: f64 = 1e-10;

    fn elliptical(a: f64, b: f64) -> CartesianParametricEquation {
        CartesianParametricEquation::new(
            Arc::new(CosineParametric::new(a)),
            Arc::new(SineParametric::new(b)),
        )
    }

    #[test]
    fn evaluates_both_axes() {
        let equation = elliptical(3.0, 2.0);
        assert!((equation.x_at(0.0) - 3.0).abs() < TOL);
        assert!(equation.y_at(0.0).abs() < TOL);
        assert!((equation.y_at(FRAC_PI_2) - 2.0).abs() < TOL);
        let coordinate = equation.coordinate_at(0.0);
        assert!(coordinate.is_equal_to(&CartesianCoordinate::new(3.0, 0.0)));
    }

    #[test]
    fn differentiates_both_axes_in_lockstep() {
        let prime = elliptical(3.0, 2.0).differentiated().unwrap();
        // x' = -3 sin, y' = 2 cos.
        assert!(prime.x_at(FRAC_PI_2).abs() > 2.9);
        assert!((prime.y_at(0.0) - 2.0).abs() < TOL);
        let double = prime.differentiated().unwrap();
        assert!(!double.has_differential());
        assert!(double.differentiated().is_err());
    }

    #[test]
    fn scaling_applies_to_both_axes() {
        let scaled = elliptical(3.0, 2.0).multiplied_by(2.0);
        assert!((scaled.x_at(0.0) - 6.0).abs() < TOL);
        assert!((scaled.y_at(FRAC_PI_2) - 4.0).abs() < TOL);
        let divided = scaled.divided_by(2.0).unwrap();
        assert!((divided.x_at(0.0) - 3.0).abs() < TOL);
    }
}
