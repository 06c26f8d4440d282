use std::sync::Arc;

use crate::coordinates::{Angle, PolarCoordinate};
use crate::error::Result;

use super::{ParametricComponent, ParametricFunction};

/// A polar parametric equation: paired radius and azimuth components over
/// one shared parameter.
#[derive(Debug, Clone)]
pub struct PolarParametricEquation {
    radius: ParametricComponent,
    azimuth: ParametricComponent,
}

impl PolarParametricEquation {
    /// Creates an equation from the radius and azimuth functions.
    #[must_use]
    pub fn new(
        radius_function: Arc<dyn ParametricFunction>,
        azimuth_function: Arc<dyn ParametricFunction>,
    ) -> Self {
        Self {
            radius: ParametricComponent::new(radius_function),
            azimuth: ParametricComponent::new(azimuth_function),
        }
    }

    /// Returns the radius component.
    #[must_use]
    pub fn radius(&self) -> &ParametricComponent {
        &self.radius
    }

    /// Returns the azimuth component.
    #[must_use]
    pub fn azimuth(&self) -> &ParametricComponent {
        &self.azimuth
    }

    /// Evaluates the radius at the current differentiation level.
    #[must_use]
    pub fn radius_at(&self, parameter: f64) -> f64 {
        self.radius.value_at(parameter)
    }

    /// Evaluates the azimuth at the current differentiation level.
    #[must_use]
    pub fn azimuth_at(&self, parameter: f64) -> f64 {
        self.azimuth.value_at(parameter)
    }

    /// Evaluates the first derivative of the radius.
    #[must_use]
    pub fn radius_prime_at(&self, parameter: f64) -> f64 {
        self.radius.prime_at(parameter)
    }

    /// Evaluates the second derivative of the radius.
    #[must_use]
    pub fn radius_prime_double_at(&self, parameter: f64) -> f64 {
        self.radius.prime_double_at(parameter)
    }

    /// Evaluates both components into a polar coordinate.
    #[must_use]
    pub fn coordinate_at(&self, parameter: f64) -> PolarCoordinate {
        PolarCoordinate::new(
            self.radius_at(parameter),
            Angle::from_radians(self.azimuth_at(parameter)),
        )
    }

    /// Returns whether both components have a deeper derivative.
    #[must_use]
    pub fn has_differential(&self) -> bool {
        self.radius.has_differential() && self.azimuth.has_differential()
    }

    /// Steps both components one level deeper into their chains.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeometryError::OutOfRange`] when either chain has
    /// no deeper derivative.
    pub fn differentiated(&self) -> Result<Self> {
        Ok(Self {
            radius: self.radius.differentiated()?,
            azimuth: self.azimuth.differentiated()?,
        })
    }

    /// Returns this equation with the radius scaled by `multiplier`.
    ///
    /// Scaling a polar form scales only the radius; the azimuth is a
    /// direction and is left untouched.
    #[must_use]
    pub fn multiplied_by(&self, multiplier: f64) -> Self {
        Self {
            radius: self.radius.multiplied_by(multiplier),
            azimuth: self.azimuth.clone(),
        }
    }

    /// Returns this equation with the radius divided by `denominator`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeometryError::DivideByZero`] when `denominator`
    /// is zero.
    pub fn divided_by(&self, denominator: f64) -> Result<Self> {
        Ok(Self {
            radius: self.radius.divided_by(denominator)?,
            azimuth: self.azimuth.clone(),
        })
    }
}
