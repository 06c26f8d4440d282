//! Parametric-component framework.
//!
//! Every curve is represented by a pair of scalar functions of one
//! parameter together with their hand-derived analytic derivatives. The
//! framework performs no symbolic or numeric differentiation itself: each
//! concrete [`ParametricFunction`] supplies its base form and its first and
//! second derivatives as closed forms, and a [`ParametricComponent`] walks
//! that fixed three-level chain.

pub mod cartesian;
pub mod components;
pub mod polar;

use std::fmt;
use std::sync::Arc;

use crate::error::{GeometryError, Result};

pub use cartesian::CartesianParametricEquation;
pub use polar::PolarParametricEquation;

/// A closed-form scalar function of one parameter together with its first
/// and second analytic derivatives.
///
/// The second derivative terminates the chain; where a function's true
/// second derivative is constant or zero, `prime_double_at` returns that
/// well-defined constant rather than signalling an error.
pub trait ParametricFunction: fmt::Debug + Send + Sync {
    /// Evaluates the base function at `parameter`.
    fn base_at(&self, parameter: f64) -> f64;

    /// Evaluates the first derivative at `parameter`.
    fn prime_at(&self, parameter: f64) -> f64;

    /// Evaluates the second derivative at `parameter`.
    fn prime_double_at(&self, parameter: f64) -> f64;
}

/// Cursor into the fixed three-level differentiation chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifferentialLevel {
    /// The base function.
    Base,
    /// The first derivative.
    Prime,
    /// The second derivative, terminating the chain.
    PrimeDouble,
}

impl DifferentialLevel {
    /// Returns the next level down the chain, if one exists.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Base => Some(Self::Prime),
            Self::Prime => Some(Self::PrimeDouble),
            Self::PrimeDouble => None,
        }
    }

    /// Returns whether a deeper derivative exists past this level.
    #[must_use]
    pub fn has_differential(self) -> bool {
        !matches!(self, Self::PrimeDouble)
    }
}

/// One axis of a parametric equation: a [`ParametricFunction`] together
/// with a uniform scale and a differentiation cursor.
///
/// The scale applies to every level of the chain simultaneously, since the
/// derivative of `k * f(t)` is `k * f'(t)`.
#[derive(Debug, Clone)]
pub struct ParametricComponent {
    function: Arc<dyn ParametricFunction>,
    scale: f64,
    level: DifferentialLevel,
}

impl ParametricComponent {
    /// Creates a component positioned at the base of its chain.
    #[must_use]
    pub fn new(function: Arc<dyn ParametricFunction>) -> Self {
        Self {
            function,
            scale: 1.0,
            level: DifferentialLevel::Base,
        }
    }

    /// Returns the current differentiation level.
    #[must_use]
    pub fn level(&self) -> DifferentialLevel {
        self.level
    }

    /// Returns whether the chain continues past the current level.
    #[must_use]
    pub fn has_differential(&self) -> bool {
        self.level.has_differential()
    }

    /// Evaluates the chain at the current level.
    #[must_use]
    pub fn value_at(&self, parameter: f64) -> f64 {
        let raw = match self.level {
            DifferentialLevel::Base => self.function.base_at(parameter),
            DifferentialLevel::Prime => self.function.prime_at(parameter),
            DifferentialLevel::PrimeDouble => self.function.prime_double_at(parameter),
        };
        self.scale * raw
    }

    /// Evaluates the base function, regardless of the cursor position.
    #[must_use]
    pub fn base_at(&self, parameter: f64) -> f64 {
        self.scale * self.function.base_at(parameter)
    }

    /// Evaluates the first derivative, regardless of the cursor position.
    #[must_use]
    pub fn prime_at(&self, parameter: f64) -> f64 {
        self.scale * self.function.prime_at(parameter)
    }

    /// Evaluates the second derivative, regardless of the cursor position.
    #[must_use]
    pub fn prime_double_at(&self, parameter: f64) -> f64 {
        self.scale * self.function.prime_double_at(parameter)
    }

    /// Steps one level deeper into the chain.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::OutOfRange`] when the chain has no deeper
    /// derivative.
    pub fn differentiated(&self) -> Result<Self> {
        let level = self.level.next().ok_or(GeometryError::OutOfRange {
            parameter: "differential level",
            value: 2.0,
            reason: "the chain ends at the second derivative".into(),
        })?;
        Ok(Self {
            function: Arc::clone(&self.function),
            scale: self.scale,
            level,
        })
    }

    /// Returns this component with every level scaled by `multiplier`.
    #[must_use]
    pub fn multiplied_by(&self, multiplier: f64) -> Self {
        Self {
            function: Arc::clone(&self.function),
            scale: self.scale * multiplier,
            level: self.level,
        }
    }

    /// Returns this component with every level divided by `denominator`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] when `denominator` is zero.
    pub fn divided_by(&self, denominator: f64) -> Result<Self> {
        if denominator == 0.0 {
            return Err(GeometryError::DivideByZero {
                context: "scaling a parametric component",
            });
        }
        Ok(self.multiplied_by(1.0 / denominator))
    }
}
