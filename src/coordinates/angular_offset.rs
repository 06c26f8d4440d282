use crate::error::{GeometryError, Result};
use crate::numerics::resolve_tolerance;

use super::Angle;

/// The directed difference `J - I` between two angles.
#[derive(Debug, Clone, Copy)]
pub struct AngularOffset {
    i: Angle,
    j: Angle,
    tolerance: f64,
}

impl AngularOffset {
    /// Creates the directed angular offset from `i` to `j`.
    #[must_use]
    pub fn new(i: Angle, j: Angle) -> Self {
        let tolerance = resolve_tolerance(i.tolerance(), j.tolerance(), None);
        Self { i, j, tolerance }
    }

    /// Creates an offset from zero to the given raw radian measure.
    #[must_use]
    pub fn from_delta_radians(radians: f64) -> Self {
        Self::new(Angle::from_radians(0.0), Angle::from_radians(radians))
    }

    /// Returns the starting angle `I`.
    #[must_use]
    pub fn i(&self) -> Angle {
        self.i
    }

    /// Returns the ending angle `J`.
    #[must_use]
    pub fn j(&self) -> Angle {
        self.j
    }

    /// Returns the tolerance used in comparisons involving this offset.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the swept angle `J - I` of the raw measures.
    #[must_use]
    pub fn delta(&self) -> Angle {
        self.j.minus(&self.i)
    }

    /// Returns the straight chord length subtended at the given radius:
    /// `2 * r * sin(delta / 2)`.
    #[must_use]
    pub fn length_chord(&self, radius: f64) -> f64 {
        2.0 * radius * (self.delta().radians() / 2.0).sin()
    }

    /// Returns the arc length swept at the given radius: `r * delta`.
    #[must_use]
    pub fn length_arc(&self, radius: f64) -> f64 {
        radius * self.delta().radians_raw()
    }

    /// Returns this offset with the swept angle scaled about `I`.
    #[must_use]
    pub fn scaled_by(&self, multiplier: f64) -> Self {
        let j = self.i.plus(&self.delta().multiplied_by(multiplier));
        Self::new(self.i, j)
    }

    /// Returns this offset with the swept angle divided by `denominator`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DivideByZero`] when `denominator` is zero.
    pub fn divided_by(&self, denominator: f64) -> Result<Self> {
        if denominator == 0.0 {
            return Err(GeometryError::DivideByZero {
                context: "dividing an angular offset",
            });
        }
        Ok(self.scaled_by(1.0 / denominator))
    }
}
