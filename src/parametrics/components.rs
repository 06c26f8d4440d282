//! Concrete parametric functions, one per curve axis.
//!
//! Each supplies its base form and hand-derived first and second
//! derivatives as closed forms.

use super::ParametricFunction;

/// Linear interpolation between two values: `f(t) = start + t * (end - start)`.
#[derive(Debug, Clone, Copy)]
pub struct LinearParametric {
    start: f64,
    end: f64,
}

impl LinearParametric {
    /// Creates the interpolation from `start` (t = 0) to `end` (t = 1).
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}

impl ParametricFunction for LinearParametric {
    fn base_at(&self, parameter: f64) -> f64 {
        self.start + parameter * (self.end - self.start)
    }

    fn prime_at(&self, _parameter: f64) -> f64 {
        self.end - self.start
    }

    fn prime_double_at(&self, _parameter: f64) -> f64 {
        0.0
    }
}

/// `f(t) = amplitude * cos(t)` — the major axis of an ellipse.
#[derive(Debug, Clone, Copy)]
pub struct CosineParametric {
    amplitude: f64,
}

impl CosineParametric {
    #[must_use]
    pub fn new(amplitude: f64) -> Self {
        Self { amplitude }
    }
}

impl ParametricFunction for CosineParametric {
    fn base_at(&self, parameter: f64) -> f64 {
        self.amplitude * parameter.cos()
    }

    fn prime_at(&self, parameter: f64) -> f64 {
        -self.amplitude * parameter.sin()
    }

    fn prime_double_at(&self, parameter: f64) -> f64 {
        -self.amplitude * parameter.cos()
    }
}

/// `f(t) = amplitude * sin(t)` — the minor axis of an ellipse.
#[derive(Debug, Clone, Copy)]
pub struct SineParametric {
    amplitude: f64,
}

impl SineParametric {
    #[must_use]
    pub fn new(amplitude: f64) -> Self {
        Self { amplitude }
    }
}

impl ParametricFunction for SineParametric {
    fn base_at(&self, parameter: f64) -> f64 {
        self.amplitude * parameter.sin()
    }

    fn prime_at(&self, parameter: f64) -> f64 {
        self.amplitude * parameter.cos()
    }

    fn prime_double_at(&self, parameter: f64) -> f64 {
        -self.amplitude * parameter.sin()
    }
}

/// `f(t) = a * t^2` — the axial component of a parabola `y^2 = 4ax`.
#[derive(Debug, Clone, Copy)]
pub struct ParabolicAxialParametric {
    a: f64,
}

impl ParabolicAxialParametric {
    #[must_use]
    pub fn new(a: f64) -> Self {
        Self { a }
    }
}

impl ParametricFunction for ParabolicAxialParametric {
    fn base_at(&self, parameter: f64) -> f64 {
        self.a * parameter * parameter
    }

    fn prime_at(&self, parameter: f64) -> f64 {
        2.0 * self.a * parameter
    }

    fn prime_double_at(&self, _parameter: f64) -> f64 {
        2.0 * self.a
    }
}

/// `f(t) = 2 * a * t` — the transverse component of a parabola `y^2 = 4ax`.
#[derive(Debug, Clone, Copy)]
pub struct ParabolicTransverseParametric {
    a: f64,
}

impl ParabolicTransverseParametric {
    #[must_use]
    pub fn new(a: f64) -> Self {
        Self { a }
    }
}

impl ParametricFunction for ParabolicTransverseParametric {
    fn base_at(&self, parameter: f64) -> f64 {
        2.0 * self.a * parameter
    }

    fn prime_at(&self, _parameter: f64) -> f64 {
        2.0 * self.a
    }

    fn prime_double_at(&self, _parameter: f64) -> f64 {
        0.0
    }
}

/// `f(t) = a * sec(t)` — the major axis of a hyperbola.
///
/// Derivatives: `a * sec(t) * tan(t)` and `a * sec(t) * (sec^2 t + tan^2 t)`.
#[derive(Debug, Clone, Copy)]
pub struct SecantParametric {
    amplitude: f64,
}

impl SecantParametric {
    #[must_use]
    pub fn new(amplitude: f64) -> Self {
        Self { amplitude }
    }
}

impl ParametricFunction for SecantParametric {
    fn base_at(&self, parameter: f64) -> f64 {
        self.amplitude / parameter.cos()
    }

    fn prime_at(&self, parameter: f64) -> f64 {
        let sec = 1.0 / parameter.cos();
        self.amplitude * sec * parameter.tan()
    }

    fn prime_double_at(&self, parameter: f64) -> f64 {
        let sec = 1.0 / parameter.cos();
        let tan = parameter.tan();
        self.amplitude * sec * (sec * sec + tan * tan)
    }
}

/// `f(t) = b * tan(t)` — the minor axis of a hyperbola.
///
/// Derivatives: `b * sec^2 t` and `2 * b * sec^2 t * tan t`.
#[derive(Debug, Clone, Copy)]
pub struct TangentParametric {
    amplitude: f64,
}

impl TangentParametric {
    #[must_use]
    pub fn new(amplitude: f64) -> Self {
        Self { amplitude }
    }
}

impl ParametricFunction for TangentParametric {
    fn base_at(&self, parameter: f64) -> f64 {
        self.amplitude * parameter.tan()
    }

    fn prime_at(&self, parameter: f64) -> f64 {
        let sec = 1.0 / parameter.cos();
        self.amplitude * sec * sec
    }

    fn prime_double_at(&self, parameter: f64) -> f64 {
        let sec = 1.0 / parameter.cos();
        2.0 * self.amplitude * sec * sec * parameter.tan()
    }
}

/// `f(t) = a * e^(b*t)` — the radius of a logarithmic spiral.
#[derive(Debug, Clone, Copy)]
pub struct ExponentialSpiralParametric {
    radius_at_origin: f64,
    radius_change_with_rotation: f64,
}

impl ExponentialSpiralParametric {
    #[must_use]
    pub fn new(radius_at_origin: f64, radius_change_with_rotation: f64) -> Self {
        Self {
            radius_at_origin,
            radius_change_with_rotation,
        }
    }
}

impl ParametricFunction for ExponentialSpiralParametric {
    fn base_at(&self, parameter: f64) -> f64 {
        self.radius_at_origin * (self.radius_change_with_rotation * parameter).exp()
    }

    fn prime_at(&self, parameter: f64) -> f64 {
        self.radius_change_with_rotation * self.base_at(parameter)
    }

    fn prime_double_at(&self, parameter: f64) -> f64 {
        self.radius_change_with_rotation * self.prime_at(parameter)
    }
}

/// `f(t) = t` — an azimuth that is the parameter itself.
#[derive(Debug, Clone, Copy)]
pub struct IdentityParametric;

impl ParametricFunction for IdentityParametric {
    fn base_at(&self, parameter: f64) -> f64 {
        parameter
    }

    fn prime_at(&self, _parameter: f64) -> f64 {
        1.0
    }

    fn prime_double_at(&self, _parameter: f64) -> f64 {
        0.0
    }
}

/// The focus-relative radius of a conic section:
/// `r(theta) = p / (1 + e * cos(theta))` with `p` the semi-latus rectum and
/// `e` the eccentricity.
///
/// Writing `u = 1 + e * cos(theta)`, the hand-derived derivatives are
/// `r' = p * e * sin(theta) / u^2` and
/// `r'' = p * e * (cos(theta) * u + 2 * e * sin^2(theta)) / u^3`.
#[derive(Debug, Clone, Copy)]
pub struct ConicFocusRadiusParametric {
    semilatus_rectum: f64,
    eccentricity: f64,
}

impl ConicFocusRadiusParametric {
    #[must_use]
    pub fn new(semilatus_rectum: f64, eccentricity: f64) -> Self {
        Self {
            semilatus_rectum,
            eccentricity,
        }
    }
}

impl ParametricFunction for ConicFocusRadiusParametric {
    fn base_at(&self, parameter: f64) -> f64 {
        self.semilatus_rectum / (1.0 + self.eccentricity * parameter.cos())
    }

    fn prime_at(&self, parameter: f64) -> f64 {
        let u = 1.0 + self.eccentricity * parameter.cos();
        self.semilatus_rectum * self.eccentricity * parameter.sin() / (u * u)
    }

    fn prime_double_at(&self, parameter: f64) -> f64 {
        let (sin, cos) = parameter.sin_cos();
        let u = 1.0 + self.eccentricity * cos;
        self.semilatus_rectum * self.eccentricity * (cos * u + 2.0 * self.eccentricity * sin * sin)
            / (u * u * u)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use super::*;

    const TOL: f64 = 1e-9;

    /// Central-difference check that the declared derivatives match the
    /// base form analytically.
    fn assert_derivatives_consistent(function: &dyn ParametricFunction, t: f64) {
        let h = 1e-6;
        let numeric_prime = (function.base_at(t + h) - function.base_at(t - h)) / (2.0 * h);
        let numeric_double = (function.prime_at(t + h) - function.prime_at(t - h)) / (2.0 * h);
        assert!(
            (function.prime_at(t) - numeric_prime).abs() < 1e-4,
            "prime mismatch at t={t}: {} vs {numeric_prime}",
            function.prime_at(t)
        );
        assert!(
            (function.prime_double_at(t) - numeric_double).abs() < 1e-4,
            "double mismatch at t={t}: {} vs {numeric_double}",
            function.prime_double_at(t)
        );
    }

    #[test]
    fn linear_interpolates_endpoints() {
        let f = LinearParametric::new(2.0, 6.0);
        assert!((f.base_at(0.0) - 2.0).abs() < TOL);
        assert!((f.base_at(1.0) - 6.0).abs() < TOL);
        assert!((f.prime_at(0.5) - 4.0).abs() < TOL);
        assert!(f.prime_double_at(0.5).abs() < TOL);
    }

    #[test]
    fn trigonometric_pair_evaluates() {
        let cos = CosineParametric::new(3.0);
        let sin = SineParametric::new(2.0);
        assert!((cos.base_at(0.0) - 3.0).abs() < TOL);
        assert!((sin.base_at(FRAC_PI_2) - 2.0).abs() < TOL);
        assert!((cos.prime_at(FRAC_PI_2) + 3.0).abs() < TOL);
    }

    #[test]
    fn parabolic_pair_evaluates() {
        let axial = ParabolicAxialParametric::new(2.0);
        let transverse = ParabolicTransverseParametric::new(2.0);
        // At t = 3: x = 2*9 = 18, y = 2*2*3 = 12; y^2 = 4*a*x holds.
        let x = axial.base_at(3.0);
        let y = transverse.base_at(3.0);
        assert!((y * y - 4.0 * 2.0 * x).abs() < TOL);
    }

    #[test]
    fn hyperbolic_pair_satisfies_the_implicit_form() {
        let major = SecantParametric::new(2.0);
        let minor = TangentParametric::new(1.5);
        // (x/a)^2 - (y/b)^2 = sec^2 - tan^2 = 1.
        let x = major.base_at(0.6);
        let y = minor.base_at(0.6);
        assert!(((x / 2.0).powi(2) - (y / 1.5).powi(2) - 1.0).abs() < TOL);
    }

    #[test]
    fn spiral_radius_grows_exponentially() {
        let f = ExponentialSpiralParametric::new(2.0, 0.5);
        assert!((f.base_at(0.0) - 2.0).abs() < TOL);
        assert!((f.base_at(2.0) - 2.0 * 1.0_f64.exp()).abs() < TOL);
    }

    #[test]
    fn conic_focus_radius_at_cardinal_angles() {
        let f = ConicFocusRadiusParametric::new(3.2, 0.6);
        assert!((f.base_at(0.0) - 3.2 / 1.6).abs() < TOL);
        assert!((f.base_at(FRAC_PI_2) - 3.2).abs() < TOL);
        assert!((f.base_at(PI) - 3.2 / 0.4).abs() < TOL);
    }

    #[test]
    fn declared_derivatives_match_base_forms() {
        let functions: Vec<Box<dyn ParametricFunction>> = vec![
            Box::new(LinearParametric::new(1.0, 4.0)),
            Box::new(CosineParametric::new(3.0)),
            Box::new(SineParametric::new(2.0)),
            Box::new(ParabolicAxialParametric::new(1.5)),
            Box::new(ParabolicTransverseParametric::new(1.5)),
            Box::new(SecantParametric::new(2.0)),
            Box::new(TangentParametric::new(1.5)),
            Box::new(ExponentialSpiralParametric::new(1.0, 0.3)),
            Box::new(IdentityParametric),
            Box::new(ConicFocusRadiusParametric::new(3.2, 0.6)),
        ];
        for function in &functions {
            for t in [0.1, FRAC_PI_4, 1.1] {
                assert_derivatives_consistent(function.as_ref(), t);
            }
        }
    }
}
