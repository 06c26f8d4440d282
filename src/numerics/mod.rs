pub mod compare;

pub use compare::{
    are_equal, is_greater_than, is_greater_than_or_equal_to, is_less_than,
    is_less_than_or_equal_to, is_negative_sign, is_positive_sign, is_within_inclusive,
    is_zero_sign, resolve_tolerance,
};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2D rotation type.
pub type Rotation2 = nalgebra::Rotation2<f64>;

/// Default geometric tolerance for floating-point comparisons.
///
/// Every constructor that does not take an explicit tolerance uses this
/// value, and [`resolve_tolerance`] uses it as the floor when resolving
/// the governing tolerance between two operands.
pub const GEOMETRIC_TOLERANCE: f64 = 1e-6;
