use thiserror::Error;

/// Top-level error type for the konic geometry kernel.
///
/// Every fallible operation surfaces one of these variants synchronously;
/// nothing is caught and recovered internally, and the message is the only
/// diagnostic.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A degenerate input made the operation undefined.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A value fell outside a required domain.
    #[error("{parameter} = {value} is out of range: {reason}")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        reason: String,
    },

    /// A coordinate asserted to lie on a curve or segment does not.
    #[error("coordinate ({x}, {y}) does not lie on the target {target}")]
    CoordinateNotOnTarget {
        x: f64,
        y: f64,
        target: &'static str,
    },

    /// A division was requested with a zero divisor.
    ///
    /// Checked and reported before the division is performed, rather than
    /// letting floating-point arithmetic silently produce `Infinity`/`NaN`.
    #[error("division by zero while {context}")]
    DivideByZero { context: &'static str },

    /// The operation is not supported by the targeted curve kind.
    #[error("{operation} is not supported for a {curve} curve")]
    UnsupportedCapability {
        operation: &'static str,
        curve: &'static str,
    },

    /// The operation is deliberately unimplemented.
    #[error("{operation} is not implemented")]
    NotImplemented { operation: &'static str },
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;
