pub mod coordinates;
pub mod curves;
pub mod error;
pub mod intersections;
pub mod numerics;
pub mod parametrics;
pub mod segments;
pub mod vectors;

pub use error::{GeometryError, Result};
