mod angle;
mod angular_offset;
mod cartesian;
mod offset;
mod polar;

pub use angle::{wrap_within_positive_negative_pi, Angle};
pub use angular_offset::AngularOffset;
pub use cartesian::CartesianCoordinate;
pub use offset::CartesianOffset;
pub use polar::PolarCoordinate;
