#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

mod error;
pub use error::GeometryError;

/// Line geometry: distances, common perpendiculars and twist angles.
pub mod lines;

/// Default tolerances and their validation.
pub mod tolerances;

/// Principal-axis rotations and homogeneous transforms.
pub mod transforms;
