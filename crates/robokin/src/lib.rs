//! 3D geometry and rigid-body transform primitives for robot kinematics.
//!
//! Example:
//!
//! ```
//! use robokin::algebra::Vec3F64;
//! use robokin::geometry::lines::line_distance;
//!
//! let dist = line_distance(
//!     &Vec3F64::ZERO,
//!     &Vec3F64::X,
//!     &Vec3F64::new(0.0, 1.0, 0.0),
//!     &Vec3F64::X,
//!     1e-3,
//! )?;
//! assert!((dist - 1.0).abs() < 1e-12);
//! # Ok::<(), robokin::geometry::GeometryError>(())
//! ```

#[doc(inline)]
pub use robokin_algebra as algebra;

#[doc(inline)]
pub use robokin_geometry as geometry;
