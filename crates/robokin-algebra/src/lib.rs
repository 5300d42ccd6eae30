#![deny(missing_docs)]
//! Fixed-size algebraic types for robokin.
//!
//! This crate provides:
//! - Double precision vector and matrix types (`Vec3F64`, `Vec4F64`, `Mat3F64`, `Mat4F64`)
//!   backed by `glam`, so shape mismatches inside the library are compile errors.
//! - Shape validation at the dynamic boundary (slices, nested rows, deserialized input).
//! - The 3D vector algebra primitives in [`ops`].

mod error;
mod matrix;
mod vector;

/// Vector algebra primitives: dot, cross, norm, projection and angle.
pub mod ops;

pub use error::{AlgebraError, Shape};
pub use matrix::{Mat3F64, Mat4F64};
pub use vector::{Vec3F64, Vec4F64};
