//! Matrix types module.
//!
//! - Mat3F64: 3x3 matrix, general linear map or rotation
//! - Mat4F64: 4x4 matrix, homogeneous transform storage

#[macro_use]
mod mat;

mod mat3;
mod mat4;

pub use mat3::Mat3F64;
pub use mat4::Mat4F64;
