//! 3x3 matrix (double precision).

use crate::Vec3F64;

define_matrix_type!(
    /// 3x3 matrix (double precision).
    ///
    /// Either a general linear map or, when its determinant is close to one, a
    /// rotation matrix.
    Mat3F64,
    glam::DMat3,
    3,
    Vec3F64,
    glam::DVec3,
    [x_axis, y_axis, z_axis]
);
