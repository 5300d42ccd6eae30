//! 4x4 matrix (double precision).

use crate::Vec4F64;

define_matrix_type!(
    /// 4x4 matrix (double precision).
    Mat4F64,
    glam::DMat4,
    4,
    Vec4F64,
    glam::DVec4,
    [x_axis, y_axis, z_axis, w_axis]
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AlgebraError, Shape};

    #[test]
    fn test_mat4_mul_vec4() {
        let m = Mat4F64::IDENTITY;
        let v = Vec4F64::new(1.0, 2.0, 3.0, 1.0);
        assert_eq!(m * v, v);
    }

    #[test]
    fn test_mat4_rows_roundtrip() {
        let rows = [
            [1.0, 0.0, 0.0, 5.0],
            [0.0, 1.0, 0.0, 6.0],
            [0.0, 0.0, 1.0, 7.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        let m = Mat4F64::from_rows(rows);
        assert_eq!(m.get(0, 3), 5.0);
        assert_eq!(m.to_rows(), rows);
        assert_eq!(
            m * Vec4F64::new(1.0, 1.0, 1.0, 1.0),
            Vec4F64::new(6.0, 7.0, 8.0, 1.0)
        );
    }

    #[test]
    fn test_mat4_try_from_rows_rejects_3x3() {
        let rows = vec![vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0], vec![0.0, 0.0, 1.0]];
        assert_eq!(
            Mat4F64::try_from_rows(&rows),
            Err(AlgebraError::Shape {
                expected: Shape::square(4),
                actual: Shape::new(3, 3),
            })
        );
    }
}
