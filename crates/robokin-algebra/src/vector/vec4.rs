//! Homogeneous 4D column vector (double precision).

use super::Vec3F64;

define_vector_type!(
    /// Homogeneous 4D column vector (double precision).
    Vec4F64,
    glam::DVec4,
    f64,
    4,
    [x, y, z, w]
);

impl Vec4F64 {
    /// Drop the homogeneous coordinate.
    #[inline]
    pub fn truncate(self) -> Vec3F64 {
        Vec3F64::new(self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AlgebraError, Shape};

    #[test]
    fn test_vec4_extend_truncate() {
        let v3 = Vec3F64::new(1.0, 2.0, 3.0);
        let v4 = v3.extend(1.0);
        assert_eq!(v4, Vec4F64::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(v4.truncate(), v3);
    }

    #[test]
    fn test_vec4_try_from_wrong_len() {
        let err = Vec4F64::try_from([1.0, 2.0, 3.0].as_slice()).unwrap_err();
        assert_eq!(
            err,
            AlgebraError::Shape {
                expected: Shape::column(4),
                actual: Shape::column(3),
            }
        );
    }
}
