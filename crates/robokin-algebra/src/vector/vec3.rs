//! 3D column vector (double precision).

use super::Vec4F64;

define_vector_type!(
    /// 3D column vector (double precision).
    ///
    /// Used both as a free vector (a direction) and as a bound vector (a position),
    /// depending on context.
    Vec3F64,
    glam::DVec3,
    f64,
    3,
    [x, y, z]
);

impl Vec3F64 {
    /// Unit vector along x.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector along y.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector along z.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Right-handed cross product `self x rhs`.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        let a: glam::DVec3 = self.into();
        let b: glam::DVec3 = rhs.into();
        Self::from(a.cross(b))
    }

    /// Lift the vector to homogeneous coordinates with the given `w`.
    #[inline]
    pub fn extend(self, w: f64) -> Vec4F64 {
        Vec4F64::new(self.x, self.y, self.z, w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AlgebraError, Shape};

    #[test]
    fn test_vec3_basic() {
        let v = Vec3F64::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);
    }

    #[test]
    fn test_vec3_arithmetic() {
        let a = Vec3F64::new(1.0, 2.0, 3.0);
        let b = Vec3F64::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3F64::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3F64::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3F64::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(-a, Vec3F64::new(-1.0, -2.0, -3.0));
        assert_eq!(b / 2.0, Vec3F64::new(2.0, 2.5, 3.0));
    }

    #[test]
    fn test_vec3_cross_basis() {
        assert_eq!(Vec3F64::X.cross(Vec3F64::Y), Vec3F64::Z);
        assert_eq!(Vec3F64::Y.cross(Vec3F64::Z), Vec3F64::X);
        assert_eq!(Vec3F64::Z.cross(Vec3F64::X), Vec3F64::Y);
    }

    #[test]
    fn test_vec3_try_from_slice() -> Result<(), AlgebraError> {
        let v = Vec3F64::try_from([1.0, 2.0, 3.0].as_slice())?;
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);

        let err = Vec3F64::try_from(vec![1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            AlgebraError::Shape {
                expected: Shape::column(3),
                actual: Shape::column(2),
            }
        );
        Ok(())
    }

    #[test]
    fn test_vec3_serde() -> Result<(), Box<dyn std::error::Error>> {
        let v: Vec3F64 = serde_json::from_str("[1.0, -2.0, 0.5]")?;
        assert_eq!(v, Vec3F64::new(1.0, -2.0, 0.5));
        assert_eq!(serde_json::to_string(&v)?, "[1.0,-2.0,0.5]");

        let err = serde_json::from_str::<Vec3F64>("[1.0, 2.0, 3.0, 4.0]").unwrap_err();
        assert!(err.to_string().contains("expected 3x1, got 4x1"));
        Ok(())
    }
}
