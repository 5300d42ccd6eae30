use crate::{Vec3F64, Vec4F64};

/// Dot product between two 3D vectors.
///
/// Example:
/// ```
/// use robokin_algebra::{ops::dot, Vec3F64};
///
/// let a = Vec3F64::new(1.0, 2.0, 3.0);
/// let b = Vec3F64::new(4.0, 5.0, 6.0);
/// assert_eq!(dot(&a, &b), 32.0);
/// ```
#[inline]
pub fn dot(v1: &Vec3F64, v2: &Vec3F64) -> f64 {
    v1.dot(*v2)
}

/// Euclidean norm of a 3D vector, `sqrt(dot(v, v))`.
#[inline]
pub fn norm(v: &Vec3F64) -> f64 {
    dot(v, v).sqrt()
}

/// Right-handed cross product `v1 x v2`.
#[inline]
pub fn cross(v1: &Vec3F64, v2: &Vec3F64) -> Vec3F64 {
    v1.cross(*v2)
}

/// Vector projection of `v1` onto `v2`, i.e. the component of `v1` along `v2`.
///
/// PRECONDITION: `v2` is not the zero vector. This is not checked; a zero `v2`
/// yields non-finite components.
///
/// Example:
/// ```
/// use robokin_algebra::{ops::project, Vec3F64};
///
/// let v = project(&Vec3F64::new(3.0, 4.0, 0.0), &Vec3F64::new(2.0, 0.0, 0.0));
/// assert_eq!(v, Vec3F64::new(3.0, 0.0, 0.0));
/// ```
#[inline]
pub fn project(v1: &Vec3F64, v2: &Vec3F64) -> Vec3F64 {
    let scale = dot(v1, v2) / dot(v2, v2);
    *v2 * scale
}

/// Length of the projection of `v1` onto `v2`.
///
/// PRECONDITION: `v2` is not the zero vector.
#[inline]
pub fn projection_length(v1: &Vec3F64, v2: &Vec3F64) -> f64 {
    norm(&project(v1, v2))
}

/// Angle between two vectors in radians, in `[0, pi]`.
///
/// The cosine is clamped to `[-1, 1]` before `acos`, so rounding error on nearly
/// parallel or anti-parallel inputs cannot produce NaN.
///
/// PRECONDITION: neither vector is the zero vector.
pub fn angle(v1: &Vec3F64, v2: &Vec3F64) -> f64 {
    let cos = dot(v1, v2) / (norm(v1) * norm(v2));
    cos.clamp(-1.0, 1.0).acos()
}

/// Unit vector with the direction of `v`.
///
/// PRECONDITION: `v` is not the zero vector.
#[inline]
pub fn normalize(v: &Vec3F64) -> Vec3F64 {
    *v / norm(v)
}

/// Lift a 3D point to homogeneous coordinates by appending `w = 1`.
#[inline]
pub fn lift_to_vector4(v: &Vec3F64) -> Vec4F64 {
    v.extend(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::f64::consts::PI;

    fn random_vec3(rng: &mut StdRng) -> Vec3F64 {
        Vec3F64::new(
            rng.random_range(-10.0..10.0),
            rng.random_range(-10.0..10.0),
            rng.random_range(-10.0..10.0),
        )
    }

    #[test]
    fn test_norm() {
        assert_eq!(norm(&Vec3F64::ZERO), 0.0);
        assert_relative_eq!(norm(&Vec3F64::new(3.0, 4.0, 12.0)), 13.0);
    }

    #[test]
    fn test_norm_positive_for_nonzero() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let v = random_vec3(&mut rng);
            assert!(norm(&v) > 0.0);
        }
    }

    #[test]
    fn test_dot_cross_symmetries() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let a = random_vec3(&mut rng);
            let b = random_vec3(&mut rng);

            assert_eq!(dot(&a, &b), dot(&b, &a));
            assert_eq!(cross(&a, &b), -cross(&b, &a));

            let c = cross(&a, &b);
            assert_relative_eq!(dot(&c, &a), 0.0, epsilon = 1e-9);
            assert_relative_eq!(dot(&c, &b), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_project() {
        let v1 = Vec3F64::new(1.0, 1.0, 0.0);
        let v2 = Vec3F64::new(0.0, 5.0, 0.0);
        assert_eq!(project(&v1, &v2), Vec3F64::new(0.0, 1.0, 0.0));
        assert_relative_eq!(projection_length(&v1, &v2), 1.0);

        // anti-aligned input projects to the opposite direction
        let v3 = Vec3F64::new(0.0, -2.0, 0.0);
        assert_eq!(project(&v3, &v2), Vec3F64::new(0.0, -2.0, 0.0));
        assert_relative_eq!(projection_length(&v3, &v2), 2.0);
    }

    #[test]
    fn test_project_onto_zero_is_not_finite() {
        let p = project(&Vec3F64::X, &Vec3F64::ZERO);
        assert!(!p.x.is_finite());
    }

    #[test]
    fn test_angle() {
        let v = Vec3F64::new(1.0, 2.0, 3.0);
        assert_relative_eq!(angle(&v, &v), 0.0, epsilon = 1e-7);
        assert_relative_eq!(angle(&v, &-v), PI, epsilon = 1e-7);
        assert_relative_eq!(angle(&Vec3F64::X, &Vec3F64::Y), PI / 2.0);
        assert_relative_eq!(
            angle(&Vec3F64::X, &Vec3F64::new(1.0, 1.0, 0.0)),
            PI / 4.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_angle_near_parallel_is_finite() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let v = random_vec3(&mut rng);
            let scaled = v * rng.random_range(0.1..100.0);
            let a = angle(&v, &scaled);
            let b = angle(&v, &-scaled);
            assert!(a.is_finite() && b.is_finite());
            assert_relative_eq!(a, 0.0, epsilon = 1e-6);
            assert_relative_eq!(b, PI, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_normalize() {
        let n = normalize(&Vec3F64::new(0.0, 3.0, 4.0));
        assert_relative_eq!(norm(&n), 1.0);
        assert_relative_eq!(n.y, 0.6);
        assert_relative_eq!(n.z, 0.8);
    }

    #[test]
    fn test_lift_to_vector4() {
        let v = lift_to_vector4(&Vec3F64::new(1.0, 2.0, 3.0));
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 1.0]);
    }
}
