use robokin_algebra::{Mat3F64, Mat4F64, Vec3F64};

use crate::error::{check_tolerance, GeometryError};
use crate::tolerances::DEFAULT_DET_TOLERANCE;

pub use robokin_algebra::ops::lift_to_vector4;

/// Rotation matrix about the x axis.
///
/// Maps the coordinates of a vector written in frame `a` into frame `b`, where
/// `b` is `a` rotated by a positive `theta` (radians) about x.
///
/// Example:
///
/// ```
/// use robokin_geometry::transforms::rotation_x;
///
/// let r = rotation_x(0.3);
/// assert!((r.determinant() - 1.0).abs() < 1e-12);
/// ```
pub fn rotation_x(theta: f64) -> Mat3F64 {
    let (s, c) = theta.sin_cos();
    Mat3F64::from_rows([[1.0, 0.0, 0.0], [0.0, c, s], [0.0, -s, c]])
}

/// Rotation matrix about the y axis, same convention as [`rotation_x`].
pub fn rotation_y(theta: f64) -> Mat3F64 {
    let (s, c) = theta.sin_cos();
    Mat3F64::from_rows([[c, 0.0, -s], [0.0, 1.0, 0.0], [s, 0.0, c]])
}

/// Rotation matrix about the z axis, same convention as [`rotation_x`].
pub fn rotation_z(theta: f64) -> Mat3F64 {
    let (s, c) = theta.sin_cos();
    Mat3F64::from_rows([[c, s, 0.0], [-s, c, 0.0], [0.0, 0.0, 1.0]])
}

/// Check that a 3x3 matrix is a rotation by its determinant.
///
/// Rotation matrices have unit determinant however many rotations they compose,
/// so the matrix is accepted when `|det - 1| <= det_tolerance`.
///
/// # Errors
///
/// * [`GeometryError::InvalidArgument`] if `det_tolerance` is negative.
/// * [`GeometryError::InvalidRotation`] if the determinant is out of tolerance.
pub fn check_rotation_matrix(m: &Mat3F64, det_tolerance: f64) -> Result<(), GeometryError> {
    check_tolerance("determinant", det_tolerance)?;

    let determinant = m.determinant();
    if (1.0 - determinant).abs() > det_tolerance {
        log::trace!("rejected rotation matrix with determinant {determinant}");
        return Err(GeometryError::InvalidRotation {
            determinant,
            tolerance: det_tolerance,
        });
    }
    Ok(())
}

/// Parameters of a homogeneous transform.
///
/// The defaults are the identity rotation, the zero origin and
/// [`DEFAULT_DET_TOLERANCE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformParams {
    /// Rotation taking coordinates from the local frame `b` to the reference frame `a`.
    pub rotation: Mat3F64,
    /// Origin of frame `b` written in frame `a`.
    pub origin: Vec3F64,
    /// Maximum `|det - 1|` accepted for `rotation`.
    pub det_tolerance: f64,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            rotation: Mat3F64::IDENTITY,
            origin: Vec3F64::ZERO,
            det_tolerance: DEFAULT_DET_TOLERANCE,
        }
    }
}

/// A rigid-body homogeneous transform `[[R, o], [0, 1]]`.
///
/// Only constructed through validating functions, so the rotation block always
/// passed [`check_rotation_matrix`]. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HomogeneousTransform {
    matrix: Mat4F64,
}

impl HomogeneousTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        matrix: Mat4F64::IDENTITY,
    };

    /// Validate an existing 4x4 matrix as a homogeneous transform.
    ///
    /// # Errors
    ///
    /// * [`GeometryError::InvalidArgument`] if the bottom row is not `[0, 0, 0, 1]`
    ///   or `det_tolerance` is negative.
    /// * [`GeometryError::InvalidRotation`] if the rotation block is not a rotation.
    pub fn try_from_matrix(matrix: Mat4F64, det_tolerance: f64) -> Result<Self, GeometryError> {
        let bottom = [0, 1, 2, 3].map(|col| matrix.get(3, col));
        if bottom != [0.0, 0.0, 0.0, 1.0] {
            return Err(GeometryError::InvalidArgument(format!(
                "bottom row of a homogeneous transform must be [0, 0, 0, 1], got {bottom:?}"
            )));
        }

        let transform = Self { matrix };
        check_rotation_matrix(&transform.rotation(), det_tolerance)?;
        Ok(transform)
    }

    /// The full 4x4 matrix.
    pub fn matrix(&self) -> Mat4F64 {
        self.matrix
    }

    /// The upper-left rotation block.
    pub fn rotation(&self) -> Mat3F64 {
        Mat3F64::from(glam::DMat3::from_mat4(self.matrix.0))
    }

    /// The upper-right translation column.
    pub fn origin(&self) -> Vec3F64 {
        Vec3F64::from(self.matrix.w_axis.truncate())
    }

    /// Map a point written in the local frame to the reference frame.
    pub fn apply(&self, v_local: &Vec3F64) -> Vec3F64 {
        (self.matrix * lift_to_vector4(v_local)).truncate()
    }
}

impl std::ops::Mul for HomogeneousTransform {
    type Output = Self;

    /// Compose `a_T_b * b_T_c = a_T_c`.
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            matrix: self.matrix * rhs.matrix,
        }
    }
}

/// Build the homogeneous transform `[[R, o], [0, 1]]` from its parameters.
///
/// # Errors
///
/// * [`GeometryError::InvalidArgument`] if `det_tolerance` is negative.
/// * [`GeometryError::InvalidRotation`] if `rotation` is not a rotation matrix.
///
/// Example:
///
/// ```
/// use robokin_algebra::Vec3F64;
/// use robokin_geometry::transforms::{build_homogeneous_transform, TransformParams};
///
/// let params = TransformParams {
///     origin: Vec3F64::new(1.0, 2.0, 3.0),
///     ..Default::default()
/// };
/// let t = build_homogeneous_transform(&params).unwrap();
/// assert_eq!(t.matrix().to_rows()[0], [1.0, 0.0, 0.0, 1.0]);
/// ```
pub fn build_homogeneous_transform(
    params: &TransformParams,
) -> Result<HomogeneousTransform, GeometryError> {
    check_rotation_matrix(&params.rotation, params.det_tolerance)?;

    let r = params.rotation;
    let o = params.origin;
    let matrix = Mat4F64::from(glam::DMat4::from_cols(
        r.x_axis.extend(0.0),
        r.y_axis.extend(0.0),
        r.z_axis.extend(0.0),
        glam::DVec4::new(o.x, o.y, o.z, 1.0),
    ));

    Ok(HomogeneousTransform { matrix })
}

/// Write a vector given in the local frame `b` in the reference frame `a`.
///
/// Builds the transform from `params`, lifts `v_local` to homogeneous
/// coordinates, applies the transform and drops the homogeneous coordinate.
///
/// # Errors
///
/// Same as [`build_homogeneous_transform`].
pub fn transform_vector(
    v_local: &Vec3F64,
    params: &TransformParams,
) -> Result<Vec3F64, GeometryError> {
    let transform = build_homogeneous_transform(params)?;
    Ok(transform.apply(v_local))
}
