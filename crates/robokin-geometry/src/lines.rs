//! A line is given throughout as a pair `(point, direction)`: a point on the line
//! and a direction vector that need not be unit length.
//!
//! Every routine classifies the two lines with [`classify_lines`] first, so the
//! parallel/non-parallel boundary is the same for all of them.

use std::f64::consts::PI;

use robokin_algebra::{
    ops::{angle, cross, dot, norm, normalize, project},
    Vec3F64,
};

use crate::error::{check_tolerance, GeometryError};

// Below this fraction of the point offset, the perpendicular part of the offset
// between two parallel lines is treated as zero.
const COINCIDENT_EPS: f64 = 1e-12;

/// Relative placement of two lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRelation {
    /// The directions are parallel or anti-parallel within the angle tolerance.
    Parallel,
    /// The lines are skew or intersecting.
    NonParallel,
}

/// Sign used to orient results: `-1` for negative values, `+1` otherwise.
///
/// Zero counts as positive, so intersecting lines keep a unit common
/// perpendicular instead of collapsing it to the zero vector.
#[inline]
pub fn orientation(value: f64) -> f64 {
    if value < 0.0 {
        -1.0
    } else {
        1.0
    }
}

fn check_direction(name: &str, direction: &Vec3F64) -> Result<(), GeometryError> {
    let finite = direction.to_array().iter().all(|c| c.is_finite());
    if !finite || *direction == Vec3F64::ZERO {
        return Err(GeometryError::InvalidArgument(format!(
            "{name} direction must be a non-zero finite vector, got {direction:?}"
        )));
    }
    Ok(())
}

/// Classify two lines by the angle between their directions.
///
/// The lines are [`LineRelation::Parallel`] when the angle between `d1` and `d2`
/// is within `angle_tolerance` of `0` or of `pi`, or when their cross product
/// vanishes exactly. Otherwise they are [`LineRelation::NonParallel`].
///
/// # Errors
///
/// [`GeometryError::InvalidArgument`] if `angle_tolerance` is negative or a
/// direction is the zero vector.
pub fn classify_lines(
    d1: &Vec3F64,
    d2: &Vec3F64,
    angle_tolerance: f64,
) -> Result<LineRelation, GeometryError> {
    check_tolerance("angle", angle_tolerance)?;
    check_direction("first", d1)?;
    check_direction("second", d2)?;

    let ang = angle(d1, d2);
    let within_tolerance = ang < angle_tolerance || (ang - PI).abs() < angle_tolerance;
    if within_tolerance || cross(d1, d2) == Vec3F64::ZERO {
        log::debug!("lines treated as parallel, angle between directions {ang} rad");
        return Ok(LineRelation::Parallel);
    }
    Ok(LineRelation::NonParallel)
}

/// Distance between two lines in space.
///
/// # Arguments
///
/// * `p1` - A point on the first line.
/// * `d1` - Direction of the first line.
/// * `p2` - A point on the second line.
/// * `d2` - Direction of the second line.
/// * `angle_tolerance` - Angle in radians under which the lines count as parallel.
///
/// # Returns
///
/// The non-negative distance between the lines.
///
/// # Errors
///
/// Same as [`classify_lines`].
///
/// Example:
///
/// ```
/// use robokin_algebra::Vec3F64;
/// use robokin_geometry::lines::line_distance;
///
/// let dist = line_distance(
///     &Vec3F64::ZERO,
///     &Vec3F64::X,
///     &Vec3F64::new(0.0, 0.0, 1.0),
///     &Vec3F64::Y,
///     1e-3,
/// )
/// .unwrap();
/// assert!((dist - 1.0).abs() < 1e-12);
/// ```
pub fn line_distance(
    p1: &Vec3F64,
    d1: &Vec3F64,
    p2: &Vec3F64,
    d2: &Vec3F64,
    angle_tolerance: f64,
) -> Result<f64, GeometryError> {
    let delta = *p1 - *p2;
    match classify_lines(d1, d2, angle_tolerance)? {
        LineRelation::Parallel => Ok(norm(&(delta - project(&delta, d1)))),
        LineRelation::NonParallel => {
            let n = normalize(&cross(d1, d2));
            Ok(norm(&project(&delta, &n)))
        }
    }
}

/// Unit vector along the common perpendicular of two lines, pointing from the
/// first line toward the second.
///
/// For non-parallel lines this is the normalized `d1 x d2`, flipped if needed.
/// For parallel lines it is the normalized part of `p2 - p1` perpendicular to
/// the shared direction. For intersecting lines the offset has no preferred
/// side and `d1 x d2` is returned as is.
///
/// # Errors
///
/// * Same as [`classify_lines`].
/// * [`GeometryError::InvalidArgument`] if the lines are parallel and coincident,
///   since every direction normal to them is then a common perpendicular.
pub fn common_perpendicular_direction(
    p1: &Vec3F64,
    d1: &Vec3F64,
    p2: &Vec3F64,
    d2: &Vec3F64,
    angle_tolerance: f64,
) -> Result<Vec3F64, GeometryError> {
    let delta = *p2 - *p1;
    match classify_lines(d1, d2, angle_tolerance)? {
        LineRelation::Parallel => {
            let delta_perp = delta - project(&delta, d1);
            if norm(&delta_perp) <= COINCIDENT_EPS * norm(&delta) {
                return Err(GeometryError::InvalidArgument(
                    "lines are coincident, their common perpendicular is undefined".to_string(),
                ));
            }
            Ok(normalize(&delta_perp))
        }
        LineRelation::NonParallel => {
            let e = normalize(&cross(d1, d2));
            Ok(e * orientation(dot(&delta, &e)))
        }
    }
}

/// Signed twist angle in radians between two joint axes that do not intersect.
///
/// The magnitude is the angle between `d1` and `d2`; the sign is positive when
/// `d1 x d2` points along the common perpendicular from the first axis to the
/// second. Parallel axes give `0` or `pi`.
///
/// # Errors
///
/// Same as [`common_perpendicular_direction`].
pub fn twist_angle_skew(
    p1: &Vec3F64,
    d1: &Vec3F64,
    p2: &Vec3F64,
    d2: &Vec3F64,
    angle_tolerance: f64,
) -> Result<f64, GeometryError> {
    let e12 = common_perpendicular_direction(p1, d1, p2, d2, angle_tolerance)?;
    let pvs = cross(d1, d2);
    Ok(angle(d1, d2) * orientation(dot(&pvs, &e12)))
}

/// Signed twist angle in radians between two intersecting joint axes.
///
/// Intersecting axes have no common perpendicular to fix the rotation sense, so
/// the caller supplies `v_ref`. With `pvs = d1 x d2` and
/// `s = orientation(dot(pvs, v_ref))`, `v_ref` is accepted when
/// `norm(v_ref - s * project(v_ref, pvs)) <= proj_tolerance`, and the result is
/// `s * angle(d1, d2)`.
///
/// # Errors
///
/// [`GeometryError::InvalidArgument`] if `proj_tolerance` is negative, a
/// direction or `v_ref` is zero or non-finite, the axes are parallel (`pvs` vanishes), or `v_ref` fails
/// the check above.
pub fn twist_angle_intersecting(
    d1: &Vec3F64,
    d2: &Vec3F64,
    v_ref: &Vec3F64,
    proj_tolerance: f64,
) -> Result<f64, GeometryError> {
    check_tolerance("projection", proj_tolerance)?;
    check_direction("first", d1)?;
    check_direction("second", d2)?;
    check_direction("reference", v_ref)?;

    let pvs = cross(d1, d2);
    if pvs == Vec3F64::ZERO {
        return Err(GeometryError::InvalidArgument(
            "axes are parallel, the twist reference cannot be checked".to_string(),
        ));
    }

    let sign = orientation(dot(&pvs, v_ref));
    let residual = norm(&(*v_ref - project(v_ref, &pvs) * sign));
    if residual.is_nan() || residual > proj_tolerance {
        return Err(GeometryError::InvalidArgument(format!(
            "reference vector {v_ref:?} does not have the required orientation \
             (residual {residual} > {proj_tolerance})"
        )));
    }

    Ok(angle(d1, d2) * sign)
}
