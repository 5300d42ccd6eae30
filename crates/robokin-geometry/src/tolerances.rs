use serde::{Deserialize, Serialize};

use crate::error::{check_tolerance, GeometryError};

/// Default maximum `|det - 1|` for a matrix to be accepted as a rotation.
pub const DEFAULT_DET_TOLERANCE: f64 = 0.01;

/// Default angle, in radians, under which two lines are treated as parallel.
pub const DEFAULT_ANGLE_TOLERANCE: f64 = 1e-3;

/// Default residual allowed when checking a twist reference vector.
pub const DEFAULT_PROJ_TOLERANCE: f64 = 1e-3;

/// Numeric tolerances used across the geometry routines.
///
/// Missing fields take their default when deserialized, so a configuration only
/// needs to name the tolerances it overrides.
///
/// Example:
///
/// ```
/// use robokin_geometry::tolerances::Tolerances;
///
/// let tol: Tolerances = serde_json::from_str(r#"{ "angle": 1e-6 }"#).unwrap();
/// assert_eq!(tol.angle, 1e-6);
/// assert_eq!(tol.determinant, 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    /// Maximum `|det - 1|` of a rotation matrix.
    pub determinant: f64,
    /// Angle in radians within which two directions count as parallel.
    pub angle: f64,
    /// Residual allowed in the reference-vector check of intersecting twists.
    pub projection: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            determinant: DEFAULT_DET_TOLERANCE,
            angle: DEFAULT_ANGLE_TOLERANCE,
            projection: DEFAULT_PROJ_TOLERANCE,
        }
    }
}

impl Tolerances {
    /// Check every tolerance is a non-negative number.
    pub fn validate(&self) -> Result<(), GeometryError> {
        check_tolerance("determinant", self.determinant)?;
        check_tolerance("angle", self.angle)?;
        check_tolerance("projection", self.projection)?;
        Ok(())
    }
}
