use robokin_algebra::AlgebraError;

/// An error type for the geometry module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Error when an input does not have the required fixed shape.
    #[error(transparent)]
    Shape(#[from] AlgebraError),

    /// Error when a purported rotation matrix has a determinant too far from one.
    #[error("Not a rotation matrix: |det - 1| = |{determinant} - 1| exceeds tolerance {tolerance}")]
    InvalidRotation {
        /// Determinant of the rejected matrix.
        determinant: f64,
        /// Tolerance the determinant was checked against.
        tolerance: f64,
    },

    /// Error when an argument is out of its valid domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Fail with [`GeometryError::InvalidArgument`] unless `tolerance` is a non-negative number.
pub(crate) fn check_tolerance(name: &str, tolerance: f64) -> Result<(), GeometryError> {
    if tolerance.is_nan() || tolerance < 0.0 {
        return Err(GeometryError::InvalidArgument(format!(
            "{name} tolerance must be non-negative, got {tolerance}"
        )));
    }
    Ok(())
}
