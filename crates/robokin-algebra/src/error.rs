use std::fmt;

/// Shape of a vector or matrix as rows by columns.
///
/// Vectors are column vectors, so a 3D vector has shape `3x1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl Shape {
    /// Create a new shape.
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Shape of a column vector with `rows` elements.
    pub const fn column(rows: usize) -> Self {
        Self::new(rows, 1)
    }

    /// Shape of a square `n x n` matrix.
    pub const fn square(n: usize) -> Self {
        Self::new(n, n)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// An error type for the algebra module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AlgebraError {
    /// Error when a dynamically sized input does not have the required fixed shape.
    #[error("Invalid shape: expected {expected}, got {actual}")]
    Shape {
        /// Shape required by the target type.
        expected: Shape,
        /// Shape of the provided input.
        actual: Shape,
    },
}
