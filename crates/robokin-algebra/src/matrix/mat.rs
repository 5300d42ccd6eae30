//! Macro to define a square matrix type.
//!
//! The generated types are thin `#[repr(transparent)]` newtypes over the
//! corresponding `glam` matrix type and delegate arithmetic to `glam`.
//!
//! `glam` stores matrices column-major; the row-major constructors here exist
//! because that is how matrices are written down, and how nested lists arrive
//! from user input.
//!
//! # Arguments
//!
//! * `name`        - The name of the matrix type.
//! * `glam_type`   - The underlying `glam` matrix type.
//! * `dim`         - The number of rows (and columns).
//! * `vec_type`    - The public vector type used for columns and mat-vec mul.
//! * `glam_vec`    - The underlying `glam` vector type.
//! * `cols`        - The column parameters (e.g. `[x_axis, y_axis, z_axis]`).
//!
macro_rules! define_matrix_type {
    (
        $(#[$meta:meta])*
        $name:ident,
        $glam_type:ty,
        $dim:literal,
        $vec_type:ty,
        $glam_vec:ty,
        [$($col:ident),+]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
        #[repr(transparent)]
        pub struct $name(pub $glam_type);

        impl $name {
            /// Create a new matrix from column vectors.
            #[inline]
            pub fn from_cols($($col: $vec_type),+) -> Self {
                Self(<$glam_type>::from_cols(
                    $(<$glam_vec>::from($col)),+
                ))
            }

            /// Create a new matrix from rows, written as they read on paper.
            #[inline]
            pub fn from_rows(rows: [[f64; $dim]; $dim]) -> Self {
                Self(<$glam_type>::from_cols_array_2d(&rows).transpose())
            }

            /// Convert the matrix to row-major nested arrays.
            #[inline]
            pub fn to_rows(self) -> [[f64; $dim]; $dim] {
                self.0.transpose().to_cols_array_2d()
            }

            /// Create a matrix from dynamically sized rows, checking the shape.
            ///
            /// A ragged input reports the length of its first offending row as
            /// the column count.
            pub fn try_from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, $crate::AlgebraError> {
                let shape_error = |cols: usize| $crate::AlgebraError::Shape {
                    expected: $crate::Shape::square($dim),
                    actual: $crate::Shape::new(rows.len(), cols),
                };

                if rows.len() != $dim {
                    return Err(shape_error(rows.first().map_or(0, |r| r.as_ref().len())));
                }

                let mut out = [[0.0; $dim]; $dim];
                for (dst, row) in out.iter_mut().zip(rows) {
                    let row = row.as_ref();
                    if row.len() != $dim {
                        return Err(shape_error(row.len()));
                    }
                    dst.copy_from_slice(row);
                }

                Ok(Self::from_rows(out))
            }

            /// Element at `row`, `col`.
            #[inline]
            pub fn get(&self, row: usize, col: usize) -> f64 {
                self.0.col(col)[row]
            }

            /// Transposed matrix.
            #[inline]
            pub fn transpose(&self) -> Self {
                Self(self.0.transpose())
            }

            /// Whether all elements differ from `rhs` by at most `max_abs_diff`.
            #[inline]
            pub fn abs_diff_eq(&self, rhs: &Self, max_abs_diff: f64) -> bool {
                self.0.abs_diff_eq(rhs.0, max_abs_diff)
            }

            /// Identity matrix.
            pub const IDENTITY: Self = Self(<$glam_type>::IDENTITY);

            /// Matrix with all elements zero.
            pub const ZERO: Self = Self(<$glam_type>::ZERO);
        }

        impl std::ops::Deref for $name {
            type Target = $glam_type;

            #[inline]
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        // Conversions to and from the underlying glam type.
        impl From<$glam_type> for $name {
            #[inline]
            fn from(m: $glam_type) -> Self {
                Self(m)
            }
        }

        impl From<$name> for $glam_type {
            #[inline]
            fn from(m: $name) -> Self {
                m.0
            }
        }

        // Shape-checked conversions from nested rows.
        impl TryFrom<Vec<Vec<f64>>> for $name {
            type Error = $crate::AlgebraError;

            fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
                Self::try_from_rows(&rows)
            }
        }

        impl From<$name> for Vec<Vec<f64>> {
            fn from(m: $name) -> Self {
                m.to_rows().iter().map(|row| row.to_vec()).collect()
            }
        }

        // Matrix-matrix multiplication.
        impl std::ops::Mul<$name> for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: $name) -> Self::Output {
                $name::from(self.0 * rhs.0)
            }
        }

        // Matrix-vector multiplication.
        impl std::ops::Mul<$vec_type> for $name {
            type Output = $vec_type;

            #[inline]
            fn mul(self, rhs: $vec_type) -> Self::Output {
                <$vec_type>::from(self.0 * <$glam_vec>::from(rhs))
            }
        }
    };
}
