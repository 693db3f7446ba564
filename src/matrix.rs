use std::{
    array, fmt,
    mem::{ManuallyDrop, MaybeUninit},
};

use crate::{Error, Float, Number, One, Result, Vector, Zero};

mod ops;

/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] fill a matrix with raw elements, or
///   from an array of row or column vectors.
/// - [`Matrix::from_slice`] copies `R * C` elements in row-major order.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - For square matrices, [`Matrix::from_diagonal`] creates a matrix with a specified diagonal and
///   zero outside of it, and [`Default`] returns the identity matrix.
/// - [`Matrix::resize`] embeds a matrix into a larger one (padding with the identity), or cuts
///   it down to a smaller one.
///
/// Additionally, [`Matrix::ZERO`] is a matrix with every element set to 0, and
/// [`Matrix::IDENTITY`] has 1 on its diagonal and 0 everywhere else.
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] and [`IndexMut`] for tuples of `(usize, usize)`. The first
/// element of the tuple is the *row*, the second is the *column*, matching common mathematical
/// notation. Indices are 0-based.
///
/// ```
/// # use gfx_linalg::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1],
///     [2, 3],
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(1, 0)], 2);
/// ```
///
/// A single `usize` index addresses the row-major storage directly: index `i * C + j` is row `i`,
/// column `j`.
///
/// ```
/// # use gfx_linalg::*;
/// let mat = Matrix::from_rows([
///     [0, 1, 2],
///     [3, 4, 5],
/// ]);
/// assert_eq!(mat[4], mat[(1, 1)]);
/// assert_eq!(mat.as_slice(), &[0, 1, 2, 3, 4, 5]);
/// ```
///
/// Indexing out of bounds will panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead.
///
/// # Memory Layout
///
/// The elements are stored contiguously, row after row, without padding. [`Matrix::as_slice`] and
/// the [`bytemuck::Pod`] impl expose this layout for uploads to graphics APIs.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The smallest dimension of the matrix (`R` or `C`).
    const MIN_DIMENSION: usize = if R > C { C } else { R };

    /// Creates a new [`Matrix`] in which the elements are wrapped in [`MaybeUninit`].
    const fn new_uninit() -> Matrix<MaybeUninit<T>, R, C> {
        // Safety: `uninit` is a valid value for the `MaybeUninit<T>` elements
        unsafe { MaybeUninit::<Matrix<MaybeUninit<T>, R, C>>::uninit().assume_init() }
    }

    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gfx_linalg::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Self(rows.map(|row| Into::<Vector<T, C>>::into(row).into_array()))
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Matrix::from_rows(columns).transpose()
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gfx_linalg::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Creates a [`Matrix`] from `R * C` elements in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `slice` does not contain exactly `R * C` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gfx_linalg::*;
    /// let mat = Mat2::from_slice(&[1, 2, 3, 4]).unwrap();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]));
    /// assert!(Mat2::from_slice(&[1, 2, 3]).is_err());
    /// ```
    pub fn from_slice(slice: &[T]) -> Result<Self>
    where
        T: Copy,
    {
        if slice.len() != R * C {
            return Err(Error::DimensionMismatch {
                expected: R * C,
                actual: slice.len(),
            });
        }
        Ok(Self::from_fn(|row, col| slice[row * C + col]))
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gfx_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// let mat = mat.map(|i| i * 2);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  2,  4],
    ///     [ 6,  8, 10],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gfx_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R> {
        let mut out = Matrix::<T, C, R>::new_uninit();
        for (r, row) in self.0.into_iter().enumerate() {
            for (c, elem) in row.into_iter().enumerate() {
                out.0[c][r] = MaybeUninit::new(elem);
            }
        }
        // Safety: the loop above writes to each element.
        unsafe { out.assume_init() }
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gfx_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get(1, 0), Some(&3));
    /// assert_eq!(mat.get(2, 0), None);
    /// assert_eq!(mat.get(0, 3), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|row| row.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|row| row.get_mut(col))
    }

    /// Returns the row at index `row` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `row` is not less than `R`.
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        self.0[row].into()
    }

    /// Returns the column at index `col` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `col` is not less than `C`.
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        Vector::from_fn(|row| self.0[row][col])
    }

    /// Returns the elements of the matrix in row-major order.
    ///
    /// This is the view to hand to graphics APIs expecting a row-major array of `R * C` values.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_flattened()
    }

    /// Returns the elements of the matrix in row-major order, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_flattened_mut()
    }

    /// Returns a matrix with the contents of `self`, but a potentially different size.
    ///
    /// Elements not present in `self` are taken from the identity matrix, so a 2D transform keeps
    /// acting as the same transform on the first two coordinates of a 3D vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gfx_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.resize::<3, 3>(), Matrix::from_rows([
    ///     [1, 2, 0],
    ///     [3, 4, 0],
    ///     [0, 0, 1],
    /// ]));
    /// assert_eq!(mat.resize::<1, 2>(), Matrix::from_rows([
    ///     [1, 2],
    /// ]));
    /// ```
    pub fn resize<const R2: usize, const C2: usize>(self) -> Matrix<T, R2, C2>
    where
        T: Zero + One + Copy,
    {
        Matrix::from_fn(|row, col| {
            if row < R && col < C {
                self.0[row][col]
            } else if row == col {
                T::ONE
            } else {
                T::ZERO
            }
        })
    }

    /// Returns `self`, but with the element at `(row, col)` replaced with `elem`, without dropping
    /// the old element at that position.
    const fn with_leaky_elem(self, row: usize, col: usize, elem: T) -> Self {
        unsafe {
            // Leaks whatever was at `(row, col)` before.
            union UnWrapper<T, const R: usize, const C: usize> {
                wrapped: ManuallyDrop<Matrix<ManuallyDrop<T>, R, C>>,
                unwrapped: ManuallyDrop<Matrix<T, R, C>>,
            }

            let mut wrapped = ManuallyDrop::into_inner(
                UnWrapper {
                    unwrapped: ManuallyDrop::new(self),
                }
                .wrapped,
            );
            wrapped.0[row][col] = ManuallyDrop::new(elem);

            ManuallyDrop::into_inner(
                UnWrapper {
                    wrapped: ManuallyDrop::new(wrapped),
                }
                .unwrapped,
            )
        }
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rows are printed on a single line each, even with `{:#?}`.
        struct FormatRow<'a, T>(&'a [T]);
        impl<T: fmt::Debug> fmt::Debug for FormatRow<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (i, elem) in self.0.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")
            }
        }

        f.debug_list()
            .entries(self.0.iter().map(|row| FormatRow(row)))
            .finish()
    }
}

impl<T: Zero, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = unsafe {
        // `[T::ZERO; C]` is not a constant, so it can't be repeated `R` times without `T: Copy`.
        let mut mat = Self::new_uninit();
        let mut row = 0;
        while row < R {
            let mut col = 0;
            while col < C {
                mat.0[row][col] = MaybeUninit::new(T::ZERO);
                col += 1;
            }
            row += 1;
        }

        // Safety: the loop above has initialized every element.
        mat.assume_init()
    };
}

impl<T, const R: usize, const C: usize> Matrix<MaybeUninit<T>, R, C> {
    /// Removes the [`MaybeUninit`] wrapper from each matrix element.
    ///
    /// See [`MaybeUninit::assume_init`] for details about the safety invariant the caller needs to
    /// uphold.
    const unsafe fn assume_init(self) -> Matrix<T, R, C> {
        // Safety: `MaybeUninit<T>` and `T` have the same layout.
        union UnWrapper<T, const R: usize, const C: usize> {
            uninit: ManuallyDrop<Matrix<MaybeUninit<T>, R, C>>,
            init: ManuallyDrop<Matrix<T, R, C>>,
        }

        ManuallyDrop::into_inner(
            UnWrapper {
                uninit: ManuallyDrop::new(self),
            }
            .init,
        )
    }
}

impl<T: Zero + One, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    ///
    /// Multiplying any vector with this matrix returns the vector unchanged.
    pub const IDENTITY: Self = {
        let mut this = Self::ZERO;
        let mut i = 0;
        while i < Self::MIN_DIMENSION {
            this = this.with_leaky_elem(i, i, T::ONE);
            i += 1;
        }
        this
    };
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns a [`Vector`] holding the diagonal elements of this square matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gfx_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.into_diagonal(), [1, 4]);
    /// ```
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gfx_linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag: Vector<T, N> = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use gfx_linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag.trace(), 1 + 2 + 3);
    ///
    /// assert_eq!(Mat4f::IDENTITY.trace(), 4.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i][i])
    }
}

impl<T: Number, const N: usize> Matrix<T, N, N> {
    /// Returns the [determinant] of the matrix.
    ///
    /// Matrices of up to 3x3 elements use closed-form expressions. Larger matrices are expanded
    /// along their columns ([Laplace expansion]), which stays exact for integer element types.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    /// [Laplace expansion]: https://en.wikipedia.org/wiki/Laplace_expansion
    ///
    /// # Examples
    ///
    /// ```
    /// # use gfx_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [4, 3, 1, 7],
    ///     [2, 8, 9, 3],
    ///     [5, 1, 7, 9],
    ///     [8, 3, 1, 5],
    /// ]);
    /// assert_eq!(mat.determinant(), -2246);
    /// ```
    pub fn determinant(&self) -> T {
        let m = &self.0;
        match N {
            0 => T::ONE,
            1 => m[0][0],
            2 => m[0][0] * m[1][1] - m[0][1] * m[1][0],
            3 => {
                m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
                    - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
                    + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
            }
            _ => self.minor_determinant(0, 0),
        }
    }

    /// Returns the cofactor of the element at `(row, col)`.
    ///
    /// This is the determinant of the matrix with `row` and `col` removed, negated if `row + col`
    /// is odd.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gfx_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [0, 4, 5],
    ///     [1, 0, 6],
    /// ]);
    /// assert_eq!(mat.cofactor(0, 0), 24);
    /// assert_eq!(mat.cofactor(0, 1), 5);
    /// ```
    pub fn cofactor(&self, row: usize, col: usize) -> T {
        assert!(
            row < N && col < N,
            "cofactor index ({row}, {col}) out of bounds for {N}x{N} matrix"
        );
        let minor = self.minor_determinant(1 << row, 1 << col);
        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    /// Computes the determinant of the submatrix that remains after removing the rows and columns
    /// whose bits are set in `skip_rows` and `skip_cols`.
    ///
    /// Both masks must remove the same number of rows and columns.
    fn minor_determinant(&self, skip_rows: u64, skip_cols: u64) -> T {
        assert!(N <= u64::BITS as usize, "matrix too large for cofactor expansion");

        // Expand along the first remaining column.
        let Some(col) = (0..N).find(|&col| skip_cols & (1 << col) == 0) else {
            return T::ONE;
        };

        let mut det = T::ZERO;
        let mut positive = true;
        for row in (0..N).filter(|&row| skip_rows & (1 << row) == 0) {
            let elem = self.0[row][col];
            if elem != T::ZERO {
                let minor = self.minor_determinant(skip_rows | 1 << row, skip_cols | 1 << col);
                det = if positive {
                    det + elem * minor
                } else {
                    det - elem * minor
                };
            }
            positive = !positive;
        }
        det
    }

    /// Returns the [adjugate] of the matrix (the transpose of its cofactor matrix).
    ///
    /// [adjugate]: https://en.wikipedia.org/wiki/Adjugate_matrix
    ///
    /// # Examples
    ///
    /// ```
    /// # use gfx_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.adjugate(), Matrix::from_rows([
    ///     [ 4, -2],
    ///     [-3,  1],
    /// ]));
    ///
    /// // `M * adj(M) == det(M) * I`
    /// assert_eq!(mat * mat.adjugate(), Mat2::IDENTITY * mat.determinant());
    /// ```
    pub fn adjugate(&self) -> Self {
        if N == 2 {
            let m = &self.0;
            return Self::from_fn(|row, col| {
                if row == col {
                    m[1 - row][1 - col]
                } else {
                    -m[row][col]
                }
            });
        }

        Self::from_fn(|row, col| self.cofactor(col, row))
    }

    /// Inverts this matrix.
    ///
    /// The inverse is computed as the [adjugate] divided by the [determinant].
    ///
    /// [adjugate]: Self::adjugate
    /// [determinant]: Self::determinant
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularMatrix`] if the determinant of `self` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gfx_linalg::*;
    /// assert_eq!(Mat2f::IDENTITY.inverse(), Ok(Mat2f::IDENTITY));
    ///
    /// let singular = Mat3f::from_rows([
    ///     [1.0, 2.0, 3.0],
    ///     [1.0, 2.0, 3.0],
    ///     [0.0, 5.0, 1.0],
    /// ]);
    /// assert_eq!(singular.inverse(), Err(Error::SingularMatrix));
    /// ```
    pub fn inverse(&self) -> Result<Self>
    where
        T: Float,
    {
        let det = self.determinant();
        if det == T::ZERO {
            log::debug!("refusing to invert singular {N}x{N} matrix");
            return Err(Error::SingularMatrix);
        }

        Ok(self.adjugate() / det)
    }

    /// Orthonormalizes the columns of this matrix using the (modified) [Gram-Schmidt process].
    ///
    /// The first column keeps its direction; every following column is made perpendicular to all
    /// columns before it. All columns of the result have unit length.
    ///
    /// [Gram-Schmidt process]: https://en.wikipedia.org/wiki/Gram%E2%80%93Schmidt_process
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if the columns are linearly dependent, so that a column
    /// vanishes (up to rounding) after removing its projections.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gfx_linalg::*;
    /// let mat = Mat3f::from_columns([
    ///     [2.0, 0.0, 0.0],
    ///     [1.0, 1.0, 0.0],
    ///     [1.0, 1.0, 3.0],
    /// ]);
    /// assert_approx_eq!(mat.orthonormalize().unwrap(), Mat3f::IDENTITY);
    /// ```
    pub fn orthonormalize(&self) -> Result<Self>
    where
        T: Float,
    {
        // Columns shorter than this fraction of their original length are considered to have
        // vanished; the remainder is rounding error.
        let tolerance = T::EPSILON * T::from_f64(64.0);

        let mut columns: [Vector<T, N>; N] = array::from_fn(|col| self.column(col));
        for col in 0..N {
            let original = columns[col].length();
            for prev in 0..col {
                let projection = columns[prev] * columns[col].dot(columns[prev]);
                columns[col] = columns[col] - projection;
            }
            if columns[col].length() <= original * tolerance {
                return Err(Error::DivisionByZero);
            }
            columns[col] = columns[col].normalize()?;
        }

        Ok(Self::from_columns(columns))
    }
}

/// The identity matrix.
impl<T: Zero + One, const N: usize> Default for Matrix<T, N, N> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec2, vec3, Vec3f};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Matrix::from_rows([[1, 2, 3], [4, 5, 6]]),
            Matrix::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
    }

    #[test]
    fn row_major_layout() {
        let mut mat = Matrix::from_rows([[0, 1], [2, 3]]);
        assert_eq!(mat.as_slice(), &[0, 1, 2, 3]);
        assert_eq!(bytemuck::cast_slice::<_, i32>(&[mat]), &[0, 1, 2, 3]);

        mat[3] = 9;
        assert_eq!(mat[(1, 1)], 9);
        mat.as_mut_slice()[1] = 7;
        assert_eq!(mat[(0, 1)], 7);

        assert_eq!(mat.row(1), vec2(2, 9));
        assert_eq!(mat.column(1), vec2(7, 9));
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1, 0],
            [0, 2],
        ]));

        assert_eq!(mat.into_diagonal(), [1, 2]);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2f::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2f::IDENTITY), "[[1.0, 0.0], [0.0, 1.0]]");
        assert_eq!(Mat4f::default(), Mat4f::IDENTITY);
        assert_eq!(
            Matrix::<i32, 2, 3>::IDENTITY,
            Matrix::from_rows([[1, 0, 0], [0, 1, 0]])
        );
    }

    #[test]
    fn transpose_involution() {
        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [1, 2, 3],
            [4, 5, 6],
        ]);
        assert_eq!(mat.transpose().transpose(), mat);
        assert_eq!(mat.transpose()[(2, 1)], 6);
    }

    #[test]
    fn trace() {
        let mat = Matrix::from_rows([[1.5, 9.0], [-4.0, 2.5]]);
        assert_eq!(mat.trace(), 4.0);
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat2f::ZERO.determinant(), 0.0);
        assert_eq!(Mat3f::ZERO.determinant(), 0.0);
        assert_eq!(Mat4f::ZERO.determinant(), 0.0);
        assert_eq!(Mat2f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat3f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4f::IDENTITY.determinant(), 1.0);
        assert_eq!(Matrix::<f64, 6, 6>::IDENTITY.determinant(), 1.0);

        #[rustfmt::skip]
        let testmat = Matrix::from_rows([
            [-2, -1,  2],
            [ 2,  1,  4],
            [-3,  3, -1],
        ]);
        assert_eq!(testmat.determinant(), 54);
        assert_eq!(testmat.transpose().determinant(), 54);
        assert_eq!(testmat.minor_determinant(0, 0), 54);
    }

    #[test]
    fn determinant_4x4() {
        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [4, 3, 1, 7],
            [2, 8, 9, 3],
            [5, 1, 7, 9],
            [8, 3, 1, 5],
        ]);
        assert_eq!(mat.determinant(), -2246);
        assert_eq!(mat.transpose().determinant(), -2246);
        assert_eq!(mat.map(|e| e as f64).determinant(), -2246.0);

        // Swapping two rows flips the sign.
        let swapped = Matrix::from_rows([mat.row(1), mat.row(0), mat.row(2), mat.row(3)]);
        assert_eq!(swapped.determinant(), 2246);
    }

    #[test]
    fn determinant_of_product() {
        let a = Matrix::from_rows([[2, 0, 1, 0], [1, 3, 0, 0], [0, 1, 1, 2], [1, 0, 0, 1]]);
        let b = Matrix::from_rows([[1, 1, 0, 0], [0, 2, 1, 0], [3, 0, 1, 1], [0, 0, 2, 1]]);
        assert_eq!((a * b).determinant(), a.determinant() * b.determinant());
    }

    #[test]
    fn adjugate() {
        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [1, 2, 3],
            [0, 4, 5],
            [1, 0, 6],
        ]);
        #[rustfmt::skip]
        assert_eq!(mat.adjugate(), Matrix::from_rows([
            [ 24, -12, -2],
            [  5,   3, -5],
            [ -4,   2,  4],
        ]));
        assert_eq!(mat * mat.adjugate(), Mat3::IDENTITY * mat.determinant());
        assert_eq!(Matrix::from_rows([[5]]).adjugate(), Matrix::from_rows([[1]]));
    }

    #[test]
    fn inverse_2x2() {
        let mat = Mat2f::from_rows([[4.0, 7.0], [2.0, 6.0]]);
        let inv = mat.inverse().unwrap();
        assert_approx_eq!(inv, Mat2f::from_rows([[0.6, -0.7], [-0.2, 0.4]])).abs(1e-6);
        assert_approx_eq!(mat * inv, Mat2f::IDENTITY).abs(1e-6);
        assert_approx_eq!(inv * mat, Mat2f::IDENTITY).abs(1e-6);
    }

    #[test]
    fn inverse_4x4() {
        #[rustfmt::skip]
        let mat = Matrix::<f64, 4, 4>::from_rows([
            [4.0, 3.0, 1.0, 7.0],
            [2.0, 8.0, 9.0, 3.0],
            [5.0, 1.0, 7.0, 9.0],
            [8.0, 3.0, 1.0, 5.0],
        ]);
        let inv = mat.inverse().unwrap();
        assert_approx_eq!(mat * inv, Mat4::IDENTITY).abs(1e-12);
        assert_approx_eq!(inv * mat, Mat4::IDENTITY).abs(1e-12);
    }

    #[test]
    fn singular() {
        #[rustfmt::skip]
        let mat = Mat4f::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [0.0, 1.0, 0.0, 1.0],
            [1.0, 2.0, 3.0, 4.0],
            [2.0, 0.0, 1.0, 0.0],
        ]);
        assert_eq!(mat.determinant(), 0.0);
        assert_eq!(mat.inverse(), Err(Error::SingularMatrix));
        assert_eq!(Mat2f::ZERO.inverse(), Err(Error::SingularMatrix));
    }

    #[test]
    fn orthonormalize() {
        let mat = Mat3f::from_columns([
            vec3(1.0, 1.0, 0.0),
            vec3(1.0, 0.0, 1.0),
            vec3(0.0, 1.0, 1.0),
        ]);
        let q = mat.orthonormalize().unwrap();
        assert_approx_eq!(q.transpose() * q, Mat3f::IDENTITY).abs(1e-6);

        // The first column keeps its direction.
        let first: Vec3f = q.column(0);
        assert_approx_eq!(first, vec3(1.0, 1.0, 0.0).normalize().unwrap()).abs(1e-6);
    }

    #[test]
    fn orthonormalize_4x4() {
        let mat = Mat4::from_rows([
            [2.0, 1.0, 0.0, 3.0],
            [0.0, 1.0, 4.0, 1.0],
            [1.0, 0.0, 1.0, 0.0],
            [0.0, 2.0, 1.0, 1.0],
        ]);
        let q = mat.orthonormalize().unwrap();
        assert_approx_eq!(q.transpose() * q, Mat4::IDENTITY).abs(1e-12);
        // Gram-Schmidt leaves `q^T * mat` upper triangular.
        let r = q.transpose() * mat;
        for row in 1..4 {
            for col in 0..row {
                assert_approx_eq!(r[(row, col)], 0.0).abs(1e-12);
            }
        }
    }

    #[test]
    fn orthonormalize_dependent_columns() {
        let mat = Mat2f::from_columns([[1.0, 2.0], [2.0, 4.0]]);
        assert_eq!(mat.orthonormalize(), Err(Error::DivisionByZero));

        let mat = Mat2f::from_columns([[0.0, 0.0], [2.0, 4.0]]);
        assert_eq!(mat.orthonormalize(), Err(Error::DivisionByZero));
    }

    #[rustfmt::skip]
    #[test]
    fn resize() {
        let mat = Matrix::from_rows([
            [1, 2],
            [3, 4],
        ]);

        assert_eq!(mat.resize::<4, 4>(), Matrix::from_rows([
            [1, 2, 0, 0],
            [3, 4, 0, 0],
            [0, 0, 1, 0],
            [0, 0, 0, 1],
        ]));

        let smaller = mat.resize::<1, 2>();
        assert_eq!(smaller, Matrix::from_rows([
            [1, 2]
        ]));
    }

    #[test]
    fn from_slice() {
        assert_eq!(
            Matrix::<i32, 2, 3>::from_slice(&[1, 2, 3, 4, 5, 6]).unwrap(),
            Matrix::from_rows([[1, 2, 3], [4, 5, 6]])
        );
        assert_eq!(
            Mat2::<i32>::from_slice(&[1; 5]),
            Err(Error::DimensionMismatch {
                expected: 4,
                actual: 5
            })
        );
    }
}
