//! Closed-form eigendecomposition of symmetric 2x2 matrices.

use crate::{one_half, vec2, Error, Float, Mat2, Matrix, Result, Vec2};

/// Eigenvalues and eigenvectors of a symmetric 2x2 matrix.
///
/// Returned by [`Matrix::symmetric_eigen`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymmetricEigen2<T> {
    /// The two eigenvalues. In the general case, the first one is the larger of the two.
    pub eigenvalues: Vec2<T>,
    /// A matrix whose columns are the unit-length eigenvectors, in the same order as
    /// [`eigenvalues`][Self::eigenvalues].
    pub eigenvectors: Mat2<T>,
}

impl<T: Float> SymmetricEigen2<T> {
    /// Reassembles the decomposed matrix as `V * diag(λ) * transpose(V)`.
    pub fn recompose(&self) -> Mat2<T> {
        let v = self.eigenvectors;
        v * Matrix::from_diagonal(self.eigenvalues) * v.transpose()
    }
}

impl<T: Float> Mat2<T> {
    /// Computes the eigenvalues and eigenvectors of this symmetric matrix.
    ///
    /// If the off-diagonal elements are (close to) zero, the matrix is already diagonal: its
    /// diagonal is returned as the eigenvalues, and the standard basis as the eigenvectors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSymmetric`] if the two off-diagonal elements differ.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gfx_linalg::*;
    /// let mat = Mat2f::from_rows([
    ///     [2.0, 1.0],
    ///     [1.0, 2.0],
    /// ]);
    /// let eigen = mat.symmetric_eigen().unwrap();
    /// assert_approx_eq!(eigen.eigenvalues, vec2(3.0, 1.0));
    /// assert_approx_eq!(eigen.recompose(), mat).abs(1e-6);
    /// ```
    pub fn symmetric_eigen(&self) -> Result<SymmetricEigen2<T>> {
        let (a, b, c, d) = (self[(0, 0)], self[(0, 1)], self[(1, 0)], self[(1, 1)]);
        if b != c {
            return Err(Error::NotSymmetric);
        }

        if b * c < T::EPSILON {
            log::trace!("off-diagonal elements vanish, matrix is already diagonal");
            return Ok(SymmetricEigen2 {
                eigenvalues: vec2(a, d),
                eigenvectors: Mat2::IDENTITY,
            });
        }

        // `tr²/4 - det` rewritten as `((a - d) / 2)² + b·c`, which cannot go negative through
        // cancellation when the diagonal elements are large and close together.
        let half_trace = (a + d) * one_half();
        let h = (a - d) * one_half();
        let s = (h * h + b * c).sqrt();
        let (l0, l1) = (half_trace + s, half_trace - s);

        // `λ0 - d = h + s`, `λ1 - a = -(h + s)`, `λ0 - a = s - h` and `λ1 - d = h - s`.
        let (v0, v1) = if h >= T::ZERO {
            (vec2(h + s, c), vec2(b, -(h + s)))
        } else {
            (vec2(b, s - h), vec2(h - s, c))
        };

        Ok(SymmetricEigen2 {
            eigenvalues: vec2(l0, l1),
            eigenvectors: Matrix::from_columns([v0.normalize()?, v1.normalize()?]),
        })
    }
}
