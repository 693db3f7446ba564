//! Fixed-size linear algebra for 3D graphics.
//!
//! This crate provides the numeric foundation of a rendering engine: small, `Copy`, stack-allocated
//! vectors, matrices and quaternions whose dimensions are part of their type.
//!
//! # Overview
//!
//! - [`Vector`] is an `N`-element column vector.
//! - [`Matrix`] is an `R`x`C` matrix stored in row-major order. Its square aliases ([`Mat2`],
//!   [`Mat3`], [`Mat4`]) provide [determinants], [adjugates], [inverses] and
//!   [orthonormalization].
//! - [`SymmetricEigen2`] is the closed-form eigendecomposition of symmetric 2x2 matrices.
//! - [`Quat`] represents rotations in 3D space and converts to and from rotation matrices.
//! - [`Random`] generates random scalars, directions and rotations from an explicit seed.
//!
//! # Conventions
//!
//! - Matrices are row-major and unpadded. [`Matrix::as_slice`] and the [`bytemuck::Pod`] impls
//!   expose exactly the layout graphics APIs expect for row-major uploads.
//! - Matrices act on column vectors (`M * v`). A row vector multiplied from the left (`v * M`) is
//!   the same as `transpose(M) * v`.
//! - Operations that can encounter a singular or zero input return a [`Result`]. Indexing out of
//!   bounds panics, just like it does for slices; `get` and `get_mut` are the checked variants.
//!
//! [determinants]: Matrix::determinant
//! [adjugates]: Matrix::adjugate
//! [inverses]: Matrix::inverse
//! [orthonormalization]: Matrix::orthonormalize

pub mod approx;
mod eigen;
mod error;
mod matrix;
mod quat;
mod random;
mod traits;
mod vector;

pub use eigen::*;
pub use error::*;
pub use matrix::*;
pub use quat::*;
pub use random::*;
pub use traits::*;
pub use vector::*;
