mod ops;
mod view;

use crate::{
    one_half, vec4, Error, Float, Mat4, Matrix, Number, One, Result, Sqrt, Trig, Vec3, Vector,
    Zero,
};

pub use view::IJKW;

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
///
/// Quaternions are stored like a 4-dimensional vector: the `i`, `j` and `k` imaginary parts come
/// first, followed by the real part `w`. The components can be accessed by name:
///
/// ```
/// # use gfx_linalg::*;
/// let q = Quat::new(1.0, 2.0, 3.0, 4.0);
/// assert_eq!((q.w, q.i, q.j, q.k), (1.0, 2.0, 3.0, 4.0));
/// assert_eq!(q.into_vec(), [2.0, 3.0, 4.0, 1.0]);
/// ```
///
/// Multiplication (`*`) between quaternions is the Hamilton product, which composes rotations:
/// `(a * b).rotate(v)` rotates `v` by `b` first, then by `a`.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from its real part `w` and its imaginary parts `x`, `y` and `z`.
    pub const fn new(w: T, x: T, y: T, z: T) -> Self {
        Self {
            vec: vec4(x, y, z, w),
        }
    }

    /// Creates a quaternion from its real part and a vector of its imaginary parts.
    pub fn from_parts(real: T, imaginary: Vec3<T>) -> Self {
        Self {
            vec: imaginary.extend(real),
        }
    }

    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts, while
    /// the `w` component corresponds to the real number part of the quaternion.
    pub fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    /// Returns the components as a [`Vector`] in `(i, j, k, w)` order.
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }

    /// Returns the real part of this quaternion.
    pub fn real(&self) -> T
    where
        T: Copy,
    {
        self.vec[3]
    }

    /// Returns the imaginary parts of this quaternion as a vector.
    pub fn imaginary(&self) -> Vec3<T>
    where
        T: Copy,
    {
        self.vec.truncate()
    }

    /// Creates a quaternion from a rotation axis and half the rotation angle.
    ///
    /// The result is `cos(angle) + axis * sin(angle)`, so `angle` must already be *half* of the
    /// desired rotation angle, and `axis` should have unit length for the result to be a unit
    /// quaternion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gfx_linalg::*;
    /// use std::f32::consts::PI;
    ///
    /// // Quarter turn around Z: half-angle is PI / 4.
    /// let q = Quat::from_axis_angle(Vec3f::Z, PI / 4.0);
    /// assert_approx_eq!(q, Quat::from_rotation_z(PI / 2.0));
    /// ```
    pub fn from_axis_angle(axis: Vec3<T>, angle: T) -> Self
    where
        T: Number + Trig,
    {
        let (sin, cos) = angle.sin_cos();
        Self::from_parts(cos, axis * sin)
    }

    /// Creates a quaternion that rotates by `radians` around the X axis.
    pub fn from_rotation_x(radians: T) -> Self
    where
        T: Trig + Number,
    {
        let (sin, cos) = (radians * one_half()).sin_cos();
        Self::new(cos, sin, T::ZERO, T::ZERO)
    }

    /// Creates a quaternion that rotates by `radians` around the Y axis.
    pub fn from_rotation_y(radians: T) -> Self
    where
        T: Trig + Number,
    {
        let (sin, cos) = (radians * one_half()).sin_cos();
        Self::new(cos, T::ZERO, sin, T::ZERO)
    }

    /// Creates a quaternion that rotates by `radians` around the Z axis.
    pub fn from_rotation_z(radians: T) -> Self
    where
        T: Trig + Number,
    {
        let (sin, cos) = (radians * one_half()).sin_cos();
        Self::new(cos, T::ZERO, T::ZERO, sin)
    }

    /// Creates a quaternion from rotations around the X, Y and Z axis.
    ///
    /// The result is `from_rotation_x(x) * from_rotation_y(y) * from_rotation_z(z)`, so the Z
    /// rotation is applied to a vector first.
    #[doc(alias = "euler")]
    pub fn from_rotation_xyz(x: T, y: T, z: T) -> Self
    where
        T: Number + Trig,
    {
        Self::from_rotation_x(x) * Self::from_rotation_y(y) * Self::from_rotation_z(z)
    }

    /// Computes the quaternion representing the rotation in the upper-left 3x3 part of `mat`.
    ///
    /// `mat` should be a pure rotation (orthonormal with determinant 1). Depending on the trace of
    /// the rotation part, the largest of the four components is derived first, which keeps the
    /// computation stable for rotations close to 180°.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gfx_linalg::*;
    /// let q = Quat::from_rotation_xyz(0.3, -1.2, 2.0);
    /// let mat = q.to_rotation_matrix().unwrap();
    /// assert_approx_eq!(Quat::from_rotation_matrix(&mat), q).abs(1e-6);
    /// ```
    pub fn from_rotation_matrix(mat: &Mat4<T>) -> Self
    where
        T: Float,
    {
        let m = |row: usize, col: usize| mat[(row, col)];
        let two = T::ONE + T::ONE;
        let quarter = one_half::<T>() * one_half();
        let trace = m(0, 0) + m(1, 1) + m(2, 2);

        if trace > T::ZERO {
            log::trace!("rotation matrix to quaternion: positive trace");
            let s = (trace + T::ONE).sqrt() * two; // 4 * w
            Self::new(
                quarter * s,
                (m(2, 1) - m(1, 2)) / s,
                (m(0, 2) - m(2, 0)) / s,
                (m(1, 0) - m(0, 1)) / s,
            )
        } else if m(0, 0) > m(1, 1) && m(0, 0) > m(2, 2) {
            log::trace!("rotation matrix to quaternion: x dominant");
            let s = (T::ONE + m(0, 0) - m(1, 1) - m(2, 2)).sqrt() * two; // 4 * x
            Self::new(
                (m(2, 1) - m(1, 2)) / s,
                quarter * s,
                (m(0, 1) + m(1, 0)) / s,
                (m(0, 2) + m(2, 0)) / s,
            )
        } else if m(1, 1) > m(2, 2) {
            log::trace!("rotation matrix to quaternion: y dominant");
            let s = (T::ONE + m(1, 1) - m(0, 0) - m(2, 2)).sqrt() * two; // 4 * y
            Self::new(
                (m(0, 2) - m(2, 0)) / s,
                (m(0, 1) + m(1, 0)) / s,
                quarter * s,
                (m(1, 2) + m(2, 1)) / s,
            )
        } else {
            log::trace!("rotation matrix to quaternion: z dominant");
            let s = (T::ONE + m(2, 2) - m(0, 0) - m(1, 1)).sqrt() * two; // 4 * z
            Self::new(
                (m(1, 0) - m(0, 1)) / s,
                (m(0, 2) + m(2, 0)) / s,
                (m(1, 2) + m(2, 1)) / s,
                quarter * s,
            )
        }
    }

    /// Returns the dot product of `self` and `other`, treating both as 4-dimensional vectors.
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.vec.dot(other.vec)
    }

    /// Returns the squared length of this quaternion.
    ///
    /// If the squared length is not equal to one, multiplying a vector with this quaternion will
    /// scale the vector in addition to rotating it. When using quaternions to model rotations, it
    /// is advisable to ensure that quaternions are always of length one.
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.vec.length2()
    }

    /// Returns the length of this quaternion.
    ///
    /// If the length is not equal to one, multiplying a vector with this quaternion will scale the
    /// vector in addition to rotating it. When using quaternions to model rotations, it is
    /// advisable to ensure that quaternions are always of length one.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.vec.length()
    }

    /// Returns the conjugate of this quaternion, which negates the imaginary parts.
    pub fn conjugate(self) -> Self
    where
        T: Number,
    {
        Self::from_parts(self.real(), -self.imaginary())
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NormalizeZeroQuaternion`] if `self` has length zero.
    pub fn normalize(self) -> Result<Self>
    where
        T: Number + Sqrt,
    {
        let vec = self
            .vec
            .normalize()
            .map_err(|_| Error::NormalizeZeroQuaternion)?;
        Ok(Self { vec })
    }

    /// Returns the multiplicative inverse of this quaternion.
    ///
    /// For unit quaternions, this is the same as the [conjugate](Self::conjugate).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvertZeroQuaternion`] if `self` has length zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gfx_linalg::*;
    /// let q = Quat::new(1.0, 2.0, -1.0, 0.5);
    /// assert_approx_eq!(q * q.inverse().unwrap(), Quat::IDENTITY);
    /// assert_eq!(Quatf::new(0.0, 0.0, 0.0, 0.0).inverse(), Err(Error::InvertZeroQuaternion));
    /// ```
    pub fn inverse(self) -> Result<Self>
    where
        T: Number,
    {
        let length2 = self.length2();
        if length2 == T::ZERO {
            return Err(Error::InvertZeroQuaternion);
        }
        Ok(Self {
            vec: self.conjugate().vec / length2,
        })
    }

    /// Rotates `v` by this quaternion, computing `q * v * conjugate(q)`.
    ///
    /// `self` should have unit length. Otherwise, `v` is additionally scaled by the squared length
    /// of `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gfx_linalg::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let q = Quat::from_rotation_z(FRAC_PI_2);
    /// assert_approx_eq!(q.rotate(Vec3f::X), Vec3f::Y).abs(1e-6);
    /// ```
    pub fn rotate(self, v: Vec3<T>) -> Vec3<T>
    where
        T: Number,
    {
        (self * Self::from_parts(T::ZERO, v) * self.conjugate()).imaginary()
    }

    /// Converts this quaternion to a 4x4 rotation matrix.
    ///
    /// Quaternions that are not unit length are normalized by the conversion.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MatrixFromZeroQuaternion`] if `self` has length zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gfx_linalg::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let mat = Quat::from_rotation_z(FRAC_PI_2).to_rotation_matrix().unwrap();
    /// assert_approx_eq!(mat * Vec4f::X, Vec4f::Y).abs(1e-6);
    /// ```
    pub fn to_rotation_matrix(&self) -> Result<Mat4<T>>
    where
        T: Number,
    {
        let length2 = self.length2();
        if length2 == T::ZERO {
            return Err(Error::MatrixFromZeroQuaternion);
        }
        Ok(self.to_rotation_matrix_with_scale((T::ONE + T::ONE) / length2))
    }

    /// Converts this quaternion to a 4x4 rotation matrix, using the precomputed factor `s`.
    ///
    /// `s` is `2 / length2()` for an exact rotation, and `2` for quaternions known to have unit
    /// length.
    pub fn to_rotation_matrix_with_scale(&self, s: T) -> Mat4<T>
    where
        T: Number,
    {
        let [x, y, z, w] = self.vec.into_array();
        let (zero, one) = (T::ZERO, T::ONE);

        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [one - s * (y * y + z * z), s * (x * y - w * z), s * (x * z + w * y), zero],
            [s * (x * y + w * z), one - s * (x * x + z * z), s * (y * z - w * x), zero],
            [s * (x * z - w * y), s * (y * z + w * x), one - s * (x * x + y * y), zero],
            [zero, zero, zero, one],
        ]);
        mat
    }

    /// Spherically interpolates between `self` (at `t = 0`) and `to` (at `t = 1`).
    ///
    /// Both quaternions should have unit length. The interpolation follows the shorter arc between
    /// the two rotations, negating `to` if necessary. When the rotations are nearly identical, this
    /// falls back to a normalized linear interpolation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gfx_linalg::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let a = Quatf::IDENTITY;
    /// let b = Quat::from_rotation_z(FRAC_PI_2);
    /// assert_approx_eq!(a.slerp(b, 0.5), Quat::from_rotation_z(FRAC_PI_2 / 2.0)).abs(1e-6);
    /// ```
    #[doc(alias = "interpolate")]
    pub fn slerp(self, to: Self, t: T) -> Self
    where
        T: Float,
    {
        let mut to = to;
        let mut dot = self.dot(to);
        if dot < T::ZERO {
            to = -to;
            dot = -dot;
        }

        if dot > T::from_f64(0.9995) {
            log::trace!("slerp between nearly parallel quaternions, using lerp");
            let lerp = Self::from_vec(self.vec.lerp(to.vec, t));
            return lerp.normalize().unwrap_or(lerp);
        }

        let angle = dot.acos();
        let sin = angle.sin();
        let from_weight = ((T::ONE - t) * angle).sin() / sin;
        let to_weight = (t * angle).sin() / sin;
        self * from_weight + to * to_weight
    }
}

impl<T: Float> From<Mat4<T>> for Quat<T> {
    fn from(mat: Mat4<T>) -> Self {
        Self::from_rotation_matrix(&mat)
    }
}

impl<T> From<Vector<T, 4>> for Quat<T> {
    fn from(vec: Vector<T, 4>) -> Self {
        Self::from_vec(vec)
    }
}

/// The identity rotation.
impl<T: Zero + One> Default for Quat<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}
