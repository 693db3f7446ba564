//! Random scalars, directions and rotations.

use std::f64::consts::TAU;

use crate::{Float, Quat, Vector};

/// A random number generator for the types of this crate.
///
/// [`Random`] wraps a [`fastrand::Rng`] and is passed around explicitly; there is no global
/// generator. Seeding it with [`Random::with_seed`] makes the generated sequence reproducible,
/// which is what tests should do.
///
/// # Examples
///
/// ```
/// # use gfx_linalg::*;
/// let mut a = Random::with_seed(7);
/// let mut b = Random::with_seed(7);
/// assert_eq!(a.unit_quat::<f32>(), b.unit_quat::<f32>());
///
/// let dir = a.unit_vector::<f64, 3>();
/// assert_approx_eq!(dir.length(), 1.0).abs(1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Random {
    rng: fastrand::Rng,
}

/// Floating-point types that [`Random`] can generate.
pub trait Uniform: Float {
    /// Returns a uniformly distributed value in `[0, 1)`.
    fn uniform(random: &mut Random) -> Self;
}

impl Uniform for f32 {
    fn uniform(random: &mut Random) -> Self {
        random.rng.f32()
    }
}

impl Uniform for f64 {
    fn uniform(random: &mut Random) -> Self {
        random.rng.f64()
    }
}

impl Random {
    /// Creates a generator with a random seed.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Creates a generator that produces a fixed sequence determined by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Returns a uniformly distributed value in `[0, 1)`.
    pub fn unit<T: Uniform>(&mut self) -> T {
        T::uniform(self)
    }

    /// Returns a uniformly distributed value in `[-1, 1)`.
    pub fn symmetric<T: Uniform>(&mut self) -> T {
        self.unit::<T>() * (T::ONE + T::ONE) - T::ONE
    }

    /// Returns a uniformly distributed value in `[low, high)`.
    pub fn range<T: Uniform>(&mut self, low: T, high: T) -> T {
        low + (high - low) * self.unit::<T>()
    }

    /// Returns a vector whose elements are uniformly distributed in `[-1, 1)`.
    pub fn vector<T: Uniform, const N: usize>(&mut self) -> Vector<T, N> {
        Vector::from_fn(|_| self.symmetric())
    }

    /// Returns a normally distributed value with mean 0 and standard deviation 1.
    pub fn gaussian<T: Uniform>(&mut self) -> T {
        // Box-Muller transform. `u1` is in `(0, 1]`, so its logarithm is finite.
        let u1 = 1.0 - self.rng.f64();
        let u2 = self.rng.f64();
        T::from_f64((-2.0 * u1.ln()).sqrt() * (TAU * u2).cos())
    }

    /// Returns a uniformly distributed direction (a vector of unit length).
    ///
    /// Works for any dimension: the components are drawn from a normal distribution, which is
    /// rotationally symmetric, so the normalized vector is uniform on the unit sphere.
    ///
    /// # Panics
    ///
    /// Panics if `N` is 0.
    pub fn unit_vector<T: Uniform, const N: usize>(&mut self) -> Vector<T, N> {
        assert!(N > 0, "zero-dimensional vectors have no direction");

        loop {
            let v = Vector::<T, N>::from_fn(|_| self.gaussian());
            if v.length2() > T::EPSILON {
                if let Ok(dir) = v.normalize() {
                    return dir;
                }
            }
        }
    }

    /// Returns a uniformly distributed rotation (a quaternion of unit length).
    pub fn unit_quat<T: Uniform>(&mut self) -> Quat<T> {
        Quat::from_vec(self.unit_vector())
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}
