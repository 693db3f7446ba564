use std::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
};

use crate::{approx::ApproxEq, Number, Quat};

/// Hamilton product.
///
/// `(w1, v1) * (w2, v2) = (w1 * w2 - v1 · v2, v1 × v2 + w1 * v2 + w2 * v1)`
impl<T: Number> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let (w1, v1) = (self.real(), self.imaginary());
        let (w2, v2) = (rhs.real(), rhs.imaginary());
        Quat::from_parts(w1 * w2 - v1.dot(v2), v1.cross(v2) + v2 * w1 + v1 * w2)
    }
}

/// Component-wise scaling.
impl<T: Number> Mul<T> for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Quat::from_vec(self.into_vec() * rhs)
    }
}

impl<T: Number> Add for Quat<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Quat::from_vec(self.into_vec() + rhs.into_vec())
    }
}

impl<T: Number> Sub for Quat<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Quat::from_vec(self.into_vec() - rhs.into_vec())
    }
}

/// Negates every component. The result represents the same rotation.
impl<T: Number> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Quat::from_vec(-self.into_vec())
    }
}

impl<T: PartialEq> PartialEq for Quat<T> {
    fn eq(&self, other: &Self) -> bool {
        self.vec == other.vec
    }
}

impl<T: Eq> Eq for Quat<T> {}

impl<T: ApproxEq> ApproxEq for Quat<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.vec.abs_diff_eq(&other.vec, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.vec.rel_diff_eq(&other.vec, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.vec.ulps_diff_eq(&other.vec, ulps_tolerance)
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quat")
            .field("w", &self.w)
            .field("i", &self.i)
            .field("j", &self.j)
            .field("k", &self.k)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec3, Quat};

    #[test]
    fn hamilton_product() {
        let i = Quat::new(0, 1, 0, 0);
        let j = Quat::new(0, 0, 1, 0);
        let k = Quat::new(0, 0, 0, 1);
        let minus_one = Quat::new(-1, 0, 0, 0);

        assert_eq!(i * i, minus_one);
        assert_eq!(j * j, minus_one);
        assert_eq!(k * k, minus_one);
        assert_eq!(i * j * k, minus_one);
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(Quat::IDENTITY * i, i);
    }

    #[test]
    fn product_of_parts() {
        let a = Quat::from_parts(2, vec3(1, 0, 3));
        let b = Quat::from_parts(-1, vec3(0, 4, 1));
        // w = 2 * -1 - 3, v = (1, 0, 3) × (0, 4, 1) + 2 * (0, 4, 1) - (1, 0, 3)
        assert_eq!(a * b, Quat::from_parts(-5, vec3(-13, 7, 3)));
    }

    #[test]
    fn linear() {
        let a = Quat::new(1, 2, 3, 4);
        let b = Quat::new(4, 3, 2, 1);
        assert_eq!(a + b, Quat::new(5, 5, 5, 5));
        assert_eq!(a - b, Quat::new(-3, -1, 1, 3));
        assert_eq!(a * 2, Quat::new(2, 4, 6, 8));
        assert_eq!(-a, Quat::new(-1, -2, -3, -4));
    }

    #[test]
    fn fmt() {
        assert_eq!(
            format!("{:?}", Quat::new(1, 2, 3, 4)),
            "Quat { w: 1, i: 2, j: 3, k: 4 }"
        );
    }
}
