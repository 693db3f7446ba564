use std::ops;

/// Types that support the trigonometric functions.
pub trait Trig: Sized {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the arccosine of `self`, in radians.
    fn acos(self) -> Self;

    /// Computes the sine and cosine of `self` at once.
    fn sin_cos(self) -> (Self, Self)
    where
        Self: Copy,
    {
        (self.sin(), self.cos())
    }
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively). Built-in integer types implement it in terms of
/// [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}
macro_rules! ord_min_max {
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
ord_min_max!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

macro_rules! int_consts {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }
        )+
    };
}
int_consts!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

/// A trait for numeric types that support basic arithmetic operations.
///
/// This is implemented for the signed integer types as well as for [`f32`] and [`f64`]. Integer
/// matrices support the exact operations (products, [determinants], [adjugates]), while anything
/// that needs a square root or a division by a computed value requires [`Float`].
///
/// [determinants]: crate::Matrix::determinant
/// [adjugates]: crate::Matrix::adjugate
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Floating-point scalar types ([`f32`] and [`f64`]).
///
/// This is the element type required by every operation that normalizes, inverts, or otherwise
/// needs real-valued arithmetic.
pub trait Float: Number + Sqrt + Trig + MinMax + PartialOrd {
    /// The difference between `1.0` and the next larger representable number.
    const EPSILON: Self;

    /// Returns the absolute value of `self`.
    fn abs(self) -> Self;

    /// Converts an [`f64`] to this type, rounding if necessary.
    fn from_f64(value: f64) -> Self;
}

macro_rules! float_impls {
    ($($ty:ident),+) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = 0.0;
            }

            impl One for $ty {
                const ONE: Self = 1.0;
            }

            impl MinMax for $ty {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }

            impl Sqrt for $ty {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Trig for $ty {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn acos(self) -> Self {
                    self.acos()
                }

                fn sin_cos(self) -> (Self, Self) {
                    self.sin_cos()
                }
            }

            impl Float for $ty {
                const EPSILON: Self = $ty::EPSILON;

                fn abs(self) -> Self {
                    self.abs()
                }

                fn from_f64(value: f64) -> Self {
                    value as $ty
                }
            }
        )+
    };
}
float_impls!(f32, f64);

/// Returns `1/2` in the given number type.
pub(crate) fn one_half<T: Number>() -> T {
    T::ONE / (T::ONE + T::ONE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp() {
        assert_eq!(MinMax::clamp(5, 0, 3), 3);
        assert_eq!(MinMax::clamp(-1.5f32, -1.0, 1.0), -1.0);
        assert_eq!(MinMax::clamp(0.25f64, -1.0, 1.0), 0.25);
    }

    #[test]
    fn float_consts() {
        assert_eq!(<f32 as Float>::EPSILON, f32::EPSILON);
        assert_eq!(<f64 as Float>::from_f64(0.5), 0.5);
        assert_eq!(one_half::<f32>(), 0.5);
        assert_eq!(Float::abs(-2.0f64), 2.0);
    }
}
