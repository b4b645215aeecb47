//! Capabilities of the scalar types that vectors are built from.

use std::ops;

use half::f16;
use num_complex::Complex64;
use rust_decimal::{prelude::ToPrimitive, Decimal, MathematicalOps};

/// Types that have a "zero" value (an additive identity).
///
/// For [`bool`], this is `false`. It is the value new components are filled with when a vector is
/// resized to a larger dimension.
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Types with a smallest and a largest finite value.
pub trait Bounded {
    const MIN: Self;
    const MAX: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// Negation is not required, so that unsigned integers qualify.
pub trait Number:
    Zero
    + One
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
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively). Built-in integer types and [`Decimal`] implement
/// it in terms of [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Real-valued scalars that vector norms are expressed in.
pub trait Real: Number + Sqrt + MinMax + PartialOrd {
    /// Converts `self` to an [`f64`], possibly losing precision.
    fn as_f64(self) -> f64;

    /// Returns `true` if `self` is NaN. Always `false` for types without NaN.
    fn is_nan(self) -> bool;
}

/// Scalars that have an absolute value (a *magnitude*).
///
/// The magnitude of real scalars is their absolute value, the magnitude of complex scalars is their
/// modulus. Integer scalars use [`f64`] as their [`Magnitude::Norm`], so that lengths of integer
/// vectors are not truncated and `MIN` values don't overflow.
pub trait Magnitude: Copy {
    /// The type norms of vectors with this element type are computed in.
    type Norm: Real;

    /// Returns `|self|`.
    fn magnitude(self) -> Self::Norm;

    /// Returns `|self|²`.
    fn magnitude2(self) -> Self::Norm {
        let m = self.magnitude();
        m * m
    }

    /// Returns `Σ |xᵢ|²` over `elems`.
    fn sum_of_squares(elems: &[Self]) -> Self::Norm {
        elems
            .iter()
            .fold(<Self::Norm as Zero>::ZERO, |acc, &elem| acc + elem.magnitude2())
    }

    /// Returns the Euclidean norm `sqrt(Σ |xᵢ|²)` of `elems`.
    fn euclidean_norm(elems: &[Self]) -> Self::Norm {
        Self::sum_of_squares(elems).sqrt()
    }
}

macro_rules! zero_one {
    ($zero:literal, $one:literal => $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }

            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0, 1 => u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);
zero_one!(0.0, 1.0 => f32, f64);
zero_one!(false, true => bool);

impl Zero for f16 {
    const ZERO: Self = f16::ZERO;
}
impl One for f16 {
    const ONE: Self = f16::ONE;
}
impl Zero for Decimal {
    const ZERO: Self = Decimal::ZERO;
}
impl One for Decimal {
    const ONE: Self = Decimal::ONE;
}
impl Zero for Complex64 {
    const ZERO: Self = Complex64::new(0.0, 0.0);
}
impl One for Complex64 {
    const ONE: Self = Complex64::new(1.0, 0.0);
}

macro_rules! bounded {
    ($($types:ty),+) => {
        $(
            impl Bounded for $types {
                const MIN: Self = <$types>::MIN;
                const MAX: Self = <$types>::MAX;
            }
        )+
    };
}
bounded!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64, f16, Decimal);

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
ord_min_max!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, Decimal);

macro_rules! float {
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Real for $types {
                fn as_f64(self) -> f64 {
                    self as f64
                }

                fn is_nan(self) -> bool {
                    self.is_nan()
                }
            }

            impl Magnitude for $types {
                type Norm = Self;

                fn magnitude(self) -> Self {
                    self.abs()
                }
            }
        )+
    };
}
float!(f32, f64);

// `f16` arithmetic beyond the basic operators goes through `f32`, which represents every `f16`
// exactly.

impl MinMax for f16 {
    fn min(self, other: Self) -> Self {
        f16::from_f32(self.to_f32().min(other.to_f32()))
    }

    fn max(self, other: Self) -> Self {
        f16::from_f32(self.to_f32().max(other.to_f32()))
    }
}

impl Sqrt for f16 {
    fn sqrt(self) -> Self {
        f16::from_f32(self.to_f32().sqrt())
    }
}

impl Real for f16 {
    fn as_f64(self) -> f64 {
        self.to_f64()
    }

    fn is_nan(self) -> bool {
        self.is_nan()
    }
}

impl Magnitude for f16 {
    type Norm = Self;

    fn magnitude(self) -> Self {
        f16::from_f32(self.to_f32().abs())
    }
}

impl Sqrt for Decimal {
    fn sqrt(self) -> Self {
        // `None` is only returned for negative inputs, and norms are never negative.
        MathematicalOps::sqrt(&self).unwrap_or(Decimal::ZERO)
    }
}

impl Real for Decimal {
    fn as_f64(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }

    fn is_nan(self) -> bool {
        false
    }
}

// `Decimal` arithmetic panics on overflow, and squares overflow long before the values themselves
// do (anything above ~2.8e14 squared exceeds `Decimal::MAX`).
impl Magnitude for Decimal {
    type Norm = Self;

    fn magnitude(self) -> Self {
        self.abs()
    }

    fn magnitude2(self) -> Self {
        self.saturating_mul(self)
    }

    /// Saturates at [`Decimal::MAX`].
    fn sum_of_squares(elems: &[Self]) -> Self {
        elems
            .iter()
            .fold(Decimal::ZERO, |acc, elem| acc.saturating_add(elem.magnitude2()))
    }

    fn euclidean_norm(elems: &[Self]) -> Self {
        let exact = elems
            .iter()
            .try_fold(Decimal::ZERO, |acc, elem| acc.checked_add(elem.checked_mul(*elem)?));
        if let Some(sum) = exact {
            return Sqrt::sqrt(sum);
        }

        // Scale by the largest magnitude, so that every squared term is at most 1.
        let scale = elems
            .iter()
            .fold(Decimal::ZERO, |acc, elem| Ord::max(acc, elem.abs()));
        let scaled = elems.iter().fold(Decimal::ZERO, |acc, elem| {
            let r = *elem / scale;
            acc + r * r
        });
        scale.saturating_mul(Sqrt::sqrt(scaled))
    }
}

macro_rules! int_magnitude {
    ($($types:ty),+) => {
        $(
            impl Magnitude for $types {
                type Norm = f64;

                fn magnitude(self) -> f64 {
                    (self as f64).abs()
                }
            }
        )+
    };
}
int_magnitude!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

impl Magnitude for Complex64 {
    type Norm = f64;

    fn magnitude(self) -> f64 {
        self.norm()
    }

    fn magnitude2(self) -> f64 {
        self.norm_sqr()
    }
}
