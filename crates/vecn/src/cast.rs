//! Explicit conversions between scalar kinds and between vector sizes.
//!
//! [`CastFrom`] is implemented for every ordered pair of the supported scalar types ([`f32`],
//! [`f64`], [`i32`], [`u32`], [`i64`], [`bool`], [`f16`], [`Decimal`] and [`Complex64`]):
//!
//! - Conversions between primitive numbers behave like `as`: floats are truncated toward zero and
//!   saturate at the bounds of integer types, NaN becomes 0, integers wrap.
//! - `bool` converts to 1 or 0; numbers convert to `bool` by comparing with 0 (so NaN is `true`).
//! - Complex numbers convert to real numbers by taking their real part; real numbers become complex
//!   numbers with an imaginary part of 0.
//! - [`Decimal`]s created from floats saturate at [`Decimal::MIN`] and [`Decimal::MAX`], NaN
//!   becomes 0. [`Decimal`]s converted to integers are truncated and saturate.
//! - [`f16`] converts through [`f32`] and [`f64`].

use half::f16;
use num_complex::Complex64;
use rust_decimal::{
    prelude::{FromPrimitive, ToPrimitive},
    Decimal,
};

use crate::{traits::Zero, Vector};

/// Explicit, possibly lossy conversion from a value of type `S`.
///
/// Unlike [`From`], this is implemented for conversions that may lose information.
pub trait CastFrom<S>: Sized {
    fn cast_from(value: S) -> Self;
}

/// The counterpart to [`CastFrom`], implemented for every type that some type can be cast from.
pub trait CastInto<T> {
    fn cast_into(self) -> T;
}

impl<S, T: CastFrom<S>> CastInto<T> for S {
    #[inline]
    fn cast_into(self) -> T {
        T::cast_from(self)
    }
}

macro_rules! cast_as {
    ($src:ty => $($dst:ty),+) => {
        $(
            impl CastFrom<$src> for $dst {
                #[inline]
                fn cast_from(value: $src) -> Self {
                    value as $dst
                }
            }
        )+
    };
}
cast_as!(f32 => f32, f64, i32, u32, i64);
cast_as!(f64 => f32, f64, i32, u32, i64);
cast_as!(i32 => f32, f64, i32, u32, i64);
cast_as!(u32 => f32, f64, i32, u32, i64);
cast_as!(i64 => f32, f64, i32, u32, i64);

macro_rules! identity {
    ($($t:ty),+) => {
        $(
            impl CastFrom<$t> for $t {
                #[inline]
                fn cast_from(value: $t) -> Self {
                    value
                }
            }
        )+
    };
}
identity!(bool, f16, Decimal, Complex64);

macro_rules! bool_cast {
    ($($t:ty),+) => {
        $(
            impl CastFrom<bool> for $t {
                #[inline]
                fn cast_from(value: bool) -> Self {
                    u8::from(value) as $t
                }
            }

            impl CastFrom<$t> for bool {
                #[inline]
                fn cast_from(value: $t) -> Self {
                    value != <$t as Zero>::ZERO
                }
            }
        )+
    };
}
bool_cast!(f32, f64, i32, u32, i64);

macro_rules! half_cast {
    ($($t:ty),+) => {
        $(
            impl CastFrom<f16> for $t {
                #[inline]
                fn cast_from(value: f16) -> Self {
                    value.to_f64() as $t
                }
            }

            impl CastFrom<$t> for f16 {
                #[inline]
                fn cast_from(value: $t) -> Self {
                    f16::from_f64(value as f64)
                }
            }
        )+
    };
}
half_cast!(f32, f64, i32, u32, i64);

macro_rules! complex_cast {
    ($($t:ty),+) => {
        $(
            impl CastFrom<Complex64> for $t {
                #[inline]
                fn cast_from(value: Complex64) -> Self {
                    value.re as $t
                }
            }

            impl CastFrom<$t> for Complex64 {
                #[inline]
                fn cast_from(value: $t) -> Self {
                    Complex64::new(value as f64, 0.0)
                }
            }
        )+
    };
}
complex_cast!(f32, f64, i32, u32, i64);

fn decimal_from_f64(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        if value.is_nan() {
            Decimal::ZERO
        } else if value > 0.0 {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    })
}

fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

macro_rules! decimal_int_cast {
    ($($t:ident => $to:ident),+) => {
        $(
            impl CastFrom<$t> for Decimal {
                #[inline]
                fn cast_from(value: $t) -> Self {
                    Decimal::from(value)
                }
            }

            impl CastFrom<Decimal> for $t {
                fn cast_from(value: Decimal) -> Self {
                    value.trunc().$to().unwrap_or(if value.is_sign_negative() {
                        $t::MIN
                    } else {
                        $t::MAX
                    })
                }
            }
        )+
    };
}
decimal_int_cast!(i32 => to_i32, u32 => to_u32, i64 => to_i64);

impl CastFrom<f32> for Decimal {
    fn cast_from(value: f32) -> Self {
        Decimal::from_f32(value).unwrap_or_else(|| decimal_from_f64(value.into()))
    }
}

impl CastFrom<f64> for Decimal {
    fn cast_from(value: f64) -> Self {
        decimal_from_f64(value)
    }
}

impl CastFrom<Decimal> for f32 {
    fn cast_from(value: Decimal) -> Self {
        value.to_f32().unwrap_or(f32::NAN)
    }
}

impl CastFrom<Decimal> for f64 {
    fn cast_from(value: Decimal) -> Self {
        decimal_to_f64(value)
    }
}

impl CastFrom<bool> for f16 {
    #[inline]
    fn cast_from(value: bool) -> Self {
        if value {
            f16::ONE
        } else {
            f16::ZERO
        }
    }
}

impl CastFrom<f16> for bool {
    #[inline]
    fn cast_from(value: f16) -> Self {
        value != f16::ZERO
    }
}

impl CastFrom<bool> for Decimal {
    #[inline]
    fn cast_from(value: bool) -> Self {
        Decimal::from(u8::from(value))
    }
}

impl CastFrom<Decimal> for bool {
    #[inline]
    fn cast_from(value: Decimal) -> Self {
        !value.is_zero()
    }
}

impl CastFrom<bool> for Complex64 {
    #[inline]
    fn cast_from(value: bool) -> Self {
        Complex64::new(f64::from(u8::from(value)), 0.0)
    }
}

impl CastFrom<Complex64> for bool {
    #[inline]
    fn cast_from(value: Complex64) -> Self {
        value != Complex64::ZERO
    }
}

impl CastFrom<f16> for Decimal {
    fn cast_from(value: f16) -> Self {
        Decimal::cast_from(value.to_f32())
    }
}

impl CastFrom<Decimal> for f16 {
    fn cast_from(value: Decimal) -> Self {
        f16::from_f64(decimal_to_f64(value))
    }
}

impl CastFrom<f16> for Complex64 {
    #[inline]
    fn cast_from(value: f16) -> Self {
        Complex64::new(value.to_f64(), 0.0)
    }
}

impl CastFrom<Complex64> for f16 {
    #[inline]
    fn cast_from(value: Complex64) -> Self {
        f16::from_f64(value.re)
    }
}

impl CastFrom<Decimal> for Complex64 {
    fn cast_from(value: Decimal) -> Self {
        Complex64::new(decimal_to_f64(value), 0.0)
    }
}

impl CastFrom<Complex64> for Decimal {
    fn cast_from(value: Complex64) -> Self {
        decimal_from_f64(value.re)
    }
}

impl<T, const N: usize> Vector<T, N> {
    /// Converts each element to type `U`.
    ///
    /// See the [module documentation](crate::cast) for the rules of each conversion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// let v = vec3(1.9f64, -0.5, 3.0).cast::<i32>();
    /// assert_eq!(v, vec3(1, 0, 3));
    ///
    /// let b = vec3(0i32, 7, -1).cast::<bool>();
    /// assert_eq!(b, vec3(false, true, true));
    /// ```
    pub fn cast<U>(self) -> Vector<U, N>
    where
        U: CastFrom<T>,
    {
        self.map(U::cast_from)
    }

    /// Changes the number of elements to `M`.
    ///
    /// Trailing elements are dropped when `M < N`. When `M > N`, the new trailing elements are set
    /// to [`T::ZERO`][Zero::ZERO] (`false` for [`bool`]).
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// assert_eq!(vec4(1, 2, 3, 4).resize::<2>(), vec2(1, 2));
    /// assert_eq!(vec2(1, 2).resize::<4>(), vec4(1, 2, 0, 0));
    /// assert_eq!(vec2(true, true).resize::<3>(), vec3(true, true, false));
    /// ```
    pub fn resize<const M: usize>(self) -> Vector<T, M>
    where
        T: Zero + Copy,
    {
        Vector::from_fn(|i| self.get(i).copied().unwrap_or(T::ZERO))
    }

    /// Converts each element to type `U` and changes the number of elements to `M`.
    ///
    /// This is [`Vector::cast`] followed by [`Vector::resize`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// let v = vec2(1u32, 2).convert::<f64, 3>();
    /// assert_eq!(v, vec3(1.0, 2.0, 0.0));
    /// ```
    pub fn convert<U, const M: usize>(self) -> Vector<U, M>
    where
        U: CastFrom<T> + Zero + Copy,
    {
        self.cast::<U>().resize::<M>()
    }
}
