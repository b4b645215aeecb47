//! Approximate equality of floating-point scalars and vectors.
//!
//! Most operations on float vectors (normalization, norms, text round-trips with limited precision)
//! produce results that are only close to the mathematically exact value. [`ApproxEq`] and the
//! [`assert_approx_eq!`][crate::assert_approx_eq] and [`assert_approx_ne!`][crate::assert_approx_ne]
//! macros compare such values with a configurable tolerance.

mod impls;

use std::{fmt, panic::Location};

/// Types that can be compared for *approximate equality*.
///
/// Vectors, arrays and slices are approximately equal if all of their elements are. Complex
/// numbers are approximately equal if both their real and imaginary parts are.
///
/// For background on comparing floating-point numbers, see:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Type of the tolerance used by absolute and relative comparisons.
    ///
    /// This is the underlying floating-point type ([`f32`], [`f64`] or [`f16`][half::f16]).
    type Tolerance: DefaultTolerances + Copy;

    /// Returns whether `self` and `other` differ by at most `abs_tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Returns whether `self` and `other` differ by at most `rel_tolerance` times the larger of
    /// their absolute values.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: Self::Tolerance) -> bool;

    /// Returns whether at most `ulps_tolerance` representable values lie between `self` and
    /// `other` ([*units in the last place*]).
    ///
    /// `NaN` never compares equal. `-0.0` and `+0.0` always compare equal, any other values with
    /// different signs never do.
    ///
    /// [*units in the last place*]: https://en.wikipedia.org/wiki/Unit_in_the_last_place
    fn ulps_diff_eq(&self, other: &Rhs, ulps_tolerance: u32) -> bool;
}

/// Default tolerances used by the assertion macros when no comparison is configured.
pub trait DefaultTolerances {
    const DEFAULT_ABS_TOLERANCE: Self;
    const DEFAULT_REL_TOLERANCE: Self;
    const DEFAULT_ULPS_TOLERANCE: u32;
}

/// Assertion guard returned by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The assertion is checked when the guard is dropped, which normally happens at the end of the
/// statement containing the macro. Before that, the comparison can be configured:
///
/// - [`Asserter::abs`] enables an absolute comparison ([`ApproxEq::abs_diff_eq`]).
/// - [`Asserter::rel`] enables a relative comparison ([`ApproxEq::rel_diff_eq`]).
/// - [`Asserter::ulps`] enables a comparison by ULPs ([`ApproxEq::ulps_diff_eq`]).
///
/// When several comparisons are enabled, the values are equal if any of them says so. When none
/// is enabled, an absolute comparison with [`DEFAULT_ABS_TOLERANCE`] and a relative comparison
/// with [`DEFAULT_REL_TOLERANCE`] are performed.
///
/// [`DEFAULT_ABS_TOLERANCE`]: DefaultTolerances::DEFAULT_ABS_TOLERANCE
/// [`DEFAULT_REL_TOLERANCE`]: DefaultTolerances::DEFAULT_REL_TOLERANCE
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<T::Tolerance>,
    rel: Option<T::Tolerance>,
    ulps: Option<u32>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
            ulps: None,
        }
    }

    /// Compares the absolute difference of the values against `abs`.
    ///
    /// Works well for values close to zero, including values of opposite sign.
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Compares the absolute difference of the values against `rel` times the larger magnitude.
    ///
    /// Works well for values far from zero. Any non-zero value only compares equal to zero with
    /// `rel >= 1.0`.
    pub fn rel(&mut self, rel: T::Tolerance) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    /// Counts the representable values between the two values, and compares that against `ulps`.
    ///
    /// This adapts to the spacing of floats at the magnitude of the compared values, but is
    /// useless for values of opposite sign close to zero.
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.ulps = Some(ulps);
        self
    }

    fn equal(&self) -> bool {
        let abs = self
            .abs
            .map_or(false, |abs| T::abs_diff_eq(self.left, self.right, abs));
        let rel = self
            .rel
            .map_or(false, |rel| T::rel_diff_eq(self.left, self.right, rel));
        let ulps = self
            .ulps
            .map_or(false, |ulps| T::ulps_diff_eq(self.left, self.right, ulps));
        abs || rel || ulps
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // `#[track_caller]` has no effect on `drop`, so the location is captured in `new` instead.
    fn drop(&mut self) {
        if self.abs.is_none() && self.rel.is_none() && self.ulps.is_none() {
            self.abs = Some(T::Tolerance::DEFAULT_ABS_TOLERANCE);
            self.rel = Some(T::Tolerance::DEFAULT_REL_TOLERANCE);
        }

        let equal = self.equal();
        let failed = match self.kind {
            AssertionKind::Eq => !equal,
            AssertionKind::Ne => equal,
        };
        if failed {
            assertion_failed(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

fn assertion_failed(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    msg: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    // The panic location points into `drop`, so the assertion's location is part of the message.
    match msg {
        Some(msg) => panic!(
            "assertion `left {op} right` failed at {location}: {msg}\n  left: {left:?}\n right: {right:?}"
        ),
        None => panic!(
            "assertion `left {op} right` failed at {location}\n  left: {left:?}\n right: {right:?}"
        ),
    }
}

#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal (according to [`ApproxEq`]).
///
/// Works like [`assert_eq!`], but returns an [`Asserter`] that allows choosing the comparison and
/// its tolerance.
///
/// # Examples
///
/// ```
/// # use vecn::*;
/// let v = vec3(1.0, 2.0, 2.0).normalize();
/// assert_approx_eq!(v.length(), 1.0);
/// assert_approx_eq!(v, vec3(0.3333, 0.6667, 0.6667)).abs(1e-4);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// assert_approx_eq!(1.0, 1.0 + f64::EPSILON).ulps(1);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two expressions are *not* approximately equal (according to [`ApproxEq`]).
///
/// Works like [`assert_ne!`], but returns an [`Asserter`] that allows choosing the comparison and
/// its tolerance.
///
/// # Examples
///
/// ```
/// # use vecn::*;
/// assert_approx_ne!(vec2(1.0, 0.0), vec2(0.0, 1.0));
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// assert_approx_ne!(1.0, 1.0 + 2.0 * f64::EPSILON).ulps(0);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

#[cfg(test)]
mod tests {
    use half::f16;
    use num_complex::Complex64;

    use crate::{vec2, vec3};

    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn fail_eq() {
        assert_approx_eq!(vec2(1.0, 2.0), vec2(1.0, 2.1));
    }

    #[test]
    #[should_panic(expected = "components differ")]
    fn message() {
        assert_approx_eq!(1.0, 2.0, "components {}", "differ");
    }

    #[test]
    #[should_panic(expected = "still equal")]
    fn message_ne() {
        assert_approx_ne!(1.0, 1.0, "still {}", "equal");
    }

    #[test]
    fn tolerances() {
        assert_approx_eq!(1.0, 1.001).rel(0.01);
        assert_approx_eq!(1.0, -1.0).rel(2.0);
        assert_approx_eq!(0.0, 0.00001).rel(1.0);
        assert_approx_eq!(1.0, -1.0).abs(2.0);
        assert_approx_ne!(1.0, -1.0).abs(1.0);
        assert_approx_eq!(1.0, 1.0 + f32::EPSILON).ulps(1);
        assert_approx_ne!(1.0, 1.0 + f32::EPSILON).ulps(0);
        assert_approx_eq!(0.0, -0.0).ulps(0);
    }

    #[test]
    fn non_finite() {
        assert_approx_ne!(f64::NAN, f64::NAN).abs(1.0);
        assert_approx_ne!(f64::NAN, f64::NAN).rel(1.0);
        assert_approx_ne!(f64::NAN, f64::NAN).ulps(100);
        assert_approx_ne!(f32::NAN, 0.0).abs(1.0);

        assert_approx_eq!(f32::INFINITY, f32::INFINITY).abs(0.0);
        assert_approx_eq!(f64::INFINITY, f64::INFINITY).rel(0.0);
        assert_approx_ne!(f64::INFINITY, f64::NEG_INFINITY).abs(1e300);
        assert_approx_ne!(f64::INFINITY, f64::MAX).abs(1e300);
        assert_approx_eq!(f64::MAX, f64::INFINITY).ulps(1);
    }

    #[test]
    fn vectors() {
        let third = 1.0 / 3.0;
        assert_approx_eq!(vec3(third, third, third) * 3.0, vec3(1.0, 1.0, 1.0));
        assert_approx_eq!([0.1 + 0.2, 0.3], [0.3, 0.1 + 0.2]);
        assert_approx_ne!(vec2(1.0f32, 0.0), vec2(1.0, 0.01));
    }

    #[test]
    fn other_scalars() {
        let h = f16::from_f32(1.0);
        assert_approx_eq!(h, h + f16::EPSILON);
        assert_approx_ne!(h, f16::from_f32(1.01)).abs(f16::from_f32(0.001));

        let c = Complex64::new(0.1 + 0.2, -1.0);
        assert_approx_eq!(c, Complex64::new(0.3, -1.0));
        assert_approx_ne!(c, Complex64::new(0.3, 1.0));
    }
}
