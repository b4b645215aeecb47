use half::f16;
use num_complex::Complex64;

use super::{ApproxEq, DefaultTolerances};

macro_rules! float {
    ($($t:ident),+) => {
        $(
            impl DefaultTolerances for $t {
                const DEFAULT_ABS_TOLERANCE: Self = $t::EPSILON;
                const DEFAULT_REL_TOLERANCE: Self = $t::EPSILON;
                const DEFAULT_ULPS_TOLERANCE: u32 = 4;
            }

            impl ApproxEq for $t {
                type Tolerance = Self;

                fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self) -> bool {
                    if !self.is_finite() || !other.is_finite() {
                        // Infinities only equal themselves, NaN equals nothing.
                        return self == other;
                    }

                    (self - other).abs() <= abs_tolerance
                }

                fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self) -> bool {
                    if !self.is_finite() || !other.is_finite() {
                        return self == other;
                    }

                    let largest = self.abs().max(other.abs());
                    (self - other).abs() <= largest * rel_tolerance
                }

                fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
                    if self.is_sign_negative() != other.is_sign_negative() {
                        return self == other; // `-0.0 == +0.0`
                    }
                    if self.is_nan() || other.is_nan() {
                        return false;
                    }

                    let diff = self.to_bits().abs_diff(other.to_bits());
                    diff <= ulps_tolerance.into()
                }
            }
        )+
    };
}
float!(f32, f64);

impl DefaultTolerances for f16 {
    const DEFAULT_ABS_TOLERANCE: Self = f16::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = f16::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

// `f16` comparisons are done in `f32`, which represents every `f16` exactly. ULPs are counted on
// the `f16` bit patterns.
impl ApproxEq for f16 {
    type Tolerance = Self;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self) -> bool {
        self.to_f32()
            .abs_diff_eq(&other.to_f32(), abs_tolerance.to_f32())
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self) -> bool {
        self.to_f32()
            .rel_diff_eq(&other.to_f32(), rel_tolerance.to_f32())
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        if self.is_sign_negative() != other.is_sign_negative() {
            return self == other;
        }
        if self.is_nan() || other.is_nan() {
            return false;
        }

        let diff = self.to_bits().abs_diff(other.to_bits());
        u32::from(diff) <= ulps_tolerance
    }
}

impl ApproxEq for Complex64 {
    type Tolerance = f64;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: f64) -> bool {
        self.re.abs_diff_eq(&other.re, abs_tolerance)
            && self.im.abs_diff_eq(&other.im, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: f64) -> bool {
        self.re.rel_diff_eq(&other.re, rel_tolerance)
            && self.im.rel_diff_eq(&other.im, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.re.ulps_diff_eq(&other.re, ulps_tolerance)
            && self.im.ulps_diff_eq(&other.im, ulps_tolerance)
    }
}

impl<'a, T: ApproxEq<U> + ?Sized, U: ?Sized> ApproxEq<U> for &'a T {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &U, abs_tolerance: Self::Tolerance) -> bool {
        T::abs_diff_eq(self, other, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &U, rel_tolerance: Self::Tolerance) -> bool {
        T::rel_diff_eq(self, other, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &U, ulps_tolerance: u32) -> bool {
        T::ulps_diff_eq(self, other, ulps_tolerance)
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U], abs_tolerance: Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| T::abs_diff_eq(a, b, abs_tolerance))
    }

    fn rel_diff_eq(&self, other: &[U], rel_tolerance: Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| T::rel_diff_eq(a, b, rel_tolerance))
    }

    fn ulps_diff_eq(&self, other: &[U], ulps_tolerance: u32) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| T::ulps_diff_eq(a, b, ulps_tolerance))
    }
}

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U; N], abs_tolerance: Self::Tolerance) -> bool {
        self[..].abs_diff_eq(&other[..], abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &[U; N], rel_tolerance: Self::Tolerance) -> bool {
        self[..].rel_diff_eq(&other[..], rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &[U; N], ulps_tolerance: u32) -> bool {
        self[..].ulps_diff_eq(&other[..], ulps_tolerance)
    }
}
