//! Implementations of `std::ops`, and component-wise comparisons.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Not, Sub, SubAssign,
};

use half::f16;
use num_complex::Complex64;
use rust_decimal::Decimal;

use crate::approx::ApproxEq;

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// Allows comparing vectors of different element types, as long as the elements can be compared.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.0.eq(other)
    }
}

impl<T, const N: usize> ApproxEq for Vector<T, N>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, ulps_tolerance)
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise logical negation.
impl<T, const N: usize> Not for Vector<T, N>
where
    T: Not,
{
    type Output = Vector<T::Output, N>;

    fn not(self) -> Self::Output {
        self.map(T::not)
    }
}

/// Generates the element-wise `Vector ∘ Vector` operator, the `Vector ∘ T` operator applying the
/// scalar to every element, and both of their assigning forms.
macro_rules! binop {
    ($(#[$doc:meta])* $op:ident::$method:ident, $assign:ident::$assign_method:ident, $sym:tt) => {
        $(#[$doc])*
        impl<T, const N: usize> $op<Vector<T, N>> for Vector<T, N>
        where
            T: $op,
        {
            type Output = Vector<T::Output, N>;

            fn $method(self, rhs: Vector<T, N>) -> Self::Output {
                self.zip(rhs).map(|(l, r)| l $sym r)
            }
        }

        $(#[$doc])*
        impl<T, const N: usize> $op<T> for Vector<T, N>
        where
            T: $op + Copy,
        {
            type Output = Vector<T::Output, N>;

            fn $method(self, rhs: T) -> Self::Output {
                self.map(|elem| elem $sym rhs)
            }
        }

        $(#[$doc])*
        impl<T, const N: usize> $assign<Vector<T, N>> for Vector<T, N>
        where
            T: $assign,
        {
            fn $assign_method(&mut self, rhs: Vector<T, N>) {
                self.iter_mut()
                    .zip(rhs.into_array())
                    .for_each(|(lhs, rhs)| $assign::$assign_method(lhs, rhs));
            }
        }

        $(#[$doc])*
        impl<T, const N: usize> $assign<T> for Vector<T, N>
        where
            T: $assign + Copy,
        {
            fn $assign_method(&mut self, rhs: T) {
                self.iter_mut().for_each(|lhs| $assign::$assign_method(lhs, rhs));
            }
        }
    };
}

binop!(
    /// Element-wise addition.
    Add::add, AddAssign::add_assign, +
);
binop!(
    /// Element-wise subtraction.
    Sub::sub, SubAssign::sub_assign, -
);
binop!(
    /// Element-wise multiplication, or scaling by a scalar.
    Mul::mul, MulAssign::mul_assign, *
);
binop!(
    /// Element-wise division, or division by a scalar.
    Div::div, DivAssign::div_assign, /
);

// NB: the vector-scalar impls rule out a more generic `Add<Vector<U, N>> for Vector<T, N>` impl
// where `T: Add<U>`. Mixed element types go through `Vector::cast` instead.

/// Generates element-wise bitwise operators. Those have no vector-scalar form.
macro_rules! bitop {
    ($(#[$doc:meta])* $op:ident::$method:ident, $assign:ident::$assign_method:ident, $sym:tt) => {
        $(#[$doc])*
        impl<T, const N: usize> $op<Vector<T, N>> for Vector<T, N>
        where
            T: $op,
        {
            type Output = Vector<T::Output, N>;

            fn $method(self, rhs: Vector<T, N>) -> Self::Output {
                self.zip(rhs).map(|(l, r)| l $sym r)
            }
        }

        $(#[$doc])*
        impl<T, const N: usize> $assign<Vector<T, N>> for Vector<T, N>
        where
            T: $assign,
        {
            fn $assign_method(&mut self, rhs: Vector<T, N>) {
                self.iter_mut()
                    .zip(rhs.into_array())
                    .for_each(|(lhs, rhs)| $assign::$assign_method(lhs, rhs));
            }
        }
    };
}

bitop!(
    /// Element-wise bitwise (or logical) and.
    BitAnd::bitand, BitAndAssign::bitand_assign, &
);
bitop!(
    /// Element-wise bitwise (or logical) or.
    BitOr::bitor, BitOrAssign::bitor_assign, |
);
bitop!(
    /// Element-wise bitwise (or logical) exclusive or.
    BitXor::bitxor, BitXorAssign::bitxor_assign, ^
);

/// `T ∘ Vector` operators. Coherence requires one impl per concrete scalar type.
macro_rules! scalar_lhs {
    ($($t:ty),+) => {
        $(
            impl<const N: usize> Add<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                fn add(self, rhs: Vector<$t, N>) -> Self::Output {
                    rhs.map(|elem| self + elem)
                }
            }

            impl<const N: usize> Sub<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                fn sub(self, rhs: Vector<$t, N>) -> Self::Output {
                    rhs.map(|elem| self - elem)
                }
            }

            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                fn mul(self, rhs: Vector<$t, N>) -> Self::Output {
                    rhs.map(|elem| self * elem)
                }
            }

            impl<const N: usize> Div<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                fn div(self, rhs: Vector<$t, N>) -> Self::Output {
                    rhs.map(|elem| self / elem)
                }
            }
        )+
    };
}
scalar_lhs!(f32, f64, i32, u32, i64, f16, Decimal, Complex64);

/// Component-wise comparisons.
///
/// Each method compares the elements of two vectors (or the elements of a vector with a scalar)
/// one by one and returns a vector holding the result of every comparison. Use
/// [`Vector::all`]/[`Vector::any`] to reduce the result to a single [`bool`].
///
/// Comparisons with the scalar on the left-hand side are written by splatting the scalar first:
/// `s < v` becomes `Vector::splat(s).cmp_lt(v)`.
impl<T, const N: usize> Vector<T, N> {
    /// Returns a vector that is `true` wherever `self` and `rhs` are equal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// let a = vec3(1, 2, 3);
    /// assert_eq!(a.cmp_eq(vec3(1, 0, 3)), vec3(true, false, true));
    /// ```
    pub fn cmp_eq(self, rhs: Self) -> Vector<bool, N>
    where
        T: PartialEq,
    {
        self.zip(rhs).map(|(l, r)| l == r)
    }

    /// Returns a vector that is `true` wherever `self` and `rhs` differ.
    pub fn cmp_ne(self, rhs: Self) -> Vector<bool, N>
    where
        T: PartialEq,
    {
        self.zip(rhs).map(|(l, r)| l != r)
    }

    /// Returns a vector that is `true` wherever `self` is less than `rhs`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// let v = vec4(-1.0, 0.0, 1.0, f64::NAN);
    /// assert_eq!(v.cmp_lt(Vec4d::ZERO), vec4(true, false, false, false));
    /// assert_eq!(Vector::<f64, 4>::splat(0.0).cmp_lt(v), vec4(false, false, true, false));
    /// ```
    pub fn cmp_lt(self, rhs: Self) -> Vector<bool, N>
    where
        T: PartialOrd,
    {
        self.zip(rhs).map(|(l, r)| l < r)
    }

    /// Returns a vector that is `true` wherever `self` is less than or equal to `rhs`.
    pub fn cmp_le(self, rhs: Self) -> Vector<bool, N>
    where
        T: PartialOrd,
    {
        self.zip(rhs).map(|(l, r)| l <= r)
    }

    /// Returns a vector that is `true` wherever `self` is greater than `rhs`.
    pub fn cmp_gt(self, rhs: Self) -> Vector<bool, N>
    where
        T: PartialOrd,
    {
        self.zip(rhs).map(|(l, r)| l > r)
    }

    /// Returns a vector that is `true` wherever `self` is greater than or equal to `rhs`.
    pub fn cmp_ge(self, rhs: Self) -> Vector<bool, N>
    where
        T: PartialOrd,
    {
        self.zip(rhs).map(|(l, r)| l >= r)
    }

    /// Compares each element with `rhs` for equality.
    pub fn cmp_eq_scalar(self, rhs: T) -> Vector<bool, N>
    where
        T: PartialEq,
    {
        self.map(|elem| elem == rhs)
    }

    /// Compares each element with `rhs` for inequality.
    pub fn cmp_ne_scalar(self, rhs: T) -> Vector<bool, N>
    where
        T: PartialEq,
    {
        self.map(|elem| elem != rhs)
    }

    /// Returns a vector that is `true` wherever an element is less than `rhs`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// assert_eq!(vec3(1u32, 5, 9).cmp_lt_scalar(5), vec3(true, false, false));
    /// ```
    pub fn cmp_lt_scalar(self, rhs: T) -> Vector<bool, N>
    where
        T: PartialOrd,
    {
        self.map(|elem| elem < rhs)
    }

    /// Returns a vector that is `true` wherever an element is less than or equal to `rhs`.
    pub fn cmp_le_scalar(self, rhs: T) -> Vector<bool, N>
    where
        T: PartialOrd,
    {
        self.map(|elem| elem <= rhs)
    }

    /// Returns a vector that is `true` wherever an element is greater than `rhs`.
    pub fn cmp_gt_scalar(self, rhs: T) -> Vector<bool, N>
    where
        T: PartialOrd,
    {
        self.map(|elem| elem > rhs)
    }

    /// Returns a vector that is `true` wherever an element is greater than or equal to `rhs`.
    pub fn cmp_ge_scalar(self, rhs: T) -> Vector<bool, N>
    where
        T: PartialOrd,
    {
        self.map(|elem| elem >= rhs)
    }
}

impl<const N: usize> Vector<bool, N> {
    /// Returns `true` if any element is `true`.
    ///
    /// Returns `false` for empty vectors.
    pub fn any(self) -> bool {
        self.into_array().into_iter().any(|b| b)
    }

    /// Returns `true` if all elements are `true`.
    ///
    /// Returns `true` for empty vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// let inside = vec2(0.5, 0.25).cmp_ge_scalar(0.0) & vec2(0.5, 0.25).cmp_le_scalar(1.0);
    /// assert!(inside.all());
    /// ```
    pub fn all(self) -> bool {
        self.into_array().into_iter().all(|b| b)
    }
}

#[cfg(test)]
mod tests {
    use crate::{test::random_vec, vec2, vec3, vec4, Vec2c, Vec3f, Vec3i, Vec3m, Vec4b};

    use super::*;

    #[test]
    fn vector_vector() {
        let a = vec3(1, 2, 3);
        let b = vec3(10, 20, 30);
        assert_eq!(a + b, vec3(11, 22, 33));
        assert_eq!(b - a, vec3(9, 18, 27));
        assert_eq!(a * b, vec3(10, 40, 90));
        assert_eq!(b / a, vec3(10, 10, 10));
        assert_eq!(-a, vec3(-1, -2, -3));

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
        c *= a;
        c /= a;
        assert_eq!(c, b);
    }

    #[test]
    fn vector_scalar() {
        let v = vec2(6.0, -3.0);
        assert_eq!(v + 1.0, vec2(7.0, -2.0));
        assert_eq!(v - 1.0, vec2(5.0, -4.0));
        assert_eq!(v * 2.0, vec2(12.0, -6.0));
        assert_eq!(v / 3.0, vec2(2.0, -1.0));

        assert_eq!(1.0 + v, vec2(7.0, -2.0));
        assert_eq!(1.0 - v, vec2(-5.0, 4.0));
        assert_eq!(2.0 * v, vec2(12.0, -6.0));
        assert_eq!(12.0 / v, vec2(2.0, -4.0));

        let mut u = vec3(1u32, 2, 3);
        u += 1;
        u *= 2;
        u -= 2;
        u /= 2;
        assert_eq!(u, vec3(1, 2, 3));
        assert_eq!(10 - u, vec3(9, 8, 7));
    }

    #[test]
    fn other_scalar_kinds() {
        let m = Vec3m::ONES * Decimal::TEN;
        assert_eq!(Decimal::ONE + m, [Decimal::from(11); 3]);

        let i = Complex64::new(0.0, 1.0);
        let c: Vec2c = vec2(i, Complex64::new(1.0, 0.0));
        assert_eq!(i * c, vec2(Complex64::new(-1.0, 0.0), i));

        let h = vec2(f16::from_f32(1.5), f16::from_f32(-2.0));
        assert_eq!(f16::from_f32(2.0) * h, vec2(f16::from_f32(3.0), f16::from_f32(-4.0)));
        assert_eq!(-h, vec2(f16::from_f32(-1.5), f16::from_f32(2.0)));
    }

    #[test]
    fn integer_arithmetic_is_exact() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for _ in 0..100 {
            let a: Vec3i = random_vec(&mut rng, |rng| rng.i32(-1000..1000));
            let b: Vec3i = random_vec(&mut rng, |rng| rng.i32(-1000..1000));
            let c: Vec3i = random_vec(&mut rng, |rng| rng.i32(-1000..1000));
            assert_eq!(a + b, b + a);
            assert_eq!((a + b) + c, a + (b + c));
            assert_eq!(a - a, Vec3i::ZERO);
        }
    }

    #[test]
    fn float_arithmetic_is_approximate() {
        let mut rng = fastrand::Rng::with_seed(42);
        for _ in 0..100 {
            let a: Vec3f = random_vec(&mut rng, |rng| rng.f32() * 200.0 - 100.0);
            let b: Vec3f = random_vec(&mut rng, |rng| rng.f32() * 200.0 - 100.0);
            let c: Vec3f = random_vec(&mut rng, |rng| rng.f32() * 200.0 - 100.0);
            assert_eq!(a + b, b + a);
            crate::assert_approx_eq!((a + b) + c, a + (b + c)).abs(1e-4);
        }
    }

    #[test]
    fn boolean_ops() {
        let a = vec4(true, true, false, false);
        let b = vec4(true, false, true, false);
        assert_eq!(a & b, vec4(true, false, false, false));
        assert_eq!(a | b, vec4(true, true, true, false));
        assert_eq!(a ^ b, vec4(false, true, true, false));
        assert_eq!(!a, vec4(false, false, true, true));

        let mut c = a;
        c ^= b;
        c |= Vec4b::ZERO;
        c &= Vec4b::ONES;
        assert_eq!(c, a ^ b);

        assert!(a.any());
        assert!(!a.all());
        assert!(Vec4b::ONES.all());
        assert!(!Vec4b::ZERO.any());
    }

    #[test]
    fn comparisons() {
        let a = vec3(1, 5, 9);
        let b = vec3(5, 5, 5);
        assert_eq!(a.cmp_eq(b), vec3(false, true, false));
        assert_eq!(a.cmp_ne(b), vec3(true, false, true));
        assert_eq!(a.cmp_lt(b), vec3(true, false, false));
        assert_eq!(a.cmp_le(b), vec3(true, true, false));
        assert_eq!(a.cmp_gt(b), vec3(false, false, true));
        assert_eq!(a.cmp_ge(b), vec3(false, true, true));

        assert_eq!(a.cmp_eq_scalar(5), a.cmp_eq(b));
        assert_eq!(a.cmp_ne_scalar(5), a.cmp_ne(b));
        assert_eq!(a.cmp_lt_scalar(5), a.cmp_lt(b));
        assert_eq!(a.cmp_le_scalar(5), a.cmp_le(b));
        assert_eq!(a.cmp_gt_scalar(5), a.cmp_gt(b));
        assert_eq!(a.cmp_ge_scalar(5), a.cmp_ge(b));

        // `5 < a`
        assert_eq!(Vector::<i32, 3>::splat(5).cmp_lt(a), vec3(false, false, true));

        let c = vec2(Complex64::new(1.0, 2.0), Complex64::new(0.0, 0.0));
        assert_eq!(c.cmp_eq_scalar(Complex64::new(1.0, 2.0)), vec2(true, false));
    }

    #[test]
    fn equality() {
        assert_eq!(vec2(1.0, 2.0), [1.0, 2.0]);
        assert_eq!([1.0, 2.0], vec2(1.0, 2.0));
        assert!(vec2(1.0, 2.0) == [1.0, 2.0][..]);
        assert_ne!(vec2(1.0, 2.0), vec2(1.0, 2.5));
        assert_ne!(vec2(f32::NAN, 0.0), vec2(f32::NAN, 0.0));
    }
}
