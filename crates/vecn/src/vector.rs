use std::{
    array, fmt,
    ops::{Div, Sub},
    slice,
};

use half::f16;
use num_complex::Complex64;
use rust_decimal::Decimal;

use crate::{
    error::OutOfRange,
    traits::{Bounded, Magnitude, MinMax, Number, One, Real, Zero},
};

mod ops;
mod view;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;

macro_rules! aliases {
    ($($elem:literal: $t:ty => $v2:ident, $v3:ident, $v4:ident;)+) => {
        $(
            #[doc = concat!("A 2-dimensional vector with ", $elem, " elements.")]
            pub type $v2 = Vec2<$t>;
            #[doc = concat!("A 3-dimensional vector with ", $elem, " elements.")]
            pub type $v3 = Vec3<$t>;
            #[doc = concat!("A 4-dimensional vector with ", $elem, " elements.")]
            pub type $v4 = Vec4<$t>;
        )+
    };
}
aliases! {
    "[`f32`]": f32 => Vec2f, Vec3f, Vec4f;
    "[`f64`]": f64 => Vec2d, Vec3d, Vec4d;
    "[`i32`]": i32 => Vec2i, Vec3i, Vec4i;
    "[`u32`]": u32 => Vec2u, Vec3u, Vec4u;
    "[`i64`]": i64 => Vec2l, Vec3l, Vec4l;
    "[`bool`]": bool => Vec2b, Vec3b, Vec4b;
    "[`f16`]": f16 => Vec2h, Vec3h, Vec4h;
    "[`Decimal`]": Decimal => Vec2m, Vec3m, Vec4m;
    "[`Complex64`]": Complex64 => Vec2c, Vec3c, Vec4c;
}

/// An `N`-element vector storing elements of type `T`.
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector`]:
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - The [`Default`] implementation of [`Vector`] initializes each element with its default value.
/// - [`Vector::ZERO`] and [`Vector::ONES`] are vectors containing all-zeroes and all-ones.
/// - `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are unit vectors pointing in the given
///   direction.
/// - [`Vector::extend`], [`Vector::truncate`] and [`Vector::resize`] create vectors of a different
///   size, [`Vector::cast`] creates a vector of a different element type.
///
/// # Element Access
///
/// - Elements can be accessed as fields `x`, `y`, `z`, or `w`, or by their aliases `r`, `g`, `b`,
///   and `a`.
/// - Multiple elements can be read at once through swizzle methods like `v.zyx()` or `v.rgba()`.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays, and panic on
///   out-of-range indices. [`Vector::component`] and [`Vector::set_component`] return an
///   [`OutOfRange`] error instead.
/// - The [`AsRef`] and [`AsMut`] impls can be used to access the underlying elements as a slice or
///   array.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation when
///   the element type `T` also allows this.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0 (or `false`).
    ///
    /// This uses [`T::ZERO`][Zero::ZERO] as the value for all elements.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: One, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 1 (or `true`).
    pub const ONES: Self = Self([T::ONE; N]);
}

impl<T: Bounded, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to the smallest finite value of `T`.
    pub const MIN: Self = Self([T::MIN; N]);
    /// A vector with each element initialized to the largest finite value of `T`.
    pub const MAX: Self = Self([T::MAX; N]);
}

macro_rules! float_consts {
    ($($t:ident: $subnormal:literal),+) => {
        $(
            impl<const N: usize> Vector<$t, N> {
                #[doc = concat!("A vector with each element set to [`", stringify!($t), "::EPSILON`].")]
                ///
                /// This is the *machine epsilon* (the difference between 1.0 and the next larger
                /// representable number), not the smallest positive value. See
                /// [`Vector::SMALLEST_SUBNORMAL`] for the latter.
                pub const EPSILON: Self = Self([$t::EPSILON; N]);
                /// A vector with each element set to the smallest positive (subnormal) value.
                pub const SMALLEST_SUBNORMAL: Self = Self([$subnormal; N]);
                #[doc = concat!("A vector with each element set to [`", stringify!($t), "::NAN`].")]
                pub const NAN: Self = Self([$t::NAN; N]);
                #[doc = concat!("A vector with each element set to [`", stringify!($t), "::INFINITY`].")]
                pub const INFINITY: Self = Self([$t::INFINITY; N]);
                #[doc = concat!("A vector with each element set to [`", stringify!($t), "::NEG_INFINITY`].")]
                pub const NEG_INFINITY: Self = Self([$t::NEG_INFINITY; N]);
            }
        )+
    };
}
float_consts!(f32: 1e-45, f64: 5e-324);

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// let a = vec3(1, 2, 3);
    /// let b = vec3("1", "2", "3");
    /// let v = a.zip(b);
    /// assert_eq!(v, vec3((1, "1"), (2, "2"), (3, "3")));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut left = self.0.into_iter();
        let mut right = other.0.into_iter();
        Vector::from_fn(|_| match (left.next(), right.next()) {
            (Some(l), Some(r)) => (l, r),
            _ => unreachable!("both arrays have `N` elements"),
        })
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// assert_eq!(vec3(1, 2, 3).as_slice(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// There is an equivalent [`From`] impl that can also be used, but this method is often shorter
    /// and requires no type annotation.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns an iterator over references to the elements, in component order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Returns an iterator over mutable references to the elements, in component order.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    /// Returns the number of components (`N`).
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` if the vector has no components.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns a reference to the element at `index`, or [`None`] if `index` is out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if `index` is out of
    /// range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns an [`OutOfRange`] error if `index` is not less than `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// let v = vec3(7, 8, 9);
    /// assert_eq!(v.component(2), Ok(9));
    /// assert_eq!(v.component(3), Err(OutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn component(&self, index: usize) -> Result<T, OutOfRange>
    where
        T: Copy,
    {
        self.get(index).copied().ok_or(OutOfRange { index, len: N })
    }

    /// Replaces the element at `index` with `value`.
    ///
    /// # Errors
    ///
    /// Returns an [`OutOfRange`] error if `index` is not less than `N`. The vector is left
    /// unchanged in that case.
    pub fn set_component(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        let elem = self.get_mut(index).ok_or(OutOfRange { index, len: N })?;
        *elem = value;
        Ok(())
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Geometrically, the dot product provides information about the relative
    /// angle of the two vectors:
    /// - If the dot product is greater than zero, the angle between the vectors
    ///   is less than 90°.
    /// - If the dot product is equal to zero, their angle is exactly 90°.
    /// - If the dot product is negative, the angle is greater than 90°.
    ///
    /// Complex elements are multiplied without conjugation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.into_array()
            .into_iter()
            .zip(other.into_array())
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the sum of all elements.
    pub fn sum(self) -> T
    where
        T: Number,
    {
        self.0.into_iter().fold(T::ZERO, |acc, elem| acc + elem)
    }

    /// Returns the smallest element.
    ///
    /// # Panics
    ///
    /// Panics if `N` is 0.
    pub fn min_element(self) -> T
    where
        T: MinMax + Copy,
    {
        let first = self[0];
        self.0.into_iter().fold(first, MinMax::min)
    }

    /// Returns the largest element.
    ///
    /// # Panics
    ///
    /// Panics if `N` is 0.
    pub fn max_element(self) -> T
    where
        T: MinMax + Copy,
    {
        let first = self[0];
        self.0.into_iter().fold(first, MinMax::max)
    }

    /// Returns the squared Euclidean length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// assert_eq!(vec2(4, 0).length2(), 16.0);
    /// assert_eq!(vec2(3.0, -4.0).length2(), 25.0);
    /// ```
    ///
    /// For [`Decimal`] elements, the result saturates at [`Decimal::MAX`].
    pub fn length2(&self) -> T::Norm
    where
        T: Magnitude,
    {
        T::sum_of_squares(&self.0)
    }

    /// Returns the Euclidean length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// let z = Vec3f::Z;
    /// assert_eq!(z.length(), 1.0);
    /// assert_eq!(vec3(2.0, 3.0, 6.0).length(), 7.0);
    /// ```
    ///
    /// For [`Decimal`] elements, this does not overflow as long as the length itself is
    /// representable, even when [`Vector::length2`] would saturate.
    pub fn length(&self) -> T::Norm
    where
        T: Magnitude,
    {
        T::euclidean_norm(&self.0)
    }

    /// Returns the Euclidean norm (2-norm) of this [`Vector`].
    ///
    /// This is the same as [`Vector::length`].
    #[inline]
    pub fn norm(&self) -> T::Norm
    where
        T: Magnitude,
    {
        self.length()
    }

    /// Returns the 1-norm of this [`Vector`]: the sum of the absolute values of its elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// assert_eq!(vec3(1.0, -2.0, 3.0).norm1(), 6.0);
    /// ```
    pub fn norm1(&self) -> T::Norm
    where
        T: Magnitude,
    {
        self.0
            .iter()
            .fold(<T::Norm as Zero>::ZERO, |acc, &elem| acc + elem.magnitude())
    }

    /// Returns the maximum norm of this [`Vector`]: the largest absolute value of its elements.
    ///
    /// NaN elements are not skipped: if any element is NaN, so is the result.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// assert_eq!(vec3(1, -5, 3).norm_max(), 5.0);
    /// assert!(vec2(f64::NAN, 1.0).norm_max().is_nan());
    /// ```
    pub fn norm_max(&self) -> T::Norm
    where
        T: Magnitude,
    {
        self.0
            .iter()
            .fold(<T::Norm as Zero>::ZERO, |acc, &elem| {
                let m = elem.magnitude();
                if m.is_nan() || m > acc {
                    m
                } else {
                    acc
                }
            })
    }

    /// Returns the `p`-norm of this [`Vector`], computed in [`f64`].
    ///
    /// `p = 1` and `p = 2` give the same results as [`Vector::norm1`] and [`Vector::length`]
    /// (up to rounding).
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// let v = vec2(3.0, -4.0);
    /// assert!((v.norm_p(2.0) - 5.0).abs() < 1e-12);
    /// assert!((v.norm_p(1.0) - 7.0).abs() < 1e-12);
    /// ```
    pub fn norm_p(&self, p: f64) -> f64
    where
        T: Magnitude,
    {
        self.0
            .iter()
            .map(|&elem| elem.magnitude().as_f64().powf(p))
            .sum::<f64>()
            .powf(p.recip())
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// The result is undefined (typically non-finite) if the vector has zero length. Use
    /// [`Vector::normalize_safe`] if that can happen.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Magnitude + Div<T::Norm, Output = T>,
    {
        let length = self.length();
        self.map(|elem| elem / length)
    }

    /// Like [`Vector::normalize`], but returns [`Vector::ZERO`] if `self` is exactly zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// assert_eq!(Vec3f::ZERO.normalize_safe(), Vec3f::ZERO);
    /// assert_eq!(vec2(0.0, -3.0).normalize_safe(), vec2(0.0, -1.0));
    /// ```
    pub fn normalize_safe(self) -> Self
    where
        T: Magnitude + Zero + PartialEq + Div<T::Norm, Output = T>,
    {
        if self == Self::ZERO {
            log::trace!("normalize_safe: zero vector stays zero");
            return Self::ZERO;
        }
        self.normalize()
    }

    /// Returns the Euclidean distance between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// assert_eq!(vec2(1, 1).distance(vec2(4, 5)), 5.0);
    /// ```
    pub fn distance(self, other: Self) -> T::Norm
    where
        T: Magnitude + Sub<Output = T>,
    {
        (self - other).length()
    }

    /// Returns the squared Euclidean distance between `self` and `other`.
    pub fn distance2(self, other: Self) -> T::Norm
    where
        T: Magnitude + Sub<Output = T>,
    {
        (self - other).length2()
    }

    /// Element-wise minimum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.min(b), b.min(a));
    /// assert_eq!(a.min(b), vec3(-1.0, f32::NEG_INFINITY, 0.0));
    /// ```
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.max(b), b.max(a));
    /// assert_eq!(a.max(b), vec3(3.0, 2.0, 0.0));
    /// ```
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Element-wise range clamp of the elements in `self` between `min` and `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// let v = vec3(-1, 5, 10);
    /// assert_eq!(v.clamp(Vector::splat(0), Vector::splat(6)), vec3(0, 5, 6));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].clamp(min[i], max[i]))
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// let v = vec3(-1.0, 2.0, 3.5).truncate();
    /// assert_eq!(v, vec2(-1.0, 2.0));
    /// ```
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, ..] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(99.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 99.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// let v = vec4(1, 2, 3, 4).truncate();
    /// assert_eq!(v, vec3(1, 2, 3));
    /// ```
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, ..] = self.into_array();
        [x, y, z].into()
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, test::init_logger};

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::X[2], 0.0);
        assert_eq!(Vec3f::X.y, 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec3f::Y.z, 0.0);
        assert_eq!(Vec4f::W.w, 1.0);
        assert_eq!(Vec4f::W.a, 1.0);

        let mut v = vec2(0, 1);
        assert_eq!(v.x, 0);
        assert_eq!(v.y, 1);
        assert_eq!(v.r, 0);
        assert_eq!(v.g, 1);

        v.r = 777;
        assert_eq!(v.x, 777);
        assert_eq!(v[0], 777);
        v[1] = 9;
        assert_eq!(v.g, 9);
        assert_eq!(v.y, 9);
    }

    #[test]
    fn checked_access() {
        let mut v = vec3(0.0, 2.0, 5.5);
        assert_eq!(v.component(0), Ok(0.0));
        assert_eq!(v.component(2), Ok(5.5));
        for index in [3, 5, usize::MAX] {
            assert_eq!(v.component(index), Err(OutOfRange { index, len: 3 }));
            assert_eq!(
                v.set_component(index, 1.0),
                Err(OutOfRange { index, len: 3 })
            );
        }
        assert_eq!(v, vec3(0.0, 2.0, 5.5));

        v.set_component(1, -8.5).unwrap();
        assert_eq!(v.y, -8.5);
        assert_eq!(v.get(1), Some(&-8.5));
        assert_eq!(v.get(3), None);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range() {
        let v = vec4(1, 2, 3, 4);
        let i = v.len();
        let _ = v[i];
    }

    #[test]
    fn constants() {
        assert_eq!(Vec3d::ZERO, [0.0; 3]);
        assert_eq!(Vec3d::ONES, [1.0; 3]);
        assert_eq!(Vec2i::MAX, [i32::MAX; 2]);
        assert_eq!(Vec4u::MIN, [0; 4]);
        assert_eq!(Vec2b::ZERO, [false, false]);
        assert_eq!(Vec3m::ONES, [Decimal::ONE; 3]);
        assert!(Vec3d::NAN.iter().all(|e| e.is_nan()));
        assert_eq!(Vec2f::NEG_INFINITY.x, f32::NEG_INFINITY);
        assert_eq!(Vec4d::EPSILON.w, f64::EPSILON);

        let tiny = Vec3d::SMALLEST_SUBNORMAL.x;
        assert!(tiny > 0.0);
        assert_eq!(tiny / 2.0, 0.0);
        assert_eq!(tiny.to_bits(), 1);
        assert_eq!(Vec2f::SMALLEST_SUBNORMAL.y.to_bits(), 1);
    }

    #[test]
    fn fmt_debug() {
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);
        assert_eq!(vec2(3u32, 4).dot(vec2(2, 1)), 10);

        assert_eq!(Vec2f::X.dot(Vec2f::X), 1.0);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
    }

    #[test]
    fn norms() {
        let v = vec3(2.0, -3.0, 6.0);
        assert_eq!(v.length(), 7.0);
        assert_eq!(v.norm(), 7.0);
        assert_eq!(v.length2(), 49.0);
        assert_eq!(v.norm1(), 11.0);
        assert_eq!(v.norm_max(), 6.0);
        assert_approx_eq!(v.norm_p(2.0), 7.0).abs(1e-12);
        assert_approx_eq!(v.norm_p(1.0), 11.0).abs(1e-12);
        assert_approx_eq!(v.norm_p(3.0), 251f64.cbrt()).abs(1e-12);

        // Every component contributes; the length is not `x*x + y*y + sqrt(z*z)`.
        assert_eq!(vec3(0, 0, 5).length(), 5.0);
        assert_eq!(vec3(3, 4, 0).length(), 5.0);

        let i = vec4(i32::MIN, 0, 0, 0);
        assert_eq!(i.norm_max(), 2147483648.0);

        let c = vec2(Complex64::new(3.0, 4.0), Complex64::new(0.0, 0.0));
        assert_eq!(c.length(), 5.0);
        assert_eq!(c.norm1(), 5.0);

        let m = vec2(Decimal::from(-3), Decimal::from(4));
        assert_eq!(m.norm1(), Decimal::from(7));
        assert_eq!(m.norm_max(), Decimal::from(4));
    }

    #[test]
    fn norm_max_propagates_nan() {
        assert!(vec2(f64::NAN, 1.0).norm_max().is_nan());
        assert!(vec3(1.0f32, -7.0, f32::NAN).norm_max().is_nan());
        assert!(vec2(f16::NAN, f16::ONE).norm_max().is_nan());
        assert_eq!(vec2(f64::NEG_INFINITY, 1.0).norm_max(), f64::INFINITY);
    }

    #[test]
    fn large_decimal_lengths() {
        let big = Decimal::from(1_000_000_000_000_000i64);
        let v = vec3(big, Decimal::ZERO, Decimal::ZERO);
        assert!((v.length() - big).abs() <= Decimal::ONE);
        assert_eq!(v.length2(), Decimal::MAX);

        let w = vec3(big * Decimal::from(2), big * Decimal::from(-3), big * Decimal::from(6));
        assert!((w.length() - big * Decimal::from(7)).abs() <= Decimal::ONE);
        assert!((w.distance(Vec3m::ZERO) - big * Decimal::from(7)).abs() <= Decimal::ONE);

        let n = v.normalize();
        assert!((n.x - Decimal::ONE).abs() < Decimal::new(1, 20));
        assert_eq!(n.y, Decimal::ZERO);

        let small = vec2(Decimal::from(3), Decimal::from(-4));
        assert!((small.length() - Decimal::from(5)).abs() < Decimal::new(1, 20));
    }

    #[test]
    fn normalize() {
        init_logger();

        let n = vec3(1.0, 2.0, -2.0).normalize();
        assert_approx_eq!(n.length(), 1.0);
        assert_approx_eq!(n, vec3(1.0 / 3.0, 2.0 / 3.0, -2.0 / 3.0));

        assert_eq!(Vec4d::ZERO.normalize_safe(), Vec4d::ZERO);
        assert!(Vec4d::ZERO.normalize().x.is_nan());
        assert_approx_eq!(vec2(0.0f32, -0.5).normalize_safe(), vec2(0.0, -1.0));

        let c = vec2(Complex64::new(0.0, 2.0), Complex64::new(0.0, 0.0)).normalize();
        assert_eq!(c, vec2(Complex64::new(0.0, 1.0), Complex64::new(0.0, 0.0)));
    }

    #[test]
    fn distance() {
        assert_eq!(vec3(1.0, 2.0, 3.0).distance(vec3(1.0, 2.0, 3.0)), 0.0);
        assert_eq!(vec2(-1.0, -1.0).distance(vec2(2.0, 3.0)), 5.0);
        assert_eq!(vec2(-1, -1).distance2(vec2(2, 3)), 25.0);
    }

    #[test]
    fn cross() {
        assert_eq!(Vec3i::X.cross(Vec3i::Y), Vec3i::Z);
        assert_eq!(Vec3i::Y.cross(Vec3i::Z), Vec3i::X);
        assert_eq!(Vec3i::Z.cross(Vec3i::X), Vec3i::Y);
        let a = vec3(1.5, -2.0, 0.25);
        let b = vec3(-4.0, 0.5, 3.0);
        assert_eq!(a.cross(b), -b.cross(a));
        assert_eq!(a.cross(a), Vec3d::ZERO);
    }

    #[test]
    fn elements() {
        let v = vec4(3, -7, 12, 0);
        assert_eq!(v.sum(), 8);
        assert_eq!(v.min_element(), -7);
        assert_eq!(v.max_element(), 12);
        assert_eq!(v.into_iter().collect::<Vec<_>>(), [3, -7, 12, 0]);
        assert_eq!((&v).into_iter().count(), 4);
    }

    #[test]
    fn resize_by_one() {
        assert_eq!(vec2(1, 2).extend(3), vec3(1, 2, 3));
        assert_eq!(vec3(1, 2, 3).extend(4).truncate(), vec3(1, 2, 3));
        assert_eq!(vec4(true, false, true, true).truncate().truncate(), vec2(true, false));
    }

    #[test]
    fn pod() {
        let vs = [vec3(1.0f32, 2.0, 3.0), vec3(4.0, 5.0, 6.0)];
        let flat: &[f32] = bytemuck::cast_slice(&vs);
        assert_eq!(flat, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
