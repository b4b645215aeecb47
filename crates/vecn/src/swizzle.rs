//! Swizzles: reading several components of a vector at once, in any order.
//!
//! For every 2-, 3- and 4-letter selection of component names (repetition allowed) there is a
//! method returning a new vector with those components, under both the `xyzw` and `rgba` names:
//!
//! ```
//! # use vecn::*;
//! let v = vec4(1, 2, 3, 4);
//! assert_eq!(v.zyx(), vec3(3, 2, 1));
//! assert_eq!(v.xxww(), vec4(1, 1, 4, 4));
//! assert_eq!(v.bgra(), v.zyxw());
//! assert_eq!(v.xy().yx(), vec2(2, 1));
//! ```
//!
//! Swizzles copy the selected elements, so the result does not change when the source vector is
//! modified afterwards.

use crate::Vector;

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Creates a new vector from the elements at the given indices, in that order.
    ///
    /// All named swizzle methods are shorthands for this method.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range (like `self[i]` would).
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecn::*;
    /// let v = vec3(10, 20, 30);
    /// assert_eq!(v.swizzle([2, 0]), vec2(30, 10));
    /// assert_eq!(v.swizzle([1, 1, 1, 1]), Vector::splat(20));
    /// ```
    #[inline]
    pub fn swizzle<const M: usize>(self, indices: [usize; M]) -> Vector<T, M> {
        Vector::from_fn(|i| self[indices[i]])
    }
}

impl<T: Copy> Vector<T, 2> {
    vecn_macros::swizzles!(xy, rg);
}

impl<T: Copy> Vector<T, 3> {
    vecn_macros::swizzles!(xyz, rgb);
}

impl<T: Copy> Vector<T, 4> {
    vecn_macros::swizzles!(xyzw, rgba);
}
