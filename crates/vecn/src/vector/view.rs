//! Named field access for 2-, 3- and 4-element vectors.
//!
//! `Vector<T, N>` dereferences to a `#[repr(C)]` struct with one field per element (`x`, `y`, `z`,
//! `w`), which in turn dereferences to a struct naming the same elements as colors (`r`, `g`, `b`,
//! `a`). Both structs have the same layout as `[T; N]`.

use std::ops::{Deref, DerefMut};

use crate::Vector;

macro_rules! views {
    ($($n:literal => $xyzw:ident { $($f:ident),+ } => $rgba:ident { $($c:ident),+ };)+) => {
        $(
            #[repr(C)]
            pub struct $xyzw<T> {
                $(pub $f: T,)+
                _priv: (), // prevent external construction
            }

            #[repr(C)]
            pub struct $rgba<T> {
                $(pub $c: T,)+
                _priv: (), // prevent external construction
            }

            impl<T> Deref for Vector<T, $n> {
                type Target = $xyzw<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    // SAFETY: `Vector<T, N>` is `repr(transparent)` over `[T; N]`, and the view is
                    // `repr(C)` with `N` fields of type `T` followed by a ZST.
                    unsafe { &*(self as *const Self).cast::<$xyzw<T>>() }
                }
            }

            impl<T> DerefMut for Vector<T, $n> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    // SAFETY: see `deref`.
                    unsafe { &mut *(self as *mut Self).cast::<$xyzw<T>>() }
                }
            }

            impl<T> Deref for $xyzw<T> {
                type Target = $rgba<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    // SAFETY: both views have identical layout.
                    unsafe { &*(self as *const Self).cast::<$rgba<T>>() }
                }
            }

            impl<T> DerefMut for $xyzw<T> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    // SAFETY: both views have identical layout.
                    unsafe { &mut *(self as *mut Self).cast::<$rgba<T>>() }
                }
            }
        )+
    };
}

views! {
    2 => XY { x, y } => RG { r, g };
    3 => XYZ { x, y, z } => RGB { r, g, b };
    4 => XYZW { x, y, z, w } => RGBA { r, g, b, a };
}
