//! Fixed-size numeric vectors with 2, 3 or 4 components.
//!
//! This crate provides a single vector type, [`Vector<T, N>`], together with aliases for the
//! supported scalar kinds:
//!
//! | Scalar | Aliases |
//! |---|---|
//! | [`f32`] | [`Vec2f`], [`Vec3f`], [`Vec4f`] |
//! | [`f64`] | [`Vec2d`], [`Vec3d`], [`Vec4d`] |
//! | [`i32`] | [`Vec2i`], [`Vec3i`], [`Vec4i`] |
//! | [`u32`] | [`Vec2u`], [`Vec3u`], [`Vec4u`] |
//! | [`i64`] | [`Vec2l`], [`Vec3l`], [`Vec4l`] |
//! | [`bool`] | [`Vec2b`], [`Vec3b`], [`Vec4b`] |
//! | [`f16`][half::f16] | [`Vec2h`], [`Vec3h`], [`Vec4h`] |
//! | [`Decimal`][rust_decimal::Decimal] | [`Vec2m`], [`Vec3m`], [`Vec4m`] |
//! | [`Complex64`][num_complex::Complex64] | [`Vec2c`], [`Vec3c`], [`Vec4c`] |
//!
//! Vectors support component-wise arithmetic (with other vectors and with scalars on either side),
//! component-wise comparisons producing boolean vectors, norms and products, named component
//! access (`v.x`, `v.g`), swizzles (`v.zyx()`, `v.rgba()`), explicit conversions between scalar
//! kinds and sizes ([`Vector::cast`], [`Vector::resize`]), and conversion to and from text
//! ([`VectorFormat`]).
//!
//! ```
//! use vecn::*;
//!
//! let a = vec3(1.0, 2.0, 2.0);
//! assert_eq!(a.length(), 3.0);
//! assert_eq!(a.xy() * 2.0, vec2(2.0, 4.0));
//! assert!(a.cmp_gt_scalar(0.0).all());
//!
//! let i: Vec4i = a.convert::<i32, 4>();
//! assert_eq!(i, vec4(1, 2, 2, 0));
//! assert_eq!(i.to_string().parse::<Vec4i>(), Ok(i));
//! ```
//!
//! # Goals & Non-Goals
//!
//! - Only fixed-size vectors. Const generics specify the number of components, which keeps the API
//!   small and lets every operation work for every size.
//! - One unpadded data layout: a vector is laid out exactly like `[T; N]`.
//! - One generic implementation. Per-kind behavior lives in the scalar traits ([`Zero`], [`One`],
//!   [`Number`], [`Magnitude`], ...) and in [`CastFrom`], not in per-type vector code.
//! - Explicit conversions only. Nothing converts between scalar kinds or sizes implicitly.
//!
//! # Features
//!
//! - `nalgebra`: conversions between [`Vector`] and `nalgebra::SVector`.

pub mod approx;
pub mod cast;
pub mod error;
pub mod format;
#[cfg(feature = "nalgebra")]
mod interop;
mod swizzle;
mod traits;
mod vector;

#[cfg(test)]
mod test;

pub use cast::{CastFrom, CastInto};
pub use error::{OutOfRange, ParseError};
pub use format::{FormatNumber, Locale, NumberFormat, NumberStyle, VectorFormat};
pub use traits::*;
pub use vector::*;
