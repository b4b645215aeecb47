//! Randomized checks of properties every vector kind must uphold.

use std::fmt::Debug;

use fastrand::Rng;
use half::f16;
use num_complex::Complex64;
use rust_decimal::Decimal;
use vecn::{
    assert_approx_eq, vec3, CastFrom, FormatNumber, Locale, NumberFormat, ParseError, Vec3d,
    Vec3f, Vec3i, Vec4d, Vector, VectorFormat, Zero,
};

const ITERATIONS: usize = 500;

fn init_logger() {
    env_logger::Builder::new()
        .filter(Some("vecn"), log::LevelFilter::Debug)
        .parse_default_env()
        .is_test(true)
        .try_init()
        .ok();
}

fn random<T, const N: usize>(rng: &mut Rng, mut elem: impl FnMut(&mut Rng) -> T) -> Vector<T, N> {
    Vector::from_fn(|_| elem(rng))
}

fn f64_in(rng: &mut Rng, range: f64) -> f64 {
    (rng.f64() * 2.0 - 1.0) * range
}

fn check_round_trip<T, const N: usize>(fmt: &VectorFormat, v: Vector<T, N>) -> anyhow::Result<()>
where
    T: FormatNumber + PartialEq + Debug,
{
    let text = fmt.format(&v);
    let parsed = fmt.parse::<T, N>(&text)?;
    assert_eq!(parsed, v, "{text:?} did not round-trip");
    Ok(())
}

#[test]
fn text_round_trip() -> anyhow::Result<()> {
    init_logger();

    let mut rng = Rng::with_seed(7);
    let formats = [
        VectorFormat::default(),
        VectorFormat::default().with_separator(";"),
        VectorFormat::default()
            .with_separator(" ")
            .with_locale(Locale::new(',', '.')),
    ];

    for fmt in &formats {
        for _ in 0..ITERATIONS {
            check_round_trip::<f64, 4>(fmt, random(&mut rng, |rng| f64_in(rng, 1e6)))?;
            check_round_trip::<f32, 3>(fmt, random(&mut rng, |rng| rng.f32() - 0.5))?;
            check_round_trip::<i32, 2>(fmt, random(&mut rng, |rng| rng.i32(..)))?;
            check_round_trip::<u32, 3>(fmt, random(&mut rng, |rng| rng.u32(..)))?;
            check_round_trip::<i64, 4>(fmt, random(&mut rng, |rng| rng.i64(..)))?;
            check_round_trip::<bool, 2>(fmt, random(&mut rng, |rng| rng.bool()))?;
            check_round_trip::<f16, 3>(fmt, random(&mut rng, |rng| {
                f16::from_f64(f64_in(rng, 1000.0))
            }))?;
            check_round_trip::<Decimal, 2>(fmt, random(&mut rng, |rng| {
                Decimal::new(rng.i64(-1_000_000_000..1_000_000_000), rng.u32(0..10))
            }))?;
            check_round_trip::<Complex64, 2>(fmt, random(&mut rng, |rng| {
                Complex64::new(f64_in(rng, 100.0), f64_in(rng, 100.0))
            }))?;
        }
    }
    Ok(())
}

#[test]
fn integers_round_trip_in_every_number_format() -> anyhow::Result<()> {
    let mut rng = Rng::with_seed(2024);
    let formats = [
        NumberFormat::General,
        NumberFormat::Fixed(0),
        NumberFormat::Fixed(3),
        NumberFormat::Scientific(18),
        NumberFormat::Scientific(30),
    ];

    for number in formats {
        let fmt = VectorFormat::default().with_number_format(number);
        let de = fmt.clone().with_separator("; ").with_locale(Locale::new(',', '.'));
        for _ in 0..ITERATIONS {
            check_round_trip::<i64, 4>(&fmt, random(&mut rng, |rng| rng.i64(..)))?;
            check_round_trip::<i64, 2>(&de, random(&mut rng, |rng| rng.i64(..)))?;
            check_round_trip::<i32, 3>(&fmt, random(&mut rng, |rng| rng.i32(..)))?;
            check_round_trip::<u32, 3>(&fmt, random(&mut rng, |rng| rng.u32(..)))?;
        }
        check_round_trip::<i64, 2>(&fmt, Vector::from([i64::MIN, i64::MAX]))?;
    }
    Ok(())
}

#[test]
fn fixed_format_round_trip_within_precision() -> anyhow::Result<()> {
    let mut rng = Rng::with_seed(99);
    let fmt = VectorFormat::default().with_number_format(NumberFormat::Fixed(6));
    for _ in 0..ITERATIONS {
        let v: Vec3d = random(&mut rng, |rng| f64_in(rng, 1000.0));
        let parsed = fmt.parse::<f64, 3>(&fmt.format(&v))?;
        assert_approx_eq!(parsed, v).abs(5e-7);
    }
    Ok(())
}

#[test]
fn parse_failures_are_format_errors() {
    let fmt = VectorFormat::default();
    for text in ["", "1", "1, 2", "1, 2, 3, 0", "1, 2, three", "1;2;3", ", , "] {
        let err = fmt.parse::<f64, 3>(text).unwrap_err();
        assert!(err.is_format_error(), "{text:?}: {err}");
    }
    assert_eq!(fmt.parse_opt::<f64, 3>(None), Err(ParseError::NoInput));
}

#[test]
fn indexing() {
    let mut rng = Rng::with_seed(3);
    for _ in 0..ITERATIONS {
        let v: Vec4d = random(&mut rng, |rng| f64_in(rng, 10.0));
        let named = [v.x, v.y, v.z, v.w];
        for (i, &elem) in named.iter().enumerate() {
            assert_eq!(v[i], elem);
            assert_eq!(v.component(i), Ok(elem));
        }
        let i = rng.usize(4..);
        assert!(v.component(i).is_err());
    }
}

#[test]
fn normalization() {
    let mut rng = Rng::with_seed(1234);
    for _ in 0..ITERATIONS {
        let v: Vec3f = random(&mut rng, |rng| rng.f32() * 20.0 - 10.0);
        if v == Vec3f::ZERO {
            continue;
        }
        assert_approx_eq!(v.normalize().length(), 1.0).abs(1e-5);
        assert_eq!(v.normalize_safe(), v.normalize());
    }
    assert_eq!(Vec3f::ZERO.normalize_safe(), Vec3f::ZERO);
    assert_eq!(Vec4d::ZERO.normalize_safe(), Vec4d::ZERO);
}

#[test]
fn cross_product() {
    let mut rng = Rng::with_seed(5);
    for _ in 0..ITERATIONS {
        let a: Vec3i = random(&mut rng, |rng| rng.i32(-100..100));
        let b: Vec3i = random(&mut rng, |rng| rng.i32(-100..100));
        let c = a.cross(b);
        assert_eq!(c, -b.cross(a));
        assert_eq!(c.dot(a), 0);
        assert_eq!(c.dot(b), 0);
    }
}

#[test]
fn arithmetic_laws() {
    let mut rng = Rng::with_seed(11);
    for _ in 0..ITERATIONS {
        let a: Vec3i = random(&mut rng, |rng| rng.i32(-10_000..10_000));
        let b: Vec3i = random(&mut rng, |rng| rng.i32(-10_000..10_000));
        let c: Vec3i = random(&mut rng, |rng| rng.i32(-10_000..10_000));
        assert_eq!(a + b, b + a);
        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!(a * 3, 3 * a);
        assert_eq!(a - b, -(b - a));

        let x: Vec4d = random(&mut rng, |rng| f64_in(rng, 100.0));
        let y: Vec4d = random(&mut rng, |rng| f64_in(rng, 100.0));
        let z: Vec4d = random(&mut rng, |rng| f64_in(rng, 100.0));
        assert_eq!(x + y, y + x);
        assert_approx_eq!((x + y) + z, x + (y + z)).abs(1e-10);
    }
}

fn check_resize<T, U>(rng: &mut Rng, mut elem: impl FnMut(&mut Rng) -> T)
where
    T: Copy,
    U: CastFrom<T> + Zero + Copy + PartialEq + Debug,
{
    let v: Vector<T, 4> = random(rng, &mut elem);
    let cast = v.cast::<U>();

    let narrow = v.convert::<U, 2>();
    assert_eq!(narrow, [cast[0], cast[1]]);

    let short: Vector<T, 2> = random(rng, &mut elem);
    let wide = short.convert::<U, 4>();
    assert_eq!(wide.as_slice()[..2], short.cast::<U>().as_slice()[..]);
    assert_eq!(wide.z, U::ZERO);
    assert_eq!(wide.w, U::ZERO);
}

#[test]
fn conversions_truncate_and_zero_fill() {
    let mut rng = Rng::with_seed(77);
    for _ in 0..ITERATIONS {
        check_resize::<f64, i32>(&mut rng, |rng| f64_in(rng, 1e3));
        check_resize::<i32, bool>(&mut rng, |rng| rng.i32(-2..2));
        check_resize::<bool, Decimal>(&mut rng, |rng| rng.bool());
        check_resize::<u32, Complex64>(&mut rng, |rng| rng.u32(..));
        check_resize::<Complex64, f16>(&mut rng, |rng| {
            Complex64::new(f64_in(rng, 10.0), 1.0)
        });
        check_resize::<Decimal, i64>(&mut rng, |rng| Decimal::new(rng.i64(..), 4));
    }
}

#[test]
fn swizzles_copy() {
    let mut v = vec3(1, 2, 3);
    let s = v.zzyx();
    v.z = 0;
    assert_eq!(s, [3, 3, 2, 1]);
    assert_eq!(v.bgr(), vec3(0, 2, 1));
}
