//! Helpers shared by the unit tests.

use log::LevelFilter;

use crate::Vector;

/// Logs to stderr at *debug* level, unless overridden through `RUST_LOG`.
pub fn init_logger() {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_PKG_NAME")), LevelFilter::Debug)
        .parse_default_env()
        .is_test(true)
        .try_init()
        .ok();
}

/// Creates a vector whose elements are produced by `elem`.
pub fn random_vec<T, const N: usize>(
    rng: &mut fastrand::Rng,
    mut elem: impl FnMut(&mut fastrand::Rng) -> T,
) -> Vector<T, N> {
    Vector::from_fn(|_| elem(rng))
}
