//! Formats vectors given on the command line in a few styles and shows their norms.
//!
//! Usage: `format [<x, y, z>...]`

use log::LevelFilter;
use vecn::{vec3, Locale, NumberFormat, Vec3d, Vec3i, VectorFormat};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter(Some("vecn"), LevelFilter::Debug)
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Debug)
        .parse_default_env()
        .try_init()?;

    let mut inputs = std::env::args().skip(1).collect::<Vec<_>>();
    if inputs.is_empty() {
        inputs.push("1.5, -2, 0.25".into());
    }

    let styles = [
        ("default", VectorFormat::default()),
        (
            "fixed",
            VectorFormat::default().with_number_format(NumberFormat::Fixed(3)),
        ),
        (
            "scientific",
            VectorFormat::default().with_number_format(NumberFormat::Scientific(2)),
        ),
        (
            "german",
            VectorFormat::default()
                .with_separator("; ")
                .with_locale(Locale::new(',', '.')),
        ),
    ];

    for input in &inputs {
        let v: Vec3d = input.parse()?;
        log::info!("parsed {input:?} as {v:?}");

        for (name, fmt) in &styles {
            println!("{name:>10}: {}", fmt.format(&v));
        }
        println!("    length: {}", v.length());
        println!("     max-n: {}", v.norm_max());
        println!("   swizzle: {}", v.zyx());

        let i = v.cast::<i32>();
        println!("  as i32x4: {}", i.resize::<4>());
        println!("     cross: {}", i.cross(Vec3i::Z));
        println!("        +x: {}", v + vec3(1.0, 0.0, 0.0));
    }

    Ok(())
}
