//! Example: render a gradient and hand the raw buffer to a trivial codec.
//!
//! The engine only emits RGB8 pixels; writing them into a container (here a
//! binary PPM, stand-in for a real image codec) is the caller's job.

use gradlab_gradient::{ColorSpace, ColorStop, GradientShape, GradientSpec};
use gradlab_render::{descriptor, render};
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let spec = GradientSpec::new(
        vec![
            ColorStop::parse("#FF6B6B", 0.0)?,
            ColorStop::parse("#FFD93D", 50.0)?,
            ColorStop::parse("#6BCB77", 100.0)?,
        ],
        ColorSpace::Hsl,
        GradientShape::Conic,
        0.0,
        32,
    )?;

    println!("css: {}", descriptor(&spec));

    let buffer = render(&spec, 512, 512)?;
    let mut out = BufWriter::new(File::create("gradient.ppm")?);
    write!(out, "P6\n{} {}\n255\n", buffer.width(), buffer.height())?;
    out.write_all(&buffer.as_rgb8_bytes())?;

    println!("Wrote {}x{} gradient.ppm", buffer.width(), buffer.height());
    Ok(())
}
