//! Plotting
//!
//! Renders a few polynomials to JPEG and PNG images in `plots/`.
//!
//! Run with: cargo run --example plot --features plotters

use std::path::Path;

use polyplot::{plot_to_file, ImageFormat, ImageOptions, Poly, PolyError, RenderOptions, Rgb};

fn main() -> Result<(), PolyError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let folder = Path::new("plots");

    // (x + 2)(x - 0.5)(x - 1.5) on [-3, 2.5)
    let cubic = Poly::from_roots(&[-2.0, 0.5, 1.5]);
    let path = plot_to_file(
        &cubic,
        -3.0..2.5,
        480.0,
        320.0,
        folder,
        &RenderOptions::default(),
        &ImageOptions::default(),
    )?;
    println!("wrote {}", path.display());

    // Strictly positive quartic: the x axis sits on the bottom edge
    let quartic = Poly::new(vec![2.0, 0.0, -1.0, 0.0, 0.25]);
    let options = RenderOptions {
        curve_color: Rgb(200, 30, 30),
        draw_grid: false,
        ..RenderOptions::default()
    };
    let image = ImageOptions {
        pixel_density: 2.0,
        format: ImageFormat::Png,
        stamp: Some("demo".to_string()),
    };
    let path = plot_to_file(&quartic, -3.0..3.0, 400.0, 300.0, folder, &options, &image)?;
    println!("wrote {}", path.display());

    Ok(())
}
