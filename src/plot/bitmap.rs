//! Bitmap [`Canvas`] on top of the `plotters` bitmap backend.

use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};
use tracing::debug;

use crate::error::{PolyError, Result};
use crate::plot::canvas::{
    output_file_name, render, superscript_powers, Canvas, ImageOptions, RenderOptions, Rgb,
    TextAlign, TextStyle as PlotTextStyle,
};
use crate::plot::layout::{compute_layout, Point, MAX_CANVAS_SIZE};
use crate::structures::poly::Poly;

/// A canvas writing a JPEG or PNG file, chosen by the path's extension.
///
/// Layout pixels are multiplied by `pixel_density` and flipped so that the
/// layout's bottom-left origin lands at the image's bottom-left corner.
pub struct BitmapCanvas<'a> {
    area: DrawingArea<BitMapBackend<'a>, Shift>,
    path: &'a Path,
    height: f64,
    density: f64,
}

impl<'a> BitmapCanvas<'a> {
    pub fn new(path: &'a Path, width: f64, height: f64, pixel_density: f64) -> Result<Self> {
        if pixel_density.is_nan() || pixel_density <= 0.0 {
            return Err(PolyError::Canvas(format!(
                "invalid pixel density {pixel_density}"
            )));
        }
        let usable = |side: f64| side > 0.0 && side <= MAX_CANVAS_SIZE;
        if !(usable(width) && usable(height)) {
            return Err(PolyError::InvalidCanvasSize { width, height });
        }

        let size = (
            (width * pixel_density).round() as u32,
            (height * pixel_density).round() as u32,
        );
        let area = BitMapBackend::new(path, size).into_drawing_area();
        Ok(Self {
            area,
            path,
            height,
            density: pixel_density,
        })
    }

    fn to_backend(&self, point: Point) -> (i32, i32) {
        (
            (point.x * self.density).round() as i32,
            ((self.height - point.y) * self.density).round() as i32,
        )
    }

    fn line_style(&self, color: Rgb) -> ShapeStyle {
        ShapeStyle::from(&to_rgb(color)).stroke_width(self.density.round().max(1.0) as u32)
    }
}

fn to_rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

impl<'a> Canvas for BitmapCanvas<'a> {
    type Output = PathBuf;

    fn fill_background(&mut self, color: Rgb) -> Result<()> {
        self.area
            .fill(&to_rgb(color))
            .map_err(|e| PolyError::Canvas(format!("failed to clear drawing area: {e}")))
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgb) -> Result<()> {
        self.stroke_polyline(&[from, to], color)
    }

    fn stroke_polyline(&mut self, points: &[Point], color: Rgb) -> Result<()> {
        let path: Vec<(i32, i32)> = points.iter().map(|&p| self.to_backend(p)).collect();
        let style = self.line_style(color);
        self.area
            .draw(&PathElement::new(path, style))
            .map_err(|e| PolyError::Canvas(format!("failed to draw path: {e}")))
    }

    fn fill_triangle(&mut self, vertices: [Point; 3], color: Rgb) -> Result<()> {
        let corners: Vec<(i32, i32)> = vertices.iter().map(|&p| self.to_backend(p)).collect();
        self.area
            .draw(&Polygon::new(corners, to_rgb(color).filled()))
            .map_err(|e| PolyError::Canvas(format!("failed to fill triangle: {e}")))
    }

    fn draw_text(&mut self, text: &str, anchor: Point, style: PlotTextStyle) -> Result<()> {
        let color = to_rgb(style.color);
        let h_pos = match style.align {
            TextAlign::Left => HPos::Left,
            TextAlign::Center => HPos::Center,
        };
        let font = FontDesc::new(
            FontFamily::SansSerif,
            style.size * self.density,
            FontStyle::Normal,
        )
        .color(&color)
        .pos(Pos::new(h_pos, VPos::Bottom));

        self.area
            .draw_text(text, &font, self.to_backend(anchor))
            .map_err(|e| PolyError::Canvas(format!("failed to draw text: {e}")))
    }

    fn finish(self) -> Result<PathBuf> {
        self.area
            .present()
            .map_err(|e| PolyError::Canvas(format!("failed to write image: {e}")))?;
        Ok(self.path.to_path_buf())
    }
}

/// Lay out, draw and encode `poly` over `interval` into `folder`.
///
/// Returns the path of the written image, named by [`output_file_name`].
pub fn plot_to_file(
    poly: &Poly,
    interval: Range<f64>,
    width: f64,
    height: f64,
    folder: &Path,
    render_options: &RenderOptions,
    image_options: &ImageOptions,
) -> Result<PathBuf> {
    let layout = compute_layout(poly, interval, width, height)?;

    fs::create_dir_all(folder).map_err(|e| {
        PolyError::Canvas(format!(
            "failed to create output directory {}: {e}",
            folder.display()
        ))
    })?;
    let path = folder.join(output_file_name(
        &superscript_powers(&layout.title),
        image_options,
    ));

    let mut canvas = BitmapCanvas::new(&path, width, height, image_options.pixel_density)?;
    render(&layout, &mut canvas, render_options)?;
    let written = canvas.finish()?;

    debug!(path = %written.display(), "wrote plot image");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::canvas::ImageFormat;
    use tempfile::tempdir;

    #[test]
    fn flips_and_scales_to_device_pixels() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("flip.png");
        let canvas = BitmapCanvas::new(&path, 100.0, 50.0, 2.0).unwrap();

        assert_eq!(canvas.to_backend(Point::new(0.0, 0.0)), (0, 100));
        assert_eq!(canvas.to_backend(Point::new(10.0, 50.0)), (20, 0));
        assert_eq!(canvas.to_backend(Point::new(25.0, 20.0)), (50, 60));
    }

    #[test]
    fn rejects_bad_geometry() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.png");
        assert!(matches!(
            BitmapCanvas::new(&path, 100.0, 50.0, 0.0),
            Err(PolyError::Canvas(_))
        ));
        assert!(matches!(
            BitmapCanvas::new(&path, f64::INFINITY, 50.0, 1.0),
            Err(PolyError::InvalidCanvasSize { .. })
        ));
    }

    #[test]
    fn writes_shapes_to_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shapes.png");

        let mut canvas = BitmapCanvas::new(&path, 60.0, 40.0, 1.0).unwrap();
        canvas.fill_background(Rgb::WHITE).unwrap();
        canvas
            .stroke_polyline(
                &[Point::new(5.0, 5.0), Point::new(30.0, 35.0), Point::new(55.0, 5.0)],
                Rgb::BLUE,
            )
            .unwrap();
        canvas
            .dashed_line(Point::new(0.0, 20.0), Point::new(60.0, 20.0), &[2.0, 4.0], Rgb::BLACK)
            .unwrap();
        canvas
            .fill_triangle(
                [Point::new(50.0, 30.0), Point::new(50.0, 38.0), Point::new(58.0, 34.0)],
                Rgb::BLACK,
            )
            .unwrap();

        let written = canvas.finish().unwrap();
        assert_eq!(written, path);
        assert!(fs::metadata(&written).unwrap().len() > 0);
    }

    #[test]
    fn plot_to_file_names_output_after_title() {
        let dir = tempdir().unwrap();
        let folder = dir.path().join("plots");
        let p = Poly::new(vec![0.0, 0.0, 1.0]);
        let image = ImageOptions {
            pixel_density: 2.0,
            format: ImageFormat::Png,
            stamp: Some("run".to_string()),
        };

        match plot_to_file(&p, -2.0..2.0, 240.0, 160.0, &folder, &RenderOptions::default(), &image) {
            Ok(path) => {
                assert_eq!(path, folder.join("P(X) = X² on [-2, 2] - run@2x.png"));
                assert!(fs::metadata(&path).unwrap().len() > 0);
            }
            // hosts without a sans-serif font cannot draw text
            Err(PolyError::Canvas(message)) => assert!(message.contains("text"), "{message}"),
            Err(other) => panic!("unexpected error {other}"),
        }
        assert!(folder.is_dir());
    }

    #[test]
    fn plot_to_file_validates_before_writing() {
        let dir = tempdir().unwrap();
        let folder = dir.path().join("never");
        let result = plot_to_file(
            &Poly::x(),
            0.0..1.0,
            -1.0,
            100.0,
            &folder,
            &RenderOptions::default(),
            &ImageOptions::default(),
        );
        assert!(matches!(result, Err(PolyError::InvalidCanvasSize { .. })));
        assert!(!folder.exists());
    }
}
