//! Drawing capability consumed by [`render`].
//!
//! A [`Canvas`] owns pixels, fonts and encoding. [`render`] turns a
//! [`PlotLayout`] into drawing instructions for any canvas.

use tracing::debug;

use crate::error::Result;
use crate::plot::layout::{GridLine, Point, PlotLayout};
use crate::utils::format_label;

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLUE: Rgb = Rgb(0, 0, 255);
}

/// Horizontal placement of text relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAlign {
    /// The anchor is the left end of the text.
    Left,
    /// The anchor is the horizontal centre of the text.
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub size: f64,
    pub align: TextAlign,
    pub color: Rgb,
}

/// A drawing surface. Coordinates are layout pixels: origin bottom-left,
/// `y` growing upward.
pub trait Canvas {
    /// What [`finish`](Canvas::finish) produces, e.g. the path of a written image.
    type Output;

    fn fill_background(&mut self, color: Rgb) -> Result<()>;

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgb) -> Result<()>;

    /// Stroke consecutive points as one open path.
    fn stroke_polyline(&mut self, points: &[Point], color: Rgb) -> Result<()> {
        for pair in points.windows(2) {
            self.stroke_line(pair[0], pair[1], color)?;
        }
        Ok(())
    }

    /// Stroke a dashed line. `pattern` alternates on and off lengths,
    /// starting with a dash. An empty or non-positive pattern draws solid.
    fn dashed_line(&mut self, from: Point, to: Point, pattern: &[f64], color: Rgb) -> Result<()> {
        if pattern.is_empty() || pattern.iter().any(|&len| len.is_nan() || len <= 0.0) {
            return self.stroke_line(from, to, color);
        }

        let (dx, dy) = (to.x - from.x, to.y - from.y);
        let length = dx.hypot(dy);
        let at = |d: f64| Point::new(from.x + dx * d / length, from.y + dy * d / length);

        let mut pos = 0.0;
        for (i, &len) in pattern.iter().cycle().enumerate() {
            if pos >= length {
                break;
            }
            let end = (pos + len).min(length);
            if i % 2 == 0 {
                self.stroke_line(at(pos), at(end), color)?;
            }
            pos = end;
        }
        Ok(())
    }

    fn fill_triangle(&mut self, vertices: [Point; 3], color: Rgb) -> Result<()>;

    fn draw_text(&mut self, text: &str, anchor: Point, style: TextStyle) -> Result<()>;

    /// Persist the drawn surface.
    fn finish(self) -> Result<Self::Output>
    where
        Self: Sized;
}

/// Colours and switches for [`render`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub curve_color: Rgb,
    pub axis_color: Rgb,
    pub background: Rgb,
    /// Draw dashed grid lines.
    pub draw_grid: bool,
    /// Draw tick marks and numeric labels.
    pub draw_scale: bool,
    /// On/off lengths of grid dashes.
    pub dash: Vec<f64>,
    pub title_size: f64,
    pub label_size: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            curve_color: Rgb::BLUE,
            axis_color: Rgb::BLACK,
            background: Rgb::WHITE,
            draw_grid: true,
            draw_scale: true,
            dash: vec![2.0, 4.0],
            title_size: 11.0,
            label_size: 9.0,
        }
    }
}

/// Draw `layout` on `canvas`: title, axes, grid, scale labels, then the curve.
///
/// The canvas is left open; call [`Canvas::finish`] to persist it.
pub fn render<C: Canvas>(layout: &PlotLayout, canvas: &mut C, options: &RenderOptions) -> Result<()> {
    canvas.fill_background(options.background)?;

    canvas.draw_text(
        &superscript_powers(&layout.title),
        layout.title_anchor,
        TextStyle {
            size: options.title_size,
            align: TextAlign::Center,
            color: options.axis_color,
        },
    )?;

    for axis in [&layout.x_axis, &layout.y_axis] {
        canvas.stroke_line(axis.line.from, axis.line.to, options.axis_color)?;
        canvas.fill_triangle(axis.arrow, options.axis_color)?;
    }

    if options.draw_grid {
        for grid in layout.x_grid.iter().chain(&layout.y_grid) {
            canvas.dashed_line(grid.line.from, grid.line.to, &options.dash, options.axis_color)?;
        }
    }

    if options.draw_scale {
        let label_style = |align| TextStyle {
            size: options.label_size,
            align,
            color: options.axis_color,
        };
        draw_scale(canvas, &layout.x_grid, label_style(TextAlign::Center), options.axis_color)?;
        draw_scale(canvas, &layout.y_grid, label_style(TextAlign::Left), options.axis_color)?;
        canvas.draw_text(
            &format_label(layout.origin_label.value),
            layout.origin_label.anchor,
            label_style(TextAlign::Left),
        )?;
    }

    canvas.stroke_polyline(&layout.curve, options.curve_color)?;

    debug!(
        x_grid = layout.x_grid.len(),
        y_grid = layout.y_grid.len(),
        points = layout.curve.len(),
        "rendered plot"
    );
    Ok(())
}

fn draw_scale<C: Canvas>(canvas: &mut C, grid: &[GridLine], style: TextStyle, color: Rgb) -> Result<()> {
    for line in grid {
        canvas.stroke_line(line.tick.from, line.tick.to, color)?;
        canvas.draw_text(&format_label(line.label.value), line.label.anchor, style)?;
    }
    Ok(())
}

/// Replace every `^` followed by digits with Unicode superscript digits.
///
/// ```
/// use polyplot::plot::canvas::superscript_powers;
///
/// assert_eq!(superscript_powers("1+X+2X^2+X^10"), "1+X+2X²+X¹⁰");
/// ```
pub fn superscript_powers(text: &str) -> String {
    const SUPERSCRIPTS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

    let mut out = String::with_capacity(text.len());
    let mut in_power = false;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '^' && chars.peek().is_some_and(|next| next.is_ascii_digit()) {
            in_power = true;
            continue;
        }
        match c.to_digit(10) {
            Some(d) if in_power => out.push(SUPERSCRIPTS[d as usize]),
            _ => {
                in_power = false;
                out.push(c);
            }
        }
    }
    out
}

/// Encoded image formats a bitmap canvas can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    #[default]
    Jpeg,
    Png,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
        }
    }
}

/// Output settings for image-producing canvases.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageOptions {
    /// Device pixels per layout pixel (2.0 for a "retina" image).
    pub pixel_density: f64,
    pub format: ImageFormat,
    /// Appended to the file name, typically a timestamp.
    pub stamp: Option<String>,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            pixel_density: 1.0,
            format: ImageFormat::Jpeg,
            stamp: None,
        }
    }
}

/// File name for a plot: `<title>[ - <stamp>][@Nx].<ext>`.
///
/// `/` in the title is replaced so the name stays a single path component.
pub fn output_file_name(title: &str, options: &ImageOptions) -> String {
    let mut name = title.replace('/', "_");
    if let Some(stamp) = &options.stamp {
        name.push_str(" - ");
        name.push_str(stamp);
    }
    if options.pixel_density > 1.0 {
        name.push_str(&format!("@{}x", options.pixel_density.round() as u32));
    }
    name.push('.');
    name.push_str(options.format.extension());
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::layout::compute_layout;
    use crate::structures::poly::Poly;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Background(Rgb),
        Line(Point, Point, Rgb),
        Triangle([Point; 3]),
        Text(String, Point, TextAlign),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Canvas for Recorder {
        type Output = Vec<Op>;

        fn fill_background(&mut self, color: Rgb) -> Result<()> {
            self.ops.push(Op::Background(color));
            Ok(())
        }

        fn stroke_line(&mut self, from: Point, to: Point, color: Rgb) -> Result<()> {
            self.ops.push(Op::Line(from, to, color));
            Ok(())
        }

        fn fill_triangle(&mut self, vertices: [Point; 3], _color: Rgb) -> Result<()> {
            self.ops.push(Op::Triangle(vertices));
            Ok(())
        }

        fn draw_text(&mut self, text: &str, anchor: Point, style: TextStyle) -> Result<()> {
            self.ops.push(Op::Text(text.to_string(), anchor, style.align));
            Ok(())
        }

        fn finish(self) -> Result<Vec<Op>> {
            Ok(self.ops)
        }
    }

    fn recorded(options: &RenderOptions) -> Vec<Op> {
        let p = Poly::new(vec![0.0, 0.0, 1.0]);
        let layout = compute_layout(&p, -2.0..2.0, 420.0, 250.0).unwrap();
        let mut canvas = Recorder::default();
        render(&layout, &mut canvas, options).unwrap();
        canvas.finish().unwrap()
    }

    #[test]
    fn dashes_alternate() {
        let mut canvas = Recorder::default();
        canvas
            .dashed_line(Point::new(0.0, 0.0), Point::new(13.0, 0.0), &[2.0, 4.0], Rgb::BLACK)
            .unwrap();
        let ends: Vec<(f64, f64)> = canvas
            .ops
            .iter()
            .map(|op| match op {
                Op::Line(a, b, _) => (a.x, b.x),
                other => panic!("unexpected {:?}", other),
            })
            .collect();
        assert_eq!(ends, vec![(0.0, 2.0), (6.0, 8.0), (12.0, 13.0)]);
    }

    #[test]
    fn bad_dash_pattern_draws_solid() {
        let mut canvas = Recorder::default();
        canvas
            .dashed_line(Point::new(0.0, 0.0), Point::new(0.0, 5.0), &[2.0, 0.0], Rgb::BLACK)
            .unwrap();
        assert_eq!(canvas.ops.len(), 1);
    }

    #[test]
    fn render_emits_every_part() {
        let ops = recorded(&RenderOptions::default());
        assert_eq!(ops[0], Op::Background(Rgb::WHITE));
        assert_eq!(
            ops[1],
            Op::Text(
                "P(X) = X² on [-2, 2]".to_string(),
                Point::new(210.0, 230.0),
                TextAlign::Center
            )
        );
        let triangles = ops.iter().filter(|op| matches!(op, Op::Triangle(_))).count();
        assert_eq!(triangles, 2);

        let labels: Vec<&str> = ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(text, _, _) => Some(text.as_str()),
                _ => None,
            })
            .skip(1)
            .collect();
        assert_eq!(labels, vec!["-1", "1", "1", "2", "3", "0"]);

        // 400 curve segments, drawn last in the curve colour
        let curve = ops
            .iter()
            .filter(|op| matches!(op, Op::Line(_, _, c) if *c == Rgb::BLUE))
            .count();
        assert_eq!(curve, 400);
        assert!(matches!(ops.last(), Some(Op::Line(_, _, Rgb::BLUE))));
    }

    #[test]
    fn render_without_grid_or_scale() {
        let options = RenderOptions {
            draw_grid: false,
            draw_scale: false,
            ..RenderOptions::default()
        };
        let ops = recorded(&options);
        let texts = ops.iter().filter(|op| matches!(op, Op::Text(..))).count();
        assert_eq!(texts, 1);
        // background, title, 2 axes + 2 arrows, 400 curve segments
        assert_eq!(ops.len(), 1 + 1 + 4 + 400);
    }

    #[test]
    fn superscripts() {
        assert_eq!(superscript_powers("P(X) = -1-2X+X^3 on [0, 1]"), "P(X) = -1-2X+X³ on [0, 1]");
        assert_eq!(superscript_powers("X^12+3"), "X¹²+3");
        assert_eq!(superscript_powers("no powers 42"), "no powers 42");
        // a caret without an exponent stays
        assert_eq!(superscript_powers("a^b ^ 2^"), "a^b ^ 2^");
        assert_eq!(superscript_powers("X^^2"), "X^²");
    }

    #[test]
    fn file_names() {
        assert_eq!(output_file_name("P(X) = X²", &ImageOptions::default()), "P(X) = X².jpg");
        let options = ImageOptions {
            pixel_density: 2.0,
            format: ImageFormat::Png,
            stamp: Some("2017-01-23-10H05m00".to_string()),
        };
        assert_eq!(
            output_file_name("a/b", &options),
            "a_b - 2017-01-23-10H05m00@2x.png"
        );
    }
}
