//! Value-to-pixel mapping for drawing a polynomial over an interval.
//!
//! Pixel space has its origin at the bottom-left corner of the canvas with
//! `y` growing upward. Each axis maps values with `pixel = scale * value + offset`.

use core::ops::Range;

use tracing::debug;

use crate::error::{PolyError, Result};
use crate::structures::poly::Poly;
use crate::utils::grid_step;

/// Grid walks whose step is shorter than this many pixels are skipped.
const MIN_GRID_SPACING: f64 = 1.0;

/// Largest accepted canvas side, in pixels. The curve is sampled once per
/// pixel column.
pub const MAX_CANVAS_SIZE: f64 = 100_000.0;

/// Fixed geometry of a plot, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutOptions {
    /// Border kept free on every side of the canvas.
    pub margin: f64,
    /// Band reserved above the plotting area for the title.
    pub title_height: f64,
    pub arrow_length: f64,
    pub arrow_half_width: f64,
    pub tick_half_length: f64,
    /// Distance from the horizontal axis to the labels of vertical grid lines.
    pub x_label_offset: f64,
    /// Distance from the vertical axis to the labels of horizontal grid lines.
    pub y_label_offset: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            margin: 10.0,
            title_height: 30.0,
            arrow_length: 7.0,
            arrow_half_width: 4.0,
            tick_half_length: 6.0,
            x_label_offset: 8.0,
            y_label_offset: 4.0,
        }
    }
}

/// A position in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// Axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl Rect {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }
}

/// Where the value `0` of an axis falls relative to its visible range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisPosition {
    /// Every visible value is positive; the crossing axis sits on the near edge.
    Below,
    /// Zero is visible; the crossing axis sits on the zero pixel.
    Inside,
    /// Every visible value is negative; the crossing axis sits on the far edge.
    Above,
}

impl AxisPosition {
    pub fn classify(min: f64, max: f64) -> Self {
        if 0.0 < min {
            AxisPosition::Below
        } else if 0.0 > max {
            AxisPosition::Above
        } else {
            AxisPosition::Inside
        }
    }
}

/// Mapping of one value axis onto pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisScale {
    /// Smallest visible value.
    pub min: f64,
    /// Largest visible value.
    pub max: f64,
    pub scale: f64,
    pub offset: f64,
    /// Distance between grid lines, in value units.
    pub grid_step: f64,
    /// Position of zero within `[min, max]`.
    pub zero: AxisPosition,
}

impl AxisScale {
    fn new(min: f64, max: f64, scale: f64, offset: f64, grid_step: f64) -> Self {
        Self {
            min,
            max,
            scale,
            offset,
            grid_step,
            zero: AxisPosition::classify(min, max),
        }
    }

    pub fn to_pixel(&self, value: f64) -> f64 {
        self.scale * value + self.offset
    }

    pub fn to_value(&self, pixel: f64) -> f64 {
        (pixel - self.offset) / self.scale
    }

    /// Pixel and value where the perpendicular axis crosses this one.
    fn crossing(&self, near: f64, far: f64) -> (f64, f64) {
        match self.zero {
            AxisPosition::Below => (near, self.min),
            AxisPosition::Inside => (self.offset, 0.0),
            AxisPosition::Above => (far, self.max),
        }
    }
}

/// A drawn axis line with its arrowhead.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Axis {
    pub line: Segment,
    /// Filled triangle at the positive end, tip last.
    pub arrow: [Point; 3],
}

/// A numeric label anchored at a pixel position.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Label {
    pub value: f64,
    pub anchor: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLine {
    pub value: f64,
    /// Dashed line across the plotting area.
    pub line: Segment,
    /// Solid tick across the axis.
    pub tick: Segment,
    pub label: Label,
}

/// Everything a [`Canvas`](crate::plot::canvas::Canvas) needs to draw a
/// polynomial: scales, axes, grid, labels and the sampled curve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlotLayout {
    pub width: f64,
    pub height: f64,
    /// `P(X) = <poly> on [<start>, <end>]`, with plain `^` exponents.
    pub title: String,
    /// Centre of the title line.
    pub title_anchor: Point,
    pub plot_area: Rect,
    pub x: AxisScale,
    pub y: AxisScale,
    /// Horizontal axis, placed according to `y.zero`.
    pub x_axis: Axis,
    /// Vertical axis, placed according to `x.zero`.
    pub y_axis: Axis,
    /// Vertical grid lines, ordered left to right.
    pub x_grid: Vec<GridLine>,
    /// Horizontal grid lines, ordered bottom to top.
    pub y_grid: Vec<GridLine>,
    /// Label of the x value at the axis crossing.
    pub origin_label: Label,
    /// Curve points, one per pixel column.
    pub curve: Vec<Point>,
}

/// Lay out `poly` over `interval` on a `width` x `height` canvas with the
/// default geometry.
///
/// # Errors
///
/// [`PolyError::InvalidCanvasSize`] when the canvas leaves no plotting area
/// or a side is not finite or exceeds [`MAX_CANVAS_SIZE`],
/// [`PolyError::InvalidInterval`] when the interval is empty or not finite.
///
/// # Example
///
/// ```
/// use polyplot::{compute_layout, AxisPosition, Poly, PolyError};
///
/// let p = Poly::new(vec![0.0, 0.0, 1.0]); // x^2
/// let layout = compute_layout(&p, -2.0..2.0, 420.0, 250.0).unwrap();
/// assert_eq!(layout.x.scale, 100.0);
/// assert_eq!(layout.y.zero, AxisPosition::Inside);
///
/// assert!(matches!(
///     compute_layout(&p, -2.0..2.0, -1.0, 320.0),
///     Err(PolyError::InvalidCanvasSize { .. })
/// ));
/// ```
pub fn compute_layout(
    poly: &Poly,
    interval: Range<f64>,
    width: f64,
    height: f64,
) -> Result<PlotLayout> {
    compute_layout_with(poly, interval, width, height, &LayoutOptions::default())
}

/// Lay out `poly` with explicit geometry.
///
/// # Errors
///
/// See [`compute_layout`].
pub fn compute_layout_with(
    poly: &Poly,
    interval: Range<f64>,
    width: f64,
    height: f64,
    options: &LayoutOptions,
) -> Result<PlotLayout> {
    let invalid_size = PolyError::InvalidCanvasSize { width, height };
    let usable = |side: f64| side > 0.0 && side <= MAX_CANVAS_SIZE;
    if !(usable(width) && usable(height)) {
        return Err(invalid_size);
    }

    let plot_area = Rect {
        left: options.margin.floor(),
        bottom: options.margin.floor(),
        right: (width - options.margin).floor(),
        top: (height - options.margin - options.title_height).floor(),
    };
    if !(plot_area.width() > 0.0 && plot_area.height() > 0.0) {
        return Err(invalid_size);
    }

    let (x_min, x_max) = (interval.start, interval.end);
    if !(x_min.is_finite() && x_max.is_finite()) || x_max <= x_min {
        return Err(PolyError::InvalidInterval {
            start: x_min,
            end: x_max,
        });
    }

    // X mapping, one sample per pixel column.
    let x_scale = plot_area.width() / (x_max - x_min);
    let x = AxisScale::new(
        x_min,
        x_max,
        x_scale,
        plot_area.left - x_scale * x_min,
        grid_step(x_max - x_min),
    );

    let columns = plot_area.width() as usize;
    let xs: Vec<f64> = (0..=columns)
        .map(|i| (x_min + i as f64 / x_scale).min(x_max))
        .collect();
    let ys = poly.eval_many(&xs);

    // Y mapping from the sampled range.
    let (y_min, y_max) = ys
        .iter()
        .copied()
        .filter(|y| y.is_finite())
        .fold(None, |range: Option<(f64, f64)>, y| match range {
            None => Some((y, y)),
            Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
        })
        .unwrap_or((0.0, 0.0));

    let y_grid_step = grid_step(y_max - y_min);
    let y = if y_max == y_min {
        // Constant samples: show two grid steps centred on the value.
        let y_scale = plot_area.height() / (2.0 * y_grid_step);
        let low = y_min - y_grid_step;
        AxisScale::new(
            low,
            y_max + y_grid_step,
            y_scale,
            plot_area.bottom - y_scale * low,
            y_grid_step,
        )
    } else {
        let y_scale = plot_area.height() / (y_max - y_min);
        AxisScale::new(
            y_min,
            y_max,
            y_scale,
            plot_area.bottom - y_scale * y_min,
            y_grid_step,
        )
    };

    let (cross_y, cross_y_value) = y.crossing(plot_area.bottom, plot_area.top);
    let (cross_x, cross_x_value) = x.crossing(plot_area.left, plot_area.right);

    let x_axis = Axis {
        line: Segment::new(
            Point::new(plot_area.left, cross_y),
            Point::new(plot_area.right, cross_y),
        ),
        arrow: [
            Point::new(
                plot_area.right - options.arrow_length,
                cross_y + options.arrow_half_width,
            ),
            Point::new(
                plot_area.right - options.arrow_length,
                cross_y - options.arrow_half_width,
            ),
            Point::new(plot_area.right, cross_y),
        ],
    };
    let y_axis = Axis {
        line: Segment::new(
            Point::new(cross_x, plot_area.bottom),
            Point::new(cross_x, plot_area.top),
        ),
        arrow: [
            Point::new(
                cross_x - options.arrow_half_width,
                plot_area.top - options.arrow_length,
            ),
            Point::new(
                cross_x + options.arrow_half_width,
                plot_area.top - options.arrow_length,
            ),
            Point::new(cross_x, plot_area.top),
        ],
    };

    let x_grid = walk_grid(cross_x, cross_x_value, &x, plot_area.left, plot_area.right)
        .into_iter()
        .map(|(px, value)| GridLine {
            value,
            line: Segment::new(
                Point::new(px, plot_area.bottom),
                Point::new(px, plot_area.top),
            ),
            tick: Segment::new(
                Point::new(px, cross_y - options.tick_half_length),
                Point::new(px, cross_y + options.tick_half_length),
            ),
            label: Label {
                value,
                anchor: Point::new(px, cross_y + options.x_label_offset),
            },
        })
        .collect();

    let y_grid = walk_grid(cross_y, cross_y_value, &y, plot_area.bottom, plot_area.top)
        .into_iter()
        .map(|(py, value)| GridLine {
            value,
            line: Segment::new(
                Point::new(plot_area.left, py),
                Point::new(plot_area.right, py),
            ),
            tick: Segment::new(
                Point::new(cross_x - options.tick_half_length, py),
                Point::new(cross_x + options.tick_half_length, py),
            ),
            label: Label {
                value,
                anchor: Point::new(cross_x + options.y_label_offset, py),
            },
        })
        .collect();

    let origin_label = Label {
        value: cross_x_value,
        anchor: Point::new(
            cross_x + options.y_label_offset / 2.0,
            cross_y + options.x_label_offset,
        ),
    };

    let curve: Vec<Point> = xs
        .iter()
        .zip(&ys)
        .filter(|(_, y)| y.is_finite())
        .map(|(&vx, &vy)| Point::new(x.to_pixel(vx), y.to_pixel(vy)))
        .collect();

    let shown = if poly.is_zero() {
        "0".to_string()
    } else {
        poly.to_string()
    };
    let title = format!("P(X) = {} on [{}, {}]", shown, x_min, x_max);

    debug!(
        x_scale = x.scale,
        x_offset = x.offset,
        y_scale = y.scale,
        y_offset = y.offset,
        x_grid = x.grid_step,
        y_grid = y.grid_step,
        samples = curve.len(),
        "computed plot layout"
    );

    Ok(PlotLayout {
        width,
        height,
        title,
        title_anchor: Point::new(
            width / 2.0,
            height - options.margin - options.title_height / 3.0,
        ),
        plot_area,
        x,
        y,
        x_axis,
        y_axis,
        x_grid,
        y_grid,
        origin_label,
        curve,
    })
}

/// Grid positions walking outward from `start` in both directions until
/// leaving `(near, far)`, sorted by pixel.
fn walk_grid(start: f64, start_value: f64, axis: &AxisScale, near: f64, far: f64) -> Vec<(f64, f64)> {
    let step_px = axis.grid_step * axis.scale;
    if step_px.is_nan() || step_px < MIN_GRID_SPACING {
        debug!(step_px, "grid step too small, skipping grid lines");
        return Vec::new();
    }

    let mut lines = Vec::new();
    for direction in [1.0, -1.0] {
        let mut k = 1.0;
        loop {
            let px = start + direction * k * step_px;
            if px >= far || px <= near {
                break;
            }
            lines.push((px, start_value + direction * k * axis.grid_step));
            k += 1.0;
        }
    }

    lines.sort_by(|a, b| a.0.total_cmp(&b.0));
    lines
}
