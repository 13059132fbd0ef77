//! Real-coefficient polynomials in one variable.
//!
//! - [`Poly`]: canonical coefficient vector with arithmetic, division,
//!   calculus, evaluation and schoolbook display.
//! - [`find_real_roots`]: closed-form real roots up to degree four.
//! - [`compute_layout`]: value-to-pixel mapping of a polynomial's graph,
//!   drawn through the [`Canvas`] trait.

pub mod error;
pub mod plot;
pub mod structures;
pub mod utils;

pub use error::{PolyError, Result};

pub use plot::canvas::{render, Canvas, ImageFormat, ImageOptions, RenderOptions, Rgb};
pub use plot::layout::{
    compute_layout, compute_layout_with, AxisPosition, LayoutOptions, PlotLayout, Point,
    MAX_CANVAS_SIZE,
};
#[cfg(feature = "plotters")]
pub use plot::bitmap::{plot_to_file, BitmapCanvas};

pub use structures::poly::Poly;
pub use structures::roots::{find_real_roots, RootClass};
pub use utils::grid_step;
