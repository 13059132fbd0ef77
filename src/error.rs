use thiserror::Error;

/// Errors surfaced by polynomial division, plot layout and canvas bindings.
///
/// Numeric degeneracies (tiny leading coefficients, near-repeated roots) are
/// not errors: they show up as ordinary `f64` results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolyError {
    /// The divisor of a polynomial division is the zero polynomial.
    #[error("division by the zero polynomial")]
    DivisionByZero,
    /// The target canvas has no usable plotting area.
    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvasSize { width: f64, height: f64 },
    /// The plotting interval is empty, reversed or not finite.
    #[error("invalid plot interval [{start}, {end})")]
    InvalidInterval { start: f64, end: f64 },
    /// A canvas binding failed to draw or encode.
    #[error("canvas error: {0}")]
    Canvas(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, PolyError>;
