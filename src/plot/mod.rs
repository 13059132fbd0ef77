//! Plot layout and drawing.
//!
//! [`layout`] maps a polynomial onto pixels without drawing anything,
//! [`canvas`] turns the resulting record into drawing instructions and
//! `bitmap` (feature `plotters`) writes them to an image file.

pub mod canvas;
pub mod layout;

#[cfg(feature = "plotters")]
pub mod bitmap;
