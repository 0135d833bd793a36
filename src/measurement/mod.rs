//! Lesion measurement module
//!
//! Builds the binary lesion mask and derives shape descriptors (area,
//! perimeter, border irregularity, asymmetry) and colour descriptors
//! (redness, background colour, CIEDE2000 contrast).

pub mod colorimetry;
pub mod shape;

pub use colorimetry::{ColorimetricExtractor, ColorimetricMetrics};
pub use shape::{LesionMask, ShapeMetrics};
