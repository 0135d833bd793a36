//! Physical-unit calibration module
//!
//! Converts pixel measurements to centimetres using an externally supplied
//! pixels-per-centimetre scale. The scale is never derived from the image.

pub mod scale;

pub use scale::Calibration;
