//! Color conversion and perceptual difference module
//!
//! This module handles the sRGB → XYZ → L*a*b* pipeline and the CIEDE2000
//! color difference used for lesion/background contrast.

pub mod conversion;
pub mod difference;

pub use conversion::{ColorConverter, Lab};
pub use difference::delta_e2000;
