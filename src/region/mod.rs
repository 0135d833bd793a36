//! Region-of-interest module
//!
//! Defines the centred circular ROI presumed to contain the lesion, the
//! concentric background ring, and the pixel sampler that reads both.

pub mod geometry;
pub mod sampler;

pub use geometry::{BackgroundRing, Roi};
pub use sampler::{PixelSample, RegionSampler, RegionSamples};
