//! ROI and background-ring pixel sampling
//!
//! Walks the image once over the bounding square of the background ring,
//! collecting raw RGB samples inside the ROI (row-major order) and the Lab
//! values of pixels inside the ring.

use image::RgbaImage;
use tracing::{debug, warn};

use super::geometry::{BackgroundRing, Roi};
use crate::color::{ColorConverter, Lab};
use crate::config::RegionConfig;
use crate::{PipelineError, Result};

/// One ROI pixel with its coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelSample {
    pub x: u32,
    pub y: u32,
    pub rgb: [u8; 3],
}

impl PixelSample {
    pub fn red(&self) -> u8 {
        self.rgb[0]
    }

    pub fn green(&self) -> u8 {
        self.rgb[1]
    }
}

/// Everything the later stages need from the image
#[derive(Debug, Clone)]
pub struct RegionSamples {
    pub roi: Roi,
    pub ring: BackgroundRing,
    /// ROI pixels in row-major order
    pub lesion: Vec<PixelSample>,
    /// Lab values of ring pixels; raw ring pixels are not retained
    pub background: Vec<Lab>,
}

/// Region sampler deriving the ROI and ring from image dimensions
#[derive(Debug, Clone)]
pub struct RegionSampler {
    config: RegionConfig,
    converter: ColorConverter,
}

impl Default for RegionSampler {
    fn default() -> Self {
        Self::new(RegionConfig::default())
    }
}

impl RegionSampler {
    pub fn new(config: RegionConfig) -> Self {
        Self {
            config,
            converter: ColorConverter::new(),
        }
    }

    /// ROI and ring for an image of the given size
    pub fn regions(&self, width: u32, height: u32) -> (Roi, BackgroundRing) {
        let roi = Roi::from_dimensions(width, height, self.config.roi_fraction);
        let ring = roi.ring(self.config.ring_inner_factor, self.config.ring_outer_factor);
        (roi, ring)
    }

    /// Collect ROI samples and background Lab values
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::InsufficientSamples` if the ROI holds fewer
    /// than `min_samples` pixels.
    pub fn sample(&self, image: &RgbaImage) -> Result<RegionSamples> {
        let (width, height) = image.dimensions();
        let (roi, ring) = self.regions(width, height);

        let reach = ring.outer_radius.max(roi.radius) as i64;
        let x_min = (roi.center_x as i64 - reach).max(0);
        let x_max = (roi.center_x as i64 + reach).min(width as i64 - 1);
        let y_min = (roi.center_y as i64 - reach).max(0);
        let y_max = (roi.center_y as i64 + reach).min(height as i64 - 1);

        let mut lesion = Vec::new();
        let mut background = Vec::new();

        for y in y_min..=y_max {
            for x in x_min..=x_max {
                let in_roi = roi.contains(x, y);
                let in_ring = ring.contains(x, y);
                if !in_roi && !in_ring {
                    continue;
                }

                let [r, g, b, _] = image.get_pixel(x as u32, y as u32).0;
                if in_roi {
                    lesion.push(PixelSample {
                        x: x as u32,
                        y: y as u32,
                        rgb: [r, g, b],
                    });
                }
                if in_ring {
                    background.push(self.converter.rgb_to_lab(r, g, b));
                }
            }
        }

        debug!(
            roi_radius = roi.radius,
            ring_inner = ring.inner_radius,
            ring_outer = ring.outer_radius,
            lesion_samples = lesion.len(),
            background_samples = background.len(),
            "Sampled region of interest"
        );

        if lesion.len() < self.config.min_samples {
            warn!(
                found = lesion.len(),
                required = self.config.min_samples,
                "Region of interest too small for clustering"
            );
            return Err(PipelineError::InsufficientSamples {
                found: lesion.len(),
                required: self.config.min_samples,
            });
        }

        Ok(RegionSamples {
            roi,
            ring,
            lesion,
            background,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_sample_counts_for_square_image() {
        let image = RgbaImage::from_pixel(101, 101, Rgba([200, 150, 120, 255]));
        let samples = RegionSampler::default().sample(&image).unwrap();

        // Lattice points with x² + y² ≤ 30²
        assert_eq!(samples.lesion.len(), 2821);
        assert_eq!(samples.background.len(), 2176);
    }

    #[test]
    fn test_samples_are_row_major() {
        let image = RgbaImage::from_pixel(101, 101, Rgba([0, 0, 0, 255]));
        let samples = RegionSampler::default().sample(&image).unwrap();

        let first = samples.lesion.first().unwrap();
        assert_eq!((first.x, first.y), (50, 20));
        let last = samples.lesion.last().unwrap();
        assert_eq!((last.x, last.y), (50, 80));
        assert!(samples
            .lesion
            .windows(2)
            .all(|w| (w[0].y, w[0].x) < (w[1].y, w[1].x)));
    }

    #[test]
    fn test_alpha_is_ignored() {
        let image = RgbaImage::from_pixel(101, 101, Rgba([10, 20, 30, 0]));
        let samples = RegionSampler::default().sample(&image).unwrap();
        assert!(samples.lesion.iter().all(|s| s.rgb == [10, 20, 30]));
    }

    #[test]
    fn test_ring_clipped_by_wide_image_edges() {
        // 400×60: radius 18, ring reaches 26 pixels up and down from row 30
        let image = RgbaImage::from_pixel(400, 60, Rgba([90, 90, 90, 255]));
        let samples = RegionSampler::default().sample(&image).unwrap();
        assert_eq!(samples.roi.radius, 18);
        assert!(!samples.background.is_empty());
    }

    #[test]
    fn test_insufficient_samples() {
        let image = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
        let err = RegionSampler::default().sample(&image).unwrap_err();
        match err {
            PipelineError::InsufficientSamples { found, required } => {
                assert_eq!(found, 5);
                assert_eq!(required, 300);
            }
            other => panic!("Expected InsufficientSamples, got: {:?}", other),
        }
    }
}
