//! Redness and lesion/background colour contrast

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::shape::LesionMask;
use crate::color::{delta_e2000, Lab};
use crate::config::MeasurementConfig;
use crate::region::PixelSample;

/// Colour descriptors of the lesion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorimetricMetrics {
    /// Mean R/G over lesion pixels with non-zero green, in [0, ceiling]
    pub redness: f64,
    /// Mean Lab of the background ring
    pub background: Lab,
    /// CIEDE2000 between the lesion centroid and the background
    pub delta_e: f64,
}

/// Extractor for redness, background colour and ΔE
#[derive(Debug, Clone)]
pub struct ColorimetricExtractor {
    redness_ceiling: f64,
}

impl Default for ColorimetricExtractor {
    fn default() -> Self {
        Self::new(MeasurementConfig::default())
    }
}

impl ColorimetricExtractor {
    pub fn new(config: MeasurementConfig) -> Self {
        Self {
            redness_ceiling: config.redness_ceiling,
        }
    }

    /// Mean R/G of masked samples, clamped to `[0, ceiling]`
    ///
    /// Pixels with G = 0 are skipped rather than propagating infinity; with
    /// no eligible pixel the redness is zero.
    pub fn redness(&self, samples: &[PixelSample], mask: &LesionMask) -> f64 {
        let (sum, count) = samples
            .iter()
            .zip(mask.members())
            .filter(|(sample, &member)| member && sample.green() > 0)
            .fold((0.0, 0usize), |(sum, count), (sample, _)| {
                (sum + sample.red() as f64 / sample.green() as f64, count + 1)
            });

        if count == 0 {
            return 0.0;
        }
        (sum / count as f64).clamp(0.0, self.redness_ceiling)
    }

    /// Component-wise mean of the background Lab values
    ///
    /// An empty ring yields `{0, 0, 0}`. Callers should treat an all-zero
    /// background as low confidence; it is not an error.
    pub fn background_lab(&self, background: &[Lab]) -> Lab {
        if background.is_empty() {
            warn!("Background ring is empty, defaulting to black");
            return Lab::default();
        }

        let n = background.len() as f64;
        let (l, a, b) = background
            .iter()
            .fold((0.0, 0.0, 0.0), |(l, a, b), lab| (l + lab.l, a + lab.a, b + lab.b));
        Lab::new(l / n, a / n, b / n)
    }

    /// Compute redness, background colour and contrast
    pub fn extract(
        &self,
        samples: &[PixelSample],
        mask: &LesionMask,
        lesion_lab: Lab,
        background: &[Lab],
    ) -> ColorimetricMetrics {
        let redness = self.redness(samples, mask);
        let background = self.background_lab(background);
        let delta_e = delta_e2000(lesion_lab, background);

        debug!(redness, delta_e, background_l = background.l, "Colorimetric metrics");

        ColorimetricMetrics {
            redness,
            background,
            delta_e,
        }
    }
}
