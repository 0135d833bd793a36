//! # Lesion Metrics
//!
//! A Rust crate for extracting quantitative descriptors of a skin lesion from
//! a single photograph.
//!
//! This library measures a roughly centred lesion by:
//! - Sampling a circular region of interest and a surrounding skin ring
//! - Clustering region colours with deterministic k-means
//! - Selecting the lesion cluster by redness and darkness
//! - Measuring area, border irregularity, asymmetry, redness and CIEDE2000 contrast
//!
//! Results are deterministic: the same pixels always produce bit-identical
//! metrics.
//!
//! ## Example
//!
//! ```rust,no_run
//! use lesion_metrics::{analyze, Calibration, LesionMetrics};
//!
//! let photo = image::RgbaImage::new(640, 480);
//! let metrics: LesionMetrics = analyze(&photo, Calibration::pixels_per_cm(38.0))?;
//! println!("{metrics}");
//! # Ok::<(), lesion_metrics::PipelineError>(())
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod calibration;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod image_source;
pub mod measurement;
pub mod pipeline;
pub mod region;
pub mod segmentation;

pub use calibration::Calibration;
pub use color::{delta_e2000, ColorConverter, Lab};
pub use config::MetricsConfig;
pub use error::{PipelineError, Result};
pub use image_source::ImageSource;
pub use pipeline::{LesionPipeline, PipelineStage};

/// Quantitative lesion descriptors for one photograph
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LesionMetrics {
    /// Lesion pixel count inside the region of interest
    pub area_px: u32,
    /// Physical area, only when a usable pixels-per-cm scale was supplied
    pub area_cm2: Option<f64>,
    /// Mean R/G ratio over the lesion (0.0-3.0)
    pub redness: f64,
    /// Isoperimetric ratio perimeter² / (4π·area)
    pub border_irregularity: f64,
    /// Left/right pixel imbalance about the ROI centre column (0.0-1.0)
    pub asymmetry: f64,
    /// CIEDE2000 between lesion and surrounding skin
    pub delta_e: f64,
}

impl fmt::Display for LesionMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.area_cm2 {
            Some(cm2) => write!(f, "area {cm2:.2} cm²")?,
            None => write!(f, "area {} px", self.area_px)?,
        }
        write!(
            f,
            ", R/G {:.3}, border {:.3}, asym {:.3}, ΔE {:.2}",
            self.redness, self.border_irregularity, self.asymmetry, self.delta_e
        )
    }
}

/// Analyse a lesion photograph with the default configuration
///
/// This is the main entry point. The lesion is assumed to sit near the
/// image centre.
///
/// # Arguments
///
/// * `image` - Decoded photograph (`RgbaImage`, `DynamicImage`, or `Option` of either)
/// * `calibration` - Optional pixels-per-centimetre scale
///
/// # Returns
///
/// `LesionMetrics` with `area_cm2` set only for a usable scale
///
/// # Errors
///
/// Returns `PipelineError` if:
/// - No image is supplied, or it has zero width or height
/// - The region of interest holds fewer than 300 pixels
pub fn analyze<S>(image: &S, calibration: Calibration) -> Result<LesionMetrics>
where
    S: ImageSource + ?Sized,
{
    LesionPipeline::default().analyze(image, calibration)
}

/// Analyse a lesion photograph with a custom configuration
///
/// # Errors
///
/// Returns `PipelineError::InvalidParameter` for an invalid configuration,
/// otherwise the same errors as [`analyze`].
pub fn analyze_with_config<S>(
    image: &S,
    calibration: Calibration,
    config: MetricsConfig,
) -> Result<LesionMetrics>
where
    S: ImageSource + ?Sized,
{
    LesionPipeline::new(config)?.analyze(image, calibration)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metrics() -> LesionMetrics {
        LesionMetrics {
            area_px: 706,
            area_cm2: Some(7.06),
            redness: 1.2344,
            border_irregularity: 1.6794,
            asymmetry: 0.0216,
            delta_e: 45.8213,
        }
    }

    #[test]
    fn test_lesion_metrics_serialization() {
        let metrics = sample_metrics();
        let json = serde_json::to_string(&metrics).unwrap();
        let deserialized: LesionMetrics = serde_json::from_str(&json).unwrap();

        assert_eq!(metrics, deserialized);
    }

    #[test]
    fn test_uncalibrated_serializes_null_area() {
        let metrics = LesionMetrics {
            area_cm2: None,
            ..sample_metrics()
        };
        let value = serde_json::to_value(metrics).unwrap();
        assert!(value["area_cm2"].is_null());
        assert_eq!(value["area_px"], 706);
    }

    #[test]
    fn test_display_summary() {
        assert_eq!(
            sample_metrics().to_string(),
            "area 7.06 cm², R/G 1.234, border 1.679, asym 0.022, ΔE 45.82"
        );

        let uncalibrated = LesionMetrics {
            area_cm2: None,
            ..sample_metrics()
        };
        assert!(uncalibrated.to_string().starts_with("area 706 px, "));
    }
}
