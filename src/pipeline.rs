//! Lesion analysis pipeline
//!
//! Orchestrates one synchronous pass over a decoded photograph:
//!
//! `Init → Sampling → Clustering → Scoring → Measuring → Calibrating → Done`
//!
//! A missing image fails from `Init` and an undersized ROI fails from
//! `Sampling`. There are no partial results. All intermediate state is local
//! to the call, so a pipeline can be shared between threads.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calibration::Calibration;
use crate::config::MetricsConfig;
use crate::image_source::ImageSource;
use crate::measurement::{ColorimetricExtractor, LesionMask, ShapeMetrics};
use crate::region::RegionSampler;
use crate::segmentation::{ClusterSelector, KMeansSegmenter};
use crate::{LesionMetrics, PipelineError, Result};

/// Stage of a single analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelineStage {
    Init,
    Sampling,
    Clustering,
    Scoring,
    Measuring,
    Calibrating,
    Done,
    Failed,
}

/// Lesion metrics pipeline
///
/// Built once from a [`MetricsConfig`] and reused for any number of images.
#[derive(Debug, Clone)]
pub struct LesionPipeline {
    config: MetricsConfig,
    sampler: RegionSampler,
    segmenter: KMeansSegmenter,
    selector: ClusterSelector,
    extractor: ColorimetricExtractor,
}

impl Default for LesionPipeline {
    fn default() -> Self {
        Self::with_valid_config(MetricsConfig::default())
    }
}

impl LesionPipeline {
    /// Create a pipeline from a configuration
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::InvalidParameter` if the configuration fails
    /// validation.
    pub fn new(config: MetricsConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: MetricsConfig) -> Self {
        Self {
            sampler: RegionSampler::new(config.region.clone()),
            segmenter: KMeansSegmenter::with_iterations(config.clustering.iterations),
            selector: ClusterSelector::new(config.scoring.clone()),
            extractor: ColorimetricExtractor::new(config.measurement.clone()),
            config,
        }
    }

    pub fn config(&self) -> &MetricsConfig {
        &self.config
    }

    /// Analyse one photograph
    ///
    /// # Arguments
    ///
    /// * `image` - Decoded photograph, lesion roughly centred
    /// * `calibration` - Optional pixels-per-centimetre scale
    ///
    /// # Errors
    ///
    /// - `PipelineError::MissingImage` if the source holds no pixels
    /// - `PipelineError::InsufficientSamples` if the ROI is too small
    ///
    /// An unusable calibration is not an error; `area_cm2` is left `None`.
    pub fn analyze<S>(&self, image: &S, calibration: Calibration) -> Result<LesionMetrics>
    where
        S: ImageSource + ?Sized,
    {
        debug!(stage = ?PipelineStage::Init, "Starting lesion analysis");
        let image = image.rgba().ok_or_else(|| self.fail(PipelineError::MissingImage))?;
        if image.width() == 0 || image.height() == 0 {
            return Err(self.fail(PipelineError::MissingImage));
        }

        debug!(
            stage = ?PipelineStage::Sampling,
            width = image.width(),
            height = image.height()
        );
        let samples = self.sampler.sample(&image).map_err(|e| self.fail(e))?;

        debug!(stage = ?PipelineStage::Clustering, samples = samples.lesion.len());
        let clustering = self.segmenter.segment(&samples.lesion);

        debug!(stage = ?PipelineStage::Scoring, sizes = ?clustering.cluster_sizes());
        let lesion = self.selector.select(&clustering.centroids);
        debug_assert!(lesion.lab.is_finite());

        debug!(stage = ?PipelineStage::Measuring, lesion_cluster = lesion.index);
        let mask = LesionMask::from_assignments(
            samples.roi,
            &samples.lesion,
            &clustering.assignments,
            lesion.index,
        );
        let shape = ShapeMetrics::measure(&mask);
        let colour = self
            .extractor
            .extract(&samples.lesion, &mask, lesion.lab, &samples.background);

        debug!(stage = ?PipelineStage::Calibrating);
        let area_cm2 = match calibration.validate() {
            Ok(Some(pixels_per_cm)) => {
                let area_cm2 = calibration.area_cm2(shape.area_px);
                if area_cm2.is_none() {
                    debug!(pixels_per_cm, "Ignoring calibration, scaled area is not finite");
                }
                area_cm2
            }
            Ok(None) => None,
            Err(e) => {
                debug!(error = %e, "Ignoring calibration");
                None
            }
        };

        let metrics = LesionMetrics {
            area_px: shape.area_px,
            area_cm2,
            redness: colour.redness,
            border_irregularity: shape.border_irregularity,
            asymmetry: shape.asymmetry,
            delta_e: colour.delta_e,
        };
        debug!(stage = ?PipelineStage::Done, %metrics);
        Ok(metrics)
    }

    /// Analyse many photographs in parallel, one result per input in order
    #[cfg(feature = "rayon")]
    pub fn analyze_batch<S>(
        &self,
        images: &[S],
        calibration: Calibration,
    ) -> Vec<Result<LesionMetrics>>
    where
        S: ImageSource + Sync,
    {
        use rayon::prelude::*;

        images
            .par_iter()
            .map(|image| self.analyze(image, calibration))
            .collect()
    }

    fn fail(&self, error: PipelineError) -> PipelineError {
        debug!(
            stage = ?PipelineStage::Failed,
            from = ?error.stage(),
            error = %error,
            "Lesion analysis failed"
        );
        error
    }
}
