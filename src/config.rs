//! Configuration structures for the lesion metrics pipeline.
//!
//! This module defines the tunable parameters of the analysis, organized
//! into logical groups for sampling, clustering, scoring, and measurement.
//! Defaults reproduce the reference heuristics exactly; changing them
//! changes every downstream metric.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use lesion_metrics::MetricsConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = MetricsConfig::from_json_file(Path::new("metrics.json"))?;
//!
//! // Or use defaults
//! let config = MetricsConfig::default();
//! # Ok::<(), lesion_metrics::PipelineError>(())
//! ```
//!
//! # Configuration Sections
//!
//! - [`RegionConfig`]: ROI and background ring geometry
//! - [`ClusteringConfig`]: k-means iteration count
//! - [`ScoringConfig`]: lesion cluster selection weights
//! - [`MeasurementConfig`]: per-pixel metric limits
//!
//! The cluster count is fixed at [`crate::constants::clustering::CLUSTER_COUNT`]
//! and is not configurable.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{clustering, measurement, region, scoring};
use crate::{PipelineError, Result};

/// Complete pipeline configuration for lesion analysis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Region sampling configuration
    #[serde(default)]
    pub region: RegionConfig,

    /// Clustering configuration
    #[serde(default)]
    pub clustering: ClusteringConfig,

    /// Lesion cluster scoring configuration
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Measurement configuration
    #[serde(default)]
    pub measurement: MeasurementConfig,
}

/// ROI and background ring geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionConfig {
    /// ROI radius as a fraction of the shorter image side (0.0-0.5)
    pub roi_fraction: f64,

    /// Ring inner radius as a multiple of the ROI radius
    pub ring_inner_factor: f64,

    /// Ring outer radius as a multiple of the ROI radius
    pub ring_outer_factor: f64,

    /// Minimum ROI pixel count; smaller regions fail the analysis
    pub min_samples: usize,
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            roi_fraction: region::ROI_FRACTION,
            ring_inner_factor: region::RING_INNER_FACTOR,
            ring_outer_factor: region::RING_OUTER_FACTOR,
            min_samples: region::MIN_SAMPLES,
        }
    }
}

/// K-means parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteringConfig {
    /// Number of assign/update rounds; there is no convergence check
    pub iterations: usize,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            iterations: clustering::ITERATIONS,
        }
    }
}

/// Lesion cluster scoring weights.
///
/// `score = redness_weight * (R/G) + darkness_weight * (1 - L*/100)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weight of the centroid R/G ratio
    pub redness_weight: f64,

    /// Weight of the centroid darkness
    pub darkness_weight: f64,

    /// Centroid green at or below which R/G is taken as zero
    pub min_green: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            redness_weight: scoring::REDNESS_WEIGHT,
            darkness_weight: scoring::DARKNESS_WEIGHT,
            min_green: scoring::MIN_GREEN,
        }
    }
}

/// Per-pixel measurement limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementConfig {
    /// Upper clamp of the mean R/G redness
    pub redness_ceiling: f64,
}

impl Default for MeasurementConfig {
    fn default() -> Self {
        Self {
            redness_ceiling: measurement::REDNESS_CEILING,
        }
    }
}

impl MetricsConfig {
    /// Check every parameter is in its valid range
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::InvalidParameter` naming the first bad value.
    pub fn validate(&self) -> Result<()> {
        let region = &self.region;
        if !(region.roi_fraction > 0.0 && region.roi_fraction <= 0.5) {
            return Err(PipelineError::invalid_parameter(
                "region.roi_fraction",
                region.roi_fraction,
            ));
        }
        if !(region.ring_inner_factor.is_finite() && region.ring_inner_factor >= 1.0) {
            return Err(PipelineError::invalid_parameter(
                "region.ring_inner_factor",
                region.ring_inner_factor,
            ));
        }
        if !(region.ring_outer_factor.is_finite()
            && region.ring_outer_factor >= region.ring_inner_factor)
        {
            return Err(PipelineError::invalid_parameter(
                "region.ring_outer_factor",
                region.ring_outer_factor,
            ));
        }
        if region.min_samples == 0 {
            return Err(PipelineError::invalid_parameter("region.min_samples", 0));
        }
        if self.clustering.iterations == 0 {
            return Err(PipelineError::invalid_parameter("clustering.iterations", 0));
        }

        let scoring = &self.scoring;
        for (name, value) in [
            ("scoring.redness_weight", scoring.redness_weight),
            ("scoring.darkness_weight", scoring.darkness_weight),
            ("scoring.min_green", scoring.min_green),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(PipelineError::invalid_parameter(name, value));
            }
        }

        let ceiling = self.measurement.redness_ceiling;
        if !(ceiling.is_finite() && ceiling > 0.0) {
            return Err(PipelineError::invalid_parameter(
                "measurement.redness_ceiling",
                ceiling,
            ));
        }

        Ok(())
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PipelineError::config(format!("Failed to read {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            PipelineError::config(format!("Failed to parse {}", path.display()), e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PipelineError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            PipelineError::config(format!("Failed to write {}", path.display()), e)
        })?;
        Ok(())
    }
}
