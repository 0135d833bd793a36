//! Error types for the lesion_metrics library

use thiserror::Error;

use crate::pipeline::PipelineStage;

/// Result type alias for lesion_metrics operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors raised while analysing a lesion photograph
#[derive(Error, Debug)]
pub enum PipelineError {
    /// No pixel buffer was supplied, or the buffer has zero width or height
    #[error("No image supplied")]
    MissingImage,

    /// Region of interest holds too few pixels for clustering
    #[error("Region of interest has insufficient samples: {found} pixels (minimum {required})")]
    InsufficientSamples { found: usize, required: usize },

    /// Pixels-per-centimetre scale is missing its positive, finite value.
    ///
    /// Never escapes [`crate::analyze`]: the pipeline downgrades it to an
    /// uncalibrated result.
    #[error("Invalid calibration: {pixels_per_cm} pixels per cm")]
    InvalidCalibration { pixels_per_cm: f64 },

    /// Invalid configuration parameter
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration file could not be read, written or parsed
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PipelineError {
    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// Recoverable errors can be fixed by the user supplying different input
    /// (a larger photograph, a corrected scale) without changing the engine.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PipelineError::MissingImage
                | PipelineError::InsufficientSamples { .. }
                | PipelineError::InvalidCalibration { .. }
        )
    }

    /// Pipeline stage in which this failure is entered
    pub fn stage(&self) -> PipelineStage {
        match self {
            PipelineError::InsufficientSamples { .. } => PipelineStage::Sampling,
            PipelineError::InvalidCalibration { .. } => PipelineStage::Calibrating,
            _ => PipelineStage::Init,
        }
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            PipelineError::MissingImage => {
                "No photo was provided. Please choose an image and try again.".to_string()
            }
            PipelineError::InsufficientSamples { found, required } => format!(
                "The photo is too small to analyse ({} pixels in the lesion area, {} needed). Please use a larger image.",
                found, required
            ),
            PipelineError::InvalidCalibration { .. } => {
                "The pixels-per-cm value must be a positive number. Area is shown in pixels only.".to_string()
            }
            _ => "Lesion analysis failed. Please check the settings and try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_samples_message() {
        let err = PipelineError::InsufficientSamples {
            found: 5,
            required: 300,
        };
        assert_eq!(
            err.to_string(),
            "Region of interest has insufficient samples: 5 pixels (minimum 300)"
        );
        assert!(err.user_message().contains("larger image"));
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(PipelineError::MissingImage.is_recoverable());
        assert!(PipelineError::InvalidCalibration { pixels_per_cm: -1.0 }.is_recoverable());
        assert!(!PipelineError::invalid_parameter("roi_fraction", 2.0).is_recoverable());
    }

    #[test]
    fn test_failure_stage() {
        assert_eq!(PipelineError::MissingImage.stage(), PipelineStage::Init);
        let err = PipelineError::InsufficientSamples {
            found: 0,
            required: 300,
        };
        assert_eq!(err.stage(), PipelineStage::Sampling);
    }

    #[test]
    fn test_config_error_keeps_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let err = PipelineError::config("Failed to read configuration", io);
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "Configuration error: Failed to read configuration");
    }
}
