//! Pixels-per-centimetre scale

use serde::{Deserialize, Serialize};

use crate::{PipelineError, Result};

/// Optional pixel-to-physical scale for one analysis
///
/// Absent, non-positive or non-finite scales leave the result uncalibrated
/// (`area_cm2 = None`); they never fail an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Calibration {
    pub pixels_per_cm: Option<f64>,
}

impl Calibration {
    /// No physical scale; only pixel measurements are reported
    pub const fn none() -> Self {
        Self {
            pixels_per_cm: None,
        }
    }

    /// Scale supplied by the user, e.g. measured against a ruler in frame
    pub const fn pixels_per_cm(pixels_per_cm: f64) -> Self {
        Self {
            pixels_per_cm: Some(pixels_per_cm),
        }
    }

    /// Check the scale
    ///
    /// Returns `Ok(None)` when no scale was given and `Ok(Some(ppcm))` for a
    /// usable one.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::InvalidCalibration` for a zero, negative or
    /// non-finite scale.
    pub fn validate(&self) -> Result<Option<f64>> {
        match self.pixels_per_cm {
            None => Ok(None),
            Some(ppcm) if ppcm.is_finite() && ppcm > 0.0 => Ok(Some(ppcm)),
            Some(ppcm) => Err(PipelineError::InvalidCalibration { pixels_per_cm: ppcm }),
        }
    }

    /// Physical area in cm² for a pixel area, when a usable scale is set
    ///
    /// Scales so small that ppcm² underflows, or areas that overflow, give
    /// `None` rather than a non-finite area.
    pub fn area_cm2(&self, area_px: u32) -> Option<f64> {
        let ppcm = self.validate().ok()??;
        let px_per_cm2 = ppcm * ppcm;
        if !px_per_cm2.is_normal() {
            return None;
        }
        let area = area_px as f64 / px_per_cm2;
        area.is_finite().then_some(area)
    }
}

impl From<Option<f64>> for Calibration {
    fn from(pixels_per_cm: Option<f64>) -> Self {
        Self { pixels_per_cm }
    }
}
