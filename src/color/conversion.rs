//! Color space conversion utilities
//!
//! Converts 8-bit sRGB to CIE L*a*b* through linear RGB and CIE XYZ (D65):
//! - sRGB inverse gamma (piecewise linear / power 2.4)
//! - sRGB primaries to XYZ via the 3×3 D65 matrix
//! - XYZ to Lab against the D65 reference white
//!
//! Algorithm tag: `algo-srgb-d65-lab`

use palette::white_point::D65;
use serde::{Deserialize, Serialize};

use crate::constants::{lab, srgb, D65_WHITE_POINT_XYZ};

/// CIE L*a*b* colour under the D65 illuminant
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Lab {
    /// Lightness, 0 (black) to 100 (diffuse white)
    pub l: f64,
    /// Green (negative) to red (positive)
    pub a: f64,
    /// Blue (negative) to yellow (positive)
    pub b: f64,
}

impl Lab {
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Chroma C*ab = sqrt(a² + b²)
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// True when every component is a finite number
    pub fn is_finite(&self) -> bool {
        self.l.is_finite() && self.a.is_finite() && self.b.is_finite()
    }
}

impl From<Lab> for palette::Lab<D65, f64> {
    fn from(color: Lab) -> Self {
        palette::Lab::new(color.l, color.a, color.b)
    }
}

impl From<palette::Lab<D65, f64>> for Lab {
    fn from(color: palette::Lab<D65, f64>) -> Self {
        Lab::new(color.l, color.a, color.b)
    }
}

/// sRGB to CIE Lab converter
#[derive(Debug, Clone, Copy)]
pub struct ColorConverter {
    /// Reference white in XYZ (always D65)
    white_point: [f64; 3],
}

impl Default for ColorConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorConverter {
    /// Create a new color converter with D65 as reference white
    pub fn new() -> Self {
        Self {
            white_point: D65_WHITE_POINT_XYZ,
        }
    }

    /// Convert RGB (0-255) to Lab color space
    ///
    /// Total over all `u8` triples; the result is always finite.
    pub fn rgb_to_lab(&self, r: u8, g: u8, b: u8) -> Lab {
        self.rgb_f64_to_lab(r as f64, g as f64, b as f64)
    }

    /// Convert fractional RGB on the 0-255 scale to Lab
    ///
    /// Cluster centroids are channel means and are generally non-integral,
    /// so they go through this entry point rather than [`Self::rgb_to_lab`].
    pub fn rgb_f64_to_lab(&self, r: f64, g: f64, b: f64) -> Lab {
        let xyz = self.rgb_to_xyz(r, g, b);
        self.xyz_to_lab(xyz)
    }

    /// Convert RGB (0-255 scale) to CIE XYZ under D65
    pub fn rgb_to_xyz(&self, r: f64, g: f64, b: f64) -> [f64; 3] {
        let linear = [
            srgb_to_linear(r / 255.0),
            srgb_to_linear(g / 255.0),
            srgb_to_linear(b / 255.0),
        ];

        let mut xyz = [0.0; 3];
        for (out, row) in xyz.iter_mut().zip(srgb::TO_XYZ.iter()) {
            *out = row[0] * linear[0] + row[1] * linear[1] + row[2] * linear[2];
        }
        xyz
    }

    /// Convert CIE XYZ to Lab relative to the converter's reference white
    pub fn xyz_to_lab(&self, xyz: [f64; 3]) -> Lab {
        let fx = lab_f(xyz[0] / self.white_point[0]);
        let fy = lab_f(xyz[1] / self.white_point[1]);
        let fz = lab_f(xyz[2] / self.white_point[2]);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

/// sRGB inverse companding of a [0, 1] channel value
fn srgb_to_linear(c: f64) -> f64 {
    if c <= srgb::LINEAR_THRESHOLD {
        c / srgb::LINEAR_SLOPE
    } else {
        ((c + srgb::GAMMA_OFFSET) / (1.0 + srgb::GAMMA_OFFSET)).powf(srgb::GAMMA_EXPONENT)
    }
}

/// Lab companding function f(t)
fn lab_f(t: f64) -> f64 {
    if t > lab::DELTA_CUBED {
        t.cbrt()
    } else {
        t / (3.0 * lab::DELTA * lab::DELTA) + lab::LINEAR_OFFSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::{FromColor, Srgb};

    #[test]
    fn test_rgb_to_lab_black() {
        let converter = ColorConverter::new();
        let lab = converter.rgb_to_lab(0, 0, 0);
        assert!(lab.l.abs() < 1e-9);
        assert_eq!(lab.a, 0.0);
        assert_eq!(lab.b, 0.0);
    }

    #[test]
    fn test_rgb_to_lab_white() {
        let converter = ColorConverter::new();
        let lab = converter.rgb_to_lab(255, 255, 255);
        assert!((lab.l - 100.0).abs() < 0.01);
        assert!(lab.a.abs() < 0.05);
        assert!(lab.b.abs() < 0.05);
    }

    #[test]
    fn test_rgb_to_lab_pure_red() {
        let converter = ColorConverter::new();
        let lab = converter.rgb_to_lab(255, 0, 0);
        assert!((lab.l - 53.23).abs() < 0.05);
        assert!((lab.a - 80.11).abs() < 0.05);
        assert!((lab.b - 67.22).abs() < 0.05);
    }

    #[test]
    fn test_linear_segment_near_black() {
        // 10/255 is below the 0.04045 threshold, so Y follows the linear branch
        let converter = ColorConverter::new();
        let lab = converter.rgb_to_lab(10, 10, 10);
        assert!(lab.l > 0.0 && lab.l < 5.0);
        assert!(lab.is_finite());
    }

    #[test]
    fn test_fractional_matches_integral() {
        let converter = ColorConverter::new();
        assert_eq!(
            converter.rgb_to_lab(120, 80, 60),
            converter.rgb_f64_to_lab(120.0, 80.0, 60.0)
        );
    }

    #[test]
    fn test_matches_palette_conversion() {
        let converter = ColorConverter::new();
        let samples = [
            (255u8, 0u8, 0u8),
            (0, 255, 0),
            (0, 0, 255),
            (225, 185, 165),
            (170, 60, 60),
            (12, 200, 90),
            (128, 128, 128),
        ];

        for (r, g, b) in samples {
            let ours = converter.rgb_to_lab(r, g, b);
            let srgb = Srgb::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
            let reference: palette::Lab<D65, f64> = palette::Lab::from_color(srgb);

            assert!((ours.l - reference.l).abs() < 0.5, "L mismatch for {:?}", (r, g, b));
            assert!((ours.a - reference.a).abs() < 0.5, "a mismatch for {:?}", (r, g, b));
            assert!((ours.b - reference.b).abs() < 0.5, "b mismatch for {:?}", (r, g, b));
        }
    }

    #[test]
    fn test_palette_roundtrip_preserves_components() {
        let lab = Lab::new(41.38, 45.07, 24.51);
        let palette_lab: palette::Lab<D65, f64> = lab.into();
        assert_eq!(Lab::from(palette_lab), lab);
    }

    #[test]
    fn test_chroma() {
        let lab = Lab::new(50.0, 3.0, 4.0);
        assert!((lab.chroma() - 5.0).abs() < 1e-12);
    }
}
