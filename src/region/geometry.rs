//! Circular region of interest and background annulus

use serde::{Deserialize, Serialize};

/// Centred circular region presumed to contain the lesion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roi {
    pub center_x: u32,
    pub center_y: u32,
    pub radius: u32,
}

impl Roi {
    /// Derive the ROI from image dimensions
    ///
    /// Centre is `(floor(w/2), floor(h/2))`, radius `floor(min(w, h) * fraction)`.
    pub fn from_dimensions(width: u32, height: u32, fraction: f64) -> Self {
        Self {
            center_x: width / 2,
            center_y: height / 2,
            radius: (width.min(height) as f64 * fraction).floor() as u32,
        }
    }

    /// Whether pixel `(x, y)` lies inside the circle (boundary inclusive)
    ///
    /// Takes signed coordinates so neighbours of edge pixels can be tested.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        let dx = x - self.center_x as i64;
        let dy = y - self.center_y as i64;
        let r = self.radius as i64;
        dx * dx + dy * dy <= r * r
    }

    /// Side length of the axis-aligned bounding square
    pub fn diameter(&self) -> u32 {
        2 * self.radius + 1
    }

    /// Top-left corner of the bounding square, possibly negative
    pub fn origin(&self) -> (i64, i64) {
        (
            self.center_x as i64 - self.radius as i64,
            self.center_y as i64 - self.radius as i64,
        )
    }

    /// Concentric annulus sampled for background skin colour
    pub fn ring(&self, inner_factor: f64, outer_factor: f64) -> BackgroundRing {
        BackgroundRing {
            center_x: self.center_x,
            center_y: self.center_y,
            inner_radius: (self.radius as f64 * inner_factor).floor() as u32,
            outer_radius: (self.radius as f64 * outer_factor).floor() as u32,
        }
    }
}

/// Annulus around the ROI used to estimate surrounding skin colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundRing {
    pub center_x: u32,
    pub center_y: u32,
    pub inner_radius: u32,
    pub outer_radius: u32,
}

impl BackgroundRing {
    /// Whether pixel `(x, y)` satisfies `inner² ≤ d² ≤ outer²`
    pub fn contains(&self, x: i64, y: i64) -> bool {
        let dx = x - self.center_x as i64;
        let dy = y - self.center_y as i64;
        let d2 = dx * dx + dy * dy;
        let inner = self.inner_radius as i64;
        let outer = self.outer_radius as i64;
        d2 >= inner * inner && d2 <= outer * outer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roi_from_square_image() {
        let roi = Roi::from_dimensions(101, 101, 0.3);
        assert_eq!(
            roi,
            Roi {
                center_x: 50,
                center_y: 50,
                radius: 30
            }
        );
        assert_eq!(roi.diameter(), 61);
        assert_eq!(roi.origin(), (20, 20));
    }

    #[test]
    fn test_roi_uses_shorter_side() {
        let roi = Roi::from_dimensions(640, 480, 0.3);
        assert_eq!(roi.center_x, 320);
        assert_eq!(roi.center_y, 240);
        assert_eq!(roi.radius, 144);
    }

    #[test]
    fn test_roi_contains_boundary() {
        let roi = Roi::from_dimensions(101, 101, 0.3);
        assert!(roi.contains(80, 50));
        assert!(!roi.contains(81, 50));
        assert!(roi.contains(71, 71));
        assert!(!roi.contains(72, 72));
        assert!(roi.contains(50, 20));
    }

    #[test]
    fn test_ring_radii_are_floored() {
        let ring = Roi::from_dimensions(101, 101, 0.3).ring(1.15, 1.45);
        assert_eq!(ring.inner_radius, 34);
        assert_eq!(ring.outer_radius, 43);
        assert!(ring.contains(50 + 34, 50));
        assert!(ring.contains(50, 50 - 43));
        assert!(!ring.contains(50 + 33, 50));
        assert!(!ring.contains(50 + 44, 50));
    }

    #[test]
    fn test_tiny_image_radius() {
        let roi = Roi::from_dimensions(4, 4, 0.3);
        assert_eq!(roi.radius, 1);
    }
}
