//! Lesion mask and shape descriptors
//!
//! The mask lives on the ROI's bounding square. Perimeter is the number of
//! 4-neighbour edges between a lesion pixel and anything that is not a
//! lesion pixel (background inside the ROI, or outside the ROI circle).
//!
//! Algorithm tag: `algo-mask-isoperimetric`

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::region::{PixelSample, Roi};

const NEIGHBOURS: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Outside,
    Background,
    Lesion,
}

/// Binary lesion mask over the ROI
#[derive(Debug, Clone)]
pub struct LesionMask {
    roi: Roi,
    side: usize,
    cells: Vec<Cell>,
    /// Mask value per ROI sample, in sample order
    members: Vec<bool>,
}

impl LesionMask {
    /// Build the mask from the final k-means assignment
    ///
    /// `samples` and `assignments` are parallel; a sample is lesion iff its
    /// assignment equals `lesion_index`.
    pub fn from_assignments(
        roi: Roi,
        samples: &[PixelSample],
        assignments: &[usize],
        lesion_index: usize,
    ) -> Self {
        let side = roi.diameter() as usize;
        let mut cells = vec![Cell::Outside; side * side];
        let (x0, y0) = roi.origin();

        let members: Vec<bool> = samples
            .iter()
            .zip(assignments)
            .map(|(sample, &k)| {
                let is_lesion = k == lesion_index;
                let col = (sample.x as i64 - x0) as usize;
                let row = (sample.y as i64 - y0) as usize;
                cells[row * side + col] = if is_lesion {
                    Cell::Lesion
                } else {
                    Cell::Background
                };
                is_lesion
            })
            .collect();

        Self {
            roi,
            side,
            cells,
            members,
        }
    }

    /// Mask flags aligned with the ROI samples
    pub fn members(&self) -> &[bool] {
        &self.members
    }

    /// Whether image pixel `(x, y)` is a lesion pixel
    pub fn is_lesion(&self, x: i64, y: i64) -> bool {
        self.cell(x, y) == Cell::Lesion
    }

    fn cell(&self, x: i64, y: i64) -> Cell {
        let (x0, y0) = self.roi.origin();
        let (col, row) = (x - x0, y - y0);
        let side = self.side as i64;
        if col < 0 || row < 0 || col >= side || row >= side || !self.roi.contains(x, y) {
            return Cell::Outside;
        }
        self.cells[(row * side + col) as usize]
    }

    /// Number of lesion pixels
    pub fn area(&self) -> u32 {
        self.members.iter().filter(|&&m| m).count() as u32
    }

    /// Image coordinates of every lesion pixel, row-major
    pub fn lesion_pixels(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        let (x0, y0) = self.roi.origin();
        let side = self.side;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Lesion)
            .map(move |(i, _)| (x0 + (i % side) as i64, y0 + (i / side) as i64))
    }

    /// Lesion pixel edges facing a non-lesion 4-neighbour
    pub fn perimeter(&self) -> u32 {
        self.lesion_pixels()
            .map(|(x, y)| {
                NEIGHBOURS
                    .iter()
                    .filter(|(dx, dy)| !self.is_lesion(x + dx, y + dy))
                    .count() as u32
            })
            .sum()
    }

    /// Lesion pixel counts left of, and at or right of, the ROI centre column
    pub fn split_counts(&self) -> (u32, u32) {
        let center = self.roi.center_x as i64;
        self.lesion_pixels()
            .fold((0, 0), |(left, right), (x, _)| {
                if x < center {
                    (left + 1, right)
                } else {
                    (left, right + 1)
                }
            })
    }
}

/// Shape descriptors of the lesion mask
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeMetrics {
    pub area_px: u32,
    pub perimeter: u32,
    /// perimeter² / (4π·area)
    pub border_irregularity: f64,
    /// |left − right| / area, in [0, 1]
    pub asymmetry: f64,
}

impl ShapeMetrics {
    /// Measure area, perimeter, border irregularity and asymmetry
    ///
    /// Both ratios are zero for an empty mask.
    pub fn measure(mask: &LesionMask) -> Self {
        let area_px = mask.area();
        let perimeter = mask.perimeter();
        let (left, right) = mask.split_counts();

        let (border_irregularity, asymmetry) = if area_px == 0 {
            (0.0, 0.0)
        } else {
            let area = area_px as f64;
            let p = perimeter as f64;
            (p * p / (4.0 * PI * area), left.abs_diff(right) as f64 / area)
        };

        Self {
            area_px,
            perimeter,
            border_irregularity,
            asymmetry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ROI samples of a `size`×`size` image with lesion pixels chosen by `is_lesion`
    fn mask_for(size: u32, is_lesion: impl Fn(u32, u32) -> bool) -> LesionMask {
        let roi = Roi::from_dimensions(size, size, 0.3);
        let mut samples = Vec::new();
        let mut assignments = Vec::new();
        for y in 0..size {
            for x in 0..size {
                if roi.contains(x as i64, y as i64) {
                    samples.push(PixelSample { x, y, rgb: [0, 0, 0] });
                    assignments.push(if is_lesion(x, y) { 1 } else { 0 });
                }
            }
        }
        LesionMask::from_assignments(roi, &samples, &assignments, 1)
    }

    #[test]
    fn test_single_pixel() {
        let mask = mask_for(101, |x, y| x == 50 && y == 50);
        let shape = ShapeMetrics::measure(&mask);
        assert_eq!(shape.area_px, 1);
        assert_eq!(shape.perimeter, 4);
        assert!((shape.border_irregularity - 16.0 / (4.0 * PI)).abs() < 1e-12);
        assert_eq!(shape.asymmetry, 1.0);
    }

    #[test]
    fn test_square_lesion() {
        // 10×10 block: perimeter 40, columns 45..=54 split 5/5
        let mask = mask_for(101, |x, y| (45..55).contains(&x) && (45..55).contains(&y));
        let shape = ShapeMetrics::measure(&mask);
        assert_eq!(shape.area_px, 100);
        assert_eq!(shape.perimeter, 40);
        assert_eq!(shape.asymmetry, 0.0);
        assert!((shape.border_irregularity - 1600.0 / (400.0 * PI)).abs() < 1e-12);
    }

    #[test]
    fn test_full_roi_counts_circle_boundary() {
        let mask = mask_for(101, |_, _| true);
        let shape = ShapeMetrics::measure(&mask);
        assert_eq!(shape.area_px, 2821);
        assert_eq!(shape.perimeter, 244);
        // Centre column falls on the right: (1441 - 1380) / 2821
        assert!((shape.asymmetry - 61.0 / 2821.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_mask() {
        let mask = mask_for(101, |_, _| false);
        let shape = ShapeMetrics::measure(&mask);
        assert_eq!(shape.area_px, 0);
        assert_eq!(shape.perimeter, 0);
        assert_eq!(shape.border_irregularity, 0.0);
        assert_eq!(shape.asymmetry, 0.0);
    }

    #[test]
    fn test_left_half_is_fully_asymmetric() {
        let mask = mask_for(101, |x, _| x < 50);
        let shape = ShapeMetrics::measure(&mask);
        assert_eq!(shape.asymmetry, 1.0);
    }

    #[test]
    fn test_jagged_border_exceeds_compact_shape() {
        let compact = mask_for(101, |x, y| (40..60).contains(&x) && (40..60).contains(&y));
        let comb = mask_for(101, |x, y| {
            (40..60).contains(&y) && (30..70).contains(&x) && x % 2 == 0
        });
        let compact = ShapeMetrics::measure(&compact);
        let comb = ShapeMetrics::measure(&comb);
        assert_eq!(compact.area_px, comb.area_px);
        assert!(comb.border_irregularity > 3.0 * compact.border_irregularity);
    }

    #[test]
    fn test_members_align_with_samples() {
        let mask = mask_for(101, |x, _| x == 50);
        assert_eq!(mask.members().len(), 2821);
        assert_eq!(mask.members().iter().filter(|&&m| m).count(), 61);
        assert!(mask.is_lesion(50, 20));
        assert!(!mask.is_lesion(50, 19));
    }
}
