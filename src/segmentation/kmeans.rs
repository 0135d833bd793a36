//! Deterministic k-means over ROI pixel colours
//!
//! Lloyd's algorithm in RGB with a fixed iteration count and index-based
//! seeding, so identical inputs always produce identical clusterings.
//!
//! Algorithm tag: `algo-kmeans-fixed-seed`

use tracing::trace;

use crate::constants::clustering::{CLUSTER_COUNT, ITERATIONS};
use crate::region::PixelSample;

/// RGB centroid on the 0-255 scale
pub type Centroid = [f64; 3];

/// Converged cluster state for one analysis call
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering {
    /// Cluster means after the final update
    pub centroids: [Centroid; CLUSTER_COUNT],
    /// Cluster index per sample, from the final assignment pass
    pub assignments: Vec<usize>,
}

impl Clustering {
    /// Number of samples assigned to each cluster
    pub fn cluster_sizes(&self) -> [usize; CLUSTER_COUNT] {
        let mut sizes = [0; CLUSTER_COUNT];
        for &k in &self.assignments {
            sizes[k] += 1;
        }
        sizes
    }
}

/// Fixed-iteration k-means segmenter
#[derive(Debug, Clone)]
pub struct KMeansSegmenter {
    iterations: usize,
}

impl Default for KMeansSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl KMeansSegmenter {
    /// Create a segmenter running the standard 8 iterations
    pub fn new() -> Self {
        Self {
            iterations: ITERATIONS,
        }
    }

    /// Create a segmenter with a custom iteration count
    pub fn with_iterations(iterations: usize) -> Self {
        Self { iterations }
    }

    /// Initial centroids picked at evenly spaced sample indices
    ///
    /// Cluster `k` starts at sample `floor((k + 1) * n / (3 * K))`, i.e. at
    /// 1/9, 2/9 and 3/9 of the row-major sample list. This is not a random
    /// or statistical seeding method and must stay that way for
    /// reproducibility. An empty sample list seeds every centroid at black.
    pub fn seed(&self, samples: &[PixelSample]) -> [Centroid; CLUSTER_COUNT] {
        let n = samples.len();
        let mut centroids = [[0.0; 3]; CLUSTER_COUNT];
        for (k, centroid) in centroids.iter_mut().enumerate() {
            let index = (k + 1) * n / (CLUSTER_COUNT * 3);
            if let Some(sample) = samples.get(index) {
                *centroid = to_centroid(sample.rgb);
            }
        }
        centroids
    }

    /// Cluster the samples
    ///
    /// Each iteration assigns every sample to its nearest centroid (squared
    /// Euclidean RGB distance, lowest index wins ties), then moves each
    /// centroid to the mean of its members. A centroid without members keeps
    /// its previous value.
    pub fn segment(&self, samples: &[PixelSample]) -> Clustering {
        let mut centroids = self.seed(samples);
        let mut assignments = vec![0usize; samples.len()];

        for iteration in 0..self.iterations {
            for (slot, sample) in assignments.iter_mut().zip(samples) {
                *slot = nearest(&centroids, sample.rgb);
            }

            let mut sums = [[0.0f64; 3]; CLUSTER_COUNT];
            let mut counts = [0usize; CLUSTER_COUNT];
            for (&k, sample) in assignments.iter().zip(samples) {
                for (sum, &channel) in sums[k].iter_mut().zip(&sample.rgb) {
                    *sum += channel as f64;
                }
                counts[k] += 1;
            }

            for k in 0..CLUSTER_COUNT {
                if counts[k] > 0 {
                    let n = counts[k] as f64;
                    centroids[k] = [sums[k][0] / n, sums[k][1] / n, sums[k][2] / n];
                }
            }

            trace!(iteration, ?counts, "k-means iteration");
        }

        Clustering {
            centroids,
            assignments,
        }
    }
}

fn to_centroid(rgb: [u8; 3]) -> Centroid {
    [rgb[0] as f64, rgb[1] as f64, rgb[2] as f64]
}

/// Index of the closest centroid; the first wins on equal distance
fn nearest(centroids: &[Centroid; CLUSTER_COUNT], rgb: [u8; 3]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (k, centroid) in centroids.iter().enumerate() {
        let dr = rgb[0] as f64 - centroid[0];
        let dg = rgb[1] as f64 - centroid[1];
        let db = rgb[2] as f64 - centroid[2];
        let distance = dr * dr + dg * dg + db * db;
        if distance < best_distance {
            best_distance = distance;
            best = k;
        }
    }
    best
}
