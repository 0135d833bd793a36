//! Lesion segmentation module
//!
//! Clusters ROI pixel colours with deterministic k-means and selects the
//! cluster most likely to be the lesion.

pub mod kmeans;
pub mod selector;

pub use kmeans::{Centroid, Clustering, KMeansSegmenter};
pub use selector::{ClusterSelector, LesionCluster};
