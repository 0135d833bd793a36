//! Colorimetric constants and default analysis parameters
//!
//! Colour-science values follow IEC 61966-2-1 (sRGB) and CIE 15:2004.
//! Analysis defaults reproduce the skin-tracking lesion heuristics.

/// D65 Standard Illuminant Reference
///
/// CIE Standard Illuminant D65 represents average daylight with a correlated
/// color temperature of 6504K. sRGB images are encoded relative to it.
pub mod d65 {
    /// D65 white point in CIE XYZ color space (array form)
    /// Source: CIE 15:2004 Colorimetry, 3rd edition
    pub const WHITE_POINT_XYZ: [f64; 3] = [0.95047, 1.00000, 1.08883];
}

/// Re-export D65 white point at top level for convenience
pub const D65_WHITE_POINT_XYZ: [f64; 3] = d65::WHITE_POINT_XYZ;

/// sRGB transfer function and primaries
pub mod srgb {
    /// Encoded value at or below which the inverse gamma is linear
    pub const LINEAR_THRESHOLD: f64 = 0.04045;

    /// Slope of the linear segment
    pub const LINEAR_SLOPE: f64 = 12.92;

    /// Offset of the power segment
    pub const GAMMA_OFFSET: f64 = 0.055;

    /// Exponent of the power segment
    pub const GAMMA_EXPONENT: f64 = 2.4;

    /// Linear sRGB to CIE XYZ (D65), rows X, Y, Z
    pub const TO_XYZ: [[f64; 3]; 3] = [
        [0.4124, 0.3576, 0.1805],
        [0.2126, 0.7152, 0.0722],
        [0.0193, 0.1192, 0.9505],
    ];
}

/// CIE L*a*b* companding
pub mod lab {
    /// δ = 6/29, the junction of the cube-root and linear segments
    pub const DELTA: f64 = 6.0 / 29.0;

    /// δ³, threshold on t = X/Xn (and Y, Z)
    pub const DELTA_CUBED: f64 = DELTA * DELTA * DELTA;

    /// Offset of the linear segment (4/29)
    pub const LINEAR_OFFSET: f64 = 4.0 / 29.0;

    /// Upper bound of L*
    pub const MAX_LIGHTNESS: f64 = 100.0;
}

/// CIEDE2000 reference constants (Sharma, Wu & Dalal 2005)
pub mod ciede2000 {
    /// 25^7, shared by the G correction and the rotation term
    pub const TWENTY_FIVE_POW_7: f64 = 6_103_515_625.0;

    /// Centre of the blue-region rotation term, degrees
    pub const ROTATION_CENTER_DEG: f64 = 275.0;

    /// Width of the blue-region rotation term, degrees
    pub const ROTATION_WIDTH_DEG: f64 = 25.0;

    /// Peak rotation angle Δθ, degrees
    pub const ROTATION_PEAK_DEG: f64 = 30.0;
}

/// Region-of-interest geometry
pub mod region {
    /// ROI radius as a fraction of the shorter image side
    pub const ROI_FRACTION: f64 = 0.3;

    /// Background ring inner radius as a multiple of the ROI radius
    pub const RING_INNER_FACTOR: f64 = 1.15;

    /// Background ring outer radius as a multiple of the ROI radius
    pub const RING_OUTER_FACTOR: f64 = 1.45;

    /// Minimum ROI pixel count for clustering
    pub const MIN_SAMPLES: usize = 300;
}

/// Clustering parameters
pub mod clustering {
    /// Number of k-means clusters (skin, lesion, shadow/other)
    pub const CLUSTER_COUNT: usize = 3;

    /// Fixed Lloyd iteration count
    pub const ITERATIONS: usize = 8;
}

/// Lesion cluster scoring
pub mod scoring {
    /// Weight of the centroid R/G ratio
    pub const REDNESS_WEIGHT: f64 = 0.6;

    /// Weight of the centroid darkness (1 - L*/100)
    pub const DARKNESS_WEIGHT: f64 = 0.4;

    /// Green channel at or below which a centroid's R/G ratio is zero
    pub const MIN_GREEN: f64 = 1.0;
}

/// Per-pixel measurements
pub mod measurement {
    /// Upper clamp for mean R/G redness
    pub const REDNESS_CEILING: f64 = 3.0;
}
