//! CIEDE2000 perceptual color difference
//!
//! Implements ΔE00 as published in Sharma, Wu & Dalal, "The CIEDE2000
//! Color-Difference Formula: Implementation Notes, Supplementary Test Data,
//! and Mathematical Observations" (2005), with unit parametric factors
//! (kL = kC = kH = 1).
//!
//! Algorithm tag: `algo-ciede2000`

use std::f64::consts::{PI, TAU};

use super::Lab;
use crate::constants::ciede2000::{
    ROTATION_CENTER_DEG, ROTATION_PEAK_DEG, ROTATION_WIDTH_DEG, TWENTY_FIVE_POW_7,
};

/// CIEDE2000 color difference between two Lab colors
///
/// Returns a finite, non-negative value. `delta_e2000(x, x)` is exactly zero
/// and the function is exactly symmetric in its arguments.
pub fn delta_e2000(lab1: Lab, lab2: Lab) -> f64 {
    let c1 = lab1.chroma();
    let c2 = lab2.chroma();
    let c_mean = (c1 + c2) / 2.0;

    let g = 0.5 * (1.0 - chroma_weight(c_mean));
    let a1_prime = (1.0 + g) * lab1.a;
    let a2_prime = (1.0 + g) * lab2.a;

    let c1_prime = a1_prime.hypot(lab1.b);
    let c2_prime = a2_prime.hypot(lab2.b);
    let h1_prime = hue_angle(a1_prime, lab1.b);
    let h2_prime = hue_angle(a2_prime, lab2.b);
    let achromatic = c1_prime * c2_prime == 0.0;

    let delta_l = lab2.l - lab1.l;
    let delta_c = c2_prime - c1_prime;

    let delta_h = if achromatic {
        0.0
    } else {
        let dh = h2_prime - h1_prime;
        if dh > PI {
            dh - TAU
        } else if dh < -PI {
            dh + TAU
        } else {
            dh
        }
    };
    let delta_big_h = 2.0 * (c1_prime * c2_prime).sqrt() * (delta_h / 2.0).sin();

    let l_mean = (lab1.l + lab2.l) / 2.0;
    let c_prime_mean = (c1_prime + c2_prime) / 2.0;
    let h_prime_mean = if achromatic {
        h1_prime + h2_prime
    } else if (h1_prime - h2_prime).abs() <= PI {
        (h1_prime + h2_prime) / 2.0
    } else if h1_prime + h2_prime < TAU {
        (h1_prime + h2_prime + TAU) / 2.0
    } else {
        (h1_prime + h2_prime - TAU) / 2.0
    };

    let t = 1.0 - 0.17 * (h_prime_mean - 30f64.to_radians()).cos()
        + 0.24 * (2.0 * h_prime_mean).cos()
        + 0.32 * (3.0 * h_prime_mean + 6f64.to_radians()).cos()
        - 0.20 * (4.0 * h_prime_mean - 63f64.to_radians()).cos();

    let l_offset_sq = (l_mean - 50.0).powi(2);
    let sl = 1.0 + 0.015 * l_offset_sq / (20.0 + l_offset_sq).sqrt();
    let sc = 1.0 + 0.045 * c_prime_mean;
    let sh = 1.0 + 0.015 * c_prime_mean * t;

    let hue_offset = (h_prime_mean.to_degrees() - ROTATION_CENTER_DEG) / ROTATION_WIDTH_DEG;
    let delta_theta = ROTATION_PEAK_DEG.to_radians() * (-hue_offset * hue_offset).exp();
    let rt = -(2.0 * delta_theta).sin() * 2.0 * chroma_weight(c_prime_mean);

    let term_l = delta_l / sl;
    let term_c = delta_c / sc;
    let term_h = delta_big_h / sh;

    // Rounding can push an exactly-zero sum marginally negative
    (term_l * term_l + term_c * term_c + term_h * term_h + rt * term_c * term_h)
        .max(0.0)
        .sqrt()
}

/// sqrt(C^7 / (C^7 + 25^7))
fn chroma_weight(c: f64) -> f64 {
    let c7 = c.powi(7);
    (c7 / (c7 + TWENTY_FIVE_POW_7)).sqrt()
}

/// Hue angle in radians within [0, 2π); zero for the neutral axis
fn hue_angle(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a);
    if h < 0.0 {
        h + TAU
    } else {
        h
    }
}
