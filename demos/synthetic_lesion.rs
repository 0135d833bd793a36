//! Analyse a synthetic lesion photograph
//!
//! Draws a reddish, slightly lobed lesion on a skin-toned background and
//! prints the resulting metrics. Set `RUST_LOG=debug` to follow the pipeline
//! stages.

use image::{Rgba, RgbaImage};
use lesion_metrics::{analyze, Calibration};
use std::{env, process};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let pixels_per_cm = env::args().nth(1).and_then(|arg| arg.parse::<f64>().ok());

    let size = 241u32;
    let c = (size / 2) as f64;
    let image = RgbaImage::from_fn(size, size, |x, y| {
        let (dx, dy) = (x as f64 - c, y as f64 - c);
        let radius = 40.0 + 5.0 * (5.0 * dy.atan2(dx)).cos();
        if (dx * dx + dy * dy).sqrt() <= radius {
            Rgba([165, 70, 65, 255])
        } else {
            Rgba([228, 188, 168, 255])
        }
    });

    match analyze(&image, Calibration::from(pixels_per_cm)) {
        Ok(metrics) => {
            println!("{metrics}");
            match serde_json::to_string_pretty(&metrics) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("Error serializing metrics: {}", e),
            }
        }
        Err(e) => {
            eprintln!("Analysis failed: {}", e.user_message());
            process::exit(1);
        }
    }
}
