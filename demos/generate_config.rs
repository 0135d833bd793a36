//! Generate a default metrics configuration file
//!
//! Creates a JSON config with all default parameters

use lesion_metrics::MetricsConfig;
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output_config.json>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} config/metrics.json", args[0]);
        process::exit(1);
    }

    let output_path = Path::new(&args[1]);

    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            process::exit(1);
        }
    }

    let config = MetricsConfig::default();

    match config.to_json_file(output_path) {
        Ok(_) => {
            eprintln!("Configuration saved to {}", output_path.display());
            eprintln!();
            eprintln!("Config summary:");
            eprintln!(
                "  Region: ROI {:.0}% of shorter side, ring {:.2}-{:.2}× radius, min {} samples",
                config.region.roi_fraction * 100.0,
                config.region.ring_inner_factor,
                config.region.ring_outer_factor,
                config.region.min_samples
            );
            eprintln!("  Clustering: {} iterations", config.clustering.iterations);
            eprintln!(
                "  Scoring: redness {:.1}, darkness {:.1}",
                config.scoring.redness_weight, config.scoring.darkness_weight
            );
            eprintln!("  Measurement: R/G ceiling {:.1}", config.measurement.redness_ceiling);
        }
        Err(e) => {
            eprintln!("Error saving config: {}", e);
            process::exit(1);
        }
    }
}
