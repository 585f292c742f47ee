use std::path::{Path, PathBuf};
use std::process;

use timberfall_bench::report;
use timberfall_bench::runner::BenchmarkRunner;
use timberfall_bench::scenes;
use timberfall_core::config::HarvestConfig;
use timberfall_core::error::TimberfallError;
use timberfall_data::defaults;
use timberfall_world::VoxelClassifier;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut baseline_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut scene_filter: Option<String> = None;
    let mut regression_threshold = 10.0f64;
    let mut iterations = 200u32;
    let mut max_ticks = 600u32;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--baseline" => {
                i += 1;
                let value = require_value(&args, i, "--baseline");
                baseline_path = Some(PathBuf::from(value));
            }
            "--output" => {
                i += 1;
                let value = require_value(&args, i, "--output");
                output_path = Some(PathBuf::from(value));
            }
            "--config" => {
                i += 1;
                let value = require_value(&args, i, "--config");
                config_path = Some(PathBuf::from(value));
            }
            "--scene" => {
                i += 1;
                let value = require_value(&args, i, "--scene");
                scene_filter = Some(value.to_string());
            }
            "--regression-threshold" => {
                i += 1;
                let value = require_value(&args, i, "--regression-threshold");
                regression_threshold = value
                    .parse()
                    .expect("invalid --regression-threshold value");
            }
            "--iterations" => {
                i += 1;
                let value = require_value(&args, i, "--iterations");
                iterations = value.parse().expect("invalid --iterations value");
            }
            "--max-ticks" => {
                i += 1;
                let value = require_value(&args, i, "--max-ticks");
                max_ticks = value.parse().expect("invalid --max-ticks value");
            }
            "--help" | "-h" => {
                eprintln!("Usage: harvest-bench [OPTIONS]");
                eprintln!("  --baseline <path>              Load baseline JSON for comparison");
                eprintln!("  --output <path>                Save current results as JSON baseline");
                eprintln!("  --config <path>                Harvest tunables RON (default: built-in)");
                eprintln!("  --scene <name>                 Run only the named scene");
                eprintln!(
                    "  --regression-threshold <pct>   Regression threshold percentage (default: 10)"
                );
                eprintln!("  --iterations <n>               Detection runs per scene (default: 200)");
                eprintln!("  --max-ticks <n>                Physics ticks before giving up (default: 600)");
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let config = match load_config(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            process::exit(1);
        }
    };
    let palette = match defaults::tree_palette() {
        Ok(table) => table,
        Err(e) => {
            log::error!("Built-in palette failed to load: {e}");
            process::exit(1);
        }
    };
    let runner = BenchmarkRunner::new(VoxelClassifier::from_table(&palette), config, iterations)
        .with_max_ticks(max_ticks);

    let scene_configs: Vec<_> = scenes::standard_scenes()
        .into_iter()
        .filter(|s| scene_filter.as_deref().is_none_or(|name| s.name == name))
        .collect();
    if scene_configs.is_empty() {
        eprintln!("No scene matches {:?}", scene_filter);
        process::exit(1);
    }

    let mut results = Vec::new();
    for scene in &scene_configs {
        results.push(runner.run_scene(scene));
    }

    // Print markdown summary
    println!("\n## Harvest Benchmark Results\n");
    println!("{}", report::format_markdown(&results));

    if let Some(ref path) = output_path {
        let baseline = report::Baseline {
            timestamp: timestamp(),
            results: results.clone(),
        };
        report::save_baseline(path, &baseline).expect("failed to save baseline");
        log::info!("Saved baseline to {}", path.display());
    }

    if let Some(ref path) = baseline_path {
        if let Some(baseline) = report::load_baseline(path) {
            let regressions = report::compare(&results, &baseline, regression_threshold);
            println!(
                "{}",
                report::format_comparison(&regressions, regression_threshold)
            );
            if !regressions.is_empty() {
                eprintln!(
                    "ERROR: {} regressions detected, exiting with code 1",
                    regressions.len()
                );
                process::exit(1);
            }
        } else {
            log::warn!("Baseline file not found: {}", path.display());
        }
    }

    log::info!("Benchmark complete.");
}

/// Value following the flag at `args[i - 1]`.
fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| format!("Missing value for {flag}"))
}

fn require_value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    flag_value(args, i, flag).unwrap_or_else(|message| {
        eprintln!("{message}");
        eprintln!("Run with --help for usage.");
        process::exit(1);
    })
}

/// Read and validate tunables from `path`, or fall back to the shipped defaults.
fn load_config(path: Option<&Path>) -> Result<HarvestConfig, TimberfallError> {
    let source = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => defaults::HARVEST_CONFIG_RON.to_string(),
    };
    let config = timberfall_data::load_validated_config(&source)?;
    log::info!(
        "Harvest config: max {} voxels, visit cap {}, leaf radius {}, ownership radius {}",
        config.max_tree_size,
        config.nearest_trunk_visit_cap,
        config.leaf_search_radius,
        config.ownership_check_radius
    );
    Ok(config)
}

/// Seconds since the Unix epoch, tagged for the baseline file.
fn timestamp() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    format!("bench-{secs}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_flag_value_present() {
        let argv = args(&["harvest-bench", "--scene", "oak"]);
        assert_eq!(flag_value(&argv, 2, "--scene"), Ok("oak"));
    }

    #[test]
    fn test_trailing_flag_without_value_is_an_error() {
        let argv = args(&["harvest-bench", "--iterations"]);
        let err = flag_value(&argv, 2, "--iterations").expect_err("no value follows");
        assert_eq!(err, "Missing value for --iterations");
    }
}
