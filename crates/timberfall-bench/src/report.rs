use std::path::Path;

use crate::runner::BenchmarkResult;

/// A complete baseline containing results from all scenes.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Baseline {
    pub timestamp: String,
    pub results: Vec<BenchmarkResult>,
}

/// Load a baseline from a JSON file. Returns None if the file doesn't exist
/// or doesn't parse.
pub fn load_baseline(path: &Path) -> Option<Baseline> {
    let contents = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&contents).ok()
}

/// Save a baseline to a JSON file.
pub fn save_baseline(path: &Path, baseline: &Baseline) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(baseline).map_err(std::io::Error::other)?;
    std::fs::write(path, json)
}

/// Compare mean detection time against a baseline. Returns (scene name,
/// percent change) for every scene slower than `threshold_pct`.
pub fn compare(
    current: &[BenchmarkResult],
    baseline: &Baseline,
    threshold_pct: f64,
) -> Vec<(String, f64)> {
    let mut regressions = Vec::new();

    for result in current {
        let Some(base) = baseline
            .results
            .iter()
            .find(|b| b.scene_name == result.scene_name)
        else {
            continue;
        };
        // Sub-resolution baselines can't express a percentage.
        if base.timings.mean_ms <= 0.0 {
            continue;
        }
        let pct_change =
            (result.timings.mean_ms - base.timings.mean_ms) / base.timings.mean_ms * 100.0;
        if pct_change > threshold_pct {
            regressions.push((result.scene_name.clone(), pct_change));
        }
    }

    regressions
}

/// Format results as a markdown summary table.
pub fn format_markdown(results: &[BenchmarkResult]) -> String {
    let mut out = String::new();
    out.push_str("| Scene | Voxels | Trunk | Harvest | Notes | Mean (ms) | Median (ms) | P95 (ms) | P99 (ms) | Min (ms) | Max (ms) | Dropped | Ticks |\n");
    out.push_str("|-------|--------|-------|---------|-------|-----------|-------------|----------|----------|----------|----------|---------|-------|\n");

    for r in results {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {:.3} | {:.3} | {:.3} | {:.3} | {:.3} | {:.3} | {}/{} | {} |\n",
            r.scene_name,
            r.world_voxels,
            r.trunk_size,
            r.harvest_size,
            notes(r),
            r.timings.mean_ms,
            r.timings.median_ms,
            r.timings.p95_ms,
            r.timings.p99_ms,
            r.timings.min_ms,
            r.timings.max_ms,
            r.lifecycle.dropped,
            r.lifecycle.launched,
            r.lifecycle.ticks,
        ));
    }

    out
}

fn notes(r: &BenchmarkResult) -> &'static str {
    match (r.leaf_fallback, r.truncated) {
        (true, true) => "leaf only, capped",
        (true, false) => "leaf only",
        (false, true) => "capped",
        (false, false) => "",
    }
}

/// Format a comparison report showing regressions.
pub fn format_comparison(regressions: &[(String, f64)], threshold_pct: f64) -> String {
    if regressions.is_empty() {
        return format!(
            "All scenes within {:.0}% threshold. No regressions detected.\n",
            threshold_pct
        );
    }

    let mut out = String::new();
    out.push_str(&format!(
        "REGRESSIONS DETECTED (>{:.0}% threshold):\n",
        threshold_pct
    ));
    for (scene, pct) in regressions {
        out.push_str(&format!("  - {}: +{:.1}%\n", scene, pct));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::{compute_timings, LifecycleSummary};

    fn result(name: &str, mean_ms: f64) -> BenchmarkResult {
        BenchmarkResult {
            scene_name: name.to_string(),
            world_voxels: 100,
            trunk_size: 5,
            harvest_size: 20,
            leaf_fallback: false,
            truncated: false,
            iterations: 1,
            timings: compute_timings(&[mean_ms]),
            lifecycle: LifecycleSummary {
                launched: 20,
                dropped: 20,
                ticks: 70,
                ..Default::default()
            },
        }
    }

    fn baseline(results: Vec<BenchmarkResult>) -> Baseline {
        Baseline {
            timestamp: "bench-test".to_string(),
            results,
        }
    }

    #[test]
    fn test_compare_flags_slow_scenes_only() {
        let base = baseline(vec![result("oak", 1.0), result("grove", 2.0)]);
        let current = vec![result("oak", 1.5), result("grove", 2.1), result("new", 9.0)];
        let regressions = compare(&current, &base, 10.0);
        assert_eq!(regressions.len(), 1);
        assert_eq!(regressions[0].0, "oak");
        assert!((regressions[0].1 - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_compare_skips_zero_baseline() {
        let base = baseline(vec![result("oak", 0.0)]);
        assert!(compare(&[result("oak", 1.0)], &base, 10.0).is_empty());
    }

    #[test]
    fn test_format_markdown_row() {
        let mut capped = result("giant", 0.25);
        capped.truncated = true;
        let table = format_markdown(&[result("oak", 0.5), capped]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("| oak | 100 | 5 | 20 |  | 0.500 |"));
        assert!(lines[3].contains("| capped |"));
        assert!(lines[3].contains("| 20/20 | 70 |"));
    }

    #[test]
    fn test_format_comparison() {
        assert!(format_comparison(&[], 10.0).contains("No regressions"));
        let text = format_comparison(&[("oak".to_string(), 42.0)], 10.0);
        assert!(text.contains(">10% threshold"));
        assert!(text.contains("  - oak: +42.0%"));
    }

    #[test]
    fn test_baseline_save_load() {
        let dir = std::env::temp_dir().join(format!("harvest-bench-{}", std::process::id()));
        let path = dir.join("baseline.json");
        save_baseline(&path, &baseline(vec![result("oak", 1.0)])).expect("save");
        let loaded = load_baseline(&path).expect("load");
        assert_eq!(loaded.results.len(), 1);
        assert_eq!(loaded.results[0].scene_name, "oak");
        assert_eq!(loaded.results[0].lifecycle.dropped, 20);
        std::fs::remove_dir_all(&dir).expect("cleanup");
        assert!(load_baseline(&path).is_none());
    }
}
