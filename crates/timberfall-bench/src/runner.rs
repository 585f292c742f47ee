use std::time::Instant;

use timberfall_core::config::HarvestConfig;
use timberfall_harvest::{detect_tree, HarvestOrchestrator, InteractionEvent};
use timberfall_world::{SparseWorld, VoxelClassifier};

use crate::ballistic::BallisticHost;
use crate::scenes::SceneConfig;

/// Bodies that fall this far without touching ground land anyway.
pub const KILL_FLOOR_Y: f32 = -64.0;

/// Timing data for a single benchmark run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TimingSeries {
    pub mean_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

/// Outcome of one click carried through launch and landing.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LifecycleSummary {
    pub launched: usize,
    pub dropped: usize,
    /// Replicas still airborne when the tick budget ran out.
    pub unlanded: usize,
    pub ignored_landings: u64,
    pub ticks: u64,
}

/// Result of a single scene benchmark.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BenchmarkResult {
    pub scene_name: String,
    pub world_voxels: usize,
    pub trunk_size: usize,
    pub harvest_size: usize,
    pub leaf_fallback: bool,
    pub truncated: bool,
    pub iterations: u32,
    pub timings: TimingSeries,
    pub lifecycle: LifecycleSummary,
}

/// Runs detection timings and a full harvest per scene on the CPU.
pub struct BenchmarkRunner {
    classifier: VoxelClassifier,
    config: HarvestConfig,
    iterations: u32,
    max_ticks: u32,
}

impl BenchmarkRunner {
    pub fn new(classifier: VoxelClassifier, config: HarvestConfig, iterations: u32) -> Self {
        Self {
            classifier,
            config,
            iterations,
            max_ticks: 600,
        }
    }

    pub fn with_max_ticks(mut self, max_ticks: u32) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// Run a single benchmark scene and return timing results.
    pub fn run_scene(&self, scene: &SceneConfig) -> BenchmarkResult {
        let (world, click) = scene.build_world();
        log::info!(
            "Running scene '{}' ({} voxels, click {click})...",
            scene.name,
            world.len()
        );

        let mut detect_times = Vec::with_capacity(self.iterations as usize);
        let mut last = None;
        for _ in 0..self.iterations {
            let start = Instant::now();
            let detection = detect_tree(&world, &self.classifier, click, &self.config);
            detect_times.push(start.elapsed().as_secs_f64() * 1000.0);
            last = detection;
        }
        if last.is_none() {
            last = detect_tree(&world, &self.classifier, click, &self.config);
        }

        let (trunk_size, harvest_size, leaf_fallback, truncated) = match &last {
            Some(d) => (d.trunk_size, d.harvest.len(), d.leaf_fallback, d.truncated),
            None => {
                log::warn!("Scene '{}' click is not on a tree", scene.name);
                (0, 0, false, false)
            }
        };
        if truncated {
            log::warn!(
                "Scene '{}' hit a search cap: harvest limited to {} voxels",
                scene.name,
                harvest_size
            );
        }

        let world_voxels = world.len();
        let lifecycle = self.run_lifecycle(world, click);

        let timings = compute_timings(&detect_times);
        log::info!(
            "  Done: mean={:.3}ms, p95={:.3}ms, {} launched, {} dropped in {} ticks",
            timings.mean_ms,
            timings.p95_ms,
            lifecycle.launched,
            lifecycle.dropped,
            lifecycle.ticks
        );

        BenchmarkResult {
            scene_name: scene.name.to_string(),
            world_voxels,
            trunk_size,
            harvest_size,
            leaf_fallback,
            truncated,
            iterations: self.iterations,
            timings,
            lifecycle,
        }
    }

    /// Click `click` once and step the simulated host until every replica
    /// has landed or the tick budget is spent.
    pub fn run_lifecycle(&self, mut world: SparseWorld, click: glam::IVec3) -> LifecycleSummary {
        let mut orchestrator = HarvestOrchestrator::new(self.classifier.clone(), self.config.clone());
        let mut host = BallisticHost::new(KILL_FLOOR_Y);

        let mut event = InteractionEvent::primary_block(click);
        let Some(report) = orchestrator.on_interact(&mut event, &mut world, &mut host) else {
            return LifecycleSummary::default();
        };

        let mut summary = LifecycleSummary {
            launched: report.replicas.len(),
            ..Default::default()
        };
        while orchestrator.in_flight() > 0 && host.tick() < u64::from(self.max_ticks) {
            for mut landing in host.step(&world) {
                if orchestrator.on_landing(&mut landing, &mut host).is_some() {
                    summary.dropped += 1;
                }
            }
        }

        summary.ticks = host.tick();
        summary.unlanded = orchestrator.in_flight();
        summary.ignored_landings = orchestrator.stats().ignored_landings;
        if summary.unlanded > 0 {
            log::warn!(
                "{} replicas still airborne after {} ticks",
                summary.unlanded,
                summary.ticks
            );
        }
        summary
    }
}

/// Compute timing statistics from a list of sample times in milliseconds.
pub fn compute_timings(times: &[f64]) -> TimingSeries {
    if times.is_empty() {
        return TimingSeries {
            mean_ms: 0.0,
            median_ms: 0.0,
            p95_ms: 0.0,
            p99_ms: 0.0,
            min_ms: 0.0,
            max_ms: 0.0,
        };
    }

    let mut sorted = times.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };
    let p95_idx = ((n as f64) * 0.95).ceil() as usize;
    let p99_idx = ((n as f64) * 0.99).ceil() as usize;

    TimingSeries {
        mean_ms: mean,
        median_ms: median,
        p95_ms: sorted[p95_idx.min(n - 1)],
        p99_ms: sorted[p99_idx.min(n - 1)],
        min_ms: sorted[0],
        max_ms: sorted[n - 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::{find_scene, standard_scenes};
    use timberfall_core::constants::MAX_TREE_SIZE;
    use timberfall_data::defaults::tree_palette;

    fn runner() -> BenchmarkRunner {
        let classifier = VoxelClassifier::from_table(&tree_palette().expect("palette"));
        BenchmarkRunner::new(classifier, HarvestConfig::default(), 3)
    }

    #[test]
    fn test_compute_timings() {
        let t = compute_timings(&[4.0, 1.0, 3.0, 2.0]);
        assert_eq!(t.min_ms, 1.0);
        assert_eq!(t.max_ms, 4.0);
        assert_eq!(t.mean_ms, 2.5);
        assert_eq!(t.median_ms, 2.5);
        assert_eq!(t.p95_ms, 4.0);
    }

    #[test]
    fn test_compute_timings_empty() {
        let t = compute_timings(&[]);
        assert_eq!(t.mean_ms, 0.0);
        assert_eq!(t.max_ms, 0.0);
    }

    #[test]
    fn test_every_replica_lands_exactly_once() {
        let runner = runner();
        for scene in standard_scenes() {
            let result = runner.run_scene(&scene);
            let life = &result.lifecycle;
            assert_eq!(life.launched, result.harvest_size, "scene '{}'", scene.name);
            assert_eq!(life.dropped, life.launched, "scene '{}'", scene.name);
            assert_eq!(life.unlanded, 0, "scene '{}'", scene.name);
            assert_eq!(life.ignored_landings, 0, "scene '{}'", scene.name);
        }
    }

    #[test]
    fn test_lone_log_result() {
        let result = runner().run_scene(&find_scene("lone-log").expect("scene"));
        assert_eq!(result.trunk_size, 1);
        assert_eq!(result.harvest_size, 1);
        assert!(!result.truncated);
        assert_eq!(result.iterations, 3);
    }

    #[test]
    fn test_giant_trunk_is_capped() {
        let result = runner().run_scene(&find_scene("giant-trunk").expect("scene"));
        assert!(result.truncated);
        assert_eq!(result.trunk_size, MAX_TREE_SIZE);
        assert_eq!(result.harvest_size, MAX_TREE_SIZE);
    }

    #[test]
    fn test_orphan_leaf_falls_back() {
        let result = runner().run_scene(&find_scene("orphan-leaf").expect("scene"));
        assert!(result.leaf_fallback);
        assert_eq!(result.harvest_size, 1);
        assert_eq!(result.lifecycle.dropped, 1);
    }

    #[test]
    fn test_tick_budget_leaves_replicas_airborne() {
        let runner = runner().with_max_ticks(5);
        let (world, click) = find_scene("oak").expect("scene").build_world();
        let life = runner.run_lifecycle(world, click);
        assert!(life.launched > 0);
        assert_eq!(life.ticks, 5);
        assert_eq!(life.unlanded, life.launched - life.dropped);
        assert!(life.unlanded > 0, "nothing lands while still rising");
    }
}
