//! Trunk flood fill: every log voxel 26-connected to an origin, capped.

use std::collections::VecDeque;

use timberfall_core::neighborhood::neighbors_26;
use timberfall_core::types::VoxelPos;
use timberfall_world::{VoxelClassifier, VoxelWorld};

use crate::sets::TrunkSet;

/// Result of a trunk flood fill.
#[derive(Debug, Clone, Default)]
pub struct TrunkDiscovery {
    /// Connected logs in BFS order, origin first.
    pub trunk: TrunkSet,
    /// True if at least one more connected log was left out by the cap.
    pub truncated: bool,
}

/// Breadth-first search from `origin` through log-to-log adjacency.
///
/// Returns the whole connected component when it has at most `max_size`
/// voxels; otherwise a connected subset of exactly `max_size` voxels that
/// contains the origin. An origin that is not a log yields an empty set, as
/// does a zero cap (reported as truncated).
pub fn discover_trunk<W: VoxelWorld + ?Sized>(
    world: &W,
    classifier: &VoxelClassifier,
    origin: VoxelPos,
    max_size: usize,
) -> TrunkDiscovery {
    let mut result = TrunkDiscovery::default();
    if !classifier.is_log_at(world, origin) {
        return result;
    }
    if max_size == 0 {
        result.truncated = true;
        return result;
    }

    let trunk = &mut result.trunk;
    let mut queue = VecDeque::new();
    trunk.insert(origin);
    queue.push_back(origin);

    'search: while let Some(current) = queue.pop_front() {
        for offset in neighbors_26() {
            let candidate = current + offset;
            if trunk.contains(&candidate) || !classifier.is_log_at(world, candidate) {
                continue;
            }
            if trunk.len() >= max_size {
                result.truncated = true;
                break 'search;
            }
            trunk.insert(candidate);
            queue.push_back(candidate);
        }
    }

    if result.truncated {
        log::debug!("Trunk from {origin} truncated at {max_size} logs");
    }
    result
}
