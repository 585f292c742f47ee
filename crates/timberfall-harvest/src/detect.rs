//! Detection pipeline: clicked voxel -> harvest set.

use timberfall_core::config::HarvestConfig;
use timberfall_core::types::VoxelPos;
use timberfall_world::{VoxelClass, VoxelClassifier, VoxelWorld};

use crate::discovery::discover_trunk;
use crate::locator::{find_nearest_trunk, TrunkSearch};
use crate::ownership::resolve_owned_leaves;
use crate::sets::HarvestSet;

/// Everything detection learned about one click.
#[derive(Debug, Clone)]
pub struct Detection {
    /// The voxel the interaction targeted.
    pub clicked: VoxelPos,
    /// Log the trunk search started from. None when a leaf click found no trunk.
    pub origin: Option<VoxelPos>,
    /// Number of trunk voxels in the harvest.
    pub trunk_size: usize,
    /// Voxels to launch: trunk first, then owned leaves.
    pub harvest: HarvestSet,
    /// A leaf click degraded to harvesting only that leaf.
    pub leaf_fallback: bool,
    /// Some cap cut a search short.
    pub truncated: bool,
}

/// Work out which voxels a click on `clicked` harvests.
///
/// Returns None when the clicked voxel is neither a log nor a leaf. A leaf
/// with no reachable trunk harvests just itself. Every harvest stays within
/// `config.max_tree_size`, so a zero cap harvests nothing.
pub fn detect_tree<W: VoxelWorld + ?Sized>(
    world: &W,
    classifier: &VoxelClassifier,
    clicked: VoxelPos,
    config: &HarvestConfig,
) -> Option<Detection> {
    let origin = match classifier.classify_at(world, clicked) {
        VoxelClass::Other => return None,
        VoxelClass::Log => clicked,
        VoxelClass::Leaf => {
            match find_nearest_trunk(world, classifier, clicked, config.nearest_trunk_visit_cap) {
                TrunkSearch::Found(log) => {
                    log::debug!("Leaf click at {clicked} redirected to trunk at {log}");
                    log
                }
                outcome @ (TrunkSearch::Exhausted | TrunkSearch::CapReached) => {
                    log::debug!("Leaf click at {clicked} found no trunk ({outcome:?})");
                    let harvest: HarvestSet =
                        [clicked].into_iter().take(config.max_tree_size).collect();
                    return Some(Detection {
                        clicked,
                        origin: None,
                        trunk_size: 0,
                        truncated: outcome == TrunkSearch::CapReached || harvest.is_empty(),
                        harvest,
                        leaf_fallback: true,
                    });
                }
            }
        }
    };

    let discovery = discover_trunk(world, classifier, origin, config.max_tree_size);
    let resolution = resolve_owned_leaves(world, classifier, &discovery.trunk, config);

    Some(Detection {
        clicked,
        origin: Some(origin),
        trunk_size: discovery.trunk.len(),
        harvest: resolution.harvest,
        leaf_fallback: false,
        truncated: discovery.truncated || resolution.truncated,
    })
}
