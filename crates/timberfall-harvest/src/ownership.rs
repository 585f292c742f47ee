//! Leaf ownership: which foliage around a trunk belongs to it.
//!
//! A leaf within `leaf_search_radius` of any trunk voxel is claimed unless
//! some log that is not part of this trunk lies within
//! `ownership_check_radius` of the leaf. Leaves caught between two trees
//! therefore go to neither.

use std::collections::HashSet;

use timberfall_core::config::HarvestConfig;
use timberfall_core::neighborhood::{cube_offsets, cube_volume};
use timberfall_core::types::VoxelPos;
use timberfall_world::{VoxelClassifier, VoxelWorld};

use crate::sets::{HarvestSet, TrunkSet};

/// Result of leaf resolution.
#[derive(Debug, Clone, Default)]
pub struct LeafResolution {
    /// Trunk voxels first, then owned leaves in scan order.
    pub harvest: HarvestSet,
    /// True if at least one more owned leaf was left out by the cap.
    pub truncated: bool,
}

impl LeafResolution {
    pub fn leaf_count(&self, trunk: &TrunkSet) -> usize {
        self.harvest.len().saturating_sub(trunk.len())
    }
}

/// True if a log outside `trunk` lies within `radius` of `leaf`.
pub fn belongs_to_other_tree<W: VoxelWorld + ?Sized>(
    world: &W,
    classifier: &VoxelClassifier,
    leaf: VoxelPos,
    trunk: &TrunkSet,
    radius: i32,
) -> bool {
    cube_offsets(radius).any(|offset| {
        let nearby = leaf + offset;
        classifier.is_log_at(world, nearby) && !trunk.contains(&nearby)
    })
}

/// Expand `trunk` with the leaves it owns, keeping the total within
/// `config.max_tree_size`.
///
/// Candidates are the trunk voxels' leaf neighborhoods, visited trunk by
/// trunk in discovery order. Once the cap is hit the remaining
/// neighborhoods are not scanned. A trunk already larger than the cap is
/// cut to its first `max_tree_size` voxels and gets no leaves.
pub fn resolve_owned_leaves<W: VoxelWorld + ?Sized>(
    world: &W,
    classifier: &VoxelClassifier,
    trunk: &TrunkSet,
    config: &HarvestConfig,
) -> LeafResolution {
    let cap = config.max_tree_size;
    let leaf_radius = config.leaf_search_radius;
    let scan_bound = trunk.len().saturating_mul(cube_volume(leaf_radius));

    let mut result = LeafResolution {
        harvest: HarvestSet::with_capacity(cap.min(trunk.len().max(scan_bound))),
        truncated: trunk.len() > cap,
    };
    for &log in trunk.iter().take(cap) {
        result.harvest.insert(log);
    }
    if result.truncated {
        log::debug!("Trunk of {} voxels cut to {cap}; no room for leaves", trunk.len());
        return result;
    }

    // Leaves already judged foreign; the verdict cannot change mid-scan.
    let mut rejected: HashSet<VoxelPos> = HashSet::new();

    let candidates = trunk
        .iter()
        .flat_map(|&log| cube_offsets(leaf_radius).map(move |offset| log + offset));

    for candidate in candidates {
        if result.harvest.contains(&candidate)
            || rejected.contains(&candidate)
            || !classifier.is_leaf_at(world, candidate)
        {
            continue;
        }
        if belongs_to_other_tree(
            world,
            classifier,
            candidate,
            trunk,
            config.ownership_check_radius,
        ) {
            rejected.insert(candidate);
            continue;
        }
        if result.harvest.len() >= config.max_tree_size {
            result.truncated = true;
            break;
        }
        result.harvest.insert(candidate);
    }

    log::debug!(
        "Resolved {} leaves for {} trunk voxels ({} rejected as foreign, scan bound {})",
        result.leaf_count(trunk),
        trunk.len(),
        rejected.len(),
        scan_bound
    );
    result
}
