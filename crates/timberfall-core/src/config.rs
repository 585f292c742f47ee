use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{
    LAUNCH_VELOCITY, LEAF_SEARCH_RADIUS, MAX_TREE_SIZE, NEAREST_TRUNK_VISIT_CAP,
    OWNERSHIP_CHECK_RADIUS,
};

/// Tunables for tree detection and launch, parsed from harvest.ron.
///
/// Every field falls back to its default in `constants` when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarvestConfig {
    /// Hard cap on the harvest set (trunk + owned leaves).
    pub max_tree_size: usize,
    /// Hard cap on leaf voxels visited while locating a trunk from a leaf.
    pub nearest_trunk_visit_cap: usize,
    /// Chebyshev radius around each trunk voxel scanned for leaves.
    pub leaf_search_radius: i32,
    /// Chebyshev radius around a leaf scanned for trunks of other trees.
    pub ownership_check_radius: i32,
    /// Velocity given to each replica at launch.
    pub launch_velocity: (f32, f32, f32),
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            max_tree_size: MAX_TREE_SIZE,
            nearest_trunk_visit_cap: NEAREST_TRUNK_VISIT_CAP,
            leaf_search_radius: LEAF_SEARCH_RADIUS,
            ownership_check_radius: OWNERSHIP_CHECK_RADIUS,
            launch_velocity: (LAUNCH_VELOCITY[0], LAUNCH_VELOCITY[1], LAUNCH_VELOCITY[2]),
        }
    }
}

impl HarvestConfig {
    pub fn launch_velocity(&self) -> Vec3 {
        let (x, y, z) = self.launch_velocity;
        Vec3::new(x, y, z)
    }

    /// Same tunables with both caps replaced. Handy for boundary tests.
    pub fn with_caps(mut self, max_tree_size: usize, nearest_trunk_visit_cap: usize) -> Self {
        self.max_tree_size = max_tree_size;
        self.nearest_trunk_visit_cap = nearest_trunk_visit_cap;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let cfg = HarvestConfig::default();
        assert_eq!(cfg.max_tree_size, 500);
        assert_eq!(cfg.nearest_trunk_visit_cap, 200);
        assert_eq!(cfg.leaf_search_radius, 3);
        assert_eq!(cfg.ownership_check_radius, 2);
        assert_eq!(cfg.launch_velocity(), Vec3::new(0.0, 2.5, 0.0));
    }

    #[test]
    fn test_with_caps() {
        let cfg = HarvestConfig::default().with_caps(7, 3);
        assert_eq!(cfg.max_tree_size, 7);
        assert_eq!(cfg.nearest_trunk_visit_cap, 3);
        assert_eq!(cfg.leaf_search_radius, 3);
    }
}
