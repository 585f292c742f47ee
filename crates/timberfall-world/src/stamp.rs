//! Deterministic tree stamps for scenes and tests.

use glam::IVec3;
use timberfall_core::neighborhood::cube_offsets;
use timberfall_core::types::{MaterialId, Voxel};

use crate::VoxelWorld;

/// Canopy silhouette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanopyShape {
    /// Full cube of the canopy radius.
    Cube,
    /// Rounded blob: offsets with |d|^2 <= r^2 + r.
    Sphere,
}

/// A straight single-column tree with a canopy centred on the trunk top.
#[derive(Debug, Clone, Copy)]
pub struct TreeStamp {
    /// Lowest trunk voxel.
    pub base: IVec3,
    /// Number of trunk voxels stacked upward from `base`.
    pub trunk_height: i32,
    /// Chebyshev radius of the canopy around the trunk top. 0 = no canopy.
    pub canopy_radius: i32,
    pub canopy_shape: CanopyShape,
    pub log: MaterialId,
    pub leaves: MaterialId,
}

/// Counts of voxels written by a stamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StampSummary {
    pub logs: usize,
    pub leaves: usize,
}

impl TreeStamp {
    /// A five-high trunk with a rounded radius-2 canopy.
    pub fn new(base: IVec3, log: MaterialId, leaves: MaterialId) -> Self {
        Self {
            base,
            trunk_height: 5,
            canopy_radius: 2,
            canopy_shape: CanopyShape::Sphere,
            log,
            leaves,
        }
    }

    pub fn with_trunk_height(mut self, trunk_height: i32) -> Self {
        self.trunk_height = trunk_height;
        self
    }

    pub fn with_canopy(mut self, radius: i32, shape: CanopyShape) -> Self {
        self.canopy_radius = radius;
        self.canopy_shape = shape;
        self
    }

    /// Topmost trunk voxel (the canopy centre).
    pub fn trunk_top(&self) -> IVec3 {
        self.base + IVec3::new(0, self.trunk_height.max(1) - 1, 0)
    }

    /// Write the tree into `world`. Leaves never overwrite non-air cells,
    /// so trunks and neighboring trees keep their voxels.
    pub fn apply<W: VoxelWorld + ?Sized>(&self, world: &mut W) -> StampSummary {
        let mut summary = StampSummary::default();

        for dy in 0..self.trunk_height {
            world.set_voxel(self.base + IVec3::new(0, dy, 0), Voxel::of(self.log));
            summary.logs += 1;
        }

        if self.canopy_radius <= 0 {
            return summary;
        }

        let top = self.trunk_top();
        let r = self.canopy_radius;
        for offset in cube_offsets(r) {
            let inside = match self.canopy_shape {
                CanopyShape::Cube => true,
                CanopyShape::Sphere => offset.length_squared() <= r * r + r,
            };
            let pos = top + offset;
            if inside && world.voxel_at(pos).is_air() {
                world.set_voxel(pos, Voxel::of(self.leaves));
                summary.leaves += 1;
            }
        }

        summary
    }
}
