use std::collections::HashMap;

use glam::IVec3;
use timberfall_core::types::{MaterialId, Voxel, VoxelPos};

use crate::VoxelWorld;

/// In-memory voxel grid storing only non-air cells.
///
/// Used by tests and the bench runner as a stand-in for host storage.
#[derive(Debug, Clone, Default)]
pub struct SparseWorld {
    voxels: HashMap<VoxelPos, Voxel>,
    /// Number of `set_voxel` calls that changed a cell.
    writes: u64,
}

impl SparseWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a voxel of `material` with default shape bits.
    pub fn set_material(&mut self, pos: VoxelPos, material: MaterialId) {
        self.set_voxel(pos, Voxel::of(material));
    }

    /// Material at `pos` (air if empty).
    pub fn material_at(&self, pos: VoxelPos) -> MaterialId {
        self.voxel_at(pos).material
    }

    /// Fill the inclusive box `min..=max` with `material`.
    pub fn fill_box(&mut self, min: IVec3, max: IVec3, material: MaterialId) {
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    self.set_material(IVec3::new(x, y, z), material);
                }
            }
        }
    }

    /// Number of non-air cells.
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Number of cells holding `material`.
    pub fn count_material(&self, material: MaterialId) -> usize {
        self.voxels
            .values()
            .filter(|v| v.material == material)
            .count()
    }

    /// Number of writes that changed a cell.
    pub fn write_count(&self) -> u64 {
        self.writes
    }
}

impl VoxelWorld for SparseWorld {
    fn voxel_at(&self, pos: VoxelPos) -> Voxel {
        self.voxels.get(&pos).copied().unwrap_or(Voxel::AIR)
    }

    fn set_voxel(&mut self, pos: VoxelPos, voxel: Voxel) {
        let changed = if voxel.is_air() {
            self.voxels.remove(&pos).is_some()
        } else {
            self.voxels.insert(pos, voxel) != Some(voxel)
        };
        if changed {
            self.writes += 1;
        }
    }
}
