pub mod classifier;
pub mod sparse;
pub mod stamp;

use timberfall_core::types::{Voxel, VoxelPos};

pub use classifier::{VoxelClass, VoxelClassifier};
pub use sparse::SparseWorld;

/// Read/write access to the host's voxel grid.
///
/// The host owns storage; the harvest pipeline only needs point reads
/// while detecting and point clears while launching. Unknown or unloaded
/// positions read as air.
pub trait VoxelWorld {
    /// Current contents of the cell at `pos`.
    fn voxel_at(&self, pos: VoxelPos) -> Voxel;

    /// Overwrite the cell at `pos`.
    fn set_voxel(&mut self, pos: VoxelPos, voxel: Voxel);

    /// Clear the cell at `pos` to air.
    fn clear_voxel(&mut self, pos: VoxelPos) {
        self.set_voxel(pos, Voxel::AIR);
    }
}
