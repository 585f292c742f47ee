use std::collections::HashSet;

use timberfall_core::material::{MaterialTable, MaterialTag};
use timberfall_core::types::{MaterialId, VoxelPos};

use crate::VoxelWorld;

/// What a voxel means to tree detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoxelClass {
    Log,
    Leaf,
    Other,
}

/// Pure tag lookup: which materials count as trunk wood and which as foliage.
#[derive(Debug, Clone, Default)]
pub struct VoxelClassifier {
    logs: HashSet<MaterialId>,
    leaves: HashSet<MaterialId>,
}

impl VoxelClassifier {
    /// Build from explicit ID lists.
    pub fn new(
        logs: impl IntoIterator<Item = MaterialId>,
        leaves: impl IntoIterator<Item = MaterialId>,
    ) -> Self {
        Self {
            logs: logs.into_iter().collect(),
            leaves: leaves.into_iter().collect(),
        }
    }

    /// Build from the tags in a material table.
    pub fn from_table(table: &MaterialTable) -> Self {
        let classifier = Self::new(
            table.ids_with_tag(MaterialTag::Log).map(MaterialId),
            table.ids_with_tag(MaterialTag::Leaves).map(MaterialId),
        );
        log::debug!(
            "Classifier: {} log materials, {} leaf materials",
            classifier.logs.len(),
            classifier.leaves.len()
        );
        classifier
    }

    pub fn is_log(&self, material: MaterialId) -> bool {
        self.logs.contains(&material)
    }

    pub fn is_leaf(&self, material: MaterialId) -> bool {
        self.leaves.contains(&material)
    }

    /// Log wins if a material is (invalidly) tagged both ways.
    pub fn classify(&self, material: MaterialId) -> VoxelClass {
        if self.is_log(material) {
            VoxelClass::Log
        } else if self.is_leaf(material) {
            VoxelClass::Leaf
        } else {
            VoxelClass::Other
        }
    }

    /// Classify whatever currently occupies `pos` in `world`.
    pub fn classify_at<W: VoxelWorld + ?Sized>(&self, world: &W, pos: VoxelPos) -> VoxelClass {
        self.classify(world.voxel_at(pos).material)
    }

    pub fn is_log_at<W: VoxelWorld + ?Sized>(&self, world: &W, pos: VoxelPos) -> bool {
        self.is_log(world.voxel_at(pos).material)
    }

    pub fn is_leaf_at<W: VoxelWorld + ?Sized>(&self, world: &W, pos: VoxelPos) -> bool {
        self.is_leaf(world.voxel_at(pos).material)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SparseWorld;
    use glam::IVec3;
    use timberfall_data::defaults::{self, BIRCH_LEAVES, JUNGLE_LOG, OAK_LEAVES, OAK_LOG, OAK_PLANKS};

    #[test]
    fn test_classify_builtin_palette() {
        let table = defaults::tree_palette().expect("palette");
        let classifier = VoxelClassifier::from_table(&table);
        assert_eq!(classifier.classify(OAK_LOG), VoxelClass::Log);
        assert_eq!(classifier.classify(JUNGLE_LOG), VoxelClass::Log);
        assert_eq!(classifier.classify(OAK_LEAVES), VoxelClass::Leaf);
        assert_eq!(classifier.classify(BIRCH_LEAVES), VoxelClass::Leaf);
        assert_eq!(classifier.classify(OAK_PLANKS), VoxelClass::Other);
        assert_eq!(classifier.classify(MaterialId::AIR), VoxelClass::Other);
    }

    #[test]
    fn test_log_wins_on_double_tag() {
        let classifier = VoxelClassifier::new([MaterialId(5)], [MaterialId(5)]);
        assert_eq!(classifier.classify(MaterialId(5)), VoxelClass::Log);
        assert!(classifier.is_leaf(MaterialId(5)));
    }

    #[test]
    fn test_classify_at_reads_world() {
        let classifier = VoxelClassifier::new([OAK_LOG], [OAK_LEAVES]);
        let mut world = SparseWorld::new();
        world.set_material(IVec3::new(0, 1, 0), OAK_LOG);
        world.set_material(IVec3::new(0, 2, 0), OAK_LEAVES);
        assert!(classifier.is_log_at(&world, IVec3::new(0, 1, 0)));
        assert!(classifier.is_leaf_at(&world, IVec3::new(0, 2, 0)));
        assert_eq!(
            classifier.classify_at(&world, IVec3::new(0, 3, 0)),
            VoxelClass::Other
        );
    }
}
