use std::collections::HashSet;

use timberfall_core::types::VoxelPos;

/// Insertion-ordered set of voxel positions.
///
/// Membership is a hash lookup; iteration follows discovery order so that
/// capped searches are reproducible for identical grid content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionSet {
    order: Vec<VoxelPos>,
    members: HashSet<VoxelPos>,
}

/// Log voxels connected to a search origin.
pub type TrunkSet = PositionSet;

/// Trunk voxels plus the leaves they own.
pub type HarvestSet = PositionSet;

impl PositionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: Vec::with_capacity(capacity),
            members: HashSet::with_capacity(capacity),
        }
    }

    /// Returns false if `pos` was already present.
    pub fn insert(&mut self, pos: VoxelPos) -> bool {
        if self.members.insert(pos) {
            self.order.push(pos);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, pos: &VoxelPos) -> bool {
        self.members.contains(pos)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Positions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &VoxelPos> + '_ {
        self.order.iter()
    }

    pub fn as_slice(&self) -> &[VoxelPos] {
        &self.order
    }

    pub fn is_subset(&self, other: &PositionSet) -> bool {
        self.members.is_subset(&other.members)
    }
}

impl FromIterator<VoxelPos> for PositionSet {
    fn from_iter<I: IntoIterator<Item = VoxelPos>>(iter: I) -> Self {
        let mut set = PositionSet::new();
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

impl<'a> IntoIterator for &'a PositionSet {
    type Item = &'a VoxelPos;
    type IntoIter = std::slice::Iter<'a, VoxelPos>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}
