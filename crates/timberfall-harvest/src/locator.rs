//! Redirect a leaf click to a trunk.
//!
//! Breadth-first search from the clicked leaf, spreading only through
//! leaf voxels. Each step scans the full 3x3x3 block around the current
//! voxel in fixed order; the first log seen ends the search. The result is
//! therefore the first log in scan order, not necessarily the closest one.

use std::collections::{HashSet, VecDeque};

use timberfall_core::neighborhood::cube_offsets;
use timberfall_core::types::VoxelPos;
use timberfall_world::{VoxelClass, VoxelClassifier, VoxelWorld};

/// Outcome of a nearest-trunk search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrunkSearch {
    /// A log voxel reachable through connected leaves.
    Found(VoxelPos),
    /// Every connected leaf was visited without meeting a log.
    Exhausted,
    /// Visiting one more leaf would exceed the visit cap.
    CapReached,
}

impl TrunkSearch {
    pub fn found(self) -> Option<VoxelPos> {
        match self {
            TrunkSearch::Found(pos) => Some(pos),
            TrunkSearch::Exhausted | TrunkSearch::CapReached => None,
        }
    }
}

/// Search outward from `seed` for a log voxel, visiting at most
/// `visit_cap` leaf voxels (the seed counts as the first visit).
///
/// The cap limits visits, not scans: once the visited set is full, leaves
/// already queued are still scanned, so a log next to the last visited
/// leaf is found. Only a new unvisited leaf beyond the cap ends the search.
pub fn find_nearest_trunk<W: VoxelWorld + ?Sized>(
    world: &W,
    classifier: &VoxelClassifier,
    seed: VoxelPos,
    visit_cap: usize,
) -> TrunkSearch {
    let mut visited = HashSet::with_capacity(visit_cap.min(1024));
    let mut queue = VecDeque::new();
    visited.insert(seed);
    queue.push_back(seed);

    while let Some(current) = queue.pop_front() {
        // The zero offset re-examines `current`; it is already visited.
        for offset in cube_offsets(1) {
            let candidate = current + offset;
            match classifier.classify_at(world, candidate) {
                VoxelClass::Log => return TrunkSearch::Found(candidate),
                VoxelClass::Leaf => {
                    if visited.contains(&candidate) {
                        continue;
                    }
                    if visited.len() >= visit_cap {
                        log::debug!(
                            "Trunk search from {seed} gave up after {} leaves",
                            visited.len()
                        );
                        return TrunkSearch::CapReached;
                    }
                    visited.insert(candidate);
                    queue.push_back(candidate);
                }
                VoxelClass::Other => {}
            }
        }
    }

    TrunkSearch::Exhausted
}
