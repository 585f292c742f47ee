//! Default values for the harvest tunables. Searches read them through
//! `HarvestConfig`, never directly.

/// Maximum number of voxels a single harvest may collect (trunk + leaves).
pub const MAX_TREE_SIZE: usize = 500;

/// Maximum number of leaf voxels visited while looking for a trunk from a
/// clicked leaf.
pub const NEAREST_TRUNK_VISIT_CAP: usize = 200;

/// Chebyshev radius scanned around each trunk voxel for leaf candidates.
pub const LEAF_SEARCH_RADIUS: i32 = 3;

/// Chebyshev radius scanned around a leaf candidate for foreign trunks.
pub const OWNERSHIP_CHECK_RADIUS: i32 = 2;

/// Upper bound accepted for either search radius. A radius of 8 already
/// means 4913 classifications per scanned voxel.
pub const MAX_SEARCH_RADIUS: i32 = 8;

/// Initial velocity imparted to every launched replica (blocks per tick).
pub const LAUNCH_VELOCITY: [f32; 3] = [0.0, 2.5, 0.0];

/// Offset from a voxel's minimum corner to the replica spawn point:
/// horizontal centre, base height.
pub const REPLICA_SPAWN_OFFSET: [f32; 3] = [0.5, 0.0, 0.5];
