//! Shared fixtures for detection and orchestrator tests: the built-in
//! palette's classifier, small world builders, and a physics host that
//! records every call and can deliver landings on demand.

use std::collections::{HashMap, HashSet};

use glam::{IVec3, Vec3};
use timberfall_core::types::{MaterialId, Voxel};
use timberfall_data::defaults;
use timberfall_world::{SparseWorld, VoxelClassifier};

use crate::events::LandingEvent;
use crate::physics::{BodyHandle, PhysicsHost};
use crate::replica::ReplicaId;

pub const LOG: MaterialId = defaults::OAK_LOG;
pub const LEAVES: MaterialId = defaults::OAK_LEAVES;
pub const OTHER_LOG: MaterialId = defaults::SPRUCE_LOG;
pub const STONE: MaterialId = defaults::STONE;

pub fn classifier() -> VoxelClassifier {
    VoxelClassifier::from_table(&defaults::tree_palette().expect("built-in palette"))
}

/// Vertical log column of `height` voxels starting at `base`.
pub fn column(world: &mut SparseWorld, base: IVec3, height: i32) {
    for dy in 0..height {
        world.set_material(base + IVec3::new(0, dy, 0), LOG);
    }
}

/// Straight row of logs along +x.
pub fn log_row(world: &mut SparseWorld, start: IVec3, length: i32) {
    for dx in 0..length {
        world.set_material(start + IVec3::new(dx, 0, 0), LOG);
    }
}

/// Fill every air cell within Chebyshev `radius` of `center` with leaves.
pub fn leaf_cube(world: &mut SparseWorld, center: IVec3, radius: i32) {
    for offset in timberfall_core::neighborhood::cube_offsets(radius) {
        let pos = center + offset;
        if world.material_at(pos).is_air() {
            world.set_material(pos, LEAVES);
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpawnRecord {
    pub body: BodyHandle,
    pub position: Vec3,
    pub voxel: Voxel,
    pub replica: ReplicaId,
}

/// Physics host that records calls instead of simulating.
#[derive(Debug, Default)]
pub struct RecordingHost {
    next_body: u64,
    pub spawns: Vec<SpawnRecord>,
    pub velocities: HashMap<BodyHandle, Vec3>,
    pub no_auto_convert: HashSet<BodyHandle>,
    pub drops: Vec<(Vec3, MaterialId)>,
    pub removed: Vec<BodyHandle>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bodies spawned and not yet removed.
    pub fn live_bodies(&self) -> Vec<&SpawnRecord> {
        self.spawns
            .iter()
            .filter(|s| !self.removed.contains(&s.body))
            .collect()
    }

    /// A landing notification for every live body, at its spawn point.
    pub fn landings(&self) -> Vec<LandingEvent> {
        self.live_bodies()
            .into_iter()
            .map(|s| LandingEvent::new(s.replica, s.position))
            .collect()
    }
}

impl PhysicsHost for RecordingHost {
    fn spawn_replica(&mut self, position: Vec3, voxel: Voxel, replica: ReplicaId) -> BodyHandle {
        let body = BodyHandle(self.next_body);
        self.next_body += 1;
        self.spawns.push(SpawnRecord {
            body,
            position,
            voxel,
            replica,
        });
        body
    }

    fn set_velocity(&mut self, body: BodyHandle, velocity: Vec3) {
        self.velocities.insert(body, velocity);
    }

    fn disable_auto_convert(&mut self, body: BodyHandle) {
        self.no_auto_convert.insert(body);
    }

    fn drop_item(&mut self, position: Vec3, material: MaterialId) {
        self.drops.push((position, material));
    }

    fn remove_replica(&mut self, body: BodyHandle) {
        self.removed.push(body);
    }
}
