use glam::Vec3;
use timberfall_core::types::{MaterialId, Voxel};

use crate::replica::ReplicaId;

/// Host-issued handle for an in-flight physics body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub u64);

/// The host's physics and entity layer, as far as harvesting needs it.
///
/// `spawn_replica` receives the orchestrator's `ReplicaId`; the host must
/// report that same id in the `LandingEvent` for the body. That id is the
/// only link between a landing and the voxel it came from.
pub trait PhysicsHost {
    /// Spawn a falling-block body looking like `voxel` at `position`.
    fn spawn_replica(&mut self, position: Vec3, voxel: Voxel, replica: ReplicaId) -> BodyHandle;

    fn set_velocity(&mut self, body: BodyHandle, velocity: Vec3);

    /// Stop the host from turning the body into an item or block by itself.
    fn disable_auto_convert(&mut self, body: BodyHandle);

    /// Drop one collectible item of `material` at `position`.
    fn drop_item(&mut self, position: Vec3, material: MaterialId);

    /// Despawn the body.
    fn remove_replica(&mut self, body: BodyHandle);
}
