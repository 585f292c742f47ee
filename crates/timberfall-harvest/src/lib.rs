//! Tree detection and harvest lifecycle.
//!
//! Detection is synchronous and bounded: a leaf click is redirected to a
//! nearby trunk, the trunk is flood-filled through 26-connected log voxels,
//! and foliage within reach of the trunk is claimed unless a log of some
//! other tree sits close to it. The orchestrator then turns every selected
//! voxel into a launched replica and later converts landed replicas into
//! dropped items.

pub mod detect;
pub mod discovery;
pub mod events;
pub mod locator;
pub mod orchestrator;
pub mod ownership;
pub mod physics;
pub mod replica;
pub mod sets;

#[cfg(test)]
mod test_harness;

pub use detect::{detect_tree, Detection};
pub use events::{InteractAction, InteractionEvent, LandingEvent};
pub use orchestrator::{DroppedItem, HarvestOrchestrator, HarvestReport, HarvestStats};
pub use physics::{BodyHandle, PhysicsHost};
pub use replica::{Replica, ReplicaArena, ReplicaId};
pub use sets::{HarvestSet, PositionSet, TrunkSet};
