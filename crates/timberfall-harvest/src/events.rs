//! Host notifications consumed by the orchestrator.
//!
//! Both are cancellable in place, mirroring host event buses where a
//! listener flags an event to suppress the host's default handling.

use glam::Vec3;
use timberfall_core::types::VoxelPos;

use crate::replica::ReplicaId;

/// Kind of player interaction the host reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractAction {
    /// Primary (attack/break) click on a block.
    PrimaryBlock,
    /// Primary click at nothing.
    PrimaryAir,
    /// Secondary (use/place) click on a block.
    SecondaryBlock,
    /// Secondary click at nothing.
    SecondaryAir,
    /// Pressure plates, tripwires and other physical triggers.
    Physical,
}

/// A player interaction, delivered synchronously.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionEvent {
    pub action: InteractAction,
    /// Targeted block, if any.
    pub target: Option<VoxelPos>,
    cancelled: bool,
}

impl InteractionEvent {
    pub fn new(action: InteractAction, target: Option<VoxelPos>) -> Self {
        Self {
            action,
            target,
            cancelled: false,
        }
    }

    /// Primary click on the block at `pos`.
    pub fn primary_block(pos: VoxelPos) -> Self {
        Self::new(InteractAction::PrimaryBlock, Some(pos))
    }

    /// Suppress the host's default effect (breaking the block).
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// A replica's physics body is about to turn back into a placed block.
#[derive(Debug, Clone, PartialEq)]
pub struct LandingEvent {
    /// Id handed to the host when the replica was spawned.
    pub replica: ReplicaId,
    /// Where the body came to rest.
    pub position: Vec3,
    cancelled: bool,
}

impl LandingEvent {
    pub fn new(replica: ReplicaId, position: Vec3) -> Self {
        Self {
            replica,
            position,
            cancelled: false,
        }
    }

    /// Suppress the host's default block placement.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}
