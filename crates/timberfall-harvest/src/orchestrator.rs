//! Harvest lifecycle: interaction -> detection -> launch, and later
//! landing -> item drop.
//!
//! Detection and launch run inside `on_interact`, synchronously, because
//! the caller needs to know before returning whether to suppress the
//! interaction's default effect. Landings arrive later, one per replica, in
//! any order; each is handled from that replica's own arena record alone.

use glam::Vec3;
use timberfall_core::config::HarvestConfig;
use timberfall_core::constants::REPLICA_SPAWN_OFFSET;
use timberfall_core::types::{MaterialId, VoxelPos};
use timberfall_world::{VoxelClassifier, VoxelWorld};

use crate::detect::detect_tree;
use crate::events::{InteractAction, InteractionEvent, LandingEvent};
use crate::physics::PhysicsHost;
use crate::replica::{Replica, ReplicaArena, ReplicaId};
use crate::sets::HarvestSet;

/// Summary of one harvest.
#[derive(Debug, Clone)]
pub struct HarvestReport {
    pub clicked: VoxelPos,
    /// Trunk voxel the search started from; None on leaf fallback.
    pub origin: Option<VoxelPos>,
    pub trunk_size: usize,
    pub harvest_size: usize,
    pub leaf_fallback: bool,
    pub truncated: bool,
    /// One per harvested voxel, in harvest order.
    pub replicas: Vec<ReplicaId>,
}

/// Item dropped for a landed replica.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DroppedItem {
    pub material: MaterialId,
    pub position: Vec3,
    /// Grid position the replica was taken from.
    pub origin: VoxelPos,
}

/// Running totals across all interactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HarvestStats {
    pub harvests: u64,
    pub launched: u64,
    pub converted: u64,
    pub ignored_landings: u64,
}

impl HarvestStats {
    pub fn in_flight(&self) -> u64 {
        self.launched - self.converted
    }
}

pub struct HarvestOrchestrator {
    classifier: VoxelClassifier,
    config: HarvestConfig,
    replicas: ReplicaArena,
    stats: HarvestStats,
}

impl HarvestOrchestrator {
    pub fn new(classifier: VoxelClassifier, config: HarvestConfig) -> Self {
        Self {
            classifier,
            config,
            replicas: ReplicaArena::new(),
            stats: HarvestStats::default(),
        }
    }

    pub fn stats(&self) -> HarvestStats {
        self.stats
    }

    /// Replicas launched and not yet landed.
    pub fn in_flight(&self) -> usize {
        self.replicas.len()
    }

    pub fn replica(&self, id: ReplicaId) -> Option<&Replica> {
        self.replicas.get(id)
    }

    /// Handle a player interaction.
    ///
    /// Only a primary click on a log or leaf does anything: the event is
    /// cancelled and the detected tree is launched. Everything else is left
    /// untouched and returns None.
    pub fn on_interact<W, P>(
        &mut self,
        event: &mut InteractionEvent,
        world: &mut W,
        physics: &mut P,
    ) -> Option<HarvestReport>
    where
        W: VoxelWorld + ?Sized,
        P: PhysicsHost + ?Sized,
    {
        if event.action != InteractAction::PrimaryBlock {
            return None;
        }
        let clicked = event.target?;

        let detection = detect_tree(&*world, &self.classifier, clicked, &self.config)?;
        event.cancel();

        let replicas = self.launch(&detection.harvest, world, physics);
        self.stats.harvests += 1;

        log::info!(
            "Harvested tree at {clicked}: {} trunk + {} leaves, {} replicas launched{}",
            detection.trunk_size,
            detection.harvest.len() - detection.trunk_size,
            replicas.len(),
            if detection.truncated { " (capped)" } else { "" }
        );

        Some(HarvestReport {
            clicked,
            origin: detection.origin,
            trunk_size: detection.trunk_size,
            harvest_size: detection.harvest.len(),
            leaf_fallback: detection.leaf_fallback,
            truncated: detection.truncated,
            replicas,
        })
    }

    /// Replace every voxel in `harvest` with a launched replica.
    ///
    /// Per voxel: spawn the replica, clear the original, set the launch
    /// velocity, and switch off the host's own landing conversion.
    pub fn launch<W, P>(&mut self, harvest: &HarvestSet, world: &mut W, physics: &mut P) -> Vec<ReplicaId>
    where
        W: VoxelWorld + ?Sized,
        P: PhysicsHost + ?Sized,
    {
        let velocity = self.config.launch_velocity();
        let spawn_offset = Vec3::from_array(REPLICA_SPAWN_OFFSET);
        let mut ids = Vec::with_capacity(harvest.len());

        for &pos in harvest {
            let voxel = world.voxel_at(pos);
            let spawn_at = pos.as_vec3() + spawn_offset;
            let id = self.replicas.insert_with(|id| Replica {
                origin: pos,
                voxel,
                body: physics.spawn_replica(spawn_at, voxel, id),
            });
            world.clear_voxel(pos);

            if let Some(replica) = self.replicas.get(id) {
                physics.set_velocity(replica.body, velocity);
                physics.disable_auto_convert(replica.body);
            }
            ids.push(id);
        }

        self.stats.launched += ids.len() as u64;
        ids
    }

    /// Handle a replica landing: cancel block placement, drop an item of
    /// the replica's material where it landed, and despawn it.
    ///
    /// Landings for ids this orchestrator does not know (already landed,
    /// or never launched here) are ignored and left uncancelled.
    pub fn on_landing<P>(&mut self, event: &mut LandingEvent, physics: &mut P) -> Option<DroppedItem>
    where
        P: PhysicsHost + ?Sized,
    {
        let Some(replica) = self.replicas.remove(event.replica) else {
            log::warn!("Ignoring landing for unknown replica {:?}", event.replica);
            self.stats.ignored_landings += 1;
            return None;
        };

        event.cancel();
        let material = replica.voxel.material;
        physics.drop_item(event.position, material);
        physics.remove_replica(replica.body);
        self.stats.converted += 1;

        Some(DroppedItem {
            material,
            position: event.position,
            origin: replica.origin,
        })
    }
}
