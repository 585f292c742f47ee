//! Generational arena of in-flight replicas.
//!
//! Slots are recycled through a free list. A generation counter per slot
//! makes stale ids from recycled slots miss instead of aliasing a newer
//! replica.

use timberfall_core::types::{Voxel, VoxelPos};

use crate::physics::BodyHandle;

/// Key of a replica in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReplicaId {
    index: u32,
    generation: u32,
}

impl ReplicaId {
    pub fn index(self) -> u32 {
        self.index
    }

    pub fn generation(self) -> u32 {
        self.generation
    }
}

/// A launched stand-in for one harvested voxel.
#[derive(Debug, Clone, PartialEq)]
pub struct Replica {
    /// Grid position the voxel was taken from.
    pub origin: VoxelPos,
    /// What the voxel was (material and shape bits).
    pub voxel: Voxel,
    /// The host's physics body.
    pub body: BodyHandle,
}

#[derive(Debug, Clone)]
struct Entry {
    generation: u32,
    replica: Option<Replica>,
}

#[derive(Debug, Clone, Default)]
pub struct ReplicaArena {
    entries: Vec<Entry>,
    free_slots: Vec<u32>,
    live: usize,
}

impl ReplicaArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a replica built from its own id.
    ///
    /// The id exists before the replica so it can be handed to the host
    /// when the physics body is spawned.
    pub fn insert_with(&mut self, build: impl FnOnce(ReplicaId) -> Replica) -> ReplicaId {
        let index = match self.free_slots.pop() {
            Some(index) => index,
            None => {
                self.entries.push(Entry {
                    generation: 0,
                    replica: None,
                });
                (self.entries.len() - 1) as u32
            }
        };
        let entry = &mut self.entries[index as usize];
        let id = ReplicaId {
            index,
            generation: entry.generation,
        };
        entry.replica = Some(build(id));
        self.live += 1;
        id
    }

    pub fn get(&self, id: ReplicaId) -> Option<&Replica> {
        self.entries
            .get(id.index as usize)
            .filter(|e| e.generation == id.generation)
            .and_then(|e| e.replica.as_ref())
    }

    /// Remove and return the replica. Stale or unknown ids return None.
    pub fn remove(&mut self, id: ReplicaId) -> Option<Replica> {
        let entry = self.entries.get_mut(id.index as usize)?;
        if entry.generation != id.generation {
            return None;
        }
        let replica = entry.replica.take()?;
        entry.generation = entry.generation.wrapping_add(1);
        self.free_slots.push(id.index);
        self.live -= 1;
        Some(replica)
    }

    /// Number of replicas in flight.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }
}
