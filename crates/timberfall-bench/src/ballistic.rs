//! Minimal falling-block physics host for exercising the full harvest
//! lifecycle outside a game.
//!
//! Bodies integrate gravity and drag once per tick and land when they
//! enter a solid cell, or when they fall through `kill_floor_y`.

use glam::{IVec3, Vec3};
use timberfall_core::types::{MaterialId, Voxel};
use timberfall_harvest::{BodyHandle, LandingEvent, PhysicsHost, ReplicaId};
use timberfall_world::VoxelWorld;

/// Downward acceleration per tick, in blocks.
pub const GRAVITY: f32 = 0.04;
/// Velocity multiplier applied every tick.
pub const DRAG: f32 = 0.98;

#[derive(Debug, Clone)]
struct Body {
    replica: ReplicaId,
    voxel: Voxel,
    position: Vec3,
    velocity: Vec3,
    auto_convert: bool,
    landed: bool,
    removed: bool,
}

#[derive(Debug, Clone)]
pub struct BallisticHost {
    bodies: Vec<Body>,
    kill_floor_y: f32,
    drops: Vec<(Vec3, MaterialId)>,
    tick: u64,
}

impl BallisticHost {
    pub fn new(kill_floor_y: f32) -> Self {
        Self {
            bodies: Vec::new(),
            kill_floor_y,
            drops: Vec::new(),
            tick: 0,
        }
    }

    /// Advance one tick and return landing notifications for bodies that
    /// touched down. Each body lands at most once.
    pub fn step<W: VoxelWorld + ?Sized>(&mut self, world: &W) -> Vec<LandingEvent> {
        self.tick += 1;
        let mut landings = Vec::new();

        for body in self.bodies.iter_mut().filter(|b| !b.landed && !b.removed) {
            let prev_y = body.position.y;
            body.velocity.y -= GRAVITY;
            body.velocity *= DRAG;
            body.position += body.velocity;

            if body.velocity.y >= 0.0 {
                continue;
            }
            let mut cell: IVec3 = body.position.floor().as_ivec3();
            let rest_y = if !world.voxel_at(cell).is_air() {
                // A fast body can sink more than one cell per tick; rest on
                // top of the solid run it fell into.
                let ceiling = prev_y.floor() as i32;
                while cell.y < ceiling && !world.voxel_at(cell + IVec3::Y).is_air() {
                    cell.y += 1;
                }
                Some(cell.y as f32 + 1.0)
            } else if body.position.y <= self.kill_floor_y {
                Some(self.kill_floor_y)
            } else {
                None
            };

            if let Some(y) = rest_y {
                body.position.y = y;
                body.velocity = Vec3::ZERO;
                body.landed = true;
                if body.auto_convert {
                    log::warn!(
                        "Body for {:?} ({:?}) landed with auto-convert on",
                        body.replica,
                        body.voxel.material
                    );
                }
                landings.push(LandingEvent::new(body.replica, body.position));
            }
        }

        landings
    }

    /// Steps taken so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Bodies spawned and not yet removed.
    pub fn live_bodies(&self) -> usize {
        self.bodies.iter().filter(|b| !b.removed).count()
    }

    pub fn spawned(&self) -> usize {
        self.bodies.len()
    }

    /// Items dropped so far.
    pub fn drops(&self) -> &[(Vec3, MaterialId)] {
        &self.drops
    }

    /// Height of the highest body still in the world.
    pub fn highest_live_y(&self) -> Option<f32> {
        self.bodies
            .iter()
            .filter(|b| !b.removed)
            .map(|b| b.position.y)
            .reduce(f32::max)
    }

    fn body_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.bodies.get_mut(handle.0 as usize)
    }
}

impl PhysicsHost for BallisticHost {
    fn spawn_replica(&mut self, position: Vec3, voxel: Voxel, replica: ReplicaId) -> BodyHandle {
        self.bodies.push(Body {
            replica,
            voxel,
            position,
            velocity: Vec3::ZERO,
            auto_convert: true,
            landed: false,
            removed: false,
        });
        BodyHandle((self.bodies.len() - 1) as u64)
    }

    fn set_velocity(&mut self, body: BodyHandle, velocity: Vec3) {
        if let Some(b) = self.body_mut(body) {
            b.velocity = velocity;
        }
    }

    fn disable_auto_convert(&mut self, body: BodyHandle) {
        if let Some(b) = self.body_mut(body) {
            b.auto_convert = false;
        }
    }

    fn drop_item(&mut self, position: Vec3, material: MaterialId) {
        self.drops.push((position, material));
    }

    fn remove_replica(&mut self, body: BodyHandle) {
        if let Some(b) = self.body_mut(body) {
            b.removed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timberfall_core::config::HarvestConfig;
    use timberfall_harvest::{HarvestOrchestrator, InteractionEvent, Replica, ReplicaArena};
    use timberfall_data::defaults;
    use timberfall_world::{SparseWorld, VoxelClassifier};

    fn ground() -> SparseWorld {
        let mut world = SparseWorld::new();
        world.fill_box(IVec3::new(-4, -3, -4), IVec3::new(4, -1, 4), defaults::STONE);
        world
    }

    #[test]
    fn test_launched_body_rises_then_lands_on_ground() {
        let mut world = ground();
        world.set_material(IVec3::ZERO, defaults::OAK_LOG);
        let mut host = BallisticHost::new(-64.0);
        let mut orch = HarvestOrchestrator::new(
            VoxelClassifier::from_table(&defaults::tree_palette().expect("palette")),
            HarvestConfig::default(),
        );

        let mut event = InteractionEvent::primary_block(IVec3::ZERO);
        orch.on_interact(&mut event, &mut world, &mut host).expect("harvest");

        host.step(&world);
        assert!(host.highest_live_y().expect("body") > 2.0, "body should rise");

        let mut landings = Vec::new();
        for _ in 0..400 {
            landings.extend(host.step(&world));
        }
        assert_eq!(landings.len(), 1, "exactly one landing");
        assert_eq!(landings[0].position.y, 0.0, "rests on top of the slab");

        let mut landing = landings.remove(0);
        let item = orch.on_landing(&mut landing, &mut host).expect("known replica");
        assert_eq!(item.material, defaults::OAK_LOG);
        assert_eq!(host.drops().len(), 1);
        assert_eq!(host.live_bodies(), 0);
    }

    #[test]
    fn test_kill_floor_lands_bodies_without_ground() {
        let world = SparseWorld::new();
        let mut host = BallisticHost::new(-10.0);
        let mut arena = ReplicaArena::new();
        let voxel = Voxel::of(defaults::OAK_LEAVES);
        let id = arena.insert_with(|id| Replica {
            origin: IVec3::ZERO,
            voxel,
            body: host.spawn_replica(Vec3::ZERO, voxel, id),
        });

        let mut landed = Vec::new();
        for _ in 0..200 {
            landed.extend(host.step(&world));
        }
        assert_eq!(landed.len(), 1);
        assert_eq!(landed[0].position.y, -10.0);
        assert_eq!(landed[0].replica, id);
        assert_eq!(host.tick(), 200);
    }

    #[test]
    fn test_removed_bodies_stop_moving() {
        let world = SparseWorld::new();
        let mut host = BallisticHost::new(-1000.0);
        let mut arena = ReplicaArena::new();
        let voxel = Voxel::of(defaults::OAK_LOG);
        let id = arena.insert_with(|id| Replica {
            origin: IVec3::ZERO,
            voxel,
            body: host.spawn_replica(Vec3::ZERO, voxel, id),
        });
        let body = arena.get(id).expect("replica").body;

        host.step(&world);
        host.remove_replica(body);
        assert_eq!(host.live_bodies(), 0);
        for _ in 0..50 {
            assert!(host.step(&world).is_empty());
        }
        assert_eq!(host.spawned(), 1);
    }
}
