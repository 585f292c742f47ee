use glam::IVec3;
use timberfall_data::defaults::{
    BIRCH_LEAVES, BIRCH_LOG, JUNGLE_LEAVES, JUNGLE_LOG, OAK_LEAVES, OAK_LOG, STONE,
};
use timberfall_world::stamp::{CanopyShape, TreeStamp};
use timberfall_world::SparseWorld;

/// Configuration for a single benchmark scene.
pub struct SceneConfig {
    pub name: &'static str,
    pub description: &'static str,
    /// Populate the world and return the voxel the harvest click targets.
    pub build: fn(&mut SparseWorld) -> IVec3,
}

impl SceneConfig {
    /// Build a fresh world for this scene.
    pub fn build_world(&self) -> (SparseWorld, IVec3) {
        let mut world = SparseWorld::new();
        let click = (self.build)(&mut world);
        (world, click)
    }
}

/// Return the standard suite of benchmark scenes, smallest first.
pub fn standard_scenes() -> Vec<SceneConfig> {
    vec![
        SceneConfig {
            name: "lone-log",
            description: "single log on bare ground",
            build: lone_log,
        },
        SceneConfig {
            name: "oak",
            description: "five-high oak with a rounded canopy",
            build: oak,
        },
        SceneConfig {
            name: "twin-oaks",
            description: "two oaks four apart sharing a leaf band",
            build: twin_oaks,
        },
        SceneConfig {
            name: "birch-grove",
            description: "5x5 birch grove, centre tree clicked",
            build: birch_grove,
        },
        SceneConfig {
            name: "giant-trunk",
            description: "9x10x9 jungle log block over the size cap",
            build: giant_trunk,
        },
        SceneConfig {
            name: "orphan-leaf",
            description: "floating leaf blob with no trunk",
            build: orphan_leaf,
        },
    ]
}

/// Look up a scene by name.
pub fn find_scene(name: &str) -> Option<SceneConfig> {
    standard_scenes().into_iter().find(|s| s.name == name)
}

/// Three-thick stone slab with its top face at y = -1.
fn ground(world: &mut SparseWorld, half_extent: i32) {
    world.fill_box(
        IVec3::new(-half_extent, -3, -half_extent),
        IVec3::new(half_extent, -1, half_extent),
        STONE,
    );
}

fn lone_log(world: &mut SparseWorld) -> IVec3 {
    ground(world, 4);
    world.set_material(IVec3::ZERO, OAK_LOG);
    IVec3::ZERO
}

fn oak(world: &mut SparseWorld) -> IVec3 {
    ground(world, 6);
    TreeStamp::new(IVec3::ZERO, OAK_LOG, OAK_LEAVES).apply(world);
    IVec3::ZERO
}

fn twin_oaks(world: &mut SparseWorld) -> IVec3 {
    ground(world, 8);
    for x in [-2, 2] {
        TreeStamp::new(IVec3::new(x, 0, 0), OAK_LOG, OAK_LEAVES)
            .with_canopy(3, CanopyShape::Cube)
            .apply(world);
    }
    IVec3::new(-2, 0, 0)
}

fn birch_grove(world: &mut SparseWorld) -> IVec3 {
    ground(world, 14);
    for x in (-10..=10).step_by(5) {
        for z in (-10..=10).step_by(5) {
            TreeStamp::new(IVec3::new(x, 0, z), BIRCH_LOG, BIRCH_LEAVES)
                .with_trunk_height(6)
                .apply(world);
        }
    }
    // Clicking a leaf exercises the trunk locator as well.
    IVec3::new(0, 6, 1)
}

fn giant_trunk(world: &mut SparseWorld) -> IVec3 {
    ground(world, 8);
    world.fill_box(IVec3::new(-4, 0, -4), IVec3::new(4, 9, 4), JUNGLE_LOG);
    world.fill_box(IVec3::new(-6, 10, -6), IVec3::new(6, 11, 6), JUNGLE_LEAVES);
    IVec3::ZERO
}

fn orphan_leaf(world: &mut SparseWorld) -> IVec3 {
    ground(world, 4);
    let centre = IVec3::new(0, 6, 0);
    for offset in timberfall_core::neighborhood::cube_offsets(2) {
        if offset.length_squared() <= 6 {
            world.set_material(centre + offset, OAK_LEAVES);
        }
    }
    centre
}
