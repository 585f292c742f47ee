//! Built-in material palette and well-known IDs within it.

use timberfall_core::material::MaterialTable;
use timberfall_core::types::MaterialId;

use crate::LoadError;

/// RON source of the built-in palette.
pub const TREE_PALETTE_RON: &str = include_str!("../../../data/materials/trees.ron");

/// RON source of the shipped harvest tunables.
pub const HARVEST_CONFIG_RON: &str = include_str!("../../../data/harvest.ron");

pub const STONE: MaterialId = MaterialId(1);
pub const DIRT: MaterialId = MaterialId(2);
pub const GRASS_BLOCK: MaterialId = MaterialId(3);

pub const OAK_LOG: MaterialId = MaterialId(10);
pub const BIRCH_LOG: MaterialId = MaterialId(11);
pub const SPRUCE_LOG: MaterialId = MaterialId(12);
pub const JUNGLE_LOG: MaterialId = MaterialId(13);

pub const OAK_LEAVES: MaterialId = MaterialId(20);
pub const BIRCH_LEAVES: MaterialId = MaterialId(21);
pub const SPRUCE_LEAVES: MaterialId = MaterialId(22);
pub const JUNGLE_LEAVES: MaterialId = MaterialId(23);

pub const OAK_PLANKS: MaterialId = MaterialId(30);

/// Parse and validate the built-in palette.
pub fn tree_palette() -> Result<MaterialTable, LoadError> {
    crate::load_validated_materials(&[TREE_PALETTE_RON])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_ids_exist_in_palette() {
        let table = tree_palette().expect("palette");
        for (id, name) in [
            (OAK_LOG, "Oak Log"),
            (BIRCH_LEAVES, "Birch Leaves"),
            (OAK_PLANKS, "Oak Planks"),
            (STONE, "Stone"),
        ] {
            assert_eq!(table.name_of(id.0), name);
        }
    }
}
