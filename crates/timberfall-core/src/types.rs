use glam::IVec3;
use serde::{Deserialize, Serialize};

/// Newtype for material identifiers. 0 = air/empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MaterialId(pub u16);

impl MaterialId {
    pub const AIR: MaterialId = MaterialId(0);

    pub fn is_air(self) -> bool {
        self == Self::AIR
    }
}

/// Integer voxel coordinate in world space.
pub type VoxelPos = IVec3;

/// Contents of a single world cell.
///
/// `shape` holds host-specific block state bits (axis, orientation,
/// persistence flags). Classification only ever looks at `material`;
/// replicas carry the whole voxel so they render like the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Voxel {
    pub material: MaterialId,
    pub shape: u8,
}

impl Voxel {
    pub const AIR: Voxel = Voxel {
        material: MaterialId::AIR,
        shape: 0,
    };

    /// A voxel of the given material with default shape bits.
    pub fn of(material: MaterialId) -> Self {
        Self { material, shape: 0 }
    }

    pub fn is_air(&self) -> bool {
        self.material.is_air()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_voxel_is_air() {
        assert_eq!(Voxel::default(), Voxel::AIR);
        assert!(Voxel::default().is_air());
        assert!(!Voxel::of(MaterialId(10)).is_air());
    }
}
