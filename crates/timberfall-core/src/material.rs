use serde::{Deserialize, Serialize};

/// Tag attached to a material definition. Tree detection only cares about
/// trunk wood and foliage; everything else is untagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaterialTag {
    Log,
    Leaves,
}

/// A single material definition loaded from RON data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialDef {
    /// Stable material ID. 0 = air.
    pub id: u16,
    /// Human-readable name for logs and reports.
    pub name: String,
    /// Classification tags.
    #[serde(default)]
    pub tags: Vec<MaterialTag>,
}

impl MaterialDef {
    pub fn has_tag(&self, tag: MaterialTag) -> bool {
        self.tags.contains(&tag)
    }
}

/// Collection of material definitions indexed by ID.
#[derive(Debug, Clone, Default)]
pub struct MaterialTable {
    pub materials: Vec<MaterialDef>,
}

impl MaterialTable {
    /// Look up a material by ID. Returns None if not found.
    pub fn get(&self, id: u16) -> Option<&MaterialDef> {
        self.materials.iter().find(|m| m.id == id)
    }

    /// IDs of every material carrying `tag`.
    pub fn ids_with_tag(&self, tag: MaterialTag) -> impl Iterator<Item = u16> + '_ {
        self.materials
            .iter()
            .filter(move |m| m.has_tag(tag))
            .map(|m| m.id)
    }

    /// Display name for an ID, or `"unknown"`.
    pub fn name_of(&self, id: u16) -> &str {
        self.get(id).map(|m| m.name.as_str()).unwrap_or("unknown")
    }

    /// Number of materials.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
