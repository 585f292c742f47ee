use std::collections::HashSet;

use timberfall_core::config::HarvestConfig;
use timberfall_core::constants::MAX_SEARCH_RADIUS;
use timberfall_core::material::{MaterialTable, MaterialTag};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Duplicate material ID {0}")]
    DuplicateMaterialId(u16),
    #[error("Material '{0}' uses the air ID 0 but carries tags")]
    TaggedAir(String),
    #[error("Material '{0}' is tagged both Log and Leaves")]
    ConflictingTags(String),
    #[error("{field} must be at least 1, got {value}")]
    CapTooSmall { field: &'static str, value: usize },
    #[error("{field} must be within 0..={max}, got {value}")]
    RadiusOutOfRange {
        field: &'static str,
        value: i32,
        max: i32,
    },
    #[error("launch_velocity must be finite, got {0:?}")]
    NonFiniteVelocity((f32, f32, f32)),
}

/// Validate a material palette.
pub fn validate_materials(table: &MaterialTable) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut seen_ids = HashSet::new();
    for mat in &table.materials {
        if !seen_ids.insert(mat.id) {
            errors.push(ValidationError::DuplicateMaterialId(mat.id));
        }
        if mat.id == 0 && !mat.tags.is_empty() {
            errors.push(ValidationError::TaggedAir(mat.name.clone()));
        }
        if mat.has_tag(MaterialTag::Log) && mat.has_tag(MaterialTag::Leaves) {
            errors.push(ValidationError::ConflictingTags(mat.name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate harvest tunables.
pub fn validate_config(config: &HarvestConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (field, value) in [
        ("max_tree_size", config.max_tree_size),
        ("nearest_trunk_visit_cap", config.nearest_trunk_visit_cap),
    ] {
        if value == 0 {
            errors.push(ValidationError::CapTooSmall { field, value });
        }
    }

    for (field, value) in [
        ("leaf_search_radius", config.leaf_search_radius),
        ("ownership_check_radius", config.ownership_check_radius),
    ] {
        if !(0..=MAX_SEARCH_RADIUS).contains(&value) {
            errors.push(ValidationError::RadiusOutOfRange {
                field,
                value,
                max: MAX_SEARCH_RADIUS,
            });
        }
    }

    let (x, y, z) = config.launch_velocity;
    if !(x.is_finite() && y.is_finite() && z.is_finite()) {
        errors.push(ValidationError::NonFiniteVelocity(config.launch_velocity));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
