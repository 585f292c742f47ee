pub mod defaults;
pub mod validator;

use timberfall_core::config::HarvestConfig;
use timberfall_core::error::TimberfallError;
use timberfall_core::material::{MaterialDef, MaterialTable};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to parse materials RON: {0}")]
    MaterialParseError(String),
    #[error("Failed to parse harvest config RON: {0}")]
    ConfigParseError(String),
    #[error("Invalid data: {}", format_errors(.0))]
    Invalid(Vec<validator::ValidationError>),
}

impl From<LoadError> for TimberfallError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Invalid(_) => TimberfallError::InvalidConfig(err.to_string()),
            other => TimberfallError::DataLoad(other.to_string()),
        }
    }
}

fn format_errors(errors: &[validator::ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Parse a single materials RON string into a MaterialTable.
pub fn load_materials_from_str(ron_str: &str) -> Result<MaterialTable, LoadError> {
    let options = ron::Options::default();
    let materials: Vec<MaterialDef> = options
        .from_str(ron_str)
        .map_err(|e| LoadError::MaterialParseError(e.to_string()))?;
    Ok(MaterialTable { materials })
}

/// Load and merge multiple material sources into a single MaterialTable.
pub fn load_all_materials(sources: &[&str]) -> Result<MaterialTable, LoadError> {
    let mut all_materials = Vec::new();
    for source in sources {
        let table = load_materials_from_str(source)?;
        all_materials.extend(table.materials);
    }
    Ok(MaterialTable {
        materials: all_materials,
    })
}

/// Parse harvest tunables from a RON string. Missing fields take defaults.
pub fn load_config_from_str(ron_str: &str) -> Result<HarvestConfig, LoadError> {
    let options = ron::Options::default();
    options
        .from_str(ron_str)
        .map_err(|e| LoadError::ConfigParseError(e.to_string()))
}

/// Parse and validate a material palette in one step.
pub fn load_validated_materials(sources: &[&str]) -> Result<MaterialTable, LoadError> {
    let table = load_all_materials(sources)?;
    validator::validate_materials(&table).map_err(LoadError::Invalid)?;
    log::debug!("Loaded {} materials", table.len());
    Ok(table)
}

/// Parse and validate harvest tunables in one step.
pub fn load_validated_config(ron_str: &str) -> Result<HarvestConfig, LoadError> {
    let config = load_config_from_str(ron_str)?;
    validator::validate_config(&config).map_err(LoadError::Invalid)?;
    Ok(config)
}
