//! Loads fixture data from a directory of YAML files.
//!
//! Expected layout:
//!
//! ```text
//! <dir>/aquariums.yaml
//! <dir>/water_parameters.yaml
//! <dir>/aquatic_life.yaml
//! <dir>/maintenance.yaml
//! <dir>/species.yaml
//! ```
//!
//! Only `aquariums.yaml` and `species.yaml` are required; a missing dependent
//! file means that collection starts empty.

use crate::{catalog::SpeciesCatalog, error::ClearAquaticsError, store::builder::StoreBuilder, store::AquariumStore};
use clearaquatics_schemas::file_formats::{
    AquariumFile, AquaticLifeFile, MaintenanceFile, SpeciesFile, WaterParameterFile,
};
use serde::de::DeserializeOwned;
use std::{fs, path::Path};

pub const SUPPORTED_SCHEMA_VERSION: &str = "1.0";

/// Everything a session starts from: user records and the species catalog.
#[derive(Debug)]
pub struct SeedData {
    pub store: AquariumStore,
    pub catalog: SpeciesCatalog,
}

impl SeedData {
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, ClearAquaticsError> {
        let dir = dir.as_ref();
        tracing::info!("Loading seed data from '{}'", dir.display());

        let aquariums: AquariumFile = read_yaml(&dir.join("aquariums.yaml"))?;
        check_version(&dir.join("aquariums.yaml"), &aquariums.schema_version)?;
        let species: SpeciesFile = read_yaml(&dir.join("species.yaml"))?;
        check_version(&dir.join("species.yaml"), &species.schema_version)?;

        let readings = read_optional::<WaterParameterFile>(&dir.join("water_parameters.yaml"))?
            .map(|f| f.water_parameters)
            .unwrap_or_default();
        let life = read_optional::<AquaticLifeFile>(&dir.join("aquatic_life.yaml"))?
            .map(|f| f.aquatic_life)
            .unwrap_or_default();
        let maintenance = read_optional::<MaintenanceFile>(&dir.join("maintenance.yaml"))?
            .map(|f| f.maintenance_records)
            .unwrap_or_default();

        let store = StoreBuilder::new()
            .with_aquariums(aquariums.aquariums)
            .with_readings(readings)
            .with_life(life)
            .with_maintenance(maintenance)
            .build()?;
        let catalog = SpeciesCatalog::new(species.species)?;

        let unknown = store
            .aquariums()
            .iter()
            .flat_map(|a| store.life_for(&a.id))
            .filter(|l| catalog.get(&l.species_id).is_none())
            .count();
        if unknown > 0 {
            tracing::warn!("{} aquatic life entries reference species missing from the catalog", unknown);
        }

        tracing::info!(
            "Seed data loaded: {} aquariums, {} species",
            store.aquariums().len(),
            catalog.len()
        );
        Ok(Self { store, catalog })
    }
}

fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, ClearAquaticsError> {
    let content = fs::read_to_string(path)
        .map_err(|e| ClearAquaticsError::FileIO(path.display().to_string(), e))?;
    serde_yaml::from_str(&content)
        .map_err(|e| ClearAquaticsError::YamlParsing(path.display().to_string(), e))
}

fn read_optional<T: DeserializeOwned + Versioned>(path: &Path) -> Result<Option<T>, ClearAquaticsError> {
    if !path.exists() {
        tracing::debug!("No fixture file at '{}', starting empty", path.display());
        return Ok(None);
    }
    let file: T = read_yaml(path)?;
    check_version(path, file.schema_version())?;
    Ok(Some(file))
}

fn check_version(path: &Path, version: &str) -> Result<(), ClearAquaticsError> {
    if version != SUPPORTED_SCHEMA_VERSION {
        return Err(ClearAquaticsError::Validation(format!(
            "'{}' has schema_version {}, expected {}",
            path.display(),
            version,
            SUPPORTED_SCHEMA_VERSION
        )));
    }
    Ok(())
}

trait Versioned {
    fn schema_version(&self) -> &str;
}

impl Versioned for WaterParameterFile {
    fn schema_version(&self) -> &str {
        &self.schema_version
    }
}

impl Versioned for AquaticLifeFile {
    fn schema_version(&self) -> &str {
        &self.schema_version
    }
}

impl Versioned for MaintenanceFile {
    fn schema_version(&self) -> &str {
        &self.schema_version
    }
}
