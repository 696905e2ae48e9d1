use crate::{
    aquarium::NewAquarium, life::NewAquaticLife, maintenance::NewMaintenanceRecord,
    species::Species, water::NewWaterParameter,
};
use serde::Deserialize;

/// A fixture entry: the submitted fields plus the id it was originally given.
#[derive(Debug, Clone, Deserialize)]
pub struct Seeded<T> {
    pub id: String,
    #[serde(flatten)]
    pub record: T,
}

#[derive(Debug, Deserialize)]
pub struct AquariumFile {
    pub schema_version: String,
    pub aquariums: Vec<Seeded<NewAquarium>>,
}

#[derive(Debug, Deserialize)]
pub struct WaterParameterFile {
    pub schema_version: String,
    pub water_parameters: Vec<Seeded<NewWaterParameter>>,
}

#[derive(Debug, Deserialize)]
pub struct AquaticLifeFile {
    pub schema_version: String,
    pub aquatic_life: Vec<Seeded<NewAquaticLife>>,
}

#[derive(Debug, Deserialize)]
pub struct MaintenanceFile {
    pub schema_version: String,
    pub maintenance_records: Vec<Seeded<NewMaintenanceRecord>>,
}

#[derive(Debug, Deserialize)]
pub struct SpeciesFile {
    pub schema_version: String,
    pub species: Vec<Species>,
}
