use super::{AquariumStore, Collection};
use crate::error::ClearAquaticsError;
use clearaquatics_schemas::{
    aquarium::NewAquarium, file_formats::Seeded, life::NewAquaticLife,
    maintenance::NewMaintenanceRecord, water::NewWaterParameter,
};

/// A fluent builder for an `AquariumStore` pre-populated with records that
/// already carry ids, such as fixture data.
///
/// Every record goes through the same validation as a live insert: readings
/// are classified afresh, water-change volumes are derived from the tank, and
/// dangling aquarium references are rejected.
#[derive(Default)]
pub struct StoreBuilder {
    aquariums: Vec<Seeded<NewAquarium>>,
    readings: Vec<Seeded<NewWaterParameter>>,
    life: Vec<Seeded<NewAquaticLife>>,
    maintenance: Vec<Seeded<NewMaintenanceRecord>>,
}

impl StoreBuilder {
    /// Creates a new, empty `StoreBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_aquariums(mut self, aquariums: Vec<Seeded<NewAquarium>>) -> Self {
        self.aquariums = aquariums;
        self
    }

    pub fn with_readings(mut self, readings: Vec<Seeded<NewWaterParameter>>) -> Self {
        self.readings = readings;
        self
    }

    pub fn with_life(mut self, life: Vec<Seeded<NewAquaticLife>>) -> Self {
        self.life = life;
        self
    }

    pub fn with_maintenance(mut self, maintenance: Vec<Seeded<NewMaintenanceRecord>>) -> Self {
        self.maintenance = maintenance;
        self
    }

    /// Consumes the builder and returns the populated store.
    ///
    /// # Errors
    ///
    /// Fails on the first record that is invalid, repeats an id within its
    /// collection, or references an aquarium that was not supplied.
    pub fn build(self) -> Result<AquariumStore, ClearAquaticsError> {
        let mut store = AquariumStore::new();

        for seeded in self.aquariums {
            let id = store.claim_id(Collection::Aquariums, &seeded.id)?;
            store.insert_aquarium(id, seeded.record)?;
        }
        for seeded in self.readings {
            let id = store.claim_id(Collection::Readings, &seeded.id)?;
            store.insert_reading(id, seeded.record)?;
        }
        for seeded in self.life {
            let id = store.claim_id(Collection::Life, &seeded.id)?;
            store.insert_life(id, seeded.record)?;
        }
        for seeded in self.maintenance {
            let id = store.claim_id(Collection::Maintenance, &seeded.id)?;
            store.insert_maintenance(id, seeded.record)?;
        }

        Ok(store)
    }
}
