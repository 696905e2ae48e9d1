//! In-memory record keeping for tanks and everything attached to them.
//!
//! The store owns four collections. Readings, life entries and maintenance
//! records always reference a live aquarium, and deleting an aquarium removes
//! all three. Ids are opaque strings and are never handed out twice, even
//! after the entity that held one is deleted.

pub mod builder;
mod validate;

use crate::{error::ClearAquaticsError, maintenance, readings, status};
use clearaquatics_schemas::{
    aquarium::{Aquarium, AquariumUpdate, NewAquarium},
    life::{AquaticLife, AquaticLifeUpdate, NewAquaticLife},
    maintenance::{MaintenanceRecord, NewMaintenanceRecord},
    water::{NewWaterParameter, WaterParameter},
};
use std::collections::HashSet;
use uuid::Uuid;

/// Each collection has its own id namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Collection {
    Aquariums,
    Readings,
    Life,
    Maintenance,
}

#[derive(Debug, Default)]
pub struct AquariumStore {
    aquariums: Vec<Aquarium>,
    readings: Vec<WaterParameter>,
    life: Vec<AquaticLife>,
    maintenance: Vec<MaintenanceRecord>,
    issued_ids: HashSet<(Collection, String)>,
}

impl AquariumStore {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Aquariums ---

    pub fn add_aquarium(&mut self, new: NewAquarium) -> Result<Aquarium, ClearAquaticsError> {
        let id = self.fresh_id(Collection::Aquariums);
        self.insert_aquarium(id, new)
    }

    pub(crate) fn insert_aquarium(
        &mut self,
        id: String,
        new: NewAquarium,
    ) -> Result<Aquarium, ClearAquaticsError> {
        validate::aquarium_fields(&new.name, new.volume)?;
        let aquarium = new.with_id(id);
        tracing::debug!("Added aquarium '{}' ({})", aquarium.name, aquarium.id);
        self.aquariums.push(aquarium.clone());
        Ok(aquarium)
    }

    pub fn update_aquarium(
        &mut self,
        id: &str,
        update: AquariumUpdate,
    ) -> Result<Aquarium, ClearAquaticsError> {
        let aquarium = self
            .aquariums
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| ClearAquaticsError::AquariumNotFound(id.to_string()))?;

        let mut updated = aquarium.clone();
        if let Some(name) = update.name {
            updated.name = name;
        }
        if let Some(volume) = update.volume {
            updated.volume = volume;
        }
        if let Some(water_type) = update.water_type {
            updated.water_type = water_type;
        }
        if let Some(setup_date) = update.setup_date {
            updated.setup_date = setup_date;
        }
        if let Some(description) = update.description {
            updated.description = description;
        }
        if let Some(light_level) = update.light_level {
            updated.light_level = light_level;
        }
        if let Some(co2_injection) = update.co2_injection {
            updated.co2_injection = co2_injection;
        }
        validate::aquarium_fields(&updated.name, updated.volume)?;

        *aquarium = updated.clone();
        tracing::debug!("Updated aquarium {}", id);
        Ok(updated)
    }

    /// Removes the aquarium together with its readings, life and maintenance log.
    pub fn delete_aquarium(&mut self, id: &str) -> Result<(), ClearAquaticsError> {
        let before = self.aquariums.len();
        self.aquariums.retain(|a| a.id != id);
        if self.aquariums.len() == before {
            return Err(ClearAquaticsError::AquariumNotFound(id.to_string()));
        }

        let counts = (self.readings.len(), self.life.len(), self.maintenance.len());
        self.readings.retain(|r| r.aquarium_id != id);
        self.life.retain(|l| l.aquarium_id != id);
        self.maintenance.retain(|m| m.aquarium_id != id);
        tracing::debug!(
            "Deleted aquarium {} with {} readings, {} life entries, {} maintenance records",
            id,
            counts.0 - self.readings.len(),
            counts.1 - self.life.len(),
            counts.2 - self.maintenance.len(),
        );
        Ok(())
    }

    pub fn aquarium(&self, id: &str) -> Result<&Aquarium, ClearAquaticsError> {
        self.aquariums
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| ClearAquaticsError::AquariumNotFound(id.to_string()))
    }

    pub fn aquariums(&self) -> &[Aquarium] {
        &self.aquariums
    }

    // --- Water parameters ---

    /// Records a reading, classifying it against its ideal band.
    pub fn add_reading(&mut self, new: NewWaterParameter) -> Result<WaterParameter, ClearAquaticsError> {
        let id = self.fresh_id(Collection::Readings);
        self.insert_reading(id, new)
    }

    pub(crate) fn insert_reading(
        &mut self,
        id: String,
        new: NewWaterParameter,
    ) -> Result<WaterParameter, ClearAquaticsError> {
        self.aquarium(&new.aquarium_id)?;
        validate::reading_fields(&new)?;

        let status = status::classify(new.value, new.ideal_min, new.ideal_max);
        let reading = new.with_status(id, status);
        if status.is_alert() {
            tracing::debug!(
                "Reading {} of {} = {} is {} (ideal {}-{})",
                reading.id,
                reading.parameter,
                reading.value,
                status,
                reading.ideal_min,
                reading.ideal_max
            );
        }
        self.readings.push(reading.clone());
        Ok(reading)
    }

    pub fn delete_reading(&mut self, id: &str) -> Result<(), ClearAquaticsError> {
        let before = self.readings.len();
        self.readings.retain(|r| r.id != id);
        if self.readings.len() == before {
            return Err(ClearAquaticsError::ReadingNotFound(id.to_string()));
        }
        Ok(())
    }

    /// All readings for a tank in insertion order.
    pub fn readings_for<'a>(&'a self, aquarium_id: &'a str) -> impl Iterator<Item = &'a WaterParameter> + 'a {
        self.readings.iter().filter(move |r| r.aquarium_id == aquarium_id)
    }

    /// Most recent reading per parameter for a tank.
    pub fn latest_readings(&self, aquarium_id: &str) -> Vec<&WaterParameter> {
        readings::latest_by_parameter(self.readings.iter().filter(|r| r.aquarium_id == aquarium_id))
    }

    /// Number of the tank's readings, across its whole history, that are not `good`.
    pub fn alert_count(&self, aquarium_id: &str) -> usize {
        self.readings_for(aquarium_id).filter(|r| r.status.is_alert()).count()
    }

    // --- Aquatic life ---

    pub fn add_life(&mut self, new: NewAquaticLife) -> Result<AquaticLife, ClearAquaticsError> {
        let id = self.fresh_id(Collection::Life);
        self.insert_life(id, new)
    }

    pub(crate) fn insert_life(
        &mut self,
        id: String,
        new: NewAquaticLife,
    ) -> Result<AquaticLife, ClearAquaticsError> {
        self.aquarium(&new.aquarium_id)?;
        validate::non_empty("species id", &new.species_id)?;

        let life = new.with_id(id);
        tracing::debug!("Added {} to aquarium {}", life.species_id, life.aquarium_id);
        self.life.push(life.clone());
        Ok(life)
    }

    pub fn update_life(
        &mut self,
        id: &str,
        update: AquaticLifeUpdate,
    ) -> Result<AquaticLife, ClearAquaticsError> {
        if let Some(species_id) = &update.species_id {
            validate::non_empty("species id", species_id)?;
        }
        let life = self
            .life
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| ClearAquaticsError::LifeNotFound(id.to_string()))?;

        if let Some(species_id) = update.species_id {
            life.species_id = species_id;
        }
        if let Some(added_date) = update.added_date {
            life.added_date = added_date;
        }
        if let Some(notes) = update.notes {
            life.notes = notes;
        }
        Ok(life.clone())
    }

    /// Works for entries whose species is missing from the catalog as well.
    pub fn delete_life(&mut self, id: &str) -> Result<(), ClearAquaticsError> {
        let before = self.life.len();
        self.life.retain(|l| l.id != id);
        if self.life.len() == before {
            return Err(ClearAquaticsError::LifeNotFound(id.to_string()));
        }
        Ok(())
    }

    pub fn life_for<'a>(&'a self, aquarium_id: &'a str) -> impl Iterator<Item = &'a AquaticLife> + 'a {
        self.life.iter().filter(move |l| l.aquarium_id == aquarium_id)
    }

    // --- Maintenance ---

    /// Logs maintenance. Water changes get their volume from the tank size.
    pub fn add_maintenance(
        &mut self,
        new: NewMaintenanceRecord,
    ) -> Result<MaintenanceRecord, ClearAquaticsError> {
        let id = self.fresh_id(Collection::Maintenance);
        self.insert_maintenance(id, new)
    }

    pub(crate) fn insert_maintenance(
        &mut self,
        id: String,
        new: NewMaintenanceRecord,
    ) -> Result<MaintenanceRecord, ClearAquaticsError> {
        let volume = self.aquarium(&new.aquarium_id)?.volume;
        validate::maintenance_task(&new.task)?;

        let record = MaintenanceRecord {
            id,
            aquarium_id: new.aquarium_id,
            date: new.date,
            notes: new.notes,
            kind: maintenance::resolve_task(new.task, volume),
        };
        tracing::debug!(
            "Logged maintenance for aquarium {}: {}",
            record.aquarium_id,
            maintenance::describe(&record)
        );
        self.maintenance.push(record.clone());
        Ok(record)
    }

    pub fn update_maintenance_notes(
        &mut self,
        id: &str,
        notes: Option<String>,
    ) -> Result<MaintenanceRecord, ClearAquaticsError> {
        let record = self
            .maintenance
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| ClearAquaticsError::MaintenanceRecordNotFound(id.to_string()))?;
        record.notes = notes;
        Ok(record.clone())
    }

    pub fn delete_maintenance(&mut self, id: &str) -> Result<(), ClearAquaticsError> {
        let before = self.maintenance.len();
        self.maintenance.retain(|m| m.id != id);
        if self.maintenance.len() == before {
            return Err(ClearAquaticsError::MaintenanceRecordNotFound(id.to_string()));
        }
        Ok(())
    }

    /// The tank's maintenance log, newest first. Records sharing a date are
    /// listed latest-inserted first.
    pub fn maintenance_for(&self, aquarium_id: &str) -> Vec<&MaintenanceRecord> {
        let mut records: Vec<&MaintenanceRecord> = self
            .maintenance
            .iter()
            .filter(|m| m.aquarium_id == aquarium_id)
            .rev()
            .collect();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        records
    }

    // --- Ids ---

    fn fresh_id(&mut self, collection: Collection) -> String {
        loop {
            let id = Uuid::now_v7().to_string();
            if self.issued_ids.insert((collection, id.clone())) {
                return id;
            }
        }
    }

    /// Reserves an id supplied from outside, e.g. by seed fixtures.
    pub(crate) fn claim_id(&mut self, collection: Collection, id: &str) -> Result<String, ClearAquaticsError> {
        validate::non_empty("id", id)?;
        if !self.issued_ids.insert((collection, id.to_string())) {
            return Err(ClearAquaticsError::Validation(format!("id '{}' is already in use", id)));
        }
        Ok(id.to_string())
    }
}
