//! Assembles everything shown on a tank's overview: current water quality,
//! stocked species and whether they suit the water, and recent upkeep.

use crate::{
    catalog::SpeciesCatalog,
    compatibility::{check_compatibility, CompatibilityViolation},
    error::ClearAquaticsError,
    history::display_name,
    readings::{current_conditions, latest_by_parameter},
    store::AquariumStore,
    tech::tech_level,
};
use chrono::NaiveDate;
use clearaquatics_schemas::{
    aquarium::{Aquarium, TechLevel},
    life::AquaticLife,
    maintenance::MaintenanceRecord,
    species::{Species, SpeciesCategory},
    water::WaterParameter,
};

/// A stocked entry resolved against the catalog. `species` is `None` when the
/// entry references a species the catalog does not know.
#[derive(Debug)]
pub struct LifeStatus<'a> {
    pub life: &'a AquaticLife,
    pub species: Option<&'a Species>,
    pub violations: Vec<CompatibilityViolation>,
}

impl LifeStatus<'_> {
    pub fn display_name(&self) -> &str {
        self.species.map_or("Unknown Species", |s| s.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityItem {
    pub date: NaiveDate,
    pub message: String,
}

#[derive(Debug)]
pub struct DashboardSummary<'a> {
    pub aquarium: &'a Aquarium,
    pub tech_level: TechLevel,
    pub as_of: NaiveDate,
    /// Newest reading per parameter.
    pub latest: Vec<&'a WaterParameter>,
    /// Latest readings whose status is warning or critical.
    pub alerts: Vec<&'a WaterParameter>,
    pub good_count: usize,
    pub life: Vec<LifeStatus<'a>>,
    pub fish_count: usize,
    pub plant_count: usize,
    pub last_test: Option<NaiveDate>,
    pub last_water_change: Option<&'a MaintenanceRecord>,
    pub last_filter_maintenance: Option<&'a MaintenanceRecord>,
    pub activity: Vec<ActivityItem>,
}

impl<'a> DashboardSummary<'a> {
    /// Summarises the tank as it stood on `as_of`. Readings, maintenance and
    /// life dated later are left out.
    pub fn build(
        store: &'a AquariumStore,
        catalog: &'a SpeciesCatalog,
        aquarium_id: &str,
        as_of: NaiveDate,
    ) -> Result<Self, ClearAquaticsError> {
        let aquarium = store.aquarium(aquarium_id)?;

        let latest = latest_by_parameter(store.readings_for(&aquarium.id).filter(|r| r.date <= as_of));
        let alerts: Vec<&WaterParameter> = latest.iter().copied().filter(|r| r.status.is_alert()).collect();
        let good_count = latest.len() - alerts.len();
        let (current_ph, current_temp) = current_conditions(&latest);

        let life: Vec<LifeStatus> = store
            .life_for(&aquarium.id)
            .filter(|entry| entry.added_date <= as_of)
            .map(|entry| {
                let species = catalog.get(&entry.species_id);
                if species.is_none() {
                    tracing::warn!(
                        "Life entry {} references unknown species '{}'",
                        entry.id,
                        entry.species_id
                    );
                }
                let violations = species
                    .map(|s| check_compatibility(current_ph, current_temp, &s.requirements))
                    .unwrap_or_default();
                LifeStatus { life: entry, species, violations }
            })
            .collect();
        let count_category = |category: SpeciesCategory| {
            life.iter().filter(|l| l.species.map_or(false, |s| s.category == category)).count()
        };
        let fish_count = count_category(SpeciesCategory::Fish);
        let plant_count = count_category(SpeciesCategory::Plant);

        let maintenance: Vec<&MaintenanceRecord> = store
            .maintenance_for(aquarium_id)
            .into_iter()
            .filter(|m| m.date <= as_of)
            .collect();
        let last_water_change = maintenance.iter().copied().find(|m| m.is_water_change());
        let last_filter_maintenance = maintenance.iter().copied().find(|m| m.is_filter_maintenance());

        let last_test = latest.iter().map(|r| r.date).max();
        let activity = recent_activity(&latest, &life);

        Ok(Self {
            aquarium,
            tech_level: tech_level(aquarium),
            as_of,
            latest,
            alerts,
            good_count,
            life,
            fish_count,
            plant_count,
            last_test,
            last_water_change,
            last_filter_maintenance,
            activity,
        })
    }

    pub fn is_healthy(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Entries whose species cannot tolerate the current water.
    pub fn incompatible_life(&self) -> impl Iterator<Item = &LifeStatus<'a>> {
        self.life.iter().filter(|l| !l.violations.is_empty())
    }

    pub fn other_count(&self) -> usize {
        self.life.len() - self.fish_count - self.plant_count
    }
}

/// Newest test, the most recent alerting parameter, and the newest addition.
fn recent_activity(latest: &[&WaterParameter], life: &[LifeStatus]) -> Vec<ActivityItem> {
    let mut by_date: Vec<&WaterParameter> = latest.to_vec();
    by_date.sort_by(|a, b| b.date.cmp(&a.date));

    let mut activity = Vec::new();
    if let Some(newest) = by_date.first() {
        activity.push(ActivityItem {
            date: newest.date,
            message: format!("{} tested: {}{}", display_name(&newest.parameter), newest.value, newest.unit),
        });
    }
    if let Some(alert) = by_date.iter().find(|r| r.status.is_alert()) {
        activity.push(ActivityItem {
            date: alert.date,
            message: format!("{} {} detected", display_name(&alert.parameter), alert.status),
        });
    }
    if let Some(newest) = life.iter().max_by_key(|l| l.life.added_date) {
        let category = newest.species.map_or("species".to_string(), |s| s.category.to_string());
        activity.push(ActivityItem {
            date: newest.life.added_date,
            message: format!("New {} added: {}", category, newest.species.map_or("Unknown", |s| s.name.as_str())),
        });
    }
    activity
}

/// Whole days between `date` and `as_of`.
pub fn days_ago(date: NaiveDate, as_of: NaiveDate) -> i64 {
    (as_of - date).num_days()
}

/// `Today`, `1 day`, or `N days`.
pub fn format_days(days: i64) -> String {
    match days {
        0 => "Today".to_string(),
        1 => "1 day".to_string(),
        n => format!("{} days", n),
    }
}
