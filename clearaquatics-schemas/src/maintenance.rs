//! Maintenance log entries. Each record is either a water change or a filter
//! service, with an optional note.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterAction {
    Rinse,
    Replace,
}

/// What was done, with the values recorded for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaintenanceKind {
    WaterChange {
        percentage_changed: f64,
        /// Gallons, derived from the tank volume when the record was created.
        volume_changed: f64,
    },
    FilterMaintenance {
        action: FilterAction,
        media: String,
    },
}

/// The submitted form of a `MaintenanceKind`. Water changes carry only the
/// percentage; the volume is derived on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MaintenanceTask {
    WaterChange { percentage_changed: f64 },
    FilterMaintenance { action: FilterAction, media: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub id: String,
    pub aquarium_id: String,
    pub date: NaiveDate,
    pub notes: Option<String>,
    pub kind: MaintenanceKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMaintenanceRecord {
    pub aquarium_id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
    pub task: MaintenanceTask,
}

impl MaintenanceRecord {
    pub fn is_water_change(&self) -> bool {
        matches!(self.kind, MaintenanceKind::WaterChange { .. })
    }

    pub fn is_filter_maintenance(&self) -> bool {
        matches!(self.kind, MaintenanceKind::FilterMaintenance { .. })
    }
}
