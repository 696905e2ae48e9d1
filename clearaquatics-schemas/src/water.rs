//! Water-quality readings and the ideal bands they are judged against.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameter keys with dedicated handling elsewhere in the workspace.
pub const PH: &str = "ph";
pub const TEMPERATURE: &str = "temperature";

/// Outcome of comparing a reading against its ideal band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterStatus {
    Good,
    Warning,
    Critical,
}

impl ParameterStatus {
    /// True for anything that should raise an alert.
    pub fn is_alert(self) -> bool {
        !matches!(self, ParameterStatus::Good)
    }
}

impl fmt::Display for ParameterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ParameterStatus::Good => "good",
            ParameterStatus::Warning => "warning",
            ParameterStatus::Critical => "critical",
        };
        f.write_str(label)
    }
}

/// A single water test result. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterParameter {
    pub id: String,
    pub aquarium_id: String,
    /// Parameter key, e.g. `ph`, `ammonia`, `general_hardness`.
    pub parameter: String,
    pub value: f64,
    pub unit: String,
    pub date: NaiveDate,
    pub ideal_min: f64,
    pub ideal_max: f64,
    /// Computed from `value` and the ideal band when the reading was created.
    pub status: ParameterStatus,
}

/// A reading as submitted, before it has an id or a status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWaterParameter {
    pub aquarium_id: String,
    pub parameter: String,
    pub value: f64,
    #[serde(default)]
    pub unit: String,
    pub date: NaiveDate,
    pub ideal_min: f64,
    pub ideal_max: f64,
}

impl NewWaterParameter {
    pub fn with_status(self, id: String, status: ParameterStatus) -> WaterParameter {
        WaterParameter {
            id,
            aquarium_id: self.aquarium_id,
            parameter: self.parameter,
            value: self.value,
            unit: self.unit,
            date: self.date,
            ideal_min: self.ideal_min,
            ideal_max: self.ideal_max,
            status,
        }
    }
}

/// Default unit and ideal band offered when logging a given parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterPreset {
    #[serde(default)]
    pub unit: String,
    pub ideal_min: f64,
    pub ideal_max: f64,
}
