//! Defines the tank itself: its physical setup and the equipment that determines
//! how demanding it is to keep.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The salinity regime of a tank or the habitat a species needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterType {
    Freshwater,
    Saltwater,
    Brackish,
}

impl fmt::Display for WaterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WaterType::Freshwater => "freshwater",
            WaterType::Saltwater => "saltwater",
            WaterType::Brackish => "brackish",
        };
        f.write_str(label)
    }
}

/// Lighting intensity installed over the tank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightLevel {
    Low,
    Medium,
    High,
}

/// Equipment intensity of a tank, derived from lighting and CO2 use.
///
/// Never stored; see `clearaquatics_core::tech::tech_level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TechLevel {
    #[serde(rename = "low-tech")]
    LowTech,
    #[serde(rename = "mid-tech")]
    MidTech,
    #[serde(rename = "high-tech")]
    HighTech,
}

impl fmt::Display for TechLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TechLevel::LowTech => "low-tech",
            TechLevel::MidTech => "mid-tech",
            TechLevel::HighTech => "high-tech",
        };
        f.write_str(label)
    }
}

/// A tracked tank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aquarium {
    pub id: String,
    pub name: String,
    /// Water volume in US gallons.
    pub volume: f64,
    pub water_type: WaterType,
    pub setup_date: NaiveDate,
    pub description: Option<String>,
    pub light_level: LightLevel,
    pub co2_injection: bool,
}

/// The fields needed to create an `Aquarium`; the id is assigned on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAquarium {
    pub name: String,
    pub volume: f64,
    pub water_type: WaterType,
    pub setup_date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    pub light_level: LightLevel,
    pub co2_injection: bool,
}

impl NewAquarium {
    pub fn with_id(self, id: String) -> Aquarium {
        Aquarium {
            id,
            name: self.name,
            volume: self.volume,
            water_type: self.water_type,
            setup_date: self.setup_date,
            description: self.description,
            light_level: self.light_level,
            co2_injection: self.co2_injection,
        }
    }
}

/// A partial update. `None` leaves the field untouched; `description:
/// Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AquariumUpdate {
    pub name: Option<String>,
    pub volume: Option<f64>,
    pub water_type: Option<WaterType>,
    pub setup_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "crate::update::clearable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    pub light_level: Option<LightLevel>,
    pub co2_injection: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tech_level_uses_hyphenated_labels() {
        assert_eq!(serde_json::to_string(&TechLevel::HighTech).unwrap(), "\"high-tech\"");
        assert_eq!(TechLevel::LowTech.to_string(), "low-tech");
    }

    #[test]
    fn new_aquarium_reads_from_yaml() {
        let yaml = r#"
name: Betta Tank
volume: 5
water_type: freshwater
setup_date: 2024-03-01
light_level: low
co2_injection: false
"#;
        let new: NewAquarium = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(new.volume, 5.0);
        assert_eq!(new.description, None);

        let tank = new.with_id("2".to_string());
        assert_eq!(tank.id, "2");
        assert_eq!(tank.water_type, WaterType::Freshwater);
    }

    #[test]
    fn update_tells_absent_description_from_null() {
        let keep: AquariumUpdate = serde_yaml::from_str("name: Renamed").unwrap();
        assert_eq!(keep.description, None);

        let clear: AquariumUpdate = serde_yaml::from_str("description: null").unwrap();
        assert_eq!(clear.description, Some(None));

        let set: AquariumUpdate = serde_yaml::from_str("description: Planted").unwrap();
        assert_eq!(set.description, Some(Some("Planted".to_string())));
        assert!(!serde_json::to_string(&AquariumUpdate::default()).unwrap().contains("description"));
    }
}
