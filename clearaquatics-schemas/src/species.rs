//! Static species reference data: what each fish, plant or invertebrate needs
//! to thrive. This catalog is not user-owned.

use crate::aquarium::WaterType;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeciesCategory {
    Fish,
    Plant,
    Crustacean,
}

impl fmt::Display for SpeciesCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SpeciesCategory::Fish => "fish",
            SpeciesCategory::Plant => "plant",
            SpeciesCategory::Crustacean => "crustacean",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SocialBehavior {
    Peaceful,
    SemiAggressive,
    Aggressive,
    Schooling,
}

/// Care requirements. Temperatures are in degrees Fahrenheit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesRequirements {
    pub min_ph: f64,
    pub max_ph: f64,
    pub min_temp: f64,
    pub max_temp: f64,
    /// Smallest suitable tank, in gallons.
    #[serde(default)]
    pub min_tank_size: Option<f64>,
    pub difficulty: Difficulty,
    pub social_behavior: SocialBehavior,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub id: String,
    pub name: String,
    pub scientific_name: String,
    pub category: SpeciesCategory,
    pub water_type: WaterType,
    pub requirements: SpeciesRequirements,
    #[serde(default)]
    pub description: Option<String>,
    /// Inches of length for animals, height for plants.
    #[serde(default)]
    pub max_size: Option<f64>,
    /// Years.
    #[serde(default)]
    pub lifespan: Option<f64>,
}
