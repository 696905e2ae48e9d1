//! Checks a species' tolerances against what is known about a tank.

use clearaquatics_schemas::{
    aquarium::{Aquarium, WaterType},
    species::{Species, SpeciesRequirements},
};
use std::fmt;

/// A measured condition outside a species' tolerance band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CompatibilityViolation {
    PhTooLow { current: f64, min: f64 },
    PhTooHigh { current: f64, max: f64 },
    TemperatureTooLow { current: f64, min: f64 },
    TemperatureTooHigh { current: f64, max: f64 },
}

impl fmt::Display for CompatibilityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PhTooLow { current, min } => write!(f, "pH too low ({} < {})", current, min),
            Self::PhTooHigh { current, max } => write!(f, "pH too high ({} > {})", current, max),
            Self::TemperatureTooLow { current, min } => {
                write!(f, "Temperature too low ({}°F < {}°F)", current, min)
            }
            Self::TemperatureTooHigh { current, max } => {
                write!(f, "Temperature too high ({}°F > {}°F)", current, max)
            }
        }
    }
}

/// Compares the latest pH and temperature against a species' requirements.
///
/// A missing reading is skipped, not reported. The pH check always precedes
/// the temperature check in the output; an empty result means compatible with
/// everything currently known.
pub fn check_compatibility(
    current_ph: Option<f64>,
    current_temp: Option<f64>,
    requirements: &SpeciesRequirements,
) -> Vec<CompatibilityViolation> {
    let mut violations = Vec::new();

    if let Some(ph) = current_ph {
        if ph < requirements.min_ph {
            violations.push(CompatibilityViolation::PhTooLow { current: ph, min: requirements.min_ph });
        } else if ph > requirements.max_ph {
            violations.push(CompatibilityViolation::PhTooHigh { current: ph, max: requirements.max_ph });
        }
    }

    if let Some(temp) = current_temp {
        if temp < requirements.min_temp {
            violations.push(CompatibilityViolation::TemperatureTooLow {
                current: temp,
                min: requirements.min_temp,
            });
        } else if temp > requirements.max_temp {
            violations.push(CompatibilityViolation::TemperatureTooHigh {
                current: temp,
                max: requirements.max_temp,
            });
        }
    }

    violations
}

/// A structural reason a species does not belong in a tank, independent of
/// current water readings.
#[derive(Debug, Clone, PartialEq)]
pub enum HabitatMismatch {
    WaterType { needs: WaterType, tank: WaterType },
    TankTooSmall { min_gallons: f64, tank_gallons: f64 },
}

impl fmt::Display for HabitatMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WaterType { needs, tank } => write!(f, "Needs {} water, tank is {}", needs, tank),
            Self::TankTooSmall { min_gallons, tank_gallons } => {
                write!(f, "Needs at least {} gal, tank holds {} gal", min_gallons, tank_gallons)
            }
        }
    }
}

pub fn check_habitat(species: &Species, aquarium: &Aquarium) -> Vec<HabitatMismatch> {
    let mut mismatches = Vec::new();

    if species.water_type != aquarium.water_type {
        mismatches.push(HabitatMismatch::WaterType {
            needs: species.water_type,
            tank: aquarium.water_type,
        });
    }
    if let Some(min_gallons) = species.requirements.min_tank_size {
        if aquarium.volume < min_gallons {
            mismatches.push(HabitatMismatch::TankTooSmall {
                min_gallons,
                tank_gallons: aquarium.volume,
            });
        }
    }

    mismatches
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use clearaquatics_schemas::{
        aquarium::LightLevel,
        species::{Difficulty, SocialBehavior, SpeciesCategory},
    };

    fn requirements() -> SpeciesRequirements {
        SpeciesRequirements {
            min_ph: 6.5,
            max_ph: 7.5,
            min_temp: 75.0,
            max_temp: 79.0,
            min_tank_size: Some(10.0),
            difficulty: Difficulty::Beginner,
            social_behavior: SocialBehavior::Peaceful,
        }
    }

    #[test]
    fn no_readings_means_no_violations() {
        assert!(check_compatibility(None, None, &requirements()).is_empty());
    }

    #[test]
    fn in_band_readings_are_compatible() {
        assert!(check_compatibility(Some(7.0), Some(77.0), &requirements()).is_empty());
        assert!(check_compatibility(Some(6.5), Some(79.0), &requirements()).is_empty());
    }

    #[test]
    fn reports_ph_before_temperature() {
        let violations = check_compatibility(Some(6.0), Some(70.0), &requirements());
        assert_eq!(
            violations,
            vec![
                CompatibilityViolation::PhTooLow { current: 6.0, min: 6.5 },
                CompatibilityViolation::TemperatureTooLow { current: 70.0, min: 75.0 },
            ]
        );
        assert_eq!(violations[0].to_string(), "pH too low (6 < 6.5)");
        assert_eq!(violations[1].to_string(), "Temperature too low (70°F < 75°F)");
    }

    #[test]
    fn only_known_readings_are_checked() {
        let violations = check_compatibility(None, Some(81.0), &requirements());
        assert_eq!(violations, vec![CompatibilityViolation::TemperatureTooHigh { current: 81.0, max: 79.0 }]);
        assert_eq!(violations[0].to_string(), "Temperature too high (81°F > 79°F)");

        let violations = check_compatibility(Some(7.8), None, &requirements());
        assert_eq!(violations[0].to_string(), "pH too high (7.8 > 7.5)");
    }

    #[test]
    fn zero_readings_are_still_checked() {
        let violations = check_compatibility(Some(0.0), None, &requirements());
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn habitat_reports_water_type_and_size() {
        let species = Species {
            id: "clownfish".to_string(),
            name: "Clownfish".to_string(),
            scientific_name: "Amphiprion ocellatus".to_string(),
            category: SpeciesCategory::Fish,
            water_type: WaterType::Saltwater,
            requirements: SpeciesRequirements { min_tank_size: Some(20.0), ..requirements() },
            description: None,
            max_size: None,
            lifespan: None,
        };
        let tank = Aquarium {
            id: "2".to_string(),
            name: "Betta Tank".to_string(),
            volume: 5.0,
            water_type: WaterType::Freshwater,
            setup_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            description: None,
            light_level: LightLevel::Low,
            co2_injection: false,
        };

        let mismatches = check_habitat(&species, &tank);
        assert_eq!(mismatches.len(), 2);
        assert_eq!(mismatches[0].to_string(), "Needs saltwater water, tank is freshwater");
        assert_eq!(mismatches[1], HabitatMismatch::TankTooSmall { min_gallons: 20.0, tank_gallons: 5.0 });
    }
}
