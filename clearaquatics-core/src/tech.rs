use clearaquatics_schemas::aquarium::{Aquarium, LightLevel, TechLevel};

/// High-tech needs both CO2 injection and high light; low-tech has neither CO2
/// nor more than low light. Everything in between is mid-tech.
pub fn tech_level(aquarium: &Aquarium) -> TechLevel {
    match (aquarium.co2_injection, aquarium.light_level) {
        (true, LightLevel::High) => TechLevel::HighTech,
        (false, LightLevel::Low) => TechLevel::LowTech,
        _ => TechLevel::MidTech,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use clearaquatics_schemas::aquarium::WaterType;

    fn tank(co2_injection: bool, light_level: LightLevel) -> Aquarium {
        Aquarium {
            id: "t".to_string(),
            name: "Test".to_string(),
            volume: 20.0,
            water_type: WaterType::Freshwater,
            setup_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            description: None,
            light_level,
            co2_injection,
        }
    }

    #[test]
    fn every_combination() {
        use LightLevel::*;
        let cases = [
            (false, Low, TechLevel::LowTech),
            (false, Medium, TechLevel::MidTech),
            (false, High, TechLevel::MidTech),
            (true, Low, TechLevel::MidTech),
            (true, Medium, TechLevel::MidTech),
            (true, High, TechLevel::HighTech),
        ];
        for (co2, light, expected) in cases {
            assert_eq!(tech_level(&tank(co2, light)), expected, "co2={} light={:?}", co2, light);
        }
    }
}
