use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A species stocked in a tank. `species_id` points into the species catalog
/// and may dangle; callers treat a missing match as an unknown species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AquaticLife {
    pub id: String,
    pub aquarium_id: String,
    pub species_id: String,
    pub added_date: NaiveDate,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAquaticLife {
    pub aquarium_id: String,
    pub species_id: String,
    pub added_date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewAquaticLife {
    pub fn with_id(self, id: String) -> AquaticLife {
        AquaticLife {
            id,
            aquarium_id: self.aquarium_id,
            species_id: self.species_id,
            added_date: self.added_date,
            notes: self.notes,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AquaticLifeUpdate {
    pub species_id: Option<String>,
    pub added_date: Option<NaiveDate>,
    /// `Some(None)` clears the notes.
    #[serde(default, deserialize_with = "crate::update::clearable", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}
