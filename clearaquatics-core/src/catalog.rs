//! Read-only lookup and search over the species reference data.

use crate::error::ClearAquaticsError;
use clearaquatics_schemas::{
    aquarium::WaterType,
    species::{Species, SpeciesCategory},
};
use std::collections::HashSet;

/// Search criteria. Every `None` field matches everything.
#[derive(Debug, Clone, Default)]
pub struct SpeciesFilter {
    /// Case-insensitive substring of the common or scientific name.
    pub query: Option<String>,
    pub category: Option<SpeciesCategory>,
    pub water_type: Option<WaterType>,
}

impl SpeciesFilter {
    pub fn matches(&self, species: &Species) -> bool {
        let matches_query = match self.query.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(query) => {
                let query = query.to_lowercase();
                species.name.to_lowercase().contains(&query)
                    || species.scientific_name.to_lowercase().contains(&query)
            }
        };
        let matches_category = self.category.map_or(true, |c| species.category == c);
        let matches_water = self.water_type.map_or(true, |w| species.water_type == w);

        matches_query && matches_category && matches_water
    }
}

#[derive(Debug, Clone, Default)]
pub struct SpeciesCatalog {
    species: Vec<Species>,
}

impl SpeciesCatalog {
    /// Builds a catalog, rejecting duplicate species ids.
    pub fn new(species: Vec<Species>) -> Result<Self, ClearAquaticsError> {
        let mut seen = HashSet::new();
        for s in &species {
            if !seen.insert(s.id.as_str()) {
                return Err(ClearAquaticsError::Validation(format!(
                    "duplicate species id '{}' in catalog",
                    s.id
                )));
            }
        }
        Ok(Self { species })
    }

    pub fn get(&self, id: &str) -> Option<&Species> {
        self.species.iter().find(|s| s.id == id)
    }

    /// Resolves the ids that exist, in catalog order. Unknown ids are dropped.
    pub fn get_many(&self, ids: &[&str]) -> Vec<&Species> {
        self.species.iter().filter(|s| ids.contains(&s.id.as_str())).collect()
    }

    pub fn search(&self, filter: &SpeciesFilter) -> Vec<&Species> {
        self.species.iter().filter(|s| filter.matches(s)).collect()
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}
