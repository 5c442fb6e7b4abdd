use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::CatalogError;

/// One bookable property as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelRecord {
    pub id: String,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
    pub price_per_night: f64,
    pub rating: f64,
    #[serde(default)]
    pub distance_from_center_km: f64,
    /// Trip types this property is marketed for, e.g. "family" or "beach".
    #[serde(default)]
    pub ideal_for: Vec<String>,
    /// Free-form lowercase descriptors used for partial trip-type matches.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    /// UN Sustainable Development Goal numbers the property supports, as strings.
    #[serde(default)]
    pub sdg_tags: Vec<String>,
}

/// Immutable snapshot of every hotel the engine may recommend.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    hotels: Vec<HotelRecord>,
}

impl Catalog {
    /// Validates records loaded from an external source and wraps them.
    pub fn new(hotels: Vec<HotelRecord>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::with_capacity(hotels.len());

        for hotel in &hotels {
            if hotel.id.trim().is_empty() {
                return Err(CatalogError::InvalidRecord {
                    hotel: hotel.name.clone(),
                    detail: "missing id".to_string(),
                });
            }
            if !seen.insert(hotel.id.clone()) {
                return Err(CatalogError::DuplicateId(hotel.id.clone()));
            }
            if hotel.name.trim().is_empty() {
                return Err(CatalogError::InvalidRecord {
                    hotel: hotel.id.clone(),
                    detail: "missing name".to_string(),
                });
            }
            if hotel.price_per_night < 0.0 {
                return Err(CatalogError::InvalidRecord {
                    hotel: hotel.id.clone(),
                    detail: "negative nightly price".to_string(),
                });
            }
            if !(0.0..=5.0).contains(&hotel.rating) {
                return Err(CatalogError::InvalidRecord {
                    hotel: hotel.id.clone(),
                    detail: "rating must fall between 0 and 5".to_string(),
                });
            }
            if hotel.distance_from_center_km < 0.0 {
                return Err(CatalogError::InvalidRecord {
                    hotel: hotel.id.clone(),
                    detail: "negative distance from center".to_string(),
                });
            }
        }

        Ok(Self { hotels })
    }

    /// Wraps records already known to satisfy the catalog invariants.
    pub(crate) fn from_records(hotels: Vec<HotelRecord>) -> Self {
        Self { hotels }
    }

    /// Reads and validates a JSON catalog file (an array of hotel records).
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    pub fn from_json_reader(reader: impl io::Read) -> Result<Self, CatalogError> {
        let hotels: Vec<HotelRecord> = serde_json::from_reader(reader)?;
        Self::new(hotels)
    }

    pub fn get(&self, id: &str) -> Option<&HotelRecord> {
        self.hotels.iter().find(|hotel| hotel.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HotelRecord> {
        self.hotels.iter()
    }

    pub fn hotels(&self) -> &[HotelRecord] {
        &self.hotels
    }

    pub fn len(&self) -> usize {
        self.hotels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }
}
