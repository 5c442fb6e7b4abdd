use serde::{Deserialize, Serialize};

/// Trip styles offered by the preference quiz.
pub const TRIP_TYPES: [&str; 8] = [
    "business", "family", "romantic", "beach", "nature", "cultural", "budget", "luxury",
];

/// Amenity checklist offered by the preference quiz.
pub const AMENITY_OPTIONS: [&str; 11] = [
    "Wifi",
    "Breakfast",
    "Pool",
    "Gym",
    "Spa",
    "Sea View",
    "Lake View",
    "Workspace",
    "Boat Tours",
    "Hiking Access",
    "Cultural Shows",
];

/// Answers collected from the preference quiz.
///
/// Matching is literal: trip types compare verbatim against `ideal_for`,
/// amenity names must match exactly, the SDG preference is never trimmed,
/// and only `location_pref` is trimmed and lowercased before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceQuery {
    pub trip_type: String,
    pub min_budget: f64,
    pub max_budget: f64,
    pub amenities: Vec<String>,
    pub location_pref: String,
    /// Sustainable Development Goal number as a string, e.g. "12".
    pub sdg: String,
    pub guests: u32,
}

impl Default for PreferenceQuery {
    fn default() -> Self {
        Self {
            trip_type: String::new(),
            min_budget: 0.0,
            max_budget: 0.0,
            amenities: Vec::new(),
            location_pref: String::new(),
            sdg: String::new(),
            guests: 1,
        }
    }
}
