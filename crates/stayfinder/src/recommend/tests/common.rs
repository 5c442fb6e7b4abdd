use crate::catalog::{Catalog, HotelRecord};
use crate::recommend::{PreferenceQuery, RecommendationEngine};

pub(super) fn engine() -> RecommendationEngine {
    RecommendationEngine::default()
}

pub(super) fn family_query() -> PreferenceQuery {
    PreferenceQuery {
        trip_type: "family".to_string(),
        min_budget: 0.0,
        max_budget: 20000.0,
        amenities: Vec::new(),
        location_pref: String::new(),
        sdg: String::new(),
        guests: 2,
    }
}

/// Scores 93 against [`family_query`]: 48 rating + 25 budget + 22 trip - 2 km.
pub(super) fn base_hotel(id: &str) -> HotelRecord {
    HotelRecord {
        id: id.to_string(),
        name: "Family Nest Inn".to_string(),
        city: "Jaipur".to_string(),
        address: "Civil Lines".to_string(),
        description: "Two connecting rooms near the old city.".to_string(),
        price_per_night: 5000.0,
        rating: 4.0,
        distance_from_center_km: 2.0,
        ideal_for: strings(&["family"]),
        tags: strings(&["family friendly"]),
        amenities: strings(&["Wifi", "Breakfast"]),
        sdg_tags: strings(&["12"]),
    }
}

pub(super) fn goa_beach_hotel() -> HotelRecord {
    HotelRecord {
        id: "sunset-cove-beach-resort-goa".to_string(),
        name: "Sunset Cove Beach Resort".to_string(),
        city: "Goa".to_string(),
        address: "Candolim Beach Road".to_string(),
        description: "Beachfront resort with a sunset deck.".to_string(),
        price_per_night: 8900.0,
        rating: 4.6,
        distance_from_center_km: 1.2,
        ideal_for: strings(&["beach", "romantic"]),
        tags: strings(&["beach", "sea view"]),
        amenities: strings(&["Wifi", "Pool", "Sea View", "Spa"]),
        sdg_tags: strings(&["12", "14"]),
    }
}

pub(super) fn catalog_of(hotels: Vec<HotelRecord>) -> Catalog {
    Catalog::new(hotels).expect("test catalog is valid")
}

pub(super) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}
