use super::domain::{Catalog, HotelRecord};

/// Built-in inventory used when no catalog file is configured.
pub fn seed_catalog() -> Catalog {
    Catalog::from_records(vec![
        HotelRecord {
            id: "sunset-cove-beach-resort-goa".to_string(),
            name: "Sunset Cove Beach Resort".to_string(),
            city: "Goa".to_string(),
            address: "Candolim Beach Road".to_string(),
            description: "Palm-fringed beachfront resort with a sunset deck above Candolim sands."
                .to_string(),
            price_per_night: 8900.0,
            rating: 4.6,
            distance_from_center_km: 1.2,
            ideal_for: strings(&["beach", "romantic"]),
            tags: strings(&["beach", "sea view", "sunset deck"]),
            amenities: strings(&["Wifi", "Breakfast", "Pool", "Sea View", "Spa"]),
            sdg_tags: strings(&["12", "14"]),
        },
        HotelRecord {
            id: "goa-heritage-guesthouse-goa".to_string(),
            name: "Goa Heritage Guesthouse".to_string(),
            city: "Goa".to_string(),
            address: "Fontainhas, Panaji".to_string(),
            description: "Restored Portuguese-era townhouse in the heritage quarter of Panaji."
                .to_string(),
            price_per_night: 2400.0,
            rating: 4.1,
            distance_from_center_km: 3.8,
            ideal_for: strings(&["budget", "cultural"]),
            tags: strings(&["heritage", "budget stay", "old town"]),
            amenities: strings(&["Wifi", "Breakfast"]),
            sdg_tags: strings(&["11"]),
        },
        HotelRecord {
            id: "lakeview-serenity-palace-udaipur".to_string(),
            name: "Lakeview Serenity Palace".to_string(),
            city: "Udaipur".to_string(),
            address: "Lake Pichola East".to_string(),
            description:
                "Marble courtyards and lake-facing suites a short boat ride from the City Palace."
                    .to_string(),
            price_per_night: 15500.0,
            rating: 4.8,
            distance_from_center_km: 2.5,
            ideal_for: strings(&["romantic", "luxury"]),
            tags: strings(&["lakeside", "royal", "candlelit dining"]),
            amenities: strings(&["Lake View", "Spa", "Pool", "Breakfast"]),
            sdg_tags: strings(&["6", "13"]),
        },
        HotelRecord {
            id: "jaipur-palace-hotel-jaipur".to_string(),
            name: "Jaipur Palace Hotel".to_string(),
            city: "Jaipur".to_string(),
            address: "Amer Road".to_string(),
            description: "Courtyard haveli hosting nightly folk performances near Amer Fort."
                .to_string(),
            price_per_night: 6200.0,
            rating: 4.3,
            distance_from_center_km: 1.0,
            ideal_for: strings(&["cultural", "family"]),
            tags: strings(&["heritage", "cultural shows", "city palace"]),
            amenities: strings(&["Wifi", "Breakfast", "Cultural Shows"]),
            sdg_tags: Vec::new(),
        },
        HotelRecord {
            id: "metro-business-suites-mumbai".to_string(),
            name: "Metro Business Suites".to_string(),
            city: "Mumbai".to_string(),
            address: "Bandra Kurla Complex".to_string(),
            description: "Glass-walled suites with meeting-ready workspaces in the financial district."
                .to_string(),
            price_per_night: 7800.0,
            rating: 4.2,
            distance_from_center_km: 0.8,
            ideal_for: strings(&["business"]),
            tags: strings(&["business district", "workspace"]),
            amenities: strings(&["Wifi", "Workspace", "Gym", "Breakfast"]),
            sdg_tags: strings(&["8"]),
        },
        HotelRecord {
            id: "himalayan-trail-lodge-manali".to_string(),
            name: "Himalayan Trail Lodge".to_string(),
            city: "Manali".to_string(),
            address: "Old Manali Road".to_string(),
            description: "Timber lodge at the trailhead of the Hampta valley walks.".to_string(),
            price_per_night: 3900.0,
            rating: 4.4,
            distance_from_center_km: 9.5,
            ideal_for: strings(&["nature"]),
            tags: strings(&["mountain", "trekking", "nature walks"]),
            amenities: strings(&["Hiking Access", "Breakfast"]),
            sdg_tags: strings(&["13", "15"]),
        },
        HotelRecord {
            id: "backwater-bliss-houseboat-alleppey".to_string(),
            name: "Backwater Bliss Houseboat".to_string(),
            city: "Alleppey".to_string(),
            address: "Punnamada Jetty".to_string(),
            description: "Converted rice barge drifting through the Kerala backwaters.".to_string(),
            price_per_night: 11000.0,
            rating: 4.7,
            distance_from_center_km: 6.0,
            ideal_for: strings(&["nature"]),
            tags: strings(&["backwaters", "houseboat", "romantic escape"]),
            amenities: strings(&["Boat Tours", "Breakfast"]),
            sdg_tags: strings(&["14", "6"]),
        },
        HotelRecord {
            id: "city-light-hostel-delhi".to_string(),
            name: "City Light Hostel".to_string(),
            city: "Delhi".to_string(),
            address: "Paharganj Main Bazaar".to_string(),
            description: "No-frills bunks for travellers passing through the capital.".to_string(),
            price_per_night: 900.0,
            rating: 3.6,
            distance_from_center_km: 4.2,
            ideal_for: strings(&["budget"]),
            tags: strings(&["hostel", "budget stay"]),
            amenities: strings(&["Wifi"]),
            sdg_tags: Vec::new(),
        },
        HotelRecord {
            id: "emerald-palms-luxury-villa-goa".to_string(),
            name: "Emerald Palms Luxury Villa".to_string(),
            city: "Goa".to_string(),
            address: "Vagator Cliffside".to_string(),
            description: "Private cliffside villa with an infinity pool over Vagator beach."
                .to_string(),
            price_per_night: 24000.0,
            rating: 4.9,
            distance_from_center_km: 5.5,
            ideal_for: strings(&["luxury"]),
            tags: strings(&["villa", "private pool", "cliffside"]),
            amenities: strings(&["Pool", "Spa", "Sea View", "Gym", "Breakfast"]),
            sdg_tags: strings(&["12"]),
        },
        HotelRecord {
            id: "family-nest-inn-jaipur".to_string(),
            name: "Family Nest Inn".to_string(),
            city: "Jaipur".to_string(),
            address: "Civil Lines".to_string(),
            description: "Connecting rooms and a shallow kids' pool close to the old city."
                .to_string(),
            price_per_night: 4800.0,
            rating: 4.0,
            distance_from_center_km: 2.9,
            ideal_for: strings(&["family"]),
            tags: strings(&["family friendly", "kid friendly"]),
            amenities: strings(&["Wifi", "Breakfast", "Pool"]),
            sdg_tags: strings(&["4"]),
        },
    ])
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}
