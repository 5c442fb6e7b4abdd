use super::config::ScoringWeights;
use super::query::PreferenceQuery;
use crate::catalog::HotelRecord;

/// Applies every scoring factor in its fixed order, appending one reason per
/// factor evaluated. Returns the trail and the raw (unclamped) score.
pub(crate) fn score_hotel(
    hotel: &HotelRecord,
    query: &PreferenceQuery,
    weights: &ScoringWeights,
) -> (Vec<String>, f64) {
    let mut reasons = Vec::new();
    let mut score = 0.0;

    score += hotel.rating * weights.rating_multiplier;
    reasons.push(format!(
        "Rated {:.1}. We prefer highly-rated stays.",
        hotel.rating
    ));

    let price = hotel.price_per_night;
    if price >= query.min_budget && price <= query.max_budget {
        score += weights.budget_fit_bonus;
        reasons.push(format!(
            "Price ₹{price} fits your budget (₹{} to ₹{}).",
            query.min_budget, query.max_budget
        ));
    } else {
        // Bounds are taken literally, so a min above the max penalizes
        // every price.
        let diff = if price < query.min_budget {
            query.min_budget - price
        } else {
            price - query.max_budget
        };
        let penalty = (diff / weights.budget_penalty_step)
            .floor()
            .min(weights.budget_penalty_cap);
        score -= penalty;

        let direction = if price < query.min_budget {
            "below"
        } else {
            "above"
        };
        reasons.push(format!(
            "Price is slightly {direction} your budget (penalty {penalty})."
        ));
    }

    if hotel.ideal_for.contains(&query.trip_type) {
        score += weights.trip_type_direct_bonus;
        reasons.push(format!("Matches your trip type (\"{}\").", query.trip_type));
    } else if hotel
        .tags
        .iter()
        .any(|tag| tag.to_lowercase().contains(&query.trip_type))
    {
        // An empty trip type slips through the substring check and counts
        // any tagged hotel as a partial match.
        score += weights.trip_type_tag_bonus;
        reasons.push("Partially matches trip type through tags.".to_string());
    } else {
        reasons.push(format!(
            "Not a direct {} pick, but still worth considering.",
            query.trip_type
        ));
    }

    let matched: Vec<&str> = query
        .amenities
        .iter()
        .filter(|requested| hotel.amenities.contains(*requested))
        .map(String::as_str)
        .collect();
    if matched.is_empty() {
        reasons.push("Doesn't match your selected amenities exactly.".to_string());
    } else {
        let added = weights.amenity_bonus * matched.len() as f64;
        score += added;
        reasons.push(format!(
            "Has {} which you requested (+{added}).",
            matched.join(", ")
        ));
    }

    let location_query = query.location_pref.trim();
    if !location_query.is_empty() {
        let needle = location_query.to_lowercase();
        let city = hotel.city.to_lowercase();
        if city == needle {
            score += weights.location_exact_bonus;
            reasons.push(format!(
                "Located in {}, matching your location preference.",
                hotel.city
            ));
        } else if city.contains(&needle) || hotel.name.to_lowercase().contains(&needle) {
            score += weights.location_partial_bonus;
            reasons.push(format!(
                "Partial match on location (\"{}\").",
                query.location_pref
            ));
        } else {
            reasons.push("Different location than your preference.".to_string());
        }
    }

    if !query.sdg.is_empty() {
        if hotel.sdg_tags.contains(&query.sdg) {
            score += weights.sdg_bonus;
            reasons.push(format!("Supports SDG {}, which you prioritized.", query.sdg));
        } else {
            reasons.push(format!("Does not list SDG {}.", query.sdg));
        }
    }

    let distance_penalty = hotel
        .distance_from_center_km
        .floor()
        .min(weights.distance_penalty_cap);
    score -= distance_penalty;
    reasons.push(format!(
        "Distance from center: {} km (penalty {distance_penalty}).",
        hotel.distance_from_center_km
    ));

    (reasons, score)
}
