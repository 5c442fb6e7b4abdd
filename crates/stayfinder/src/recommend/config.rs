use serde::{Deserialize, Serialize};

/// Weight table behind the quiz scoring rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub rating_multiplier: f64,
    pub budget_fit_bonus: f64,
    /// Rupees of budget overshoot per penalty point.
    pub budget_penalty_step: f64,
    pub budget_penalty_cap: f64,
    pub trip_type_direct_bonus: f64,
    pub trip_type_tag_bonus: f64,
    pub amenity_bonus: f64,
    pub location_exact_bonus: f64,
    pub location_partial_bonus: f64,
    pub sdg_bonus: f64,
    /// Each whole kilometre from the center costs a point, up to this cap.
    pub distance_penalty_cap: f64,
    pub score_floor: f64,
    pub score_ceiling: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            rating_multiplier: 12.0,
            budget_fit_bonus: 25.0,
            budget_penalty_step: 1500.0,
            budget_penalty_cap: 15.0,
            trip_type_direct_bonus: 22.0,
            trip_type_tag_bonus: 10.0,
            amenity_bonus: 8.0,
            location_exact_bonus: 18.0,
            location_partial_bonus: 8.0,
            sdg_bonus: 12.0,
            distance_penalty_cap: 8.0,
            score_floor: -50.0,
            score_ceiling: 120.0,
        }
    }
}
