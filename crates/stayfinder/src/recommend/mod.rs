//! Preference scoring and ranking over the hotel catalog.
//!
//! Every scored hotel carries a full reason trail regardless of outcome, so
//! callers can always show travellers why a stay was (or was not) suggested.

mod config;
mod query;
mod ranking;
mod rules;

#[cfg(test)]
mod tests;

pub use config::ScoringWeights;
pub use query::{PreferenceQuery, AMENITY_OPTIONS, TRIP_TYPES};
pub use ranking::RECOMMENDATION_FLOOR;

use crate::catalog::{Catalog, HotelRecord};
use serde::Serialize;

/// Stateless engine applying one weight table to hotels and queries.
pub struct RecommendationEngine {
    weights: ScoringWeights,
}

impl RecommendationEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Scores a single hotel against the quiz answers.
    ///
    /// Pure and deterministic. The returned score is clamped to the weight
    /// table's floor and ceiling, then rounded to the nearest integer.
    pub fn score<'a>(&self, hotel: &'a HotelRecord, query: &PreferenceQuery) -> ScoredResult<'a> {
        let (reasons, raw_score) = rules::score_hotel(hotel, query, &self.weights);
        let clamped = raw_score.clamp(self.weights.score_floor, self.weights.score_ceiling);

        ScoredResult {
            hotel,
            score: round_half_up(clamped),
            reasons,
        }
    }

    /// Scores the whole catalog, drops entries at or below
    /// [`RECOMMENDATION_FLOOR`], and orders the rest by descending score.
    pub fn rank<'a>(
        &self,
        catalog: &'a Catalog,
        query: &PreferenceQuery,
        limit: Option<usize>,
    ) -> Vec<ScoredResult<'a>> {
        ranking::rank_catalog(self, catalog, query, limit)
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(ScoringWeights::default())
    }
}

/// Halves round toward positive infinity, for negative values too.
fn round_half_up(value: f64) -> i16 {
    (value + 0.5).floor() as i16
}

/// One scored hotel with its explanation trail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResult<'a> {
    pub hotel: &'a HotelRecord,
    pub score: i16,
    pub reasons: Vec<String>,
}
