use super::{PreferenceQuery, RecommendationEngine, ScoredResult};
use crate::catalog::Catalog;

/// Hotels scoring at or below this value never surface in results.
pub const RECOMMENDATION_FLOOR: i16 = 10;

pub(crate) fn rank_catalog<'a>(
    engine: &RecommendationEngine,
    catalog: &'a Catalog,
    query: &PreferenceQuery,
    limit: Option<usize>,
) -> Vec<ScoredResult<'a>> {
    let mut results: Vec<ScoredResult<'a>> = catalog
        .iter()
        .map(|hotel| engine.score(hotel, query))
        .filter(|result| result.score > RECOMMENDATION_FLOOR)
        .collect();

    // Stable sort, so equal scores keep their catalog order.
    results.sort_by(|a, b| b.score.cmp(&a.score));

    if let Some(limit) = limit {
        results.truncate(limit);
    }

    results
}
