use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::repository::{ProfileError, ProfileRepository, UserProfile};
use crate::recommend::{PreferenceQuery, ScoredResult};

/// How many recommendation ids a profile remembers after a ranking run.
pub const RECOMMENDATION_HISTORY: usize = 6;

/// Service wrapping profile storage with quiz, wishlist, and
/// recommendation-history semantics.
pub struct ProfileService<R> {
    repository: Arc<R>,
}

impl<R> ProfileService<R>
where
    R: ProfileRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the stored profile, or an empty one for first-time users.
    pub fn profile(&self, username: &str) -> Result<UserProfile, ProfileError> {
        self.load(username)
    }

    /// Replaces the stored quiz answers.
    pub fn save_preferences(
        &self,
        username: &str,
        quiz_answers: PreferenceQuery,
    ) -> Result<UserProfile, ProfileError> {
        let mut profile = self.load(username)?;
        profile.quiz_answers = Some(quiz_answers);
        self.repository.upsert(profile.clone())?;
        Ok(profile)
    }

    /// Adds a hotel to the wishlist; saving the same id again keeps a
    /// single entry.
    pub fn add_to_wishlist(
        &self,
        username: &str,
        hotel_id: &str,
    ) -> Result<UserProfile, ProfileError> {
        let mut profile = self.load(username)?;
        if !profile.saved_hotels.iter().any(|saved| saved == hotel_id) {
            profile.saved_hotels.push(hotel_id.to_string());
        }
        self.repository.upsert(profile.clone())?;
        Ok(profile)
    }

    /// Drops a hotel from the wishlist; absent ids are a no-op.
    pub fn remove_from_wishlist(
        &self,
        username: &str,
        hotel_id: &str,
    ) -> Result<UserProfile, ProfileError> {
        let mut profile = self.load(username)?;
        profile.saved_hotels.retain(|saved| saved != hotel_id);
        self.repository.upsert(profile.clone())?;
        Ok(profile)
    }

    /// Stores the quiz answers, the ids of the leading results, and the
    /// timestamp of the run.
    pub fn record_recommendations(
        &self,
        username: &str,
        query: &PreferenceQuery,
        results: &[ScoredResult<'_>],
        recommended_at: DateTime<Utc>,
    ) -> Result<UserProfile, ProfileError> {
        let mut profile = self.load(username)?;
        profile.quiz_answers = Some(query.clone());
        profile.last_recommendations = results
            .iter()
            .take(RECOMMENDATION_HISTORY)
            .map(|result| result.hotel.id.clone())
            .collect();
        profile.last_recommended_at = Some(recommended_at);
        self.repository.upsert(profile.clone())?;
        Ok(profile)
    }

    fn load(&self, username: &str) -> Result<UserProfile, ProfileError> {
        Ok(self
            .repository
            .fetch(username)?
            .unwrap_or_else(|| UserProfile::empty(username)))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use chrono::TimeZone;

    use super::*;
    use crate::catalog::HotelRecord;

    #[derive(Default)]
    struct MemoryProfiles {
        profiles: Mutex<HashMap<String, UserProfile>>,
    }

    impl ProfileRepository for MemoryProfiles {
        fn fetch(&self, username: &str) -> Result<Option<UserProfile>, ProfileError> {
            let guard = self.profiles.lock().expect("profile mutex poisoned");
            Ok(guard.get(username).cloned())
        }

        fn upsert(&self, profile: UserProfile) -> Result<(), ProfileError> {
            let mut guard = self.profiles.lock().expect("profile mutex poisoned");
            guard.insert(profile.username.clone(), profile);
            Ok(())
        }
    }

    struct UnavailableProfiles;

    impl ProfileRepository for UnavailableProfiles {
        fn fetch(&self, _username: &str) -> Result<Option<UserProfile>, ProfileError> {
            Err(ProfileError::Unavailable("store offline".to_string()))
        }

        fn upsert(&self, _profile: UserProfile) -> Result<(), ProfileError> {
            Err(ProfileError::Unavailable("store offline".to_string()))
        }
    }

    fn service() -> ProfileService<MemoryProfiles> {
        ProfileService::new(Arc::new(MemoryProfiles::default()))
    }

    fn hotel(id: &str) -> HotelRecord {
        HotelRecord {
            id: id.to_string(),
            name: format!("Hotel {id}"),
            city: "Goa".to_string(),
            address: String::new(),
            description: String::new(),
            price_per_night: 4000.0,
            rating: 4.2,
            distance_from_center_km: 1.0,
            ideal_for: Vec::new(),
            tags: Vec::new(),
            amenities: Vec::new(),
            sdg_tags: Vec::new(),
        }
    }

    #[test]
    fn missing_profiles_materialize_empty() {
        let service = service();

        let profile = service.profile("meera").expect("profile should load");

        assert_eq!(profile, UserProfile::empty("meera"));
    }

    #[test]
    fn saved_preferences_survive_a_reload() {
        let service = service();
        let answers = PreferenceQuery {
            trip_type: "beach".to_string(),
            max_budget: 12000.0,
            ..PreferenceQuery::default()
        };

        service
            .save_preferences("adarsh", answers.clone())
            .expect("preferences should save");
        let profile = service.profile("adarsh").expect("profile should load");

        assert_eq!(profile.quiz_answers, Some(answers));
    }

    #[test]
    fn wishlist_additions_are_idempotent() {
        let service = service();

        service
            .add_to_wishlist("adarsh", "sunset-cove-beach-resort-goa")
            .expect("first save should work");
        let profile = service
            .add_to_wishlist("adarsh", "sunset-cove-beach-resort-goa")
            .expect("second save should work");

        assert_eq!(
            profile.saved_hotels,
            vec!["sunset-cove-beach-resort-goa".to_string()]
        );
    }

    #[test]
    fn wishlist_removal_ignores_absent_ids() {
        let service = service();
        service
            .add_to_wishlist("adarsh", "jaipur-palace-hotel-jaipur")
            .expect("save should work");

        let profile = service
            .remove_from_wishlist("adarsh", "never-saved")
            .expect("removal should not fail");

        assert_eq!(
            profile.saved_hotels,
            vec!["jaipur-palace-hotel-jaipur".to_string()]
        );
    }

    #[test]
    fn wishlist_removal_drops_the_saved_id() {
        let service = service();
        service
            .add_to_wishlist("adarsh", "jaipur-palace-hotel-jaipur")
            .expect("save should work");
        service
            .add_to_wishlist("adarsh", "metro-business-suites-mumbai")
            .expect("save should work");

        let profile = service
            .remove_from_wishlist("adarsh", "jaipur-palace-hotel-jaipur")
            .expect("removal should work");

        assert_eq!(
            profile.saved_hotels,
            vec!["metro-business-suites-mumbai".to_string()]
        );
    }

    #[test]
    fn recorded_runs_keep_only_the_leading_ids() {
        let service = service();
        let hotels: Vec<HotelRecord> = (0..8).map(|n| hotel(&format!("hotel-{n}"))).collect();
        let results: Vec<ScoredResult<'_>> = hotels
            .iter()
            .map(|hotel| ScoredResult {
                hotel,
                score: 50,
                reasons: Vec::new(),
            })
            .collect();
        let query = PreferenceQuery {
            trip_type: "family".to_string(),
            ..PreferenceQuery::default()
        };
        let recommended_at = Utc.with_ymd_and_hms(2024, 7, 14, 9, 30, 0).unwrap();

        let profile = service
            .record_recommendations("adarsh", &query, &results, recommended_at)
            .expect("recording should work");

        assert_eq!(profile.last_recommendations.len(), RECOMMENDATION_HISTORY);
        assert_eq!(profile.last_recommendations[0], "hotel-0");
        assert_eq!(profile.last_recommendations[5], "hotel-5");
        assert_eq!(profile.quiz_answers, Some(query));
        assert_eq!(profile.last_recommended_at, Some(recommended_at));
    }

    #[test]
    fn storage_failures_bubble_up() {
        let service = ProfileService::new(Arc::new(UnavailableProfiles));

        let result = service.profile("adarsh");

        match result {
            Err(ProfileError::Unavailable(_)) => {}
            other => panic!("expected unavailable error, got {other:?}"),
        }
    }
}
