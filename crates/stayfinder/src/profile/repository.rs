use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::recommend::PreferenceQuery;

/// Travel profile persisted per user: quiz answers, wishlist, and the
/// trail of the most recent recommendation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    pub quiz_answers: Option<PreferenceQuery>,
    pub saved_hotels: Vec<String>,
    pub last_recommendations: Vec<String>,
    pub last_recommended_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    pub fn empty(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            quiz_answers: None,
            saved_hotels: Vec::new(),
            last_recommendations: Vec::new(),
            last_recommended_at: None,
        }
    }
}

/// Storage abstraction so the profile service can be exercised in isolation.
pub trait ProfileRepository: Send + Sync {
    fn fetch(&self, username: &str) -> Result<Option<UserProfile>, ProfileError>;
    fn upsert(&self, profile: UserProfile) -> Result<(), ProfileError>;
}

/// Error enumeration for profile storage failures.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("profile store unavailable: {0}")]
    Unavailable(String),
}
