//! User profiles: saved quiz answers, hotel wishlists, and the ids of the
//! most recent recommendation run.

mod repository;
mod service;

pub use repository::{ProfileError, ProfileRepository, UserProfile};
pub use service::{ProfileService, RECOMMENDATION_HISTORY};
