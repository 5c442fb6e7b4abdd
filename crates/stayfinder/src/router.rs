//! HTTP surface for the recommendation engine, catalog browsing, login,
//! and profile management.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use crate::auth::{AuthError, CredentialVerifier, Identity, SessionManager, SessionStore};
use crate::catalog::{Catalog, HotelRecord};
use crate::profile::{ProfileError, ProfileRepository, ProfileService, UserProfile};
use crate::recommend::{PreferenceQuery, RecommendationEngine, ScoredResult};

/// Hard cap on results returned per recommendation request.
pub const MAX_RESULTS: usize = 12;

/// Everything the HTTP handlers need: the catalog being served, the scoring
/// engine, and the profile and session services behind the account routes.
pub struct ApiState<P, V, S> {
    pub catalog: Catalog,
    pub engine: RecommendationEngine,
    pub profiles: ProfileService<P>,
    pub sessions: SessionManager<V, S>,
}

/// Router builder exposing the recommendation, catalog, auth, and profile
/// endpoints.
pub fn recommendation_router<P, V, S>(state: Arc<ApiState<P, V, S>>) -> Router
where
    P: ProfileRepository + 'static,
    V: CredentialVerifier + 'static,
    S: SessionStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/recommendations",
            post(recommend_handler::<P, V, S>),
        )
        .route("/api/v1/hotels", get(hotels_handler::<P, V, S>))
        .route("/api/v1/hotels/:hotel_id", get(hotel_handler::<P, V, S>))
        .route("/api/v1/auth/login", post(login_handler::<P, V, S>))
        .route(
            "/api/v1/profile/preferences",
            get(preferences_handler::<P, V, S>).put(save_preferences_handler::<P, V, S>),
        )
        .route(
            "/api/v1/profile/wishlist",
            get(wishlist_handler::<P, V, S>).post(wishlist_add_handler::<P, V, S>),
        )
        .route(
            "/api/v1/profile/wishlist/:hotel_id",
            delete(wishlist_remove_handler::<P, V, S>),
        )
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationRequest {
    #[serde(flatten)]
    query: PreferenceQuery,
    #[serde(default)]
    limit: Option<usize>,
}

#[derive(Debug, Serialize)]
struct RecommendationsView<'a> {
    results: Vec<ScoredResult<'a>>,
}

#[derive(Debug, Serialize)]
struct HotelsView<'a> {
    hotels: &'a [HotelRecord],
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Debug, Serialize)]
struct LoginView {
    token: String,
    user: Identity,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SavePreferencesRequest {
    quiz_answers: PreferenceQuery,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PreferencesView {
    quiz_answers: Option<PreferenceQuery>,
    last_recommendations: Vec<String>,
    last_recommended_at: Option<DateTime<Utc>>,
}

impl From<UserProfile> for PreferencesView {
    fn from(profile: UserProfile) -> Self {
        Self {
            quiz_answers: profile.quiz_answers,
            last_recommendations: profile.last_recommendations,
            last_recommended_at: profile.last_recommended_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WishlistAddRequest {
    hotel_id: String,
}

#[derive(Debug, Serialize)]
struct WishlistView {
    wishlist: Vec<String>,
}

pub(crate) async fn recommend_handler<P, V, S>(
    State(state): State<Arc<ApiState<P, V, S>>>,
    headers: HeaderMap,
    axum::Json(request): axum::Json<RecommendationRequest>,
) -> Response
where
    P: ProfileRepository + 'static,
    V: CredentialVerifier + 'static,
    S: SessionStore + 'static,
{
    let limit = request.limit.unwrap_or(MAX_RESULTS).min(MAX_RESULTS);
    let results = state.engine.rank(&state.catalog, &request.query, Some(limit));

    // Stale tokens degrade to an anonymous run instead of failing the request.
    if let Some(identity) = optional_identity(&state.sessions, &headers) {
        if let Err(error) = state.profiles.record_recommendations(
            &identity.username,
            &request.query,
            &results,
            Utc::now(),
        ) {
            warn!(user = %identity.username, %error, "failed to persist recommendation run");
        }
    }

    (StatusCode::OK, axum::Json(RecommendationsView { results })).into_response()
}

pub(crate) async fn hotels_handler<P, V, S>(
    State(state): State<Arc<ApiState<P, V, S>>>,
) -> Response
where
    P: ProfileRepository + 'static,
    V: CredentialVerifier + 'static,
    S: SessionStore + 'static,
{
    (
        StatusCode::OK,
        axum::Json(HotelsView {
            hotels: state.catalog.hotels(),
        }),
    )
        .into_response()
}

pub(crate) async fn hotel_handler<P, V, S>(
    State(state): State<Arc<ApiState<P, V, S>>>,
    Path(hotel_id): Path<String>,
) -> Response
where
    P: ProfileRepository + 'static,
    V: CredentialVerifier + 'static,
    S: SessionStore + 'static,
{
    match state.catalog.get(&hotel_id) {
        Some(hotel) => (StatusCode::OK, axum::Json(hotel)).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            axum::Json(json!({ "error": "hotel not found" })),
        )
            .into_response(),
    }
}

pub(crate) async fn login_handler<P, V, S>(
    State(state): State<Arc<ApiState<P, V, S>>>,
    axum::Json(request): axum::Json<LoginRequest>,
) -> Response
where
    P: ProfileRepository + 'static,
    V: CredentialVerifier + 'static,
    S: SessionStore + 'static,
{
    match state.sessions.login(&request.username, &request.password) {
        Ok(session) => (
            StatusCode::OK,
            axum::Json(LoginView {
                token: session.token,
                user: session.identity,
            }),
        )
            .into_response(),
        Err(AuthError::InvalidCredentials) => unauthorized("invalid username or password"),
        Err(error) => {
            warn!(%error, "login failed against the session store");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                axum::Json(json!({ "error": "session store unavailable" })),
            )
                .into_response()
        }
    }
}

pub(crate) async fn preferences_handler<P, V, S>(
    State(state): State<Arc<ApiState<P, V, S>>>,
    headers: HeaderMap,
) -> Response
where
    P: ProfileRepository + 'static,
    V: CredentialVerifier + 'static,
    S: SessionStore + 'static,
{
    let identity = match required_identity(&state.sessions, &headers) {
        Ok(identity) => identity,
        Err(response) => return response,
    };

    match state.profiles.profile(&identity.username) {
        Ok(profile) => {
            (StatusCode::OK, axum::Json(PreferencesView::from(profile))).into_response()
        }
        Err(error) => storage_failure(error),
    }
}

pub(crate) async fn save_preferences_handler<P, V, S>(
    State(state): State<Arc<ApiState<P, V, S>>>,
    headers: HeaderMap,
    axum::Json(request): axum::Json<SavePreferencesRequest>,
) -> Response
where
    P: ProfileRepository + 'static,
    V: CredentialVerifier + 'static,
    S: SessionStore + 'static,
{
    let identity = match required_identity(&state.sessions, &headers) {
        Ok(identity) => identity,
        Err(response) => return response,
    };

    match state
        .profiles
        .save_preferences(&identity.username, request.quiz_answers)
    {
        Ok(profile) => {
            (StatusCode::OK, axum::Json(PreferencesView::from(profile))).into_response()
        }
        Err(error) => storage_failure(error),
    }
}

pub(crate) async fn wishlist_handler<P, V, S>(
    State(state): State<Arc<ApiState<P, V, S>>>,
    headers: HeaderMap,
) -> Response
where
    P: ProfileRepository + 'static,
    V: CredentialVerifier + 'static,
    S: SessionStore + 'static,
{
    let identity = match required_identity(&state.sessions, &headers) {
        Ok(identity) => identity,
        Err(response) => return response,
    };

    match state.profiles.profile(&identity.username) {
        Ok(profile) => (
            StatusCode::OK,
            axum::Json(WishlistView {
                wishlist: profile.saved_hotels,
            }),
        )
            .into_response(),
        Err(error) => storage_failure(error),
    }
}

pub(crate) async fn wishlist_add_handler<P, V, S>(
    State(state): State<Arc<ApiState<P, V, S>>>,
    headers: HeaderMap,
    axum::Json(request): axum::Json<WishlistAddRequest>,
) -> Response
where
    P: ProfileRepository + 'static,
    V: CredentialVerifier + 'static,
    S: SessionStore + 'static,
{
    let identity = match required_identity(&state.sessions, &headers) {
        Ok(identity) => identity,
        Err(response) => return response,
    };

    if state.catalog.get(&request.hotel_id).is_none() {
        return (
            StatusCode::NOT_FOUND,
            axum::Json(json!({ "error": "hotel not found" })),
        )
            .into_response();
    }

    match state
        .profiles
        .add_to_wishlist(&identity.username, &request.hotel_id)
    {
        Ok(profile) => (
            StatusCode::OK,
            axum::Json(WishlistView {
                wishlist: profile.saved_hotels,
            }),
        )
            .into_response(),
        Err(error) => storage_failure(error),
    }
}

pub(crate) async fn wishlist_remove_handler<P, V, S>(
    State(state): State<Arc<ApiState<P, V, S>>>,
    headers: HeaderMap,
    Path(hotel_id): Path<String>,
) -> Response
where
    P: ProfileRepository + 'static,
    V: CredentialVerifier + 'static,
    S: SessionStore + 'static,
{
    let identity = match required_identity(&state.sessions, &headers) {
        Ok(identity) => identity,
        Err(response) => return response,
    };

    match state
        .profiles
        .remove_from_wishlist(&identity.username, &hotel_id)
    {
        Ok(profile) => (
            StatusCode::OK,
            axum::Json(WishlistView {
                wishlist: profile.saved_hotels,
            }),
        )
            .into_response(),
        Err(error) => storage_failure(error),
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn optional_identity<V, S>(sessions: &SessionManager<V, S>, headers: &HeaderMap) -> Option<Identity>
where
    V: CredentialVerifier + 'static,
    S: SessionStore + 'static,
{
    let token = bearer_token(headers)?;
    match sessions.authenticate(token) {
        Ok(identity) => Some(identity),
        Err(AuthError::UnknownToken) => None,
        Err(error) => {
            warn!(%error, "session lookup failed");
            None
        }
    }
}

fn required_identity<V, S>(
    sessions: &SessionManager<V, S>,
    headers: &HeaderMap,
) -> Result<Identity, Response>
where
    V: CredentialVerifier + 'static,
    S: SessionStore + 'static,
{
    let Some(token) = bearer_token(headers) else {
        return Err(unauthorized("missing bearer token"));
    };

    match sessions.authenticate(token) {
        Ok(identity) => Ok(identity),
        Err(AuthError::UnknownToken) => Err(unauthorized("unknown or expired session token")),
        Err(error) => {
            warn!(%error, "session lookup failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                axum::Json(json!({ "error": "session store unavailable" })),
            )
                .into_response())
        }
    }
}

fn unauthorized(detail: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        axum::Json(json!({ "error": detail })),
    )
        .into_response()
}

fn storage_failure(error: ProfileError) -> Response {
    warn!(%error, "profile store failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({ "error": "profile store unavailable" })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::auth::{StaticCredential, StaticCredentialVerifier};
    use crate::catalog::seed_catalog;

    #[derive(Default)]
    struct MemoryProfiles {
        profiles: Mutex<HashMap<String, UserProfile>>,
    }

    impl ProfileRepository for MemoryProfiles {
        fn fetch(&self, username: &str) -> Result<Option<UserProfile>, ProfileError> {
            let guard = self.profiles.lock().expect("lock");
            Ok(guard.get(username).cloned())
        }

        fn upsert(&self, profile: UserProfile) -> Result<(), ProfileError> {
            let mut guard = self.profiles.lock().expect("lock");
            guard.insert(profile.username.clone(), profile);
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemorySessions {
        sessions: Mutex<HashMap<String, Identity>>,
    }

    impl crate::auth::SessionStore for MemorySessions {
        fn insert(&self, token: &str, identity: Identity) -> Result<(), AuthError> {
            let mut guard = self.sessions.lock().expect("lock");
            guard.insert(token.to_string(), identity);
            Ok(())
        }

        fn resolve(&self, token: &str) -> Result<Option<Identity>, AuthError> {
            let guard = self.sessions.lock().expect("lock");
            Ok(guard.get(token).cloned())
        }
    }

    fn build_router() -> Router {
        let verifier = StaticCredentialVerifier::new(vec![StaticCredential {
            username: "adarsh".to_string(),
            password: "password123".to_string(),
            name: "Adarsh".to_string(),
            email: "adarsh@example.com".to_string(),
        }]);
        let state = Arc::new(ApiState {
            catalog: seed_catalog(),
            engine: RecommendationEngine::default(),
            profiles: ProfileService::new(Arc::new(MemoryProfiles::default())),
            sessions: SessionManager::new(Arc::new(verifier), Arc::new(MemorySessions::default())),
        });
        recommendation_router(state)
    }

    async fn dispatch(
        router: &Router,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> axum::http::Response<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&body).expect("serialize body"),
                ))
                .expect("request"),
            None => builder.body(Body::empty()).expect("request"),
        };
        router
            .clone()
            .oneshot(request)
            .await
            .expect("router dispatch")
    }

    async fn read_json(response: axum::http::Response<Body>) -> Value {
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        serde_json::from_slice(&body).expect("json")
    }

    async fn login(router: &Router) -> String {
        let response = dispatch(
            router,
            "POST",
            "/api/v1/auth/login",
            None,
            Some(json!({ "username": "adarsh", "password": "password123" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        payload["token"].as_str().expect("token").to_string()
    }

    fn beach_payload() -> Value {
        json!({
            "tripType": "beach",
            "minBudget": 2000,
            "maxBudget": 12000,
            "amenities": ["Wifi", "Pool"],
            "locationPref": "Goa",
            "sdg": "14",
            "guests": 2
        })
    }

    #[tokio::test]
    async fn recommendations_rank_the_seed_catalog() {
        let router = build_router();

        let response = dispatch(
            &router,
            "POST",
            "/api/v1/recommendations",
            None,
            Some(beach_payload()),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        let results = payload["results"].as_array().expect("results array");
        assert_eq!(results.len(), 10);
        assert_eq!(
            results[0]["hotel"]["id"].as_str(),
            Some("sunset-cove-beach-resort-goa")
        );
        assert_eq!(results[0]["score"].as_i64(), Some(120));
        assert_eq!(
            results[0]["reasons"].as_array().map(Vec::len),
            Some(7),
        );
    }

    #[tokio::test]
    async fn empty_quiz_still_returns_a_full_ranking() {
        let router = build_router();

        let response =
            dispatch(&router, "POST", "/api/v1/recommendations", None, Some(json!({}))).await;

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        let results = payload["results"].as_array().expect("results array");
        assert_eq!(results.len(), 10);
        assert_eq!(
            results[0]["hotel"]["id"].as_str(),
            Some("sunset-cove-beach-resort-goa")
        );
        assert_eq!(results[0]["score"].as_i64(), Some(59));
        assert_eq!(results[0]["reasons"].as_array().map(Vec::len), Some(5));
    }

    #[tokio::test]
    async fn explicit_limit_truncates_results() {
        let router = build_router();

        let mut payload = beach_payload();
        payload["limit"] = json!(3);
        let response =
            dispatch(&router, "POST", "/api/v1/recommendations", None, Some(payload)).await;

        let payload = read_json(response).await;
        assert_eq!(payload["results"].as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn authenticated_runs_land_on_the_profile() {
        let router = build_router();
        let token = login(&router).await;

        let response = dispatch(
            &router,
            "POST",
            "/api/v1/recommendations",
            Some(&token),
            Some(beach_payload()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = dispatch(
            &router,
            "GET",
            "/api/v1/profile/preferences",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(payload["quizAnswers"]["tripType"].as_str(), Some("beach"));
        let history = payload["lastRecommendations"]
            .as_array()
            .expect("history array");
        assert_eq!(history.len(), 6);
        assert_eq!(
            history[0].as_str(),
            Some("sunset-cove-beach-resort-goa")
        );
        assert!(payload["lastRecommendedAt"].is_string());
    }

    #[tokio::test]
    async fn stale_tokens_degrade_to_anonymous_runs() {
        let router = build_router();

        let response = dispatch(
            &router,
            "POST",
            "/api/v1/recommendations",
            Some("not-a-real-token"),
            Some(beach_payload()),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert!(!payload["results"].as_array().expect("results").is_empty());
    }

    #[tokio::test]
    async fn login_rejects_bad_credentials() {
        let router = build_router();

        let response = dispatch(
            &router,
            "POST",
            "/api/v1/auth/login",
            None,
            Some(json!({ "username": "adarsh", "password": "hunter2" })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let payload = read_json(response).await;
        assert_eq!(
            payload["error"].as_str(),
            Some("invalid username or password")
        );
    }

    #[tokio::test]
    async fn profile_routes_require_a_token() {
        let router = build_router();

        let response = dispatch(&router, "GET", "/api/v1/profile/preferences", None, None).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let payload = read_json(response).await;
        assert_eq!(payload["error"].as_str(), Some("missing bearer token"));
    }

    #[tokio::test]
    async fn wishlist_roundtrip_over_http() {
        let router = build_router();
        let token = login(&router).await;

        let response = dispatch(
            &router,
            "POST",
            "/api/v1/profile/wishlist",
            Some(&token),
            Some(json!({ "hotelId": "sunset-cove-beach-resort-goa" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(
            payload["wishlist"],
            json!(["sunset-cove-beach-resort-goa"])
        );

        let response = dispatch(
            &router,
            "POST",
            "/api/v1/profile/wishlist",
            Some(&token),
            Some(json!({ "hotelId": "no-such-hotel" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = dispatch(
            &router,
            "DELETE",
            "/api/v1/profile/wishlist/sunset-cove-beach-resort-goa",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(payload["wishlist"], json!([]));
    }

    #[tokio::test]
    async fn hotel_lookup_reports_unknown_ids() {
        let router = build_router();

        let response = dispatch(&router, "GET", "/api/v1/hotels", None, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(payload["hotels"].as_array().map(Vec::len), Some(10));

        let response = dispatch(
            &router,
            "GET",
            "/api/v1/hotels/jaipur-palace-hotel-jaipur",
            None,
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json(response).await;
        assert_eq!(payload["name"].as_str(), Some("Jaipur Palace Hotel"));

        let response = dispatch(&router, "GET", "/api/v1/hotels/no-such-hotel", None, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let payload = read_json(response).await;
        assert_eq!(payload["error"].as_str(), Some("hotel not found"));
    }
}
