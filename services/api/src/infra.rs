use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use metrics_exporter_prometheus::PrometheusHandle;

use stayfinder::auth::{AuthError, Identity, SessionStore, StaticCredential};
use stayfinder::catalog::{seed_catalog, Catalog, CatalogError, CsvCatalogImporter};
use stayfinder::config::CatalogConfig;
use stayfinder::profile::{ProfileError, ProfileRepository, UserProfile};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Where the served catalog comes from.
///
/// Command-line flags win over environment configuration, and a JSON
/// catalog wins over a CSV export.
#[derive(Debug, Clone)]
pub(crate) enum CatalogSource {
    Seed,
    Json(PathBuf),
    Csv(PathBuf),
}

impl CatalogSource {
    pub(crate) fn choose(
        cli_json: Option<PathBuf>,
        cli_csv: Option<PathBuf>,
        config: &CatalogConfig,
    ) -> Self {
        if let Some(path) = cli_json {
            Self::Json(path)
        } else if let Some(path) = cli_csv {
            Self::Csv(path)
        } else if let Some(path) = config.json_path.clone() {
            Self::Json(path)
        } else if let Some(path) = config.csv_path.clone() {
            Self::Csv(path)
        } else {
            Self::Seed
        }
    }

    pub(crate) fn load(&self) -> Result<Catalog, CatalogError> {
        match self {
            Self::Seed => Ok(seed_catalog()),
            Self::Json(path) => Catalog::from_json_path(path),
            Self::Csv(path) => CsvCatalogImporter::from_path(path)?.into_catalog(),
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Seed => "seed",
            Self::Json(_) => "json",
            Self::Csv(_) => "csv",
        }
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileRepository {
    profiles: Arc<Mutex<HashMap<String, UserProfile>>>,
}

impl ProfileRepository for InMemoryProfileRepository {
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

#[derive(Default, Clone)]
pub(crate) struct InMemorySessionStore {
    sessions: Arc<Mutex<HashMap<String, Identity>>>,
}

impl SessionStore for InMemorySessionStore {
    fn insert(&self, token: &str, identity: Identity) -> Result<(), AuthError> {
        let mut guard = self.sessions.lock().expect("session mutex poisoned");
        guard.insert(token.to_string(), identity);
        Ok(())
    }

    fn resolve(&self, token: &str) -> Result<Option<Identity>, AuthError> {
        let guard = self.sessions.lock().expect("session mutex poisoned");
        Ok(guard.get(token).cloned())
    }
}

/// Demo accounts accepted by the login endpoint until a real user store lands.
pub(crate) fn demo_credentials() -> Vec<StaticCredential> {
    vec![
        StaticCredential {
            username: "adarsh".to_string(),
            password: "password123".to_string(),
            name: "Adarsh".to_string(),
            email: "adarsh@example.com".to_string(),
        },
        StaticCredential {
            username: "meera".to_string(),
            password: "letmein".to_string(),
            name: "Meera".to_string(),
            email: "meera@example.com".to_string(),
        },
    ]
}
