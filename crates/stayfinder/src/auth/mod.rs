//! Bearer-token authentication: a credential check on login, then opaque
//! session tokens resolved on every profile-backed request.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public identity attached to a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
    pub name: String,
    pub email: String,
}

/// Username and password pair together with the identity it unlocks.
#[derive(Debug, Clone)]
pub struct StaticCredential {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
}

/// Credential backends verify a username and password pair.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> Result<Identity, AuthError>;
}

/// Verifier over a fixed credential list resolved at startup.
pub struct StaticCredentialVerifier {
    credentials: Vec<StaticCredential>,
}

impl StaticCredentialVerifier {
    pub fn new(credentials: Vec<StaticCredential>) -> Self {
        Self { credentials }
    }
}

impl CredentialVerifier for StaticCredentialVerifier {
    /// Unknown usernames and wrong passwords fail with the same error.
    fn verify(&self, username: &str, password: &str) -> Result<Identity, AuthError> {
        self.credentials
            .iter()
            .find(|credential| credential.username == username && credential.password == password)
            .map(|credential| Identity {
                username: credential.username.clone(),
                name: credential.name.clone(),
                email: credential.email.clone(),
            })
            .ok_or(AuthError::InvalidCredentials)
    }
}

/// Session storage abstraction.
pub trait SessionStore: Send + Sync {
    fn insert(&self, token: &str, identity: Identity) -> Result<(), AuthError>;
    fn resolve(&self, token: &str) -> Result<Option<Identity>, AuthError>;
}

/// Issued session: the bearer token plus the identity it proves.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub token: String,
    pub identity: Identity,
}

/// Pairs a credential backend with session storage.
pub struct SessionManager<V, S> {
    verifier: Arc<V>,
    sessions: Arc<S>,
}

impl<V, S> SessionManager<V, S>
where
    V: CredentialVerifier + 'static,
    S: SessionStore + 'static,
{
    pub fn new(verifier: Arc<V>, sessions: Arc<S>) -> Self {
        Self { verifier, sessions }
    }

    /// Verifies the credentials and issues a fresh opaque token.
    pub fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let identity = self.verifier.verify(username, password)?;
        let token = Uuid::new_v4().to_string();
        self.sessions.insert(&token, identity.clone())?;
        Ok(Session { token, identity })
    }

    /// Resolves a bearer token back to the identity it was issued for.
    pub fn authenticate(&self, token: &str) -> Result<Identity, AuthError> {
        self.sessions.resolve(token)?.ok_or(AuthError::UnknownToken)
    }
}

/// Error enumeration for authentication failures.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("unknown or expired session token")]
    UnknownToken,
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}
