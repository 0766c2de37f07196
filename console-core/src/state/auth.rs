//! Credential store for the device's HTTP basic-auth session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The device has no server-side sessions: every request carries the
//! username/password pair. The store is the one place that pair lives on
//! the client. It is shared by cheap clones of a single handle; the guard,
//! the gateway and the views all read it through the accessors below, so a
//! change is visible to the very next operation.
//!
//! DESIGN
//! ======
//! `Session` holds `Option<Credentials>`, which makes a half-populated
//! session unrepresentable. The persisted JSON keeps the flat
//! `{ "username", "password" }` shape; a record with only one field set is
//! restored as anonymous.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::events::{SessionEvent, SessionEventStream, SessionEvents, SignOutCause};
use crate::config::SESSION_STORAGE_KEY;
use crate::net::error::ApiError;
use crate::util::storage::{self, KeyValueStorage};

/// Username/password pair sent as HTTP basic auth.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn basic_auth_header(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {token}")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Persisted shape of the session.
#[derive(Clone, Default, Serialize, Deserialize)]
struct StoredSession {
    username: Option<String>,
    password: Option<String>,
}

/// The current authenticated identity, or none.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredSession", into = "StoredSession")]
pub struct Session {
    credentials: Option<Credentials>,
}

impl Session {
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn authenticated(credentials: Credentials) -> Self {
        Self { credentials: Some(credentials) }
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.credentials.is_some()
    }

    #[must_use]
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.username.as_str())
    }
}

impl From<StoredSession> for Session {
    fn from(stored: StoredSession) -> Self {
        match (stored.username, stored.password) {
            (Some(username), Some(password)) => Self::authenticated(Credentials { username, password }),
            _ => Self::anonymous(),
        }
    }
}

impl From<Session> for StoredSession {
    fn from(session: Session) -> Self {
        match session.credentials {
            Some(Credentials { username, password }) => Self { username: Some(username), password: Some(password) },
            None => Self::default(),
        }
    }
}

/// External user-identification integration (error reporting, analytics).
///
/// Set on sign-in, cleared on every sign-out.
pub trait IdentityContext: Send + Sync {
    fn set_user(&self, username: Option<&str>);
}

/// Identity context that only records the change in the log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogIdentity;

impl IdentityContext for LogIdentity {
    fn set_user(&self, username: Option<&str>) {
        match username {
            Some(name) => log::debug!("identity set: {name}"),
            None => log::debug!("identity cleared"),
        }
    }
}

/// Checks a candidate pair against the device.
#[allow(async_fn_in_trait)]
pub trait Verifier {
    /// # Errors
    ///
    /// Returns the device's rejection or the transport failure unchanged.
    async fn verify(&self, credentials: &Credentials) -> Result<(), ApiError>;
}

/// Shared, persistent holder of the session.
#[derive(Clone)]
pub struct CredentialStore {
    session: Arc<RwLock<Session>>,
    storage: Arc<dyn KeyValueStorage>,
    identity: Arc<dyn IdentityContext>,
    events: SessionEvents,
}

impl fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialStore")
            .field("session", &*self.session.read())
            .finish_non_exhaustive()
    }
}

impl CredentialStore {
    /// Build a store from whatever `storage` holds under the session key.
    ///
    /// An unreadable record is logged and treated as anonymous. A restored
    /// session is re-announced to `identity`.
    pub fn restore(storage: Arc<dyn KeyValueStorage>, identity: Arc<dyn IdentityContext>) -> Self {
        let session = match storage::load_json::<Session>(storage.as_ref(), SESSION_STORAGE_KEY) {
            Ok(Some(session)) => session,
            Ok(None) => Session::anonymous(),
            Err(e) => {
                log::warn!("discarding persisted session: {e}");
                Session::anonymous()
            }
        };
        if let Some(username) = session.username() {
            identity.set_user(Some(username));
        }
        Self { session: Arc::new(RwLock::new(session)), storage, identity, events: SessionEvents::new() }
    }

    /// Snapshot of the current session.
    #[must_use]
    pub fn session(&self) -> Session {
        self.session.read().clone()
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.read().is_logged_in()
    }

    /// Basic-auth pair to attach to requests, if signed in.
    #[must_use]
    pub fn credentials(&self) -> Option<Credentials> {
        self.session.read().credentials().cloned()
    }

    #[must_use]
    pub fn username(&self) -> Option<String> {
        self.session.read().username().map(str::to_owned)
    }

    /// Subscribe to sign-in / sign-out transitions.
    #[must_use]
    pub fn subscribe(&self) -> SessionEventStream {
        self.events.subscribe()
    }

    /// Replace the session with `credentials`. Never fails: a storage error
    /// is logged and the in-memory session still changes.
    pub fn set_credentials(&self, credentials: Credentials) {
        let username = credentials.username.clone();
        self.replace(Session::authenticated(credentials));
        self.identity.set_user(Some(&username));
        log::info!("signed in as {username}");
        self.events.emit(&SessionEvent::SignedIn { username });
    }

    /// Verify `credentials` and store them only if the device accepts them.
    ///
    /// # Errors
    ///
    /// Returns the verification failure unchanged; the session is untouched.
    pub async fn sign_in<V: Verifier>(&self, verifier: &V, credentials: Credentials) -> Result<(), ApiError> {
        verifier.verify(&credentials).await?;
        self.set_credentials(credentials);
        Ok(())
    }

    /// End the session at the user's request.
    pub fn sign_out(&self) {
        self.sign_out_with(SignOutCause::Requested);
    }

    /// End the session and announce why. Idempotent apart from the event.
    pub fn sign_out_with(&self, cause: SignOutCause) {
        self.replace(Session::anonymous());
        self.identity.set_user(None);
        log::info!("signed out ({cause:?})");
        self.events.emit(&SessionEvent::SignedOut { cause });
    }

    fn replace(&self, session: Session) {
        if let Err(e) = storage::save_json(self.storage.as_ref(), SESSION_STORAGE_KEY, &session) {
            log::warn!("session not persisted: {e}");
        }
        *self.session.write() = session;
    }
}
