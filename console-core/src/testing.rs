//! Fakes shared by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::GatewayConfig;
use crate::net::error::ApiError;
use crate::net::gateway::{Gateway, HttpRequest, HttpResponse, Transport, TransportError};
use crate::state::auth::{CredentialStore, Credentials, IdentityContext, Verifier};
use crate::util::storage::{KeyValueStorage, MemoryStorage, StorageError};

/// Identity context that remembers every call.
#[derive(Debug, Default)]
pub struct RecordingIdentity {
    pub calls: Mutex<Vec<Option<String>>>,
}

impl IdentityContext for RecordingIdentity {
    fn set_user(&self, username: Option<&str>) {
        self.calls.lock().push(username.map(str::to_owned));
    }
}

/// Storage whose writes always fail.
#[derive(Debug, Default)]
pub struct ReadOnlyStorage;

impl KeyValueStorage for ReadOnlyStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("quota exceeded".to_owned()))
    }
}

/// Verifier returning a fixed outcome.
pub struct FixedVerifier {
    pub outcome: Result<(), ApiError>,
    pub seen: RefCell<Vec<Credentials>>,
}

impl FixedVerifier {
    pub fn accepting() -> Self {
        Self { outcome: Ok(()), seen: RefCell::new(Vec::new()) }
    }

    pub fn rejecting(error: ApiError) -> Self {
        Self { outcome: Err(error), seen: RefCell::new(Vec::new()) }
    }
}

impl Verifier for FixedVerifier {
    async fn verify(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.seen.borrow_mut().push(credentials.clone());
        self.outcome.clone()
    }
}

/// Transport replaying scripted outcomes and recording requests.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
    pub sent: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies.borrow_mut().push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.replies.borrow_mut().push_back(Err(TransportError(message.to_owned())));
        self
    }

    pub fn last(&self) -> HttpRequest {
        self.sent.borrow().last().cloned().expect("no request sent")
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.sent.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted reply".to_owned())))
    }
}

/// Fresh anonymous store over in-memory storage.
pub fn store() -> (CredentialStore, Arc<MemoryStorage>, Arc<RecordingIdentity>) {
    let storage = Arc::new(MemoryStorage::new());
    let identity = Arc::new(RecordingIdentity::default());
    let store = CredentialStore::restore(storage.clone(), identity.clone());
    (store, storage, identity)
}

/// Store already signed in as `admin` / `secret`.
pub fn signed_in_store() -> CredentialStore {
    let (store, _, _) = store();
    store.set_credentials(Credentials::new("admin", "secret"));
    store
}

pub fn gateway(store: &CredentialStore, transport: ScriptedTransport) -> Gateway<ScriptedTransport> {
    Gateway::new(GatewayConfig::default(), transport, store.clone())
}
