//! Session Store
//!
//! Owns the authenticated identity. Persisted credentials and the in-memory
//! session are always written together; nothing else mutates either.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::{EMAIL_KEY, TOKEN_KEY};
use crate::error::{ApiError, ApiResult};
use crate::models::Session;
use crate::resources::AuthClient;
use crate::transport::{HttpBackend, Transport};

/// Key/value persistence for credentials (localStorage in the browser)
pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory credentials, used in tests and when the browser refuses storage
#[derive(Debug, Default)]
pub struct MemoryCredentials {
    entries: RefCell<HashMap<String, String>>,
}

impl CredentialStore for MemoryCredentials {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// A stored token is only usable if it is not a serialized placeholder
pub fn is_usable_token(token: &str) -> bool {
    let token = token.trim();
    !token.is_empty() && token != "undefined" && token != "null"
}

type Listener = Rc<dyn Fn(Option<Session>)>;

struct SessionInner {
    current: RefCell<Option<Session>>,
    credentials: Rc<dyn CredentialStore>,
    listeners: RefCell<Vec<Listener>>,
}

/// Handle to the process-wide session; clones share state
#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<SessionInner>,
}

impl SessionStore {
    /// Store with no active session; call [`SessionStore::restore`] to pick up persisted credentials
    pub fn new(credentials: Rc<dyn CredentialStore>) -> Self {
        Self {
            inner: Rc::new(SessionInner {
                current: RefCell::new(None),
                credentials,
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// New store with persisted credentials already restored
    pub fn restored(credentials: Rc<dyn CredentialStore>) -> Self {
        let store = Self::new(credentials);
        store.restore();
        store
    }

    /// Re-read persisted credentials. No network call.
    pub fn restore(&self) -> Option<Session> {
        let credentials = &self.inner.credentials;
        let session = credentials
            .get(TOKEN_KEY)
            .filter(|token| is_usable_token(token))
            .map(|token| Session {
                token,
                email: credentials.get(EMAIL_KEY).unwrap_or_default(),
            });

        match &session {
            Some(s) => log::info!("[Session] Restored session for {}", s.email),
            None => log::debug!("[Session] No persisted session"),
        }
        *self.inner.current.borrow_mut() = session.clone();
        self.notify();
        session
    }

    pub fn current(&self) -> Option<Session> {
        self.inner.current.borrow().clone()
    }

    pub fn is_active(&self) -> bool {
        self.inner.current.borrow().is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.inner
            .current
            .borrow()
            .as_ref()
            .map(|s| s.token.clone())
            .filter(|token| is_usable_token(token))
    }

    /// Authenticate and, on success, persist and activate the session
    pub async fn login<B: HttpBackend>(&self, transport: &Transport<B>, email: &str, password: &str) -> ApiResult<Session> {
        let response = AuthClient::new(transport).login(email, password).await?;

        let token = response
            .token
            .filter(|token| is_usable_token(token))
            .ok_or_else(|| ApiError::Auth("No token received from server".to_string()))?;
        let email = response
            .email
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| email.trim().to_string());

        let session = Session { token, email };
        self.activate(session.clone());
        log::info!("[Session] Logged in as {}", session.email);
        Ok(session)
    }

    /// Forget the session locally. Never touches the network.
    pub fn logout(&self) {
        log::info!("[Session] Logged out");
        self.deactivate();
    }

    /// Drop the session after the server rejected it
    pub fn clear(&self) {
        self.deactivate();
    }

    /// Called with the new session after every change
    pub fn subscribe(&self, listener: impl Fn(Option<Session>) + 'static) {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    fn activate(&self, session: Session) {
        let credentials = &self.inner.credentials;
        credentials.set(TOKEN_KEY, &session.token);
        credentials.set(EMAIL_KEY, &session.email);
        *self.inner.current.borrow_mut() = Some(session);
        self.notify();
    }

    fn deactivate(&self) {
        let credentials = &self.inner.credentials;
        credentials.remove(TOKEN_KEY);
        credentials.remove(EMAIL_KEY);
        *self.inner.current.borrow_mut() = None;
        self.notify();
    }

    fn notify(&self) {
        let snapshot = self.current();
        let listeners: Vec<Listener> = self.inner.listeners.borrow().clone();
        for listener in listeners {
            listener(snapshot.clone());
        }
    }
}
