//! Transport Adapter
//!
//! The single chokepoint for outgoing requests. Attaches the bearer token
//! of the active session and recovers from 401 responses by tearing the
//! session down and firing the registered unauthorized hook.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::session::SessionStore;

/// Paths under this prefix never carry a bearer token
const AUTH_PREFIX: &str = "/auth/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// A request relative to the API root
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Path below the API root, starting with `/`
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: None }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_params(mut self, params: Vec<(String, String)>) -> Self {
        self.query.extend(params);
        self
    }

    pub fn with_json<T: Serialize>(mut self, body: &T) -> ApiResult<Self> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn is_auth_request(&self) -> bool {
        self.path.starts_with(AUTH_PREFIX)
    }

    /// Query parameter lookup, mostly for logging and tests
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// No response came back (connection refused, CORS, offline, ...)
#[derive(Debug, Clone, PartialEq)]
pub struct TransportFailure(pub String);

/// Something that can put a request on the wire
#[async_trait(?Send)]
pub trait HttpBackend {
    /// Execute `request`, adding `Authorization: Bearer <bearer>` when given
    async fn execute(&self, request: &HttpRequest, bearer: Option<&str>) -> Result<HttpResponse, TransportFailure>;
}

type UnauthorizedHook = Rc<dyn Fn()>;

/// Request pipeline shared by every resource client
pub struct Transport<B> {
    backend: Rc<B>,
    session: SessionStore,
    on_unauthorized: Rc<RefCell<Option<UnauthorizedHook>>>,
}

impl<B> Clone for Transport<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Rc::clone(&self.backend),
            session: self.session.clone(),
            on_unauthorized: Rc::clone(&self.on_unauthorized),
        }
    }
}

impl<B: HttpBackend> Transport<B> {
    pub fn new(backend: B, session: SessionStore) -> Self {
        Self {
            backend: Rc::new(backend),
            session,
            on_unauthorized: Rc::new(RefCell::new(None)),
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Register the policy run after a 401 has cleared the session.
    /// Replaces any previously registered hook.
    pub fn on_unauthorized(&self, hook: impl Fn() + 'static) {
        *self.on_unauthorized.borrow_mut() = Some(Rc::new(hook));
    }

    pub async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let bearer = if request.is_auth_request() { None } else { self.session.token() };

        log::debug!("[Transport] {} {}", request.method.as_str(), request.path);
        if bearer.is_none() && !request.is_auth_request() {
            log::warn!("[Transport] No valid token found for non-auth request to {}", request.path);
        }

        let response = self
            .backend
            .execute(&request, bearer.as_deref())
            .await
            .map_err(|failure| {
                log::error!("[Transport] {} {} failed: {}", request.method.as_str(), request.path, failure.0);
                ApiError::Network(failure.0)
            })?;

        if response.status == 401 {
            log::warn!("[Transport] Received 401 Unauthorized from {}, logging out", request.path);
            self.session.clear();
            self.fire_unauthorized();
            return Err(ApiError::Unauthorized);
        }

        if !response.is_success() {
            let error = ApiError::from_response(response.status, &response.body);
            log::warn!("[Transport] {} {} -> {}", request.method.as_str(), request.path, error);
            return Err(error);
        }

        Ok(response)
    }

    /// Send and decode a JSON body; an empty body decodes as `null`
    pub async fn send_json<T: DeserializeOwned>(&self, request: HttpRequest) -> ApiResult<T> {
        let response = self.send(request).await?;
        let body = if response.body.trim().is_empty() { "null" } else { response.body.as_str() };
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send and ignore whatever the server answered with
    pub async fn send_empty(&self, request: HttpRequest) -> ApiResult<()> {
        self.send(request).await.map(|_| ())
    }

    fn fire_unauthorized(&self) {
        // Clone out first so the hook may re-register itself
        let hook = self.on_unauthorized.borrow().clone();
        if let Some(hook) = hook {
            hook();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::config::TOKEN_KEY;
    use crate::session::{CredentialStore, MemoryCredentials};
    use crate::testing::{signed_in_store, ScriptedBackend};

    #[tokio::test]
    async fn test_bearer_attached_when_signed_in() {
        let (store, _) = signed_in_store("abc", "a@b.com");
        let transport = Transport::new(ScriptedBackend::new().on(Method::Get, "/projects", 200, "[]"), store);

        transport.send(HttpRequest::get("/projects")).await.unwrap();

        let sent = transport.backend().requests();
        assert_eq!(sent[0].1.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_auth_requests_never_carry_token() {
        let (store, _) = signed_in_store("abc", "a@b.com");
        let transport = Transport::new(
            ScriptedBackend::new().on(Method::Post, "/auth/login", 200, r#"{"token":"new"}"#),
            store,
        );

        transport.send(HttpRequest::post("/auth/login")).await.unwrap();

        assert_eq!(transport.backend().requests()[0].1, None);
    }

    #[tokio::test]
    async fn test_placeholder_token_is_ignored() {
        let credentials = Rc::new(MemoryCredentials::default());
        credentials.set(TOKEN_KEY, "undefined");
        let store = SessionStore::restored(credentials);
        let transport = Transport::new(ScriptedBackend::new().on(Method::Get, "/projects", 200, "[]"), store);

        transport.send(HttpRequest::get("/projects")).await.unwrap();

        assert_eq!(transport.backend().requests()[0].1, None);
    }

    #[tokio::test]
    async fn test_401_clears_session_and_fires_hook() {
        let (store, credentials) = signed_in_store("abc", "a@b.com");
        let transport = Transport::new(ScriptedBackend::new().on(Method::Get, "/projects", 401, ""), store.clone());
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        transport.on_unauthorized(move || counter.set(counter.get() + 1));

        let err = transport.send(HttpRequest::get("/projects")).await.unwrap_err();

        assert_eq!(err, ApiError::Unauthorized);
        assert_eq!(fired.get(), 1);
        assert!(!store.is_active());
        assert_eq!(credentials.get(TOKEN_KEY), None);
    }

    #[tokio::test]
    async fn test_other_errors_propagate_with_message() {
        let (store, _) = signed_in_store("abc", "a@b.com");
        let transport = Transport::new(
            ScriptedBackend::new().on(Method::Delete, "/projects/3", 400, r#"{"message":"Project has open tasks"}"#),
            store.clone(),
        );

        let err = transport.send(HttpRequest::delete("/projects/3")).await.unwrap_err();

        assert_eq!(err, ApiError::Server { status: 400, message: "Project has open tasks".into() });
        assert!(store.is_active());
    }

    #[tokio::test]
    async fn test_no_response_is_network_error() {
        let (store, _) = signed_in_store("abc", "a@b.com");
        let transport = Transport::new(ScriptedBackend::new(), store);

        let err = transport.send(HttpRequest::get("/projects")).await.unwrap_err();

        assert!(err.is_network());
    }

    #[tokio::test]
    async fn test_empty_body_decodes_as_null() {
        let (store, _) = signed_in_store("abc", "a@b.com");
        let transport = Transport::new(ScriptedBackend::new().on(Method::Get, "/projects", 200, ""), store);

        let value: Option<Vec<u32>> = transport.send_json(HttpRequest::get("/projects")).await.unwrap();

        assert_eq!(value, None);
    }
}
