//! Test Support
//!
//! A scripted in-memory backend: replies are registered per method and path,
//! consumed in order, and the last reply for a route keeps answering.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;

use crate::config::{EMAIL_KEY, TOKEN_KEY};
use crate::session::{CredentialStore, MemoryCredentials, SessionStore};
use crate::transport::{HttpBackend, HttpRequest, HttpResponse, Method, TransportFailure};

#[derive(Default)]
pub struct ScriptedBackend {
    routes: RefCell<HashMap<(Method, String), VecDeque<HttpResponse>>>,
    requests: RefCell<Vec<(HttpRequest, Option<String>)>>,
    yield_first: Cell<bool>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for `method path`
    pub fn on(self, method: Method, path: &str, status: u16, body: &str) -> Self {
        self.routes
            .borrow_mut()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(HttpResponse::new(status, body));
        self
    }

    /// Yield to the executor once before answering, so concurrent requests interleave
    pub fn interleaved(self) -> Self {
        self.yield_first.set(true);
        self
    }

    pub fn requests(&self) -> Vec<(HttpRequest, Option<String>)> {
        self.requests.borrow().clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|(r, _)| r.method == method && r.path == path)
            .count()
    }
}

#[async_trait(?Send)]
impl HttpBackend for ScriptedBackend {
    async fn execute(&self, request: &HttpRequest, bearer: Option<&str>) -> Result<HttpResponse, TransportFailure> {
        self.requests
            .borrow_mut()
            .push((request.clone(), bearer.map(str::to_string)));

        if self.yield_first.get() {
            tokio::task::yield_now().await;
        }

        let mut routes = self.routes.borrow_mut();
        let queue = routes
            .get_mut(&(request.method, request.path.clone()))
            .ok_or_else(|| TransportFailure(format!("connection refused: {}", request.path)))?;
        let response = if queue.len() > 1 { queue.pop_front() } else { queue.front().cloned() };
        response.ok_or_else(|| TransportFailure("no reply scripted".to_string()))
    }
}

/// Session store already holding a signed-in user
pub fn signed_in_store(token: &str, email: &str) -> (SessionStore, Rc<MemoryCredentials>) {
    let credentials = Rc::new(MemoryCredentials::default());
    credentials.set(TOKEN_KEY, token);
    credentials.set(EMAIL_KEY, email);
    (SessionStore::restored(credentials.clone()), credentials)
}
