//! Task Board Client
//!
//! Everything the browser UI needs to talk to the task service, kept free of
//! any rendering concerns:
//! - transport: the single chokepoint for outgoing requests (bearer token, 401 recovery)
//! - session: the authenticated identity and its persisted credentials
//! - resources: typed request builders for auth, projects and tasks
//! - controller: per-page orchestration (fetch, mutate, refetch)
//! - notify: the transient notification queue

pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod models;
pub mod notify;
pub mod paging;
pub mod resources;
pub mod session;
pub mod transport;

#[cfg(test)]
mod testing;

pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use http::ReqwestBackend;
pub use models::{NewProject, Project, ProjectId, Session, Task, TaskDraft, TaskId, TaskStatus};
pub use notify::{Notification, NotificationQueue, Severity};
pub use paging::{Page, PagePayload, TaskQuery};
pub use session::{CredentialStore, MemoryCredentials, SessionStore};
pub use transport::{HttpBackend, HttpRequest, HttpResponse, Method, Transport, TransportFailure};
