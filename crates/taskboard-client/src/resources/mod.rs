//! Resource Clients
//!
//! One thin client per backend resource. Each borrows the shared
//! [`Transport`](crate::transport::Transport) and only knows paths and
//! payload shapes.

mod auth;
mod projects;
mod tasks;

pub use auth::AuthClient;
pub use projects::ProjectClient;
pub use tasks::TaskClient;
