//! View Controllers
//!
//! Page orchestration without rendering: which requests a page issues, in
//! what order, and what the user sees when one fails. The UI pages own the
//! reactive state and call into these.

mod dashboard;
mod login;
mod project_detail;
mod seq;

pub use dashboard::{remove_project, DashboardController, LOAD_FAILED};
pub use login::{login_failure_message, LoginController, WELCOME_MESSAGE};
pub use project_detail::{resolved_project_id, ProjectDetailController, TaskSync, PROJECT_NOT_FOUND};
pub use seq::{RequestSeq, Ticket};

use crate::error::{ApiError, ApiResult};
use crate::models::{TaskDraft, TaskId};

/// What a page region is currently showing. Empty data is `Ready` with no items.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    pub fn from_result(result: ApiResult<T>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => LoadState::Failed(e.user_message()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// A task change requested from the project page
#[derive(Debug, Clone, PartialEq)]
pub enum TaskMutation {
    Create(TaskDraft),
    Update(TaskId, TaskDraft),
    Complete(TaskId),
    Delete(TaskId),
}

impl TaskMutation {
    pub fn failure_message(&self) -> &'static str {
        match self {
            TaskMutation::Create(_) => "Failed to create task. Please try again.",
            TaskMutation::Update(..) => "Failed to update task. Please try again.",
            TaskMutation::Complete(_) => "Failed to complete task. Please try again.",
            TaskMutation::Delete(_) => "Failed to delete task. Please try again.",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            TaskMutation::Create(_) => "Task created",
            TaskMutation::Update(..) => "Task updated",
            TaskMutation::Complete(_) => "Task completed",
            TaskMutation::Delete(_) => "Task deleted",
        }
    }
}

/// Message for a failed mutation: what the server said when it said
/// anything specific, otherwise `fallback`
pub fn mutation_error_message(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Server { .. } | ApiError::Network(_) | ApiError::Unauthorized => err.user_message(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_state_from_result() {
        let ready: LoadState<u8> = LoadState::from_result(Ok(3));
        assert_eq!(ready.ready(), Some(&3));

        let failed: LoadState<u8> = LoadState::from_result(Err(ApiError::NotFound("Project not found".into())));
        assert_eq!(failed.error(), Some("Project not found"));
        assert!(LoadState::<u8>::default().is_loading());
    }

    #[test]
    fn test_mutation_messages() {
        let complete = TaskMutation::Complete(4);
        let decode = ApiError::Decode("bad json".into());
        assert_eq!(
            mutation_error_message(&decode, complete.failure_message()),
            "Failed to complete task. Please try again."
        );

        let server = ApiError::Server { status: 400, message: "Title too long".into() };
        assert_eq!(mutation_error_message(&server, complete.failure_message()), "Title too long");
    }
}
