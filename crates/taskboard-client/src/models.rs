//! Client Models
//!
//! Data structures matching the task service payloads (camelCase on the wire).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type ProjectId = i64;
pub type TaskId = i64;

/// The authenticated identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub email: String,
}

/// Project as reported by the server; progress is always server-computed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "progress")]
    pub progress_percentage: u8,
    #[serde(default)]
    pub completed_tasks: u32,
    #[serde(default)]
    pub total_tasks: u32,
}

impl Project {
    pub fn progress_tier(&self) -> ProgressTier {
        ProgressTier::for_percentage(self.progress_percentage)
    }

    /// Description, or a placeholder when none was given
    pub fn description_or_placeholder(&self) -> &str {
        match self.description.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => text,
            _ => "No description",
        }
    }
}

/// Bucket used to colour a progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTier {
    Complete,
    OnTrack,
    Behind,
}

impl ProgressTier {
    pub fn for_percentage(percentage: u8) -> Self {
        match percentage {
            100..=u8::MAX => ProgressTier::Complete,
            50..=99 => ProgressTier::OnTrack,
            _ => ProgressTier::Behind,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ProgressTier::Complete => "progress-fill complete",
            ProgressTier::OnTrack => "progress-fill on-track",
            ProgressTier::Behind => "progress-fill behind",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskStatus {
    #[default]
    Todo,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 2] = [TaskStatus::Todo, TaskStatus::Done];

    /// Wire value, also used as the query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "TODO",
            TaskStatus::Done => "DONE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::Done => "Done",
        }
    }

    /// Parse a select value; blank means "any status"
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "TODO" => Some(TaskStatus::Todo),
            "DONE" => Some(TaskStatus::Done),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    /// Absent in list payloads; filled in from the request by the task client
    #[serde(default)]
    pub project_id: Option<ProjectId>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: TaskStatus,
}

impl Task {
    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Past its due date and still open
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_done() && self.due_date.is_some_and(|due| due < today)
    }

    /// e.g. "Jan 5, 2026"
    pub fn due_label(&self) -> String {
        match self.due_date {
            Some(due) => due.format("%b %-d, %Y").to_string(),
            None => "No due date".to_string(),
        }
    }
}

/// Body for creating or updating a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: Option<String>,
}

impl NewProject {
    /// Build from raw form input: title required, blank description sent as null
    pub fn from_form(title: &str, description: &str) -> Result<Self, String> {
        let title = title.trim();
        if title.is_empty() {
            return Err("Project title is required".to_string());
        }
        Ok(Self {
            title: title.to_string(),
            description: blank_to_none(description),
        })
    }

    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
        }
    }
}

/// Body for creating or updating a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
}

impl TaskDraft {
    /// Build from raw form input; `due_date` is the `YYYY-MM-DD` value of a date input
    pub fn from_form(title: &str, description: &str, due_date: &str) -> Result<Self, String> {
        let title = title.trim();
        if title.is_empty() {
            return Err("Task title is required".to_string());
        }
        let due_date = match due_date.trim() {
            "" => None,
            raw => Some(
                NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| format!("Invalid due date: {}", raw))?,
            ),
        };
        Ok(Self {
            title: title.to_string(),
            description: blank_to_none(description),
            due_date,
        })
    }

    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

fn blank_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
