//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod notification_stack;
mod pagination;
mod progress_bar;
mod project_card;
mod project_form;
mod spinner;
mod task_card;
mod task_filters;
mod task_form;

pub use delete_confirm_button::DeleteConfirmButton;
pub use notification_stack::NotificationStack;
pub use pagination::Pagination;
pub use progress_bar::ProgressBar;
pub use project_card::ProjectCard;
pub use project_form::ProjectForm;
pub use spinner::Spinner;
pub use task_card::TaskCard;
pub use task_filters::TaskFilters;
pub use task_form::TaskForm;
