//! Pages
//!
//! One component per route. Each owns its reactive state and delegates
//! request sequencing to the matching controller in `taskboard-client`.

mod dashboard;
mod login;
mod project_detail;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use project_detail::ProjectDetailPage;
