//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use taskboard_client::controller::{remove_project, LoadState, LOAD_FAILED};
use taskboard_client::{ApiResult, Project, ProjectId};

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Projects of the signed-in user
    pub projects: LoadState<Vec<Project>>,
    /// Inline banner shown above the list after a failed load
    pub banner: Option<String>,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the project list with a fetch result. A failed fetch keeps
/// whatever was shown before and raises the banner.
pub fn store_set_projects(store: &BoardStore, result: ApiResult<Vec<Project>>) {
    match result {
        Ok(projects) => {
            store.projects().set(LoadState::Ready(projects));
            store.banner().set(None);
        }
        Err(e) => {
            log::warn!("[Store] Project load failed: {}", e);
            if store.projects().with_untracked(LoadState::is_loading) {
                store.projects().set(LoadState::Ready(Vec::new()));
            }
            store.banner().set(Some(LOAD_FAILED.to_string()));
        }
    }
}

/// Forget everything loaded for the previous session
pub fn store_reset(store: &BoardStore) {
    store.projects().set(LoadState::Loading);
    store.banner().set(None);
}

/// Remove a project from the store by ID
pub fn store_remove_project(store: &BoardStore, project_id: ProjectId) {
    if let LoadState::Ready(projects) = &mut *store.projects().write() {
        remove_project(projects, project_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_client::ApiError;

    fn project(id: ProjectId) -> Project {
        Project {
            id,
            title: format!("Project {}", id),
            description: None,
            progress_percentage: 0,
            completed_tasks: 0,
            total_tasks: 0,
        }
    }

    #[test]
    fn test_reset_drops_previous_projects_and_banner() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(BoardState::default());
            store_set_projects(&store, Ok(vec![project(1), project(2)]));
            store_set_projects(&store, Err(ApiError::Network("offline".into())));
            assert!(store.banner().get_untracked().is_some());

            store_reset(&store);

            assert!(store.projects().get_untracked().is_loading());
            assert_eq!(store.banner().get_untracked(), None);
        });
    }

    #[test]
    fn test_remove_keeps_other_projects() {
        let owner = Owner::new();
        owner.with(|| {
            let store = Store::new(BoardState::default());
            store_set_projects(&store, Ok(vec![project(1), project(2)]));

            store_remove_project(&store, 1);

            assert_eq!(store.projects().get_untracked().ready(), Some(&vec![project(2)]));
        });
    }
}
