use crate::error::ApiResult;
use crate::models::{NewProject, Project, ProjectId};
use crate::resources::ProjectClient;
use crate::transport::{HttpBackend, Transport};

pub const LOAD_FAILED: &str = "Failed to load projects. Please try again.";

/// Project list orchestration. Creates and updates refetch the whole list;
/// deletes are applied locally with [`remove_project`].
pub struct DashboardController<B> {
    transport: Transport<B>,
}

impl<B: HttpBackend> DashboardController<B> {
    pub fn new(transport: Transport<B>) -> Self {
        Self { transport }
    }

    fn projects(&self) -> ProjectClient<'_, B> {
        ProjectClient::new(&self.transport)
    }

    pub async fn load(&self) -> ApiResult<Vec<Project>> {
        let projects = self.projects().list().await?;
        log::debug!("[Dashboard] Loaded {} projects", projects.len());
        Ok(projects)
    }

    pub async fn create(&self, project: &NewProject) -> ApiResult<Vec<Project>> {
        match self.projects().create(project).await? {
            Some(created) => log::info!("[Dashboard] Created project {}", created.id),
            None => log::info!("[Dashboard] Created project {:?}", project.title),
        }
        self.load().await
    }

    pub async fn update(&self, id: ProjectId, project: &NewProject) -> ApiResult<Vec<Project>> {
        self.projects().update(id, project).await?;
        log::info!("[Dashboard] Updated project {}", id);
        self.load().await
    }

    /// Server-side delete only; the caller drops the row from its list
    pub async fn delete(&self, id: ProjectId) -> ApiResult<()> {
        self.projects().delete(id).await?;
        log::info!("[Dashboard] Deleted project {}", id);
        Ok(())
    }

    pub fn logout(&self) {
        self.transport.session().logout();
    }
}

/// Drop a project from a fetched list without touching the others
pub fn remove_project(projects: &mut Vec<Project>, id: ProjectId) {
    projects.retain(|p| p.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{signed_in_store, ScriptedBackend};
    use crate::transport::Method;

    const TWO_PROJECTS: &str = r#"[
        {"id":1,"title":"Launch","progressPercentage":40,"completedTasks":2,"totalTasks":5},
        {"id":2,"title":"Docs","progressPercentage":100,"completedTasks":3,"totalTasks":3}
    ]"#;

    fn controller(backend: ScriptedBackend) -> DashboardController<ScriptedBackend> {
        let (store, _) = signed_in_store("abc", "a@b.com");
        DashboardController::new(Transport::new(backend, store))
    }

    #[tokio::test]
    async fn test_local_delete_leaves_others_untouched() {
        let dashboard = controller(
            ScriptedBackend::new()
                .on(Method::Get, "/projects", 200, TWO_PROJECTS)
                .on(Method::Delete, "/projects/1", 204, ""),
        );
        let mut projects = dashboard.load().await.unwrap();
        let docs_before = projects[1].clone();

        dashboard.delete(1).await.unwrap();
        remove_project(&mut projects, 1);

        assert_eq!(projects, vec![docs_before]);
        assert_eq!(dashboard.transport.backend().count(Method::Get, "/projects"), 1);
    }

    #[tokio::test]
    async fn test_create_refetches_list() {
        let dashboard = controller(
            ScriptedBackend::new()
                .on(Method::Post, "/projects", 201, r#"{"id":3,"title":"New"}"#)
                .on(Method::Get, "/projects", 200, TWO_PROJECTS),
        );

        let projects = dashboard.create(&NewProject::from_form("New", "").unwrap()).await.unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(dashboard.transport.backend().count(Method::Get, "/projects"), 1);
    }

    #[tokio::test]
    async fn test_create_with_empty_reply_still_refetches() {
        let dashboard = controller(
            ScriptedBackend::new()
                .on(Method::Post, "/projects", 201, "")
                .on(Method::Get, "/projects", 200, TWO_PROJECTS),
        );

        let projects = dashboard.create(&NewProject::from_form("New", "").unwrap()).await.unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(dashboard.transport.backend().count(Method::Get, "/projects"), 1);
    }

    #[tokio::test]
    async fn test_failed_update_skips_refetch() {
        let dashboard = controller(
            ScriptedBackend::new().on(Method::Put, "/projects/2", 400, r#"{"title":"Project title is required"}"#),
        );

        let err = dashboard.update(2, &NewProject { title: String::new(), description: None }).await.unwrap_err();

        assert_eq!(err.user_message(), "Project title is required");
        assert_eq!(dashboard.transport.backend().count(Method::Get, "/projects"), 0);
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let dashboard = controller(ScriptedBackend::new());
        dashboard.logout();
        assert!(!dashboard.transport.session().is_active());
        assert!(dashboard.transport.backend().requests().is_empty());
    }
}
