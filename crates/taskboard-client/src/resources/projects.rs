use crate::error::ApiResult;
use crate::models::{NewProject, Project, ProjectId};
use crate::transport::{HttpBackend, HttpRequest, Transport};

pub struct ProjectClient<'a, B> {
    transport: &'a Transport<B>,
}

impl<'a, B: HttpBackend> ProjectClient<'a, B> {
    pub fn new(transport: &'a Transport<B>) -> Self {
        Self { transport }
    }

    /// `GET /projects`; projects of the signed-in user
    pub async fn list(&self) -> ApiResult<Vec<Project>> {
        let projects: Option<Vec<Project>> = self.transport.send_json(HttpRequest::get("/projects")).await?;
        Ok(projects.unwrap_or_default())
    }

    /// `None` when the server acknowledged without echoing the project
    pub async fn create(&self, project: &NewProject) -> ApiResult<Option<Project>> {
        let request = HttpRequest::post("/projects").with_json(project)?;
        self.transport.send_json(request).await
    }

    pub async fn update(&self, id: ProjectId, project: &NewProject) -> ApiResult<Option<Project>> {
        let request = HttpRequest::put(format!("/projects/{}", id)).with_json(project)?;
        self.transport.send_json(request).await
    }

    pub async fn delete(&self, id: ProjectId) -> ApiResult<()> {
        self.transport.send_empty(HttpRequest::delete(format!("/projects/{}", id))).await
    }
}
