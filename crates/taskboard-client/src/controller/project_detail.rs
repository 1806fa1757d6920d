use crate::controller::seq::RequestSeq;
use crate::controller::{LoadState, TaskMutation};
use crate::error::{ApiError, ApiResult};
use crate::models::{Project, ProjectId, Task};
use crate::paging::{Page, TaskQuery};
use crate::resources::{ProjectClient, TaskClient};
use crate::transport::{HttpBackend, Transport};

pub const PROJECT_NOT_FOUND: &str = "Project not found";

/// Fresh state after a task mutation. Either side is `None` when a newer
/// fetch of the same kind superseded it.
#[derive(Debug)]
pub struct TaskSync {
    pub tasks: Option<ApiResult<Page<Task>>>,
    pub project: Option<ApiResult<Project>>,
}

/// Tasks are only listed for a project the server confirmed exists
pub fn resolved_project_id(project: &LoadState<Project>) -> Option<ProjectId> {
    project.ready().map(|p| p.id)
}

pub struct ProjectDetailController<B> {
    transport: Transport<B>,
    project_id: Option<ProjectId>,
    task_seq: RequestSeq,
    project_seq: RequestSeq,
}

impl<B: HttpBackend> ProjectDetailController<B> {
    /// `route_id` is the raw `:id` segment; anything unparsable is treated as not found
    pub fn new(transport: Transport<B>, route_id: &str) -> Self {
        Self {
            transport,
            project_id: route_id.trim().parse().ok(),
            task_seq: RequestSeq::new(),
            project_seq: RequestSeq::new(),
        }
    }

    /// Share the task and project sequences with other controllers for the same page
    pub fn with_seqs(mut self, task_seq: RequestSeq, project_seq: RequestSeq) -> Self {
        self.task_seq = task_seq;
        self.project_seq = project_seq;
        self
    }

    /// The project, resolved from the full list by id. Returns `None` if
    /// another project fetch started while this one was in flight.
    pub async fn load_project(&self) -> Option<ApiResult<Project>> {
        let ticket = self.project_seq.next();
        let result = match self.project_id {
            Some(id) => self.find_project(id).await,
            None => Err(not_found()),
        };
        if !ticket.is_current() {
            log::debug!("[ProjectDetail] Dropping superseded project response #{}", ticket.id());
            return None;
        }
        Some(result)
    }

    async fn find_project(&self, id: ProjectId) -> ApiResult<Project> {
        let projects = ProjectClient::new(&self.transport).list().await?;
        projects.into_iter().find(|p| p.id == id).ok_or_else(|| {
            log::warn!("[ProjectDetail] Project {} not in list", id);
            not_found()
        })
    }

    /// Fetch one page of tasks of a resolved project. Returns `None` if
    /// another fetch started while this one was in flight.
    pub async fn load_tasks(&self, project_id: ProjectId, query: &TaskQuery) -> Option<ApiResult<Page<Task>>> {
        let ticket = self.task_seq.next();
        let result = TaskClient::new(&self.transport).list(project_id, query).await;
        if !ticket.is_current() {
            log::debug!("[ProjectDetail] Dropping superseded task response #{}", ticket.id());
            return None;
        }
        Some(result)
    }

    /// Run a task mutation, then refetch tasks and project in that order
    pub async fn apply(&self, mutation: TaskMutation, query: &TaskQuery) -> ApiResult<TaskSync> {
        let id = self.project_id.ok_or_else(not_found)?;
        let tasks = TaskClient::new(&self.transport);
        match &mutation {
            TaskMutation::Create(draft) => tasks.create(id, draft).await.map(|_| ())?,
            TaskMutation::Update(task_id, draft) => tasks.update(*task_id, draft).await.map(|_| ())?,
            TaskMutation::Complete(task_id) => tasks.complete(*task_id).await?,
            TaskMutation::Delete(task_id) => tasks.delete(*task_id).await?,
        }
        log::info!("[ProjectDetail] {:?} applied to project {}", mutation, id);

        let tasks = self.load_tasks(id, query).await;
        let project = self.load_project().await;
        Ok(TaskSync { tasks, project })
    }
}

fn not_found() -> ApiError {
    ApiError::NotFound(PROJECT_NOT_FOUND.to_string())
}
