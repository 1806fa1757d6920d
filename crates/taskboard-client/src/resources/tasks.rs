use crate::error::ApiResult;
use crate::models::{ProjectId, Task, TaskDraft, TaskId};
use crate::paging::{Page, PagePayload, TaskQuery};
use crate::transport::{HttpBackend, HttpRequest, Transport};

pub struct TaskClient<'a, B> {
    transport: &'a Transport<B>,
}

impl<'a, B: HttpBackend> TaskClient<'a, B> {
    pub fn new(transport: &'a Transport<B>) -> Self {
        Self { transport }
    }

    /// `GET /tasks?projectId=..`; whatever shape comes back is normalized to a [`Page`]
    pub async fn list(&self, project_id: ProjectId, query: &TaskQuery) -> ApiResult<Page<Task>> {
        let request = HttpRequest::get("/tasks").with_params(query.to_params(project_id));
        let payload: Option<PagePayload<Task>> = self.transport.send_json(request).await?;
        let mut page: Page<Task> = payload.map(Page::from).unwrap_or_default();
        for task in &mut page.items {
            task.project_id.get_or_insert(project_id);
        }
        Ok(page)
    }

    /// `None` when the server acknowledged without echoing the task
    pub async fn create(&self, project_id: ProjectId, draft: &TaskDraft) -> ApiResult<Option<Task>> {
        let request = HttpRequest::post("/tasks")
            .with_query("projectId", project_id.to_string())
            .with_json(draft)?;
        self.transport.send_json(request).await
    }

    pub async fn update(&self, id: TaskId, draft: &TaskDraft) -> ApiResult<Option<Task>> {
        let request = HttpRequest::put(format!("/tasks/{}", id)).with_json(draft)?;
        self.transport.send_json(request).await
    }

    /// `PATCH /tasks/{id}/complete`
    pub async fn complete(&self, id: TaskId) -> ApiResult<()> {
        self.transport.send_empty(HttpRequest::patch(format!("/tasks/{}/complete", id))).await
    }

    pub async fn delete(&self, id: TaskId) -> ApiResult<()> {
        self.transport.send_empty(HttpRequest::delete(format!("/tasks/{}", id))).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;
    use crate::testing::{signed_in_store, ScriptedBackend};
    use crate::transport::Method;

    #[tokio::test]
    async fn test_list_sends_filters_and_fills_project() {
        let (store, _) = signed_in_store("abc", "a@b.com");
        let transport = Transport::new(
            ScriptedBackend::new().on(
                Method::Get,
                "/tasks",
                200,
                r#"{"content":[{"id":1,"title":"A","status":"TODO"}],"totalPages":2,"totalElements":11}"#,
            ),
            store,
        );
        let mut query = TaskQuery::new(10);
        query.set_status(Some(TaskStatus::Todo));

        let page = TaskClient::new(&transport).list(7, &query).await.unwrap();

        assert_eq!(page.items[0].project_id, Some(7));
        assert_eq!(page.total_pages, 2);
        let (request, _) = &transport.backend().requests()[0];
        assert_eq!(request.param("projectId"), Some("7"));
        assert_eq!(request.param("status"), Some("TODO"));
        assert_eq!(request.param("title"), None);
    }

    #[tokio::test]
    async fn test_list_accepts_bare_array() {
        let (store, _) = signed_in_store("abc", "a@b.com");
        let transport = Transport::new(
            ScriptedBackend::new().on(Method::Get, "/tasks", 200, r#"[{"id":1,"title":"A"},{"id":2,"title":"B"}]"#),
            store,
        );

        let page = TaskClient::new(&transport).list(7, &TaskQuery::default()).await.unwrap();

        assert_eq!(page.items.len(), 2);
        assert!(!page.shows_pagination());
    }

    #[tokio::test]
    async fn test_create_targets_project() {
        let (store, _) = signed_in_store("abc", "a@b.com");
        let transport = Transport::new(
            ScriptedBackend::new().on(Method::Post, "/tasks", 201, r#"{"id":3,"title":"New"}"#),
            store,
        );
        let draft = TaskDraft::from_form("New", "", "").unwrap();

        let created = TaskClient::new(&transport).create(7, &draft).await.unwrap();

        assert_eq!(created.map(|t| t.id), Some(3));
        let (request, _) = &transport.backend().requests()[0];
        assert_eq!(request.param("projectId"), Some("7"));
        assert!(request.body.as_ref().unwrap()["dueDate"].is_null());
    }

    #[tokio::test]
    async fn test_update_without_body_succeeds() {
        let (store, _) = signed_in_store("abc", "a@b.com");
        let transport = Transport::new(ScriptedBackend::new().on(Method::Put, "/tasks/3", 200, ""), store);
        let draft = TaskDraft::from_form("Renamed", "", "").unwrap();

        assert_eq!(TaskClient::new(&transport).update(3, &draft).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_complete_and_delete_paths() {
        let (store, _) = signed_in_store("abc", "a@b.com");
        let transport = Transport::new(
            ScriptedBackend::new()
                .on(Method::Patch, "/tasks/3/complete", 200, r#"{"id":3,"title":"A","status":"DONE"}"#)
                .on(Method::Delete, "/tasks/3", 204, ""),
            store,
        );
        let client = TaskClient::new(&transport);

        client.complete(3).await.unwrap();
        client.delete(3).await.unwrap();

        assert_eq!(transport.backend().count(Method::Patch, "/tasks/3/complete"), 1);
        assert_eq!(transport.backend().count(Method::Delete, "/tasks/3"), 1);
    }
}
