//! Paging and Filtering
//!
//! The task endpoint answers either with a paged envelope or with a bare
//! array. Both are normalized into [`Page`] here so views never branch on
//! the response shape.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PAGE_SIZE;
use crate::models::{ProjectId, TaskStatus};

/// Canonical page of items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: u32,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self { items: Vec::new(), total_pages: 0, total_elements: 0 }
    }

    /// A complete, unpaged collection is one page holding everything
    pub fn single(items: Vec<T>) -> Self {
        let total_pages = if items.is_empty() { 0 } else { 1 };
        let total_elements = items.len() as u64;
        Self { items, total_pages, total_elements }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pagination controls only make sense with more than one page
    pub fn shows_pagination(&self) -> bool {
        self.total_pages > 1
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// The shapes the task list endpoint is known to answer with
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PagePayload<T> {
    Bare(Vec<T>),
    Paged {
        content: Option<Vec<T>>,
        #[serde(rename = "totalPages")]
        total_pages: Option<u32>,
        #[serde(rename = "totalElements")]
        total_elements: Option<u64>,
    },
    Empty,
}

impl<T> From<PagePayload<T>> for Page<T> {
    fn from(payload: PagePayload<T>) -> Self {
        match payload {
            PagePayload::Bare(items) => Page::single(items),
            PagePayload::Paged { content, total_pages, total_elements } => {
                let items = content.unwrap_or_default();
                let total_elements = total_elements.unwrap_or(items.len() as u64);
                Page {
                    items,
                    total_pages: total_pages.unwrap_or(0),
                    total_elements,
                }
            }
            PagePayload::Empty => Page::empty(),
        }
    }
}

/// Filter and pagination state of a task list.
///
/// Any filter change puts the cursor back on the first page.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskQuery {
    status: Option<TaskStatus>,
    title: String,
    page: u32,
    size: u32,
}

impl TaskQuery {
    pub fn new(size: u32) -> Self {
        Self {
            status: None,
            title: String::new(),
            page: 0,
            size: size.max(1),
        }
    }

    pub fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn has_filters(&self) -> bool {
        self.status.is_some() || !self.title.trim().is_empty()
    }

    pub fn set_status(&mut self, status: Option<TaskStatus>) {
        self.status = status;
        self.page = 0;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.page = 0;
    }

    pub fn set_size(&mut self, size: u32) {
        self.size = size.max(1);
        self.page = 0;
    }

    pub fn clear_filters(&mut self) {
        self.status = None;
        self.title.clear();
        self.page = 0;
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Advance unless already on the last of `total_pages`
    pub fn next_page(&mut self, total_pages: u32) {
        if self.page + 1 < total_pages {
            self.page += 1;
        }
    }

    pub fn is_first_page(&self) -> bool {
        self.page == 0
    }

    pub fn is_last_page(&self, total_pages: u32) -> bool {
        self.page + 1 >= total_pages
    }

    /// "Page 2 of 5"
    pub fn position_label(&self, total_pages: u32) -> String {
        format!("Page {} of {}", self.page + 1, total_pages)
    }

    /// Query parameters for `GET /tasks`; blank filters are left out
    pub fn to_params(&self, project_id: ProjectId) -> Vec<(String, String)> {
        let mut params = vec![("projectId".to_string(), project_id.to_string())];
        if let Some(status) = self.status {
            params.push(("status".to_string(), status.as_str().to_string()));
        }
        let title = self.title.trim();
        if !title.is_empty() {
            params.push(("title".to_string(), title.to_string()));
        }
        params.push(("page".to_string(), self.page.to_string()));
        params.push(("size".to_string(), self.size.to_string()));
        params
    }
}

impl Default for TaskQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
