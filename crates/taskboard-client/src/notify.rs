//! Notification Queue
//!
//! Transient user-facing messages. The queue itself is clock-free: callers
//! pass the current time in, and expiry is driven by a timer in the UI.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Info => "notification info",
            Severity::Success => "notification success",
            Severity::Error => "notification error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Time-derived, strictly increasing within a queue
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    last_id: u64,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification and return its id.
    ///
    /// The id is `now_ms`, bumped past the previous id when two messages
    /// arrive within the same millisecond.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity, now_ms: u64) -> u64 {
        let id = now_ms.max(self.last_id + 1);
        self.last_id = id;
        self.items.push(Notification { id, message: message.into(), severity });
        id
    }

    /// Remove by id. Returns false when it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_strictly_increase() {
        let mut queue = NotificationQueue::new();
        let a = queue.push("Saved", Severity::Success, 1_000);
        let b = queue.push("Saved again", Severity::Success, 1_000);
        let c = queue.push("Clock went back", Severity::Info, 900);
        assert!(a < b && b < c);
        assert_eq!(queue.items().len(), 3);
    }

    #[test]
    fn test_dismiss_only_removes_target() {
        let mut queue = NotificationQueue::new();
        let a = queue.push("one", Severity::Info, 10);
        let b = queue.push("two", Severity::Error, 20);

        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.items()[0].id, b);
    }
}
