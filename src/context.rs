//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use taskboard_client::{ClientConfig, Notification, NotificationQueue, ReqwestBackend, Session, Severity, Transport};

pub type ApiTransport = Transport<ReqwestBackend>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Request pipeline (not Send, so kept in local storage)
    transport: StoredValue<ApiTransport, LocalStorage>,
    config: StoredValue<ClientConfig>,
    /// Mirror of the session store - read
    pub session: ReadSignal<Option<Session>>,
    notifications: RwSignal<NotificationQueue>,
}

impl AppContext {
    pub fn new(transport: ApiTransport, config: ClientConfig) -> Self {
        let (session, set_session) = signal(transport.session().current());
        transport.session().subscribe(move |current| set_session.set(current));

        Self {
            transport: StoredValue::new_local(transport),
            config: StoredValue::new(config),
            session,
            notifications: RwSignal::new(NotificationQueue::new()),
        }
    }

    pub fn transport(&self) -> ApiTransport {
        self.transport.get_value()
    }

    pub fn page_size(&self) -> u32 {
        self.config.with_value(|c| c.page_size)
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.with(Option::is_some)
    }

    pub fn user_email(&self) -> String {
        self.session.with(|s| s.as_ref().map(|s| s.email.clone()).unwrap_or_default())
    }

    // ========================
    // Notifications
    // ========================

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.with(|q| q.items().to_vec())
    }

    /// Show a transient message; it dismisses itself after the configured lifetime
    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let now = js_sys::Date::now() as u64;
        let mut id = 0;
        self.notifications.update(|q| id = q.push(message, severity, now));

        let notifications = self.notifications;
        let ttl = self.config.with_value(|c| c.notification_ttl_ms);
        Timeout::new(ttl, move || {
            // The signal is gone if the app was torn down meanwhile
            notifications.try_update(|q| q.dismiss(id));
        })
        .forget();
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.notify(message, Severity::Success);
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        self.notify(message, Severity::Error);
    }

    pub fn dismiss(&self, id: u64) {
        self.notifications.update(|q| {
            q.dismiss(id);
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
