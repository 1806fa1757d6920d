//! Notification Stack Component
//!
//! Renders the transient notifications in a corner of the screen.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn NotificationStack() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="notification-stack">
            <For
                each=move || ctx.notifications()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=n.severity.css_class() role="status">
                            <span class="notification-message">{n.message}</span>
                            <button class="notification-close" on:click=move |_| ctx.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
