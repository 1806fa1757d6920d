//! Task Filters Component
//!
//! Status select and title search. Every change lands on page 0 (the
//! query resets its cursor), which in turn refetches the list.

use leptos::prelude::*;
use taskboard_client::{TaskQuery, TaskStatus};

#[component]
pub fn TaskFilters(query: RwSignal<TaskQuery>) -> impl IntoView {
    let status_value = move || query.with(|q| q.status().map(|s| s.as_str()).unwrap_or_default().to_string());
    let title_value = move || query.with(|q| q.title().to_string());

    view! {
        <div class="task-filters">
            <select
                prop:value=status_value
                on:change=move |ev| {
                    let status = TaskStatus::parse(&event_target_value(&ev));
                    query.update(|q| q.set_status(status));
                }
            >
                <option value="">"All Statuses"</option>
                {TaskStatus::ALL
                    .iter()
                    .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                    .collect_view()}
            </select>
            <input
                type="search"
                placeholder="Search by title..."
                prop:value=title_value
                on:input=move |ev| {
                    let title = event_target_value(&ev);
                    query.update(|q| q.set_title(title));
                }
            />
            <Show when=move || query.with(TaskQuery::has_filters)>
                <button class="clear-filters-btn" on:click=move |_| query.update(TaskQuery::clear_filters)>
                    "Clear Filters"
                </button>
            </Show>
        </div>
    }
}
