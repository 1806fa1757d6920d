use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(into, default = "Loading...".to_string())] label: String) -> impl IntoView {
    view! {
        <div class="spinner" role="status">
            <span class="spinner-ring"></span>
            <span class="spinner-label">{label}</span>
        </div>
    }
}
