use leptos::prelude::*;
use taskboard_client::TaskQuery;

/// Previous/Next controls; hidden when everything fits on one page
#[component]
pub fn Pagination(query: RwSignal<TaskQuery>, #[prop(into)] total_pages: Signal<u32>) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pagination">
                <button
                    disabled=move || query.with(TaskQuery::is_first_page)
                    on:click=move |_| query.update(TaskQuery::previous_page)
                >
                    "Previous"
                </button>
                <span class="page-position">
                    {move || query.with(|q| q.position_label(total_pages.get()))}
                </span>
                <button
                    disabled=move || query.with(|q| q.is_last_page(total_pages.get()))
                    on:click=move |_| {
                        let total = total_pages.get_untracked();
                        query.update(|q| q.next_page(total));
                    }
                >
                    "Next"
                </button>
            </div>
        </Show>
    }
}
