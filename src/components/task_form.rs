//! Task Form Component
//!
//! Title, description and due date; used for new tasks and inline edits.

use leptos::prelude::*;
use taskboard_client::TaskDraft;

#[component]
pub fn TaskForm(
    #[prop(optional)] initial: Option<TaskDraft>,
    #[prop(into)] submit_label: String,
    #[prop(into)] on_submit: Callback<TaskDraft>,
    #[prop(optional, into)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let editing = initial.is_some();
    let (title, set_title) = signal(initial.as_ref().map(|d| d.title.clone()).unwrap_or_default());
    let (description, set_description) =
        signal(initial.as_ref().and_then(|d| d.description.clone()).unwrap_or_default());
    // <input type="date"> speaks YYYY-MM-DD
    let (due_date, set_due_date) = signal(
        initial
            .as_ref()
            .and_then(|d| d.due_date)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
    );
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = TaskDraft::from_form(
            &title.get_untracked(),
            &description.get_untracked(),
            &due_date.get_untracked(),
        );
        match draft {
            Ok(draft) => {
                set_error.set(None);
                on_submit.run(draft);
                if !editing {
                    set_title.set(String::new());
                    set_description.set(String::new());
                    set_due_date.set(String::new());
                }
            }
            Err(msg) => set_error.set(Some(msg)),
        }
    };

    view! {
        <form class="task-form" on:submit=submit>
            <input
                type="text"
                placeholder="Task title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            <input
                type="date"
                prop:value=move || due_date.get()
                on:input=move |ev| set_due_date.set(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <div class="form-actions">
                <button type="submit">{submit_label.clone()}</button>
                {on_cancel.map(|cancel| view! {
                    <button type="button" class="cancel-btn" on:click=move |_| cancel.run(())>
                        "Cancel"
                    </button>
                })}
            </div>
        </form>
    }
}
