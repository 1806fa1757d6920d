//! Project Form Component
//!
//! Create form on the dashboard, reused inline for editing a project card.

use leptos::prelude::*;
use taskboard_client::NewProject;

#[component]
pub fn ProjectForm(
    #[prop(optional)] initial: Option<NewProject>,
    #[prop(into)] submit_label: String,
    #[prop(into)] on_submit: Callback<NewProject>,
    #[prop(optional, into)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let editing = initial.is_some();
    let initial = initial.unwrap_or(NewProject { title: String::new(), description: None });
    let (title, set_title) = signal(initial.title);
    let (description, set_description) = signal(initial.description.unwrap_or_default());
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match NewProject::from_form(&title.get_untracked(), &description.get_untracked()) {
            Ok(project) => {
                set_error.set(None);
                on_submit.run(project);
                if !editing {
                    set_title.set(String::new());
                    set_description.set(String::new());
                }
            }
            Err(msg) => set_error.set(Some(msg)),
        }
    };

    view! {
        <form class="project-form" on:submit=submit>
            <input
                type="text"
                placeholder="Project title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
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
