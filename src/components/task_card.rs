//! Task Card Component
//!
//! One task in the project view. Every action is handed up as a
//! [`TaskMutation`] so the page can refetch afterwards.

use leptos::prelude::*;
use taskboard_client::controller::TaskMutation;
use taskboard_client::{Task, TaskDraft};

use crate::components::{DeleteConfirmButton, TaskForm};

#[component]
pub fn TaskCard(task: Task, #[prop(into)] on_mutate: Callback<TaskMutation>) -> impl IntoView {
    let (editing, set_editing) = signal(false);
    let id = task.id;
    let initial = TaskDraft::from_task(&task);
    let today = chrono::Local::now().date_naive();
    let overdue = task.is_overdue(today);
    let done = task.is_done();

    let card_class = match (done, overdue) {
        (true, _) => "task-card done",
        (false, true) => "task-card overdue",
        _ => "task-card",
    };

    view! {
        <div class=card_class>
            <Show
                when=move || editing.get()
                fallback={
                    let task = task.clone();
                    move || view! {
                        <div class="task-header">
                            <h4 class="task-title">{task.title.clone()}</h4>
                            <span class=if done { "status-badge done" } else { "status-badge todo" }>
                                {task.status.label()}
                            </span>
                        </div>
                        {task.description.clone().map(|d| view! { <p class="task-description">{d}</p> })}
                        <p class=if overdue { "task-due overdue" } else { "task-due" }>
                            {task.due_label()}
                            {overdue.then_some(" (overdue)")}
                        </p>
                        <div class="card-actions">
                            {(!done).then(|| view! {
                                <button
                                    class="complete-btn"
                                    on:click=move |_| on_mutate.run(TaskMutation::Complete(id))
                                >
                                    "Complete"
                                </button>
                            })}
                            <button class="edit-btn" on:click=move |_| set_editing.set(true)>"Edit"</button>
                            <DeleteConfirmButton
                                button_class="delete-btn"
                                prompt="Delete this task?"
                                on_confirm=move |_: ()| on_mutate.run(TaskMutation::Delete(id))
                            />
                        </div>
                    }
                }
            >
                <TaskForm
                    initial=initial.clone()
                    submit_label="Save"
                    on_submit=move |draft: TaskDraft| {
                        set_editing.set(false);
                        on_mutate.run(TaskMutation::Update(id, draft));
                    }
                    on_cancel=move |_: ()| set_editing.set(false)
                />
            </Show>
        </div>
    }
}
