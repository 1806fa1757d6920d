//! Project Detail Page
//!
//! Header with the project's progress, a task form, filters, the task list
//! and pagination. Every task change refetches both the list and the
//! project so progress always comes from the server.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use taskboard_client::controller::{
    mutation_error_message, resolved_project_id, LoadState, ProjectDetailController, RequestSeq, TaskMutation,
};
use taskboard_client::{Page, Project, ReqwestBackend, Task, TaskDraft, TaskQuery};

use crate::components::{Pagination, ProgressBar, Spinner, TaskCard, TaskFilters, TaskForm};
use crate::context::{use_app_context, ApiTransport};
use crate::routes::HOME_PATH;

/// Request sequences shared by every fetch this page starts
#[derive(Clone, Default)]
struct PageSeqs {
    tasks: RequestSeq,
    project: RequestSeq,
}

fn controller(transport: ApiTransport, route_id: &str, seqs: PageSeqs) -> ProjectDetailController<ReqwestBackend> {
    ProjectDetailController::new(transport, route_id).with_seqs(seqs.tasks, seqs.project)
}

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let ctx = use_app_context();
    let params = use_params_map();
    let route_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    let seqs = StoredValue::new_local(PageSeqs::default());
    let query = RwSignal::new(TaskQuery::new(ctx.page_size()));
    let project = RwSignal::new(LoadState::<Project>::Loading);
    let tasks = RwSignal::new(LoadState::<Page<Task>>::Loading);
    let resolved_id = Memo::new(move |_| project.with(resolved_project_id));

    // Project header, once per route id. Another id starts over on page one.
    Effect::new(move |previous: Option<String>| {
        let id = route_id.get();
        if previous.is_some() {
            seqs.with_value(|s| s.tasks.invalidate());
            query.set(TaskQuery::new(ctx.page_size()));
            tasks.set(LoadState::Loading);
        }
        project.set(LoadState::Loading);
        let route = id.clone();
        spawn_local(async move {
            let detail = controller(ctx.transport(), &route, seqs.get_value());
            if let Some(result) = detail.load_project().await {
                project.try_set(LoadState::from_result(result));
            }
        });
        id
    });

    // Task list, once the project is known and on every filter or page change
    Effect::new(move |_| {
        let current = query.get();
        let Some(project_id) = resolved_id.get() else {
            return;
        };
        let route = route_id.get_untracked();
        spawn_local(async move {
            let detail = controller(ctx.transport(), &route, seqs.get_value());
            if let Some(result) = detail.load_tasks(project_id, &current).await {
                if let Err(e) = &result {
                    ctx.notify_error(e.user_message());
                }
                tasks.try_set(LoadState::from_result(result));
            }
        });
    });

    let mutate = move |mutation: TaskMutation| {
        let id = route_id.get_untracked();
        let current = query.get_untracked();
        spawn_local(async move {
            let detail = controller(ctx.transport(), &id, seqs.get_value());
            let fallback = mutation.failure_message();
            let success = mutation.success_message();
            match detail.apply(mutation, &current).await {
                Ok(sync) => {
                    ctx.notify_success(success);
                    if let Some(result) = sync.tasks {
                        match result {
                            // The last row of a later page went away; step back
                            Ok(page) if page.is_empty() && !current.is_first_page() => {
                                query.update(TaskQuery::previous_page);
                            }
                            other => {
                                tasks.try_set(LoadState::from_result(other));
                            }
                        }
                    }
                    match sync.project {
                        Some(Ok(fresh)) => {
                            project.try_set(LoadState::Ready(fresh));
                        }
                        Some(Err(e)) => ctx.notify_error(e.user_message()),
                        None => {}
                    }
                }
                Err(e) => ctx.notify_error(mutation_error_message(&e, fallback)),
            }
        });
    };

    let total_pages = Signal::derive(move || tasks.with(|t| t.ready().map(|p| p.total_pages).unwrap_or(0)));

    view! {
        <div class="project-detail">
            <A href=HOME_PATH attr:class="back-link">"← Back to Dashboard"</A>
            {move || match project.get() {
                LoadState::Loading => view! { <Spinner label="Loading project..." /> }.into_any(),
                LoadState::Failed(msg) => view! {
                    <div class="not-found">
                        <h2>{msg}</h2>
                        <A href=HOME_PATH>"Back to Dashboard"</A>
                    </div>
                }.into_any(),
                LoadState::Ready(p) => view! {
                    <header class="page-header">
                        <h1>{p.title.clone()}</h1>
                        <p class="project-description">{p.description_or_placeholder().to_string()}</p>
                        <ProgressBar percentage=p.progress_percentage />
                        <p class="project-counts">
                            {format!("{} / {} tasks completed", p.completed_tasks, p.total_tasks)}
                        </p>
                    </header>
                }.into_any(),
            }}
            <Show when=move || project.with(|p| p.ready().is_some())>
                <section class="new-task">
                    <h2>"New Task"</h2>
                    <TaskForm
                        submit_label="Add Task"
                        on_submit=move |draft: TaskDraft| mutate(TaskMutation::Create(draft))
                    />
                </section>

                <section class="task-list">
                    <TaskFilters query=query />
                    <TaskList tasks=tasks query=query on_mutate=mutate />
                    <Pagination query=query total_pages=total_pages />
                </section>
            </Show>
        </div>
    }
}

#[component]
fn TaskList(
    tasks: RwSignal<LoadState<Page<Task>>>,
    query: RwSignal<TaskQuery>,
    #[prop(into)] on_mutate: Callback<TaskMutation>,
) -> impl IntoView {
    move || match tasks.get() {
        LoadState::Loading => view! { <Spinner label="Loading tasks..." /> }.into_any(),
        LoadState::Failed(msg) => view! { <p class="form-error">{msg}</p> }.into_any(),
        LoadState::Ready(page) if page.is_empty() => {
            let message = if query.with(TaskQuery::has_filters) {
                "No tasks match your filters."
            } else {
                "No tasks yet. Add one above."
            };
            view! { <p class="empty-state">{message}</p> }.into_any()
        }
        LoadState::Ready(page) => view! {
            <p class="task-total">{format!("{} tasks", page.total_elements)}</p>
            <div class="tasks">
                {page
                    .items
                    .into_iter()
                    .map(|task| view! { <TaskCard task=task on_mutate=on_mutate /> })
                    .collect_view()}
            </div>
        }.into_any(),
    }
}
