//! Dashboard Page
//!
//! Project list with create, inline edit and delete. A failed request never
//! blocks the page; it shows a notification and leaves the list as it was.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use taskboard_client::controller::{mutation_error_message, DashboardController, LoadState};
use taskboard_client::{NewProject, ProjectId};

use crate::components::{ProjectCard, ProjectForm, Spinner};
use crate::context::use_app_context;
use crate::routes::LOGIN_PATH;
use crate::store::{store_remove_project, store_set_projects, use_board_store, BoardStateStoreFields};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_board_store();
    let navigate = use_navigate();
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Load projects on mount and on retry
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        log::debug!("[Dashboard] Loading projects, trigger={}", trigger);
        spawn_local(async move {
            let result = DashboardController::new(ctx.transport()).load().await;
            if let Err(e) = &result {
                ctx.notify_error(e.user_message());
            }
            store_set_projects(&store, result);
        });
    });

    let create_project = move |project: NewProject| {
        spawn_local(async move {
            match DashboardController::new(ctx.transport()).create(&project).await {
                Ok(projects) => {
                    store_set_projects(&store, Ok(projects));
                    ctx.notify_success("Project created");
                }
                Err(e) => ctx.notify_error(mutation_error_message(&e, "Failed to create project. Please try again.")),
            }
        });
    };

    let update_project = move |(id, project): (ProjectId, NewProject)| {
        spawn_local(async move {
            match DashboardController::new(ctx.transport()).update(id, &project).await {
                Ok(projects) => {
                    store_set_projects(&store, Ok(projects));
                    ctx.notify_success("Project updated");
                }
                Err(e) => ctx.notify_error(mutation_error_message(&e, "Failed to update project. Please try again.")),
            }
        });
    };

    let delete_project = move |id: ProjectId| {
        spawn_local(async move {
            match DashboardController::new(ctx.transport()).delete(id).await {
                Ok(()) => {
                    store_remove_project(&store, id);
                    ctx.notify_success("Project deleted");
                }
                Err(e) => ctx.notify_error(mutation_error_message(&e, "Failed to delete project. Please try again.")),
            }
        });
    };

    let logout = move |_| {
        DashboardController::new(ctx.transport()).logout();
        navigate(LOGIN_PATH, Default::default());
    };

    view! {
        <div class="dashboard">
            <header class="page-header">
                <h1>"My Projects"</h1>
                <div class="header-user">
                    <span class="user-email">{move || ctx.user_email()}</span>
                    <button class="logout-btn" on:click=logout>"Logout"</button>
                </div>
            </header>

            {move || store.banner().get().map(|msg| view! {
                <div class="banner error">
                    <span>{msg}</span>
                    <button on:click=move |_| set_reload_trigger.update(|v| *v += 1)>"Retry"</button>
                </div>
            })}

            <section class="new-project">
                <h2>"New Project"</h2>
                <ProjectForm submit_label="Create Project" on_submit=create_project />
            </section>

            {move || match store.projects().get() {
                LoadState::Loading => view! { <Spinner label="Loading projects..." /> }.into_any(),
                LoadState::Failed(msg) => view! { <p class="form-error">{msg}</p> }.into_any(),
                LoadState::Ready(projects) if projects.is_empty() => view! {
                    <p class="empty-state">"No projects yet. Create your first project above."</p>
                }.into_any(),
                LoadState::Ready(projects) => view! {
                    <div class="project-grid">
                        <For
                            each=move || projects.clone()
                            key=|p| (p.id, p.title.clone(), p.description.clone(), p.progress_percentage, p.completed_tasks, p.total_tasks)
                            children=move |project| view! {
                                <ProjectCard
                                    project=project
                                    on_update=update_project
                                    on_delete=delete_project
                                />
                            }
                        />
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
