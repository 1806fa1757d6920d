//! Project Card Component
//!
//! One project on the dashboard: progress, task counts, edit and delete.

use leptos::prelude::*;
use leptos_router::components::A;
use taskboard_client::{NewProject, Project, ProjectId};

use crate::components::{DeleteConfirmButton, ProgressBar, ProjectForm};
use crate::routes::project_path;

#[component]
pub fn ProjectCard(
    project: Project,
    #[prop(into)] on_update: Callback<(ProjectId, NewProject)>,
    #[prop(into)] on_delete: Callback<ProjectId>,
) -> impl IntoView {
    let (editing, set_editing) = signal(false);
    let id = project.id;
    let initial = NewProject::from_project(&project);

    view! {
        <div class="project-card">
            <Show when=move || editing.get() fallback=card_summary(&project, set_editing, on_delete)>
                <ProjectForm
                    initial=initial.clone()
                    submit_label="Save"
                    on_submit=move |updated: NewProject| {
                        set_editing.set(false);
                        on_update.run((id, updated));
                    }
                    on_cancel=move |_: ()| set_editing.set(false)
                />
            </Show>
        </div>
    }
}

/// Read-only face of the card. `Show` may render it any number of times.
fn card_summary(
    project: &Project,
    set_editing: WriteSignal<bool>,
    on_delete: Callback<ProjectId>,
) -> impl Fn() -> AnyView + Send + Sync + 'static {
    let id = project.id;
    let title = project.title.clone();
    let description = project.description_or_placeholder().to_string();
    let counts = format!("{} / {} tasks completed", project.completed_tasks, project.total_tasks);
    let percentage = project.progress_percentage;

    move || {
        let title = title.clone();
        view! {
            <A href=project_path(id)>
                <h3 class="project-title">{title}</h3>
            </A>
            <p class="project-description">{description.clone()}</p>
            <ProgressBar percentage=percentage />
            <p class="project-counts">{counts.clone()}</p>
            <div class="card-actions">
                <button class="edit-btn" on:click=move |_| set_editing.set(true)>"Edit"</button>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    prompt="Delete this project?"
                    on_confirm=move |_: ()| on_delete.run(id)
                />
            </div>
        }
        .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_is_a_reusable_fallback() {
        let owner = Owner::new();
        owner.with(|| {
            let project = Project {
                id: 4,
                title: "Launch".into(),
                description: None,
                progress_percentage: 25,
                completed_tasks: 1,
                total_tasks: 4,
            };
            let (_, set_editing) = signal(false);
            let on_delete = Callback::new(|_: ProjectId| {});

            let _fallback = ViewFn::from(card_summary(&project, set_editing, on_delete));
        });
    }
}
