//! Login Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;
use taskboard_client::controller::{login_failure_message, LoginController, WELCOME_MESSAGE};

use crate::context::use_app_context;
use crate::routes::HOME_PATH;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);
        set_error.set(None);

        let email = email.get_untracked();
        let password = password.get_untracked();
        let navigate = navigate.clone();
        spawn_local(async move {
            let login = LoginController::new(ctx.transport());
            match login.submit(&email, &password).await {
                Ok(_) => {
                    set_submitting.set(false);
                    ctx.notify_success(WELCOME_MESSAGE);
                    navigate(HOME_PATH, Default::default());
                }
                Err(e) => {
                    let message = login_failure_message(&e);
                    set_error.set(Some(message.to_string()));
                    ctx.notify_error(message);
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        // Already signed in: nothing to do here
        <Show when=move || ctx.is_signed_in() && !submitting.get()>
            <Redirect path=HOME_PATH />
        </Show>
        <div class="login-page">
            <form class="login-form" on:submit=submit>
                <h1>"Task Board"</h1>
                <p class="login-subtitle">"Sign in to manage your projects"</p>
                <label>
                    "Email"
                    <input
                        type="email"
                        required
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        required
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
        </div>
    }
}
