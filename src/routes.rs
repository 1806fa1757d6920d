//! Routes and Route Guard
//!
//! Protected views render only while a session exists. The check is
//! reactive on the session signal, so it runs again on every change.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::{use_location, use_navigate};
use taskboard_client::{ProjectId, Session};

use crate::context::use_app_context;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

pub fn project_path(id: ProjectId) -> String {
    format!("/projects/{}", id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    RedirectToLogin,
}

impl Access {
    pub fn for_session(session: Option<&Session>) -> Self {
        match session {
            Some(_) => Access::Granted,
            None => Access::RedirectToLogin,
        }
    }
}

/// A 401 sends the user to the login view unless they are already there
pub fn should_redirect_on_unauthorized(current_path: &str) -> bool {
    current_path.trim_end_matches('/') != LOGIN_PATH
}

/// Renders `children` for a signed-in user, otherwise redirects to login
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let ctx = use_app_context();
    let access = move || ctx.session.with(|s| Access::for_session(s.as_ref()));

    view! {
        <Show
            when=move || access() == Access::Granted
            fallback=|| view! { <Redirect path=LOGIN_PATH /> }
        >
            {children()}
        </Show>
    }
}

/// Registers the transport's 401 hook; must be mounted inside the router
#[component]
pub fn UnauthorizedRedirect() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let location = use_location();

    ctx.transport().on_unauthorized(move || {
        let current = location.pathname.get_untracked();
        if should_redirect_on_unauthorized(&current) {
            log::info!("[Routes] Session rejected on {}, redirecting to login", current);
            navigate(LOGIN_PATH, Default::default());
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_follows_session() {
        let session = Session { token: "abc".into(), email: "a@b.com".into() };
        assert_eq!(Access::for_session(Some(&session)), Access::Granted);
        assert_eq!(Access::for_session(None), Access::RedirectToLogin);
    }

    #[test]
    fn test_no_redirect_loop_on_login() {
        assert!(!should_redirect_on_unauthorized("/login"));
        assert!(!should_redirect_on_unauthorized("/login/"));
        assert!(should_redirect_on_unauthorized("/"));
        assert!(should_redirect_on_unauthorized("/projects/3"));
    }

    #[test]
    fn test_project_path() {
        assert_eq!(project_path(12), "/projects/12");
    }
}
