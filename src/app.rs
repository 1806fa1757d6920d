//! Task Board Frontend App
//!
//! Wires the session, transport and stores together and mounts the router.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;
use reactive_stores::Store;
use taskboard_client::{ClientConfig, CredentialStore, MemoryCredentials, ReqwestBackend, SessionStore, Transport};

use crate::components::NotificationStack;
use crate::context::AppContext;
use crate::pages::{DashboardPage, LoginPage, ProjectDetailPage};
use crate::routes::{Protected, UnauthorizedRedirect, HOME_PATH};
use crate::storage::BrowserCredentials;
use crate::store::{store_reset, BoardState};

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_env();
    log::info!("[APP] Starting against {}", config.base_url);

    let credentials: Rc<dyn CredentialStore> = match BrowserCredentials::open() {
        Some(storage) => Rc::new(storage),
        None => {
            log::warn!("[APP] localStorage unavailable, session will not survive a reload");
            Rc::new(MemoryCredentials::default())
        }
    };
    let session = SessionStore::restored(credentials);
    let transport = Transport::new(ReqwestBackend::new(&config), session);

    let ctx = AppContext::new(transport, config);
    let store = Store::new(BoardState::default());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    // Signing out (or a 401) must not leave the last user's board behind
    Effect::new(move |_| {
        if ctx.session.with(Option::is_none) {
            log::debug!("[APP] Session ended, clearing board state");
            store_reset(&store);
        }
    });

    view! {
        <Router>
            <UnauthorizedRedirect />
            <main class="app-layout">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/login") view=LoginPage />
                    <Route
                        path=path!("/")
                        view=|| view! { <Protected><DashboardPage /></Protected> }
                    />
                    <Route
                        path=path!("/projects/:id")
                        view=|| view! { <Protected><ProjectDetailPage /></Protected> }
                    />
                </Routes>
            </main>
            <NotificationStack />
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"Page not found"</h2>
            <A href=HOME_PATH>"Back to Dashboard"</A>
        </div>
    }
}
