//! Delete Confirm Button Component
//!
//! Two-step delete used on project and task cards.

use leptos::prelude::*;

/// A "Delete" button that turns into `prompt` plus confirm/cancel.
///
/// `on_confirm` only runs from the confirm button, and the button falls back
/// to its first state afterwards so a card that survives (the delete failed)
/// is not left asking. Clicks stop here and never reach the card underneath.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);
    let answer = move |confirmed: bool| {
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            set_asking.set(false);
            if confirmed {
                on_confirm.run(());
            }
        }
    };

    view! {
        <Show
            when=move || asking.get()
            fallback=move || view! {
                <button
                    class=button_class.clone()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(true);
                    }
                >
                    "Delete"
                </button>
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button class="confirm-btn" on:click=answer(true)>"Yes, delete"</button>
                <button class="cancel-btn" on:click=answer(false)>"Cancel"</button>
            </span>
        </Show>
    }
}
