use leptos::prelude::*;
use taskboard_client::models::ProgressTier;

/// Horizontal progress bar coloured by tier
#[component]
pub fn ProgressBar(percentage: u8) -> impl IntoView {
    let width = format!("width: {}%", percentage.min(100));

    view! {
        <div class="progress">
            <div class="progress-track">
                <div class=ProgressTier::for_percentage(percentage).css_class() style=width></div>
            </div>
            <span class="progress-label">{format!("{}%", percentage)}</span>
        </div>
    }
}
