//! Hero section component

use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{APP_NAME}</h1>
            <p class="subtitle">
                "Upload an audio file and get it transcribed. "
                "The transcript is offered back as a downloadable text or subtitle file."
            </p>
        </div>
    }
}
