//! Subtitles Creator - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading audio files to a transcription
//! service and downloading the resulting transcript.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── UploadSection (form, busy indicator)                   │
//! │  └── LogsPanel (diagnostics, when non-empty)                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (LogEntry, SubmitPhase, AppError)
//! - [`lifecycle`] - the submit/settle state machine
//! - [`diag`] - injectable diagnostic sinks
//! - [`components`] - UI components (Hero, Upload, Logs, Footer)
//! - [`services`] - endpoint communication and transcript download

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod diag;
pub mod lifecycle;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Logs
    LogEntry, LogLevel,
    // Submission
    SubmitPhase,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Subtitles Creator - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Diagnostics reported by the submission lifecycle
    let (logs, set_logs) = create_signal(Vec::<LogEntry>::new());

    view! {
        <div class="container">
            <Hero/>

            <UploadSection set_logs=set_logs/>

            // Diagnostics panel appears once something was reported
            <Show
                when=move || !logs.get().is_empty()
                fallback=|| view! { }
            >
                <LogsPanel logs=logs set_logs=set_logs/>
            </Show>
        </div>

        <Footer/>
    }
}
