//! Audio upload form with busy indicator.
//!
//! Intercepts the form's submit event, posts the fields to the
//! transcription endpoint and offers the transcript as a download.

use leptos::*;
use web_sys::{HtmlFormElement, SubmitEvent};

use crate::config::{DOWNLOAD_FILENAME, TRANSCRIBE_ENDPOINT};
use crate::diag::{DiagnosticSink, PanelSink};
use crate::lifecycle::{BusyIndicator, Settlement, SubmitLifecycle};
use crate::services::{offer_download, submit_form};
use crate::types::{LogEntry, LogLevel};

/// Busy-indicator handle backed by a reactive signal.
///
/// The spinner element renders whenever the signal is true, so show/hide
/// never has to reach into the DOM and both are naturally idempotent.
#[derive(Clone, Copy)]
pub struct SignalIndicator(WriteSignal<bool>);

impl SignalIndicator {
    pub fn new(visible: WriteSignal<bool>) -> Self {
        Self(visible)
    }
}

impl BusyIndicator for SignalIndicator {
    fn show(&self) {
        self.0.set(true);
    }

    fn hide(&self) {
        self.0.set(false);
    }
}

#[component]
pub fn UploadSection(set_logs: WriteSignal<Vec<LogEntry>>) -> impl IntoView {
    let (is_uploading, set_is_uploading) = create_signal(false);

    let on_submit = move |ev: SubmitEvent| {
        // Never let the browser navigate away with the form.
        ev.prevent_default();

        let form: HtmlFormElement = event_target(&ev);
        let lifecycle = SubmitLifecycle::new(
            SignalIndicator::new(set_is_uploading),
            PanelSink::new(set_logs),
        );

        lifecycle.begin();
        spawn_local(async move {
            let settlement = match submit_form(&form, TRANSCRIBE_ENDPOINT).await {
                Ok(text) => Settlement::Success(text),
                Err(e) => Settlement::from(e),
            };

            // The indicator is hidden inside settle, before the download
            // artifact is constructed.
            if let Some(text) = lifecycle.settle(settlement) {
                match offer_download(&text, DOWNLOAD_FILENAME) {
                    Ok(()) => lifecycle.sink().report(
                        LogLevel::Success,
                        &format!("transcript saved as {}", DOWNLOAD_FILENAME),
                    ),
                    Err(e) => lifecycle
                        .sink()
                        .report(LogLevel::Error, &format!("download failed: {}", e)),
                }
            }
        });
    };

    view! {
        <div class="upload-section">
            <form id="transcribe_form" on:submit=on_submit>
                <label for="audioFile" class="upload-text">
                    "Choose an audio file"
                </label>
                <input
                    type="file"
                    id="audioFile"
                    name="audio_file"
                    accept=".mp3,.mp4,.wav,.ogg"
                />

                <label for="formatSelect" class="upload-hint">
                    "Output format"
                </label>
                <select id="formatSelect" name="format">
                    <option value="text" selected>"Plain text"</option>
                    <option value="srt">"SubRip (.srt)"</option>
                    <option value="vtt">"WebVTT (.vtt)"</option>
                </select>

                <button type="submit" class="upload-button">
                    "Transcribe"
                </button>
            </form>

            <Show
                when=move || is_uploading.get()
                fallback=|| view! { }
            >
                <div class="spinner" id="loadingSpinner">
                    <div class="spinner-icon">"⏳"</div>
                    <div class="spinner-text">"Transcribing, this can take a while..."</div>
                </div>
            </Show>
        </div>
    }
}
