//! HTTP service posting the upload form to the transcription endpoint.

use gloo_net::http::Request;
use web_sys::{FormData, HtmlFormElement};

use crate::types::{AppError, AppResult};

/// Submit the form's current fields and await the transcript.
///
/// The fields are snapshotted into a multipart payload once, at call
/// time; the payload is never mutated afterwards. A non-2xx status maps
/// to [`AppError::Http`] with the body ignored; a request that never
/// completes maps to [`AppError::Transport`]. On success the body is
/// returned as text, verbatim.
pub async fn submit_form(form: &HtmlFormElement, endpoint: &str) -> AppResult<String> {
    let payload =
        FormData::new_with_form(form).map_err(|e| AppError::Dom(format!("{:?}", e)))?;

    let request = Request::post(endpoint)
        .body(payload)
        .map_err(|e| AppError::Transport(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(AppError::Http(response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| AppError::Transport(e.to_string()))
}
