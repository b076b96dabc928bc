//! Application configuration.
//!
//! Centralized configuration for the subtitles frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Transcription endpoint path.
///
/// Accepts a multipart POST of the upload form and answers with the
/// transcript as plain text.
pub const TRANSCRIBE_ENDPOINT: &str = "/transcribe";

/// Filename offered for the downloaded transcript.
pub const DOWNLOAD_FILENAME: &str = "downloaded_text.txt";

/// MIME type of the downloaded transcript.
pub const DOWNLOAD_MIME: &str = "text/plain";

/// Application name, displayed in the page header.
pub const APP_NAME: &str = "Subtitles Creator";

/// Maximum logs to keep in memory.
pub const MAX_LOG_ENTRIES: usize = 100;
