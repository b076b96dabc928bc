//! UI Components for the subtitles frontend.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - audio upload form with busy indicator
//! - [`LogsPanel`] - diagnostics panel fed by [`crate::diag::PanelSink`]

mod footer;
mod hero;
mod logs;
mod upload;

pub use footer::*;
pub use hero::*;
pub use logs::*;
pub use upload::*;
