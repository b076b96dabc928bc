//! Server communication and browser-side file delivery.
//!
//! # Services
//!
//! - [`transcribe`] - multipart POST of the upload form to `/transcribe`
//! - [`download`] - client-side save of the transcript text

pub mod download;
pub mod transcribe;

pub use download::*;
pub use transcribe::*;
