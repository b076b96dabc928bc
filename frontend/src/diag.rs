//! Injectable diagnostic sinks.
//!
//! Failures are never surfaced to the end user beyond the busy indicator
//! disappearing; they are reported to a diagnostic sink instead. The sink
//! is injected into the submission lifecycle so tests can assert on
//! reported values without coupling to any specific logging facility.

use leptos::{SignalUpdate, WriteSignal};

use crate::config::MAX_LOG_ENTRIES;
use crate::types::{LogEntry, LogLevel};

/// Operator-visible diagnostic channel.
pub trait DiagnosticSink {
    /// Report one diagnostic message.
    fn report(&self, level: LogLevel, message: &str);
}

/// Sink backed by the browser console via the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn report(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Error => log::error!("{}", message),
            LogLevel::Warning => log::warn!("{}", message),
            LogLevel::Debug => log::debug!("{}", message),
            LogLevel::Info | LogLevel::Success => log::info!("{}", message),
        }
    }
}

/// Sink feeding the on-page diagnostics panel.
///
/// Entries are timestamped and appended to a reactive signal, capped at
/// [`MAX_LOG_ENTRIES`]. Every entry is mirrored to the console.
#[derive(Clone, Copy)]
pub struct PanelSink {
    logs: WriteSignal<Vec<LogEntry>>,
}

impl PanelSink {
    pub fn new(logs: WriteSignal<Vec<LogEntry>>) -> Self {
        Self { logs }
    }
}

impl DiagnosticSink for PanelSink {
    fn report(&self, level: LogLevel, message: &str) {
        ConsoleSink.report(level.clone(), message);

        // JS Date for the timestamp
        let timestamp = js_sys::Date::new_0()
            .to_locale_time_string("en-GB")
            .as_string()
            .unwrap_or_else(|| "00:00:00".to_string());

        self.logs.update(|logs| {
            logs.push(LogEntry {
                level,
                message: message.to_string(),
                timestamp,
            });
            if logs.len() > MAX_LOG_ENTRIES {
                logs.remove(0);
            }
        });
    }
}
