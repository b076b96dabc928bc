//! Submission lifecycle: submit, await settlement, hide the indicator.
//!
//! The handler around one form submission is modeled as a small state
//! machine over two injected handles: a [`BusyIndicator`] shown while the
//! request is in flight and a [`DiagnosticSink`] receiving failure
//! reports. Neither handle touches the DOM here, so the whole lifecycle
//! runs under plain `cargo test` with fakes.
//!
//! Overlapping submissions are not guarded against: each submission gets
//! its own lifecycle value, but the indicator handle is shared, so a
//! second in-flight request can have its indicator hidden early by the
//! first request's settlement. This preserves the historical behavior of
//! the upload page; serializing submissions would be a product decision,
//! not a bug fix.

use std::cell::Cell;

use crate::diag::DiagnosticSink;
use crate::types::{AppError, LogLevel, SubmitPhase};

/// Visual busy indicator toggled during an in-flight request.
///
/// `hide` must be idempotent: hiding an already-hidden indicator is a
/// no-op.
pub trait BusyIndicator {
    fn show(&self);
    fn hide(&self);
}

/// Outcome of one request, after which no further transition occurs.
#[derive(Clone, Debug, PartialEq)]
pub enum Settlement {
    /// HTTP-success status; carries the response body, untransformed.
    Success(String),
    /// Non-success HTTP status; the body is ignored.
    HttpError(u16),
    /// The request could not complete at the transport level.
    TransportError(String),
}

impl From<AppError> for Settlement {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Http(status) => Settlement::HttpError(status),
            AppError::Transport(detail) => Settlement::TransportError(detail),
            // The request never completed, so a DOM failure while
            // snapshotting the form settles like a transport failure.
            AppError::Dom(detail) => Settlement::TransportError(detail),
        }
    }
}

/// State machine for one form submission.
pub struct SubmitLifecycle<B, D> {
    indicator: B,
    sink: D,
    phase: Cell<SubmitPhase>,
}

impl<B: BusyIndicator, D: DiagnosticSink> SubmitLifecycle<B, D> {
    pub fn new(indicator: B, sink: D) -> Self {
        Self {
            indicator,
            sink,
            phase: Cell::new(SubmitPhase::Idle),
        }
    }

    /// Current phase of this submission.
    pub fn phase(&self) -> SubmitPhase {
        self.phase.get()
    }

    /// The injected diagnostic sink.
    pub fn sink(&self) -> &D {
        &self.sink
    }

    /// Enter `Submitting` and show the indicator.
    pub fn begin(&self) {
        self.phase.set(SubmitPhase::Submitting);
        self.indicator.show();
    }

    /// Settle the submission.
    ///
    /// The indicator is hidden before anything else, on every path, so a
    /// failure while constructing the download artifact afterwards cannot
    /// leave it visible. Returns the response body on success, for the
    /// caller to offer as a download; failures are reported to the sink
    /// and yield `None`.
    pub fn settle(&self, settlement: Settlement) -> Option<String> {
        self.indicator.hide();

        match settlement {
            Settlement::Success(text) => {
                self.phase.set(SubmitPhase::Succeeded);
                Some(text)
            }
            Settlement::HttpError(status) => {
                self.phase.set(SubmitPhase::Failed);
                self.sink
                    .report(LogLevel::Error, &format!("request failed with status {}", status));
                None
            }
            Settlement::TransportError(detail) => {
                self.phase.set(SubmitPhase::Failed);
                self.sink
                    .report(LogLevel::Error, &format!("request failed: {}", detail));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeIndicator {
        visible: Rc<Cell<bool>>,
    }

    impl BusyIndicator for FakeIndicator {
        fn show(&self) {
            self.visible.set(true);
        }
        fn hide(&self) {
            self.visible.set(false);
        }
    }

    #[derive(Clone, Default)]
    struct RecordingSink {
        reports: Rc<RefCell<Vec<(LogLevel, String)>>>,
    }

    impl DiagnosticSink for RecordingSink {
        fn report(&self, level: LogLevel, message: &str) {
            self.reports.borrow_mut().push((level, message.to_string()));
        }
    }

    fn lifecycle() -> SubmitLifecycle<FakeIndicator, RecordingSink> {
        SubmitLifecycle::new(FakeIndicator::default(), RecordingSink::default())
    }

    #[test]
    fn begin_shows_indicator_and_enters_submitting() {
        let lc = lifecycle();
        assert_eq!(lc.phase(), SubmitPhase::Idle);

        lc.begin();
        assert_eq!(lc.phase(), SubmitPhase::Submitting);
        assert!(lc.indicator.visible.get());
    }

    #[test]
    fn success_hides_indicator_and_returns_body_untransformed() {
        let lc = lifecycle();
        lc.begin();

        let body = lc.settle(Settlement::Success("hello world".to_string()));
        assert_eq!(body.as_deref(), Some("hello world"));
        assert_eq!(lc.phase(), SubmitPhase::Succeeded);
        assert!(!lc.indicator.visible.get());
        // Failures only are reported; success says nothing.
        assert!(lc.sink.reports.borrow().is_empty());
    }

    #[test]
    fn http_error_reports_status_and_yields_no_download() {
        let lc = lifecycle();
        lc.begin();

        let body = lc.settle(Settlement::HttpError(500));
        assert_eq!(body, None);
        assert_eq!(lc.phase(), SubmitPhase::Failed);
        assert!(!lc.indicator.visible.get());

        let reports = lc.sink.reports.borrow();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].0, LogLevel::Error);
        assert!(reports[0].1.contains("500"));
    }

    #[test]
    fn transport_error_reports_detail_and_hides_indicator() {
        let lc = lifecycle();
        lc.begin();

        let body = lc.settle(Settlement::TransportError("connection refused".to_string()));
        assert_eq!(body, None);
        assert_eq!(lc.phase(), SubmitPhase::Failed);
        assert!(!lc.indicator.visible.get());

        let reports = lc.sink.reports.borrow();
        assert_eq!(reports.len(), 1);
        assert!(reports[0].1.contains("connection refused"));
    }

    #[test]
    fn hide_is_idempotent() {
        let indicator = FakeIndicator::default();
        indicator.show();
        indicator.hide();
        indicator.hide();
        assert!(!indicator.visible.get());
    }

    #[test]
    fn dom_failure_settles_like_a_transport_failure() {
        let settlement = Settlement::from(AppError::Dom("no document".to_string()));
        assert_eq!(settlement, Settlement::TransportError("no document".to_string()));
        assert_eq!(
            Settlement::from(AppError::Http(404)),
            Settlement::HttpError(404)
        );
    }

    #[test]
    fn overlapping_submissions_share_the_indicator() {
        // Two in-flight requests: the first settlement hides the shared
        // indicator even though the second is still submitting. Historical
        // behavior, kept on purpose.
        let indicator = FakeIndicator::default();
        let first = SubmitLifecycle::new(indicator.clone(), RecordingSink::default());
        let second = SubmitLifecycle::new(indicator.clone(), RecordingSink::default());

        first.begin();
        second.begin();
        first.settle(Settlement::Success("done".to_string()));

        assert_eq!(second.phase(), SubmitPhase::Submitting);
        assert!(!indicator.visible.get());
    }
}
