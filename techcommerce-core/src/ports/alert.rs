// techcommerce-core/src/ports/alert.rs
//
// This file defines what the application needs, without knowing how it's
// done: the checkpoint reports failed suites, somebody else decides whether
// that becomes a console banner, an e-mail or a pager call.

/// Receives a notification for every expectation suite that failed
/// validation.
pub trait AlertSink {
    fn notify(&self, suite_name: &str, failed_expectations: usize);
}

/// No-op sink for callers that only want the checkpoint verdict.
pub struct SilentAlert;

impl AlertSink for SilentAlert {
    fn notify(&self, _suite_name: &str, _failed_expectations: usize) {}
}
