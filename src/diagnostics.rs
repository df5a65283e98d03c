/// A leveled diagnostic sink for authorizer outcomes.
///
/// The authorizer reports every outcome branch here instead of logging through
/// a process-wide logger directly, so tests can capture and assert on output.
pub trait DiagnosticLog {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// A [`DiagnosticLog`] that forwards to the process-wide [`tracing`] logger.
pub struct TracingDiagnostics;

impl DiagnosticLog for TracingDiagnostics {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}
