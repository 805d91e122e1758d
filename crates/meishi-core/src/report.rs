//! Reporting capability for parse diagnostics.
//!
//! The parser never fails outright; everything it wants to say about the
//! input flows through a caller-supplied [`Reporter`].

/// Sink for diagnostics emitted during parsing.
///
/// `info` carries benign notices (registry gaps, unknown fields); `error`
/// carries non-fatal data problems (malformed dates). Both are invoked
/// synchronously, in input order.
pub trait Reporter {
    /// Reports a benign, informational notice.
    fn info(&mut self, message: &str);

    /// Reports a non-fatal data error.
    fn error(&mut self, message: &str);
}

/// Forwards notices to the `tracing` subscriber.
///
/// Data errors are non-fatal, so they surface as warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn info(&mut self, message: &str) {
        tracing::info!("{message}");
    }

    fn error(&mut self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// Collects notices in memory, in emission order.
///
/// Useful for tests and for callers that summarize an import afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryReporter {
    /// Informational notices.
    pub infos: Vec<String>,
    /// Error notices.
    pub errors: Vec<String>,
}

impl MemoryReporter {
    /// Creates an empty reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether nothing was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.infos.is_empty() && self.errors.is_empty()
    }
}

impl Reporter for MemoryReporter {
    fn info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}
