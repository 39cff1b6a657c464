// src/diagnostics.rs
/// Sink for the non-fatal things a pipeline run notices.
/// Frontends (CLI, tests) implement this to surface them; every hook defaults to a no-op.
pub trait Diagnostics {
    /// A cell that was neither blank nor "N/A" failed to parse and became `Missing`.
    fn parse_fallback(&mut self, _raw: &str) {}

    /// Scraped labels with no catalog entry. Called once per run, only when non-empty.
    fn unmatched(&mut self, _titles: &[String]) {}
}

/// A no-op sink.
pub struct NullDiagnostics;
impl Diagnostics for NullDiagnostics {}

/// Forwards everything to the log.
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn parse_fallback(&mut self, raw: &str) {
        logd!("unparseable cell {raw:?} treated as missing");
    }

    fn unmatched(&mut self, titles: &[String]) {
        logw!(
            "{} scraped title(s) not in catalog: {}",
            titles.len(),
            titles.join(", ")
        );
    }
}

/// Keeps what it was told. Handy for tests and for callers that report at the end.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CollectDiagnostics {
    pub fallbacks: Vec<String>,
    pub unmatched: Vec<String>,
}

impl Diagnostics for CollectDiagnostics {
    fn parse_fallback(&mut self, raw: &str) {
        self.fallbacks.push(raw.to_string());
    }

    fn unmatched(&mut self, titles: &[String]) {
        self.unmatched.extend_from_slice(titles);
    }
}
