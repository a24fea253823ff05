//! Destinations for diagnostic records.

use std::sync::{Mutex, MutexGuard, PoisonError};

use hydrate_model::Diagnostic;
use tracing::debug;

/// Receives diagnostics as hydration produces them, in field order.
///
/// Diagnostics of a nested object arrive before the one for the field that
/// owns it.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, diagnostic: &Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&Diagnostic) + Send + Sync,
{
    fn record(&self, diagnostic: &Diagnostic) {
        self(diagnostic)
    }
}

/// Collects diagnostics in memory.
#[derive(Debug, Default)]
pub struct DiagnosticLog {
    records: Mutex<Vec<Diagnostic>>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of everything recorded so far.
    pub fn records(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    /// Drains the log.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Diagnostic>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DiagnosticSink for DiagnosticLog {
    fn record(&self, diagnostic: &Diagnostic) {
        self.lock().push(diagnostic.clone());
    }
}

/// Forwards diagnostics to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, diagnostic: &Diagnostic) {
        debug!(
            class = %diagnostic.class,
            field = %diagnostic.field,
            value = %diagnostic.value,
            info = %diagnostic.info(),
            "field coercion"
        );
    }
}
