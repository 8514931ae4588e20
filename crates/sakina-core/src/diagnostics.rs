//! Observability for failures the rotation path deliberately swallows.
//!
//! Storage faults never reach the caller of a content stream or the quota
//! tracker. They are reported to a [`DiagnosticSink`] instead so embedders can
//! count or log them without changing that contract.

use std::fmt;
use std::sync::Arc;

/// What the component was doing when the fault happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// Reading the key failed at the backend.
    Read,
    /// Writing the key failed at the backend.
    Write,
    /// The stored value could not be interpreted and was treated as absent.
    Malformed,
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FaultKind::Read => "read",
            FaultKind::Write => "write",
            FaultKind::Malformed => "malformed",
        };
        f.write_str(s)
    }
}

/// A recovered storage failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageFault {
    pub kind: FaultKind,
    pub key: String,
    pub message: String,
}

impl StorageFault {
    pub fn new(kind: FaultKind, key: &str, message: impl fmt::Display) -> Self {
        Self {
            kind,
            key: key.to_string(),
            message: message.to_string(),
        }
    }
}

/// Receiver for recovered faults.
pub trait DiagnosticSink: Send + Sync {
    fn storage_fault(&self, fault: &StorageFault);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&StorageFault) + Send + Sync,
{
    fn storage_fault(&self, fault: &StorageFault) {
        self(fault)
    }
}

/// Default sink: emits a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn storage_fault(&self, fault: &StorageFault) {
        tracing::warn!(
            key = %fault.key,
            kind = %fault.kind,
            "storage fault recovered: {}",
            fault.message
        );
    }
}

/// Shared handle to a sink. Cheap to clone into every component.
#[derive(Clone)]
pub struct Diagnostics {
    sink: Arc<dyn DiagnosticSink>,
}

impl Diagnostics {
    pub fn new(sink: impl DiagnosticSink + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
        }
    }

    pub fn report(&self, fault: StorageFault) {
        self.sink.storage_fault(&fault);
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new(TracingSink)
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn closure_sink_receives_faults() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_by_sink = Arc::clone(&seen);
        let diagnostics = Diagnostics::new(move |fault: &StorageFault| {
            seen_by_sink.lock().unwrap().push(fault.clone());
        });

        diagnostics.report(StorageFault::new(FaultKind::Write, "k", "quota exceeded"));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].kind, FaultKind::Write);
        assert_eq!(seen[0].key, "k");
    }

    #[test]
    fn default_sink_does_not_panic() {
        Diagnostics::default().report(StorageFault::new(FaultKind::Malformed, "k", "bad json"));
    }
}
