//! Cooperative cancellation for long-running extraction/disassembly loops.
//!
//! Polled once per work unit (e.g. between ALF entries) rather than
//! mid-operation, backed by a flag the caller sets from wherever is
//! convenient (a signal handler, a UI button, a test).
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A shareable, cloneable flag. Cloning shares the same underlying flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
