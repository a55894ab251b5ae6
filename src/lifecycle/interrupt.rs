//! Operator-initiated interrupt coordination.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared interrupt flag for clean early termination of a batch.
///
/// The orchestrator polls the flag between accounts; it is never
/// checked mid-transfer.
#[derive(Clone)]
pub struct Interrupt {
    flag: Arc<AtomicBool>,
}

impl Interrupt {
    pub fn new() -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Spawn the Ctrl-C listener that trips the flag.
    pub fn install(&self) {
        let flag = Arc::clone(&self.flag);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("Interrupt requested, finishing the current account");
                flag.store(true, Ordering::SeqCst);
            }
        });
    }

    /// Trip the flag directly.
    pub fn trigger(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_triggered(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

impl Default for Interrupt {
    fn default() -> Self {
        Self::new()
    }
}
