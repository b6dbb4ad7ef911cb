use std::sync::{Mutex, PoisonError};

use crate::ui;

/// Sink for non-fatal problems found while bootstrapping.
pub trait Diagnostics {
    fn warn(&self, message: &str);
}

/// Reports warnings on the terminal and to the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalDiagnostics;

impl Diagnostics for TerminalDiagnostics {
    fn warn(&self, message: &str) {
        tracing::debug!(%message, "variant fallback");
        ui::warn(message);
    }
}

/// Keeps warnings in memory so callers can inspect them afterwards.
#[derive(Debug, Default)]
pub struct CapturedDiagnostics {
    warnings: Mutex<Vec<String>>,
}

impl CapturedDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Diagnostics for CapturedDiagnostics {
    fn warn(&self, message: &str) {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
