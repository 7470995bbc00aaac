#![forbid(unsafe_code)]

use serde::Serialize;
use std::collections::BTreeSet;

/// Aggregated outcome of one scan. Built fresh per invocation and
/// discarded after rendering; nothing persists between scans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Names of syscalls the sandbox let through.
    pub allowed: BTreeSet<String>,
    /// Names of syscalls the sandbox denied.
    pub blocked: BTreeSet<String>,
    /// Names excluded up front, in catalog order.
    pub skipped: Vec<String>,
}

impl ScanReport {
    /// Operator-facing explanation of the skipped list.
    pub fn comment(&self) -> String {
        format!(
            "[{}] were not scanned because they cause hang or for obvious reasons.",
            self.skipped.join(", ")
        )
    }
}
