#![forbid(unsafe_code)]

use crate::catalog::{self, MAX_SYSCALL, SyscallId};
use crate::error::Error;
use crate::exclusion::ExclusionPolicy;
use crate::invoker::RawInvoker;
use crate::probe::{ProbeOutcome, Prober};
use crate::report::ScanReport;
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Fans one probe task out per candidate syscall id and joins on exactly
/// as many results as probes launched.
pub struct ScanEngine {
    prober: Prober,
    exclusions: ExclusionPolicy,
    max_id: SyscallId,
}

impl ScanEngine {
    pub fn new(
        invoker: Arc<dyn RawInvoker>,
        exclusions: ExclusionPolicy,
        timeout: Duration,
    ) -> Self {
        Self {
            prober: Prober::new(invoker, timeout),
            exclusions,
            max_id: MAX_SYSCALL,
        }
    }

    /// Restrict the scan to ids `0..=last`. Tests run on small ranges;
    /// production scans cover the whole catalog.
    pub fn with_max_id(mut self, last: SyscallId) -> Self {
        self.max_id = last;
        self
    }

    /// Probe every non-excluded id and aggregate the outcomes.
    ///
    /// Atomic from the caller's view: the scan either fails before a
    /// single probe is launched (unsupported platform) or runs to
    /// completion. There is no scan-wide timeout and no cancellation.
    pub async fn scan(&self) -> Result<ScanReport, Error> {
        self.prober.invoker().ensure_supported()?;

        let mut skipped = Vec::new();
        let mut candidates = Vec::new();
        for id in catalog::ids_through(self.max_id) {
            match self.exclusions.reason(id) {
                Some(reason) => {
                    debug!(%id, ?reason, "skipping excluded syscall");
                    skipped.push(catalog::name(id));
                }
                None => candidates.push(id),
            }
        }

        debug!(
            probes = candidates.len(),
            skipped = skipped.len(),
            timeout = ?self.prober.timeout(),
            "starting scan"
        );

        // One result slot per probe launched: sends never block, and the
        // drain loop below must consume exactly this many.
        let expected = candidates.len();
        let (tx, mut rx) = mpsc::channel(expected.max(1));
        for id in candidates {
            let prober = self.prober.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let outcome = prober.probe(id).await;
                let _ = tx.send((id, outcome)).await;
            });
        }
        drop(tx);

        let mut report = ScanReport {
            allowed: BTreeSet::new(),
            blocked: BTreeSet::new(),
            skipped,
        };
        let mut dropped = 0usize;
        for received in 0..expected {
            let (id, outcome) = rx
                .recv()
                .await
                .ok_or(Error::ResultChannelClosed { received, expected })?;
            match outcome {
                ProbeOutcome::Allowed => {
                    report.allowed.insert(catalog::name(id));
                }
                ProbeOutcome::Blocked => {
                    report.blocked.insert(catalog::name(id));
                }
                ProbeOutcome::Dropped => {
                    // Absent from the report on purpose; the log is the
                    // only place the loss stays observable.
                    debug!(%id, "dropping ambiguous probe result");
                    dropped += 1;
                }
            }
        }

        info!(
            allowed = report.allowed.len(),
            blocked = report.blocked.len(),
            dropped,
            skipped = report.skipped.len(),
            "scan finished"
        );
        Ok(report)
    }
}
