#![forbid(unsafe_code)]

use crate::catalog::SyscallId;
use crate::invoker::RawInvoker;
use nix::errno::Errno;
use std::sync::Arc;
use std::time::Duration;
use tracing::trace;

/// What a single probe measured. Never an error: the outcome *is* the
/// measurement, and no outcome aborts a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The call went through to the kernel: success, an unrelated errno,
    /// or no return before the timeout.
    Allowed,
    /// The sandbox denied the call outright.
    Blocked,
    /// Ambiguous errno; left out of the report entirely.
    Dropped,
}

/// Default per-probe timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(100);

/// Map a raw invocation result onto the fixed outcome table.
///
/// EPERM and EACCES are the two ways seccomp filters and LSMs answer a
/// denied call. EOPNOTSUPP signals too ambiguously to report either way.
pub fn classify(errno: Option<Errno>) -> ProbeOutcome {
    match errno {
        Some(Errno::EPERM | Errno::EACCES) => ProbeOutcome::Blocked,
        Some(Errno::EOPNOTSUPP) => ProbeOutcome::Dropped,
        _ => ProbeOutcome::Allowed,
    }
}

/// Probes one syscall id at a time, racing the invocation against a
/// timeout so a call that blocks forever cannot stall the scan.
///
/// A probe that hits the timeout classifies as `Allowed`: denials return
/// immediately, so no-answer-in-time means the call was not denied. The
/// inverse does not hold — an allowed call that is merely slow is
/// indistinguishable from one that blocks forever, an accepted
/// approximation.
///
/// The timed-out worker is abandoned, not cancelled. It keeps occupying
/// a blocking-pool thread until the process exits, so a scan that times
/// out on many syscalls accumulates that many stalled threads. Embedders
/// that need a prompt exit should tear their runtime down with
/// `shutdown_background()` rather than joining workers.
#[derive(Clone)]
pub struct Prober {
    invoker: Arc<dyn RawInvoker>,
    timeout: Duration,
}

impl Prober {
    pub fn new(invoker: Arc<dyn RawInvoker>, timeout: Duration) -> Self {
        Self { invoker, timeout }
    }

    pub fn invoker(&self) -> &Arc<dyn RawInvoker> {
        &self.invoker
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Invoke one syscall id and classify the kernel's answer.
    pub async fn probe(&self, id: SyscallId) -> ProbeOutcome {
        let invoker = Arc::clone(&self.invoker);
        let call = tokio::task::spawn_blocking(move || invoker.invoke(id));

        let outcome = match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(errno)) => classify(errno),
            // A panicked worker tells us nothing about the sandbox.
            Ok(Err(_)) => ProbeOutcome::Allowed,
            // No answer in time: the call was let through and is
            // genuinely blocking.
            Err(_) => ProbeOutcome::Allowed,
        };
        trace!(%id, ?outcome, "probe finished");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::sync::Mutex;
    use std::sync::mpsc;

    struct FixedInvoker(Option<Errno>);

    impl RawInvoker for FixedInvoker {
        fn ensure_supported(&self) -> Result<(), Error> {
            Ok(())
        }

        fn invoke(&self, _id: SyscallId) -> Option<Errno> {
            self.0
        }
    }

    // Blocks inside invoke() until the test drops the paired sender.
    struct HangingInvoker {
        gate: Mutex<mpsc::Receiver<()>>,
    }

    impl RawInvoker for HangingInvoker {
        fn ensure_supported(&self) -> Result<(), Error> {
            Ok(())
        }

        fn invoke(&self, _id: SyscallId) -> Option<Errno> {
            let _ = self.gate.lock().unwrap().recv();
            None
        }
    }

    #[test]
    fn classification_table_is_exact() {
        assert_eq!(classify(Some(Errno::EPERM)), ProbeOutcome::Blocked);
        assert_eq!(classify(Some(Errno::EACCES)), ProbeOutcome::Blocked);
        assert_eq!(classify(Some(Errno::EOPNOTSUPP)), ProbeOutcome::Dropped);
        assert_eq!(classify(Some(Errno::ENOSYS)), ProbeOutcome::Allowed);
        assert_eq!(classify(Some(Errno::EINVAL)), ProbeOutcome::Allowed);
        assert_eq!(classify(None), ProbeOutcome::Allowed);
    }

    #[tokio::test]
    async fn fast_denial_classifies_blocked() {
        let prober = Prober::new(Arc::new(FixedInvoker(Some(Errno::EPERM))), DEFAULT_TIMEOUT);
        assert_eq!(prober.probe(SyscallId(0)).await, ProbeOutcome::Blocked);
    }

    #[tokio::test]
    async fn timeout_classifies_allowed() {
        let (tx, rx) = mpsc::channel();
        let invoker = Arc::new(HangingInvoker {
            gate: Mutex::new(rx),
        });
        let prober = Prober::new(invoker, Duration::from_millis(10));

        let start = std::time::Instant::now();
        let outcome = prober.probe(SyscallId(7)).await;
        assert_eq!(outcome, ProbeOutcome::Allowed);
        assert!(start.elapsed() < Duration::from_secs(5));

        // Release the abandoned worker so test teardown stays fast.
        drop(tx);
    }
}
