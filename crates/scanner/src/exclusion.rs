#![forbid(unsafe_code)]

use crate::catalog::SyscallId;

/// Why a syscall id must never be probed directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// With zeroed arguments the call waits for something that never
    /// happens; the probe worker would never return.
    BlocksIndefinitely,
    /// The call takes the scanning process down with it.
    TerminatesProcess,
    /// On success the call duplicates the scanning process mid-run.
    DuplicatesProcess,
    /// The call installs or alters the very filter being measured.
    AltersOwnFilter,
    /// Attaching a tracer from inside the scan can hang the host.
    TracerRace,
    /// The call races signal delivery with unpredictable results.
    SignalRace,
    /// Disconnects the controlling terminal; no diagnostic value.
    DetachesTerminal,
}

const RT_SIGRETURN: SyscallId = SyscallId(15);
const SELECT: SyscallId = SyscallId(23);
const PAUSE: SyscallId = SyscallId(34);
const CLONE: SyscallId = SyscallId(56);
const FORK: SyscallId = SyscallId(57);
const VFORK: SyscallId = SyscallId(58);
const EXIT: SyscallId = SyscallId(60);
const PTRACE: SyscallId = SyscallId(101);
const VHANGUP: SyscallId = SyscallId(153);
const EXIT_GROUP: SyscallId = SyscallId(231);
const WAITID: SyscallId = SyscallId(247);
const PSELECT6: SyscallId = SyscallId(270);
const PPOLL: SyscallId = SyscallId(271);
const SECCOMP: SyscallId = SyscallId(317);

/// Syscall ids that are never invoked, not even speculatively.
///
/// Removing an entry that belongs here risks hanging or killing the
/// whole scan; adding one that doesn't silently removes a measurement.
/// Treat any edit to [`ExclusionPolicy::baseline`] as a policy change,
/// not a tweak.
#[derive(Debug, Clone, Default)]
pub struct ExclusionPolicy {
    entries: Vec<(SyscallId, SkipReason)>,
}

impl ExclusionPolicy {
    pub fn new(entries: impl IntoIterator<Item = (SyscallId, SkipReason)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The curated x86_64 set.
    pub fn baseline() -> Self {
        Self::new([
            (RT_SIGRETURN, SkipReason::SignalRace),
            (SELECT, SkipReason::BlocksIndefinitely),
            (PAUSE, SkipReason::BlocksIndefinitely),
            (CLONE, SkipReason::DuplicatesProcess),
            (FORK, SkipReason::DuplicatesProcess),
            (VFORK, SkipReason::DuplicatesProcess),
            (EXIT, SkipReason::TerminatesProcess),
            (PTRACE, SkipReason::TracerRace),
            (VHANGUP, SkipReason::DetachesTerminal),
            (EXIT_GROUP, SkipReason::TerminatesProcess),
            (WAITID, SkipReason::BlocksIndefinitely),
            (PSELECT6, SkipReason::BlocksIndefinitely),
            (PPOLL, SkipReason::BlocksIndefinitely),
            (SECCOMP, SkipReason::AltersOwnFilter),
        ])
    }

    /// Why `id` is excluded, or `None` when it may be probed.
    pub fn reason(&self, id: SyscallId) -> Option<SkipReason> {
        self.entries
            .iter()
            .find(|(excluded, _)| *excluded == id)
            .map(|(_, reason)| *reason)
    }

    pub fn is_excluded(&self, id: SyscallId) -> bool {
        self.reason(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = SyscallId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use std::collections::HashSet;

    #[test]
    fn baseline_ids_match_their_mnemonics() {
        let expected = [
            (RT_SIGRETURN, "RT_SIGRETURN"),
            (SELECT, "SELECT"),
            (PAUSE, "PAUSE"),
            (CLONE, "CLONE"),
            (FORK, "FORK"),
            (VFORK, "VFORK"),
            (EXIT, "EXIT"),
            (PTRACE, "PTRACE"),
            (VHANGUP, "VHANGUP"),
            (EXIT_GROUP, "EXIT_GROUP"),
            (WAITID, "WAITID"),
            (PSELECT6, "PSELECT6"),
            (PPOLL, "PPOLL"),
            (SECCOMP, "SECCOMP"),
        ];
        for (id, name) in expected {
            assert_eq!(catalog::name(id), name);
        }
    }

    #[test]
    fn baseline_has_no_duplicates() {
        let baseline = ExclusionPolicy::baseline();
        let unique: HashSet<_> = baseline.ids().collect();
        assert_eq!(unique.len(), baseline.len());
        assert_eq!(baseline.len(), 14);
    }

    #[test]
    fn membership_and_reasons() {
        let baseline = ExclusionPolicy::baseline();
        assert!(baseline.is_excluded(SECCOMP));
        assert_eq!(baseline.reason(FORK), Some(SkipReason::DuplicatesProcess));
        assert_eq!(baseline.reason(EXIT), Some(SkipReason::TerminatesProcess));
        assert_eq!(baseline.reason(PPOLL), Some(SkipReason::BlocksIndefinitely));
        // getpid is harmless and must stay probeable.
        assert_eq!(baseline.reason(SyscallId(39)), None);
    }

    #[test]
    fn custom_policies_are_injectable() {
        let policy = ExclusionPolicy::new([(SyscallId(5), SkipReason::BlocksIndefinitely)]);
        assert!(policy.is_excluded(SyscallId(5)));
        assert!(!policy.is_excluded(SyscallId(6)));
        assert!(ExclusionPolicy::default().is_empty());
    }
}
