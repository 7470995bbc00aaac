use crate::catalog::SyscallId;
use crate::error::Error;
use nix::errno::Errno;
use std::sync::Arc;

/// One raw kernel-trap invocation per call, every argument zeroed.
///
/// A probe only measures whether the call itself gets intercepted, not
/// whether the operation makes sense, so implementations never supply
/// meaningful arguments.
pub trait RawInvoker: Send + Sync {
    /// Fail fast if this platform cannot issue raw syscalls at all.
    fn ensure_supported(&self) -> Result<(), Error>;

    /// Invoke syscall `id` with zeroed arguments. Returns the errno the
    /// kernel answered with, or `None` when the call succeeded.
    fn invoke(&self, id: SyscallId) -> Option<Errno>;
}

/// Issues real syscalls against the running kernel.
#[cfg(all(target_os = "linux", target_arch = "x86_64"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct KernelInvoker;

#[cfg(all(target_os = "linux", target_arch = "x86_64"))]
impl RawInvoker for KernelInvoker {
    fn ensure_supported(&self) -> Result<(), Error> {
        Ok(())
    }

    fn invoke(&self, id: SyscallId) -> Option<Errno> {
        Errno::clear();
        // SAFETY: the kernel validates syscall numbers itself, and with
        // every argument zeroed a call fails its argument checks instead
        // of dereferencing anything. Ids whose mere invocation would harm
        // the scanning process are kept out by the exclusion policy and
        // never reach this point.
        let ret = unsafe {
            libc::syscall(
                id.raw() as libc::c_long,
                0 as libc::c_long,
                0 as libc::c_long,
                0 as libc::c_long,
            )
        };
        if ret == -1 { Some(Errno::last()) } else { None }
    }
}

/// Stands in on platforms without raw syscall support. Every scan fails
/// before a single probe is launched; no partial report is produced.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedInvoker;

impl RawInvoker for UnsupportedInvoker {
    fn ensure_supported(&self) -> Result<(), Error> {
        Err(Error::PlatformUnsupported {
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
        })
    }

    fn invoke(&self, _id: SyscallId) -> Option<Errno> {
        None
    }
}

/// The invoker for the platform this binary was built for.
#[cfg(all(target_os = "linux", target_arch = "x86_64"))]
pub fn native() -> Arc<dyn RawInvoker> {
    Arc::new(KernelInvoker)
}

#[cfg(not(all(target_os = "linux", target_arch = "x86_64")))]
pub fn native() -> Arc<dyn RawInvoker> {
    Arc::new(UnsupportedInvoker)
}
