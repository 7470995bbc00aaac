#![forbid(unsafe_code)]

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("raw syscall probing is not supported on {os}/{arch}")]
    PlatformUnsupported {
        os: &'static str,
        arch: &'static str,
    },

    #[error("probe result channel closed after {received} of {expected} results")]
    ResultChannelClosed { received: usize, expected: usize },
}
