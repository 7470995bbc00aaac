use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use std::time::Duration;

#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Probe {
    /// How long a single syscall probe may wait for the kernel to answer
    /// before the call is written off as blocking. **Measured in
    /// milliseconds**.
    ///
    /// ## Note
    ///
    /// Denied calls return immediately, so this only needs to cover
    /// scheduler noise. Raising it makes scans slower on kernels where
    /// many allowed calls genuinely block; lowering it too far turns
    /// slow-but-answered calls into false timeouts.
    #[serde_as(as = "serde_with::DurationMilliSeconds")]
    pub timeout: Duration,
}

impl Default for Probe {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(100),
        }
    }
}
