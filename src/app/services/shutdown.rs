#[cfg(test)]
#[path = "shutdown_test.rs"]
mod tests;

use std::sync::{Arc, atomic};
use std::time::Duration;

use eyre::{Result, eyre};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Gives sends that are still waiting for their reply a chance to write it
/// before the process exits.
pub struct ShutdownCoordinator {
    pending_tasks: Arc<atomic::AtomicUsize>,
    timeout: Duration,
}

impl ShutdownCoordinator {
    pub fn new(pending_tasks: Arc<atomic::AtomicUsize>, timeout: Duration) -> Self {
        Self {
            pending_tasks,
            timeout,
        }
    }

    fn pending(&self) -> usize {
        self.pending_tasks.load(atomic::Ordering::SeqCst)
    }

    pub async fn wait(&self) -> Result<()> {
        let drained = async {
            while self.pending() > 0 {
                log::debug!("Waiting for {} pending sends", self.pending());
                tokio::time::sleep(POLL_INTERVAL).await;
            }
        };
        tokio::time::timeout(self.timeout, drained)
            .await
            .map_err(|_| {
                eyre!(
                    "{} sends still pending after {:?}",
                    self.pending(),
                    self.timeout
                )
            })
    }
}
