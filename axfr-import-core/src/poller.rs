//! Change submission and convergence polling
//!
//! ```text
//! SUBMITTING ──▶ PENDING ──(interval)──▶ PENDING ──▶ ... ──▶ INSYNC
//!                     └───────── timeout / cancel ─────────────┘
//! ```
//!
//! Every status (the submission response included) is passed to the caller's
//! `on_status` callback before the next wait.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axfr_import_provider::{ChangeBatch, ChangeInfo, HostedZoneProvider};

use crate::error::{CoreError, CoreResult};

/// Default wait between two status queries
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Polling configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOptions {
    /// Wait before each status query
    pub interval: Duration,
    /// Overall limit on the wait; `None` waits forever
    pub timeout: Option<Duration>,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            timeout: None,
        }
    }
}

/// Submits change batches and waits for them to propagate.
pub struct ConvergencePoller {
    provider: Arc<dyn HostedZoneProvider>,
    options: PollOptions,
}

impl ConvergencePoller {
    #[must_use]
    pub fn new(provider: Arc<dyn HostedZoneProvider>, options: PollOptions) -> Self {
        Self { provider, options }
    }

    pub fn options(&self) -> PollOptions {
        self.options
    }

    /// Submits `batch` to `zone_id`. No retry.
    pub async fn submit(&self, zone_id: &str, batch: &ChangeBatch) -> CoreResult<ChangeInfo> {
        log::info!(
            "Submitting {} change(s) to hosted zone {zone_id}",
            batch.len()
        );
        let info = self
            .provider
            .change_record_sets(zone_id, batch)
            .await
            .map_err(CoreError::Submission)?;
        log::debug!("Change {} submitted: {}", info.id, info.status);
        Ok(info)
    }

    /// Reports `submitted`, then polls until the change is `INSYNC`.
    ///
    /// Ends early with [`CoreError::PollTimeout`] once the configured timeout
    /// elapses, or with [`CoreError::PollCancelled`] when `cancel` completes.
    pub async fn wait_for_insync<F, C>(
        &self,
        submitted: ChangeInfo,
        mut on_status: F,
        cancel: C,
    ) -> CoreResult<ChangeInfo>
    where
        F: FnMut(&ChangeInfo),
        C: Future<Output = ()>,
    {
        on_status(&submitted);
        if submitted.status.is_terminal() {
            return Ok(submitted);
        }

        let change_id = submitted.id;
        let deadline = async {
            match self.options.timeout {
                Some(timeout) => tokio::time::sleep(timeout).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            res = self.poll_until_insync(&change_id, &mut on_status) => res,
            () = cancel => {
                log::warn!("Stopped waiting for change {change_id}");
                Err(CoreError::PollCancelled(change_id.clone()))
            }
            () = deadline => Err(CoreError::PollTimeout(change_id.clone())),
        }
    }

    /// [`submit`](Self::submit) followed by [`wait_for_insync`](Self::wait_for_insync).
    pub async fn submit_and_wait<F, C>(
        &self,
        zone_id: &str,
        batch: &ChangeBatch,
        on_status: F,
        cancel: C,
    ) -> CoreResult<ChangeInfo>
    where
        F: FnMut(&ChangeInfo),
        C: Future<Output = ()>,
    {
        let submitted = self.submit(zone_id, batch).await?;
        self.wait_for_insync(submitted, on_status, cancel).await
    }

    async fn poll_until_insync<F>(&self, change_id: &str, on_status: &mut F) -> CoreResult<ChangeInfo>
    where
        F: FnMut(&ChangeInfo),
    {
        loop {
            tokio::time::sleep(self.options.interval).await;

            let info = self
                .provider
                .get_change(change_id)
                .await
                .map_err(|source| CoreError::Poll {
                    change_id: change_id.to_string(),
                    source,
                })?;

            log::debug!("Change {change_id} is {}", info.status);
            on_status(&info);

            if info.status.is_terminal() {
                return Ok(info);
            }
        }
    }
}
