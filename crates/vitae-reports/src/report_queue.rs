//! Report queue - violation reports kept on the device.
//!
//! Reports live as one JSON array under [`REPORTS_KEY`], oldest first.
//! Like the account store, failures are logged and never returned.

use crate::{ReportError, Result as ReportResult};

use std::sync::Arc;

use chrono::Utc;
use log::{debug, error, info, warn};
use tokio::sync::Mutex;
use vitae_core::{ReportDraft, Session, ViolationReport};
use vitae_storage::keys::REPORTS_KEY;
use vitae_storage::{KeyValueStore, read_json, write_json};

pub struct ReportQueue {
    storage: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl ReportQueue {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            write_lock: Mutex::new(()),
        }
    }

    /// Finalize `draft` and append it to the queue.
    ///
    /// `reporter` is the current session, if any. It is ignored for
    /// anonymous drafts. Returns `None` when the queue cannot be read or
    /// written; a malformed queue is never overwritten.
    pub async fn submit(
        &self,
        draft: ReportDraft,
        reporter: Option<&Session>,
    ) -> Option<ViolationReport> {
        let _guard = self.write_lock.lock().await;

        let mut reports = match self.load().await {
            Ok(reports) => reports,
            Err(e) => {
                error!("Report submission failed: {e}");
                return None;
            }
        };

        let report = ViolationReport::from_draft(draft, reporter, Utc::now());
        reports.push(report.clone());

        if let Err(e) = self.save(&reports).await {
            error!("Report submission failed: {e}");
            return None;
        }

        info!(
            "Queued {} report {} ({})",
            report.kind,
            report.id,
            if report.anonymous {
                "anonymous"
            } else {
                "identified"
            }
        );
        Some(report)
    }

    /// Queued reports in submission order.
    pub async fn list(&self) -> Vec<ViolationReport> {
        match self.load().await {
            Ok(reports) => {
                debug!("Loaded {} queued reports", reports.len());
                reports
            }
            Err(e) if e.is_corrupted() => {
                warn!("Ignoring malformed report queue: {e}");
                Vec::new()
            }
            Err(e) => {
                error!("Failed to read report queue: {e}");
                Vec::new()
            }
        }
    }

    async fn load(&self) -> ReportResult<Vec<ViolationReport>> {
        read_json::<Vec<ViolationReport>>(self.storage.as_ref(), REPORTS_KEY)
            .await
            .map(Option::unwrap_or_default)
            .map_err(ReportError::queue)
    }

    async fn save(&self, reports: &[ViolationReport]) -> ReportResult<()> {
        write_json(self.storage.as_ref(), REPORTS_KEY, reports)
            .await
            .map_err(ReportError::queue)
    }
}
