//! Reconcile training data use case
//!
//! Caches upstream training payloads for every edit whose consensus has
//! settled.
//!
//! # Overview
//!
//! 1. **Collect candidates** - edits whose consensus is not unknown, tagged
//!    with whether that consensus is vandalism
//! 2. **Diff** - drop candidates that already have cached training data
//! 3. **Fetch** - download each missing payload (bounded by a timeout and a
//!    concurrency limit) and store it keyed by edit id
//!
//! A failed fetch is logged and recorded in the report; the edit stays
//! missing and is retried by the next run. Storage failures abort the run.
//!
//! Runs are serialised by a lock owned by the use case: a call made while a
//! run is in progress waits for it to finish and then starts its own diff,
//! so it never fetches what the previous run just stored.

use super::shared::review_all;
use crate::config::ReconcileParams;
use crate::error::ReviewError;
use crate::ports::progress::{NoReconcileProgress, ReconcileProgressNotifier};
use crate::ports::review_store::ReviewStore;
use crate::ports::upstream::{SourceError, TrainingDataSource};
use futures::stream::{self, StreamExt};
use reviewng_domain::{EditId, TrainingData};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Summary of one reconciliation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileReport {
    /// Edits with a settled consensus
    pub candidates: usize,
    /// Candidates that already had training data
    pub already_cached: usize,
    /// Payloads fetched and stored during this run
    pub fetched: Vec<EditId>,
    /// Fetches that failed, with the reason
    pub failed: Vec<(EditId, String)>,
}

impl ReconcileReport {
    /// Number of upstream fetches attempted
    pub fn attempted(&self) -> usize {
        self.fetched.len() + self.failed.len()
    }
}

/// Use case for reconciling cached training data
pub struct ReconcileTrainingUseCase {
    store: Arc<dyn ReviewStore>,
    source: Arc<dyn TrainingDataSource>,
    params: ReconcileParams,
    run_lock: Mutex<()>,
}

impl ReconcileTrainingUseCase {
    pub fn new(
        store: Arc<dyn ReviewStore>,
        source: Arc<dyn TrainingDataSource>,
        params: ReconcileParams,
    ) -> Self {
        Self {
            store,
            source,
            params,
            run_lock: Mutex::new(()),
        }
    }

    /// Run a reconciliation without progress reporting
    pub async fn execute(&self) -> Result<ReconcileReport, ReviewError> {
        self.execute_with_progress(&NoReconcileProgress).await
    }

    /// Run a reconciliation with progress callbacks.
    ///
    /// # Errors
    ///
    /// Only [`ReviewError::Storage`]: upstream failures are reported per
    /// edit in [`ReconcileReport::failed`].
    pub async fn execute_with_progress(
        &self,
        progress: &dyn ReconcileProgressNotifier,
    ) -> Result<ReconcileReport, ReviewError> {
        let _guard = self.run_lock.lock().await;

        let candidates = self.settled_edits().await?;
        let cached: HashSet<EditId> = self.store.list_training_data_ids().await?;

        let missing: Vec<(EditId, bool)> = candidates
            .iter()
            .filter(|(id, _)| !cached.contains(id))
            .map(|(id, is_vandalism)| (*id, *is_vandalism))
            .collect();

        let mut report = ReconcileReport {
            candidates: candidates.len(),
            already_cached: candidates.len() - missing.len(),
            ..Default::default()
        };

        info!(
            "Reconciling training data: {} settled, {} cached, {} missing",
            report.candidates,
            report.already_cached,
            missing.len()
        );
        progress.on_fetch_start(missing.len());

        let mut fetches = stream::iter(missing)
            .map(|(id, is_vandalism)| async move { (id, is_vandalism, self.fetch(id).await) })
            .buffer_unordered(self.params.max_concurrent_fetches.max(1));

        while let Some((id, is_vandalism, result)) = fetches.next().await {
            match result {
                Ok(payload) => {
                    self.store
                        .put_training_data(TrainingData::new(id, payload, is_vandalism))
                        .await?;
                    debug!("Stored training data for edit {}", id);
                    progress.on_edit_complete(id, true);
                    report.fetched.push(id);
                }
                Err(e) => {
                    warn!("Failed to fetch training data for edit {}: {}", id, e);
                    progress.on_edit_complete(id, false);
                    report.failed.push((id, e.to_string()));
                }
            }
        }

        report.fetched.sort();
        report.failed.sort();
        progress.on_complete(report.fetched.len(), report.failed.len());
        info!(
            "Reconciliation finished: {} fetched, {} failed",
            report.fetched.len(),
            report.failed.len()
        );

        Ok(report)
    }

    /// Settled edits keyed by id, mapped to "is vandalism"
    async fn settled_edits(&self) -> Result<BTreeMap<EditId, bool>, ReviewError> {
        let mut settled = BTreeMap::new();
        for (_, reviews) in review_all(self.store.as_ref()).await? {
            for review in reviews {
                let consensus = review.consensus();
                if !consensus.is_unknown() {
                    settled.insert(review.edit.id, consensus.is_vandalism());
                }
            }
        }
        Ok(settled)
    }

    async fn fetch(&self, id: EditId) -> Result<reviewng_domain::TrainingPayload, SourceError> {
        match tokio::time::timeout(self.params.fetch_timeout, self.source.fetch(id)).await {
            Ok(result) => result,
            Err(_) => Err(SourceError::Timeout),
        }
    }
}
