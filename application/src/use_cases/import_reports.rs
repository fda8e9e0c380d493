//! Import reported edits use case
//!
//! Pulls the list of revisions reported through the report interface and
//! creates an edit for each one not yet known. Re-running with the same list
//! creates nothing new.

use crate::config::ImportParams;
use crate::error::ReviewError;
use crate::ports::review_store::ReviewStore;
use crate::ports::upstream::ReportSource;
use reviewng_domain::{Classification, Edit, EditId};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of one import run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Edits created by this run
    pub created: Vec<EditId>,
    /// Listed ids that already existed
    pub already_known: usize,
    /// Lines that were not a revision id
    pub invalid: usize,
}

/// Use case for importing reported edits
pub struct ImportReportsUseCase {
    store: Arc<dyn ReviewStore>,
    source: Arc<dyn ReportSource>,
    params: ImportParams,
}

impl ImportReportsUseCase {
    pub fn new(
        store: Arc<dyn ReviewStore>,
        source: Arc<dyn ReportSource>,
        params: ImportParams,
    ) -> Self {
        Self {
            store,
            source,
            params,
        }
    }

    /// Import the current report list.
    ///
    /// # Errors
    ///
    /// - [`ReviewError::NotFound`] - the import group does not exist
    /// - [`ReviewError::UpstreamUnavailable`] - the report list could not be fetched
    /// - [`ReviewError::Storage`] - the store failed
    pub async fn execute(&self) -> Result<ImportSummary, ReviewError> {
        let group = self
            .store
            .find_group_by_name(&self.params.group_name)
            .await?
            .ok_or_else(|| ReviewError::group_name_not_found(&self.params.group_name))?;

        let body = self.source.fetch_reported().await?;
        let mut known: HashSet<EditId> = self.store.list_edit_ids().await?;
        let mut summary = ImportSummary::default();

        for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let id: EditId = match line.parse() {
                Ok(id) => id,
                Err(_) => {
                    warn!("Ignoring malformed report line: {:?}", line);
                    summary.invalid += 1;
                    continue;
                }
            };

            if !known.insert(id) {
                summary.already_known += 1;
                continue;
            }

            let edit = Edit::new(
                id,
                self.params.default_required,
                Classification::Constructive,
            )?;
            self.store.create_edit(edit, group.id).await?;
            debug!("Imported reported edit {} into '{}'", id, group.name);
            summary.created.push(id);
        }

        info!(
            "Report import: {} created, {} already known, {} invalid",
            summary.created.len(),
            summary.already_known,
            summary.invalid
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::upstream::SourceError;
    use crate::test_support::{MockReportSource, MockStore};
    use reviewng_domain::GroupId;

    fn use_case(store: Arc<MockStore>, body: &str) -> ImportReportsUseCase {
        ImportReportsUseCase::new(
            store,
            Arc::new(MockReportSource {
                body: Ok(body.to_string()),
            }),
            ImportParams::default(),
        )
    }

    #[tokio::test]
    async fn test_creates_unknown_ids_in_import_group() {
        let store = Arc::new(
            MockStore::new()
                .with_group(1, "Main", 0)
                .with_group(7, "Report Interface Import", 2)
                .with_edit(1, 100, 2),
        );
        let use_case = use_case(store.clone(), "100\n200\n\n  300  \nnot-an-id\n200\n");

        let summary = use_case.execute().await.unwrap();

        assert_eq!(summary.created, vec![EditId::new(200), EditId::new(300)]);
        assert_eq!(summary.already_known, 2);
        assert_eq!(summary.invalid, 1);
        assert_eq!(store.edit_group(200), Some(GroupId::new(7)));
        assert_eq!(store.edit_group(100), Some(GroupId::new(1)));

        let edit = store.get_edit(EditId::new(300)).await.unwrap().unwrap();
        assert_eq!(edit.required, 2);
        assert_eq!(edit.classification, Classification::Constructive);
    }

    #[tokio::test]
    async fn test_rerun_creates_nothing() {
        let store = Arc::new(MockStore::new().with_group(7, "Report Interface Import", 2));
        let use_case = use_case(store, "5\n6\n");

        assert_eq!(use_case.execute().await.unwrap().created.len(), 2);

        let summary = use_case.execute().await.unwrap();
        assert!(summary.created.is_empty());
        assert_eq!(summary.already_known, 2);
    }

    #[tokio::test]
    async fn test_missing_group_is_not_found() {
        let store = Arc::new(MockStore::new());
        let err = use_case(store, "5\n").execute().await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_upstream_failure_surfaces() {
        let store = Arc::new(MockStore::new().with_group(7, "Report Interface Import", 2));
        let use_case = ImportReportsUseCase::new(
            store,
            Arc::new(MockReportSource {
                body: Err(SourceError::Status(502)),
            }),
            ImportParams::default(),
        );

        let err = use_case.execute().await.unwrap_err();
        assert_eq!(err, ReviewError::UpstreamUnavailable(SourceError::Status(502)));
    }
}
