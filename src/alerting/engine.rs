use std::sync::Arc;

use chrono::NaiveDate;

use super::aggregate::{self, AlertFeed};
use super::config::AlertingConfig;
use super::extract::{
    LegalDocumentExtractor, PrescriptionExtractor, ProtocolValidityExtractor, WorkerExamExtractor,
};
use super::store::{ComplianceStore, StoreError};

/// Facade orchestrating the four extractors; the only unit callers touch.
///
/// The computation is single-shot, request-scoped, and read-only: extractors
/// fan out concurrently, each returning an immutable batch that is only
/// combined at the aggregator.
pub struct AlertEngine<S> {
    store: Arc<S>,
    prescriptions: PrescriptionExtractor,
    protocols: ProtocolValidityExtractor,
    legal: LegalDocumentExtractor,
    exams: WorkerExamExtractor,
}

impl<S: ComplianceStore> AlertEngine<S> {
    pub fn new(store: Arc<S>, config: AlertingConfig) -> Self {
        Self {
            store,
            prescriptions: PrescriptionExtractor::new(config),
            protocols: ProtocolValidityExtractor::new(config),
            legal: LegalDocumentExtractor::new(config),
            exams: WorkerExamExtractor::new(config),
        }
    }

    /// Compute the prioritized feed as of `now`.
    ///
    /// Latency is bounded by the slowest extractor, not their sum. Any store
    /// failure aborts the whole computation; a partial feed would silently
    /// under-report and is worse than an explicit error.
    pub async fn compute(&self, now: NaiveDate) -> Result<AlertFeed, ComputationError> {
        let store = self.store.as_ref();
        let (prescriptions, protocols, legal, exams) = tokio::try_join!(
            self.prescriptions.extract(store, now),
            self.protocols.extract(store, now),
            self.legal.extract(store, now),
            self.exams.extract(store, now),
        )?;

        Ok(aggregate::merge(vec![prescriptions, protocols, legal, exams]))
    }
}

/// Terminal failure of a feed computation.
#[derive(Debug, thiserror::Error)]
pub enum ComputationError {
    #[error("compliance feed computation failed: {0}")]
    Store(#[from] StoreError),
}
