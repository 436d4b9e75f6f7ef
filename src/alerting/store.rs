use async_trait::async_trait;

use super::domain::{LegalDocument, Prescription, ProtocolEvaluation, WorkerExamRecord};

/// Read-only query capabilities the engine requires from the data store.
///
/// The transport behind these queries is not the engine's concern; every
/// implementation is expected to return the joins described per method so
/// extractors never issue follow-up per-record reads.
#[async_trait]
pub trait ComplianceStore: Send + Sync {
    /// Prescriptions whose business status is not `REALIZADA`, joined to
    /// their originating report and that report's company.
    async fn pending_prescriptions(&self) -> Result<Vec<Prescription>, StoreError>;

    /// Protocol evaluations with a scheduled next evaluation date, joined
    /// through area → work site → company.
    async fn protocols_due_for_review(&self) -> Result<Vec<ProtocolEvaluation>, StoreError>;

    /// Reverse lookup: protocol evaluations whose `technical_report_id` is in
    /// `report_ids`. One batched call replaces per-record N+1 queries.
    async fn protocols_by_technical_reports(
        &self,
        report_ids: &[i64],
    ) -> Result<Vec<ProtocolEvaluation>, StoreError>;

    /// All legal technical reports with their company joined.
    async fn legal_documents(&self) -> Result<Vec<LegalDocument>, StoreError>;

    /// Active-roster workers with an assigned protocol evaluation, joined to
    /// their company and most recent terminal-state exam order (batteries
    /// included).
    async fn active_worker_exams(&self) -> Result<Vec<WorkerExamRecord>, StoreError>;
}

/// Store failures are terminal for the current computation; a half-computed
/// compliance feed must never be returned.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("data store unavailable: {0}")]
    Unavailable(String),
    #[error("query failed: {0}")]
    Query(String),
}
