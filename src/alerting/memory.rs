use async_trait::async_trait;

use super::dataset::DatasetSnapshot;
use super::domain::{
    LegalDocument, Prescription, PrescriptionStatus, ProtocolEvaluation, WorkerExamRecord,
};
use super::store::{ComplianceStore, StoreError};

/// Snapshot-backed store used by the CLI, the default server wiring, and
/// tests. Applies the same query-level filters a SQL-backed store would.
#[derive(Debug, Default, Clone)]
pub struct InMemoryComplianceStore {
    prescriptions: Vec<Prescription>,
    protocol_evaluations: Vec<ProtocolEvaluation>,
    legal_documents: Vec<LegalDocument>,
    worker_exams: Vec<WorkerExamRecord>,
}

impl InMemoryComplianceStore {
    pub fn from_snapshot(snapshot: DatasetSnapshot) -> Self {
        Self {
            prescriptions: snapshot.prescriptions,
            protocol_evaluations: snapshot.protocol_evaluations,
            legal_documents: snapshot.legal_documents,
            worker_exams: snapshot.worker_exams,
        }
    }
}

#[async_trait]
impl ComplianceStore for InMemoryComplianceStore {
    async fn pending_prescriptions(&self) -> Result<Vec<Prescription>, StoreError> {
        Ok(self
            .prescriptions
            .iter()
            .filter(|prescription| prescription.status != PrescriptionStatus::Realizada)
            .cloned()
            .collect())
    }

    async fn protocols_due_for_review(&self) -> Result<Vec<ProtocolEvaluation>, StoreError> {
        Ok(self
            .protocol_evaluations
            .iter()
            .filter(|evaluation| evaluation.next_evaluation_date.is_some())
            .cloned()
            .collect())
    }

    async fn protocols_by_technical_reports(
        &self,
        report_ids: &[i64],
    ) -> Result<Vec<ProtocolEvaluation>, StoreError> {
        Ok(self
            .protocol_evaluations
            .iter()
            .filter(|evaluation| {
                evaluation
                    .technical_report_id
                    .is_some_and(|id| report_ids.contains(&id))
            })
            .cloned()
            .collect())
    }

    async fn legal_documents(&self) -> Result<Vec<LegalDocument>, StoreError> {
        Ok(self.legal_documents.clone())
    }

    async fn active_worker_exams(&self) -> Result<Vec<WorkerExamRecord>, StoreError> {
        Ok(self.worker_exams.clone())
    }
}
