use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::alerting::dataset::DatasetSnapshot;
use crate::alerting::domain::{
    AssignedProtocol, BatteryResult, CompanyRef, ExamOrder, LegalDocument, Prescription,
    PrescriptionOrigin, PrescriptionStatus, ProtocolEvaluation, ReportRef, WorkerExamRecord,
};
use crate::alerting::store::{ComplianceStore, StoreError};
use crate::alerting::{AlertingConfig, InMemoryComplianceStore};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn now() -> NaiveDate {
    date(2025, 1, 15)
}

pub(super) fn config() -> AlertingConfig {
    AlertingConfig::default()
}

pub(super) fn company() -> CompanyRef {
    CompanyRef {
        id: 1,
        name: "Minera Austral".to_string(),
    }
}

pub(super) fn prescription(
    id: i64,
    due: Option<NaiveDate>,
    status: PrescriptionStatus,
    report_id: i64,
) -> Prescription {
    Prescription {
        id,
        description: format!("medida {id}"),
        risk_agent_name: "Sílice".to_string(),
        implementation_date: due,
        status,
        origin: PrescriptionOrigin::TechnicalReport(ReportRef {
            id: report_id,
            company: company(),
        }),
    }
}

pub(super) fn protocol(
    id: i64,
    next_evaluation_date: Option<NaiveDate>,
    technical_report_id: Option<i64>,
) -> ProtocolEvaluation {
    ProtocolEvaluation {
        id,
        name: format!("GES {id}"),
        next_evaluation_date,
        technical_report_id,
        company: Some(company()),
    }
}

pub(super) fn broken_protocol(id: i64, next_evaluation_date: NaiveDate) -> ProtocolEvaluation {
    ProtocolEvaluation {
        id,
        name: format!("GES {id}"),
        next_evaluation_date: Some(next_evaluation_date),
        technical_report_id: None,
        company: None,
    }
}

pub(super) fn legal_document(id: i64, report_date: NaiveDate) -> LegalDocument {
    LegalDocument {
        id,
        report_number: format!("IT-{id}"),
        report_date,
        company: company(),
    }
}

pub(super) fn battery(name: &str, expiration_date: Option<NaiveDate>) -> BatteryResult {
    BatteryResult {
        name: name.to_string(),
        expiration_date,
    }
}

pub(super) fn order(
    scheduled_at: Option<NaiveDate>,
    updated_at: NaiveDate,
    batteries: Vec<BatteryResult>,
) -> ExamOrder {
    ExamOrder {
        id: 5001,
        scheduled_at,
        updated_at,
        batteries,
    }
}

pub(super) fn worker(
    worker_id: i64,
    last_closed_order: Option<ExamOrder>,
    protocol: Option<AssignedProtocol>,
) -> WorkerExamRecord {
    WorkerExamRecord {
        worker_id,
        worker_name: "Rosa Cortés".to_string(),
        rut: "12.345.678-9".to_string(),
        company: company(),
        protocol,
        last_closed_order,
    }
}

pub(super) fn assigned_protocol(validity_years: Option<u32>) -> AssignedProtocol {
    AssignedProtocol {
        ges_id: 11,
        validity_years,
    }
}

pub(super) fn store_from(snapshot: DatasetSnapshot) -> InMemoryComplianceStore {
    InMemoryComplianceStore::from_snapshot(snapshot)
}

/// Store wrapper capturing the id sets handed to the reverse lookup.
pub(super) struct RecordingStore {
    inner: InMemoryComplianceStore,
    requested_report_ids: Arc<Mutex<Vec<Vec<i64>>>>,
}

impl RecordingStore {
    pub(super) fn new(snapshot: DatasetSnapshot) -> Self {
        Self {
            inner: InMemoryComplianceStore::from_snapshot(snapshot),
            requested_report_ids: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(super) fn requested_report_ids(&self) -> Vec<Vec<i64>> {
        self.requested_report_ids
            .lock()
            .expect("recording mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl ComplianceStore for RecordingStore {
    async fn pending_prescriptions(&self) -> Result<Vec<Prescription>, StoreError> {
        self.inner.pending_prescriptions().await
    }

    async fn protocols_due_for_review(&self) -> Result<Vec<ProtocolEvaluation>, StoreError> {
        self.inner.protocols_due_for_review().await
    }

    async fn protocols_by_technical_reports(
        &self,
        report_ids: &[i64],
    ) -> Result<Vec<ProtocolEvaluation>, StoreError> {
        self.requested_report_ids
            .lock()
            .expect("recording mutex poisoned")
            .push(report_ids.to_vec());
        self.inner.protocols_by_technical_reports(report_ids).await
    }

    async fn legal_documents(&self) -> Result<Vec<LegalDocument>, StoreError> {
        self.inner.legal_documents().await
    }

    async fn active_worker_exams(&self) -> Result<Vec<WorkerExamRecord>, StoreError> {
        self.inner.active_worker_exams().await
    }
}

pub(super) struct UnavailableStore;

#[async_trait]
impl ComplianceStore for UnavailableStore {
    async fn pending_prescriptions(&self) -> Result<Vec<Prescription>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    async fn protocols_due_for_review(&self) -> Result<Vec<ProtocolEvaluation>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    async fn protocols_by_technical_reports(
        &self,
        _report_ids: &[i64],
    ) -> Result<Vec<ProtocolEvaluation>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    async fn legal_documents(&self) -> Result<Vec<LegalDocument>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    async fn active_worker_exams(&self) -> Result<Vec<WorkerExamRecord>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}
