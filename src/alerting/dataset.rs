use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::domain::{
    AssignedProtocol, BatteryResult, CompanyRef, ExamOrder, LegalDocument, Prescription,
    PrescriptionOrigin, PrescriptionStatus, ProtocolEvaluation, ReportRef, WorkerExamRecord,
};

/// Serialized snapshot of the store slices the engine reads.
///
/// This is the JSON export format accepted by the CLI and the default server
/// wiring; a production deployment replaces it with a database-backed
/// [`ComplianceStore`](super::store::ComplianceStore).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetSnapshot {
    pub prescriptions: Vec<Prescription>,
    pub protocol_evaluations: Vec<ProtocolEvaluation>,
    pub legal_documents: Vec<LegalDocument>,
    pub worker_exams: Vec<WorkerExamRecord>,
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dataset {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DatasetSnapshot {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Built-in sample with one record per alert source, dated relative to
    /// `reference` so the demo output is stable for any pinned date.
    pub fn sample(reference: NaiveDate) -> Self {
        let company = CompanyRef {
            id: 1,
            name: "Minera Austral".to_string(),
        };

        Self {
            prescriptions: vec![
                Prescription {
                    id: 301,
                    description: "Instalar extracción localizada en chancado".to_string(),
                    risk_agent_name: "Sílice".to_string(),
                    implementation_date: Some(reference - Duration::days(10)),
                    status: PrescriptionStatus::EnProceso,
                    origin: PrescriptionOrigin::TechnicalReport(ReportRef {
                        id: 901,
                        company: company.clone(),
                    }),
                },
                Prescription {
                    id: 302,
                    description: "Renovar protectores auditivos".to_string(),
                    risk_agent_name: "Ruido".to_string(),
                    implementation_date: Some(reference + Duration::days(90)),
                    status: PrescriptionStatus::Pendiente,
                    origin: PrescriptionOrigin::QuantitativeReport(ReportRef {
                        id: 950,
                        company: company.clone(),
                    }),
                },
            ],
            protocol_evaluations: vec![ProtocolEvaluation {
                id: 11,
                name: "GES Chancado primario".to_string(),
                next_evaluation_date: Some(reference + Duration::days(20)),
                technical_report_id: Some(901),
                company: Some(company.clone()),
            }],
            legal_documents: vec![LegalDocument {
                id: 901,
                report_number: "IT-4571".to_string(),
                report_date: reference - Duration::days(745),
                company: company.clone(),
            }],
            worker_exams: vec![WorkerExamRecord {
                worker_id: 77,
                worker_name: "Rosa Cortés".to_string(),
                rut: "12.345.678-9".to_string(),
                company,
                protocol: Some(AssignedProtocol {
                    ges_id: 11,
                    validity_years: Some(1),
                }),
                last_closed_order: Some(ExamOrder {
                    id: 5001,
                    scheduled_at: Some(reference - Duration::days(340)),
                    updated_at: reference - Duration::days(335),
                    batteries: vec![
                        BatteryResult {
                            name: "Batería sílice".to_string(),
                            expiration_date: Some(reference + Duration::days(30)),
                        },
                        BatteryResult {
                            name: "Audiometría".to_string(),
                            expiration_date: None,
                        },
                    ],
                }),
            }],
        }
    }
}
