use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle state derived for a tracked deadline.
///
/// `Vigente` never leaves the extractors; the feed only carries the other two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertStatus {
    Vigente,
    PorVencer,
    Vencido,
}

impl AlertStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vigente => "Vigente",
            Self::PorVencer => "Por vencer",
            Self::Vencido => "Vencido",
        }
    }
}

/// Discriminant for the four alert sources feeding the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    Prescription,
    ProtocolValidity,
    LegalDocument,
    WorkerExam,
}

impl AlertKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Prescription => "Medida correctiva",
            Self::ProtocolValidity => "Vigencia de GES",
            Self::LegalDocument => "Informe técnico",
            Self::WorkerExam => "Examen ocupacional",
        }
    }
}

/// Identifiers a consumer needs to navigate straight to the offending record.
///
/// Generated per alert, never stored. Absent fields mean the deep-link degrades
/// for that dimension; the alert itself is still emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RedirectData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ges_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_rut: Option<String>,
}

/// Single entry of the compliance feed, shared by all four sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub id: i64,
    pub title: String,
    pub company: String,
    pub date: NaiveDate,
    /// Days between `date` and the evaluation date; negative means overdue.
    pub days_left: i64,
    pub status: AlertStatus,
    pub details: String,
    pub redirect_data: RedirectData,
}

/// Company reached through whichever join the source record requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRef {
    pub id: i64,
    pub name: String,
}

/// Originating report of a corrective-action prescription, with its company
/// already joined by the store query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRef {
    pub id: i64,
    pub company: CompanyRef,
}

/// A prescription hangs off exactly one report; the upstream schema enforces
/// that it is never both or neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrescriptionOrigin {
    TechnicalReport(ReportRef),
    QuantitativeReport(ReportRef),
}

impl PrescriptionOrigin {
    pub fn label(&self) -> &'static str {
        match self {
            Self::TechnicalReport(_) => "Informe técnico",
            Self::QuantitativeReport(_) => "Informe cuantitativo",
        }
    }

    pub fn report(&self) -> &ReportRef {
        match self {
            Self::TechnicalReport(report) | Self::QuantitativeReport(report) => report,
        }
    }
}

/// Business status a prescription carries in the store, independent of the
/// lifecycle state this engine derives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrescriptionStatus {
    Pendiente,
    EnProceso,
    Realizada,
    Vencida,
}

/// Corrective action mandated by a risk finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: i64,
    pub description: String,
    pub risk_agent_name: String,
    pub implementation_date: Option<NaiveDate>,
    pub status: PrescriptionStatus,
    pub origin: PrescriptionOrigin,
}

/// Exposure-group (GES) record subject to periodic revalidation.
///
/// `company` is `None` when the area→site→company chain is broken upstream;
/// the extractor drops such records with a warning instead of aborting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolEvaluation {
    pub id: i64,
    pub name: String,
    pub next_evaluation_date: Option<NaiveDate>,
    pub technical_report_id: Option<i64>,
    pub company: Option<CompanyRef>,
}

/// Qualitative technical report with a statutory validity window.
///
/// The store carries no expiration column; the engine derives it from
/// `report_date` plus the configured legal validity span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalDocument {
    pub id: i64,
    pub report_number: String,
    pub report_date: NaiveDate,
    pub company: CompanyRef,
}

/// Named bundle of medical exams inside an order, independently dated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryResult {
    pub name: String,
    pub expiration_date: Option<NaiveDate>,
}

/// Most recent exam order of a worker that reached a terminal state
/// (REALIZADO or CERRADO).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamOrder {
    pub id: i64,
    pub scheduled_at: Option<NaiveDate>,
    pub updated_at: NaiveDate,
    pub batteries: Vec<BatteryResult>,
}

/// Exposure group a worker is currently assigned to, carrying the exam
/// validity span that backs the calculated due-date tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedProtocol {
    pub ges_id: i64,
    pub validity_years: Option<u32>,
}

/// Active-roster worker joined to their assigned protocol and last closed
/// exam order. Workers missing either are skipped by the exam extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerExamRecord {
    pub worker_id: i64,
    pub worker_name: String,
    pub rut: String,
    pub company: CompanyRef,
    pub protocol: Option<AssignedProtocol>,
    pub last_closed_order: Option<ExamOrder>,
}

/// Which evidence tier produced a worker-exam due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamDueSource {
    Medico,
    Calculado,
}

impl ExamDueSource {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Medico => "Médico",
            Self::Calculado => "Calculado",
        }
    }
}
