use serde::{Deserialize, Serialize};

const DOCUMENT_WARNING_DAYS: i64 = 30;
const EXAM_WARNING_DAYS: i64 = 45;
const LEGAL_VALIDITY_DAYS: i64 = 730;
const DEFAULT_EXAM_VALIDITY_YEARS: u32 = 1;

/// Tunables governing classification windows and derived validity spans.
///
/// Exams get a longer warning window than documents because scheduling a
/// replacement exam takes longer than filing paperwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertingConfig {
    pub document_warning_days: i64,
    pub exam_warning_days: i64,
    pub legal_validity_days: i64,
    /// Fallback for protocols that do not declare their own exam validity.
    pub default_exam_validity_years: u32,
}

impl Default for AlertingConfig {
    fn default() -> Self {
        Self {
            document_warning_days: DOCUMENT_WARNING_DAYS,
            exam_warning_days: EXAM_WARNING_DAYS,
            legal_validity_days: LEGAL_VALIDITY_DAYS,
            default_exam_validity_years: DEFAULT_EXAM_VALIDITY_YEARS,
        }
    }
}
