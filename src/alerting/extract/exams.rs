use chrono::{Months, NaiveDate};

use crate::alerting::classify::{classify, days_left};
use crate::alerting::config::AlertingConfig;
use crate::alerting::domain::{
    Alert, AlertKind, AlertStatus, ExamDueSource, RedirectData, WorkerExamRecord,
};
use crate::alerting::store::{ComplianceStore, StoreError};

/// Scans worker medical-exam expirations using the exams window.
///
/// Due-date derivation has two tiers in strict priority order: explicit
/// battery expirations (the soonest-expiring battery dominates), and only
/// when none exist, a calculated date from the exam-performed date plus the
/// protocol's validity span.
pub struct WorkerExamExtractor {
    config: AlertingConfig,
}

impl WorkerExamExtractor {
    pub fn new(config: AlertingConfig) -> Self {
        Self { config }
    }

    pub async fn extract<S: ComplianceStore + ?Sized>(
        &self,
        store: &S,
        now: NaiveDate,
    ) -> Result<Vec<Alert>, StoreError> {
        let records = store.active_worker_exams().await?;

        let mut alerts = Vec::new();
        for record in records {
            // Workers without a closed order or an assigned protocol are
            // skipped entirely; there is nothing to track for them.
            let Some((due, source)) = self.due_date(&record) else {
                continue;
            };

            let status = classify(due, now, self.config.exam_warning_days);
            if status == AlertStatus::Vigente {
                continue;
            }

            alerts.push(Alert {
                kind: AlertKind::WorkerExam,
                id: record.worker_id,
                title: format!("Exámenes: {}", record.worker_name),
                company: record.company.name.clone(),
                date: due,
                days_left: days_left(due, now),
                status,
                details: format!("Fuente del vencimiento: {}", source.label()),
                redirect_data: RedirectData {
                    company_id: Some(record.company.id),
                    worker_id: Some(record.worker_id),
                    worker_rut: Some(record.rut.clone()),
                    ..RedirectData::default()
                },
            });
        }
        Ok(alerts)
    }

    fn due_date(&self, record: &WorkerExamRecord) -> Option<(NaiveDate, ExamDueSource)> {
        let order = record.last_closed_order.as_ref()?;
        let protocol = record.protocol.as_ref()?;

        // Medical evidence tier: the soonest-expiring dated battery wins.
        if let Some(due) = order
            .batteries
            .iter()
            .filter_map(|battery| battery.expiration_date)
            .min()
        {
            return Some((due, ExamDueSource::Medico));
        }

        // Calculated fallback tier: exam-performed date plus validity years.
        let performed = order.scheduled_at.unwrap_or(order.updated_at);
        let years = protocol
            .validity_years
            .unwrap_or(self.config.default_exam_validity_years);
        let months = years.checked_mul(12)?;
        let due = performed.checked_add_months(Months::new(months))?;
        Some((due, ExamDueSource::Calculado))
    }
}
