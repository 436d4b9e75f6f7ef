use chrono::NaiveDate;
use tracing::warn;

use crate::alerting::classify::{classify, days_left};
use crate::alerting::config::AlertingConfig;
use crate::alerting::domain::{Alert, AlertKind, AlertStatus, RedirectData};
use crate::alerting::store::{ComplianceStore, StoreError};

/// Scans exposure-group protocol evaluations against their scheduled
/// revalidation date using the documents window.
pub struct ProtocolValidityExtractor {
    config: AlertingConfig,
}

impl ProtocolValidityExtractor {
    pub fn new(config: AlertingConfig) -> Self {
        Self { config }
    }

    pub async fn extract<S: ComplianceStore + ?Sized>(
        &self,
        store: &S,
        now: NaiveDate,
    ) -> Result<Vec<Alert>, StoreError> {
        let evaluations = store.protocols_due_for_review().await?;

        let mut alerts = Vec::new();
        for evaluation in evaluations {
            let Some(due) = evaluation.next_evaluation_date else {
                continue;
            };

            // A broken area→site→company chain is a data-integrity fault in
            // that one record, not a reason to abort the feed.
            let Some(company) = evaluation.company.as_ref() else {
                warn!(
                    evaluation_id = evaluation.id,
                    "dropping protocol evaluation with broken company chain"
                );
                continue;
            };

            let status = classify(due, now, self.config.document_warning_days);
            if status == AlertStatus::Vigente {
                continue;
            }

            alerts.push(Alert {
                kind: AlertKind::ProtocolValidity,
                id: evaluation.id,
                title: format!("GES: {}", evaluation.name),
                company: company.name.clone(),
                date: due,
                days_left: days_left(due, now),
                status,
                details: format!("Reevaluación del protocolo programada para {due}"),
                redirect_data: RedirectData {
                    company_id: Some(company.id),
                    ges_id: Some(evaluation.id),
                    ..RedirectData::default()
                },
            });
        }
        Ok(alerts)
    }
}
