use chrono::NaiveDate;

use crate::alerting::classify::{classify, days_left};
use crate::alerting::config::AlertingConfig;
use crate::alerting::domain::{Alert, AlertKind, AlertStatus, RedirectData};
use crate::alerting::resolver::ParentLinkResolver;
use crate::alerting::store::{ComplianceStore, StoreError};

/// Scans corrective-action prescriptions against their implementation
/// deadline using the documents window.
pub struct PrescriptionExtractor {
    config: AlertingConfig,
}

impl PrescriptionExtractor {
    pub fn new(config: AlertingConfig) -> Self {
        Self { config }
    }

    pub async fn extract<S: ComplianceStore + ?Sized>(
        &self,
        store: &S,
        now: NaiveDate,
    ) -> Result<Vec<Alert>, StoreError> {
        let prescriptions = store.pending_prescriptions().await?;

        // Classify before resolving so the batched lookup only carries
        // reports that can actually alert.
        let mut candidates = Vec::new();
        for prescription in prescriptions {
            // No implementation date means nothing to track yet.
            let Some(due) = prescription.implementation_date else {
                continue;
            };

            let status = classify(due, now, self.config.document_warning_days);
            if status == AlertStatus::Vigente {
                continue;
            }

            candidates.push((prescription, due, status));
        }

        let links = ParentLinkResolver::new(store)
            .resolve_many(
                candidates
                    .iter()
                    .map(|(prescription, _, _)| prescription.origin.report().id),
            )
            .await?;

        let mut alerts = Vec::with_capacity(candidates.len());
        for (prescription, due, status) in candidates {
            let report = prescription.origin.report();
            alerts.push(Alert {
                kind: AlertKind::Prescription,
                id: prescription.id,
                title: format!(
                    "Medida: {} ({})",
                    prescription.risk_agent_name,
                    prescription.origin.label()
                ),
                company: report.company.name.clone(),
                date: due,
                days_left: days_left(due, now),
                status,
                details: prescription.description.clone(),
                redirect_data: RedirectData {
                    company_id: Some(report.company.id),
                    ges_id: links.get(&report.id).copied(),
                    report_id: Some(report.id),
                    ..RedirectData::default()
                },
            });
        }
        Ok(alerts)
    }
}
