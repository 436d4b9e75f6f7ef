use chrono::{Duration, NaiveDate};

use crate::alerting::classify::{classify, days_left};
use crate::alerting::config::AlertingConfig;
use crate::alerting::domain::{Alert, AlertKind, AlertStatus, RedirectData};
use crate::alerting::resolver::ParentLinkResolver;
use crate::alerting::store::{ComplianceStore, StoreError};

/// Scans legal technical reports. The store carries no expiration column;
/// the due date is `report_date` plus the statutory validity span.
pub struct LegalDocumentExtractor {
    config: AlertingConfig,
}

impl LegalDocumentExtractor {
    pub fn new(config: AlertingConfig) -> Self {
        Self { config }
    }

    pub async fn extract<S: ComplianceStore + ?Sized>(
        &self,
        store: &S,
        now: NaiveDate,
    ) -> Result<Vec<Alert>, StoreError> {
        let documents = store.legal_documents().await?;

        let links = ParentLinkResolver::new(store)
            .resolve_many(documents.iter().map(|document| document.id))
            .await?;

        let mut alerts = Vec::new();
        for document in documents {
            let due = document.report_date + Duration::days(self.config.legal_validity_days);

            let status = classify(due, now, self.config.document_warning_days);
            if status == AlertStatus::Vigente {
                continue;
            }

            alerts.push(Alert {
                kind: AlertKind::LegalDocument,
                id: document.id,
                title: format!("Informe técnico N° {}", document.report_number),
                company: document.company.name.clone(),
                date: due,
                days_left: days_left(due, now),
                status,
                details: format!(
                    "Emitido el {}; vigencia legal de {} días",
                    document.report_date, self.config.legal_validity_days
                ),
                redirect_data: RedirectData {
                    company_id: Some(document.company.id),
                    ges_id: links.get(&document.id).copied(),
                    report_id: Some(document.id),
                    ..RedirectData::default()
                },
            });
        }
        Ok(alerts)
    }
}
