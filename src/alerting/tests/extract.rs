use chrono::Duration;

use super::common::*;
use crate::alerting::dataset::DatasetSnapshot;
use crate::alerting::domain::{AlertStatus, PrescriptionStatus};
use crate::alerting::extract::{
    LegalDocumentExtractor, PrescriptionExtractor, ProtocolValidityExtractor, WorkerExamExtractor,
};

#[tokio::test]
async fn completed_and_undated_prescriptions_emit_nothing() {
    let store = store_from(DatasetSnapshot {
        prescriptions: vec![
            prescription(
                1,
                Some(now() - Duration::days(5)),
                PrescriptionStatus::Realizada,
                901,
            ),
            prescription(2, None, PrescriptionStatus::Pendiente, 901),
            prescription(
                3,
                Some(now() + Duration::days(90)),
                PrescriptionStatus::Pendiente,
                901,
            ),
        ],
        ..DatasetSnapshot::default()
    });

    let alerts = PrescriptionExtractor::new(config())
        .extract(&store, now())
        .await
        .expect("extraction succeeds");

    assert!(alerts.is_empty());
}

#[tokio::test]
async fn prescription_alert_carries_origin_and_resolved_ges() {
    let store = store_from(DatasetSnapshot {
        prescriptions: vec![prescription(
            1,
            Some(now() - Duration::days(5)),
            PrescriptionStatus::EnProceso,
            901,
        )],
        protocol_evaluations: vec![protocol(11, None, Some(901))],
        ..DatasetSnapshot::default()
    });

    let alerts = PrescriptionExtractor::new(config())
        .extract(&store, now())
        .await
        .expect("extraction succeeds");

    assert_eq!(alerts.len(), 1);
    let alert = &alerts[0];
    assert_eq!(alert.status, AlertStatus::Vencido);
    assert_eq!(alert.days_left, -5);
    assert_eq!(alert.title, "Medida: Sílice (Informe técnico)");
    assert_eq!(alert.company, "Minera Austral");
    assert_eq!(alert.redirect_data.company_id, Some(1));
    assert_eq!(alert.redirect_data.report_id, Some(901));
    assert_eq!(alert.redirect_data.ges_id, Some(11));
}

#[tokio::test]
async fn unresolved_parent_link_still_emits_alert() {
    let store = store_from(DatasetSnapshot {
        prescriptions: vec![prescription(
            1,
            Some(now() - Duration::days(5)),
            PrescriptionStatus::Pendiente,
            901,
        )],
        ..DatasetSnapshot::default()
    });

    let alerts = PrescriptionExtractor::new(config())
        .extract(&store, now())
        .await
        .expect("extraction succeeds");

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].redirect_data.ges_id, None);
    assert_eq!(alerts[0].redirect_data.report_id, Some(901));
}

#[tokio::test]
async fn reverse_lookup_only_queries_reports_that_can_alert() {
    let store = RecordingStore::new(DatasetSnapshot {
        prescriptions: vec![
            prescription(
                1,
                Some(now() - Duration::days(5)),
                PrescriptionStatus::Pendiente,
                901,
            ),
            prescription(
                2,
                Some(now() + Duration::days(90)),
                PrescriptionStatus::Pendiente,
                950,
            ),
            prescription(3, None, PrescriptionStatus::Pendiente, 960),
        ],
        protocol_evaluations: vec![protocol(11, None, Some(901))],
        ..DatasetSnapshot::default()
    });

    let alerts = PrescriptionExtractor::new(config())
        .extract(&store, now())
        .await
        .expect("extraction succeeds");

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].redirect_data.ges_id, Some(11));
    // Only the report behind the alerting prescription reaches the store.
    assert_eq!(store.requested_report_ids(), vec![vec![901]]);
}

#[tokio::test]
async fn broken_company_chain_drops_only_that_protocol() {
    let store = store_from(DatasetSnapshot {
        protocol_evaluations: vec![
            broken_protocol(10, now() - Duration::days(1)),
            protocol(11, Some(now() + Duration::days(10)), None),
        ],
        ..DatasetSnapshot::default()
    });

    let alerts = ProtocolValidityExtractor::new(config())
        .extract(&store, now())
        .await
        .expect("extraction succeeds");

    assert_eq!(alerts.len(), 1);
    let alert = &alerts[0];
    assert_eq!(alert.id, 11);
    assert_eq!(alert.status, AlertStatus::PorVencer);
    assert_eq!(alert.redirect_data.company_id, Some(1));
    assert_eq!(alert.redirect_data.ges_id, Some(11));
}

#[tokio::test]
async fn legal_document_expiration_is_derived_from_report_date() {
    let store = store_from(DatasetSnapshot {
        legal_documents: vec![legal_document(901, date(2023, 1, 1))],
        protocol_evaluations: vec![protocol(11, None, Some(901))],
        ..DatasetSnapshot::default()
    });

    let alerts = LegalDocumentExtractor::new(config())
        .extract(&store, now())
        .await
        .expect("extraction succeeds");

    assert_eq!(alerts.len(), 1);
    let alert = &alerts[0];
    assert_eq!(alert.date, date(2024, 12, 31));
    assert_eq!(alert.days_left, -15);
    assert_eq!(alert.status, AlertStatus::Vencido);
    assert_eq!(alert.title, "Informe técnico N° IT-901");
    assert_eq!(alert.redirect_data.ges_id, Some(11));
}

#[tokio::test]
async fn medical_evidence_takes_precedence_over_calculated_fallback() {
    let store = store_from(DatasetSnapshot {
        worker_exams: vec![worker(
            77,
            Some(order(
                Some(date(2024, 6, 1)),
                date(2024, 6, 3),
                vec![
                    battery("Batería sílice", Some(date(2025, 1, 1))),
                    battery("Audiometría", None),
                ],
            )),
            Some(assigned_protocol(Some(1))),
        )],
        ..DatasetSnapshot::default()
    });

    let alerts = WorkerExamExtractor::new(config())
        .extract(&store, now())
        .await
        .expect("extraction succeeds");

    assert_eq!(alerts.len(), 1);
    let alert = &alerts[0];
    assert_eq!(alert.date, date(2025, 1, 1));
    assert_eq!(alert.days_left, -14);
    assert_eq!(alert.status, AlertStatus::Vencido);
    assert!(alert.details.contains("Médico"));
    assert_eq!(alert.redirect_data.worker_id, Some(77));
    assert_eq!(alert.redirect_data.worker_rut.as_deref(), Some("12.345.678-9"));
}

#[tokio::test]
async fn calculated_fallback_adds_validity_to_scheduled_date() {
    let store = store_from(DatasetSnapshot {
        worker_exams: vec![worker(
            77,
            Some(order(Some(date(2024, 6, 1)), date(2024, 6, 3), Vec::new())),
            Some(assigned_protocol(Some(1))),
        )],
        ..DatasetSnapshot::default()
    });

    let alerts = WorkerExamExtractor::new(config())
        .extract(&store, date(2025, 5, 1))
        .await
        .expect("extraction succeeds");

    assert_eq!(alerts.len(), 1);
    let alert = &alerts[0];
    assert_eq!(alert.date, date(2025, 6, 1));
    assert_eq!(alert.status, AlertStatus::PorVencer);
    assert!(alert.details.contains("Calculado"));
}

#[tokio::test]
async fn calculated_fallback_uses_updated_at_when_unscheduled() {
    let store = store_from(DatasetSnapshot {
        worker_exams: vec![worker(
            77,
            Some(order(None, date(2024, 6, 3), Vec::new())),
            // No declared validity: the configured default of one year applies.
            Some(assigned_protocol(None)),
        )],
        ..DatasetSnapshot::default()
    });

    let alerts = WorkerExamExtractor::new(config())
        .extract(&store, date(2025, 5, 20))
        .await
        .expect("extraction succeeds");

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].date, date(2025, 6, 3));
}

#[tokio::test]
async fn absurd_validity_span_skips_the_record_without_panicking() {
    let store = store_from(DatasetSnapshot {
        worker_exams: vec![
            worker(
                1,
                Some(order(Some(date(2024, 6, 1)), date(2024, 6, 3), Vec::new())),
                Some(assigned_protocol(Some(u32::MAX))),
            ),
            worker(
                2,
                Some(order(Some(date(2024, 6, 1)), date(2024, 6, 3), Vec::new())),
                Some(assigned_protocol(Some(1))),
            ),
        ],
        ..DatasetSnapshot::default()
    });

    let alerts = WorkerExamExtractor::new(config())
        .extract(&store, date(2025, 6, 1))
        .await
        .expect("extraction succeeds");

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].id, 2);
}

#[tokio::test]
async fn workers_without_order_or_protocol_are_skipped() {
    let store = store_from(DatasetSnapshot {
        worker_exams: vec![
            worker(1, None, Some(assigned_protocol(Some(1)))),
            worker(
                2,
                Some(order(Some(date(2023, 1, 1)), date(2023, 1, 2), Vec::new())),
                None,
            ),
        ],
        ..DatasetSnapshot::default()
    });

    let alerts = WorkerExamExtractor::new(config())
        .extract(&store, now())
        .await
        .expect("extraction succeeds");

    assert!(alerts.is_empty());
}

#[tokio::test]
async fn exam_window_is_wider_than_document_window() {
    let deadline = now() + Duration::days(40);
    let store = store_from(DatasetSnapshot {
        worker_exams: vec![worker(
            77,
            Some(order(
                Some(date(2024, 6, 1)),
                date(2024, 6, 3),
                vec![battery("Batería sílice", Some(deadline))],
            )),
            Some(assigned_protocol(Some(1))),
        )],
        prescriptions: vec![prescription(
            1,
            Some(deadline),
            PrescriptionStatus::Pendiente,
            901,
        )],
        ..DatasetSnapshot::default()
    });

    let exam_alerts = WorkerExamExtractor::new(config())
        .extract(&store, now())
        .await
        .expect("extraction succeeds");
    let prescription_alerts = PrescriptionExtractor::new(config())
        .extract(&store, now())
        .await
        .expect("extraction succeeds");

    // 40 days out falls inside the 45-day exam window but outside the
    // 30-day documents window.
    assert_eq!(exam_alerts.len(), 1);
    assert_eq!(exam_alerts[0].status, AlertStatus::PorVencer);
    assert!(prescription_alerts.is_empty());
}
