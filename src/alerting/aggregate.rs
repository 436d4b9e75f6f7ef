use serde::{Deserialize, Serialize};

use super::domain::{Alert, AlertStatus};

/// Feed counters exposed alongside the items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertSummary {
    pub total: usize,
    pub expired: usize,
    pub warning: usize,
}

/// The engine's sole output: globally prioritized alerts plus counters.
/// An empty `items` list is a valid "fully compliant" result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertFeed {
    pub summary: AlertSummary,
    pub items: Vec<Alert>,
}

fn status_rank(status: AlertStatus) -> u8 {
    match status {
        AlertStatus::Vencido => 0,
        AlertStatus::PorVencer => 1,
        AlertStatus::Vigente => 2,
    }
}

/// Concatenate extractor outputs, apply the global sort contract, and count.
///
/// All `Vencido` items sort before all `PorVencer` items regardless of
/// magnitude; within a bucket, ascending `days_left` puts the most overdue
/// (most negative) first.
pub fn merge(batches: Vec<Vec<Alert>>) -> AlertFeed {
    let mut items: Vec<Alert> = batches.into_iter().flatten().collect();
    items.sort_by(|a, b| {
        status_rank(a.status)
            .cmp(&status_rank(b.status))
            .then(a.days_left.cmp(&b.days_left))
    });

    let expired = items
        .iter()
        .filter(|alert| alert.status == AlertStatus::Vencido)
        .count();
    let warning = items
        .iter()
        .filter(|alert| alert.status == AlertStatus::PorVencer)
        .count();

    AlertFeed {
        summary: AlertSummary {
            total: items.len(),
            expired,
            warning,
        },
        items,
    }
}
