use chrono::NaiveDate;

use super::domain::AlertStatus;

/// Whole days between `now` and `deadline`; negative once the deadline passed.
pub fn days_left(deadline: NaiveDate, now: NaiveDate) -> i64 {
    (deadline - now).num_days()
}

/// Map a deadline onto the three-state lifecycle.
///
/// A deadline exactly `warning_window_days` out is already `PorVencer`; a
/// deadline due today is `PorVencer` with zero days left, not overdue.
pub fn classify(deadline: NaiveDate, now: NaiveDate, warning_window_days: i64) -> AlertStatus {
    let remaining = days_left(deadline, now);
    if remaining < 0 {
        AlertStatus::Vencido
    } else if remaining <= warning_window_days {
        AlertStatus::PorVencer
    } else {
        AlertStatus::Vigente
    }
}
