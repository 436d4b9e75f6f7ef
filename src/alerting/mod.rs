//! Compliance alerting engine.
//!
//! Scans four structurally different record types (corrective-action
//! prescriptions, exposure-group protocol validity, legal technical reports,
//! and worker medical-exam expirations), derives a normalized days-until-due
//! signal for each, and merges everything into one globally prioritized feed.

mod aggregate;
mod classify;
mod config;
pub mod dataset;
pub mod domain;
mod engine;
pub mod extract;
mod memory;
mod resolver;
pub mod router;
pub mod store;

#[cfg(test)]
mod tests;

pub use aggregate::{merge, AlertFeed, AlertSummary};
pub use classify::{classify, days_left};
pub use config::AlertingConfig;
pub use dataset::{DatasetError, DatasetSnapshot};
pub use domain::{Alert, AlertKind, AlertStatus, RedirectData};
pub use engine::{AlertEngine, ComputationError};
pub use memory::InMemoryComplianceStore;
pub use resolver::ParentLinkResolver;
pub use router::alert_router;
pub use store::{ComplianceStore, StoreError};
