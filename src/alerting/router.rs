use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use tracing::error;

use super::aggregate::AlertFeed;
use super::engine::AlertEngine;
use super::store::ComplianceStore;
use crate::error::AppError;

/// Router builder exposing the compliance feed endpoint.
pub fn alert_router<S>(engine: Arc<AlertEngine<S>>) -> Router
where
    S: ComplianceStore + 'static,
{
    Router::new()
        .route("/api/v1/alerts", get(feed_handler::<S>))
        .with_state(engine)
}

#[derive(Debug, Deserialize)]
pub(crate) struct AlertFeedQuery {
    /// Evaluation date override, mainly for dashboards replaying a past day.
    #[serde(default)]
    today: Option<NaiveDate>,
}

pub(crate) async fn feed_handler<S>(
    State(engine): State<Arc<AlertEngine<S>>>,
    Query(params): Query<AlertFeedQuery>,
) -> Result<Json<AlertFeed>, AppError>
where
    S: ComplianceStore + 'static,
{
    let today = params.today.unwrap_or_else(|| Local::now().date_naive());

    let feed = engine.compute(today).await.map_err(|error| {
        error!(%error, "alert feed computation failed");
        AppError::from(error)
    })?;

    Ok(Json(feed))
}
