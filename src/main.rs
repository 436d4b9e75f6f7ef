use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use tracing::info;
use vigia::alerting::{
    alert_router, AlertEngine, AlertFeed, DatasetSnapshot, InMemoryComplianceStore,
};
use vigia::config::AppConfig;
use vigia::error::AppError;
use vigia::telemetry;

#[derive(Clone)]
struct OpsState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "vigia",
    about = "Compliance alerting engine for occupational health programs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Compute compliance alerts from the command line
    Alerts {
        #[command(subcommand)]
        command: AlertsCommand,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
    /// JSON snapshot backing the compliance store
    #[arg(long)]
    dataset: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum AlertsCommand {
    /// Compute and print the prioritized alert feed
    Feed(FeedArgs),
}

#[derive(Args, Debug)]
struct FeedArgs {
    /// JSON snapshot of the store slices to scan (defaults to the built-in sample)
    #[arg(long)]
    dataset: Option<PathBuf>,
    /// Evaluation date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
    /// Print the raw JSON payload instead of the rendered listing
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Alerts {
            command: AlertsCommand::Feed(args),
        } => run_feed(args).await,
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let snapshot = match args.dataset {
        Some(path) => DatasetSnapshot::from_path(path)?,
        None => DatasetSnapshot::default(),
    };
    let store = Arc::new(InMemoryComplianceStore::from_snapshot(snapshot));
    let engine = Arc::new(AlertEngine::new(store, config.alerting));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = OpsState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let ops = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state);

    let app = alert_router(engine).merge(ops).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "compliance alerting service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn run_feed(args: FeedArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let snapshot = match args.dataset {
        Some(path) => DatasetSnapshot::from_path(path)?,
        None => DatasetSnapshot::sample(today),
    };
    let store = Arc::new(InMemoryComplianceStore::from_snapshot(snapshot));
    let engine = AlertEngine::new(store, config.alerting);

    let feed = engine.compute(today).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&feed)?);
    } else {
        render_feed(&feed, today);
    }

    Ok(())
}

fn render_feed(feed: &AlertFeed, today: NaiveDate) {
    println!("Alertas de cumplimiento al {today}");
    println!(
        "  Total: {} | Vencidas: {} | Por vencer: {}",
        feed.summary.total, feed.summary.expired, feed.summary.warning
    );

    if feed.items.is_empty() {
        println!("  Sin alertas: todos los registros vigentes.");
        return;
    }

    for alert in &feed.items {
        println!(
            "  [{}] {:>5} días  {} — {} (vence {})",
            alert.status.label(),
            alert.days_left,
            alert.title,
            alert.company,
            alert.date
        );
        if !alert.details.is_empty() {
            println!("      {}", alert.details);
        }
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<OpsState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<OpsState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
