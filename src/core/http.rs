//! HTTP endpoint server using Axum

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, Level};

use crate::core::runtime::SharedDashboard;
use crate::metrics::Metrics;
use crate::models::dashboard::{BiasRow, DashboardSnapshot, IndicatorStatusRow, LiveRow};

#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub dashboard: SharedDashboard,
}

impl AppState {
    pub fn new(metrics: Arc<Metrics>, dashboard: SharedDashboard) -> Self {
        Self {
            metrics,
            start_time: Arc::new(Instant::now()),
            dashboard,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    /// Waiting for the first refresh, or the last one produced live rows.
    Healthy,
    /// The last refresh finished without a single live row.
    Degraded,
}

impl HealthStatus {
    pub fn from_dashboard(dashboard: &DashboardSnapshot) -> Self {
        if dashboard.updated_at.is_some() && dashboard.live.is_empty() {
            HealthStatus::Degraded
        } else {
            HealthStatus::Healthy
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let dashboard = state.dashboard.read().await;
    Ok(Json(json!({
        "status": HealthStatus::from_dashboard(&dashboard),
        "uptime_seconds": state.start_time.elapsed().as_secs(),
        "last_refresh": dashboard.updated_at,
        "live_rows": dashboard.live.len(),
        "service": "intradash"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

async fn dashboard_handler(State(state): State<AppState>) -> Json<DashboardSnapshot> {
    Json(state.dashboard.read().await.clone())
}

async fn live_signals(State(state): State<AppState>) -> Json<Vec<LiveRow>> {
    Json(state.dashboard.read().await.live.clone())
}

async fn indicator_status(State(state): State<AppState>) -> Json<Vec<IndicatorStatusRow>> {
    Json(state.dashboard.read().await.indicators.clone())
}

async fn next_session_bias(State(state): State<AppState>) -> Json<Vec<BiasRow>> {
    Json(state.dashboard.read().await.bias.clone())
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    state.metrics.http_requests_in_flight.dec();

    let duration = start.elapsed();
    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if response.status().is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %response.status(),
            duration_ms = duration.as_millis() as u64,
            "HTTP request error"
        );
    }

    response
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/dashboard", get(dashboard_handler))
        .route("/api/signals/live", get(live_signals))
        .route("/api/signals/indicators", get(indicator_status))
        .route("/api/signals/bias", get(next_session_bias))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(port: u16, state: AppState) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    info!("Dashboard available at http://0.0.0.0:{}/api/dashboard", port);
    axum::serve(listener, app).await?;

    Ok(())
}
