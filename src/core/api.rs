//! HTTP API for Salat
//!
//! Endpoints:
//! - GET /health  - Health check
//! - GET /methods - Supported calculation methods
//! - GET /times   - Schedule + current/next period
//!   (`lat`, `lon`, optional `method`, `tz` hours, `date` YYYY-MM-DD, `now` RFC 3339)

use axum::{
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{build_report, offset_from_hours, ConfigError, ScheduleBuilder};
use crate::types::{Coordinate, Method, MethodParams, PrayerError, Report};

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// One entry of the method listing
#[derive(Debug, Serialize)]
pub struct MethodInfo {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(flatten)]
    pub params: MethodParams,
}

/// Query string for /times
#[derive(Debug, Deserialize)]
pub struct TimesQuery {
    pub lat: f64,
    pub lon: f64,
    pub method: Option<String>,
    /// UTC offset in hours, default 0
    pub tz: Option<f64>,
    pub date: Option<NaiveDate>,
    pub now: Option<DateTime<FixedOffset>>,
}

/// Error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

/// Failures surfaced by handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Prayer(#[from] PrayerError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::Config(e) => (StatusCode::BAD_REQUEST, e.code()),
            ApiError::Prayer(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.code()),
        };
        let body = ErrorResponse { error: self.to_string(), code };
        (status, Json(body)).into_response()
    }
}

/// Create the API router
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/methods", get(methods))
        .route("/times", get(times))
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
    })
}

/// List supported methods
async fn methods() -> Json<Vec<MethodInfo>> {
    Json(
        Method::ALL
            .iter()
            .map(|m| MethodInfo { name: m.name(), description: m.description(), params: m.params() })
            .collect(),
    )
}

/// Compute a schedule report
async fn times(Query(q): Query<TimesQuery>) -> Result<Json<Report>, ApiError> {
    let hours = q.tz.unwrap_or(0.0);
    let offset = offset_from_hours(hours).ok_or(ConfigError::InvalidOffset(hours))?;
    let now = q.now.unwrap_or_else(|| Utc::now().fixed_offset()).with_timezone(&offset);
    let date = q.date.unwrap_or_else(|| now.date_naive());
    let method = q.method.unwrap_or_else(|| Method::default().name().to_string());
    let coordinate = Coordinate::new(q.lat, q.lon);

    debug!(%coordinate, %date, %method, "times request");
    let schedule = ScheduleBuilder::new(coordinate, MethodParams::for_name(&method))
        .offset(offset)
        .build(date)?;

    Ok(Json(build_report(now, schedule, coordinate, &method)))
}

/// Run the API server
pub async fn run_server(addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "salat API listening");
    println!("Salat API running on {}", addr);
    println!("  GET /health   - Health check");
    println!("  GET /methods  - Calculation methods");
    println!("  GET /times    - Prayer times (?lat=&lon=&method=&tz=&date=)");
    axum::serve(listener, router).await?;
    Ok(())
}
