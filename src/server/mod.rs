//! HTTP and WebSocket front end

pub mod ws;

use crate::config::ServerSettings;
use crate::core::NavPoint;
use crate::nav::NavDatabase;
use crate::session::SessionCoordinator;
use anyhow::Context;
use axum::extract::{Query, State};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

/// Shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub coordinator: Arc<SessionCoordinator>,
    pub nav: Arc<NavDatabase>,
    pub settings: Arc<ServerSettings>,
}

impl AppState {
    pub fn new(coordinator: Arc<SessionCoordinator>, nav: NavDatabase, settings: ServerSettings) -> Self {
        Self {
            coordinator,
            nav: Arc::new(nav),
            settings: Arc::new(settings),
        }
    }
}

pub fn router(state: AppState) -> anyhow::Result<Router> {
    let origin: HeaderValue = state
        .settings
        .frontend_origin
        .parse()
        .with_context(|| format!("invalid frontend origin {:?}", state.settings.frontend_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Ok(Router::new()
        .route("/ws", get(ws::ws_handler))
        .route("/api/flights", get(list_flights))
        .route("/api/nav/nearby", get(nearby_airports))
        .route("/systems/health", get(health))
        .layer(cors)
        .with_state(state))
}

async fn list_flights(State(state): State<AppState>) -> Response {
    match state.coordinator.library().list_flights().await {
        Ok(names) => Json(names).into_response(),
        Err(e) => {
            error!("Failed to list flights: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    pub lat: f64,
    pub lon: f64,
    /// Nautical miles; the configured default when absent
    pub radius: Option<f64>,
}

async fn nearby_airports(
    State(state): State<AppState>,
    Query(query): Query<NearbyQuery>,
) -> Json<Vec<NavPoint>> {
    let radius = query.radius.unwrap_or(state.settings.nav_radius_nm);
    Json(state.nav.find_nearby(query.lat, query.lon, radius))
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
}

async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "GREEN",
        message: "All systems operational",
        timestamp: Utc::now().to_rfc3339(),
    })
}
