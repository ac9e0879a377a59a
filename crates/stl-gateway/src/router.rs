use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handler::{self, AppState};

/// Build the axum router with all gateway endpoints.
///
/// CORS is permissive: the dashboard is served from a different origin and
/// the gateway carries no authentication of its own.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/sensor-events",
            post(handler::submit_sensor_event).get(handler::list_sensor_events),
        )
        .route("/sensor-events/:event_id", get(handler::read_sensor_event))
        .route("/v1/health", get(handler::health_handler))
        .route("/v1/info", get(handler::info_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
