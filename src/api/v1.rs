use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use crate::api::{assessment, health, materials, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/assessment", post(assessment::create_assessment))
        .route("/materials", get(materials::list_materials))
        .route("/health", get(health::health_check))
        .route("/healthz", get(healthz))
        .with_state(state)
}

pub async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}
