use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;

use crate::auth::Claims;
use crate::infrastructure::AppState;
use crate::services::color_service;

use super::error_response;

#[derive(Deserialize)]
pub struct SaveColorRequest {
    group: String,
    color: String,
}

pub async fn list_colors(State(state): State<AppState>, claims: Claims) -> impl IntoResponse {
    match color_service::get_colors(state.color_repo.as_ref(), claims.uid).await {
        Ok(colors) => (StatusCode::OK, Json(colors)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn save_color(
    State(state): State<AppState>,
    claims: Claims,
    Json(payload): Json<SaveColorRequest>,
) -> impl IntoResponse {
    match color_service::save_color(
        state.color_repo.as_ref(),
        claims.uid,
        &payload.group,
        &payload.color,
    )
    .await
    {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": "Color saved" }))).into_response(),
        Err(e) => error_response(e),
    }
}
