use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::auth::Claims;
use crate::infrastructure::AppState;
use crate::services;

use super::error_response;

#[utoipa::path(
    get,
    path = "/api/user/level",
    responses(
        (status = 200, description = "Level, points in level and points to next level"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn get_user_level(State(state): State<AppState>, claims: Claims) -> impl IntoResponse {
    // Level is derived from the points sum; nothing is stored
    match services::level_info(state.achievement_repo.as_ref(), claims.uid).await {
        Ok(info) => (StatusCode::OK, Json(info)).into_response(),
        Err(e) => error_response(e),
    }
}
