use crate::auth::create_jwt;
use crate::infrastructure::AppState;
use crate::services::user_service;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use super::error_response;

#[derive(Deserialize, ToSchema)]
pub struct Credentials {
    username: String,
    password: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = Credentials,
    responses(
        (status = 201, description = "User registered"),
        (status = 409, description = "Username already taken")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<Credentials>,
) -> impl IntoResponse {
    match user_service::register_user(
        state.user_repo.as_ref(),
        &payload.username,
        &payload.password,
    )
    .await
    {
        Ok(user) => (
            StatusCode::CREATED,
            Json(json!({ "message": "Registration successful", "user": user })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = Credentials,
    responses(
        (status = 200, description = "JWT issued"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<Credentials>,
) -> impl IntoResponse {
    tracing::info!("Login attempt for user: {}", payload.username);

    let user = match user_service::verify_user(
        state.user_repo.as_ref(),
        &payload.username,
        &payload.password,
    )
    .await
    {
        Ok(Some(user)) => user,
        Ok(None) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Invalid credentials" })),
            )
                .into_response();
        }
        Err(e) => return error_response(e),
    };

    match create_jwt(&user.username, user.id) {
        Ok(token) => (
            StatusCode::OK,
            Json(json!({ "token": token, "user_id": user.id })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": e })),
        )
            .into_response(),
    }
}
