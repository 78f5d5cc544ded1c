pub mod achievements;
pub mod auth;
pub mod colors;
pub mod gamification;
pub mod health;
pub mod quotes;
pub mod report;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Auth
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        // Achievements
        .route(
            "/achievements",
            get(achievements::list_achievements)
                .post(achievements::add_achievement)
                .delete(achievements::delete_all_achievements),
        )
        .route("/achievements/grouped", get(achievements::grouped_achievements))
        .route("/achievements/timeline", get(achievements::daily_timeline))
        .route("/achievements/summary", post(achievements::rewrite_summary))
        .route(
            "/achievements/category/:category",
            delete(achievements::delete_category),
        )
        .route("/achievements/:id", delete(achievements::delete_achievement))
        // Reports
        .route("/report", get(report::text_report))
        .route("/report/plain", get(report::plain_report))
        // Gamification
        .route("/user/level", get(gamification::get_user_level))
        // Category colors
        .route("/colors", get(colors::list_colors).put(colors::save_color))
        // Quotes
        .route("/quote", get(quotes::random_quote))
        .with_state(state)
}

/// Map a domain failure to a JSON error response
pub(crate) fn error_response(e: DomainError) -> Response {
    let status = match &e {
        DomainError::NotFound => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Database(_) | DomainError::Internal(_) => {
            tracing::error!("Request failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (status, Json(json!({ "error": e.to_string() }))).into_response()
}
