use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::auth::Claims;
use crate::domain::timeline;
use crate::domain::{Achievement, AggregateFilter, DateRange, DisplayZone, extract_group};
use crate::infrastructure::AppState;
use crate::services::{self, SummaryRequest};

use super::error_response;

/// Achievement as shown to clients
#[derive(Debug, Serialize)]
pub struct AchievementView {
    pub id: i32,
    pub description: String,
    pub category: String,
    pub body: String,
    pub points: i64,
    pub created_at: DateTime<Utc>,
    /// `DD.MM.YYYY HH:MM` in the display zone
    pub created_at_local: String,
}

impl AchievementView {
    pub fn new(achievement: &Achievement, zone: &DisplayZone) -> Self {
        let (category, body) = extract_group(&achievement.description);
        Self {
            id: achievement.id,
            description: achievement.description.clone(),
            category: category.to_string(),
            body: body.to_string(),
            points: achievement.points,
            created_at: achievement.created_at,
            created_at_local: zone.format_timestamp(&achievement.created_at),
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct AddAchievementRequest {
    description: String,
    points: i64,
}

/// `start`/`end` dates (inclusive) and an optional category
#[derive(Debug, Default, Deserialize)]
pub struct ScopeQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub category: Option<String>,
}

impl ScopeQuery {
    pub fn filter(&self) -> AggregateFilter {
        AggregateFilter {
            range: DateRange::from_bounds(self.start, self.end),
            category: self
                .category
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TimelineQuery {
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Deserialize, ToSchema)]
pub struct SummaryPayload {
    category: String,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    items: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/api/achievements",
    responses(
        (status = 200, description = "Achievements of the caller, newest first"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn list_achievements(State(state): State<AppState>, claims: Claims) -> impl IntoResponse {
    match services::list_achievements(state.achievement_repo.as_ref(), claims.uid).await {
        Ok(records) => {
            let views: Vec<AchievementView> = records
                .iter()
                .map(|a| AchievementView::new(a, &state.zone))
                .collect();
            (
                StatusCode::OK,
                Json(json!({ "achievements": views, "total": views.len() })),
            )
                .into_response()
        }
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/achievements",
    request_body = AddAchievementRequest,
    responses(
        (status = 201, description = "Achievement stored"),
        (status = 400, description = "Empty description or points out of range")
    )
)]
pub async fn add_achievement(
    State(state): State<AppState>,
    claims: Claims,
    Json(payload): Json<AddAchievementRequest>,
) -> impl IntoResponse {
    match services::add_achievement(
        state.achievement_repo.as_ref(),
        claims.uid,
        &payload.description,
        payload.points,
    )
    .await
    {
        Ok(added) => (
            StatusCode::CREATED,
            Json(json!({
                "achievement": AchievementView::new(&added.achievement, &state.zone),
                "level": added.level,
                "level_up": added.level_up,
            })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_achievement(
    State(state): State<AppState>,
    claims: Claims,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match services::delete_achievement(state.achievement_repo.as_ref(), id, claims.uid).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Achievement deleted" })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_all_achievements(
    State(state): State<AppState>,
    claims: Claims,
) -> impl IntoResponse {
    match services::delete_all_achievements(state.achievement_repo.as_ref(), claims.uid).await {
        Ok(deleted) => (StatusCode::OK, Json(json!({ "deleted": deleted }))).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn grouped_achievements(
    State(state): State<AppState>,
    claims: Claims,
    Query(query): Query<ScopeQuery>,
) -> impl IntoResponse {
    let filter = query.filter();
    match services::grouped_achievements(
        state.achievement_repo.as_ref(),
        claims.uid,
        &filter,
        &state.zone,
    )
    .await
    {
        Ok(aggregate) => {
            let total_points = aggregate.total_points();
            (
                StatusCode::OK,
                Json(json!({
                    "total_points": total_points,
                    "categories": aggregate,
                })),
            )
                .into_response()
        }
        Err(e) => error_response(e),
    }
}

pub async fn daily_timeline(
    State(state): State<AppState>,
    claims: Claims,
    Query(query): Query<TimelineQuery>,
) -> impl IntoResponse {
    let date = query.date.unwrap_or_else(|| state.zone.today());

    let records = match services::list_achievements(state.achievement_repo.as_ref(), claims.uid).await {
        Ok(records) => records,
        Err(e) => return error_response(e),
    };
    let colors = match state.color_repo.find_by_owner(claims.uid).await {
        Ok(colors) => colors,
        Err(e) => return error_response(e),
    };

    let entries = timeline::daily_timeline(&records, date, &state.zone, &colors);
    (
        StatusCode::OK,
        Json(json!({
            "date": date,
            "entries": entries,
        })),
    )
        .into_response()
}

pub async fn delete_category(
    State(state): State<AppState>,
    claims: Claims,
    Path(category): Path<String>,
    Query(query): Query<RangeQuery>,
) -> impl IntoResponse {
    let range = DateRange::from_bounds(query.start, query.end);
    match services::delete_category_range(
        state.achievement_repo.as_ref(),
        claims.uid,
        category.trim(),
        range,
        &state.zone,
    )
    .await
    {
        Ok(deleted) => (StatusCode::OK, Json(json!({ "deleted": deleted }))).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    post,
    path = "/api/achievements/summary",
    request_body = SummaryPayload,
    responses(
        (status = 200, description = "Scope replaced by summary records"),
        (status = 400, description = "Not a category, or no replacement items; nothing was deleted"),
        (status = 404, description = "No achievements in the scope")
    )
)]
pub async fn rewrite_summary(
    State(state): State<AppState>,
    claims: Claims,
    Json(payload): Json<SummaryPayload>,
) -> impl IntoResponse {
    let request = SummaryRequest {
        category: payload.category.trim().to_string(),
        range: DateRange::from_bounds(payload.start, payload.end),
        items: payload.items,
    };

    match services::rewrite_summary(
        state.achievement_repo.as_ref(),
        claims.uid,
        request,
        &state.zone,
    )
    .await
    {
        Ok(created) => {
            let views: Vec<AchievementView> = created
                .iter()
                .map(|a| AchievementView::new(a, &state.zone))
                .collect();
            (StatusCode::OK, Json(json!({ "achievements": views }))).into_response()
        }
        Err(e) => error_response(e),
    }
}
