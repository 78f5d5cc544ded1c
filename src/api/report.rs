use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::auth::Claims;
use crate::domain::report::{format_plain_list, format_report};
use crate::domain::{AggregateFilter, DateRange};
use crate::infrastructure::AppState;
use crate::services;

use super::achievements::ScopeQuery;
use super::error_response;

#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    /// Single-day report; overrides `start`/`end`
    pub date: Option<NaiveDate>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub category: Option<String>,
}

fn plain_text(body: String) -> axum::response::Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}

pub async fn text_report(
    State(state): State<AppState>,
    claims: Claims,
    Query(query): Query<ReportQuery>,
) -> impl IntoResponse {
    let scope = ScopeQuery {
        start: query.start,
        end: query.end,
        category: query.category,
    }
    .filter();
    let filter = match query.date {
        Some(date) => AggregateFilter {
            range: Some(DateRange::single(date)),
            ..scope
        },
        None => scope,
    };

    match services::grouped_achievements(
        state.achievement_repo.as_ref(),
        claims.uid,
        &filter,
        &state.zone,
    )
    .await
    {
        Ok(aggregate) => plain_text(format_report(&aggregate, query.date)),
        Err(e) => error_response(e),
    }
}

pub async fn plain_report(State(state): State<AppState>, claims: Claims) -> impl IntoResponse {
    match services::list_achievements(state.achievement_repo.as_ref(), claims.uid).await {
        Ok(records) => plain_text(format_plain_list(&records)),
        Err(e) => error_response(e),
    }
}
