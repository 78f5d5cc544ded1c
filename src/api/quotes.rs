use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::infrastructure::AppState;
use crate::services::quote_service;

pub async fn random_quote(State(state): State<AppState>) -> Json<Value> {
    let quote = quote_service::random_quote(&state.quotes_path).await;
    Json(json!({ "quote": quote }))
}
