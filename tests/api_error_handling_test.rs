use achievement_tracker::api;
use achievement_tracker::auth;
use achievement_tracker::config::Config;
use achievement_tracker::db;
use achievement_tracker::infrastructure::AppState;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot`

// Helper to create a test app state
async fn setup_test_state() -> AppState {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    AppState::new(db, &Config::default())
}

// Helper to create a test user
async fn create_test_user(db: &DatabaseConnection) -> i32 {
    let user = achievement_tracker::models::user::ActiveModel {
        username: Set("test_user".to_string()),
        password_hash: Set("hash".to_string()),
        created_at: Set(chrono::Utc::now().to_rfc3339()),
        ..Default::default()
    };
    let res = user.insert(db).await.expect("Failed to create user");
    res.id
}

// Helper to create a valid auth token
fn get_test_token(user_id: i32) -> String {
    auth::create_jwt("test_user", user_id).expect("Failed to create token")
}

async fn setup_app() -> (Router, String) {
    let state = setup_test_state().await;
    let user_id = create_test_user(state.db()).await;
    (api::api_router(state), get_test_token(user_id))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, token: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let (app, _) = setup_app().await;

    for uri in ["/achievements", "/report", "/user/level", "/colors"] {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", uri);
    }

    let req = Request::builder()
        .uri("/achievements")
        .header(header::AUTHORIZATION, "Bearer not-a-token")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_points_out_of_range_rejected() {
    let (app, token) = setup_app().await;

    for points in [0, 4, 51, 100] {
        let req = post_json(
            "/achievements",
            &token,
            serde_json::json!({ "description": "A: x", "points": points }),
        );
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("between 5 and 50"));
    }

    let req = Request::builder()
        .uri("/achievements")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let body = body_json(app.oneshot(req).await.unwrap()).await;
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_delete_missing_achievement_not_found() {
    let (app, token) = setup_app().await;

    let req = Request::builder()
        .uri("/achievements/999")
        .method("DELETE")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_summary_without_items_is_bad_request() {
    let (app, token) = setup_app().await;

    let req = post_json(
        "/achievements",
        &token,
        serde_json::json!({ "description": "DEV: a", "points": 10 }),
    );
    assert_eq!(
        app.clone().oneshot(req).await.unwrap().status(),
        StatusCode::CREATED
    );

    let req = post_json(
        "/achievements/summary",
        &token,
        serde_json::json!({ "category": "DEV", "items": ["", "  "] }),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing was deleted
    let req = Request::builder()
        .uri("/achievements")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let body = body_json(app.oneshot(req).await.unwrap()).await;
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn test_summary_category_and_scope_checked() {
    let (app, token) = setup_app().await;

    let req = post_json(
        "/achievements",
        &token,
        serde_json::json!({ "description": "work: notes", "points": 10 }),
    );
    app.clone().oneshot(req).await.unwrap();

    // Lower-case name is not a category
    let req = post_json(
        "/achievements/summary",
        &token,
        serde_json::json!({ "category": "work", "items": ["x"] }),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Valid category without records
    let req = post_json(
        "/achievements/summary",
        &token,
        serde_json::json!({ "category": "DEV", "items": ["x"] }),
    );
    let response = app.clone().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let req = Request::builder()
        .uri("/achievements")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let body = body_json(app.oneshot(req).await.unwrap()).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["achievements"][0]["description"], "work: notes");
}

#[tokio::test]
async fn test_invalid_color_rejected() {
    let (app, token) = setup_app().await;

    let req = Request::builder()
        .uri("/colors")
        .method("PUT")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({ "group": "WORK", "color": "orange" }).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_text_report_is_plain_text() {
    let (app, token) = setup_app().await;

    for (description, points) in [("РАБОТА: Закрыл баг", 20), ("прочитал статью", 10)] {
        let req = post_json(
            "/achievements",
            &token,
            serde_json::json!({ "description": description, "points": points }),
        );
        app.clone().oneshot(req).await.unwrap();
    }

    let req = Request::builder()
        .uri("/report")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/plain; charset=utf-8"
    );
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert_eq!(
        text,
        "Мои достижения\n\nДРУГОЕ:\n  - прочитал статью\n\nРАБОТА:\n  - Закрыл баг\n"
    );

    let req = Request::builder()
        .uri("/report/plain")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.starts_with("Мои достижения:\n\n"));
    assert!(text.contains("• РАБОТА: Закрыл баг (20 pts)\n"));
}

#[tokio::test]
async fn test_health_needs_no_token() {
    let (app, _) = setup_app().await;

    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
