use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use achievement_tracker::infrastructure::AppState;
use achievement_tracker::services::{BackupJob, run_daily_backup};
use achievement_tracker::{config, db, server};

#[tokio::main]
async fn main() {
    // .env may carry RUST_LOG, so load it first
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "achievement_tracker=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = config::Config::from_env();

    // Initialize database
    let db = db::init_db(&config.database_url)
        .await
        .expect("Failed to initialize database");

    let state = AppState::new(db, &config);

    // Daily export runs independently of request handling
    if config.backup_enabled {
        let job = BackupJob {
            achievement_repo: state.achievement_repo.clone(),
            user_repo: state.user_repo.clone(),
            zone: state.zone,
            path: config.backup_path(),
            hour: config.backup_hour,
        };
        tokio::spawn(run_daily_backup(job));
    } else {
        tracing::info!("Daily backup disabled via BACKUP_ENABLED");
    }

    let app = server::build_router(state, &config.cors_allowed_origins);

    // Find available port
    let port = server::find_available_port(config.port).expect("Failed to find available port");

    if port != config.port {
        tracing::warn!(
            "Preferred port {} was not available, using port {} instead",
            config.port,
            port
        );
    }

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Achievement tracker listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
