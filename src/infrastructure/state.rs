//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::{AchievementRepository, DisplayZone, GroupColorRepository, UserRepository};
use crate::infrastructure::config::Config;
use crate::infrastructure::{
    SeaOrmAchievementRepository, SeaOrmGroupColorRepository, SeaOrmUserRepository,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    /// Achievement repository
    pub achievement_repo: Arc<dyn AchievementRepository>,
    /// User repository
    pub user_repo: Arc<dyn UserRepository>,
    /// Category color repository
    pub color_repo: Arc<dyn GroupColorRepository>,
    /// Zone used for every displayed date
    pub zone: DisplayZone,
    pub quotes_path: PathBuf,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        let achievement_repo = Arc::new(SeaOrmAchievementRepository::new(db.clone()));
        let user_repo = Arc::new(SeaOrmUserRepository::new(db.clone()));
        let color_repo = Arc::new(SeaOrmGroupColorRepository::new(db.clone()));

        let zone = DisplayZone::from_hours(config.utc_offset_hours).unwrap_or_else(|| {
            tracing::warn!(
                "Invalid UTC offset {}, using default display zone",
                config.utc_offset_hours
            );
            DisplayZone::default()
        });

        Self {
            db,
            achievement_repo,
            user_repo,
            color_repo,
            zone,
            quotes_path: config.quotes_path(),
        }
    }

    /// Get the database connection
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
