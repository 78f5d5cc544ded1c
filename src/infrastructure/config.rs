use std::env;
use std::path::PathBuf;

use crate::domain::time::DEFAULT_UTC_OFFSET_HOURS;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub data_dir: PathBuf,
    pub quotes_file: String,
    pub backup_file: String,
    pub backup_enabled: bool,
    /// Local hour (0-23) at which the daily export runs
    pub backup_hour: u32,
    pub utc_offset_hours: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://achievements.db?mode=rwc".to_string(),
            port: 8000,
            cors_allowed_origins: Vec::new(),
            data_dir: PathBuf::from("data"),
            quotes_file: "quotes.txt".to_string(),
            backup_file: "achievements_backup.txt".to_string(),
            backup_enabled: true,
            backup_hour: 23,
            utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_else(Vec::new),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            quotes_file: env::var("QUOTES_FILE").unwrap_or(defaults.quotes_file),
            backup_file: env::var("BACKUP_FILE").unwrap_or(defaults.backup_file),
            backup_enabled: env::var("BACKUP_ENABLED")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(defaults.backup_enabled),
            backup_hour: env::var("BACKUP_HOUR")
                .ok()
                .and_then(|h| h.parse().ok())
                .filter(|h| *h < 24)
                .unwrap_or(defaults.backup_hour),
            utc_offset_hours: env::var("UTC_OFFSET_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .filter(|h: &i32| h.abs() < 24)
                .unwrap_or(defaults.utc_offset_hours),
        }
    }

    pub fn quotes_path(&self) -> PathBuf {
        self.data_dir.join(&self.quotes_file)
    }

    pub fn backup_path(&self) -> PathBuf {
        self.data_dir.join(&self.backup_file)
    }
}
