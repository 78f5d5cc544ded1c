//! Services Layer
//!
//! This module contains pure business logic extracted from HTTP handlers.
//! Services work against repository traits and can be called directly or
//! through Axum handlers.

pub mod achievement_service;
pub mod backup;
pub mod color_service;
pub mod quote_service;
pub mod user_service;

// Re-export for convenience
pub use achievement_service::*;
pub use backup::{BackupJob, export_daily_reports, run_daily_backup};
