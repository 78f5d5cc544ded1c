//! Daily export of per-user reports to an append-only text file

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tokio::io::AsyncWriteExt;

use crate::domain::aggregate::{AggregateFilter, aggregate};
use crate::domain::report::format_export_block;
use crate::domain::{AchievementRepository, DateRange, DisplayZone, DomainError, UserRepository};

/// Everything the background export needs
#[derive(Clone)]
pub struct BackupJob {
    pub achievement_repo: Arc<dyn AchievementRepository>,
    pub user_repo: Arc<dyn UserRepository>,
    pub zone: DisplayZone,
    pub path: PathBuf,
    /// Local hour (0-23) of the daily run
    pub hour: u32,
}

/// Append one block per user with achievements on `date`; returns the number of blocks written.
pub async fn export_daily_reports(
    achievements: &dyn AchievementRepository,
    users: &dyn UserRepository,
    zone: &DisplayZone,
    date: NaiveDate,
    path: &Path,
) -> Result<usize, DomainError> {
    let filter = AggregateFilter {
        range: Some(DateRange::single(date)),
        category: None,
    };

    let mut text = String::new();
    let mut written = 0;
    for user in users.find_all().await? {
        let records = achievements.find_by_owner(user.id).await?;
        let day = aggregate(&records, &filter, zone);
        if day.is_empty() {
            continue;
        }
        text.push_str(&format_export_block(&user.username, date, &day));
        written += 1;
    }

    if written > 0 {
        append_to_file(path, &text).await?;
    }

    Ok(written)
}

async fn append_to_file(path: &Path, text: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(text.as_bytes()).await?;
    file.flush().await
}

/// Run the export once a day at the configured local hour, forever.
pub async fn run_daily_backup(job: BackupJob) {
    tracing::info!(
        "Daily backup scheduled at {:02}:00 local time into {:?}",
        job.hour,
        job.path
    );

    loop {
        let now = Utc::now();
        let Some(next) = job.zone.next_run_after(&now, job.hour) else {
            tracing::error!("Invalid backup hour {}, daily backup disabled", job.hour);
            return;
        };

        let wait = (next - now).to_std().unwrap_or_default();
        tokio::time::sleep(wait).await;

        let date = job.zone.local_date(&next);
        match export_daily_reports(
            job.achievement_repo.as_ref(),
            job.user_repo.as_ref(),
            &job.zone,
            date,
            &job.path,
        )
        .await
        {
            Ok(count) => tracing::info!("Daily backup for {} wrote {} report(s)", date, count),
            Err(e) => tracing::error!("Daily backup for {} failed: {}", date, e),
        }
    }
}
