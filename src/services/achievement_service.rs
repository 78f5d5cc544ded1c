//! Achievement Service - Pure business logic without HTTP layer

use crate::domain::aggregate::{AggregateFilter, aggregate, select_scope};
use crate::domain::category::is_valid_category;
use crate::domain::level::level_up;
use crate::domain::summary::plan_summary;
use crate::domain::{
    Achievement, AchievementRepository, Aggregate, DateRange, DisplayZone, DomainError, LevelInfo,
    NewAchievement,
};

/// Points accepted for a manually added achievement
pub const MIN_POINTS: i64 = 5;
pub const MAX_POINTS: i64 = 50;

/// Result of adding an achievement
#[derive(Debug, Clone)]
pub struct AddedAchievement {
    pub achievement: Achievement,
    pub level: LevelInfo,
    /// Set when this achievement crossed a level boundary
    pub level_up: Option<i64>,
}

/// Request to collapse a category scope into summary records
#[derive(Debug, Clone)]
pub struct SummaryRequest {
    pub category: String,
    pub range: Option<DateRange>,
    pub items: Vec<String>,
}

fn total_points(records: &[Achievement]) -> i64 {
    records.iter().map(|r| r.points).sum()
}

/// Validate and store a new achievement
pub async fn add_achievement(
    repo: &dyn AchievementRepository,
    user_id: i32,
    description: &str,
    points: i64,
) -> Result<AddedAchievement, DomainError> {
    let description = description.trim();
    if description.is_empty() {
        return Err(DomainError::Validation(
            "Description must not be empty".to_string(),
        ));
    }
    if !(MIN_POINTS..=MAX_POINTS).contains(&points) {
        return Err(DomainError::Validation(format!(
            "Points must be between {} and {}",
            MIN_POINTS, MAX_POINTS
        )));
    }

    let before = total_points(&repo.find_by_owner(user_id).await?);

    let achievement = repo
        .create(NewAchievement {
            description: description.to_string(),
            points,
            user_id,
            created_at: None,
        })
        .await?;

    let after = before + achievement.points;
    let level_up = level_up(before, after);
    if let Some(level) = level_up {
        tracing::info!("User {} reached level {}", user_id, level);
    }

    Ok(AddedAchievement {
        achievement,
        level: LevelInfo::from_total(after),
        level_up,
    })
}

/// All achievements of a user, newest first
pub async fn list_achievements(
    repo: &dyn AchievementRepository,
    user_id: i32,
) -> Result<Vec<Achievement>, DomainError> {
    repo.find_by_owner(user_id).await
}

pub async fn level_info(
    repo: &dyn AchievementRepository,
    user_id: i32,
) -> Result<LevelInfo, DomainError> {
    let records = repo.find_by_owner(user_id).await?;
    Ok(LevelInfo::from_total(total_points(&records)))
}

pub async fn delete_achievement(
    repo: &dyn AchievementRepository,
    id: i32,
    user_id: i32,
) -> Result<(), DomainError> {
    repo.delete(id, user_id).await
}

pub async fn delete_all_achievements(
    repo: &dyn AchievementRepository,
    user_id: i32,
) -> Result<u64, DomainError> {
    let removed = repo.delete_all(user_id).await?;
    tracing::info!("Deleted all {} achievements of user {}", removed, user_id);
    Ok(removed)
}

/// Grouped view of a user's achievements
pub async fn grouped_achievements(
    repo: &dyn AchievementRepository,
    user_id: i32,
    filter: &AggregateFilter,
    zone: &DisplayZone,
) -> Result<Aggregate, DomainError> {
    let records = repo.find_by_owner(user_id).await?;
    Ok(aggregate(&records, filter, zone))
}

/// Delete a user's achievements of one category within a date range
pub async fn delete_category_range(
    repo: &dyn AchievementRepository,
    user_id: i32,
    category: &str,
    range: Option<DateRange>,
    zone: &DisplayZone,
) -> Result<u64, DomainError> {
    let records = repo.find_by_owner(user_id).await?;
    let ids: Vec<i32> = select_scope(&records, category, range, zone)
        .iter()
        .map(|r| r.id)
        .collect();

    repo.delete_many(user_id, &ids).await
}

/// Replace a category scope with summary records carrying the same total.
///
/// Nothing is deleted when the category would not survive extraction
/// (`Validation`), the scope is empty (`NotFound`) or no usable replacement
/// text is given (`Validation`).
pub async fn rewrite_summary(
    repo: &dyn AchievementRepository,
    user_id: i32,
    request: SummaryRequest,
    zone: &DisplayZone,
) -> Result<Vec<Achievement>, DomainError> {
    if !is_valid_category(&request.category) {
        return Err(DomainError::Validation(format!(
            "'{}' is not a category: use upper-case letters without ':'",
            request.category
        )));
    }

    let records = repo.find_by_owner(user_id).await?;
    let scope = select_scope(&records, &request.category, request.range, zone);
    // Newest record of the scope; the summary keeps this timestamp
    let Some(anchor) = scope.iter().map(|r| r.created_at).max() else {
        return Err(DomainError::NotFound);
    };

    let total: i64 = scope.iter().map(|r| r.points).sum();
    let Some(plan) = plan_summary(&request.category, &request.items, total) else {
        tracing::warn!(
            "Summary for '{}' skipped: no replacement items",
            request.category
        );
        return Err(DomainError::Validation(
            "At least one replacement item is required".to_string(),
        ));
    };

    let ids: Vec<i32> = scope.iter().map(|r| r.id).collect();

    let replacements = plan
        .into_iter()
        .map(|item| NewAchievement {
            description: item.description,
            points: item.points,
            user_id,
            created_at: Some(anchor),
        })
        .collect();

    let created = repo.replace(user_id, &ids, replacements).await?;
    tracing::info!(
        "Summarized {} '{}' achievements of user {} into {} ({} points)",
        ids.len(),
        request.category,
        user_id,
        created.len(),
        total
    );

    Ok(created)
}
