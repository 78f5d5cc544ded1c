//! SeaORM implementation of AchievementRepository

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::domain::{Achievement, AchievementRepository, DomainError, NewAchievement};
use crate::models::achievement::{self, ActiveModel, Entity as AchievementEntity};

/// SeaORM-based implementation of AchievementRepository
pub struct SeaOrmAchievementRepository {
    db: DatabaseConnection,
}

impl SeaOrmAchievementRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Fixed-width UTC timestamps keep lexical and chronological order identical.
fn encode_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn to_domain(model: achievement::Model) -> Result<Achievement, DomainError> {
    let created_at = DateTime::parse_from_rfc3339(&model.created_at)
        .map_err(|e| {
            DomainError::Internal(format!(
                "Bad timestamp '{}' on achievement {}: {}",
                model.created_at, model.id, e
            ))
        })?
        .with_timezone(&Utc);

    Ok(Achievement {
        id: model.id,
        description: model.description,
        points: model.points,
        user_id: model.user_id,
        created_at,
    })
}

async fn insert<C: ConnectionTrait>(
    conn: &C,
    input: NewAchievement,
) -> Result<Achievement, DomainError> {
    let created_at = input.created_at.unwrap_or_else(Utc::now);

    let model = ActiveModel {
        description: Set(input.description),
        points: Set(input.points),
        user_id: Set(input.user_id),
        created_at: Set(encode_timestamp(&created_at)),
        ..Default::default()
    };

    to_domain(model.insert(conn).await?)
}

#[async_trait]
impl AchievementRepository for SeaOrmAchievementRepository {
    async fn create(&self, input: NewAchievement) -> Result<Achievement, DomainError> {
        insert(&self.db, input).await
    }

    async fn find_by_owner(&self, user_id: i32) -> Result<Vec<Achievement>, DomainError> {
        let models = AchievementEntity::find()
            .filter(achievement::Column::UserId.eq(user_id))
            .order_by_desc(achievement::Column::CreatedAt)
            .order_by_asc(achievement::Column::Id)
            .all(&self.db)
            .await?;

        models.into_iter().map(to_domain).collect()
    }

    async fn delete(&self, id: i32, user_id: i32) -> Result<(), DomainError> {
        let result = AchievementEntity::delete_many()
            .filter(achievement::Column::Id.eq(id))
            .filter(achievement::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }

    async fn delete_all(&self, user_id: i32) -> Result<u64, DomainError> {
        let result = AchievementEntity::delete_many()
            .filter(achievement::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn delete_many(&self, user_id: i32, ids: &[i32]) -> Result<u64, DomainError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = AchievementEntity::delete_many()
            .filter(achievement::Column::UserId.eq(user_id))
            .filter(achievement::Column::Id.is_in(ids.to_vec()))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn replace(
        &self,
        user_id: i32,
        ids: &[i32],
        replacements: Vec<NewAchievement>,
    ) -> Result<Vec<Achievement>, DomainError> {
        let txn = self.db.begin().await?;

        if !ids.is_empty() {
            AchievementEntity::delete_many()
                .filter(achievement::Column::UserId.eq(user_id))
                .filter(achievement::Column::Id.is_in(ids.to_vec()))
                .exec(&txn)
                .await?;
        }

        let mut created = Vec::with_capacity(replacements.len());
        for input in replacements {
            created.push(insert(&txn, input).await?);
        }

        txn.commit().await?;

        Ok(created)
    }
}
