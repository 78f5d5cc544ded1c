//! SeaORM implementation of GroupColorRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, sea_query::OnConflict,
};

use crate::domain::{DomainError, GroupColorRepository};
use crate::models::group_color::{self, ActiveModel, Entity as GroupColorEntity};

pub struct SeaOrmGroupColorRepository {
    db: DatabaseConnection,
}

impl SeaOrmGroupColorRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GroupColorRepository for SeaOrmGroupColorRepository {
    async fn find_by_owner(&self, user_id: i32) -> Result<HashMap<String, String>, DomainError> {
        let rows = GroupColorEntity::find()
            .filter(group_color::Column::UserId.eq(user_id))
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(|r| (r.group_name, r.color)).collect())
    }

    async fn save(
        &self,
        user_id: i32,
        group_name: String,
        color: String,
    ) -> Result<(), DomainError> {
        let row = ActiveModel {
            user_id: Set(user_id),
            group_name: Set(group_name),
            color: Set(color),
        };

        GroupColorEntity::insert(row)
            .on_conflict(
                OnConflict::columns([group_color::Column::UserId, group_color::Column::GroupName])
                    .update_column(group_color::Column::Color)
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        Ok(())
    }
}
