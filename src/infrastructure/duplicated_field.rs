use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::{
    domain::{error::RepositoryError, repositories::duplicated_field::DuplicatedField},
    infrastructure::{db_error::map_db_err, entity::teachers},
};

/// Duplicate lookups against the `teachers` table
#[derive(Clone)]
pub struct PostgresTeacherDuplicatedField {
    db: Arc<DatabaseConnection>,
}

impl PostgresTeacherDuplicatedField {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DuplicatedField for PostgresTeacherDuplicatedField {
    async fn is_duplicated(&self, field: &str, value: &str) -> Result<bool, RepositoryError> {
        let column = match field {
            "cpf" => teachers::Column::Cpf,
            "email" => teachers::Column::Email,
            other => return Err(RepositoryError::UnknownField(other.to_string())),
        };

        let existing = teachers::Entity::find()
            .filter(column.eq(value))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(existing.is_some())
    }
}
