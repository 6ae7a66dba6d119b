use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

use crate::{
    domain::{
        error::RepositoryError,
        models::{
            password::HashedPassword,
            user::{NewUser, User, UserFilter, UserId},
        },
        repositories::user_repository::UserRepository,
    },
    infrastructure::{db_error::map_db_err, entity::users},
};

#[derive(Clone)]
pub struct PostgresUserRepository {
    db: Arc<DatabaseConnection>,
}

impl PostgresUserRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn condition(filter: &UserFilter) -> Condition {
    let mut condition = Condition::all();
    if let Some(name) = &filter.name {
        condition = condition.add(users::Column::Name.eq(name.as_str()));
    }
    if let Some(cpf) = &filter.cpf {
        condition = condition.add(users::Column::Cpf.eq(cpf.as_str()));
    }
    if let Some(email) = &filter.email {
        condition = condition.add(users::Column::Email.eq(email.as_str()));
    }
    condition
}

fn to_domain(model: users::Model) -> User {
    let data = NewUser {
        name: model.name,
        cpf: model.cpf,
        birthdate: model.birthdate,
        cellphone: model.cellphone,
        email: model.email,
        password_hash: HashedPassword::new(model.password_hash),
    };
    User::reconstruct(
        UserId::from_uuid(model.id),
        data,
        model.created_at.naive_utc().and_utc(),
    )
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find(&self, filter: UserFilter) -> Result<Vec<User>, RepositoryError> {
        let models = users::Entity::find()
            .filter(condition(&filter))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn find_one(&self, filter: UserFilter) -> Result<Option<User>, RepositoryError> {
        let model = users::Entity::find()
            .filter(condition(&filter))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(to_domain))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let model = users::Entity::find_by_id(*id.as_uuid())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(to_domain))
    }

    async fn save(&self, user: NewUser) -> Result<User, RepositoryError> {
        let user_model = users::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(user.name),
            cpf: Set(user.cpf),
            birthdate: Set(user.birthdate),
            cellphone: Set(user.cellphone),
            email: Set(user.email),
            password_hash: Set(user.password_hash.as_str().to_string()),
            created_at: Set(Utc::now().fixed_offset()),
        };
        let inserted = user_model
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(to_domain(inserted))
    }

    async fn delete(&self, id: UserId) -> Result<(), RepositoryError> {
        let result = users::Entity::delete_by_id(*id.as_uuid())
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
