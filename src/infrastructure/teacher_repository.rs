use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection};
use uuid::Uuid;

use crate::{
    domain::{
        error::RepositoryError,
        models::{
            password::HashedPassword,
            teacher::{NewTeacher, Teacher, TeacherId},
        },
        repositories::teacher_repository::TeacherRepository,
    },
    infrastructure::{db_error::map_db_err, entity::teachers},
};

#[derive(Clone)]
pub struct PostgresTeacherRepository {
    db: Arc<DatabaseConnection>,
}

impl PostgresTeacherRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn to_domain(model: teachers::Model) -> Teacher {
    let data = NewTeacher {
        name: model.name,
        cpf: model.cpf,
        birth_date: model.birth_date,
        email: model.email,
        cellphone: model.cellphone,
        whats_app: model.whats_app,
        photo: model.photo,
        lattes: model.lattes,
        cv: model.cv,
        about: model.about,
        password_hash: HashedPassword::new(model.password_hash),
    };
    Teacher::reconstruct(
        TeacherId::from_uuid(model.id),
        data,
        model.created_at.naive_utc().and_utc(),
    )
}

#[async_trait]
impl TeacherRepository for PostgresTeacherRepository {
    async fn save(&self, teacher: NewTeacher) -> Result<Teacher, RepositoryError> {
        let teacher_model = teachers::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(teacher.name),
            cpf: Set(teacher.cpf),
            birth_date: Set(teacher.birth_date),
            email: Set(teacher.email),
            cellphone: Set(teacher.cellphone),
            whats_app: Set(teacher.whats_app),
            photo: Set(teacher.photo),
            lattes: Set(teacher.lattes),
            cv: Set(teacher.cv),
            about: Set(teacher.about),
            password_hash: Set(teacher.password_hash.as_str().to_string()),
            created_at: Set(Utc::now().fixed_offset()),
        };
        let inserted = teacher_model
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(to_domain(inserted))
    }
}
