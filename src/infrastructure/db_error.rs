use sea_orm::{DbErr, SqlErr};

use crate::domain::error::RepositoryError;

/// Columns carrying a unique index, matched against the violated constraint name
const UNIQUE_COLUMNS: [&str; 2] = ["cpf", "email"];

pub fn map_db_err(error: DbErr) -> RepositoryError {
    classify(error.sql_err(), error.to_string())
}

fn classify(sql_err: Option<SqlErr>, message: String) -> RepositoryError {
    match sql_err {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            let field = UNIQUE_COLUMNS
                .into_iter()
                .find(|column| detail.contains(column))
                .unwrap_or("record");
            RepositoryError::Duplicated(field.to_string())
        }
        _ => RepositoryError::DatabaseError(message),
    }
}
