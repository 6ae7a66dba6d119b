use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub cpf: String,
    pub birth_date: Option<String>,
    #[sea_orm(unique)]
    pub email: String,
    pub cellphone: Option<String>,
    pub whats_app: Option<String>,
    pub photo: Option<String>,
    pub lattes: String,
    pub cv: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub about: Option<String>,
    pub password_hash: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
