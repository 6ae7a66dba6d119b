use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::{
    domain::{
        error::{DomainError, ValidationError},
        models::{
            cpf,
            user::{NewUser, User},
        },
        repositories::user_repository::UserRepository,
        services::{password_service::PasswordHasher, validator::Validator},
    },
    usecase::presenter::Presenter,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    pub name: String,
    pub cpf: String,
    pub birthdate: String,
    pub cellphone: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserResponse {
    pub id: String,
    pub name: String,
    pub cpf: String,
    pub birthdate: String,
    pub cellphone: String,
    pub email: String,
    pub created_at: String,
}

impl From<User> for CreateUserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id().to_string(),
            name: user.name().to_string(),
            cpf: user.cpf().to_string(),
            birthdate: user.birthdate().to_string(),
            cellphone: user.cellphone().to_string(),
            email: user.email().to_string(),
            created_at: user.created_at().to_rfc3339(),
        }
    }
}

pub struct CreateUserInteractor<R: UserRepository, V: Validator, P: PasswordHasher> {
    user_repository: R,
    validation: V,
    password_hasher: P,
}

impl<R: UserRepository, V: Validator, P: PasswordHasher> CreateUserInteractor<R, V, P> {
    pub fn new(user_repository: R, validation: V, password_hasher: P) -> Self {
        Self {
            user_repository,
            validation,
            password_hasher,
        }
    }

    /// Runs the use case and hands the outcome to `presenter`.
    ///
    /// Failures never escape: validation, hashing and repository errors all
    /// end up on the presenter's error channel.
    #[instrument(skip_all)]
    pub async fn execute<O: Presenter<CreateUserResponse>>(
        &self,
        data: CreateUserRequest,
        presenter: &mut O,
    ) {
        match self.create(data).await {
            Ok(response) => {
                info!(user_id = %response.id, "user created");
                presenter.reply(response);
            }
            Err(error) => {
                warn!(%error, "user creation rejected");
                presenter.throw(error);
            }
        }
    }

    async fn create(&self, data: CreateUserRequest) -> Result<CreateUserResponse, DomainError> {
        // Input data validations
        self.check(&data)?;

        let password_hash = self.password_hasher.hash(&data.password)?;

        // Data persistence
        let user = self
            .user_repository
            .save(NewUser {
                name: data.name,
                cpf: cpf::normalize(&data.cpf),
                birthdate: data.birthdate,
                cellphone: data.cellphone,
                email: data.email,
                password_hash,
            })
            .await?;

        Ok(user.into())
    }

    /// Stops at the first failing rule.
    fn check(&self, data: &CreateUserRequest) -> Result<(), ValidationError> {
        if data.name.is_empty() {
            return Err(ValidationError::UserNameInvalid("invalid name".to_string()));
        }
        if !self.validation.is_cpf(&data.cpf) {
            return Err(ValidationError::UserCpfInvalid("invalid cpf".to_string()));
        }
        if !self.validation.is_date(&data.birthdate) {
            return Err(ValidationError::UserBirthdateInvalid(
                "invalid birthdate".to_string(),
            ));
        }
        if !self.validation.is_cellphone(&data.cellphone) {
            return Err(ValidationError::UserCellphoneInvalid(
                "invalid cellphone".to_string(),
            ));
        }
        if !self.validation.is_email(&data.email) {
            return Err(ValidationError::UserEmailInvalid("invalid e-mail".to_string()));
        }
        Ok(())
    }
}
