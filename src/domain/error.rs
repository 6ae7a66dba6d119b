use thiserror::Error;

/// Problems the client can fix by changing the request.
///
/// Every variant is tagged with the request field it refers to, see
/// [`ValidationError::field`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing param: {0}")]
    MissingParam(String),

    #[error("Invalid param: {0}")]
    InvalidParam(String),

    #[error("The received {0} is already in use")]
    DuplicatedField(String),

    #[error("{0}")]
    UserNameInvalid(String),

    #[error("{0}")]
    UserCpfInvalid(String),

    #[error("{0}")]
    UserBirthdateInvalid(String),

    #[error("{0}")]
    UserCellphoneInvalid(String),

    #[error("{0}")]
    UserEmailInvalid(String),

    #[error("Weak password (minimum 8 characters required)")]
    WeakPassword,
}

impl ValidationError {
    /// Name of the offending request field
    pub fn field(&self) -> &str {
        match self {
            Self::MissingParam(field) | Self::InvalidParam(field) | Self::DuplicatedField(field) => {
                field
            }
            Self::UserNameInvalid(_) => "name",
            Self::UserCpfInvalid(_) => "cpf",
            Self::UserBirthdateInvalid(_) => "birthdate",
            Self::UserCellphoneInvalid(_) => "cellphone",
            Self::UserEmailInvalid(_) => "email",
            Self::WeakPassword => "password",
        }
    }

    /// Stable error kind exposed to HTTP clients
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingParam(_) => "MissingParamError",
            Self::InvalidParam(_) => "InvalidParamError",
            Self::DuplicatedField(_) => "DuplicatedFieldError",
            Self::UserNameInvalid(_) => "UserNameInvalidError",
            Self::UserCpfInvalid(_) => "UserCPFInvalidError",
            Self::UserBirthdateInvalid(_) => "UserBirthdateInvalidError",
            Self::UserCellphoneInvalid(_) => "UserCellphoneInvalidError",
            Self::UserEmailInvalid(_) => "UserEmailInvalidError",
            Self::WeakPassword => "WeakPasswordError",
        }
    }
}

/// A validator that failed to produce an answer at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validator failure: {0}")]
pub struct ValidatorFault(pub String);

#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Validator(#[from] ValidatorFault),

    #[error("Password hashing failed")]
    PasswordHash,

    #[error("Failed to generate token: {0}")]
    Token(String),
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A unique column already holds the value
    #[error("Duplicated value for {0}")]
    Duplicated(String),
}
