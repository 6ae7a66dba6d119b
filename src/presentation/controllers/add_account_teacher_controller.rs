use async_trait::async_trait;
use tracing::{error, instrument, warn};

use crate::{
    domain::{
        error::{DomainError, RepositoryError, ValidationError},
        models::cpf,
        repositories::duplicated_field::DuplicatedField,
        services::validator::Validation,
    },
    presentation::{
        controllers::Controller,
        http::{
            HttpRequest, HttpResponse, bad_request, duplicated_field_error, error_response, ok,
            server_error,
        },
    },
    usecase::add_account_teacher_usecase::{
        AddAccountTeacher, AddAccountTeacherModel, AddAccountTeacherParams,
    },
};

fn optional(request: &HttpRequest, field: &str) -> Option<String> {
    request.field(field).map(str::to_string)
}

fn required(request: &HttpRequest, field: &str) -> Result<String, ValidationError> {
    request
        .field(field)
        .map(str::to_string)
        .ok_or_else(|| ValidationError::MissingParam(field.to_string()))
}

impl TryFrom<&HttpRequest> for AddAccountTeacherParams {
    type Error = ValidationError;

    /// Required fields are read in the order `name, cpf, email, lattes, cv`
    /// and the first absent one is reported.
    fn try_from(request: &HttpRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required(request, "name")?,
            cpf: required(request, "cpf")?,
            birth_date: optional(request, "birthDate"),
            email: required(request, "email")?,
            cellphone: optional(request, "cellphone"),
            whats_app: optional(request, "whatsApp"),
            photo: optional(request, "photo"),
            lattes: required(request, "lattes")?,
            cv: required(request, "cv")?,
            about: optional(request, "about"),
            password: request.field("password").unwrap_or_default().to_string(),
        })
    }
}

pub struct AddAccountTeacherController<E, C, D, A>
where
    E: Validation,
    C: Validation,
    D: DuplicatedField,
    A: AddAccountTeacher,
{
    email_validation: E,
    cpf_validation: C,
    duplicated_field: D,
    add_account: A,
}

impl<E, C, D, A> AddAccountTeacherController<E, C, D, A>
where
    E: Validation,
    C: Validation,
    D: DuplicatedField,
    A: AddAccountTeacher,
{
    pub fn new(email_validation: E, cpf_validation: C, duplicated_field: D, add_account: A) -> Self {
        Self {
            email_validation,
            cpf_validation,
            duplicated_field,
            add_account,
        }
    }

    /// `Err` is reserved for failures the client cannot fix.
    async fn try_handle(
        &self,
        request: HttpRequest,
    ) -> Result<HttpResponse<AddAccountTeacherModel>, DomainError> {
        let mut params = match AddAccountTeacherParams::try_from(&request) {
            Ok(params) => params,
            Err(error) => return Ok(bad_request(error)),
        };

        if !self.email_validation.validate(&params.email)? {
            return Ok(bad_request(ValidationError::InvalidParam(
                "email".to_string(),
            )));
        }
        if !self.cpf_validation.validate(&params.cpf)? {
            return Ok(bad_request(ValidationError::InvalidParam("cpf".to_string())));
        }
        params.cpf = cpf::normalize(&params.cpf);
        if self
            .duplicated_field
            .is_duplicated("cpf", &params.cpf)
            .await?
        {
            return Ok(duplicated_field_error(ValidationError::DuplicatedField(
                "cpf".to_string(),
            )));
        }

        match self.add_account.add(params).await {
            Ok(account) => Ok(ok(account)),
            Err(
                error @ (DomainError::Validation(_)
                | DomainError::Repository(RepositoryError::Duplicated(_))),
            ) => Ok(error_response(error)),
            Err(error) => Err(error),
        }
    }
}

#[async_trait]
impl<E, C, D, A> Controller for AddAccountTeacherController<E, C, D, A>
where
    E: Validation,
    C: Validation,
    D: DuplicatedField,
    A: AddAccountTeacher,
{
    type Body = AddAccountTeacherModel;

    #[instrument(skip_all)]
    async fn handle(&self, request: HttpRequest) -> HttpResponse<AddAccountTeacherModel> {
        match self.try_handle(request).await {
            Ok(response) => {
                if !response.status_code.is_success() {
                    warn!(status = %response.status_code, "teacher account rejected");
                }
                response
            }
            Err(cause) => {
                error!(error = %cause, "teacher account creation failed");
                server_error(cause)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::http::StatusCode;
    use rstest::*;

    use super::*;
    use crate::{
        domain::{
            error::{RepositoryError, ValidatorFault},
            repositories::duplicated_field::MockDuplicatedField,
            services::validator::MockValidation,
        },
        presentation::http::HttpBody,
        usecase::add_account_teacher_usecase::MockAddAccountTeacher,
    };

    type Sut = AddAccountTeacherController<
        MockValidation,
        MockValidation,
        MockDuplicatedField,
        MockAddAccountTeacher,
    >;

    fn passing_validation() -> MockValidation {
        let mut validation = MockValidation::new();
        validation.expect_validate().returning(|_| Ok(true));
        validation
    }

    fn free_cpf() -> MockDuplicatedField {
        let mut duplicated_field = MockDuplicatedField::new();
        duplicated_field
            .expect_is_duplicated()
            .returning(|_, _| Ok(false));
        duplicated_field
    }

    fn add_account_model() -> AddAccountTeacherModel {
        AddAccountTeacherModel {
            id: "1".to_string(),
            name: "any_name".to_string(),
            cpf: "any_cpf".to_string(),
            birth_date: Some("any_birthDate".to_string()),
            email: "any_mail@mail.com".to_string(),
            cellphone: Some("any_cellphone".to_string()),
            whats_app: Some("any_whatsApp".to_string()),
            photo: Some("any_photo".to_string()),
            lattes: "any_lattes".to_string(),
            cv: "any_cv".to_string(),
            about: Some("any_about".to_string()),
            token: "any_token".to_string(),
            created_at: "2024-01-02T03:04:05+00:00".to_string(),
        }
    }

    fn add_account() -> MockAddAccountTeacher {
        let mut add_account = MockAddAccountTeacher::new();
        add_account
            .expect_add()
            .returning(|_| Ok(add_account_model()));
        add_account
    }

    fn make_sut() -> Sut {
        AddAccountTeacherController::new(
            passing_validation(),
            passing_validation(),
            free_cpf(),
            add_account(),
        )
    }

    #[fixture]
    fn http_request() -> HttpRequest {
        let body = [
            ("name", "any_name"),
            ("cpf", "any_cpf"),
            ("birthDate", "any_birthDate"),
            ("email", "any_mail@mail.com"),
            ("cellphone", "any_cellphone"),
            ("whatsApp", "any_whatsApp"),
            ("photo", "any_photo"),
            ("lattes", "any_lattes"),
            ("cv", "any_cv"),
            ("about", "any_about"),
            ("password", "any_password"),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect::<HashMap<_, _>>();
        HttpRequest::new(body)
    }

    fn without(mut request: HttpRequest, field: &str) -> HttpRequest {
        request.body.remove(field);
        request
    }

    #[rstest]
    #[case("name")]
    #[case("cpf")]
    #[case("email")]
    #[case("lattes")]
    #[case("cv")]
    #[tokio::test]
    async fn test_missing_required_field_is_bad_request(
        http_request: HttpRequest,
        #[case] field: &str,
    ) {
        let sut = make_sut();

        let response = sut.handle(without(http_request, field)).await;

        assert_eq!(
            response,
            bad_request(ValidationError::MissingParam(field.to_string()))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_first_missing_field_wins(http_request: HttpRequest) {
        let sut = make_sut();

        let request = without(without(without(http_request, "cv"), "email"), "cpf");
        let response = sut.handle(request).await;

        assert_eq!(
            response,
            bad_request(ValidationError::MissingParam("cpf".to_string()))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_empty_field_counts_as_missing(mut http_request: HttpRequest) {
        let sut = make_sut();

        http_request.body.insert("lattes".to_string(), String::new());
        let response = sut.handle(http_request).await;

        assert_eq!(
            response,
            bad_request(ValidationError::MissingParam("lattes".to_string()))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_invalid_email_is_bad_request(http_request: HttpRequest) {
        let mut email_validation = MockValidation::new();
        email_validation
            .expect_validate()
            .withf(|input| input == "any_mail@mail.com")
            .times(1)
            .returning(|_| Ok(false));
        let mut cpf_validation = MockValidation::new();
        cpf_validation.expect_validate().never();
        let sut =
            AddAccountTeacherController::new(email_validation, cpf_validation, free_cpf(), add_account());

        let response = sut.handle(http_request).await;

        assert_eq!(
            response,
            bad_request(ValidationError::InvalidParam("email".to_string()))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_email_validator_fault_is_server_error(http_request: HttpRequest) {
        let mut email_validation = MockValidation::new();
        email_validation
            .expect_validate()
            .returning(|_| Err(ValidatorFault("boom".to_string())));
        let sut = AddAccountTeacherController::new(
            email_validation,
            passing_validation(),
            free_cpf(),
            add_account(),
        );

        let response = sut.handle(http_request).await;

        assert_eq!(
            response,
            server_error(DomainError::Validator(ValidatorFault("boom".to_string())))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_cpf_validator_receives_cpf(http_request: HttpRequest) {
        let mut cpf_validation = MockValidation::new();
        cpf_validation
            .expect_validate()
            .withf(|input| input == "any_cpf")
            .times(1)
            .returning(|_| Ok(true));
        let sut = AddAccountTeacherController::new(
            passing_validation(),
            cpf_validation,
            free_cpf(),
            add_account(),
        );

        let response = sut.handle(http_request).await;

        assert_eq!(response.status_code, StatusCode::OK);
    }

    #[rstest]
    #[tokio::test]
    async fn test_invalid_cpf_is_bad_request(http_request: HttpRequest) {
        let mut cpf_validation = MockValidation::new();
        cpf_validation.expect_validate().returning(|_| Ok(false));
        let mut duplicated_field = MockDuplicatedField::new();
        duplicated_field.expect_is_duplicated().never();
        let sut = AddAccountTeacherController::new(
            passing_validation(),
            cpf_validation,
            duplicated_field,
            add_account(),
        );

        let response = sut.handle(http_request).await;

        assert_eq!(
            response,
            bad_request(ValidationError::InvalidParam("cpf".to_string()))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_cpf_validator_fault_is_server_error(http_request: HttpRequest) {
        let mut cpf_validation = MockValidation::new();
        cpf_validation
            .expect_validate()
            .returning(|_| Err(ValidatorFault("boom".to_string())));
        let sut = AddAccountTeacherController::new(
            passing_validation(),
            cpf_validation,
            free_cpf(),
            add_account(),
        );

        let response = sut.handle(http_request).await;

        assert_eq!(response.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        let HttpBody::Error(body) = response.body else {
            panic!("expected an error body");
        };
        assert_eq!(body.field, None);
    }

    #[rstest]
    #[tokio::test]
    async fn test_duplicated_cpf_is_bad_request(http_request: HttpRequest) {
        let mut duplicated_field = MockDuplicatedField::new();
        duplicated_field
            .expect_is_duplicated()
            .withf(|field, value| field == "cpf" && value == "any_cpf")
            .times(1)
            .returning(|_, _| Ok(true));
        let mut add_account = MockAddAccountTeacher::new();
        add_account.expect_add().never();
        let sut = AddAccountTeacherController::new(
            passing_validation(),
            passing_validation(),
            duplicated_field,
            add_account,
        );

        let response = sut.handle(http_request).await;

        assert_eq!(
            response,
            duplicated_field_error(ValidationError::DuplicatedField("cpf".to_string()))
        );
    }

    #[rstest]
    #[case("529.982.247-25")]
    #[case("52998224725")]
    #[tokio::test]
    async fn test_duplicate_lookup_uses_cpf_digits(
        #[case] cpf: &str,
        mut http_request: HttpRequest,
    ) {
        http_request.body.insert("cpf".to_string(), cpf.to_string());
        let mut duplicated_field = MockDuplicatedField::new();
        duplicated_field
            .expect_is_duplicated()
            .withf(|field, value| field == "cpf" && value == "52998224725")
            .times(1)
            .returning(|_, _| Ok(true));
        let mut add_account = MockAddAccountTeacher::new();
        add_account.expect_add().never();
        let sut = AddAccountTeacherController::new(
            passing_validation(),
            passing_validation(),
            duplicated_field,
            add_account,
        );

        let response = sut.handle(http_request).await;

        assert_eq!(
            response,
            duplicated_field_error(ValidationError::DuplicatedField("cpf".to_string()))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_formatted_cpf_reaches_usecase_as_digits(mut http_request: HttpRequest) {
        http_request
            .body
            .insert("cpf".to_string(), "529.982.247-25".to_string());
        let mut add_account = MockAddAccountTeacher::new();
        add_account
            .expect_add()
            .withf(|params| params.cpf == "52998224725")
            .times(1)
            .returning(|_| Ok(add_account_model()));
        let sut = AddAccountTeacherController::new(
            passing_validation(),
            passing_validation(),
            free_cpf(),
            add_account,
        );

        let response = sut.handle(http_request).await;

        assert_eq!(response.status_code, StatusCode::OK);
    }

    #[rstest]
    #[tokio::test]
    async fn test_unique_violation_on_save_is_duplicated_field(http_request: HttpRequest) {
        let mut add_account = MockAddAccountTeacher::new();
        add_account
            .expect_add()
            .returning(|_| Err(RepositoryError::Duplicated("email".to_string()).into()));
        let sut = AddAccountTeacherController::new(
            passing_validation(),
            passing_validation(),
            free_cpf(),
            add_account,
        );

        let response = sut.handle(http_request).await;

        assert_eq!(
            response,
            duplicated_field_error(ValidationError::DuplicatedField("email".to_string()))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_duplicate_lookup_failure_is_server_error(http_request: HttpRequest) {
        let mut duplicated_field = MockDuplicatedField::new();
        duplicated_field
            .expect_is_duplicated()
            .returning(|_, _| Err(RepositoryError::DatabaseError("down".to_string())));
        let sut = AddAccountTeacherController::new(
            passing_validation(),
            passing_validation(),
            duplicated_field,
            add_account(),
        );

        let response = sut.handle(http_request).await;

        assert_eq!(response.status_code, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[rstest]
    #[tokio::test]
    async fn test_weak_password_from_usecase_is_bad_request(http_request: HttpRequest) {
        let mut add_account = MockAddAccountTeacher::new();
        add_account
            .expect_add()
            .returning(|_| Err(ValidationError::WeakPassword.into()));
        let sut = AddAccountTeacherController::new(
            passing_validation(),
            passing_validation(),
            free_cpf(),
            add_account,
        );

        let response = sut.handle(without(http_request, "password")).await;

        assert_eq!(response, bad_request(ValidationError::WeakPassword));
    }

    #[rstest]
    #[tokio::test]
    async fn test_valid_request_is_ok(http_request: HttpRequest) {
        let mut add_account = MockAddAccountTeacher::new();
        add_account
            .expect_add()
            .withf(|params| {
                params.name == "any_name"
                    && params.birth_date.as_deref() == Some("any_birthDate")
                    && params.whats_app.as_deref() == Some("any_whatsApp")
                    && params.password == "any_password"
            })
            .times(1)
            .returning(|_| Ok(add_account_model()));
        let sut = AddAccountTeacherController::new(
            passing_validation(),
            passing_validation(),
            free_cpf(),
            add_account,
        );

        let response = sut.handle(http_request).await;

        assert_eq!(response, ok(add_account_model()));
    }
}
