//! Format checks applied to incoming account data.
//!
//! [`Validator`] groups the predicates used by the user interactor.
//! [`Validation`] is the single-field shape the teacher controller is wired
//! with; its error channel reports a validator that could not run, which is
//! never the same thing as an input that failed the check.

use crate::domain::error::ValidatorFault;

#[cfg_attr(test, mockall::automock)]
pub trait Validator: Send + Sync {
    fn is_cpf(&self, input: &str) -> bool;
    fn is_email(&self, input: &str) -> bool;
    fn is_date(&self, input: &str) -> bool;
    fn is_cellphone(&self, input: &str) -> bool;
}

#[cfg_attr(test, mockall::automock)]
pub trait Validation: Send + Sync {
    fn validate(&self, input: &str) -> Result<bool, ValidatorFault>;
}
