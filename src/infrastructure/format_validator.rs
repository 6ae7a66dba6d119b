use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{
    error::ValidatorFault,
    services::validator::{Validation, Validator},
};

static CPF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{3}\.\d{3}\.\d{3}-\d{2}|\d{11})$").expect("valid regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("valid regex")
});

// +55 (11) 91234-5678, 11 91234 5678, 11912345678
static CELLPHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+?55\s?)?(\([1-9]{2}\)|[1-9]{2})\s?9\d{4}[-\s]?\d{4}$").expect("valid regex")
});

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Brazilian account data checks built on regular expressions and `chrono`
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatValidator;

impl FormatValidator {
    pub fn new() -> Self {
        Self
    }
}

/// Mod-11 check digit over `digits`, weighted from `digits.len() + 1` down to 2.
fn check_digit(digits: &[u32]) -> u32 {
    let weight_start = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .zip((2..=weight_start).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();
    match (sum * 10) % 11 {
        10 => 0,
        rest => rest,
    }
}

impl Validator for FormatValidator {
    fn is_cpf(&self, input: &str) -> bool {
        if !CPF_RE.is_match(input) {
            return false;
        }
        let digits: Vec<u32> = input.chars().filter_map(|c| c.to_digit(10)).collect();
        // `\d` also matches non-ASCII digits
        if digits.len() != 11 || digits.iter().all(|d| *d == digits[0]) {
            return false;
        }
        check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
    }

    fn is_email(&self, input: &str) -> bool {
        EMAIL_RE.is_match(input)
    }

    fn is_date(&self, input: &str) -> bool {
        DATE_FORMATS
            .iter()
            .any(|format| NaiveDate::parse_from_str(input, format).is_ok())
    }

    fn is_cellphone(&self, input: &str) -> bool {
        CELLPHONE_RE.is_match(input)
    }
}

/// Email check for the single-field controller wiring
#[derive(Debug, Clone, Default)]
pub struct EmailValidation<V = FormatValidator> {
    validator: V,
}

impl<V: Validator> EmailValidation<V> {
    pub fn new(validator: V) -> Self {
        Self { validator }
    }
}

impl<V: Validator> Validation for EmailValidation<V> {
    fn validate(&self, input: &str) -> Result<bool, ValidatorFault> {
        Ok(self.validator.is_email(input))
    }
}

/// CPF check for the single-field controller wiring
#[derive(Debug, Clone, Default)]
pub struct CpfValidation<V = FormatValidator> {
    validator: V,
}

impl<V: Validator> CpfValidation<V> {
    pub fn new(validator: V) -> Self {
        Self { validator }
    }
}

impl<V: Validator> Validation for CpfValidation<V> {
    fn validate(&self, input: &str) -> Result<bool, ValidatorFault> {
        Ok(self.validator.is_cpf(input))
    }
}
