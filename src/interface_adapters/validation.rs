//! Field validators for the login form and the composite that exposes them
//! through the [`Validation`] port.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use crate::domain::Validation;

/// Reason a single field value was rejected. The display text is what the
/// form shows next to the field.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field")]
    RequiredField,
    #[error("invalid email")]
    InvalidEmail,
    #[error("invalid value")]
    TooShort { min_length: usize },
}

/// A rule bound to one named field.
pub trait FieldValidation: Send + Sync {
    fn field(&self) -> &str;
    fn validate(&self, value: &str) -> Result<(), ValidationError>;
}

pub struct RequiredFieldValidation {
    field: String,
}

impl RequiredFieldValidation {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl FieldValidation for RequiredFieldValidation {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::RequiredField);
        }
        Ok(())
    }
}

/// Accepts an empty value so the required rule owns that message.
pub struct EmailValidation {
    field: String,
}

impl EmailValidation {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

impl FieldValidation for EmailValidation {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        if value.is_empty() || email_regex().is_match(value) {
            return Ok(());
        }
        Err(ValidationError::InvalidEmail)
    }
}

pub struct MinLengthValidation {
    field: String,
    min_length: usize,
}

impl MinLengthValidation {
    pub fn new(field: impl Into<String>, min_length: usize) -> Self {
        Self {
            field: field.into(),
            min_length,
        }
    }
}

impl FieldValidation for MinLengthValidation {
    fn field(&self) -> &str {
        &self.field
    }

    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        // Count characters, not bytes.
        if value.chars().count() < self.min_length {
            return Err(ValidationError::TooShort {
                min_length: self.min_length,
            });
        }
        Ok(())
    }
}

/// Fluent construction of the rules for one field:
/// `ValidationBuilder::field("email").required().email().build()`.
pub struct ValidationBuilder {
    field: String,
    validations: Vec<Box<dyn FieldValidation>>,
}

impl ValidationBuilder {
    pub fn field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            validations: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.validations
            .push(Box::new(RequiredFieldValidation::new(self.field.clone())));
        self
    }

    pub fn email(mut self) -> Self {
        self.validations
            .push(Box::new(EmailValidation::new(self.field.clone())));
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.validations
            .push(Box::new(MinLengthValidation::new(self.field.clone(), min_length)));
        self
    }

    pub fn build(self) -> Vec<Box<dyn FieldValidation>> {
        self.validations
    }
}

/// Runs the rules registered for a field in order and reports the first failure.
#[derive(Default)]
pub struct ValidationComposite {
    validations: Vec<Box<dyn FieldValidation>>,
}

impl ValidationComposite {
    pub fn new(validations: impl IntoIterator<Item = Box<dyn FieldValidation>>) -> Self {
        Self {
            validations: validations.into_iter().collect(),
        }
    }
}

impl Validation for ValidationComposite {
    fn validate(&self, field_name: &str, value: &str) -> Option<String> {
        self.validations
            .iter()
            .filter(|validation| validation.field() == field_name)
            .find_map(|validation| validation.validate(value).err())
            .map(|error| error.to_string())
    }
}
