//! Form validation for the Alpha Nex user interface
//!
//! This module provides the validation rules the upload and sign-up forms
//! run before submitting: required fields, email shape, minimum length and
//! password confirmation. Errors clear optimistically while the user edits
//! a field and come back when the field is committed or the form submits.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// `local@domain.tld` with no whitespace or extra `@` in any run
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles");
}

/// Form validation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Field is required
    #[error("This field is required.")]
    Required,

    /// Field is not a well-formed email address
    #[error("Please enter a valid email address.")]
    InvalidEmail,

    /// Field is too short
    #[error("Minimum {0} characters required.")]
    TooShort(usize),

    /// Field doesn't match its sibling password field
    #[error("Passwords do not match.")]
    ConfirmationMismatch,

    /// Custom validation error
    #[error("{0}")]
    Custom(String),
}

/// Validation result type
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Validation rule for a field
#[derive(Debug, Clone)]
pub struct ValidationRule {
    /// The field name to validate
    pub field: String,
    /// Whether the field is required
    pub required: bool,
    /// Minimum trimmed length requirement
    pub min_length: Option<usize>,
    /// Whether the value must look like an email address
    pub email: bool,
    /// Name of a sibling field this one must match
    pub confirms: Option<String>,
}

impl ValidationRule {
    /// Create a new validation rule for a field
    pub fn new<S: Into<String>>(field: S) -> Self {
        Self {
            field: field.into(),
            required: false,
            min_length: None,
            email: false,
            confirms: None,
        }
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set a minimum length requirement
    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    /// Require an email-shaped value
    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    /// Require the value to match a sibling field
    pub fn confirms<S: Into<String>>(mut self, sibling: S) -> Self {
        self.confirms = Some(sibling.into());
        self
    }

    /// Validate a raw field value against this rule. `sibling` carries the
    /// current value of the confirmed field, when the rule names one.
    pub fn validate(&self, value: &str, sibling: Option<&str>) -> Result<()> {
        let trimmed = value.trim();

        if self.required && trimmed.is_empty() {
            log::debug!("Required field '{}' is empty", self.field);
            return Err(ValidationError::Required);
        }

        // Email shape only matters once something was typed
        if self.email && !trimmed.is_empty() && !EMAIL_PATTERN.is_match(trimmed) {
            log::debug!("Field '{}' is not a valid email address", self.field);
            return Err(ValidationError::InvalidEmail);
        }

        if let Some(min_length) = self.min_length {
            if trimmed.len() < min_length {
                log::debug!(
                    "Field '{}' is too short ({}), minimum {}",
                    self.field,
                    trimmed.len(),
                    min_length
                );
                return Err(ValidationError::TooShort(min_length));
            }
        }

        if self.confirms.is_some() && Some(value) != sibling {
            log::debug!("Field '{}' does not match its sibling", self.field);
            return Err(ValidationError::ConfirmationMismatch);
        }

        Ok(())
    }
}

/// Validation result for a field
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// Whether the validation was successful
    pub valid: bool,
    /// Optional error message for validation failures
    pub error_message: Option<String>,
}

impl ValidationResult {
    /// Check if the validation was successful
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Get the error message if validation failed
    pub fn error(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

/// A form validator that can validate multiple fields
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    /// The rules for each field, in declaration order
    rules: Vec<ValidationRule>,
    /// The current state of the form fields
    values: HashMap<String, String>,
    /// The current validation errors
    errors: HashMap<String, String>,
}

impl FormValidator {
    /// Create a new form validator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a validation rule
    pub fn add_rule(&mut self, rule: ValidationRule) {
        self.rules.push(rule);
    }

    /// Builder-style rule registration
    pub fn with_rule(mut self, rule: ValidationRule) -> Self {
        self.add_rule(rule);
        self
    }

    /// Record an edit to a field. Any shown error clears immediately;
    /// re-validation waits until the field is committed or the form submits.
    pub fn set_field<S: Into<String>, T: Into<String>>(&mut self, field: S, value: T) {
        let field = field.into();
        self.values.insert(field.clone(), value.into());
        self.errors.remove(&field);
    }

    /// Get a field value
    pub fn get_field(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// Re-validate a field that lost focus
    pub fn commit_field(&mut self, field: &str) -> bool {
        self.validate_field(field)
    }

    /// Get a validation error for a field
    pub fn get_error(&self, field: &str) -> Option<&String> {
        self.errors.get(field)
    }

    /// Check if a field has an error
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Check if the form has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Get all validation errors
    pub fn get_errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    /// Per-field validation status without mutating the form
    pub fn result_for(&self, field: &str) -> ValidationResult {
        let error = self.errors.get(field).cloned();
        ValidationResult {
            valid: error.is_none(),
            error_message: error,
        }
    }

    /// First field with an error, in rule declaration order. The caller
    /// moves focus there when a submit is cancelled.
    pub fn first_invalid(&self) -> Option<&str> {
        self.rules
            .iter()
            .map(|rule| rule.field.as_str())
            .find(|field| self.errors.contains_key(*field))
    }

    /// Validate a specific field
    pub fn validate_field(&mut self, field: &str) -> bool {
        let rules: Vec<ValidationRule> = self
            .rules
            .iter()
            .filter(|r| r.field == field)
            .cloned()
            .collect();

        // If no rules, field is valid
        if rules.is_empty() {
            self.errors.remove(field);
            return true;
        }

        let value = self.get_field(field).to_string();

        for rule in rules {
            let sibling = rule
                .confirms
                .as_deref()
                .map(|sibling| self.get_field(sibling).to_string());
            if let Err(err) = rule.validate(&value, sibling.as_deref()) {
                log::debug!("Validation failed for field {}: {}", field, err);
                self.errors.insert(field.to_string(), err.to_string());
                return false;
            }
        }

        self.errors.remove(field);
        true
    }

    /// Validate all fields; returns whether the form may submit
    pub fn validate_all(&mut self) -> bool {
        let fields: Vec<String> = self.rules.iter().map(|r| r.field.clone()).collect();

        let mut valid = true;
        for field in fields {
            if !self.validate_field(&field) {
                valid = false;
            }
        }

        valid
    }

    /// Drop all values and errors, e.g. after a successful submit
    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
    }
}

impl fmt::Display for FormValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FormValidator({} rules)", self.rules.len())
    }
}
