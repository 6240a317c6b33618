use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::{FieldId, FormInput, FormProfile};

/// Scheme, one or more dotted domain labels, then anything.
static JOB_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)+[/#?]?.*$")
        .expect("Invalid job URL regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    Required,
    InvalidFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: FieldId,
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl ValidationError {
    fn required(field: FieldId) -> Self {
        let message = match field {
            FieldId::Name => "Your name is required".to_string(),
            other => format!("{} is required", other.label()),
        };
        Self {
            field,
            kind: ValidationErrorKind::Required,
            message,
        }
    }

    fn invalid_url(field: FieldId) -> Self {
        Self {
            field,
            kind: ValidationErrorKind::InvalidFormat,
            message: format!("{} must be a valid URL", field.label()),
        }
    }
}

/// Every field error from one submission attempt, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn for_field(&self, field: FieldId) -> Option<&ValidationError> {
        self.0.iter().find(|err| err.field == field)
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for err in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{err}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Field values that passed validation, trimmed, blanks folded to `None`.
///
/// Only [`validate`] constructs this, so holding one proves the rules ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedForm {
    name: String,
    recipient_name: Option<String>,
    company: Option<String>,
    position: Option<String>,
    job_id: Option<String>,
    job_url: Option<String>,
}

impl ValidatedForm {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn recipient_name(&self) -> Option<&str> {
        self.recipient_name.as_deref()
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    pub fn position(&self) -> Option<&str> {
        self.position.as_deref()
    }

    pub fn job_id(&self) -> Option<&str> {
        self.job_id.as_deref()
    }

    pub fn job_url(&self) -> Option<&str> {
        self.job_url.as_deref()
    }
}

/// Checks `form` against the profile's rule table.
///
/// Reports every failing field at once. Never caches: call it on every submit.
pub fn validate(
    form: &FormInput,
    profile: &FormProfile,
) -> Result<ValidatedForm, ValidationErrors> {
    let mut errors = Vec::new();

    for field in FieldId::ALL {
        let Some(value) = form.present(field) else {
            if profile.is_required(field) {
                errors.push(ValidationError::required(field));
            }
            continue;
        };
        if field == FieldId::JobUrl && !is_valid_job_url(value) {
            errors.push(ValidationError::invalid_url(field));
        }
    }

    if !errors.is_empty() {
        return Err(ValidationErrors(errors));
    }

    let owned = |field: FieldId| form.present(field).map(ToOwned::to_owned);
    Ok(ValidatedForm {
        name: owned(FieldId::Name).unwrap_or_default(),
        recipient_name: owned(FieldId::RecipientName),
        company: owned(FieldId::Company),
        position: owned(FieldId::Position),
        job_id: owned(FieldId::JobId),
        job_url: owned(FieldId::JobUrl),
    })
}

/// True when `value` looks like an http(s) URL with a dotted host.
pub fn is_valid_job_url(value: &str) -> bool {
    JOB_URL_REGEX.is_match(value)
}
