use std::fmt;

/// Identifies one of the six form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    RecipientName,
    Company,
    Position,
    JobId,
    JobUrl,
}

impl FieldId {
    /// Declaration order; errors and prompts follow it.
    pub const ALL: [FieldId; 6] = [
        FieldId::Name,
        FieldId::RecipientName,
        FieldId::Company,
        FieldId::Position,
        FieldId::JobId,
        FieldId::JobUrl,
    ];

    /// Stable identifier used in logs and JSON output.
    pub fn key(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::RecipientName => "recipientName",
            FieldId::Company => "company",
            FieldId::Position => "position",
            FieldId::JobId => "jobId",
            FieldId::JobUrl => "jobUrl",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Your Name",
            FieldId::RecipientName => "Recipient Name",
            FieldId::Company => "Company Name",
            FieldId::Position => "Position Name",
            FieldId::JobId => "Job ID",
            FieldId::JobUrl => "Job URL",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Raw, unvalidated field values as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormInput {
    pub name: String,
    pub recipient_name: String,
    pub company: String,
    pub position: String,
    pub job_id: String,
    pub job_url: String,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::RecipientName => &self.recipient_name,
            FieldId::Company => &self.company,
            FieldId::Position => &self.position,
            FieldId::JobId => &self.job_id,
            FieldId::JobUrl => &self.job_url,
        }
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        let slot = match field {
            FieldId::Name => &mut self.name,
            FieldId::RecipientName => &mut self.recipient_name,
            FieldId::Company => &mut self.company,
            FieldId::Position => &mut self.position,
            FieldId::JobId => &mut self.job_id,
            FieldId::JobUrl => &mut self.job_url,
        };
        *slot = value.into();
    }

    /// Builder-style setter, handy for tests and one-shot CLI runs.
    pub fn with(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Trimmed value, or `None` when the field is blank.
    pub(crate) fn present(&self, field: FieldId) -> Option<&str> {
        let value = self.get(field).trim();
        (!value.is_empty()).then_some(value)
    }
}
