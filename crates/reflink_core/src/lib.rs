//! RefLink core: form rules, message templates and the pure session state machine.
mod effect;
mod field;
mod msg;
mod profile;
mod state;
mod template;
mod update;
mod validate;
mod view_model;

pub use effect::{Effect, TOAST_DURATION};
pub use field::{FieldId, FormInput};
pub use msg::Msg;
pub use profile::{FormProfile, Requiredness, Variant};
pub use state::{AppState, Notice, NoticeSeverity};
pub use template::{
    char_count, generate, Formatter, GeneratedMessages, MessageKind, INVITE_CHAR_LIMIT,
};
pub use update::{update, COPIED_TEXT};
pub use validate::{
    is_valid_job_url, validate, ValidatedForm, ValidationError, ValidationErrorKind,
    ValidationErrors,
};
pub use view_model::{AppViewModel, FieldRowView, MessageView};
