use crate::template::char_count;
use crate::view_model::{AppViewModel, FieldRowView, MessageView};
use crate::{
    FieldId, FormInput, FormProfile, GeneratedMessages, MessageKind, ValidationError, Variant,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    Info,
    Error,
}

/// One-line status shown under the form until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: NoticeSeverity,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Error,
            text: text.into(),
        }
    }
}

/// The single owned state object for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    variant: Variant,
    form: FormInput,
    errors: Vec<ValidationError>,
    messages: Option<GeneratedMessages>,
    selected: MessageKind,
    notice: Option<Notice>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_variant(Variant::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variant(variant: Variant) -> Self {
        Self {
            variant,
            form: FormInput::default(),
            errors: Vec::new(),
            messages: None,
            selected: variant.profile().default_kind,
            notice: None,
            dirty: false,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn profile(&self) -> &'static FormProfile {
        self.variant.profile()
    }

    pub fn form(&self) -> &FormInput {
        &self.form
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn messages(&self) -> Option<&GeneratedMessages> {
        self.messages.as_ref()
    }

    pub fn selected(&self) -> MessageKind {
        self.selected
    }

    pub fn selected_message(&self) -> Option<&str> {
        self.messages.as_ref()?.get(self.selected)
    }

    pub fn view(&self) -> AppViewModel {
        let profile = self.profile();
        let fields = FieldId::ALL
            .iter()
            .map(|&field| FieldRowView {
                field,
                label: field.label(),
                value: self.form.get(field).to_string(),
                required: profile.is_required(field),
                error: self
                    .errors
                    .iter()
                    .find(|err| err.field == field)
                    .map(|err| err.message.clone()),
            })
            .collect();
        let messages = self
            .messages
            .iter()
            .flat_map(GeneratedMessages::iter)
            .map(|(kind, text)| {
                let count = char_count(text);
                MessageView {
                    kind,
                    title: kind.title(),
                    text: text.to_string(),
                    char_count: count,
                    char_limit: kind.char_limit(),
                    over_limit: kind.char_limit().is_some_and(|limit| count > limit),
                }
            })
            .collect();

        AppViewModel {
            variant: self.variant,
            fields,
            kinds: profile.kinds().collect(),
            selected: self.selected,
            messages,
            notice: self.notice.clone(),
            error_count: self.errors.len(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_field(&mut self, field: FieldId, value: String) {
        if self.form.get(field) == value {
            return;
        }
        self.form.set(field, value);
        self.errors.retain(|err| err.field != field);
        self.mark_dirty();
    }

    pub(crate) fn accept(&mut self, messages: GeneratedMessages) {
        self.errors.clear();
        self.messages = Some(messages);
        self.notice = None;
        self.mark_dirty();
    }

    pub(crate) fn reject(&mut self, errors: Vec<ValidationError>) {
        self.errors = errors;
        self.messages = None;
        self.mark_dirty();
    }

    /// Returns false when the active profile does not offer `kind`.
    pub(crate) fn select_kind(&mut self, kind: MessageKind) -> bool {
        if !self.profile().supports(kind) {
            return false;
        }
        if self.selected != kind {
            self.selected = kind;
            self.mark_dirty();
        }
        true
    }

    pub(crate) fn switch_variant(&mut self, variant: Variant) {
        if self.variant == variant {
            return;
        }
        self.variant = variant;
        self.errors.clear();
        self.messages = None;
        if !variant.profile().supports(self.selected) {
            self.selected = variant.profile().default_kind;
        }
        self.mark_dirty();
    }

    pub(crate) fn reset(&mut self) {
        let variant = self.variant;
        *self = Self::with_variant(variant);
        self.mark_dirty();
    }

    pub(crate) fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.mark_dirty();
    }

    pub(crate) fn clear_notice(&mut self) {
        if self.notice.take().is_some() {
            self.mark_dirty();
        }
    }
}
