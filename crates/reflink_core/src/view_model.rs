use crate::{FieldId, MessageKind, Notice, Variant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub variant: Variant,
    pub fields: Vec<FieldRowView>,
    /// Kinds offered by the selector, in presentation order.
    pub kinds: Vec<MessageKind>,
    pub selected: MessageKind,
    /// Empty until a submit succeeds.
    pub messages: Vec<MessageView>,
    pub notice: Option<Notice>,
    pub error_count: usize,
    pub dirty: bool,
}

impl AppViewModel {
    pub fn message(&self, kind: MessageKind) -> Option<&MessageView> {
        self.messages.iter().find(|m| m.kind == kind)
    }

    pub fn selected_message(&self) -> Option<&MessageView> {
        self.message(self.selected)
    }

    pub fn field(&self, field: FieldId) -> Option<&FieldRowView> {
        self.fields.iter().find(|row| row.field == field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRowView {
    pub field: FieldId,
    pub label: &'static str,
    pub value: String,
    pub required: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub kind: MessageKind,
    pub title: &'static str,
    pub text: String,
    pub char_count: usize,
    pub char_limit: Option<usize>,
    pub over_limit: bool,
}
