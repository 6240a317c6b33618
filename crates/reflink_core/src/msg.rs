use crate::{FieldId, MessageKind, Variant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited one of the form inputs.
    FieldChanged { field: FieldId, value: String },
    /// User pressed "Generate Snippets".
    SubmitClicked,
    /// User picked a message kind in the selector.
    KindSelected(MessageKind),
    /// User asked to copy the selected message.
    CopyClicked,
    /// Clipboard outcome reported back by the platform.
    CopyFinished {
        kind: MessageKind,
        result: Result<(), String>,
    },
    /// User switched between the lenient and strict forms.
    ProfileSelected(Variant),
    /// User cleared the form.
    ResetClicked,
    /// The status line was shown and can go.
    NoticeDismissed,
    /// Fallback for placeholder wiring.
    NoOp,
}
