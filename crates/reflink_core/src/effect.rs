use std::time::Duration;

use crate::MessageKind;

/// How long the copy confirmation stays visible.
pub const TOAST_DURATION: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    CopyToClipboard { kind: MessageKind, text: String },
    ShowToast { text: String, duration: Duration },
}
