use engine_logging::{engine_debug, engine_info, engine_warn};

use crate::effect::TOAST_DURATION;
use crate::{generate, validate, AppState, Effect, Msg, Notice};

pub const COPIED_TEXT: &str = "Copied to clipboard!";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FieldChanged { field, value } => {
            state.set_field(field, value);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // Validation runs on every submit; nothing from a previous attempt is reused.
            let profile = state.profile();
            match validate(state.form(), profile) {
                Ok(valid) => {
                    let messages = generate(&valid, profile);
                    engine_info!(
                        "Submit accepted variant={} messages={}",
                        profile.variant.key(),
                        messages.len()
                    );
                    state.accept(messages);
                }
                Err(errors) => {
                    let fields: Vec<&str> = errors.iter().map(|err| err.field.key()).collect();
                    engine_info!(
                        "Submit rejected variant={} errors={} fields={}",
                        profile.variant.key(),
                        errors.len(),
                        fields.join(",")
                    );
                    state.reject(errors.into_vec());
                }
            }
            Vec::new()
        }
        Msg::KindSelected(kind) => {
            if state.select_kind(kind) {
                engine_debug!("Selected kind={}", kind);
            } else {
                engine_debug!(
                    "Ignoring kind={} not offered by variant={}",
                    kind,
                    state.variant().key()
                );
            }
            Vec::new()
        }
        Msg::CopyClicked => match state.selected_message() {
            Some(text) => {
                let effect = Effect::CopyToClipboard {
                    kind: state.selected(),
                    text: text.to_string(),
                };
                vec![effect]
            }
            None => {
                state.set_notice(Notice::error(
                    "Nothing to copy yet: generate the snippets first",
                ));
                Vec::new()
            }
        },
        Msg::CopyFinished { kind, result } => match result {
            Ok(()) => {
                state.clear_notice();
                vec![Effect::ShowToast {
                    text: COPIED_TEXT.to_string(),
                    duration: TOAST_DURATION,
                }]
            }
            Err(reason) => {
                engine_warn!("Copy of kind={} failed: {}", kind, reason);
                state.set_notice(Notice::error(format!(
                    "Could not copy {}: {}",
                    kind.title(),
                    reason
                )));
                Vec::new()
            }
        },
        Msg::ProfileSelected(variant) => {
            state.switch_variant(variant);
            Vec::new()
        }
        Msg::ResetClicked => {
            state.reset();
            Vec::new()
        }
        Msg::NoticeDismissed => {
            state.clear_notice();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
