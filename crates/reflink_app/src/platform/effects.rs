use std::io::{self, Write};

use engine_logging::{engine_debug, engine_info, engine_warn};
use reflink_core::{Effect, Msg};
use reflink_engine::{Clipboard, ClipboardError};

/// Executes effects produced by `update` and reports outcomes back as messages.
pub struct EffectRunner {
    clipboard: Option<Box<dyn Clipboard>>,
}

impl EffectRunner {
    /// `None` means no clipboard could be set up; copies then fail with a notice.
    pub fn new(clipboard: Option<Box<dyn Clipboard>>) -> Self {
        if let Some(clipboard) = &clipboard {
            engine_info!("Clipboard backend: {}", clipboard.describe());
        }
        Self { clipboard }
    }

    pub fn run(&self, effects: Vec<Effect>, out: &mut dyn Write) -> io::Result<Vec<Msg>> {
        let mut follow_ups = Vec::new();
        for effect in effects {
            match effect {
                Effect::CopyToClipboard { kind, text } => {
                    engine_info!("CopyToClipboard kind={} chars={}", kind, text.chars().count());
                    let result = match &self.clipboard {
                        Some(clipboard) => clipboard.copy(&text),
                        None => Err(ClipboardError::NoBackend),
                    };
                    if let Err(err) = &result {
                        engine_warn!("Clipboard copy failed: {}", err);
                    }
                    follow_ups.push(Msg::CopyFinished {
                        kind,
                        result: result.map_err(|err| err.to_string()),
                    });
                }
                Effect::ShowToast { text, duration } => {
                    engine_debug!("Toast for {:?}: {}", duration, text);
                    writeln!(out, "[ok] {text}")?;
                }
            }
        }
        Ok(follow_ups)
    }
}
