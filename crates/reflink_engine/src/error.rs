use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard tool found (tried pbcopy, clip, wl-copy, xclip, xsel)")]
    NoBackend,
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to send text to {program}: {source}")]
    Write {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{program} exited with {status}")]
    ExitStatus { program: String, status: String },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}
