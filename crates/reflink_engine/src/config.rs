use std::fs;
use std::path::{Path, PathBuf};

use engine_logging::{engine_info, engine_warn};
use reflink_core::{MessageKind, Variant};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

pub const DEFAULT_CONFIG_FILENAME: &str = "reflink.ron";

/// Where the copy action sends text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClipboardBackend {
    /// Detect a platform clipboard tool on `PATH`.
    #[default]
    Auto,
    /// Pipe into a specific program.
    Command { program: String, args: Vec<String> },
    /// Print to stdout instead of copying.
    Stdout,
}

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogDestination {
    /// Write to ./reflink.log in the current directory.
    File,
    /// Write to the terminal (stderr).
    #[default]
    Terminal,
    /// Write to both file and terminal.
    Both,
    /// Disable logging.
    Off,
}

/// Settings read from `reflink.ron`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub variant: Variant,
    pub default_kind: Option<MessageKind>,
    /// Prefills "Your Name".
    pub sender_name: Option<String>,
    pub clipboard: ClipboardBackend,
    pub log: LogDestination,
}

impl AppConfig {
    /// Loads `path` if given (it must exist), else `./reflink.ron` if present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::load_or_default(Path::new(DEFAULT_CONFIG_FILENAME)),
        }
    }

    /// Like [`AppConfig::from_file`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text, path)?;
        engine_info!("Loaded config from {:?}", path);
        Ok(config)
    }

    fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let mut config: AppConfig = ron::from_str(text).map_err(|err| ConfigError::Parse {
            path: PathBuf::from(path),
            message: err.to_string(),
        })?;
        if let Some(kind) = config.default_kind {
            if !config.variant.profile().supports(kind) {
                engine_warn!(
                    "default_kind {} is not offered by variant {}; ignoring",
                    kind,
                    config.variant.key()
                );
                config.default_kind = None;
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> Result<AppConfig, ConfigError> {
        AppConfig::parse(text, Path::new("test.ron"))
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = parse(r#"(sender_name: Some("Ann"))"#).unwrap();
        assert_eq!(
            config,
            AppConfig {
                sender_name: Some("Ann".to_string()),
                ..AppConfig::default()
            }
        );
        assert_eq!(config.clipboard, ClipboardBackend::Auto);
        assert_eq!(config.log, LogDestination::Terminal);
    }

    #[test]
    fn full_config_round_trips_fields() {
        let config = parse(
            r#"(
                variant: Strict,
                default_kind: Some(Invite),
                sender_name: Some("Ann"),
                clipboard: Command(program: "wl-copy", args: ["--trim-newline"]),
                log: Both,
            )"#,
        )
        .unwrap();
        assert_eq!(
            config,
            AppConfig {
                variant: Variant::Strict,
                default_kind: Some(MessageKind::Invite),
                sender_name: Some("Ann".to_string()),
                clipboard: ClipboardBackend::Command {
                    program: "wl-copy".to_string(),
                    args: vec!["--trim-newline".to_string()],
                },
                log: LogDestination::Both,
            }
        );
    }

    #[test]
    fn unsupported_default_kind_is_dropped() {
        let config = parse("(variant: Strict, default_kind: Some(ReferralFollowUp))").unwrap();
        assert_eq!(config.default_kind, None);
    }

    #[test]
    fn malformed_config_reports_path() {
        let err = parse("(variant: Sideways)").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("test.ron"));
    }
}
