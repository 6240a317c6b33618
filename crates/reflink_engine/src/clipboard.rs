use std::env;
use std::ffi::OsStr;
use std::io::{self, Write};
use std::process::{Command, Stdio};

use engine_logging::{engine_debug, engine_info};

use crate::{ClipboardBackend, ClipboardError};

/// Destination for the copy action.
pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError>;

    /// Short human-readable name for logs and the status line.
    fn describe(&self) -> String;
}

/// Pipes text into an external clipboard tool such as `pbcopy` or `wl-copy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Picks the first clipboard tool for this platform that is on `PATH`.
    pub fn detect() -> Result<Self, ClipboardError> {
        let wayland = env::var_os("WAYLAND_DISPLAY").is_some();
        let x11 = env::var_os("DISPLAY").is_some();
        let path = env::var_os("PATH").unwrap_or_default();

        let found = candidates(env::consts::OS, wayland, x11)
            .into_iter()
            .find(|candidate| is_on_path(&candidate.program, &path));
        match found {
            Some(clipboard) => {
                engine_info!("Using clipboard tool {}", clipboard.program);
                Ok(clipboard)
            }
            None => Err(ClipboardError::NoBackend),
        }
    }
}

impl Clipboard for CommandClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        // X11 tools fork a daemon that keeps inherited pipes open, so only stdin is piped.
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ClipboardError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // Dropping stdin closes the pipe so the tool sees end of input.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };
        let status = child.wait()?;
        if !status.success() {
            return Err(ClipboardError::ExitStatus {
                program: self.program.clone(),
                status: status.to_string(),
            });
        }
        written.map_err(|source| ClipboardError::Write {
            program: self.program.clone(),
            source,
        })?;
        engine_debug!("Copied {} bytes via {}", text.len(), self.program);
        Ok(())
    }

    fn describe(&self) -> String {
        self.program.clone()
    }
}

/// Prints the text instead of copying it, for headless sessions.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut out = io::stdout().lock();
        writeln!(out, "{text}")?;
        out.flush()?;
        Ok(())
    }

    fn describe(&self) -> String {
        "stdout".to_string()
    }
}

/// Builds the clipboard selected in configuration.
pub fn clipboard_from_backend(
    backend: &ClipboardBackend,
) -> Result<Box<dyn Clipboard>, ClipboardError> {
    match backend {
        ClipboardBackend::Auto => Ok(Box::new(CommandClipboard::detect()?)),
        ClipboardBackend::Command { program, args } => {
            Ok(Box::new(CommandClipboard::new(program.clone(), args.clone())))
        }
        ClipboardBackend::Stdout => Ok(Box::new(StdoutClipboard)),
    }
}

fn candidates(os: &str, wayland: bool, x11: bool) -> Vec<CommandClipboard> {
    let tool = |program: &str, args: &[&str]| {
        CommandClipboard::new(program, args.iter().map(|a| a.to_string()).collect())
    };
    match os {
        "macos" => vec![tool("pbcopy", &[])],
        "windows" => vec![tool("clip", &[])],
        _ => {
            let mut found = Vec::new();
            if wayland {
                found.push(tool("wl-copy", &[]));
            }
            if x11 || !wayland {
                found.push(tool("xclip", &["-selection", "clipboard"]));
                found.push(tool("xsel", &["--clipboard", "--input"]));
            }
            found
        }
    }
}

fn is_on_path(program: &str, path: &OsStr) -> bool {
    env::split_paths(path).any(|dir| {
        let candidate = dir.join(program);
        candidate.is_file() || (cfg!(windows) && candidate.with_extension("exe").is_file())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn programs(list: &[CommandClipboard]) -> Vec<&str> {
        list.iter().map(CommandClipboard::program).collect()
    }

    #[test]
    fn macos_and_windows_have_one_tool() {
        assert_eq!(programs(&candidates("macos", false, false)), vec!["pbcopy"]);
        assert_eq!(programs(&candidates("windows", false, false)), vec!["clip"]);
    }

    #[test]
    fn linux_prefers_wayland_then_x11() {
        assert_eq!(
            programs(&candidates("linux", true, true)),
            vec!["wl-copy", "xclip", "xsel"]
        );
        assert_eq!(programs(&candidates("linux", true, false)), vec!["wl-copy"]);
        assert_eq!(
            programs(&candidates("linux", false, false)),
            vec!["xclip", "xsel"]
        );
    }

    #[test]
    fn path_lookup_finds_files_only() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("fake-copy"), "").unwrap();
        std::fs::create_dir(dir.path().join("not-a-tool")).unwrap();

        let path = env::join_paths([dir.path()]).unwrap();
        assert!(is_on_path("fake-copy", &path));
        assert!(!is_on_path("not-a-tool", &path));
        assert!(!is_on_path("missing", &path));
    }

    #[test]
    fn explicit_command_backend_is_used_verbatim() {
        let backend = ClipboardBackend::Command {
            program: "my-copy".to_string(),
            args: vec!["--quiet".to_string()],
        };
        let clipboard = clipboard_from_backend(&backend).unwrap();
        assert_eq!(clipboard.describe(), "my-copy");
    }
}
