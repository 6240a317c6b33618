use super::constants::*;

/// A line typed at the command prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 1-based position in the selector.
    Select(usize),
    Copy,
    ShowAll,
    Edit,
    SwitchProfile,
    Reset,
    Quit,
    Help,
    Empty,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    if let Ok(index) = line.parse::<usize>() {
        return Command::Select(index);
    }
    match line.to_ascii_lowercase().as_str() {
        CMD_COPY | "copy" => Command::Copy,
        CMD_ALL | "all" => Command::ShowAll,
        CMD_EDIT | "edit" => Command::Edit,
        CMD_PROFILE | "profile" => Command::SwitchProfile,
        CMD_RESET | "reset" => Command::Reset,
        CMD_QUIT | "quit" | "exit" => Command::Quit,
        CMD_HELP | "h" | "help" => Command::Help,
        _ => Command::Unknown(line.to_string()),
    }
}

/// What a field prompt answer means: `None` keeps the current value.
pub fn parse_field_answer(line: &str) -> Option<String> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        None
    } else if line.trim() == CLEAR_VALUE {
        Some(String::new())
    } else {
        Some(line.to_string())
    }
}
