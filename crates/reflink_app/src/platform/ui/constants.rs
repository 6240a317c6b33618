pub const TITLE: &str = "RefLink";
pub const TAGLINE: &str =
    "A simple app to make it easier for you to create personalized invites and referral messages on the go!";

pub const CMD_COPY: &str = "c";
pub const CMD_ALL: &str = "a";
pub const CMD_EDIT: &str = "e";
pub const CMD_PROFILE: &str = "p";
pub const CMD_RESET: &str = "r";
pub const CMD_QUIT: &str = "q";
pub const CMD_HELP: &str = "?";

/// Typed at a field prompt to blank the current value.
pub const CLEAR_VALUE: &str = "-";

pub const RULE_WIDTH: usize = 60;
