use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use reflink_core::{FieldId, MessageKind, Variant};
use reflink_engine::LogDestination;

#[derive(Debug, Parser)]
#[command(name = "reflink", version)]
#[command(about = "Personalized LinkedIn invites and referral messages, ready to paste")]
pub struct Cli {
    /// Form profile: which fields are required and which messages are produced
    #[arg(long, value_enum)]
    pub variant: Option<VariantArg>,

    /// Config file (RON). Defaults to ./reflink.ron when present
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where log output goes
    #[arg(long, value_enum)]
    pub log: Option<LogArg>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Your name. Giving it runs once without prompting; otherwise field flags prefill the prompts
    #[arg(long)]
    pub name: Option<String>,

    /// Recipient's name
    #[arg(long)]
    pub recipient: Option<String>,

    /// Company name
    #[arg(long)]
    pub company: Option<String>,

    /// Position name
    #[arg(long)]
    pub position: Option<String>,

    /// Job ID
    #[arg(long)]
    pub job_id: Option<String>,

    /// Job posting URL (http or https)
    #[arg(long)]
    pub job_url: Option<String>,

    /// Message to print and copy
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,

    /// Print every message instead of only the selected one
    #[arg(long, requires = "name")]
    pub all: bool,

    /// Copy the selected message to the clipboard
    #[arg(long, requires = "name")]
    pub copy: bool,

    /// Output format for one-shot runs
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, requires = "name")]
    pub format: OutputFormat,
}

impl Cli {
    pub fn is_one_shot(&self) -> bool {
        self.name.is_some()
    }

    /// Field values given on the command line, in form order.
    pub fn field_values(&self) -> Vec<(FieldId, &str)> {
        [
            (FieldId::Name, &self.name),
            (FieldId::RecipientName, &self.recipient),
            (FieldId::Company, &self.company),
            (FieldId::Position, &self.position),
            (FieldId::JobId, &self.job_id),
            (FieldId::JobUrl, &self.job_url),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    Lenient,
    Strict,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Lenient => Variant::Lenient,
            VariantArg::Strict => Variant::Strict,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Invite,
    Referral,
    FollowUp,
}

impl From<KindArg> for MessageKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Invite => MessageKind::Invite,
            KindArg::Referral => MessageKind::ReferralAfterConnecting,
            KindArg::FollowUp => MessageKind::ReferralFollowUp,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogArg {
    File,
    Terminal,
    Both,
    Off,
}

impl From<LogArg> for LogDestination {
    fn from(arg: LogArg) -> Self {
        match arg {
            LogArg::File => LogDestination::File,
            LogArg::Terminal => LogDestination::Terminal,
            LogArg::Both => LogDestination::Both,
            LogArg::Off => LogDestination::Off,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
