use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use engine_logging::{engine_debug, engine_info, engine_warn};
use reflink_core::{update, AppState, AppViewModel, FieldId, MessageKind, Msg, Variant};
use reflink_engine::{clipboard_from_backend, AppConfig, Clipboard, LogDestination};
use serde::Serialize;

use super::cli::{Cli, OutputFormat};
use super::effects::EffectRunner;
use super::logging;
use super::ui::prompt::{parse_command, parse_field_answer, Command};
use super::ui::render;

/// Exit status for a submit that failed validation.
const EXIT_INVALID_INPUT: u8 = 2;
const EXIT_OK: u8 = 0;

pub fn run_app() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    let destination = cli.log.map(LogDestination::from).unwrap_or(config.log);
    logging::initialize(destination, logging::level_for_verbosity(cli.verbose));

    let variant = cli.variant.map(Variant::from).unwrap_or(config.variant);
    let requested_kind = cli.kind.map(MessageKind::from);
    let default_kind = initial_kind(variant, requested_kind, config.default_kind)?;
    engine_info!(
        "Starting reflink variant={} one_shot={}",
        variant.key(),
        cli.is_one_shot()
    );

    let clipboard = match clipboard_from_backend(&config.clipboard) {
        Ok(clipboard) => Some(clipboard),
        Err(err) => {
            engine_warn!("Clipboard unavailable: {}", err);
            None
        }
    };

    let mut state = AppState::with_variant(variant);
    if let Some(kind) = default_kind {
        state = update(state, Msg::KindSelected(kind)).0;
    }

    if cli.is_one_shot() {
        return run_once(&cli, state, clipboard);
    }

    let mut prefill = Vec::new();
    if let Some(name) = &config.sender_name {
        prefill.push((FieldId::Name, name.as_str()));
    }
    prefill.extend(cli.field_values());
    state = prefill_fields(state, prefill);

    let stdin = io::stdin();
    let effects = EffectRunner::new(clipboard);
    let mut session = Session::new(state, effects, stdin.lock(), io::stdout());
    session.run_interactive().context("interactive session")?;
    Ok(ExitCode::SUCCESS)
}

/// Kind selected at startup. An explicit `--kind` the profile lacks is an error;
/// a configured one is dropped with a warning.
fn initial_kind(
    variant: Variant,
    requested: Option<MessageKind>,
    configured: Option<MessageKind>,
) -> Result<Option<MessageKind>> {
    let profile = variant.profile();
    if let Some(kind) = requested {
        if !profile.supports(kind) {
            anyhow::bail!(
                "--kind {kind} is not offered by the {} profile (available: {})",
                variant.key(),
                profile.kinds().map(MessageKind::key).collect::<Vec<_>>().join(", ")
            );
        }
        return Ok(Some(kind));
    }
    Ok(configured.filter(|&kind| {
        let supported = profile.supports(kind);
        if !supported {
            engine_warn!(
                "default_kind {} is not offered by variant {}; ignoring",
                kind,
                variant.key()
            );
        }
        supported
    }))
}

/// Applies startup values to the form before the first prompt.
fn prefill_fields<'a>(
    mut state: AppState,
    values: impl IntoIterator<Item = (FieldId, &'a str)>,
) -> AppState {
    for (field, value) in values {
        state = update(
            state,
            Msg::FieldChanged {
                field,
                value: value.to_string(),
            },
        )
        .0;
    }
    state
}

/// Owns the session state and wires user input, `update`, effects and rendering.
pub struct Session<R, W> {
    state: AppState,
    effects: EffectRunner,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(state: AppState, effects: EffectRunner, input: R, out: W) -> Self {
        Self {
            state,
            effects,
            input,
            out,
        }
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    /// Applies `msg` and any follow-ups its effects produce. Returns whether state changed.
    pub fn dispatch(&mut self, msg: Msg) -> io::Result<bool> {
        let mut pending = vec![msg];
        let mut changed = false;
        while let Some(msg) = pending.pop() {
            engine_debug!("dispatch {}", msg_name(&msg));
            let state = std::mem::take(&mut self.state);
            let (mut state, effects) = update(state, msg);
            changed |= state.consume_dirty();
            self.state = state;
            pending.extend(self.effects.run(effects, &mut self.out)?);
        }
        Ok(changed)
    }

    /// Dispatches `msg` and prints the refreshed view if anything changed.
    fn dispatch_and_render(&mut self, msg: Msg) -> io::Result<()> {
        if self.dispatch(msg)? {
            let text = render::render(&self.state.view());
            self.out.write_all(text.as_bytes())?;
            if self.state.view().notice.is_some() {
                self.dispatch(Msg::NoticeDismissed)?;
            }
        }
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Prompts for `fields`; returns false on end of input.
    fn prompt_fields(&mut self, fields: &[FieldId]) -> io::Result<bool> {
        for &field in fields {
            let view = self.state.view();
            let Some(row) = view.field(field) else {
                continue;
            };
            write!(self.out, "{}", render::field_prompt(row))?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            if let Some(value) = parse_field_answer(&line) {
                self.dispatch(Msg::FieldChanged { field, value })?;
            }
        }
        Ok(true)
    }

    /// Prompts, submits and re-prompts failing fields until the form is accepted.
    fn complete_form(&mut self, fields: &[FieldId]) -> io::Result<bool> {
        let mut fields = fields.to_vec();
        loop {
            if !self.prompt_fields(&fields)? {
                return Ok(false);
            }
            self.dispatch_and_render(Msg::SubmitClicked)?;
            let errors = self.state.errors();
            if errors.is_empty() {
                return Ok(true);
            }
            fields = errors.iter().map(|err| err.field).collect();
        }
    }

    pub fn run_interactive(&mut self) -> io::Result<()> {
        let header = render::render_header(&self.state.view());
        self.out.write_all(header.as_bytes())?;

        if !self.complete_form(&FieldId::ALL)? {
            return Ok(());
        }
        writeln!(self.out, "{}", render::render_help(&self.state.view()).trim_end())?;

        loop {
            write!(self.out, "> ")?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            match parse_command(&line) {
                Command::Select(index) => {
                    let kinds = self.state.view().kinds;
                    match index.checked_sub(1).and_then(|i| kinds.get(i)) {
                        Some(kind) => self.dispatch_and_render(Msg::KindSelected(*kind))?,
                        None => writeln!(self.out, "No message number {index}")?,
                    }
                }
                Command::Copy => self.dispatch_and_render(Msg::CopyClicked)?,
                Command::ShowAll => {
                    let text = render::render_all(&self.state.view());
                    self.out.write_all(text.as_bytes())?;
                }
                Command::Edit => {
                    if !self.complete_form(&FieldId::ALL)? {
                        return Ok(());
                    }
                }
                Command::SwitchProfile => {
                    let next = match self.state.variant() {
                        Variant::Lenient => Variant::Strict,
                        Variant::Strict => Variant::Lenient,
                    };
                    self.dispatch(Msg::ProfileSelected(next))?;
                    let header = render::render_header(&self.state.view());
                    self.out.write_all(header.as_bytes())?;
                    if !self.complete_form(&FieldId::ALL)? {
                        return Ok(());
                    }
                }
                Command::Reset => {
                    self.dispatch(Msg::ResetClicked)?;
                    if !self.complete_form(&FieldId::ALL)? {
                        return Ok(());
                    }
                }
                Command::Quit => return Ok(()),
                Command::Help => {
                    let text = render::render_help(&self.state.view());
                    self.out.write_all(text.as_bytes())?;
                }
                Command::Empty => {}
                Command::Unknown(other) => {
                    writeln!(self.out, "Unknown command {other:?}; type ? for help")?;
                }
            }
        }
    }

    fn into_state(self) -> AppState {
        self.state
    }
}

fn msg_name(msg: &Msg) -> &'static str {
    match msg {
        Msg::FieldChanged { .. } => "FieldChanged",
        Msg::SubmitClicked => "SubmitClicked",
        Msg::KindSelected(_) => "KindSelected",
        Msg::CopyClicked => "CopyClicked",
        Msg::CopyFinished { .. } => "CopyFinished",
        Msg::ProfileSelected(_) => "ProfileSelected",
        Msg::ResetClicked => "ResetClicked",
        Msg::NoticeDismissed => "NoticeDismissed",
        Msg::NoOp => "NoOp",
    }
}

fn run_once(
    cli: &Cli,
    state: AppState,
    clipboard: Option<Box<dyn Clipboard>>,
) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    let code = submit_once(
        cli,
        state,
        EffectRunner::new(clipboard),
        &mut stdout,
        io::stderr(),
    )?;
    Ok(ExitCode::from(code))
}

/// Submits the flag values once and prints the result to `out`; status lines go to `status`.
fn submit_once<W: Write, S: Write>(
    cli: &Cli,
    state: AppState,
    effects: EffectRunner,
    out: &mut W,
    status: S,
) -> Result<u8> {
    let mut session = Session::new(state, effects, io::empty(), status);
    for (field, value) in cli.field_values() {
        session.dispatch(Msg::FieldChanged {
            field,
            value: value.to_string(),
        })?;
    }
    session.dispatch(Msg::SubmitClicked)?;

    let view = session.view();
    if view.error_count > 0 {
        match cli.format {
            OutputFormat::Text => out.write_all(render::render_errors(&view).as_bytes())?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &JsonErrors::from_view(&view))?;
                writeln!(out)?;
            }
        }
        return Ok(EXIT_INVALID_INPUT);
    }

    match cli.format {
        OutputFormat::Text if cli.all => out.write_all(render::render_all(&view).as_bytes())?,
        OutputFormat::Text => {
            if let Some(message) = view.selected_message() {
                out.write_all(render::render_message(message).as_bytes())?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &JsonReport::from_view(&view))?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    if cli.copy {
        session.dispatch(Msg::CopyClicked)?;
        let state = session.into_state();
        if let Some(notice) = state.view().notice {
            anyhow::bail!("{}", notice.text);
        }
    }
    Ok(EXIT_OK)
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    variant: &'static str,
    selected: &'static str,
    messages: Vec<JsonMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonMessage<'a> {
    kind: &'static str,
    title: &'static str,
    text: &'a str,
    char_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    char_limit: Option<usize>,
    over_limit: bool,
}

impl<'a> JsonReport<'a> {
    fn from_view(view: &'a AppViewModel) -> Self {
        Self {
            variant: view.variant.key(),
            selected: view.selected.key(),
            messages: view
                .messages
                .iter()
                .map(|m| JsonMessage {
                    kind: m.kind.key(),
                    title: m.title,
                    text: &m.text,
                    char_count: m.char_count,
                    char_limit: m.char_limit,
                    over_limit: m.over_limit,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonErrors<'a> {
    errors: Vec<JsonFieldError<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonFieldError<'a> {
    field: &'static str,
    message: &'a str,
}

impl<'a> JsonErrors<'a> {
    fn from_view(view: &'a AppViewModel) -> Self {
        Self {
            errors: view
                .fields
                .iter()
                .filter_map(|row| {
                    row.error.as_deref().map(|message| JsonFieldError {
                        field: row.field.key(),
                        message,
                    })
                })
                .collect(),
        }
    }
}
