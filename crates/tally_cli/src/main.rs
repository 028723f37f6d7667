//! Line-driven driver for the tally core.
//!
//! # Responsibility
//! - Turn stdin commands into `UiEvent`s and print the resulting state.
//! - Keep output plain and deterministic for scripted sanity checks.
//!
//! Commands: `set <field> <value>`, `submit`, `dismiss`, `filter <year>`,
//! `open`, `close`, `show`, `quit`.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tally_core::{
    init_from_config, CoreConfig, DispatchError, DispatchOutcome, ExpensesFlow, FormSnapshot,
    Notification, UiEvent, UsersFlow,
};

/// Drive the tally forms from the terminal.
#[derive(Debug, Parser)]
#[command(name = "tally", version, about)]
struct Args {
    /// Which form to drive.
    #[arg(long, value_enum, default_value_t = FlowKind::Users)]
    flow: FlowKind,

    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides `logging.level` from the config file.
    #[arg(long)]
    log_level: Option<String>,

    /// Overrides `logging.log_dir` from the config file.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FlowKind {
    Users,
    Expenses,
}

enum Flow {
    Users(UsersFlow),
    Expenses(ExpensesFlow),
}

impl Flow {
    fn dispatch(&mut self, event: UiEvent) -> Result<DispatchOutcome, DispatchError> {
        match self {
            Self::Users(flow) => flow.dispatch(event),
            Self::Expenses(flow) => flow.dispatch(event),
        }
    }

    fn render(&self, out: &mut impl Write) -> io::Result<()> {
        match self {
            Self::Users(flow) => {
                for user in flow.records() {
                    writeln!(
                        out,
                        "user {} {} ({} years)",
                        user.id, user.username, user.age
                    )?;
                }
                render_draft(out, &flow.draft())?;
                render_notification(out, flow.notification())
            }
            Self::Expenses(flow) => {
                let year = flow.filter().year();
                let years = flow.available_years();
                let form = if flow.is_form_open() {
                    "open"
                } else {
                    "closed"
                };
                writeln!(out, "filter {year} (years: {years:?}) form={form}")?;
                for expense in flow.filtered() {
                    writeln!(
                        out,
                        "expense {} {} ${} {}",
                        expense.id, expense.date, expense.amount, expense.title
                    )?;
                }
                render_draft(out, &flow.draft())?;
                render_notification(out, flow.notification())
            }
        }
    }
}

fn render_draft(out: &mut impl Write, draft: &FormSnapshot) -> io::Result<()> {
    let fields: Vec<String> = draft
        .iter()
        .map(|(name, value)| format!("{name}={value:?}"))
        .collect();
    writeln!(out, "draft {}", fields.join(" "))
}

fn render_notification(
    out: &mut impl Write,
    notification: Option<&Notification>,
) -> io::Result<()> {
    if let Some(n) = notification {
        writeln!(out, "!! {}: {}", n.title, n.message)?;
    }
    Ok(())
}

enum Command {
    Event(UiEvent),
    Show,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    let command = match verb {
        "set" => {
            let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
            Command::Event(UiEvent::field_changed(field, value))
        }
        "submit" => Command::Event(UiEvent::SubmitRequested),
        "dismiss" => Command::Event(UiEvent::NotificationDismissed),
        "filter" => Command::Event(UiEvent::FilterChanged(rest.to_string())),
        "open" => Command::Event(UiEvent::FormOpened),
        "close" => Command::Event(UiEvent::FormClosed),
        "show" => Command::Show,
        "quit" | "exit" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

fn load_config(args: &Args) -> Result<CoreConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config `{}`", path.display()))?;
            CoreConfig::from_json_str(&raw)?
        }
        None => CoreConfig::default(),
    };
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if let Some(dir) = &args.log_dir {
        config.logging.log_dir = Some(dir.clone());
    }
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;
    init_from_config(&config.logging)?;

    let mut flow = match args.flow {
        FlowKind::Users => Flow::Users(UsersFlow::users()),
        FlowKind::Expenses => Flow::Expenses(ExpensesFlow::from_config(&config)),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "tally_core version={}", tally_core::core_version())?;

    let mut handled = 0usize;
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Some(Command::Event(event)) => {
                if let Err(err) = flow.dispatch(event) {
                    writeln!(stdout, "error: {err}")?;
                }
                handled += 1;
                flow.render(&mut stdout)?;
            }
            Some(Command::Show) => flow.render(&mut stdout)?,
            Some(Command::Quit) => break,
            None => writeln!(stdout, "unknown command: {}", line.trim())?,
        }
    }

    info!("event=cli_exit module=cli status=ok events={handled}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command};
    use tally_core::UiEvent;

    #[test]
    fn set_keeps_spaces_in_value() {
        let Some(Command::Event(event)) = parse_command("set title Car Insurance") else {
            panic!("set should parse");
        };
        assert_eq!(event, UiEvent::field_changed("title", "Car Insurance"));
    }

    #[test]
    fn filter_passes_raw_text() {
        let Some(Command::Event(event)) = parse_command("filter 2021") else {
            panic!("filter should parse");
        };
        assert_eq!(event, UiEvent::FilterChanged("2021".to_string()));
    }

    #[test]
    fn unknown_verb_is_rejected() {
        assert!(parse_command("delete 1").is_none());
        assert!(matches!(parse_command("quit"), Some(Command::Quit)));
    }
}
