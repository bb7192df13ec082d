use std::fmt;
use std::path::PathBuf;

use spelling_core::model::SettingsDraft;
use storage::CatalogSource;

#[derive(Debug, PartialEq, Eq)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidNumber { flag: &'static str, raw: String },
    InvalidPath { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidNumber { flag, raw } => write!(f, "invalid {flag} value: {raw}"),
            ArgsError::InvalidPath { flag } => write!(f, "{flag} must not be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ui,
    Stats,
    Help,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "stats" => Some(Self::Stats),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub command: Command,
    pub data_dir: PathBuf,
    pub word_list: Option<PathBuf>,
    pub overrides: SettingsDraft,
}

impl Args {
    #[must_use]
    pub fn catalog_source(&self) -> CatalogSource {
        match &self.word_list {
            Some(path) => CatalogSource::WordList(path.clone()),
            None => CatalogSource::Embedded,
        }
    }

    /// Parse `argv` (without the program name). Environment values seed the
    /// defaults and flags override them.
    pub fn parse(
        argv: impl IntoIterator<Item = String>,
        env_data_dir: Option<String>,
        env_word_list: Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut argv = argv.into_iter().peekable();

        let command = match argv.peek().map(String::as_str) {
            None => Command::Ui,
            Some(first) if first.starts_with('-') => Command::Ui,
            Some(first) => {
                let cmd = Command::from_arg(first)
                    .ok_or_else(|| ArgsError::UnknownCommand(first.to_string()))?;
                argv.next();
                cmd
            }
        };

        let mut args = Self {
            command,
            data_dir: env_data_dir
                .filter(|value| !value.trim().is_empty())
                .map_or_else(|| PathBuf::from("."), PathBuf::from),
            word_list: env_word_list
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
            overrides: SettingsDraft::default(),
        };

        while let Some(arg) = argv.next() {
            match arg.as_str() {
                "--data-dir" => args.data_dir = require_path(&mut argv, "--data-dir")?,
                "--words" => args.word_list = Some(require_path(&mut argv, "--words")?),
                "--session-length" => {
                    args.overrides.session_length =
                        Some(require_number(&mut argv, "--session-length")?);
                }
                "--history-depth" => {
                    args.overrides.history_depth =
                        Some(require_number(&mut argv, "--history-depth")?);
                }
                "--boost" => {
                    args.overrides.boost_factor = Some(require_number(&mut argv, "--boost")?);
                }
                "--capture-text" => args.overrides.capture_mistake_text = Some(true),
                "--no-shuffle" => args.overrides.shuffle_presentation = Some(false),
                "--help" | "-h" => args.command = Command::Help,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(args)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn require_path(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<PathBuf, ArgsError> {
    let value = require_value(args, flag)?;
    if value.trim().is_empty() {
        return Err(ArgsError::InvalidPath { flag });
    }
    Ok(PathBuf::from(value))
}

fn require_number(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<u32, ArgsError> {
    let raw = require_value(args, flag)?;
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidNumber { flag, raw })
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  app [ui|stats] [--data-dir <dir>] [--words <file>]");
    eprintln!("                 [--session-length <n>] [--history-depth <n>] [--boost <n>]");
    eprintln!("                 [--capture-text] [--no-shuffle]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  ui command, data dir \".\", embedded word list");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SPELLING_DATA_DIR, SPELLING_WORD_LIST, RUST_LOG");
}
