use anyhow::{Context, Result};
use math_matrix::{BinaryOp, NumericKind, Operand, Output, UnaryOp};
use serde::Deserialize;
use std::{cmp::Ordering, path::Path, path::PathBuf};
use structopt::{clap::AppSettings, StructOpt};
use tracing_subscriber::EnvFilter;

#[derive(Debug, StructOpt)]
#[structopt(name = "mmx", about = "Overflow-safe arithmetic on numeric literals")]
#[structopt(global_settings = &[AppSettings::AllowNegativeNumbers])]
pub struct Opts {
    /// JSON configuration file
    #[structopt(long, parse(from_os_str))]
    pub config: Option<PathBuf>,
    /// Kind to read textual operands as first (e.g. u8, i64, f32, decimal)
    #[structopt(long)]
    pub hint: Option<NumericKind>,
    /// Print results without their kind
    #[structopt(long)]
    pub bare: bool,
    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(Debug, StructOpt, PartialEq)]
pub enum Command {
    /// Combine two operands: + - * / % ^ min max
    Eval { x: String, op: BinaryOp, y: String },
    /// Apply abs, floor, ceiling, round or sqrt
    Unary { op: UnaryOp, x: String },
    /// Three-way comparison of two numerals or two texts, printed as -1, 0 or 1
    Compare {
        x: String,
        y: String,
        #[structopt(short, long)]
        ignore_case: bool,
    },
    /// Numeric equality, or ordinal equality of two non-numeric texts
    Equals { x: String, y: String },
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Config {
    /// Default hint for textual operands.
    #[serde(default)]
    pub hint: Option<NumericKind>,
    #[serde(default = "defaults::show_kind")]
    pub show_kind: bool,
    #[serde(default)]
    pub case_insensitive: bool,
    /// Used when `RUST_LOG` is not set.
    #[serde(default = "defaults::log_filter")]
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hint: None,
            show_kind: defaults::show_kind(),
            case_insensitive: false,
            log_filter: defaults::log_filter(),
        }
    }
}

mod defaults {
    pub(super) fn show_kind() -> bool {
        true
    }

    pub(super) fn log_filter() -> String {
        "warn".to_owned()
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

pub fn setup_logger(default_filter: &str) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| default_filter.to_owned());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

/// Execute one command and render its result line.
pub fn run(command: &Command, hint: Option<NumericKind>, config: &Config) -> Result<String> {
    match command {
        Command::Eval { x, op, y } => {
            let out = math_matrix::evaluate(*op, Operand::Text(x), Operand::Text(y), hint)?;
            Ok(render(out, config.show_kind))
        }
        Command::Unary { op, x } => {
            let out = math_matrix::evaluate_unary(*op, Operand::Text(x), hint)?;
            Ok(render(out, config.show_kind))
        }
        Command::Compare { x, y, ignore_case } => {
            let ordering = math_matrix::compare(
                numeral_or_text(x),
                numeral_or_text(y),
                *ignore_case || config.case_insensitive,
            )?;
            Ok(match ordering {
                Ordering::Less => "-1",
                Ordering::Equal => "0",
                Ordering::Greater => "1",
            }
            .to_owned())
        }
        Command::Equals { x, y } => {
            let equal = match (numeral_or_text(x), numeral_or_text(y)) {
                (Operand::Text(_), _) | (_, Operand::Text(_)) => x == y,
                (x, y) => math_matrix::equals(x, y)?,
            };
            Ok(equal.to_string())
        }
    }
}

/// Numerals become numbers so that they compare by value; anything else stays text.
fn numeral_or_text(text: &str) -> Operand<'_> {
    match Operand::Text(text).to_number(None) {
        Ok(Some(n)) => Operand::Number(n),
        Ok(None) => Operand::Null,
        Err(_) => Operand::Text(text),
    }
}

pub fn render(out: Output, show_kind: bool) -> String {
    match out {
        Output::Number(n) if show_kind => format!("{} ({})", n, n.kind()),
        out => out.to_string(),
    }
}
