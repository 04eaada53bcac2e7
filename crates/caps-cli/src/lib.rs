// caps-cli: shared utilities for CLI tools.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;
use std::sync::OnceLock;

use caps::{Caps, CapsConfig, Replacement, default_replacements};
use caps_core::{Caser, ParseError, ReplaceStyle};
use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable holding a replacement table path.
pub const TABLE_ENV: &str = "CAPS_REPLACEMENTS";

/// Environment variable selecting the log level.
pub const LOG_ENV: &str = "CAPS_LOG";

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed replacement table {path}: {source}")]
    Table {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{0} requires a value")]
    MissingValue(String),
    #[error("unknown output style: {0}")]
    UnknownStyle(String),
    #[error("unknown option: {0}")]
    UnknownOption(String),
    #[error("missing output style")]
    MissingStyle,
    #[error(transparent)]
    Parse(#[from] ParseError),
}

// ---------------------------------------------------------------------------
// Output styles
// ---------------------------------------------------------------------------

/// The conversions `caps-convert` can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    Camel,
    LowerCamel,
    Title,
    Snake,
    ScreamingSnake,
    Kebab,
    ScreamingKebab,
    Dot,
    ScreamingDot,
}

impl OutputStyle {
    pub const NAMES: &[&str] = &[
        "camel",
        "lower-camel",
        "title",
        "snake",
        "screaming-snake",
        "kebab",
        "screaming-kebab",
        "dot",
        "screaming-dot",
    ];

    pub fn apply(self, caps: &Caps, input: &str) -> String {
        match self {
            OutputStyle::Camel => caps.to_camel(input),
            OutputStyle::LowerCamel => caps.to_lower_camel(input),
            OutputStyle::Title => caps.to_title(input),
            OutputStyle::Snake => caps.to_snake(input),
            OutputStyle::ScreamingSnake => caps.to_screaming_snake(input),
            OutputStyle::Kebab => caps.to_kebab(input),
            OutputStyle::ScreamingKebab => caps.to_screaming_kebab(input),
            OutputStyle::Dot => caps.to_dot_notation(input),
            OutputStyle::ScreamingDot => caps.to_screaming_dot_notation(input),
        }
    }
}

impl FromStr for OutputStyle {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "camel" | "pascal" => Ok(OutputStyle::Camel),
            "lower-camel" => Ok(OutputStyle::LowerCamel),
            "title" => Ok(OutputStyle::Title),
            "snake" => Ok(OutputStyle::Snake),
            "screaming-snake" => Ok(OutputStyle::ScreamingSnake),
            "kebab" => Ok(OutputStyle::Kebab),
            "screaming-kebab" => Ok(OutputStyle::ScreamingKebab),
            "dot" => Ok(OutputStyle::Dot),
            "screaming-dot" => Ok(OutputStyle::ScreamingDot),
            _ => Err(CliError::UnknownStyle(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Argument parsing
// ---------------------------------------------------------------------------

/// Options shared by the tools.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub allowed: String,
    pub replace_style: ReplaceStyle,
    pub table: Option<PathBuf>,
    pub caser: Caser,
    /// Arguments that are not options, in order.
    pub positional: Vec<String>,
}

impl Options {
    /// Parse `-a/--allowed`, `-r/--replace-style`, `-t/--table` and
    /// `--caser`, in both `--opt VALUE` and `--opt=VALUE` forms.
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut opts = Options::default();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            let (name, inline) = match arg.split_once('=') {
                Some((name, value)) if name.starts_with("--") => (name, Some(value.to_string())),
                _ => (arg.as_str(), None),
            };
            let mut value = || match &inline {
                Some(v) => Ok(v.clone()),
                None => iter
                    .next()
                    .cloned()
                    .ok_or_else(|| CliError::MissingValue(name.to_string())),
            };

            match name {
                "-a" | "--allowed" => opts.allowed.push_str(&value()?),
                "-r" | "--replace-style" => opts.replace_style = value()?.parse()?,
                "-t" | "--table" => opts.table = Some(PathBuf::from(value()?)),
                "--caser" => opts.caser = value()?.parse()?,
                "--" => {
                    opts.positional.extend(iter.by_ref().cloned());
                }
                _ if name.len() > 1 && name.starts_with('-') => {
                    return Err(CliError::UnknownOption(arg.clone()));
                }
                _ => opts.positional.push(arg.clone()),
            }
        }

        Ok(opts)
    }

    /// The replacement table path: `--table` first, then `CAPS_REPLACEMENTS`.
    pub fn table_path(&self) -> Option<PathBuf> {
        self.table.clone().or_else(|| {
            std::env::var_os(TABLE_ENV)
                .filter(|p| !p.is_empty())
                .map(PathBuf::from)
        })
    }

    /// Build a [`Caps`] from these options, loading the extra replacement
    /// table if one is configured.
    pub fn build_caps(&self) -> Result<Caps, CliError> {
        let mut replacements = default_replacements();
        if let Some(path) = self.table_path() {
            let extra = load_table(&path)?;
            log::info!("loaded {} replacements from {}", extra.len(), path.display());
            replacements.extend(extra);
        }

        Ok(CapsConfig::new()
            .allowed_symbols(&self.allowed)
            .replace_style(self.replace_style)
            .caser(self.caser)
            .replacements(replacements)
            .build())
    }
}

/// Read a JSON array of `{"camel": .., "screaming": ..}` objects.
pub fn load_table(path: &Path) -> Result<Vec<Replacement>, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CliError::Table {
        path: path.to_path_buf(),
        source,
    })
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Escape control characters for single-line display.
pub fn escape(text: &str) -> String {
    text.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let stderr = io::stderr();
            let mut err = stderr.lock();
            let _ = writeln!(
                err,
                "[{:5} {}] {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Parse a `CAPS_LOG` value. Unset, empty or unrecognized means off.
pub fn level_from_env(value: Option<&str>) -> LevelFilter {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse().ok())
        .unwrap_or(LevelFilter::Off)
}

/// Install the stderr logger at the level named by `CAPS_LOG`.
pub fn init_logging() {
    let level = level_from_env(std::env::var(LOG_ENV).ok().as_deref());
    if level == LevelFilter::Off {
        return;
    }
    let logger = LOGGER.get_or_init(|| StderrLogger { level });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}
