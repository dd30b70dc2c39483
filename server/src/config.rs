//! Command-line configuration.

use std::fmt;

use gridpath_board::BoardConfig;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

/// Everything the server needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub board: BoardConfig,
    /// Seed for maze generation; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            board: BoardConfig::default(),
            seed: None,
        }
    }
}

/// Why the command line could not be turned into a [`ServerConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `--help` was given.
    HelpRequested,
    UnknownFlag(String),
    DuplicateFlag(&'static str),
    MissingValue(&'static str),
    InvalidValue { flag: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HelpRequested => write!(f, "help requested"),
            Self::UnknownFlag(flag) => write!(f, "unknown argument {flag}"),
            Self::DuplicateFlag(flag) => write!(f, "{flag} given more than once"),
            Self::MissingValue(flag) => write!(f, "{flag} needs a value"),
            Self::InvalidValue { flag, value } => write!(f, "invalid value {value:?} for {flag}"),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn usage(program: &str) -> String {
    format!(
        "Usage:\n  {program} [--host <addr>] [--port <port>] [--rows <n>] [--cols <n>] [--seed <u64>]\n\nServes the pathfinding grid API under /api on http://<host>:<port>.\nDefaults: --host {DEFAULT_HOST} --port {DEFAULT_PORT} --rows {} --cols {}.\nThe default host only accepts local connections; pass --host 0.0.0.0 to listen on all interfaces.\n--seed makes generated mazes reproducible.\nSet RUST_LOG to change log verbosity (default: info).",
        gridpath_board::DEFAULT_ROWS,
        gridpath_board::DEFAULT_COLS,
    )
}

fn value<T: std::str::FromStr>(
    flag: &'static str,
    args: &mut impl Iterator<Item = String>,
) -> Result<T, ConfigError> {
    let raw = args.next().ok_or(ConfigError::MissingValue(flag))?;
    raw.parse()
        .map_err(|_| ConfigError::InvalidValue { flag, value: raw })
}

fn once<T>(slot: &mut Option<T>, flag: &'static str, v: T) -> Result<(), ConfigError> {
    if slot.is_some() {
        return Err(ConfigError::DuplicateFlag(flag));
    }
    *slot = Some(v);
    Ok(())
}

/// Parse command-line arguments (without the program name).
///
/// Each flag may appear at most once. Dimensions must be positive.
pub fn parse_options(mut args: impl Iterator<Item = String>) -> Result<ServerConfig, ConfigError> {
    let mut host: Option<String> = None;
    let mut port: Option<u16> = None;
    let mut rows: Option<i32> = None;
    let mut cols: Option<i32> = None;
    let mut seed: Option<u64> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--host" => {
                let v = value("--host", &mut args)?;
                once(&mut host, "--host", v)?;
            }
            "--port" => {
                let v = value("--port", &mut args)?;
                once(&mut port, "--port", v)?;
            }
            "--rows" => {
                let v = value("--rows", &mut args)?;
                once(&mut rows, "--rows", v)?;
            }
            "--cols" => {
                let v = value("--cols", &mut args)?;
                once(&mut cols, "--cols", v)?;
            }
            "--seed" => {
                let v = value("--seed", &mut args)?;
                once(&mut seed, "--seed", v)?;
            }
            "-h" | "--help" => return Err(ConfigError::HelpRequested),
            _ => return Err(ConfigError::UnknownFlag(arg)),
        }
    }

    let defaults = BoardConfig::default();
    let board = BoardConfig {
        rows: rows.unwrap_or(defaults.rows),
        cols: cols.unwrap_or(defaults.cols),
    };
    if board.rows <= 0 {
        return Err(ConfigError::InvalidValue {
            flag: "--rows",
            value: board.rows.to_string(),
        });
    }
    if board.cols <= 0 {
        return Err(ConfigError::InvalidValue {
            flag: "--cols",
            value: board.cols.to_string(),
        });
    }

    Ok(ServerConfig {
        host: host.unwrap_or_else(|| DEFAULT_HOST.to_owned()),
        port: port.unwrap_or(DEFAULT_PORT),
        board,
        seed,
    })
}
