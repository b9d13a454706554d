// cli.rs - Command-line options and logger setup

use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;
use thiserror::Error;

use life_engine::{EngineConfig, LifeError};

pub const CONFIG_ENV: &str = "LIFE_CONFIG";

pub const USAGE: &str = "\
Usage: life [OPTIONS]

Options:
    --config <PATH>          Engine settings as JSON (or set LIFE_CONFIG)
    --headless <N>           Run N generations without a window and print the grid
    --seed <N>               Seed for the random starting grid (headless)
    --pattern <NAME>         Start from a built-in pattern instead of a random grid
    --log-level <LEVEL>      off/error/warn/info/debug/trace (default: info)
    --help, -h               Show this help";

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] LifeError),

    #[error("window error: {0}")]
    Ui(#[from] eframe::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}\n\n{usage}", usage = USAGE)]
    Usage(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub config_path: Option<PathBuf>,
    pub headless: Option<u64>,
    pub seed: u64,
    pub pattern: Option<String>,
    pub log_level: LevelFilter,
    pub help: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            config_path: None,
            headless: None,
            seed: 0,
            pattern: None,
            log_level: LevelFilter::Info,
            help: false,
        }
    }
}

impl Options {
    /// Parses everything after the program name. Accepts `--flag value` and `--flag=value`.
    pub fn parse<I>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Options::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
                None => (arg, None),
            };
            let mut value = |name: &str| {
                inline
                    .clone()
                    .or_else(|| args.next())
                    .ok_or_else(|| AppError::Usage(format!("{} needs a value", name)))
            };

            match flag.as_str() {
                "--config" => options.config_path = Some(PathBuf::from(value("--config")?)),
                "--headless" => options.headless = Some(parse_number(&value("--headless")?, "--headless")?),
                "--seed" => options.seed = parse_number(&value("--seed")?, "--seed")?,
                "--pattern" => options.pattern = Some(value("--pattern")?),
                "--log-level" => {
                    let level = value("--log-level")?;
                    options.log_level = LevelFilter::from_str(&level)
                        .map_err(|_| AppError::Usage(format!("unknown log level {:?}", level)))?;
                }
                "--help" | "-h" => options.help = true,
                other => return Err(AppError::Usage(format!("unknown option {:?}", other))),
            }
        }
        Ok(options)
    }

    /// Config from `--config`, else `LIFE_CONFIG`, else defaults.
    pub fn load_config(&self) -> Result<EngineConfig, AppError> {
        let path = self
            .config_path
            .clone()
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        match path {
            Some(path) => {
                log::info!("loading config from {}", path.display());
                Ok(EngineConfig::from_json_file(path)?)
            }
            None => Ok(EngineConfig::default()),
        }
    }
}

fn parse_number(text: &str, flag: &str) -> Result<u64, AppError> {
    text.parse()
        .map_err(|_| AppError::Usage(format!("{} expects a number, got {:?}", flag, text)))
}

/// Installs `env_logger` once. `RUST_LOG` still applies on top of `level`.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .filter_module("eframe", LevelFilter::Warn)
        .filter_module("egui_glow", LevelFilter::Warn)
        .filter_module("winit", LevelFilter::Warn)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init()
        .ok();
}
