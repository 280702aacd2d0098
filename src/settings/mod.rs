use std::{
    fs, io,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use cwalk::Algorithm;
use log::LevelFilter;
use ron::{self, extensions::Extensions, ser::PrettyConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot access settings file: {0}")]
    Io(#[from] io::Error),
    #[error("invalid settings file: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("cannot write settings: {0}")]
    Serialize(#[from] ron::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum SearchAlgo {
    #[default]
    #[value(name = "dfs", alias = "depth-first")]
    DepthFirst,
    #[value(name = "bfs", alias = "breadth-first")]
    BreadthFirst,
}

impl From<SearchAlgo> for Algorithm {
    fn from(algo: SearchAlgo) -> Self {
        match algo {
            SearchAlgo::DepthFirst => Algorithm::DepthFirst,
            SearchAlgo::BreadthFirst => Algorithm::BreadthFirst,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    const ALL: [LogLevel; 6] = [
        LogLevel::Off,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    /// Level `steps` notches more verbose, stopping at `Trace`.
    pub fn raised(self, steps: u8) -> LogLevel {
        let idx = (self as usize + steps as usize).min(Self::ALL.len() - 1);
        Self::ALL[idx]
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub default_algorithm: Option<SearchAlgo>,
    #[serde(default)]
    pub log_level: Option<LogLevel>,
    #[serde(default)]
    pub show_grid: Option<bool>,
}

#[allow(dead_code)]
impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn populate(mut self) -> Self {
        self.default_algorithm = Some(self.get_default_algorithm());
        self.log_level = Some(self.get_log_level());
        self.show_grid = Some(self.get_show_grid());

        self
    }

    pub fn set_default_algorithm(mut self, value: SearchAlgo) -> Self {
        self.default_algorithm = Some(value);
        self
    }

    pub fn get_default_algorithm(&self) -> SearchAlgo {
        self.default_algorithm.unwrap_or_default()
    }

    pub fn set_log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level.unwrap_or_default()
    }

    pub fn set_show_grid(mut self, value: bool) -> Self {
        self.show_grid = Some(value);
        self
    }

    pub fn get_show_grid(&self) -> bool {
        self.show_grid.unwrap_or(true)
    }

    pub fn default_path() -> PathBuf {
        dirs::preference_dir()
            .unwrap_or_default()
            .join("mazewalk")
            .join("settings.ron")
    }

    fn options() -> ron::Options {
        ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
    }

    pub fn from_ron(text: &str) -> Result<Self, SettingsError> {
        Ok(Self::options().from_str(text)?)
    }

    /// Reads settings from `path`. A missing file gives the built-in defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        match fs::read_to_string(path.as_ref()) {
            Ok(text) => Self::from_ron(&text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Self::from_ron(DEFAULT_SETTINGS),
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let text = Self::options().to_string_pretty(self, PrettyConfig::default())?;
        write_creating_dirs(path.as_ref(), &text)
    }

    /// Overwrites `path` with the commented default settings.
    pub fn reset_config(path: impl AsRef<Path>) -> Result<(), SettingsError> {
        write_creating_dirs(path.as_ref(), DEFAULT_SETTINGS)
    }
}

fn write_creating_dirs(path: &Path, text: &str) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;
    Ok(())
}
