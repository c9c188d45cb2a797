//! YAML configuration for the simulator.
//!
//! Mirrors the shape of `config.yaml`:
//!
//! ```yaml
//! logging_level: INFO
//! simulation_area:
//!   x: 5
//!   y: 5
//! start_position:
//!   x: 0
//!   y: 0
//!   direction: NORTH
//! ```
//!
//! `logging_level` defaults to INFO and `start_position` may be omitted;
//! `simulation_area` is required. Malformed values are fatal at startup rather
//! than clamped or defaulted.

use crate::area::{AreaError, SimulationArea};
use crate::robot::Orientation;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::Level;

/// Errors raised while loading or validating the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read at all.
    #[error("could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not well-formed YAML or is missing required fields.
    #[error("malformed config file: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// The simulation area dimensions are unusable.
    #[error(transparent)]
    Area(#[from] AreaError),
}

/// Logging verbosity, named as in the config file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// The corresponding `tracing` level.
    pub fn as_level(self) -> Level {
        match self {
            Self::Debug => Level::DEBUG,
            Self::Info => Level::INFO,
            Self::Warning => Level::WARN,
            Self::Error => Level::ERROR,
        }
    }
}

/// Error raised for a logging level token outside the recognized set.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unrecognized logging level `{0}`, expected DEBUG, INFO, WARNING or ERROR")]
pub struct ParseLogLevelError(pub String);

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            _ => Err(ParseLogLevelError(s.to_owned())),
        }
    }
}

/// Raw area dimensions as they appear in the config file.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct AreaDimensions {
    pub x: i32,
    pub y: i32,
}

/// Optional configured start pose, applied as an initial PLACE at startup.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct StartPosition {
    pub x: i32,
    pub y: i32,
    pub direction: Orientation,
}

/// The full configuration file contents.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct SimulationConfig {
    /// Logging verbosity; INFO when omitted.
    #[serde(default)]
    pub logging_level: LogLevel,
    /// The total area the robot can move within.
    pub simulation_area: AreaDimensions,
    /// Where to place the robot on startup, if anywhere.
    #[serde(default)]
    pub start_position: Option<StartPosition>,
}

impl SimulationConfig {
    /// Loads the configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Ok(serde_yaml::from_str(&raw)?)
    }

    /// Validates the configured dimensions into a [`SimulationArea`].
    pub fn simulation_area(&self) -> Result<SimulationArea, ConfigError> {
        Ok(SimulationArea::new(
            self.simulation_area.x,
            self.simulation_area.y,
        )?)
    }
}
