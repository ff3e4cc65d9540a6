//! Runtime configuration for the board and its front-ends.
//!
//! Every field has a default, so a missing or partial JSON file is valid.

use crate::board::services::{DEFAULT_BOARD_KEY, DEFAULT_TEAM_KEY};
use crate::dnd::{DEFAULT_DRAG_THRESHOLD_PX, DragController};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use std::io;
use std::time::Duration;
use thiserror::Error;

/// Environment variable overriding [`BoardConfig::data_dir`].
pub const DATA_DIR_ENV: &str = "LEADBOARD_DATA_DIR";

const DEFAULT_DATA_DIR: &str = ".leadboard";
const DEFAULT_MOCK_LATENCY_MS: u64 = 800;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file '{path}': {source}")]
    Read {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid JSON for [`BoardConfig`].
    #[error("config file '{path}' is malformed: {source}")]
    Parse {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// Decoding failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Board configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Directory holding the persisted documents.
    pub data_dir: Utf8PathBuf,
    /// Storage key of the board snapshot.
    pub board_key: String,
    /// Storage key of the team roster.
    pub team_key: String,
    /// Simulated round-trip latency of CRM connectors, in milliseconds.
    pub mock_latency_ms: u64,
    /// Pointer travel, in pixels, before a press becomes a drag.
    pub drag_threshold_px: i32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            data_dir: Utf8PathBuf::from(DEFAULT_DATA_DIR),
            board_key: DEFAULT_BOARD_KEY.to_owned(),
            team_key: DEFAULT_TEAM_KEY.to_owned(),
            mock_latency_ms: DEFAULT_MOCK_LATENCY_MS,
            drag_threshold_px: DEFAULT_DRAG_THRESHOLD_PX,
        }
    }
}

impl BoardConfig {
    /// Loads configuration from a JSON file, or returns the defaults when
    /// `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read or decoded.
    pub fn load(path: Option<&Utf8Path>) -> Result<Self, ConfigError> {
        let Some(file) = path else {
            return Ok(Self::default());
        };
        let raw = read_file(file).map_err(|source| ConfigError::Read {
            path: file.to_owned(),
            source,
        })?;
        Self::from_json(&raw).map_err(|source| ConfigError::Parse {
            path: file.to_owned(),
            source,
        })
    }

    /// Decodes configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the decoding error for malformed input or unknown fields.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Replaces the data directory when an override is present.
    #[must_use]
    pub fn with_data_dir_override(mut self, data_dir: Option<Utf8PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }

    /// Returns the simulated connector latency.
    #[must_use]
    pub const fn mock_latency(&self) -> Duration {
        Duration::from_millis(self.mock_latency_ms)
    }

    /// Builds an idle drag controller with the configured threshold.
    #[must_use]
    pub const fn drag_controller(&self) -> DragController {
        DragController::new(self.drag_threshold_px)
    }
}

fn read_file(path: &Utf8Path) -> io::Result<String> {
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.read_to_string(name)
}
