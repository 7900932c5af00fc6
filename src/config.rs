use crate::difficulty::Difficulty;
use crate::history::{LoadError, SaveError, ScoreHistory};
use crate::util;
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Difficulty to start at
    pub(crate) difficulty: Difficulty,

    /// Board dimensions
    pub(crate) board: BoardConfig,

    /// Settings about data files
    pub(crate) files: FileConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("termsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist
    /// and `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Return the filepath at which the score history should be stored: the
    /// file given in the configuration or, if that is not set, the default
    /// history file path.  Return `None` if no path is present in the
    /// configuration and the default path could not be computed.
    fn history_file(&self) -> Option<Cow<'_, Path>> {
        self.files
            .history_file
            .as_deref()
            .map(Cow::from)
            .or_else(|| util::history_file_path().map(Cow::from))
    }

    /// Load the score history from disk.  A missing file is an empty history.
    pub(crate) fn load_history(&self) -> Result<ScoreHistory, LoadError> {
        if let Some(p) = self.history_file() {
            ScoreHistory::load(&p)
        } else {
            Err(LoadError::no_path())
        }
    }

    /// Save the score history to disk.
    ///
    /// If `self.files.save_history` is `false`, nothing is saved.
    pub(crate) fn save_history(&self, history: &ScoreHistory) -> Result<(), SaveError> {
        if !self.files.save_history {
            return Ok(());
        }
        if let Some(p) = self.history_file() {
            history.save(&p)
        } else {
            Err(SaveError::no_path())
        }
    }
}

/// Board dimensions in board units.  Width and height must be multiples of
/// the cell size, with room for at least two cells in each direction.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "RawBoardConfig")]
pub(crate) struct BoardConfig {
    pub(crate) width: u16,
    pub(crate) height: u16,
    pub(crate) cell: u16,
}

impl Default for BoardConfig {
    fn default() -> BoardConfig {
        BoardConfig {
            width: 760,
            height: 380,
            cell: 20,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawBoardConfig {
    width: u16,
    height: u16,
    cell_size: u16,
}

impl Default for RawBoardConfig {
    fn default() -> RawBoardConfig {
        let board = BoardConfig::default();
        RawBoardConfig {
            width: board.width,
            height: board.height,
            cell_size: board.cell,
        }
    }
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = String;

    fn try_from(raw: RawBoardConfig) -> Result<BoardConfig, String> {
        if raw.cell_size == 0 {
            return Err(String::from("cell-size must be positive"));
        }
        if raw.width % raw.cell_size != 0 || raw.height % raw.cell_size != 0 {
            return Err(String::from(
                "board width and height must be multiples of cell-size",
            ));
        }
        if raw.width / raw.cell_size < 2 || raw.height / raw.cell_size < 2 {
            return Err(String::from("board must be at least two cells wide and tall"));
        }
        Ok(BoardConfig {
            width: raw.width,
            height: raw.height,
            cell: raw.cell_size,
        })
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path at which the score history should be stored
    pub(crate) history_file: Option<PathBuf>,

    /// Whether to record completed games on disk
    pub(crate) save_history: bool,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            history_file: None,
            save_history: true,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[source] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
