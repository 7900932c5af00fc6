use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// The scores of completed games, in the order they were played, plus the
/// derived highest score.  Persisted as a JSON array on disk.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub(crate) struct ScoreHistory {
    scores: Vec<u32>,
}

impl ScoreHistory {
    /// Record the score of a completed game.  Games that ended without eating
    /// anything are not recorded.  Returns whether the score was kept.
    pub(crate) fn record(&mut self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        self.scores.push(score);
        true
    }

    /// The highest score over all recorded games, or 0 if there are none
    pub(crate) fn highest(&self) -> u32 {
        self.scores.iter().copied().max().unwrap_or(0)
    }

    pub(crate) fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub(crate) fn save(&self, path: &Path) -> Result<(), SaveError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        let mut src = serde_json::to_string(self).map_err(SaveError::serialize)?;
        src.push('\n');
        fs_err::write(path, &src).map_err(SaveError::write)?;
        Ok(())
    }

    /// Read the score history from `path`.  A missing file is an empty
    /// history, not an error.
    pub(crate) fn load(path: &Path) -> Result<ScoreHistory, LoadError> {
        let src = match fs_err::read(path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(ScoreHistory::default())
            }
            Err(e) => return Err(LoadError::read(e)),
        };
        serde_json::from_slice(&src).map_err(LoadError::deserialize)
    }
}

#[derive(Debug, Error)]
#[error("Failed to save score history to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    pub(crate) fn no_path() -> Self {
        SaveError(SaveErrorSource::NoPath)
    }

    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn serialize(e: serde_json::Error) -> Self {
        SaveError(SaveErrorSource::Serialize(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize score history")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write score history to disk")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read score history from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    pub(crate) fn no_path() -> Self {
        LoadError(LoadErrorSource::NoPath)
    }

    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn deserialize(e: serde_json::Error) -> Self {
        LoadError(LoadErrorSource::Deserialize(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to read score history file")]
    Read(#[source] std::io::Error),
    #[error("failed to deserialize score history")]
    Deserialize(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_scores_are_not_recorded() {
        let mut history = ScoreHistory::default();
        assert!(history.record(5));
        assert!(!history.record(0));
        assert!(history.record(8));
        assert_eq!(history.scores(), [5, 8]);
        assert_eq!(history.highest(), 8);
    }

    #[test]
    fn empty_history_has_highest_zero() {
        let history = ScoreHistory::default();
        assert_eq!(history.highest(), 0);
        assert!(history.scores().is_empty());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("history.json");
        let mut history = ScoreHistory::default();
        history.record(3);
        history.record(12);
        history.save(&path).unwrap();
        assert_eq!(
            fs_err::read_to_string(&path).unwrap(),
            "[3,12]\n"
        );
        assert_eq!(ScoreHistory::load(&path).unwrap(), history);
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let history = ScoreHistory::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(history, ScoreHistory::default());
    }

    #[test]
    fn load_garbage_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs_err::write(&path, "not json").unwrap();
        assert!(ScoreHistory::load(&path).is_err());
    }
}
