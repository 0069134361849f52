use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR_NAME: &str = "neon-snake";
const SCORE_FILE_NAME: &str = "highscore.json";

/// Failure saving the best score. Loads never fail: a missing or unreadable
/// file simply yields 0, so gameplay starts regardless.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("could not write score file: {0}")]
    Io(#[from] io::Error),
    #[error("could not encode score file: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    best_score: u32,
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// Loads the best score from disk, falling back to 0 when the file is
/// missing, unreadable, or malformed.
#[must_use]
pub fn load_best_score() -> u32 {
    load_best_score_from_path(&scores_path())
}

/// Saves the best score to disk, creating parent directories when needed.
pub fn save_best_score(score: u32) -> Result<(), ScoreError> {
    save_best_score_to_path(&scores_path(), score)
}

fn load_best_score_from_path(path: &Path) -> u32 {
    let Ok(raw) = fs::read_to_string(path) else {
        return 0;
    };

    serde_json::from_str::<ScoreFile>(&raw)
        .map(|file| file.best_score)
        .unwrap_or(0)
}

fn save_best_score_to_path(path: &Path, score: u32) -> Result<(), ScoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = ScoreFile { best_score: score };
    let json = serde_json::to_string_pretty(&payload)?;
    fs::write(path, json)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{load_best_score_from_path, save_best_score_to_path};

    #[test]
    fn score_serialization_round_trip() {
        let path = unique_test_path("round_trip");

        save_best_score_to_path(&path, 170).expect("score save should succeed");
        let loaded = load_best_score_from_path(&path);

        assert_eq!(loaded, 170);
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_score_file_yields_zero() {
        let path = unique_test_path("missing");
        // Deliberately do not create the file.
        assert_eq!(load_best_score_from_path(&path), 0);
    }

    #[test]
    fn malformed_score_file_yields_zero() {
        let path = unique_test_path("malformed");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "not-json").expect("test file write should succeed");

        assert_eq!(load_best_score_from_path(&path), 0);

        cleanup_test_path(&path);
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("neon-snake-score-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
