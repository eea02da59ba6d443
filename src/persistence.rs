//! Best-score persistence: one JSON file under ~/.flappy/ holding a single
//! integer.
//!
//! Reads fall back to zero on any failure. Writes are best-effort: an
//! unwritable disk degrades the game to session-only scores, it never ends
//! the session.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const SAVE_FILE: &str = "best_score.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct BestScoreFile {
    best_score: u32,
}

/// Handle to the durable best-score slot.
#[derive(Debug, Clone)]
pub struct BestScoreStore {
    path: Option<PathBuf>,
}

impl BestScoreStore {
    /// Store at the default location, `~/.flappy/best_score.json`. The
    /// directory is created on first save. Without a resolvable home
    /// directory the store loads 0 and drops writes.
    pub fn new() -> Self {
        Self {
            path: dirs::home_dir().map(|home| home.join(".flappy").join(SAVE_FILE)),
        }
    }

    /// Store backed by an explicit file path.
    pub fn at(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Load the saved best score, or 0 if the file is missing or unreadable.
    pub fn load_best(&self) -> u32 {
        let path = match &self.path {
            Some(p) => p,
            None => return 0,
        };
        match fs::read_to_string(path) {
            Ok(json) => serde_json::from_str::<BestScoreFile>(&json)
                .map(|file| file.best_score)
                .unwrap_or_default(),
            Err(_) => 0,
        }
    }

    /// Persist a new best score. Failures are swallowed.
    pub fn save_best(&self, best_score: u32) {
        let path = match &self.path {
            Some(p) => p,
            None => return,
        };
        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        if let Ok(json) = serde_json::to_string_pretty(&BestScoreFile { best_score }) {
            let _ = fs::write(path, json);
        }
    }
}

impl Default for BestScoreStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> BestScoreStore {
        let path = std::env::temp_dir().join(format!("flappy_{}_{}.json", name, std::process::id()));
        let _ = fs::remove_file(&path);
        BestScoreStore::at(path)
    }

    #[test]
    fn test_load_missing_returns_zero() {
        let store = temp_store("missing");
        assert_eq!(store.load_best(), 0);
    }

    #[test]
    fn test_load_corrupt_returns_zero() {
        let store = temp_store("corrupt");
        let path = store.path.clone().unwrap();
        fs::write(&path, "not json at all").unwrap();
        assert_eq!(store.load_best(), 0);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let store = temp_store("roundtrip");
        store.save_best(42);
        assert_eq!(store.load_best(), 42);
        fs::remove_file(store.path.clone().unwrap()).ok();
    }

    #[test]
    fn test_save_to_unwritable_path_is_silent() {
        let store = BestScoreStore::at(PathBuf::from("/proc/flappy/forbidden/best.json"));
        // Must not panic; the degraded read yields the default
        store.save_best(7);
        assert_eq!(store.load_best(), 0);
    }
}
