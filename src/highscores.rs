//! High score leaderboard system
//!
//! Tracks the top 10 scores, persisted as JSON under the platform data
//! directory. File trouble is logged and absorbed; the game never fails
//! because the leaderboard could not be read or written.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighScoreEntry {
    /// Player's score
    pub score: u64,
    /// Fruits sliced in the run
    pub fruits_sliced: u32,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    const FILE_NAME: &'static str = "highscores.json";

    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        // Check if score beats the lowest entry
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Get the rank a score would achieve (1-indexed, None if doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a new score to the leaderboard (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if didn't qualify
    pub fn add_score(&mut self, score: u64, fruits_sliced: u32, timestamp: f64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = HighScoreEntry {
            score,
            fruits_sliced,
            timestamp,
        };

        // Find insertion point (sorted descending by score)
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        // Trim to max size
        self.entries.truncate(MAX_HIGH_SCORES);

        Some(rank)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    fn storage_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("fruit-slicer").join(Self::FILE_NAME))
    }

    /// Load high scores from disk, falling back to an empty board
    pub fn load() -> Self {
        let Some(path) = Self::storage_path() else {
            log::warn!("no data directory available, high scores disabled");
            return Self::new();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<HighScores>(&json) {
                Ok(scores) => {
                    log::info!("Loaded {} high scores", scores.entries.len());
                    scores
                }
                Err(e) => {
                    log::warn!("corrupt high-score file {}: {}", path.display(), e);
                    Self::new()
                }
            },
            Err(_) => {
                log::info!("No high scores found, starting fresh");
                Self::new()
            }
        }
    }

    /// Save high scores to disk; failures are logged, never fatal
    pub fn save(&self) {
        let Some(path) = Self::storage_path() else {
            return;
        };

        if let Some(dir) = path.parent()
            && let Err(e) = std::fs::create_dir_all(dir)
        {
            log::warn!("could not create {}: {}", dir.display(), e);
            return;
        }

        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    log::warn!("failed to save high scores: {}", e);
                } else {
                    log::info!("High scores saved ({} entries)", self.entries.len());
                }
            }
            Err(e) => log::warn!("failed to serialize high scores: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(scores: &[u64]) -> HighScores {
        let mut board = HighScores::new();
        for (i, &score) in scores.iter().enumerate() {
            board.add_score(score, i as u32, 0.0);
        }
        board
    }

    #[test]
    fn test_zero_never_qualifies() {
        assert!(!HighScores::new().qualifies(0));
    }

    #[test]
    fn test_everything_qualifies_until_full() {
        let board = board_with(&[100, 50]);
        assert!(board.qualifies(1));
        assert_eq!(board.potential_rank(75), Some(2));
    }

    #[test]
    fn test_entries_sorted_descending_and_trimmed() {
        let board = board_with(&[10, 30, 20, 90, 40, 50, 60, 70, 80, 100, 110, 5]);
        assert_eq!(board.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(board.top_score(), Some(110));
        for pair in board.entries.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        // 5 fell off a full board
        assert!(board.entries.iter().all(|e| e.score != 5));
    }

    #[test]
    fn test_full_board_requires_beating_the_floor() {
        let board = board_with(&[100, 90, 80, 70, 60, 50, 40, 30, 20, 10]);
        assert!(!board.qualifies(10));
        assert!(board.qualifies(11));
        assert_eq!(board.potential_rank(95), Some(2));
    }

    #[test]
    fn test_add_score_reports_rank() {
        let mut board = board_with(&[100, 50]);
        assert_eq!(board.add_score(75, 7, 0.0), Some(2));
        assert_eq!(board.add_score(200, 20, 0.0), Some(1));
        assert_eq!(board.add_score(0, 0, 0.0), None);
    }
}
