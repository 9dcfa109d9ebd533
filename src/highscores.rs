//! Persisted best score
//!
//! A single integer under one LocalStorage key. Absent or unreadable
//! storage reads as 0; a failed write keeps the in-memory value for the
//! rest of the session. Never decreases.

use serde::{Deserialize, Serialize};

/// Best score across sessions
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HighScore(u32);

impl HighScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "cloud_hopper_highscore";

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Record a new score. Persists and returns true only when it beats
    /// the stored best.
    pub fn raise(&mut self, score: u32) -> bool {
        if score <= self.0 {
            return false;
        }
        self.0 = score;
        self.save();
        true
    }

    /// Load the best score from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(value) = serde_json::from_str::<u32>(&json) {
                    log::info!("Loaded high score: {}", value);
                    return Self(value);
                }
            }
        }

        log::info!("No high score found, starting fresh");
        Self(0)
    }

    /// Save the best score to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(&self.0) {
                if storage.set_item(Self::STORAGE_KEY, &json).is_err() {
                    log::debug!("High score write failed, keeping in-memory value");
                }
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self(0)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        assert_eq!(HighScore::default().value(), 0);
    }

    #[test]
    fn test_raise_only_on_improvement() {
        let mut best = HighScore::new(0);

        assert!(best.raise(1));
        assert_eq!(best.value(), 1);

        assert!(!best.raise(1), "equal score is not a raise");
        assert!(!best.raise(0));
        assert_eq!(best.value(), 1);

        assert!(best.raise(5));
        assert_eq!(best.value(), 5);
    }

    #[test]
    fn test_monotonic_over_sessions() {
        // Each element is one session's final score
        let sessions = [3_u32, 1, 7, 7, 2, 9, 0];
        let mut best = HighScore::new(0);
        let mut previous = 0;

        for score in sessions {
            best.raise(score);
            assert!(best.value() >= previous);
            assert!(best.value() >= score);
            previous = best.value();
        }

        assert_eq!(best.value(), 9);
    }
}
