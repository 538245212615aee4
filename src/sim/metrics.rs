//! Score and lives tracking

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    pub score: u32,
    pub lives: u32,
}

impl Metrics {
    pub fn new(lives: u32) -> Self {
        Self { score: 0, lives }
    }

    /// One point per wall spawned
    pub fn increment_score(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    /// Take a life. Returns false when none are left and the run is over.
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lose_life_until_game_over() {
        let mut metrics = Metrics::new(3);
        assert!(metrics.lose_life());
        assert!(metrics.lose_life());
        assert_eq!(metrics.lives, 1);
        assert!(!metrics.lose_life());
        assert_eq!(metrics.lives, 0);
        // Never wraps
        assert!(!metrics.lose_life());
        assert_eq!(metrics.lives, 0);
    }

    #[test]
    fn test_score_counts_up() {
        let mut metrics = Metrics::new(3);
        for _ in 0..5 {
            metrics.increment_score();
        }
        assert_eq!(metrics.score, 5);
        assert_eq!(metrics.lives, 3);
    }
}
