//! 2D canvas rendering
//!
//! Colours and HUD layout live here so both the canvas adapter and tests
//! agree on them.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;

use crate::sim::Metrics;

pub const BALL_COLOR: &str = "#EF5E77";
pub const WALL_COLOR: &str = "#66ff00";
pub const HUD_COLOR: &str = "#fff";
pub const HUD_FONT: &str = "bold 16px Helvetica";

/// HUD text lines with their baseline positions
pub fn hud_lines(metrics: &Metrics) -> [(String, f64, f64); 2] {
    [
        (format!("Score: {}", metrics.score), 10.0, 20.0),
        (format!("Lives: {}", metrics.lives), 10.0, 45.0),
    ]
}

/// Text shown once a run ends. `best` is the leaderboard's top score after
/// this run was offered to it.
pub fn game_over_message(final_score: u32, rank: Option<usize>, best: Option<u32>) -> String {
    let mut message = format!("Game Over\nScore: {}", final_score);
    match (rank, best) {
        (Some(rank), _) => message.push_str(&format!("\nHigh score #{}", rank)),
        (None, Some(best)) => message.push_str(&format!("\nBest: {}", best)),
        (None, None) => {}
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hud_lines() {
        let metrics = Metrics { score: 4, lives: 2 };
        let [score, lives] = hud_lines(&metrics);
        assert_eq!(score, ("Score: 4".to_string(), 10.0, 20.0));
        assert_eq!(lives, ("Lives: 2".to_string(), 10.0, 45.0));
    }

    #[test]
    fn test_game_over_message() {
        assert_eq!(game_over_message(3, None, None), "Game Over\nScore: 3");
        assert_eq!(
            game_over_message(12, Some(1), Some(12)),
            "Game Over\nScore: 12\nHigh score #1"
        );
        assert_eq!(game_over_message(0, None, Some(40)), "Game Over\nScore: 0\nBest: 40");
    }
}
