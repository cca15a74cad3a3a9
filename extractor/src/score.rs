use std::fmt;
use std::str::FromStr;

use crate::record::Side;

/// Scores within this many centipawns of zero are labelled a draw.
pub const DRAW_BAND: i32 = 50;

/// Coarse game outcome label from white's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Loss,
    Draw,
    Win,
}

impl GameResult {
    pub fn from_cp(cp: i32) -> Self {
        if cp > DRAW_BAND {
            GameResult::Win
        } else if cp < -DRAW_BAND {
            GameResult::Loss
        } else {
            GameResult::Draw
        }
    }

}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameResult::Loss => "0.0",
            GameResult::Draw => "0.5",
            GameResult::Win => "1.0",
        };
        f.write_str(label)
    }
}

impl FromStr for GameResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0.0" | "0" => Ok(GameResult::Loss),
            "0.5" => Ok(GameResult::Draw),
            "1.0" | "1" => Ok(GameResult::Win),
            _ => Err(format!("Invalid result: {}", s)),
        }
    }
}

/// Maps a mate-in-N score onto the largest centipawn score still below `max_cp`.
/// Positive `mate` favours the side to move, so the sign flips when black is to move.
pub fn mate_to_cp(mate: i32, side_to_move: Side, max_cp: i32) -> i32 {
    let magnitude = max_cp - 1;
    let cp = if mate > 0 { magnitude } else { -magnitude };

    match side_to_move {
        Side::White => cp,
        Side::Black => -cp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_from_cp_boundaries() {
        assert_eq!(GameResult::from_cp(51), GameResult::Win);
        assert_eq!(GameResult::from_cp(50), GameResult::Draw);
        assert_eq!(GameResult::from_cp(0), GameResult::Draw);
        assert_eq!(GameResult::from_cp(-50), GameResult::Draw);
        assert_eq!(GameResult::from_cp(-51), GameResult::Loss);
    }

    #[test]
    fn test_result_display() {
        assert_eq!(GameResult::from_cp(75).to_string(), "1.0");
        assert_eq!(GameResult::from_cp(-20).to_string(), "0.5");
        assert_eq!(GameResult::from_cp(-300).to_string(), "0.0");
    }

    #[test]
    fn test_result_from_str() {
        assert_eq!("0.5".parse::<GameResult>(), Ok(GameResult::Draw));
        assert_eq!("1".parse::<GameResult>(), Ok(GameResult::Win));
        assert!("0.7".parse::<GameResult>().is_err());
    }

    #[test]
    fn test_mate_to_cp_white_to_move() {
        assert_eq!(mate_to_cp(3, Side::White, 1500), 1499);
        assert_eq!(mate_to_cp(-2, Side::White, 1500), -1499);
    }

    #[test]
    fn test_mate_to_cp_black_to_move() {
        assert_eq!(mate_to_cp(3, Side::Black, 1500), -1499);
        assert_eq!(mate_to_cp(-1, Side::Black, 1500), 1499);
    }

    #[test]
    fn test_mate_to_cp_stays_below_cap() {
        for mate in [-10, -1, 1, 10] {
            for side in [Side::White, Side::Black] {
                assert!(mate_to_cp(mate, side, 1500).abs() < 1500);
            }
        }
    }
}
