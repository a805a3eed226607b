use shakmaty::Color;

/// How a finished game ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Draw,
}

/// A finished game from one player's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchResult {
    Win,
    Loss,
    Draw,
}

impl MatchResult {
    /// Rating points awarded for this result
    pub fn points_change(self) -> i32 {
        match self {
            MatchResult::Win => 20,
            MatchResult::Loss => -10,
            MatchResult::Draw => 0,
        }
    }

    pub fn from_outcome(outcome: GameOutcome, perspective: Color) -> Self {
        match outcome {
            GameOutcome::Checkmate { winner } if winner == perspective => MatchResult::Win,
            GameOutcome::Checkmate { .. } => MatchResult::Loss,
            GameOutcome::Draw => MatchResult::Draw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_change() {
        assert_eq!(MatchResult::Win.points_change(), 20);
        assert_eq!(MatchResult::Loss.points_change(), -10);
        assert_eq!(MatchResult::Draw.points_change(), 0);
    }

    #[test]
    fn test_from_outcome() {
        let white_wins = GameOutcome::Checkmate { winner: Color::White };
        assert_eq!(MatchResult::from_outcome(white_wins, Color::White), MatchResult::Win);
        assert_eq!(MatchResult::from_outcome(white_wins, Color::Black), MatchResult::Loss);
        assert_eq!(MatchResult::from_outcome(GameOutcome::Draw, Color::Black), MatchResult::Draw);
    }
}
