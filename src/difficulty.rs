use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use shakmaty::Move;
use tracing::debug;

use crate::error::BotError;
use crate::position::WorkingPosition;
use crate::search::{find_best_move, SearchState};
use crate::types::BotMove;

/// Above this many root moves "hard" searches one ply less
const HARD_WIDE_ROOT: usize = 20;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Search depth and chance of playing a uniformly random move
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifficultyParams {
    pub depth: u8,
    pub random_probability: f64,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Parameters for this tier given the number of legal moves at the root
    pub fn params(self, root_moves: usize) -> DifficultyParams {
        match self {
            Difficulty::Easy => DifficultyParams {
                depth: 1,
                random_probability: 0.60,
            },
            Difficulty::Medium => DifficultyParams {
                depth: 3,
                random_probability: 0.15,
            },
            Difficulty::Hard => DifficultyParams {
                depth: if root_moves > HARD_WIDE_ROOT { 4 } else { 5 },
                random_probability: 0.0,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(BotError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Pick a move for the side to move at `difficulty`.
///
/// With the tier's probability a uniformly random legal move is returned, otherwise the
/// searched best move. `None` only when there is no legal move. Tiers with zero
/// probability never draw from `rng`.
pub fn choose_move<R: Rng + ?Sized>(
    pos: &mut WorkingPosition,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Move> {
    let moves = pos.legal_moves();
    if moves.is_empty() {
        return None;
    }

    let params = difficulty.params(moves.len());

    if params.random_probability > 0.0 && rng.gen_bool(params.random_probability) {
        let mv = moves.choose(rng).cloned();
        debug!(%difficulty, legal = moves.len(), "playing random move");
        return mv;
    }

    let mut state = SearchState::new();
    find_best_move(pos, &mut state, params.depth).best_move
}

/// Boundary entry point: FEN in, four-character move out.
///
/// `Ok(None)` when the position has no legal moves.
pub fn compute_move<R: Rng + ?Sized>(
    fen: &str,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Option<BotMove>, BotError> {
    let mut pos = WorkingPosition::from_fen(fen)?;
    Ok(choose_move(&mut pos, difficulty, rng).and_then(|mv| BotMove::from_move(&mv)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_tier_table() {
        assert_eq!(
            Difficulty::Easy.params(30),
            DifficultyParams { depth: 1, random_probability: 0.60 }
        );
        assert_eq!(
            Difficulty::Medium.params(30),
            DifficultyParams { depth: 3, random_probability: 0.15 }
        );
        assert_eq!(Difficulty::Hard.params(20).depth, 5);
        assert_eq!(Difficulty::Hard.params(21).depth, 4);
        assert_eq!(Difficulty::Hard.params(21).random_probability, 0.0);
    }

    #[test]
    fn test_parse_and_display() {
        for tier in Difficulty::ALL {
            assert_eq!(tier.to_string().parse::<Difficulty>().unwrap(), tier);
        }
        assert_eq!(" HARD ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!(matches!(
            "expert".parse::<Difficulty>(),
            Err(BotError::UnknownDifficulty(_))
        ));
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }

    #[test]
    fn test_no_moves_gives_none() {
        let mut rng = StdRng::seed_from_u64(1);
        let mated = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";
        let stalemate = "k7/8/1Q6/8/8/8/8/1K6 b - - 0 1";
        for tier in Difficulty::ALL {
            assert_eq!(compute_move(mated, tier, &mut rng).unwrap(), None);
            assert_eq!(compute_move(stalemate, tier, &mut rng).unwrap(), None);
        }
    }

    #[test]
    fn test_invalid_fen_is_an_error() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(compute_move("garbage", Difficulty::Easy, &mut rng).is_err());
    }

    #[test]
    fn test_same_seed_same_moves() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(
                compute_move(STARTPOS, Difficulty::Easy, &mut a).unwrap(),
                compute_move(STARTPOS, Difficulty::Easy, &mut b).unwrap()
            );
        }
    }

    #[test]
    fn test_hard_never_draws_from_rng() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut untouched = rng.clone();
        let mut pos = WorkingPosition::from_fen("6k1/5ppp/8/8/8/8/8/RK6 w - - 0 1").unwrap();
        let mv = choose_move(&mut pos, Difficulty::Hard, &mut rng);
        assert!(mv.is_some());
        assert_eq!(rng.gen_range(0..u64::MAX), untouched.gen_range(0..u64::MAX));
    }

    #[test]
    fn test_medium_returns_legal_move() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut pos = WorkingPosition::from_fen(
            "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
        )
        .unwrap();
        let legal = pos.legal_moves();
        let mv = choose_move(&mut pos, Difficulty::Medium, &mut rng).unwrap();
        assert!(legal.contains(&mv));
        assert_eq!(pos.ply(), 0);
    }
}
