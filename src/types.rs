use std::fmt;

use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Move, Role, Square};

use crate::difficulty::Difficulty;

pub type Score = i32;

/// Magnitude returned for a mated side. Dominates every material/positional term.
pub const SCORE_MATE: Score = 100_000;
/// Window bound for alpha-beta. Strictly larger than any reachable score.
pub const SCORE_INFINITY: Score = 1_000_000;
pub const CHECK_PENALTY: Score = 50;
pub const MOBILITY_WEIGHT: Score = 10;

/// Capacity of the undo stack of a working position
pub const MAX_PLY: usize = 64;
/// Upper bound accepted for an explicit `go depth N`
pub const MAX_SEARCH_DEPTH: u8 = 8;

/// Bot settings, edited through UCI `setoption`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BotConfig {
    pub difficulty: Difficulty,
    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            seed: None,
        }
    }
}

pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: Score,
    pub depth: u8,
    pub nodes: u64,
}

/// A move as handed to the caller: origin and destination only.
///
/// Displays as a four character coordinate pair (`e2e4`). Castling uses the
/// king's two-square step (`e1g1`). The promotion piece is not carried; callers
/// applying the move get a queen, see [`BotMove::to_move`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BotMove {
    pub from: Square,
    pub to: Square,
}

impl BotMove {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Drops the promotion piece of a rules-engine move.
    /// `None` only for drops and null moves, which standard chess never generates.
    pub fn from_move(mv: &Move) -> Option<Self> {
        match mv.to_uci(CastlingMode::Standard) {
            UciMove::Normal { from, to, .. } => Some(Self { from, to }),
            _ => None,
        }
    }

    /// Resolves against `pos`, promoting to a queen when the pawn reaches the last rank.
    pub fn to_move(&self, pos: &Chess) -> Option<Move> {
        [None, Some(Role::Queen)].into_iter().find_map(|promotion| {
            UciMove::Normal {
                from: self.from,
                to: self.to,
                promotion,
            }
            .to_move(pos)
            .ok()
        })
    }
}

impl fmt::Display for BotMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for BotMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BotMove({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::fen::Fen;
    use shakmaty::Position;

    fn chess(fen: &str) -> Chess {
        let fen: Fen = fen.parse().unwrap();
        fen.into_position(CastlingMode::Standard).unwrap()
    }

    #[test]
    fn test_display_is_four_chars() {
        let mv = BotMove::new(Square::E2, Square::E4);
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn test_castling_uses_king_destination() {
        let pos = chess("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let castle = pos
            .legal_moves()
            .into_iter()
            .find(|m| m.is_castle() && m.to() == Square::H1)
            .unwrap();
        let bot = BotMove::from_move(&castle).unwrap();
        assert_eq!(bot.to_string(), "e1g1");
        assert_eq!(bot.to_move(&pos), Some(castle));
    }

    #[test]
    fn test_promotion_defaults_to_queen() {
        let pos = chess("8/P7/8/8/8/8/8/K6k w - - 0 1");
        let mv = BotMove::new(Square::A7, Square::A8).to_move(&pos).unwrap();
        assert_eq!(mv.promotion(), Some(Role::Queen));
    }

    #[test]
    fn test_illegal_move_does_not_resolve() {
        let pos = Chess::default();
        assert!(BotMove::new(Square::E2, Square::E5).to_move(&pos).is_none());
    }

    #[test]
    fn test_default_config_is_medium_unseeded() {
        let config = BotConfig::default();
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.seed, None);
    }
}
