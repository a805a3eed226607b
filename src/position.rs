use arrayvec::ArrayVec;
use shakmaty::fen::Fen;
use shakmaty::zobrist::{Zobrist64, ZobristHash};
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Move, MoveList, Position};

use crate::error::BotError;
use crate::types::MAX_PLY;

/// Half-move clock value at which the fifty-move rule ends the game
const FIFTY_MOVE_PLIES: u32 = 100;

/// Hash of everything that makes two positions "the same" for repetition
fn repetition_hash(pos: &Chess) -> u64 {
    pos.zobrist_hash::<Zobrist64>(EnPassantMode::Legal).0
}

/// A single mutable position with an explicit apply/undo stack.
///
/// Search pushes a move before entering a child and pops it before returning, so one
/// instance serves the whole tree. The rules engine has no unmake, so the undo token is
/// the pre-move state kept in a fixed-capacity stack.
///
/// Also keeps the zobrist hash of every position reached since it was loaded, for
/// threefold repetition.
#[derive(Clone, Debug)]
pub struct WorkingPosition {
    pos: Chess,
    undo: ArrayVec<Chess, MAX_PLY>,
    position_history: Vec<u64>,
}

impl Default for WorkingPosition {
    fn default() -> Self {
        Self::new(Chess::default())
    }
}

impl WorkingPosition {
    pub fn new(pos: Chess) -> Self {
        let hash = repetition_hash(&pos);
        Self {
            pos,
            undo: ArrayVec::new(),
            position_history: vec![hash],
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, BotError> {
        let fen: Fen = fen.trim().parse()?;
        let pos: Chess = fen.into_position(CastlingMode::Standard)?;
        Ok(Self::new(pos))
    }

    pub fn position(&self) -> &Chess {
        &self.pos
    }

    pub fn turn(&self) -> Color {
        self.pos.turn()
    }

    pub fn legal_moves(&self) -> MoveList {
        self.pos.legal_moves()
    }

    /// Number of moves currently pushed and not yet popped
    pub fn ply(&self) -> usize {
        self.undo.len()
    }

    /// Apply `mv` in place, remembering how to revert it.
    ///
    /// `mv` must be legal in the current position. Panics if more than `MAX_PLY`
    /// moves are outstanding.
    pub fn push(&mut self, mv: &Move) {
        self.undo.push(self.pos.clone());
        self.pos.play_unchecked(mv);
        self.position_history.push(repetition_hash(&self.pos));
    }

    /// Revert the most recent `push`. Returns false if nothing was pushed.
    pub fn pop(&mut self) -> bool {
        match self.undo.pop() {
            Some(prev) => {
                self.pos = prev;
                self.position_history.pop();
                true
            }
            None => false,
        }
    }

    /// Apply `mv` permanently. Only valid with no outstanding pushes.
    pub fn commit(&mut self, mv: &Move) {
        debug_assert!(self.undo.is_empty(), "commit during search");
        self.pos.play_unchecked(mv);
        self.position_history.push(repetition_hash(&self.pos));
    }

    pub fn is_check(&self) -> bool {
        self.pos.is_check()
    }

    pub fn is_checkmate(&self) -> bool {
        self.pos.is_checkmate()
    }

    pub fn is_stalemate(&self) -> bool {
        self.pos.is_stalemate()
    }

    pub fn is_insufficient_material(&self) -> bool {
        self.pos.is_insufficient_material()
    }

    pub fn is_fifty_moves(&self) -> bool {
        self.pos.halfmoves() >= FIFTY_MOVE_PLIES
    }

    /// Current position has occurred at least three times since loading
    pub fn is_threefold_repetition(&self) -> bool {
        match self.position_history.last() {
            Some(&current) => {
                self.position_history
                    .iter()
                    .filter(|&&hash| hash == current)
                    .count()
                    >= 3
            }
            None => false,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.is_stalemate() || self.is_draw_by_rule()
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over_with(&self.legal_moves())
    }

    /// Same as [`is_game_over`](Self::is_game_over) with the legal moves already generated.
    pub fn is_game_over_with(&self, moves: &MoveList) -> bool {
        moves.is_empty() || self.is_draw_by_rule()
    }

    /// Draws that do not depend on the move list
    fn is_draw_by_rule(&self) -> bool {
        self.is_insufficient_material() || self.is_fifty_moves() || self.is_threefold_repetition()
    }
}


// Undo without unmake: each push snapshots the whole position (a few bitboards plus clocks)
// into a fixed-capacity stack, and pop swaps the snapshot back

// Repetition compares zobrist hashes of placement, side to move, castling rights and a legal
// en passant square. Clocks are not part of the hash, so positions reached by different move
// orders still match
