use shakmaty::{Chess, Color, MoveList, Position, Role, Square};

use crate::pst::{self, PIECE_VALUE, TABLES};
use crate::types::{Score, CHECK_PENALTY, MOBILITY_WEIGHT, SCORE_MATE};

/// Maps a Role to our PST index (0-5)
fn piece_index(role: Role) -> usize {
    match role {
        Role::Pawn => pst::PAWN,
        Role::Knight => pst::KNIGHT,
        Role::Bishop => pst::BISHOP,
        Role::Rook => pst::ROOK,
        Role::Queen => pst::QUEEN,
        Role::King => pst::KING,
    }
}

/// Table coordinates for a square. Tables are written from White's side with rank 8
/// in row 0, so Black mirrors the row.
fn table_coords(sq: Square, color: Color) -> (usize, usize) {
    let rank = sq.rank() as usize;
    let row = match color {
        Color::White => 7 - rank,
        Color::Black => rank,
    };
    (row, sq.file() as usize)
}

/// Material plus piece-square bonus, White minus Black
pub fn material_and_position(pos: &Chess) -> Score {
    let board = pos.board();
    let mut score: Score = 0;

    for sq in board.occupied() {
        if let Some(piece) = board.piece_at(sq) {
            let idx = piece_index(piece.role);
            let (row, col) = table_coords(sq, piece.color);
            let value = PIECE_VALUE[idx] + TABLES[idx][row][col];
            match piece.color {
                Color::White => score += value,
                Color::Black => score -= value,
            }
        }
    }

    score
}

/// Static evaluation, positive favors White
pub fn evaluate(pos: &Chess) -> Score {
    evaluate_with_moves(pos, &pos.legal_moves())
}

/// Static evaluation given the legal moves of the side to move.
///
/// Mate short-circuits to the sentinel. Check and mobility are signed by the side to
/// move: mobility counts *for* White when White moves and *against* Black when Black
/// moves, not for a fixed color.
pub fn evaluate_with_moves(pos: &Chess, moves: &MoveList) -> Score {
    let white_to_move = pos.turn() == Color::White;
    let in_check = pos.is_check();

    if in_check && moves.is_empty() {
        return if white_to_move { -SCORE_MATE } else { SCORE_MATE };
    }

    let mut score = material_and_position(pos);

    if in_check {
        score += if white_to_move { -CHECK_PENALTY } else { CHECK_PENALTY };
    }

    let mobility = moves.len() as Score * MOBILITY_WEIGHT;
    score += if white_to_move { mobility } else { -mobility };

    score
}
