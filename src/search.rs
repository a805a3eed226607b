use shakmaty::{Color, Move};
use tracing::debug;

use crate::evaluation::evaluate_with_moves;
use crate::position::WorkingPosition;
use crate::types::{Score, SearchResult, SCORE_INFINITY};

/// Mutable search state shared across recursion
#[derive(Debug, Default)]
pub struct SearchState {
    pub nodes: u64,
    pub cutoffs: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.nodes = 0;
        self.cutoffs = 0;
    }
}

/// Minimax with alpha-beta pruning.
///
/// `maximizing` is the role of the node, flipped at every ply. Moves are tried in
/// generator order. `pos` is identical on return.
pub fn alpha_beta(
    pos: &mut WorkingPosition,
    state: &mut SearchState,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
) -> Score {
    state.nodes += 1;

    let moves = pos.legal_moves();
    if depth == 0 || pos.is_game_over_with(&moves) {
        return evaluate_with_moves(pos.position(), &moves);
    }

    if maximizing {
        let mut best = -SCORE_INFINITY;
        for mv in &moves {
            pos.push(mv);
            let value = alpha_beta(pos, state, depth - 1, alpha, beta, false);
            pos.pop();

            best = best.max(value);
            alpha = alpha.max(best);
            if beta <= alpha {
                state.cutoffs += 1;
                break;
            }
        }
        best
    } else {
        let mut best = SCORE_INFINITY;
        for mv in &moves {
            pos.push(mv);
            let value = alpha_beta(pos, state, depth - 1, alpha, beta, true);
            pos.pop();

            best = best.min(value);
            beta = beta.min(best);
            if beta <= alpha {
                state.cutoffs += 1;
                break;
            }
        }
        best
    }
}

/// Root move selection.
///
/// Every root move gets a full-window probe `depth - 1` plies deep. White keeps the
/// first strictly greater value, Black the first strictly lesser, so ties go to the
/// move generated first. `depth` must be at least 1.
pub fn find_best_move(pos: &mut WorkingPosition, state: &mut SearchState, depth: u8) -> SearchResult {
    let maximizing = pos.turn() == Color::White;
    let mut best: Option<(Move, Score)> = None;

    for mv in pos.legal_moves() {
        pos.push(&mv);
        let value = alpha_beta(
            pos,
            state,
            depth.saturating_sub(1),
            -SCORE_INFINITY,
            SCORE_INFINITY,
            !maximizing,
        );
        pos.pop();

        let improves = match best {
            None => true,
            Some((_, best_value)) if maximizing => value > best_value,
            Some((_, best_value)) => value < best_value,
        };
        if improves {
            best = Some((mv, value));
        }
    }

    let (best_move, score) = match best {
        Some((mv, value)) => (Some(mv), value),
        None => (None, 0),
    };

    debug!(depth, nodes = state.nodes, cutoffs = state.cutoffs, score, "search complete");

    SearchResult {
        best_move,
        score,
        depth,
        nodes: state.nodes,
    }
}

/// Run a fresh search at fixed depth
pub fn search(pos: &mut WorkingPosition, depth: u8) -> SearchResult {
    let mut state = SearchState::new();
    find_best_move(pos, &mut state, depth)
}


// Minimax with explicit roles: White maximizes, Black minimizes, and the static score is
// always from White's side. Alpha is the best the maximizer is sure of, beta the best the
// minimizer is sure of. Once beta <= alpha the remaining siblings cannot change the result

// Root moves are not pruned against each other. Each gets a full window so ties resolve to
// the first generated move, which makes the choice reproducible
