use shakmaty::fen::ParseFenError;
use shakmaty::{Chess, PositionError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("invalid FEN: {0}")]
    InvalidFen(#[from] ParseFenError),

    #[error("illegal position: {0}")]
    IllegalPosition(#[from] PositionError<Chess>),

    #[error("unknown difficulty `{0}` (expected easy, medium or hard)")]
    UnknownDifficulty(String),

    #[error("illegal move {0}")]
    IllegalMove(String),
}
