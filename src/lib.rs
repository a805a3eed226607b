pub mod difficulty;
pub mod error;
pub mod evaluation;
pub mod outcome;
pub mod personality;
pub mod position;
pub mod pst;
pub mod search;
pub mod session;
pub mod types;
pub mod uci;

pub use difficulty::{choose_move, compute_move, Difficulty, DifficultyParams};
pub use error::BotError;
pub use outcome::{GameOutcome, MatchResult};
pub use position::WorkingPosition;
pub use session::BotGame;
pub use types::{BotConfig, BotMove, Score};
