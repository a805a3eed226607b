use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shakmaty::{Color, Square};
use tracing::{debug, info};

use crate::difficulty::{choose_move, Difficulty};
use crate::error::BotError;
use crate::outcome::{GameOutcome, MatchResult};
use crate::position::WorkingPosition;
use crate::types::BotMove;

/// State of one game against the bot.
///
/// Each game owns its position and random source; nothing is shared between games.
pub struct BotGame<R = StdRng> {
    position: WorkingPosition,
    bot_color: Color,
    difficulty: Difficulty,
    rng: R,
}

impl BotGame<StdRng> {
    /// New game from the start position. `seed` fixes the bot's randomness.
    pub fn seeded(difficulty: Difficulty, bot_color: Color, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(difficulty, bot_color, rng)
    }
}

impl<R: Rng> BotGame<R> {
    pub fn new(difficulty: Difficulty, bot_color: Color, rng: R) -> Self {
        Self::with_position(WorkingPosition::default(), difficulty, bot_color, rng)
    }

    pub fn from_fen(fen: &str, difficulty: Difficulty, bot_color: Color, rng: R) -> Result<Self, BotError> {
        Ok(Self::with_position(WorkingPosition::from_fen(fen)?, difficulty, bot_color, rng))
    }

    fn with_position(position: WorkingPosition, difficulty: Difficulty, bot_color: Color, rng: R) -> Self {
        info!(%difficulty, name = difficulty.personality().name, ?bot_color, "new bot game");
        Self {
            position,
            bot_color,
            difficulty,
            rng,
        }
    }

    pub fn position(&self) -> &WorkingPosition {
        &self.position
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn bot_color(&self) -> Color {
        self.bot_color
    }

    pub fn player_color(&self) -> Color {
        !self.bot_color
    }

    pub fn is_bot_turn(&self) -> bool {
        self.position.turn() == self.bot_color && !self.position.is_game_over()
    }

    /// Let the bot move. `Ok(None)` when the game is already over.
    pub fn play_bot_move(&mut self) -> Result<Option<BotMove>, BotError> {
        if self.position.turn() != self.bot_color {
            return Err(BotError::IllegalMove("bot moved out of turn".to_string()));
        }
        if self.position.is_game_over() {
            return Ok(None);
        }

        let Some(bot_move) = choose_move(&mut self.position, self.difficulty, &mut self.rng)
            .and_then(|mv| BotMove::from_move(&mv))
        else {
            return Ok(None);
        };
        self.apply(bot_move)?;
        debug!(%bot_move, "bot played");
        Ok(Some(bot_move))
    }

    /// Apply the human's move. Pawns reaching the last rank become queens.
    pub fn play_user_move(&mut self, from: Square, to: Square) -> Result<(), BotError> {
        let user_move = BotMove::new(from, to);
        if self.position.turn() == self.bot_color || self.position.is_game_over() {
            return Err(BotError::IllegalMove(user_move.to_string()));
        }
        self.apply(user_move)
    }

    fn apply(&mut self, mv: BotMove) -> Result<(), BotError> {
        let resolved = mv
            .to_move(self.position.position())
            .ok_or_else(|| BotError::IllegalMove(mv.to_string()))?;
        self.position.commit(&resolved);
        Ok(())
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.position.is_checkmate() {
            Some(GameOutcome::Checkmate {
                winner: !self.position.turn(),
            })
        } else if self.position.is_game_over() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Result for the human player once the game is over
    pub fn player_result(&self) -> Option<MatchResult> {
        self.outcome()
            .map(|outcome| MatchResult::from_outcome(outcome, self.player_color()))
    }
}
