use rand::seq::SliceRandom;
use rand::Rng;

use crate::difficulty::Difficulty;

/// Display persona attached to a difficulty tier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BotPersonality {
    pub name: &'static str,
    pub difficulty: Difficulty,
    pub title: &'static str,
    pub avatar: char,
    pub description: &'static str,
    pub greeting: &'static str,
    /// Said when the bot loses
    pub win_quote: &'static str,
    /// Said when the bot wins
    pub lose_quote: &'static str,
}

const EASY: BotPersonality = BotPersonality {
    name: "Rookie Rook",
    difficulty: Difficulty::Easy,
    title: "The Beginner",
    avatar: '♜',
    description: "Just learning the basics, makes occasional mistakes",
    greeting: "Hey! Ready for your first game?",
    win_quote: "Wow, you got me! Great game!",
    lose_quote: "Oops, I made some lucky moves there!",
};

const MEDIUM: BotPersonality = BotPersonality {
    name: "Knight Nova",
    difficulty: Difficulty::Medium,
    title: "The Strategist",
    avatar: '♞',
    description: "Thinks ahead and plays solid chess",
    greeting: "Let's have a good strategic battle!",
    win_quote: "Well played! You're getting better!",
    lose_quote: "My calculations paid off this time!",
};

const HARD: BotPersonality = BotPersonality {
    name: "Grandmaster Zeus",
    difficulty: Difficulty::Hard,
    title: "The Champion",
    avatar: '♚',
    description: "Calculates deeply and rarely makes mistakes",
    greeting: "Prepare yourself for a real challenge!",
    win_quote: "Incredible! You have mastered the game!",
    lose_quote: "As expected. Better luck next time!",
};

const EASY_NAMES: [&str; 4] = ["Pawn Pioneer", "Castle Cadet", "Bishop Buddy", "Newbie Knight"];
const MEDIUM_NAMES: [&str; 4] = ["Strategic Storm", "Tactical Titan", "Chess Commander", "Board Master"];
const HARD_NAMES: [&str; 4] = ["Magnus Mind", "Checkmate King", "Chess Overlord", "Immortal Tactician"];

impl Difficulty {
    pub fn personality(self) -> &'static BotPersonality {
        match self {
            Difficulty::Easy => &EASY,
            Difficulty::Medium => &MEDIUM,
            Difficulty::Hard => &HARD,
        }
    }

    pub fn alternative_names(self) -> &'static [&'static str] {
        match self {
            Difficulty::Easy => &EASY_NAMES,
            Difficulty::Medium => &MEDIUM_NAMES,
            Difficulty::Hard => &HARD_NAMES,
        }
    }
}

/// One of the tier's alternative names, chosen uniformly
pub fn random_name<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> &'static str {
    difficulty
        .alternative_names()
        .choose(rng)
        .copied()
        .unwrap_or(difficulty.personality().name)
}
