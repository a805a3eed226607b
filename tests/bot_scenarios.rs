use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use shakmaty::Position;

use tierbot::{compute_move, BotMove, Difficulty, WorkingPosition};

const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";
/// Black to move, Ra1 is the only mate
const BLACK_MATES_IN_ONE: &str = "rk6/8/8/8/8/8/5PPP/6K1 b - - 0 1";
/// White to move, Ra8 is the only mate
const WHITE_MATES_IN_ONE: &str = "6k1/5ppp/8/8/8/8/8/RK6 w - - 0 1";

fn legal_bot_moves(fen: &str) -> HashSet<BotMove> {
    let pos = WorkingPosition::from_fen(fen).unwrap();
    pos.legal_moves()
        .iter()
        .filter_map(BotMove::from_move)
        .collect()
}

#[test]
fn test_hard_from_startpos_plays_a_first_move() {
    let legal = legal_bot_moves(STARTPOS);
    assert_eq!(legal.len(), 20);

    let mut rng = StdRng::seed_from_u64(0);
    let mv = compute_move(STARTPOS, Difficulty::Hard, &mut rng).unwrap().unwrap();
    assert!(legal.contains(&mv), "{} is not a legal first move", mv);
}

#[test]
fn test_hard_black_mate_in_one_is_repeatable() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..100 {
        let mv = compute_move(BLACK_MATES_IN_ONE, Difficulty::Hard, &mut rng).unwrap();
        assert_eq!(mv.map(|m| m.to_string()).as_deref(), Some("a8a1"));
    }
}

#[test]
fn test_hard_white_mate_in_one() {
    let mut rng = StdRng::seed_from_u64(17);
    let mv = compute_move(WHITE_MATES_IN_ONE, Difficulty::Hard, &mut rng).unwrap();
    assert_eq!(mv.map(|m| m.to_string()).as_deref(), Some("a1a8"));
}

#[test]
fn test_easy_mixes_moves() {
    let legal = legal_bot_moves(MIDDLEGAME);
    assert!(legal.len() >= 2);

    let mut rng = StdRng::seed_from_u64(2024);
    let mut seen = HashSet::new();
    for _ in 0..1000 {
        let mv = compute_move(MIDDLEGAME, Difficulty::Easy, &mut rng).unwrap().unwrap();
        assert!(legal.contains(&mv), "{} is not legal", mv);
        seen.insert(mv);
    }
    assert!(seen.len() > 1, "easy tier always played the same move");
}

#[test]
fn test_moves_are_always_legal() {
    let fens = [
        STARTPOS,
        MIDDLEGAME,
        "r3k2r/8/8/3pP3/8/8/8/R3K2R w KQkq d6 0 2",
        "8/P7/8/8/8/8/8/K6k w - - 0 1",
        "4k3/8/8/8/8/8/8/r3K3 w - - 0 1",
    ];
    let mut rng = StdRng::seed_from_u64(99);
    for fen in fens {
        let legal = legal_bot_moves(fen);
        for tier in [Difficulty::Easy, Difficulty::Medium] {
            for _ in 0..10 {
                let mv = compute_move(fen, tier, &mut rng).unwrap().unwrap();
                assert!(legal.contains(&mv), "{} at {} in {}", mv, tier, fen);
            }
        }
    }
}

#[test]
fn test_none_only_without_legal_moves() {
    let mut rng = StdRng::seed_from_u64(5);
    let cases = [
        ("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3", true),
        ("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1", true),
        (STARTPOS, false),
        ("8/8/4k3/8/8/3K4/8/8 w - - 0 1", false),
    ];
    for (fen, terminal) in cases {
        let pos = WorkingPosition::from_fen(fen).unwrap();
        assert_eq!(pos.position().legal_moves().is_empty(), terminal);
        for tier in Difficulty::ALL {
            let mv = compute_move(fen, tier, &mut rng).unwrap();
            assert_eq!(mv.is_none(), terminal, "{} at {}", fen, tier);
        }
    }
}
