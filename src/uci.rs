use std::io::{self, BufRead};

use rand::rngs::StdRng;
use rand::SeedableRng;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Move, Position};
use tracing::{debug, warn};

use crate::difficulty::{choose_move, Difficulty};
use crate::evaluation::evaluate;
use crate::position::WorkingPosition;
use crate::search::{find_best_move, SearchState};
use crate::types::{BotConfig, BotMove, MAX_SEARCH_DEPTH};

pub fn run() {
    let stdin = io::stdin();

    let mut position = WorkingPosition::default();
    let mut config = BotConfig::default();
    let mut rng = make_rng(&config);
    let mut search_state = SearchState::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        match tokens[0] {
            "uci" => {
                let persona = config.difficulty.personality();
                println!("id name tierbot ({})", persona.name);
                println!("id author tierbot");
                println!("option name Difficulty type combo default medium var easy var medium var hard");
                println!("option name Seed type string default <empty>");
                println!("uciok");
            }
            "isready" => {
                println!("readyok");
            }
            "ucinewgame" => {
                position = WorkingPosition::default();
                rng = make_rng(&config);
            }
            "position" => {
                parse_position(&tokens, &mut position);
            }
            "go" => {
                let go_params = parse_go(&tokens);
                let best = match go_params.depth {
                    Some(depth) => {
                        search_state.reset();
                        let result = find_best_move(
                            &mut position,
                            &mut search_state,
                            depth.clamp(1, MAX_SEARCH_DEPTH),
                        );
                        println!(
                            "info depth {} score cp {} nodes {}",
                            result.depth, result.score, result.nodes
                        );
                        result.best_move
                    }
                    None => choose_move(&mut position, config.difficulty, &mut rng),
                };
                println!("bestmove {}", format_bestmove(position.position(), best.as_ref()));
            }
            "setoption" => {
                if parse_setoption(&tokens, &mut config) {
                    rng = make_rng(&config);
                }
            }
            "quit" => {
                break;
            }
            "d" | "print" => {
                let pos = position.position();
                println!(
                    "turn {:?} legal {} eval {}",
                    position.turn(),
                    position.legal_moves().len(),
                    evaluate(pos)
                );
                println!("{:?}", pos.board());
            }
            other => {
                debug!(command = other, "ignoring unknown command");
            }
        }
    }
}

fn make_rng(config: &BotConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// `bestmove` payload: coordinates with the queen promotion spelled out, `0000` if none.
fn format_bestmove(pos: &Chess, best: Option<&Move>) -> String {
    best.and_then(BotMove::from_move)
        .and_then(|bot_move| bot_move.to_move(pos))
        .map(|mv| mv.to_uci(CastlingMode::Standard).to_string())
        .unwrap_or_else(|| "0000".to_string())
}

/// Parsed `go` command parameters. Clock fields are accepted and ignored.
struct GoParams {
    depth: Option<u8>,
}

fn parse_go(tokens: &[&str]) -> GoParams {
    let mut params = GoParams { depth: None };
    let mut i = 1;

    while i < tokens.len() {
        if tokens[i] == "depth" {
            i += 1;
            if i < tokens.len() {
                params.depth = tokens[i].parse().ok();
            }
        }
        i += 1;
    }

    params
}

fn parse_position(tokens: &[&str], position: &mut WorkingPosition) {
    if tokens.len() < 2 {
        return;
    }

    let mut idx = 1;

    if tokens[idx] == "startpos" {
        *position = WorkingPosition::default();
        idx += 1;
    } else if tokens[idx] == "fen" {
        idx += 1;
        // Collect FEN fields up to "moves" keyword or end of tokens
        let mut fen_parts: Vec<&str> = Vec::new();
        while idx < tokens.len() && tokens[idx] != "moves" && fen_parts.len() < 6 {
            fen_parts.push(tokens[idx]);
            idx += 1;
        }
        match WorkingPosition::from_fen(&fen_parts.join(" ")) {
            Ok(p) => *position = p,
            Err(err) => {
                warn!(%err, "rejected position");
                return;
            }
        }
    } else {
        return;
    }

    if idx < tokens.len() && tokens[idx] == "moves" {
        idx += 1;
        for &move_str in &tokens[idx..] {
            match parse_uci_move(position.position(), move_str) {
                Some(mv) => position.commit(&mv),
                None => {
                    warn!(mv = move_str, "illegal move in position command");
                    break;
                }
            }
        }
    }
}

fn parse_uci_move(pos: &Chess, move_str: &str) -> Option<Move> {
    let uci: UciMove = move_str.parse().ok()?;
    uci.to_move(pos).ok()
}

/// Returns true when the option changes the random source
fn parse_setoption(tokens: &[&str], config: &mut BotConfig) -> bool {
    let name_idx = tokens.iter().position(|&t| t == "name");
    let value_idx = tokens.iter().position(|&t| t == "value");

    let (Some(ni), Some(vi)) = (name_idx, value_idx) else {
        return false;
    };
    if vi <= ni {
        return false;
    }

    let name: String = tokens[ni + 1..vi].join(" ");
    let value: String = tokens[vi + 1..].join(" ");

    match name.to_lowercase().as_str() {
        "difficulty" => {
            match value.parse::<Difficulty>() {
                Ok(difficulty) => config.difficulty = difficulty,
                Err(err) => warn!(%err, "ignoring setoption"),
            }
            false
        }
        "seed" => {
            config.seed = if value.is_empty() || value == "<empty>" {
                None
            } else {
                match value.parse::<u64>() {
                    Ok(seed) => Some(seed),
                    Err(_) => {
                        warn!(value = %value, "seed must be an unsigned integer");
                        return false;
                    }
                }
            };
            true
        }
        _ => false,
    }
}
