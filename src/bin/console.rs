//! Ultimate Tic-Tac-Toe in the terminal
//!
//! Usage: `uttt-console [player-o] [player-x] [depth]` where a player is
//! `1`/`human`, `2`/`minimax` or `3`/`random`. Sides not given on the
//! command line are asked for interactively.

use std::io::{self, BufRead, Write};

use uttt::board::Coord;
use uttt::eval::evaluate;
use uttt::{AIEngine, Error, Game, GameConfig, Move, Outcome, Player, PlayerKind};

type BoxError = Box<dyn std::error::Error>;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), BoxError> {
    let (mut config, given) = GameConfig::from_args(std::env::args().skip(1))?;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("\n===========================================");
    println!("         ULTIMATE TIC TAC TOE");
    println!("===========================================\n");

    if !given[0] {
        config.player_o = ask_player_kind(&mut input, Player::O)?;
    }
    if !given[1] {
        config.player_x = ask_player_kind(&mut input, Player::X)?;
    }

    let mut engine = AIEngine::with_config(config.engine);
    let mut rng = rand::thread_rng();
    let mut game = Game::new();

    println!("\n{}\n", game.board());

    while !game.is_over() {
        let player = game.to_move();
        let kind = match player {
            Player::O => config.player_o,
            Player::X => config.player_x,
        };

        let mv = match kind {
            PlayerKind::Human => {
                let mv = read_human_move(&mut input, &game)?;
                game.play(mv)?;
                mv
            }
            PlayerKind::Minimax => {
                let result = game.play_engine(&mut engine)?;
                println!(
                    "{} (minimax) searched {} nodes ({} leaves) in {}ms",
                    player, result.nodes, result.leaves, result.time_ms
                );
                result.best_move
            }
            PlayerKind::Random => game.play_random(&mut rng)?,
        };

        println!("\n{player} played {mv}");
        println!("{}", game.board());
        println!(
            "Heuristic (higher is better for O, lower is better for X): {}\n",
            evaluate(game.board())
        );
    }

    match game.outcome() {
        Some(Outcome::Winner(winner)) => println!("{winner} won!"),
        Some(Outcome::Draw) | None => println!("Draw!"),
    }
    Ok(())
}

fn prompt(input: &mut impl BufRead, text: &str) -> Result<String, BoxError> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err("input closed".into());
    }
    Ok(line.trim().to_string())
}

fn ask_player_kind(input: &mut impl BufRead, player: Player) -> Result<PlayerKind, BoxError> {
    loop {
        let answer = prompt(
            input,
            &format!("Player {player}? (1 for human, 2 for minimax, 3 for random) "),
        )?;
        match answer.parse() {
            Ok(kind) => return Ok(kind),
            Err(e) => println!("{e}"),
        }
    }
}

/// Parse "row col" (or "row,col") into a coordinate
fn parse_coord(text: &str) -> Result<Coord, Error> {
    let parts: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();
    let [row, col] = parts[..] else {
        return Err(Error::ParseInput {
            input: text.to_string(),
            reason: "expected two numbers".to_string(),
        });
    };
    let number = |s: &str| {
        s.parse::<usize>().map_err(|e| Error::ParseInput {
            input: text.to_string(),
            reason: e.to_string(),
        })
    };
    Coord::new(number(row)?, number(col)?)
}

/// Ask until the human enters a legal move
fn read_human_move(input: &mut impl BufRead, game: &Game) -> Result<Move, BoxError> {
    let board = game.board();
    let player = game.to_move();

    loop {
        let target = match board.active_board() {
            Some(target) => target,
            None => {
                let text = prompt(
                    input,
                    &format!("Player {player}: row then column of the big grid (0-2) "),
                )?;
                match parse_coord(&text) {
                    Ok(target) => target,
                    Err(e) => {
                        println!("Incorrect input! {e}");
                        continue;
                    }
                }
            }
        };

        let text = prompt(
            input,
            &format!("Player {player}: row then column in the small grid {target} (0-2) "),
        )?;
        let cell = match parse_coord(&text) {
            Ok(cell) => cell,
            Err(e) => {
                println!("Incorrect input! {e}");
                continue;
            }
        };

        let mv = Move::from_parts(target, cell);
        if board.is_legal(mv) {
            return Ok(mv);
        }
        println!("Incorrect input! {mv} is not a legal move");
    }
}
