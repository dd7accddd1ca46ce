use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use janggi::{render, Game, MoveOutcome, Side, Square};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::recording::Recorder;

mod recording;

#[derive(Parser)]
struct Args {
    /// Who plays Blue (Blue moves first)
    #[arg(long, value_enum, default_value_t = Controller::Human)]
    blue: Controller,

    /// Who plays Red
    #[arg(long, value_enum, default_value_t = Controller::Human)]
    red: Controller,

    /// RNG seed for the random movers
    #[arg(long)]
    seed: Option<u64>,

    /// Stop the session after this many attempted moves
    #[arg(long, default_value_t = 500)]
    max_moves: usize,

    /// Record the game's moves as a JSON file into this directory
    #[arg(short, long)]
    record_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Controller {
    Human,
    Random,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = if let Some(dir_path) = args.record_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let mut game = Game::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut previous_turn_passed = false;

    for _ in 0..args.max_moves {
        println!("{}", render(game.board()));
        let to_move = game.to_move();
        let controller = match to_move {
            Side::Blue => args.blue,
            Side::Red => args.red,
        };
        let (from, to) = match controller {
            Controller::Human => match read_human_move(&mut lines, to_move)? {
                Some(chosen) => chosen,
                None => break, // end of input ends the session
            },
            Controller::Random => pick_random_move(&mut rng, &game)?,
        };

        match game.attempt_move(from, to) {
            Ok(outcome) => {
                if let Some(recorder) = &mut recorder {
                    recorder.store_move(to_move, from, to, outcome);
                }
                match outcome {
                    MoveOutcome::Moved => {
                        debug!(side = %to_move, %from, %to, "move committed");
                        previous_turn_passed = false;
                    }
                    MoveOutcome::Passed => {
                        info!(side = %to_move, "turn passed");
                        if previous_turn_passed {
                            // both sides passed in a row, nobody wants to play on
                            break;
                        }
                        previous_turn_passed = true;
                    }
                    MoveOutcome::MovedAndWon(winner) => {
                        println!("{}", render(game.board()));
                        println!("{} wins by checkmate", winner);
                        break;
                    }
                }
            }
            Err(err) => {
                info!(side = %to_move, "{}", err);
                if controller == Controller::Random {
                    anyhow::bail!("random mover produced an illegal move: {}", err);
                }
                eprintln!("{}", err);
            }
        }
    }

    if let Some(recorder) = &mut recorder {
        recorder.write_game_recording()?;
    }

    Ok(())
}

fn read_human_move(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    side: Side,
) -> anyhow::Result<Option<(Square, Square)>> {
    loop {
        print!("{}> ", side);
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line?;
        let mut tokens = line.split_whitespace();
        let (Some(from), Some(to), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            eprintln!("enter a move as two squares, e.g. \"a7 a6\" (repeat a square to pass)");
            continue;
        };
        match (from.parse::<Square>(), to.parse::<Square>()) {
            (Ok(from), Ok(to)) => return Ok(Some((from, to))),
            (Err(err), _) | (_, Err(err)) => eprintln!("{}", err),
        }
    }
}

/// A uniformly random legal move, or a pass on the general's square when
/// no safe move exists (a mated side never reaches this point, since the
/// mating move already decided the game).
fn pick_random_move(rng: &mut StdRng, game: &Game) -> anyhow::Result<(Square, Square)> {
    let moves = game.legal_moves();
    if let Some(&chosen) = moves.choose(rng) {
        return Ok(chosen);
    }
    let general = game
        .board()
        .find_general(game.to_move())
        .context("no general left to pass with")?;
    Ok((general, general))
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
