use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::{bail, Context, Result};
use clap::Parser;

use connect_four_engine::ai::{Agent, RandomAgent, SearchAgent};
use connect_four_engine::config::AppConfig;
use connect_four_engine::game::{BoardEvent, Player};
use connect_four_engine::search::{Board, MinimaxSearchEngine};
use connect_four_engine::session::GameSession;

/// Play Connect Four against a depth-limited search engine, or watch two
/// computer players.
#[derive(Parser)]
#[command(name = "connect-four", about = "Connect Four with an alpha-beta search engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Override search depth in plies
    #[arg(long)]
    depth: Option<u32>,

    /// Seed move shuffling and the random opponent
    #[arg(long)]
    seed: Option<u64>,

    /// Side to play from stdin: first or second
    #[arg(long)]
    human: Option<String>,

    /// Search algorithm: alphabeta or minimax
    #[arg(long, default_value = "alphabeta")]
    engine: String,

    /// Opponent of the engine when nobody plays from stdin: search or random
    #[arg(long, default_value = "search")]
    opponent: String,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log search statistics
    #[arg(short, long)]
    verbose: bool,
}

enum Seat {
    Human,
    Computer(Box<dyn Agent>),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(seed) = cli.seed {
        config.search.seed = Some(seed);
    }
    config.validate().context("invalid settings")?;

    let human = match cli.human.as_deref() {
        None => None,
        Some("first") => Some(Player::First),
        Some("second") => Some(Player::Second),
        Some(other) => bail!("unknown side '{}' (expected 'first' or 'second')", other),
    };

    let depth = config.search.depth;
    let mut seats = match human {
        Some(Player::First) => [Seat::Human, Seat::Computer(engine_agent(&cli.engine, depth)?)],
        Some(_) => [Seat::Computer(engine_agent(&cli.engine, depth)?), Seat::Human],
        None => [
            Seat::Computer(engine_agent(&cli.engine, depth)?),
            Seat::Computer(opponent_agent(&cli.opponent, &cli.engine, depth, config.search.seed)?),
        ],
    };

    let (tx, rx) = mpsc::channel();
    let board = config.build_board().context("building board")?.with_observer(tx);
    let mut session = GameSession::new(board);

    if let Some(player) = human {
        println!(
            "You are {player} ({}). Enter a column 1-{}, 'u' to take back, 'n' for a new game, 'q' to quit.",
            player.symbol(),
            session.board().width()
        );
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_board(&session);
        report_events(&rx);
        println!("{}", session.status());

        if session.is_over() && human.is_none() {
            break;
        }

        let player = session.board().next_player();
        let seat = if player == Player::Second { &mut seats[1] } else { &mut seats[0] };

        match seat {
            Seat::Computer(agent) if !session.is_over() => {
                session
                    .play_agent(agent.as_mut())
                    .with_context(|| format!("{} made an illegal move", agent.name()))?;
            }
            _ => {
                print!("> ");
                io::stdout().flush().context("flushing prompt")?;

                let mut line = String::new();
                if input.read_line(&mut line).context("reading move")? == 0 {
                    break;
                }
                match line.trim() {
                    "q" => break,
                    "u" => {
                        if session.take_back() {
                            println!("Took back the last two moves.");
                        } else {
                            println!("Nothing to take back.");
                        }
                    }
                    "n" => {
                        session.new_game();
                        println!("New game.");
                    }
                    text => match text.parse::<usize>() {
                        Ok(column) => {
                            if let Err(err) = session.play(column) {
                                println!("Illegal move: {err}");
                            }
                        }
                        Err(_) => println!("Enter a column number, 'u', 'n' or 'q'."),
                    },
                }
            }
        }
    }

    Ok(())
}

fn engine_agent(engine: &str, depth: u32) -> Result<Box<dyn Agent>> {
    match engine {
        "alphabeta" => Ok(Box::new(SearchAgent::new(depth))),
        "minimax" => Ok(Box::new(SearchAgent::with_engine(
            MinimaxSearchEngine::new(),
            depth,
        ))),
        other => bail!("unknown engine '{}' (expected 'alphabeta' or 'minimax')", other),
    }
}

fn opponent_agent(
    opponent: &str,
    engine: &str,
    depth: u32,
    seed: Option<u64>,
) -> Result<Box<dyn Agent>> {
    match opponent {
        "search" => engine_agent(engine, depth),
        "random" => Ok(Box::new(seed.map_or_else(RandomAgent::new, RandomAgent::seeded))),
        other => bail!("unknown opponent '{}' (expected 'search' or 'random')", other),
    }
}

fn print_board(session: &GameSession) {
    let board = session.board();
    println!();
    print!("{board}");
    let header: Vec<String> = (1..=board.width()).map(|c| (c % 10).to_string()).collect();
    println!("{} ", header.join(" "));
}

/// Drain board events and report anything a player should notice.
fn report_events(rx: &mpsc::Receiver<BoardEvent>) {
    for event in rx.try_iter() {
        match event {
            BoardEvent::CellChanged { row, column } => {
                log::debug!("cell ({row}, {column}) changed");
            }
            BoardEvent::GameEnded { winning_line } if !winning_line.is_empty() => {
                let cells: Vec<String> = winning_line
                    .iter()
                    .map(|coord| format!("({}, {})", coord.row, coord.column))
                    .collect();
                println!("Winning line: {}", cells.join(" "));
            }
            BoardEvent::GameEnded { .. } => {}
        }
    }
}
