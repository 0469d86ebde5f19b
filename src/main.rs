use std::cell::RefCell;
use std::io::{self, StdinLock};
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use connect_four_search::ai::{self, Agent, EvaluatorKind, HumanAgent, RandomAgent};
use connect_four_search::config::{AppConfig, PlayerKind};
use connect_four_search::game::{GameOutcome, GameState, Player};
use connect_four_search::play::play_game;
use connect_four_search::search::{Algorithm, Depth, NodeCounter, Search};

/// Connect Four engine: minimax and alpha-beta search.
#[derive(Parser)]
#[command(name = "connect-four", about = "Connect Four minimax / alpha-beta engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pick a move for a position given as a string of column digits
    Search {
        /// Moves played so far, e.g. "3342"
        #[arg(long, default_value = "")]
        moves: String,

        #[arg(long, default_value_t = 4)]
        depth: Depth,

        #[arg(long, value_enum, default_value_t = AlgorithmArg::AlphaBeta)]
        algorithm: AlgorithmArg,

        #[arg(long, value_enum, default_value_t = EvaluatorArg::Basic)]
        evaluator: EvaluatorArg,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play a game on the terminal
    Play {
        /// Path to TOML configuration file
        #[arg(long, default_value = "config.toml")]
        config: PathBuf,
    },

    /// Run minimax and alpha-beta on the same position and compare
    Compare {
        #[arg(long, default_value = "")]
        moves: String,

        #[arg(long, default_value_t = 4)]
        depth: Depth,

        #[arg(long, value_enum, default_value_t = EvaluatorArg::Basic)]
        evaluator: EvaluatorArg,
    },

    /// Print a configuration file with every default filled in
    DefaultConfig,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum AlgorithmArg {
    Minimax,
    AlphaBeta,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Minimax => Algorithm::Minimax,
            AlgorithmArg::AlphaBeta => Algorithm::AlphaBeta,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum EvaluatorArg {
    Basic,
    Threat,
    Window,
}

impl From<EvaluatorArg> for EvaluatorKind {
    fn from(arg: EvaluatorArg) -> Self {
        match arg {
            EvaluatorArg::Basic => EvaluatorKind::Basic,
            EvaluatorArg::Threat => EvaluatorKind::Threat,
            EvaluatorArg::Window => EvaluatorKind::Window,
        }
    }
}

/// One stdin lock shared by every human player in the game.
type SharedStdin = Rc<RefCell<StdinLock<'static>>>;

#[derive(serde::Serialize)]
struct SearchReport {
    algorithm: &'static str,
    evaluator: &'static str,
    depth: Depth,
    column: Option<usize>,
    value: i32,
    nodes_expanded: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Search {
            moves,
            depth,
            algorithm,
            evaluator,
            json,
        } => {
            let state = parse_moves(&moves)?;
            let report = run_search(&state, algorithm.into(), evaluator.into(), depth);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{state}");
                print_report(&report);
            }
            Ok(())
        }
        Command::Compare {
            moves,
            depth,
            evaluator,
        } => {
            let state = parse_moves(&moves)?;
            print!("{state}");
            let minimax = run_search(&state, Algorithm::Minimax, evaluator.into(), depth);
            let alpha_beta = run_search(&state, Algorithm::AlphaBeta, evaluator.into(), depth);
            print_report(&minimax);
            print_report(&alpha_beta);
            if minimax.column != alpha_beta.column {
                bail!("searches disagree: {:?} vs {:?}", minimax.column, alpha_beta.column);
            }
            Ok(())
        }
        Command::Play { config } => {
            let config = AppConfig::load_or_default(&config)
                .with_context(|| format!("loading config from {}", config.display()))?;
            run_play(&config)
        }
        Command::DefaultConfig => {
            print!("{}", AppConfig::default_toml());
            Ok(())
        }
    }
}

fn parse_moves(moves: &str) -> Result<GameState> {
    let columns = moves
        .chars()
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as usize)
                .with_context(|| format!("'{c}' is not a column digit"))
        })
        .collect::<Result<Vec<_>>>()?;
    GameState::from_moves(&columns).with_context(|| format!("replaying moves \"{moves}\""))
}

fn run_search(state: &GameState, algorithm: Algorithm, evaluator: EvaluatorKind, depth: Depth) -> SearchReport {
    let search: Search = Search::default();
    let counter = NodeCounter::new();
    let outcome = search.run(algorithm, state, depth, &evaluator, &counter);
    SearchReport {
        algorithm: algorithm.name(),
        evaluator: evaluator.name(),
        depth,
        column: outcome.column,
        value: outcome.value,
        nodes_expanded: counter.get(),
    }
}

fn print_report(report: &SearchReport) {
    let column = report
        .column
        .map_or_else(|| "none".to_string(), |c| c.to_string());
    println!(
        "{:<10} depth {:<2} column {:<4} value {:<8} nodes {}",
        report.algorithm, report.depth, column, report.value, report.nodes_expanded
    );
}

fn build_agent(kind: PlayerKind, player: Player, config: &AppConfig, stdin: &SharedStdin) -> Box<dyn Agent> {
    match kind {
        PlayerKind::Human => Box::new(HumanAgent::shared(player.name(), Rc::clone(stdin), io::stdout())),
        PlayerKind::Engine => ai::engine_from_config(&config.search),
        PlayerKind::Random => match config.game.seed {
            Some(seed) => Box::new(RandomAgent::with_seed(seed ^ player.id() as u64)),
            None => Box::new(RandomAgent::new()),
        },
    }
}

fn run_play(config: &AppConfig) -> Result<()> {
    let stdin: SharedStdin = Rc::new(RefCell::new(io::stdin().lock()));
    let mut red = build_agent(config.game.red, Player::Red, config, &stdin);
    let mut yellow = build_agent(config.game.yellow, Player::Yellow, config, &stdin);

    let record = play_game(red.as_mut(), yellow.as_mut(), GameState::initial())?;
    print!("{}", record.final_state);
    match record.outcome {
        GameOutcome::Winner(p) => println!("{p} wins in {} moves", record.moves.len()),
        GameOutcome::Draw => println!("Draw in {} moves", record.moves.len()),
    }
    println!(
        "Nodes expanded: {} {}, {} {}",
        red.name(),
        red.nodes_expanded(),
        yellow.name(),
        yellow.nodes_expanded()
    );
    Ok(())
}
