use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn};
use numbers_round::solver::constants::DEFAULT_MAX_CARDS;
use numbers_round::{
    DrawConfig, ExpressionSolver, OperatorSet, Solution, SolverConfig, draw, parse_cards,
    run_trials,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// numbers-round - Reach a target number from a hand of cards
#[derive(Parser, Debug)]
#[command(name = "numbers-round")]
#[command(about = "Find the closest value to a target using + - * / over a hand of cards")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Operators allowed in solutions
    #[arg(long, global = true, default_value = "+-*/")]
    pub ops: String,

    /// Search on a single thread
    #[arg(long, global = true)]
    pub sequential: bool,

    /// Refuse hands larger than this. Each extra card multiplies the worst
    /// case search time by roughly a hundred: seven cards take seconds, eight
    /// can take many minutes
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_CARDS)]
    pub max_cards: usize,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, global = true, default_value = "warn")]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve a given target and hand
    Solve {
        /// Target value
        target: u64,
        /// Cards, separated by spaces or commas
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Draw a random game and solve it
    Draw {
        /// Number of large cards (25, 50, 75, 100) in the hand
        #[arg(long)]
        large: Option<usize>,
        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Solve many random games and report how often the target is hit
    Stats {
        /// Number of games to play
        #[arg(short, long, default_value_t = 1000)]
        trials: usize,
        /// Number of large cards in every hand
        #[arg(long)]
        large: Option<usize>,
        /// Seed for reproducible draws
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub command: Command,
    pub solver: SolverConfig,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    let operators: OperatorSet = args.ops.parse().context("Invalid operator set")?;

    Ok(CliConfig {
        command: args.command,
        solver: SolverConfig {
            operators,
            parallel: !args.sequential,
            max_cards: args.max_cards,
        },
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

fn draw_config(large: Option<usize>) -> Result<DrawConfig> {
    match large {
        Some(count) => DrawConfig::with_large(count).context("Invalid number of large cards"),
        None => Ok(DrawConfig::default()),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn print_solution(target: u64, solution: &Solution) {
    println!("{}", solution);
    if !solution.steps().is_empty() {
        println!("Expression: {}", solution.to_expression());
    }
    match solution.distance(target) {
        0 => println!("Exact, using {} cards", solution.card_count()),
        off => {
            warn!("No exact solution for {}", target);
            println!("Off by {}, using {} cards", off, solution.card_count());
        }
    }
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = ExpressionSolver::new(config.solver);

    match config.command {
        Command::Solve { target, cards } => {
            let cards = parse_cards(&cards.join(" ")).context("Invalid cards")?;
            info!("Solving for {} with {:?}", target, cards);
            let solution = solver.search(target, &cards).context("Search failed")?;
            print_solution(target, &solution);
        }
        Command::Draw { large, seed } => {
            let mut rng = make_rng(seed);
            let game = draw(&draw_config(large)?, &mut rng).context("Draw failed")?;
            println!("{}", game);
            let solution = solver
                .search(game.target, &game.cards)
                .context("Search failed")?;
            print_solution(game.target, &solution);
        }
        Command::Stats {
            trials,
            large,
            seed,
        } => {
            let mut rng = make_rng(seed);
            let stats = run_trials(&solver, &draw_config(large)?, trials, &mut rng)
                .context("Trials failed")?;
            println!(
                "Exact: {} of {} ({:.2}%)",
                stats.exact,
                stats.trials,
                stats.success_rate() * 100.0
            );
            println!("Within 5: {}", stats.within_five);
            println!("Within 10: {}", stats.within_ten);
            println!("Mean distance: {:.3}", stats.mean_distance());
        }
    }
    Ok(())
}
