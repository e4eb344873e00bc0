use std::io;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use rust_checkers::core::{GameConfig, Player, SelectorKind, SidePolicy};
use rust_checkers::game::{Console, TurnController};
use rust_checkers::selector;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SideArg {
    White,
    Black,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SelectorArg {
    Random,
    First,
}

#[derive(Parser, Debug)]
#[command(name = "checkers", about = "Play checkers against the computer")]
struct Args {
    /// Side to play; asked at startup when omitted.
    #[arg(long, value_enum)]
    side: Option<SideArg>,

    /// Re-prompt on an unrecognized side instead of defaulting to black.
    #[arg(long)]
    strict_side: bool,

    /// Opponent move selector.
    #[arg(long, value_enum, default_value = "random")]
    selector: SelectorArg,

    /// Seed for the random selector.
    #[arg(long)]
    seed: Option<u64>,

    /// Run move selection on a worker thread.
    #[arg(long)]
    background: bool,

    /// Log filter (overrides RUST_LOG), e.g. "debug".
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn config(&self) -> GameConfig {
        let mut config = GameConfig::new()
            .with_side_policy(if self.strict_side {
                SidePolicy::Strict
            } else {
                SidePolicy::DefaultBlack
            })
            .with_selector(match self.selector {
                SelectorArg::Random => SelectorKind::Random,
                SelectorArg::First => SelectorKind::First,
            })
            .with_background(self.background);

        if let Some(side) = self.side {
            config = config.with_human(match side {
                SideArg::White => Player::White,
                SideArg::Black => Player::Black,
            });
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn init_logging(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).context("invalid --log-level")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let config = args.config();
    tracing::debug!(?config, "starting game");

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let human = match config.human {
        Some(side) => side,
        None => console.choose_side(config.side_policy).context("reading side")?,
    };

    let mut game = TurnController::new(human, selector::from_config(&config));
    console.play(&mut game).context("playing game")?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = init_logging(args.log_level.as_deref()) {
        eprintln!("Error: {err:#}");
        std::process::exit(2);
    }
    if let Err(err) = run(&args) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
