use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use minimax_connect_four::arena::run_series;
use minimax_connect_four::config::{AgentKind, AppConfig, HeuristicKind};

/// Play a series of Connect Four games between configured agents.
#[derive(Parser)]
#[command(name = "connect-four", about = "Connect Four minimax engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of games in the series
    #[arg(long)]
    games: Option<usize>,

    /// Override the Red agent: minimax, random, first-move, or human
    #[arg(long)]
    red: Option<String>,

    /// Override the Yellow agent: minimax, random, first-move, or human
    #[arg(long)]
    yellow: Option<String>,

    /// Override search depth for both minimax agents
    #[arg(long)]
    depth: Option<u32>,

    /// Override heuristic for both minimax agents: zero, three-line, or
    /// positional
    #[arg(long)]
    heuristic: Option<String>,

    /// Print the board before every move
    #[arg(long)]
    show_boards: bool,

    /// Print a default configuration file and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(games) = cli.games {
        config.series.games = games;
    }
    if let Some(kind) = &cli.red {
        config.red.kind = kind.parse::<AgentKind>().map_err(anyhow::Error::msg)?;
    }
    if let Some(kind) = &cli.yellow {
        config.yellow.kind = kind.parse::<AgentKind>().map_err(anyhow::Error::msg)?;
    }
    if let Some(depth) = cli.depth {
        config.red.depth = depth;
        config.yellow.depth = depth;
    }
    if let Some(heuristic) = &cli.heuristic {
        let heuristic = heuristic
            .parse::<HeuristicKind>()
            .map_err(anyhow::Error::msg)?;
        config.red.heuristic = heuristic;
        config.yellow.heuristic = heuristic;
    }
    if cli.show_boards {
        config.series.show_boards = true;
    }
    config.validate().context("validating configuration")?;

    println!(
        "Playing {} game(s): Red [{}] vs Yellow [{}]",
        config.series.games,
        config.red.describe(),
        config.yellow.describe()
    );
    println!("-------------------------------------------");

    let report = run_series(
        config.series.games,
        || config.red.build(),
        || config.yellow.build(),
        config.series.show_boards,
    )?;

    println!("-------------------------------------------");
    println!("Red wins:    {}", report.red_wins);
    println!("Yellow wins: {}", report.yellow_wins);
    println!("Draws:       {}", report.draws);

    Ok(())
}
