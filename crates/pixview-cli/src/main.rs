mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pixview", about = "Pan/zoom image viewer tools")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show an image's natural size and how it fits a viewport
    Info(commands::info::InfoArgs),
    /// List the images next to a file, in navigation order
    List(commands::list::ListArgs),
    /// Print or save the default viewer config as TOML
    Config(commands::config::ConfigArgs),
    /// Run a script of viewer commands and print the placement after each step
    Replay(commands::replay::ReplayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::List(args) => commands::list::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Replay(args) => commands::replay::run(args),
    }
}
