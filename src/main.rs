use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score one or more trick signatures
    Score(cmd::score::ScoreArgs),
    /// Score every signature in a delimited file
    Batch(cmd::batch::BatchArgs),
    /// Decode a ride log signature
    Ride(cmd::ride::RideArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Score(args) => cmd::score::run(args),
        Commands::Batch(args) => cmd::batch::run(args),
        Commands::Ride(args) => cmd::ride::run(args),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
