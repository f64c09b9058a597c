use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use falcon_cli::output::OutputFormat;

mod commands;

#[derive(Parser, Debug)]
#[command(author, version, about = "Odds of reaching the arrival before the countdown ends")]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the probability of arriving without being captured.
    Odds {
        #[command(flatten)]
        documents: Documents,
    },
    /// Show a sequence of moves that achieves the best odds.
    Itinerary {
        #[command(flatten)]
        documents: Documents,
    },
}

#[derive(clap::Args, Debug)]
struct Documents {
    /// Falcon document: autonomy, departure, arrival and routes.
    #[arg(long)]
    falcon: PathBuf,
    /// Empire document: countdown and bounty hunters.
    #[arg(long)]
    empire: PathBuf,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Odds { documents } => {
            commands::odds::handle_odds_command(&documents.falcon, &documents.empire, cli.format)
        }
        Command::Itinerary { documents } => commands::itinerary::handle_itinerary_command(
            &documents.falcon,
            &documents.empire,
            cli.format,
        ),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
