use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracker_core::*;

#[derive(Parser)]
#[command(name = "fittrack")]
#[command(about = "Workout statistics calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and print one summary line per workout packet (default)
    Report {
        /// JSON file with workout packets
        ///
        /// Falls back to the config's packets_file, then to the built-in
        /// sample list.
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracker_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Some(Commands::Report { input }) => cmd_report(input, &config),
        None => {
            // Default to "report" command
            cmd_report(None, &config)
        }
    }
}

fn cmd_report(input: Option<PathBuf>, config: &Config) -> Result<()> {
    let packets = match input.or_else(|| config.input.packets_file.clone()) {
        Some(path) => load_packets(&path)?,
        None => {
            tracing::debug!("No packet file given, using built-in samples");
            sample_packets()
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_report(&packets, &mut out)
}
