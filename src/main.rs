use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};
use typestrike::config::Config;
use typestrike::loader::load_dictionary;
use typestrike::GameData;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "data/dictionary.json")]
    dictionary: String,

    #[arg(global = true, short, long, default_value = "data/questions.json")]
    questions: String,

    /// JSON config file; replaces the session/scoring flags when given.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Segment(cmd::segment::SegmentArgs),
    Simulate(cmd::simulate::SimulateArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .init();

    info!("🚀 Initializing TypeStrike Core...");

    match cli.command {
        Commands::Segment(args) => {
            let dictionary = load_dictionary(&cli.dictionary).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            });
            cmd::segment::run(args, &dictionary);
        }
        Commands::Simulate(mut args) => {
            if let Some(path) = &cli.config {
                info!("⚖️  Loading Config from: {}", path);
                args.config = Config::load_from_file(path).unwrap_or_else(|e| {
                    error!("Failed to load config '{}': {}", path, e);
                    process::exit(1);
                });
            } else {
                info!("No config file given. Using command-line settings.");
            }

            let data = GameData::load(&cli.dictionary, &cli.questions).unwrap_or_else(|e| {
                error!("\n❌ FATAL ERROR LOADING GAME DATA:\n   {}", e);
                process::exit(1);
            });

            if let Err(e) = cmd::simulate::run(args, &data) {
                error!("{}", e);
                process::exit(1);
            }
        }
    }
}
