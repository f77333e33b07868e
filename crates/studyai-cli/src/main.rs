use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "studyai-cli", version, about = "StudyAI Planner CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Schedule generation and inspection
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Per-subject analytics
    Analyze {
        #[command(subcommand)]
        action: commands::analyze::AnalyzeAction,
    },
    /// Ask the study assistant a question
    Chat {
        #[command(subcommand)]
        action: commands::chat::ChatAction,
    },
    /// Cached data management
    Cache {
        #[command(subcommand)]
        action: commands::cache::CacheAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Analyze { action } => commands::analyze::run(action),
        Commands::Chat { action } => commands::chat::run(action),
        Commands::Cache { action } => commands::cache::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
