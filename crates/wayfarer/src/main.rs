//! Wayfarer - a travel assistant agent

use clap::{Parser, Subcommand};
use tracing::error;

mod commands;

use commands::{budget_command, chat_command, init_command, status_command, tools_command};

/// Wayfarer - travel assistant for your terminal
#[derive(Parser)]
#[command(name = "wayfarer")]
#[command(about = "A travel assistant agent")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the config file
    Init,
    /// Chat with the agent
    Chat {
        /// Message to send
        #[arg(short, long)]
        message: Option<String>,
    },
    /// Calculate a travel budget breakdown (offline)
    Budget {
        /// Total trip budget for the whole group
        #[arg(short = 'b', long)]
        total_budget: f64,
        /// Number of travel days
        #[arg(short, long)]
        days: i64,
        /// Destination country or city, in English
        #[arg(short, long)]
        country: String,
        /// Number of travelers
        #[arg(short, long, default_value_t = 1)]
        people: i64,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the registered tools
    Tools,
    /// Show config status
    Status,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt().with_env_filter("debug").init();
    } else {
        tracing_subscriber::fmt::init();
    }

    match cli.command {
        Commands::Init => {
            if let Err(e) = init_command().await {
                error!("Init failed: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Chat { message } => {
            if let Err(e) = chat_command(message).await {
                error!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Budget {
            total_budget,
            days,
            country,
            people,
            json,
        } => {
            if let Err(e) = budget_command(total_budget, days, country, people, json) {
                error!("Budget failed: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Tools => {
            if let Err(e) = tools_command().await {
                error!("Tools failed: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Status => {
            if let Err(e) = status_command().await {
                error!("Status failed: {}", e);
                std::process::exit(1);
            }
        }
    }
}
