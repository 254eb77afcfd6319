//! Vitro CLI - personal biology research assistant.

mod commands;
mod config;
mod setup;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vitro::cartridge::ExperimentIntent;

#[derive(Parser)]
#[command(name = "vitro")]
#[command(author, version, about = "Vitro - uterine organoid & stem cell research assistant", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a research folder
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Cross-link notes on a topic into one hypothesis
    Analyze {
        /// Topic to search for
        topic: String,
    },

    /// Argue two opposing hypotheses on a topic
    Debate {
        /// Topic to search for
        topic: String,
    },

    /// Show index and knowledge statistics
    Stats,

    /// Biology cartridge
    Cartridge {
        #[command(subcommand)]
        command: CartridgeCommands,
    },
}

#[derive(Subcommand)]
enum CartridgeCommands {
    /// Show cartridge status
    Status,

    /// Route a question to a domain
    Query {
        /// Question text
        text: String,
    },

    /// Design an experiment for a hypothesis
    Plan {
        /// Hypothesis statement
        statement: String,

        /// Research domain (e.g. uterine_organoid, stem_cells)
        #[arg(short, long)]
        domain: String,
    },

    /// Start a research project
    Start {
        /// Hypothesis statement
        statement: String,

        /// Research domain
        #[arg(short, long)]
        domain: String,
    },

    /// Descriptive statistics over numbers
    Summarize {
        /// Sample values
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Check an experiment intent against the ethics rules
    Ethics {
        /// The experiment uses animals
        #[arg(long)]
        animal_test: bool,

        /// The experiment uses human samples
        #[arg(long)]
        human_sample: bool,

        /// Donor consent is on file
        #[arg(long)]
        consent: bool,
    },

    /// Store a research result in the knowledge snapshot
    Store {
        /// Research domain
        #[arg(short, long)]
        domain: String,

        /// Result title
        #[arg(short, long)]
        title: String,

        /// Result summary
        summary: String,

        /// Where the result came from
        #[arg(long)]
        source: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = cli.json;
    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Analyze { topic } => commands::analyze::run(&topic, false, json).await,
        Commands::Debate { topic } => commands::analyze::run(&topic, true, json).await,
        Commands::Stats => commands::stats::run(json),
        Commands::Cartridge { command } => match command {
            CartridgeCommands::Status => commands::cartridge::status(json),
            CartridgeCommands::Query { text } => commands::cartridge::query(&text, json),
            CartridgeCommands::Plan { statement, domain } => {
                commands::cartridge::plan(&statement, &domain, json)
            }
            CartridgeCommands::Start { statement, domain } => {
                commands::cartridge::start(&statement, &domain, json)
            }
            CartridgeCommands::Summarize { values } => commands::cartridge::summarize(&values, json),
            CartridgeCommands::Ethics {
                animal_test,
                human_sample,
                consent,
            } => commands::cartridge::ethics(
                ExperimentIntent {
                    animal_test,
                    requires_human_sample: human_sample,
                    consent,
                },
                json,
            ),
            CartridgeCommands::Store {
                domain,
                title,
                summary,
                source,
            } => commands::cartridge::store(&domain, &title, &summary, source, json),
        },
    }
}
