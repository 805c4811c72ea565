use anyhow::Result;
use clap::{Parser, Subcommand};
use sectionplan::commands::conflicts::OutputFormat;
use sectionplan::commands::{conflicts, graph, schedule};
use sectionplan::config::Config;
use sectionplan::logging;
use sectionplan::validation::clap_id_validator;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sectionplan")]
#[command(about = "Dependency planning for parallel agent sections", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a config file (default: ./sectionplan.toml, then the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dependency graph as a level tree
    Graph {
        /// Path to the plan file
        plan: PathBuf,
    },

    /// Print sections in topological order
    Order {
        /// Path to the plan file
        plan: PathBuf,
    },

    /// Show parallel groups and the parallelization score
    Groups {
        /// Path to the plan file
        plan: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the longest dependency chain
    CriticalPath {
        /// Path to the plan file
        plan: PathBuf,

        /// Weight sections by estimated minutes instead of counting them
        #[arg(long)]
        weighted: bool,
    },

    /// List circular dependencies without failing
    Cycles {
        /// Path to the plan file
        plan: PathBuf,
    },

    /// Report files written by sections that may run concurrently
    Conflicts {
        /// Path to the plan file
        plan: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply suggested conflict resolutions and print the resulting sections
    Resolve {
        /// Path to the plan file
        plan: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },

    /// Show sections ready to run and the remaining schedule
    Ready {
        /// Path to the plan file
        plan: PathBuf,

        /// Sections already completed (comma-separated)
        #[arg(long, value_delimiter = ',', value_parser = clap_id_validator)]
        completed: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Graph { plan } => graph::show(&plan),
        Commands::Order { plan } => graph::order(&plan),
        Commands::Groups { plan, json } => schedule::groups(&plan, json),
        Commands::CriticalPath { plan, weighted } => {
            schedule::critical_path(&plan, weighted, &config)
        }
        Commands::Cycles { plan } => graph::cycles(&plan),
        Commands::Conflicts { plan, json } => conflicts::conflicts(&plan, json, &config),
        Commands::Resolve { plan, format } => conflicts::resolve(&plan, format, &config),
        Commands::Ready { plan, completed } => schedule::ready(&plan, completed),
    }
}
