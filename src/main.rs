#![forbid(unsafe_code)]
//! print-order Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use print_order::commands::{
    execute_order, execute_rules, execute_tree, OrderFormat, OrderOptions, RulesOptions,
    TreeOptions,
};
use print_order::config::{Config, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "print-order")]
#[command(about = "Deterministic, rule-driven ordering of source files for printing")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Tool config file path
    #[arg(short, long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the files in the order they should be printed
    Order {
        /// Rule file (default: the one named in the tool config)
        #[arg(short, long, env = "PRINT_ORDER_RULES")]
        rules: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OrderFormatArg,

        /// Write the list to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the directory tree in print order
    Tree {
        /// Rule file (default: the one named in the tool config)
        #[arg(short, long, env = "PRINT_ORDER_RULES")]
        rules: Option<PathBuf>,

        /// List the printed files under each directory
        #[arg(long)]
        files: bool,

        /// Label for the root line
        #[arg(long)]
        label: Option<String>,

        /// Write the tree to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the parsed rules and whether their targets exist
    Rules {
        /// Rule file (default: the one named in the tool config)
        #[arg(short, long, env = "PRINT_ORDER_RULES")]
        rules: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Output format for the order command
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default)]
enum OrderFormatArg {
    #[default]
    Text,
    Json,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "print_order=debug" } else { "print_order=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match Config::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "{} Invalid config {}: {}",
                style("✗").red(),
                cli.config.display(),
                e
            );
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Order { rules, format, output } => {
            let format = match format {
                OrderFormatArg::Text => OrderFormat::Text,
                OrderFormatArg::Json => OrderFormat::Json,
            };
            let options = OrderOptions { rules, format, output };
            execute_order(options, config)?;
        }

        Commands::Tree { rules, files, label, output } => {
            let options = TreeOptions { rules, files, label, output };
            execute_tree(options, config)?;
        }

        Commands::Rules { rules, json } => {
            let options = RulesOptions { rules, json };
            execute_rules(options, config)?;
        }
    }

    Ok(())
}
