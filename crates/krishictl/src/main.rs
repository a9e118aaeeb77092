//! Krishi Control - CLI for the Krishi query router
//!
//! Routes farmer queries locally and inspects the routing configuration.
//! Agents are never called; the output is the routing decision.

mod commands;
mod logging;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use krishi_shared::Language;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "krishictl")]
#[command(about = "Krishi advisory router - classify farmer queries", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (default: /etc/krishi/router.toml, then /var/lib/krishi/router.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log more (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Route a query and show the decision
    Route {
        /// Query text
        text: String,

        /// Declared query language (en, hi, mixed)
        #[arg(long)]
        lang: Option<Language>,

        /// State name passed as a location hint
        #[arg(long)]
        location: Option<String>,

        /// Print the decision as JSON
        #[arg(long)]
        json: bool,
    },

    /// List domains, their dependency class and registered agents
    Domains,

    /// Route every query in a TSV corpus and report accuracy
    Eval {
        /// Corpus file: query<TAB>domains[<TAB>...]
        corpus: PathBuf,

        /// Fail when accuracy (percent) is below this
        #[arg(long, default_value_t = 80.0)]
        min_accuracy: f64,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Route {
            text,
            lang,
            location,
            json,
        } => commands::route::run(&config, &text, lang, location.as_deref(), json),
        Commands::Domains => commands::domains::run(&config),
        Commands::Eval {
            corpus,
            min_accuracy,
        } => commands::eval::run(&config, &corpus, min_accuracy),
        Commands::Config => commands::config::run(&config),
    }
}
