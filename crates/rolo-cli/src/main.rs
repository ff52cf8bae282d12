//! Rolo CLI
//!
//! Command-line front end for the Rolo address book. Every invocation
//! starts from an empty, in-memory book.

use clap::{Parser, Subcommand};
use rolo_core::logging_facility::{self, Profile};

mod commands;
mod session;

#[derive(Debug, Parser)]
#[command(name = "rolo")]
#[command(about = "Rolo - contact manager driven by a small command language", long_about = None)]
struct Cli {
    /// Logging profile: dev (human-readable) or prod (JSON)
    #[arg(long, global = true, env = "ROLO_LOG_PROFILE", default_value = "dev")]
    log_profile: Profile,

    /// Print results and errors as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Read command lines from stdin until `exit` (default)
    Repl,
    /// Execute command lines in order, stopping at the first failure
    Run(commands::run::RunArgs),
    /// Parse and decode a line without executing it
    Check(commands::check::CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(cli.log_profile);

    let result = match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => commands::repl::execute(cli.json),
        Commands::Run(args) => commands::run::execute(args, cli.json),
        Commands::Check(args) => commands::check::execute(args),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    }
}
