//! crumbtrail CLI
//!
//! Command-line interface for resolving breadcrumb trails from taxonomy seeds

use clap::{Parser, Subcommand};
use crumbtrail_core::logging_facility::{self, Profile};
use crumbtrail_core_types::RequestId;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "crumbtrail")]
#[command(about = "crumbtrail - Breadcrumb trails over a taxonomy", long_about = None)]
struct Cli {
    /// Emit JSON log lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    /// Suppress log output
    #[arg(long, short, global = true, conflicts_with = "log_json")]
    quiet: bool,

    /// Correlation id to adopt from the caller (a fresh one is minted otherwise)
    #[arg(long, global = true)]
    request_id: Option<RequestId>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve the trail for a collection, categories and term
    Resolve(commands::resolve::ResolveArgs),
    /// Validate a seed file and print its digest
    Check(commands::check::CheckArgs),
}

fn main() {
    let cli = Cli::parse();

    let profile = if cli.quiet {
        Profile::Test
    } else if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    };
    logging_facility::init(profile);

    let request_id = cli.request_id.unwrap_or_default();
    let span = tracing::info_span!("cli", request_id = %request_id);
    let _guard = span.enter();

    let result = match cli.command {
        Commands::Resolve(args) => commands::resolve::execute(args, &request_id),
        Commands::Check(args) => commands::check::execute(args, &request_id),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
