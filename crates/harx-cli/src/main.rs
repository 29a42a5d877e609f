use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use harx_cli::commands;
use harx_cli::commands::endpoints::EndpointFilters;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "harx")]
#[command(author, version)]
#[command(
    about = "Extract and filter API endpoints from HTTP Archive (HAR) files",
    long_about = "harx turns the requests recorded in a HAR capture into flat endpoint records, \
                  filters them by domain, method, status or path, and exports them as JSON or CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract endpoints, optionally filtered, as JSON or into a file
    Endpoints {
        /// Path to the HAR file (use - for stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        filters: EndpointFilters,

        /// Output file path (supports .json and .csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List all unique domains in the HAR file
    Domains {
        /// Path to the HAR file (use - for stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Generate shell completion scripts
    #[command(after_long_help = commands::completion::COMPLETION_HELP)]
    Completion {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Endpoints {
            file,
            filters,
            output,
        } => commands::endpoints::execute(&file, &filters, output),
        Commands::Domains { file } => commands::domains::execute(&file),
        Commands::Completion { shell } => {
            commands::completion::execute(shell, &mut Cli::command())
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("harx=debug,harx_cli=debug,harx_core=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("harx=info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
