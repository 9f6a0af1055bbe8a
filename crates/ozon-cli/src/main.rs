mod commands;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "ozon-cli")]
#[command(about = "Extract products and seller details from a saved Ozon page state")]
struct Cli {
    /// Pretty-print the JSON written to stdout.
    #[arg(long, global = true)]
    pretty: bool,

    /// Fail when a widget is present but its payload cannot be decoded.
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the products listed in the search-results widget.
    Products(InputArgs),
    /// Print the seller's legal-entity details.
    Seller(InputArgs),
    /// Print both products and legal-entity details.
    All(InputArgs),
}

#[derive(Debug, Args)]
struct InputArgs {
    /// Page-state JSON file. Reads stdin when omitted or `-`.
    #[arg(env = "OZON_STATE_PATH")]
    path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Loads `.env` first so `OZON_STATE_PATH` is visible to clap.
    let config = ozon_core::load_app_config()?;
    let cli = Cli::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?config, "configuration loaded");

    let pretty = cli.pretty || config.pretty_json;
    let output = match &cli.command {
        Commands::Products(input) => {
            let document = commands::read_document(input.path.as_deref())?;
            commands::products_output(&document, cli.strict)?
        }
        Commands::Seller(input) => {
            let document = commands::read_document(input.path.as_deref())?;
            commands::seller_output(&document, cli.strict)?
        }
        Commands::All(input) => {
            let document = commands::read_document(input.path.as_deref())?;
            commands::all_output(&document, cli.strict)?
        }
    };

    println!("{}", commands::render(&output, pretty)?);
    Ok(())
}
