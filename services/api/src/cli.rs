use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::demo::{run_catalog_import, run_recommend, CatalogImportArgs, RecommendArgs};
use crate::server;
use stayfinder::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "StayFinder",
    about = "Serve and exercise the StayFinder hotel recommendation engine from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect and convert hotel catalogs
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Rank the catalog against quiz answers supplied as flags
    Recommend(RecommendArgs),
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Convert a hotel CSV export into catalog JSON
    Import(CatalogImportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Serve a JSON catalog file instead of the built-in seed
    #[arg(long, conflicts_with = "catalog_csv")]
    pub(crate) catalog: Option<PathBuf>,
    /// Serve a CSV hotel export instead of the built-in seed
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Catalog {
            command: CatalogCommand::Import(args),
        } => run_catalog_import(args),
        Command::Recommend(args) => run_recommend(args),
    }
}
