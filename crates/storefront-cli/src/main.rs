mod catalog;
mod search;
mod text;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use storefront_core::Availability;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "storefront-cli")]
#[command(about = "Storefront catalog query command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Filter and sort the product catalog
    Query(QueryArgs),
    /// Show the filter options available in the catalog
    Facets {
        /// Catalog file (defaults to `STOREFRONT_CATALOG_PATH`)
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Print JSON instead of a text summary
        #[arg(long)]
        json: bool,
    },
    /// Read filter lines from stdin and run the last one after typing pauses
    Search {
        /// Catalog file (defaults to `STOREFRONT_CATALOG_PATH`)
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Quiet period in milliseconds (defaults to `STOREFRONT_SEARCH_DEBOUNCE_MS`)
        #[arg(long)]
        debounce_ms: Option<u64>,
    },
    /// Normalize a display price
    Price {
        /// Raw price text, e.g. "PKR 6250/-"
        raw: String,
    },
    /// Build a URL slug from a title
    Slug {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Shorten text to a character budget
    Truncate {
        text: String,
        max_len: usize,
    },
}

#[derive(Debug, Args)]
struct QueryArgs {
    /// Catalog file (defaults to `STOREFRONT_CATALOG_PATH`)
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Accepted category (repeatable)
    #[arg(long = "category")]
    categories: Vec<String>,
    /// Accepted size (repeatable)
    #[arg(long = "size")]
    sizes: Vec<String>,
    /// `in-stock` or `out-of-stock` (repeatable)
    #[arg(long)]
    availability: Vec<Availability>,
    /// Reserved: accepted but not matched yet
    #[arg(long = "type")]
    types: Vec<String>,
    /// Reserved: accepted but not matched yet
    #[arg(long = "fabric")]
    fabrics: Vec<String>,
    /// Reserved: accepted but not matched yet
    #[arg(long)]
    pieces: Vec<String>,
    #[arg(long, default_value = "0")]
    min_price: u64,
    #[arg(long)]
    max_price: Option<u64>,
    /// newest, price-low, price-high or popular (defaults to `STOREFRONT_DEFAULT_SORT`)
    #[arg(long)]
    sort: Option<String>,
    /// Title character budget (defaults to `STOREFRONT_TITLE_MAX_LEN`)
    #[arg(long)]
    title_len: Option<usize>,
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = storefront_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Query(args)) => catalog::run_query(&config, &args)?,
        Some(Commands::Facets { catalog, json }) => {
            catalog::run_facets(&config, catalog.as_deref(), json)?;
        }
        Some(Commands::Search {
            catalog,
            debounce_ms,
        }) => search::run_search(&config, catalog.as_deref(), debounce_ms).await?,
        Some(Commands::Price { raw }) => text::run_price(&raw),
        Some(Commands::Slug { words }) => text::run_slug(&words),
        Some(Commands::Truncate { text, max_len }) => text::run_truncate(&text, max_len),
        None => println!("storefront-cli ready; see --help for commands"),
    }

    Ok(())
}
