//! sitesearch: crawl one site, index it, search it.

use anyhow::Result;
use clap::{Parser, Subcommand};
use sitesearch::config::{Config, LogFormat, LoggingConfig};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;

use commands::*;

#[derive(Parser)]
#[command(name = "sitesearch")]
#[command(about = "Single-site crawler and search engine")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Document index directory
    #[arg(long)]
    index_dir: Option<PathBuf>,

    /// Autocomplete store directory
    #[arg(long)]
    autocomplete_dir: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Crawl a site and write the crawl dump
    Crawl {
        /// Seed URL (defaults to crawl.seed_url)
        seed: Option<String>,

        /// Domain links must stay on (defaults to crawl.allowed_domain, then the seed host)
        #[arg(short, long)]
        domain: Option<String>,

        /// Maximum pages to visit
        #[arg(short, long)]
        max_pages: Option<usize>,

        /// Crawl until the frontier is exhausted
        #[arg(long, conflicts_with = "max_pages")]
        no_limit: bool,

        /// Dump output path (defaults to crawl.dump_path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Rebuild the index from the crawled pages
        #[arg(long)]
        index: bool,
    },

    /// Rebuild the index and autocomplete store from a crawl dump
    Index {
        /// Crawl dump path (defaults to crawl.dump_path)
        input: Option<PathBuf>,
    },

    /// Search the index
    Search {
        /// Search query; quote phrases, e.g. '"machine learning" deep'
        query: String,

        /// Output format (json, text)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Suggest completions for a prefix
    Suggest {
        prefix: String,

        /// Number of suggestions (defaults to search.autocomplete_limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Serve search and autocomplete over HTTP
    Serve {
        /// Listen address
        #[arg(short, long)]
        listen: Option<String>,
    },

    /// Write a default configuration file
    Init {
        /// Output directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite an existing config.toml
        #[arg(long)]
        force: bool,
    },
}

fn init_logging(logging: &LoggingConfig, verbose: u8) -> Result<()> {
    let level = logging.level.raised(verbose);
    // RUST_LOG takes precedence over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let builder = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false);

    match logging.format {
        LogFormat::Text => tracing::subscriber::set_global_default(builder.finish())?,
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish())?,
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Init { path, force } = &cli.command {
        init_logging(&LoggingConfig::default(), cli.verbose)?;
        return init_config(path.clone(), *force).await;
    }

    let mut config = Config::load_or_default(&cli.config)?;
    init_logging(&config.logging, cli.verbose)?;

    if let Some(index_dir) = cli.index_dir {
        config.index.index_dir = index_dir;
    }
    if let Some(autocomplete_dir) = cli.autocomplete_dir {
        config.index.autocomplete_dir = autocomplete_dir;
    }
    config.validate()?;

    match cli.command {
        Commands::Crawl {
            seed,
            domain,
            max_pages,
            no_limit,
            output,
            index,
        } => crawl_site(config, seed, domain, max_pages, no_limit, output, index).await,
        Commands::Index { input } => index_dump(config, input).await,
        Commands::Search { query, format } => search_index(config, query, format).await,
        Commands::Suggest { prefix, limit } => suggest_words(config, prefix, limit).await,
        Commands::Serve { listen } => serve(config, listen).await,
        Commands::Init { .. } => Ok(()),
    }
}
