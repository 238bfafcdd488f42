use anyhow::Result;
use clap::Parser;
use papersift::config::{find_config_file, get_config, load_config};
use papersift::export;
use papersift::models::PaperRow;
use papersift::{AffiliationClassifier, PubMedClient};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// papersift - fetch papers from PubMed and flag industry-affiliated authors
#[derive(Parser, Debug)]
#[command(name = "papersift")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Fetch and filter research papers from PubMed", long_about = None)]
struct Cli {
    /// Search query for PubMed
    query: String,

    /// Filename to save results as CSV (default: print to console)
    #[arg(long, short)]
    file: Option<PathBuf>,

    /// Echo the full result set before export and enable debug logging
    #[arg(long, short)]
    debug: bool,

    /// Maximum number of search results to fetch
    #[arg(long, short, default_value_t = 5)]
    max_results: usize,

    /// Configuration file path
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("papersift={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from file if specified or found in default locations
    let config = if let Some(config_path) = &cli.config {
        load_config(config_path)?
    } else if let Some(config_path) = find_config_file() {
        tracing::info!("Using config file: {}", config_path.display());
        load_config(&config_path)?
    } else {
        get_config()
    };

    // Fatal before any network activity; the key itself is never sent.
    config.require_api_key()?;

    let client = PubMedClient::new();
    let classifier = AffiliationClassifier::new(&config.classifier.keywords);

    let ids = match client.search(&cli.query, cli.max_results).await {
        Ok(ids) => ids,
        Err(e) => {
            tracing::error!("PubMed search failed: {}", e);
            Vec::new()
        }
    };

    if ids.is_empty() {
        println!("No papers found.");
        return Ok(());
    }
    tracing::debug!("Search returned {} ids", ids.len());

    let articles = client.fetch_details(&ids).await;
    let rows: Vec<PaperRow> = articles
        .iter()
        .map(|article| PaperRow::from_article(article, &classifier))
        .collect();

    if cli.debug {
        println!("{}", export::debug_dump(&rows));
    }

    match &cli.file {
        Some(path) => {
            export::write_csv(&rows, path)?;
            println!("Results saved to {}", path.display());
        }
        None => export::print_rows(&rows),
    }

    Ok(())
}
