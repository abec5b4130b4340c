use anyhow::{Context, Result};
use sitesearch::{
    config::Config,
    scraping::{write_dump_file, Crawler, FetchConfig, HttpFetcher},
};
use std::path::PathBuf;
use tracing::info;
use url::Url;

use super::index::build_stores;

pub async fn crawl_site(
    config: Config,
    seed: Option<String>,
    domain: Option<String>,
    max_pages: Option<usize>,
    no_limit: bool,
    output: Option<PathBuf>,
    index: bool,
) -> Result<()> {
    let seed_str = seed.unwrap_or_else(|| config.crawl.seed_url.clone());
    if seed_str.trim().is_empty() {
        anyhow::bail!("No seed URL given; pass one or set crawl.seed_url in the config");
    }
    let seed = Url::parse(&seed_str)
        .or_else(|_| Url::parse(&format!("https://{}", seed_str)))
        .with_context(|| format!("Invalid seed URL '{}'", seed_str))?;

    let domain = domain
        .or_else(|| Some(config.crawl.allowed_domain.clone()))
        .filter(|d| !d.trim().is_empty())
        .or_else(|| seed.host_str().map(str::to_string))
        .context("Seed URL has no host to restrict the crawl to")?;

    let max_pages = if no_limit {
        None
    } else {
        max_pages.or(config.crawl.max_pages)
    };

    let fetcher = HttpFetcher::new(FetchConfig::from_config(&config.crawl))
        .context("Failed to create HTTP client")?;
    info!(
        "Crawling {} within {} as {}",
        seed,
        domain,
        fetcher.config().user_agent
    );
    let mut crawler = Crawler::new(fetcher, &domain, max_pages);
    let pages = crawler.crawl(&seed).await;
    let stats = crawler.stats().clone();

    let dump_path = output.unwrap_or_else(|| config.crawl.dump_path.clone());
    write_dump_file(&dump_path, &pages)
        .with_context(|| format!("Failed to write crawl dump to {}", dump_path.display()))?;

    println!("Crawl complete:");
    println!("  Pages fetched: {}", stats.fetched);
    println!("  Pages with content: {}", stats.pages);
    println!("  Failed fetches: {}", stats.failed);
    println!("  Dump written to: {}", dump_path.display());

    if index {
        let report = build_stores(&config, &pages)?;
        println!("  Indexed: {} ({} skipped)", report.indexed, report.skipped);
    }

    Ok(())
}
