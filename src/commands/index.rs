use anyhow::{Context, Result};
use sitesearch::{
    config::Config,
    index::{AutocompleteIndex, IndexBuilder, IndexReport},
    scraping::read_dump_file,
    types::Page,
};
use std::path::PathBuf;
use tracing::info;

/// Rebuild the document index and the autocomplete store from `pages`
pub fn build_stores(config: &Config, pages: &[Page]) -> Result<IndexReport> {
    let index_dir = &config.index.index_dir;
    let report = IndexBuilder::from_config(&config.index, &config.preprocess)
        .build(pages, index_dir)
        .with_context(|| format!("Failed to build index at {}", index_dir.display()))?;

    let autocomplete_dir = &config.index.autocomplete_dir;
    AutocompleteIndex::build(&report.vocabulary, autocomplete_dir).with_context(|| {
        format!(
            "Failed to build autocomplete store at {}",
            autocomplete_dir.display()
        )
    })?;

    Ok(report)
}

pub async fn index_dump(config: Config, input: Option<PathBuf>) -> Result<()> {
    let dump_path = input.unwrap_or_else(|| config.crawl.dump_path.clone());
    info!("Indexing crawl dump {}", dump_path.display());

    let pages = read_dump_file(&dump_path)
        .with_context(|| format!("Failed to read crawl dump {}", dump_path.display()))?;
    let report = build_stores(&config, &pages)?;

    println!("Index rebuilt:");
    println!("  Pages read: {}", pages.len());
    println!("  Indexed: {}", report.indexed);
    println!(
        "  Skipped (< {} tokens): {}",
        config.index.min_tokens, report.skipped
    );
    println!("  Vocabulary: {} words", report.vocabulary.len());
    println!("  Index: {}", config.index.index_dir.display());
    println!("  Autocomplete: {}", config.index.autocomplete_dir.display());

    Ok(())
}
