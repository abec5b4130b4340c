use anyhow::{Context, Result};
use sitesearch::{
    config::Config,
    index::IndexError,
    preprocess::TextPreprocessor,
    retrieval::QueryEngine,
    util::{render_marks, truncate_str},
};
use tracing::info;

const SNIPPET_DISPLAY_LEN: usize = 300;

pub async fn search_index(config: Config, query_text: String, format: String) -> Result<()> {
    info!("Searching for: {}", query_text);

    let index_dir = &config.index.index_dir;
    let stopwords = TextPreprocessor::from_config(&config.preprocess)
        .stopwords()
        .clone();
    let engine = match QueryEngine::open(index_dir, config.search.clone()) {
        Ok(engine) => engine.with_stopwords(stopwords),
        Err(IndexError::Absent(path)) => anyhow::bail!(
            "No index at {}; run `sitesearch crawl --index` or `sitesearch index` first",
            path.display()
        ),
        Err(e) => return Err(e).context("Failed to open index"),
    };

    let results = engine.search(&query_text).context("Search failed")?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&results)?),
        _ => {
            if results.is_empty() {
                println!("No results found for \"{}\"", query_text);
                return Ok(());
            }
            println!("Found {} results for \"{}\":\n", results.len(), query_text);
            for (i, result) in results.iter().enumerate() {
                let snippet = render_marks(&result.snippet, "\x1b[1m", "\x1b[0m");
                println!("{}. {}", i + 1, result.url);
                println!("   {}\n", truncate_str(&snippet, SNIPPET_DISPLAY_LEN));
            }
        }
    }

    Ok(())
}
