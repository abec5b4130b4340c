use anyhow::Result;
use sitesearch::{
    config::Config,
    index::{store, AutocompleteService},
};

pub async fn suggest_words(config: Config, prefix: String, limit: Option<usize>) -> Result<()> {
    let limit = limit.unwrap_or(config.search.autocomplete_limit);
    let service = AutocompleteService::new(config.index.autocomplete_dir.clone(), limit);

    let suggestions = service.suggest(&prefix);
    if suggestions.is_empty() {
        if !store::exists(service.store_dir()) {
            println!(
                "No autocomplete store at {}; run `sitesearch index` first",
                service.store_dir().display()
            );
            return Ok(());
        }
        println!("No suggestions for \"{}\"", prefix);
    }
    for word in suggestions {
        println!("{}", word);
    }
    Ok(())
}
