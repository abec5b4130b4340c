use anyhow::{Context, Result};
use sitesearch::config::Config;
use std::path::PathBuf;

pub async fn init_config(path: PathBuf, force: bool) -> Result<()> {
    let config_path = path.join("config.toml");
    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists; pass --force to overwrite it",
            config_path.display()
        );
    }

    let config = Config::default();
    let toml_content = format!(
        "# sitesearch configuration\n#\n# Set crawl.seed_url and crawl.allowed_domain before running `sitesearch crawl`.\n\n{}",
        config.to_toml()?
    );

    std::fs::create_dir_all(&path)?;
    std::fs::write(&config_path, toml_content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("Created configuration file: {}", config_path.display());

    if let Some(data_dir) = config.crawl.dump_path.parent() {
        let data_dir = path.join(data_dir);
        std::fs::create_dir_all(&data_dir)?;
        println!("Created data directory: {}", data_dir.display());
    }

    Ok(())
}
