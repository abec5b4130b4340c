//! Configuration for sitesearch

mod http;
mod index;
mod logging;
mod scraping;

pub use http::HttpConfig;
pub use index::{IndexConfig, PreprocessConfig, SearchConfig};
pub use logging::{LogFormat, LogLevel, LoggingConfig};
pub use scraping::CrawlConfig;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Default user agent for all HTTP requests
pub const DEFAULT_USER_AGENT: &str = "SiteSearchBot/0.1";

/// Hard ceiling on results per search
pub const MAX_RESULTS_CEILING: usize = 10;

/// Smallest writer memory budget tantivy accepts per indexing thread
pub const MIN_WRITER_MEMORY_BYTES: usize = 15_000_000;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Crawl configuration
    #[serde(default)]
    pub crawl: CrawlConfig,
    /// Index locations and build policy
    #[serde(default)]
    pub index: IndexConfig,
    /// Query-time configuration
    #[serde(default)]
    pub search: SearchConfig,
    /// Text preprocessing configuration
    #[serde(default)]
    pub preprocess: PreprocessConfig,
    /// HTTP API server configuration
    #[serde(default)]
    pub http: HttpConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Render this configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate all configuration fields.
    ///
    /// Collects all validation errors and reports them together.
    pub fn validate(&self) -> Result<()> {
        let mut errors: Vec<String> = Vec::new();

        // Search validation
        if self.search.max_results == 0 || self.search.max_results > MAX_RESULTS_CEILING {
            errors.push(format!(
                "max_results must be between 1 and {}, got {}",
                MAX_RESULTS_CEILING, self.search.max_results
            ));
        }
        if self.search.snippet_window == 0 {
            errors.push("snippet_window must be positive".to_string());
        }
        if self.search.max_snippets == 0 {
            errors.push("max_snippets must be positive".to_string());
        }
        if self.search.autocomplete_limit == 0 {
            errors.push("autocomplete_limit must be positive".to_string());
        }

        // Index validation
        if self.index.index_dir.as_os_str().is_empty() {
            errors.push("index_dir must not be empty".to_string());
        }
        if self.index.autocomplete_dir.as_os_str().is_empty() {
            errors.push("autocomplete_dir must not be empty".to_string());
        }
        if self.index.index_dir == self.index.autocomplete_dir {
            errors.push("index_dir and autocomplete_dir must differ".to_string());
        }
        if self.index.writer_memory_bytes < MIN_WRITER_MEMORY_BYTES {
            errors.push(format!(
                "writer_memory_bytes must be at least {}, got {}",
                MIN_WRITER_MEMORY_BYTES, self.index.writer_memory_bytes
            ));
        }

        // Crawl validation
        if self.crawl.allowed_domain.contains('/') || self.crawl.allowed_domain.contains(' ') {
            errors.push(format!(
                "allowed_domain must be a bare hostname, got '{}'",
                self.crawl.allowed_domain
            ));
        }
        if self.crawl.max_pages == Some(0) {
            errors.push("max_pages must be positive when set".to_string());
        }
        if self.crawl.request_timeout_secs == 0 {
            errors.push("request_timeout_secs must be positive".to_string());
        }

        // HTTP validation
        if self.http.listen_addr.parse::<SocketAddr>().is_err() {
            errors.push(format!(
                "HTTP listen address is not a valid socket address: '{}'",
                self.http.listen_addr
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            anyhow::bail!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn default_config_passes_validation() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_results_above_ceiling() {
        let mut cfg = Config::default();
        cfg.search.max_results = 11;
        let err = cfg.validate().unwrap_err().to_string();
        assert!(err.contains("max_results"), "got: {}", err);
    }

    #[test]
    fn validate_collects_all_errors() {
        let mut cfg = Config::default();
        cfg.search.snippet_window = 0;
        cfg.search.max_snippets = 0;
        cfg.http.listen_addr = "not an address".to_string();
        let err = cfg.validate().unwrap_err().to_string();
        assert!(err.contains("snippet_window"));
        assert!(err.contains("max_snippets"));
        assert!(err.contains("listen address"));
    }

    #[test]
    fn validate_rejects_shared_store_directory() {
        let mut cfg = Config::default();
        cfg.index.autocomplete_dir = cfg.index.index_dir.clone();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_domain_with_path() {
        let mut cfg = Config::default();
        cfg.crawl.allowed_domain = "example.com/docs".to_string();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            "[crawl]\nallowed_domain = \"www.example.org\"\n\n[search]\nmax_results = 5\n",
        )
        .unwrap();

        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.crawl.allowed_domain, "www.example.org");
        assert_eq!(cfg.search.max_results, 5);
        assert_eq!(cfg.search.snippet_window, 5);
        assert_eq!(cfg.index.min_tokens, 10);
        assert_eq!(cfg.index.index_dir, PathBuf::from("index"));
    }

    #[test]
    fn load_or_default_without_file() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = Config::load_or_default(&tmp.path().join("missing.toml")).unwrap();
        assert_eq!(cfg.search.max_results, 10);
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, Config::default().to_toml().unwrap()).unwrap();
        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.http.listen_addr, HttpConfig::default().listen_addr);
        assert_eq!(cfg.logging.level, LogLevel::Info);
    }

    #[test]
    fn load_reports_parse_errors_with_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("broken.toml");
        std::fs::write(&path, "[search\nmax_results = ").unwrap();
        let err = Config::load(&path).unwrap_err().to_string();
        assert!(err.contains("broken.toml"));
    }
}
