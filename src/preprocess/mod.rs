//! Text preprocessing for indexing
//!
//! Turns extracted page text into the space-joined token stream that is
//! stored in the index:
//! 1. NFKC normalize
//! 2. Strip ASCII punctuation
//! 3. Trim lines, drop empty ones, keep the first occurrence of each line
//! 4. Join, lowercase, split on whitespace
//! 5. Drop stopwords

mod stopwords;

pub use stopwords::Stopwords;

use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

use crate::config::PreprocessConfig;

/// Normalizes and tokenizes page text
#[derive(Debug, Clone, Default)]
pub struct TextPreprocessor {
    stopwords: Stopwords,
}

impl TextPreprocessor {
    pub fn new(stopwords: Stopwords) -> Self {
        Self { stopwords }
    }

    /// Use the configured stopword list, or the English one
    pub fn from_config(config: &PreprocessConfig) -> Self {
        match &config.stopwords {
            Some(words) => Self::new(Stopwords::new(words)),
            None => Self::default(),
        }
    }

    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    /// Cleaned tokens of `content`, in order
    pub fn tokens(&self, content: &str) -> Vec<String> {
        let normalized: String = content
            .nfkc()
            .filter(|c| !c.is_ascii_punctuation())
            .collect();

        let mut seen = HashSet::new();
        let unique_lines: Vec<&str> = normalized
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty() && seen.insert(*line))
            .collect();

        unique_lines
            .join(" ")
            .to_lowercase()
            .split_whitespace()
            .filter(|token| !self.stopwords.contains(token))
            .map(str::to_string)
            .collect()
    }

    /// Cleaned tokens joined with single spaces
    pub fn preprocess(&self, content: &str) -> String {
        self.tokens(content).join(" ")
    }
}

/// Preprocess with the English stopword list
pub fn preprocess(content: &str) -> String {
    TextPreprocessor::default().preprocess(content)
}
