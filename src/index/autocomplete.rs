//! Prefix autocomplete over a separate word store

use std::path::{Path, PathBuf};
use tantivy::{
    collector::TopDocs, query::RegexQuery, schema::Value, IndexReader, IndexWriter, ReloadPolicy,
    TantivyDocument,
};
use tracing::{debug, info};

use super::error::IndexError;
use super::store::{self, WordFields};

/// Default number of suggestions
pub const DEFAULT_LIMIT: usize = 5;

const WRITER_MEMORY: usize = 15_000_000;

/// Builder for the word store
pub struct AutocompleteIndex;

impl AutocompleteIndex {
    /// Replace the store at `dir` with one entry per distinct non-empty word.
    ///
    /// Words are lowercased; entries keep first-seen order. Returns the
    /// number of entries written.
    pub fn build<I, S>(words: I, dir: &Path) -> Result<usize, IndexError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (schema, _) = WordFields::schema();
        let index = store::create_or_open(dir, schema)?;
        let fields = WordFields::from_index(&index)?;

        // One thread keeps doc order equal to insertion order
        let mut writer: IndexWriter = index.writer_with_num_threads(1, WRITER_MEMORY)?;
        writer.delete_all_documents()?;

        let mut seen = std::collections::HashSet::new();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() || !seen.insert(word.clone()) {
                continue;
            }
            let mut doc = TantivyDocument::new();
            doc.add_text(fields.word, &word);
            writer.add_document(doc)?;
        }

        writer.commit()?;
        writer.wait_merging_threads()?;

        info!("Wrote {} autocomplete entries to {}", seen.len(), dir.display());
        Ok(seen.len())
    }
}

/// Prefix suggestions; never fails towards the caller
#[derive(Debug, Clone)]
pub struct AutocompleteService {
    store_dir: PathBuf,
    limit: usize,
}

impl AutocompleteService {
    pub fn new(store_dir: impl Into<PathBuf>, limit: usize) -> Self {
        Self {
            store_dir: store_dir.into(),
            limit,
        }
    }

    pub fn store_dir(&self) -> &Path {
        &self.store_dir
    }

    /// Up to `limit` stored words starting with the lowercased prefix.
    ///
    /// Blank prefixes return nothing without touching the store. Any store
    /// failure also returns nothing.
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.trim();
        if prefix.is_empty() || self.limit == 0 {
            return Vec::new();
        }

        match self.lookup(&prefix.to_lowercase()) {
            Ok(words) => words,
            Err(e) => {
                debug!(
                    "Autocomplete unavailable at {}: {}",
                    self.store_dir.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    fn lookup(&self, prefix: &str) -> Result<Vec<String>, IndexError> {
        let index = store::open_existing(&self.store_dir)?;
        let fields = WordFields::from_index(&index)?;
        let reader: IndexReader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()?;
        let searcher = reader.searcher();

        let pattern = format!("{}.*", regex::escape(prefix));
        let query = RegexQuery::from_pattern(&pattern, fields.word)?;
        let top_docs = searcher.search(&query, &TopDocs::with_limit(self.limit))?;

        let mut words = Vec::with_capacity(top_docs.len());
        for (_score, doc_address) in top_docs {
            let doc: TantivyDocument = searcher.doc(doc_address)?;
            if let Some(word) = doc.get_first(fields.word).and_then(|v| v.as_str()) {
                words.push(word.to_string());
            }
        }
        Ok(words)
    }
}
