//! Document index build
//!
//! A build is one writer and one commit: every old document is deleted and
//! every qualifying page added before the commit, so readers see either the
//! previous corpus or the new one.

use std::collections::BTreeSet;
use std::path::Path;
use tantivy::{IndexWriter, TantivyDocument, Term};
use tracing::{debug, info};

use super::error::IndexError;
use super::store::{self, DocumentFields};
use crate::config::{IndexConfig, PreprocessConfig};
use crate::preprocess::TextPreprocessor;
use crate::types::Page;

/// Pages with fewer preprocessed tokens are not indexed
pub const DEFAULT_MIN_TOKENS: usize = 10;

const DEFAULT_WRITER_MEMORY: usize = 50_000_000; // 50MB buffer

/// Outcome of one build
#[derive(Debug, Clone, Default)]
pub struct IndexReport {
    /// Documents written
    pub indexed: usize,
    /// Pages below the token threshold
    pub skipped: usize,
    /// Distinct tokens of the indexed documents, sorted
    pub vocabulary: BTreeSet<String>,
}

/// Builds the document index from crawled pages
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    preprocessor: TextPreprocessor,
    min_tokens: usize,
    writer_memory: usize,
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new(TextPreprocessor::default())
    }
}

impl IndexBuilder {
    pub fn new(preprocessor: TextPreprocessor) -> Self {
        Self {
            preprocessor,
            min_tokens: DEFAULT_MIN_TOKENS,
            writer_memory: DEFAULT_WRITER_MEMORY,
        }
    }

    pub fn from_config(index: &IndexConfig, preprocess: &PreprocessConfig) -> Self {
        Self {
            preprocessor: TextPreprocessor::from_config(preprocess),
            min_tokens: index.min_tokens,
            writer_memory: index.writer_memory_bytes,
        }
    }

    pub fn with_min_tokens(mut self, min_tokens: usize) -> Self {
        self.min_tokens = min_tokens;
        self
    }

    /// Replace the index at `index_dir` with the qualifying `pages`
    pub fn build(&self, pages: &[Page], index_dir: &Path) -> Result<IndexReport, IndexError> {
        let (schema, _) = DocumentFields::schema();
        let index = store::create_or_open(index_dir, schema)?;
        let fields = DocumentFields::from_index(&index)?;

        let mut writer: IndexWriter = index.writer(self.writer_memory)?;
        writer.delete_all_documents()?;

        let mut report = IndexReport::default();
        for page in pages {
            let tokens = self.preprocessor.tokens(&page.content);
            if tokens.len() < self.min_tokens {
                debug!(
                    "Skipping {}: {} tokens (minimum {})",
                    page.url,
                    tokens.len(),
                    self.min_tokens
                );
                report.skipped += 1;
                continue;
            }

            let content = tokens.join(" ");
            report.vocabulary.extend(tokens);

            // Upsert: a later page with the same URL replaces an earlier one
            writer.delete_term(Term::from_field_text(fields.url, &page.url));
            let mut doc = TantivyDocument::new();
            doc.add_text(fields.url, &page.url);
            doc.add_text(fields.content, &content);
            writer.add_document(doc)?;
            report.indexed += 1;
        }

        writer.commit()?;
        writer.wait_merging_threads()?;

        info!(
            "Indexed {} pages into {} ({} skipped, {} distinct terms)",
            report.indexed,
            index_dir.display(),
            report.skipped,
            report.vocabulary.len()
        );
        Ok(report)
    }
}

/// Build with the default preprocessor and threshold
pub fn build_index(pages: &[Page], index_dir: &Path) -> Result<IndexReport, IndexError> {
    IndexBuilder::default().build(pages, index_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tantivy::collector::Count;
    use tantivy::query::AllQuery;

    fn words(n: usize) -> String {
        (0..n)
            .map(|i| format!("word{}", i))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn doc_count(dir: &Path) -> usize {
        let index = store::open_existing(dir).unwrap();
        let searcher = index.reader().unwrap().searcher();
        searcher.search(&AllQuery, &Count).unwrap()
    }

    fn stored_urls(dir: &Path) -> Vec<String> {
        use tantivy::collector::TopDocs;
        use tantivy::schema::Value;

        let index = store::open_existing(dir).unwrap();
        let fields = DocumentFields::from_index(&index).unwrap();
        let searcher = index.reader().unwrap().searcher();
        let hits = searcher.search(&AllQuery, &TopDocs::with_limit(100)).unwrap();
        let mut urls: Vec<String> = hits
            .into_iter()
            .map(|(_, addr)| {
                let doc: TantivyDocument = searcher.doc(addr).unwrap();
                doc.get_first(fields.url)
                    .and_then(|v| v.as_str())
                    .unwrap()
                    .to_string()
            })
            .collect();
        urls.sort();
        urls
    }

    #[test]
    fn test_min_token_boundary() {
        let tmp = tempfile::tempdir().unwrap();
        let pages = vec![
            Page::new("https://example.com/nine", words(9)),
            Page::new("https://example.com/ten", words(10)),
        ];
        let report = build_index(&pages, tmp.path()).unwrap();

        assert_eq!(report.indexed, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(stored_urls(tmp.path()), vec!["https://example.com/ten"]);
    }

    #[test]
    fn test_stopwords_do_not_count_toward_threshold() {
        let tmp = tempfile::tempdir().unwrap();
        // nine content words padded with stopwords
        let content = format!("the a an of {} and or", words(9));
        let report = build_index(&[Page::new("https://example.com/", content)], tmp.path()).unwrap();
        assert_eq!(report.indexed, 0);
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn test_rebuild_replaces_previous_corpus() {
        let tmp = tempfile::tempdir().unwrap();
        build_index(&[Page::new("https://example.com/old", words(12))], tmp.path()).unwrap();
        assert_eq!(stored_urls(tmp.path()), vec!["https://example.com/old"]);

        build_index(&[Page::new("https://example.com/new", words(12))], tmp.path()).unwrap();
        assert_eq!(stored_urls(tmp.path()), vec!["https://example.com/new"]);
    }

    #[test]
    fn test_duplicate_url_is_upserted() {
        let tmp = tempfile::tempdir().unwrap();
        let pages = vec![
            Page::new("https://example.com/", words(10)),
            Page::new("https://example.com/", format!("{} updated", words(10))),
        ];
        let report = build_index(&pages, tmp.path()).unwrap();
        assert_eq!(report.indexed, 2);
        assert_eq!(doc_count(tmp.path()), 1);
        assert!(report.vocabulary.contains("updated"));
    }

    #[test]
    fn test_content_is_stored_preprocessed() {
        use tantivy::collector::TopDocs;
        use tantivy::schema::Value;

        let tmp = tempfile::tempdir().unwrap();
        let content = "Welcome to the Department of Physics!\nResearch, teaching and outreach in \
                       astronomy, optics and quantum matter.";
        build_index(&[Page::new("https://example.com/", content)], tmp.path()).unwrap();

        let index = store::open_existing(tmp.path()).unwrap();
        let fields = DocumentFields::from_index(&index).unwrap();
        let searcher = index.reader().unwrap().searcher();
        let (_, addr) = searcher.search(&AllQuery, &TopDocs::with_limit(1)).unwrap()[0];
        let doc: TantivyDocument = searcher.doc(addr).unwrap();
        assert_eq!(
            doc.get_first(fields.content).and_then(|v| v.as_str()),
            Some("welcome department physics research teaching outreach astronomy optics quantum matter")
        );
    }

    #[test]
    fn test_custom_threshold() {
        let tmp = tempfile::tempdir().unwrap();
        let builder = IndexBuilder::default().with_min_tokens(1);
        let report = builder
            .build(&[Page::new("https://example.com/", "physics")], tmp.path())
            .unwrap();
        assert_eq!(report.indexed, 1);
        assert_eq!(report.vocabulary.into_iter().collect::<Vec<_>>(), vec!["physics"]);
    }
}
