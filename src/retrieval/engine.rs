//! Query engine over the document index

use std::path::Path;
use tantivy::{
    collector::TopDocs, query::QueryParser, schema::Value, Index, IndexReader, ReloadPolicy,
    TantivyDocument,
};
use tracing::debug;

use super::links::is_query_in_links;
use super::query::ParsedQuery;
use super::snippet::{generate_snippet, NO_SNIPPET};
use crate::config::{SearchConfig, MAX_RESULTS_CEILING};
use crate::index::store::{self, DocumentFields};
use crate::index::IndexError;
use crate::preprocess::Stopwords;
use crate::types::SearchResult;

/// Read-only searcher over one committed index
pub struct QueryEngine {
    index: Index,
    reader: IndexReader,
    fields: DocumentFields,
    config: SearchConfig,
    stopwords: Stopwords,
}

impl QueryEngine {
    /// Open the index at `index_dir`; a missing index is [`IndexError::Absent`].
    ///
    /// Query terms are filtered with the English stopword list unless
    /// [`QueryEngine::with_stopwords`] replaces it.
    pub fn open(index_dir: &Path, config: SearchConfig) -> Result<Self, IndexError> {
        let index = store::open_existing(index_dir)?;
        let fields = DocumentFields::from_index(&index)?;
        let reader: IndexReader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()?;

        Ok(Self {
            index,
            reader,
            fields,
            config,
            stopwords: Stopwords::default(),
        })
    }

    /// Drop these words from the index query; pass the set the index was
    /// built with
    pub fn with_stopwords(mut self, stopwords: Stopwords) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Documents containing every phrase and word of `query`, at most
    /// `max_results` of them, in the index's hit order
    pub fn search(&self, query: &str) -> Result<Vec<SearchResult>, IndexError> {
        let parsed = ParsedQuery::parse(query);
        let query_string = parsed.to_query_string(&self.stopwords);
        let limit = self.config.max_results.min(MAX_RESULTS_CEILING);
        if parsed.is_empty() || query_string.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let mut query_parser = QueryParser::for_index(&self.index, vec![self.fields.content]);
        query_parser.set_conjunction_by_default();
        let index_query = query_parser
            .parse_query(&query_string)
            .map_err(|e| IndexError::MalformedQuery(format!("{}: {}", query_string, e)))?;

        let searcher = self.reader.searcher();
        let top_docs = searcher.search(&index_query, &TopDocs::with_limit(limit))?;
        let hit_count = top_docs.len();

        let snippet_terms = snippet_terms(query, &parsed);
        let mut results = Vec::with_capacity(top_docs.len());
        for (_score, doc_address) in top_docs {
            let doc: TantivyDocument = searcher.doc(doc_address)?;
            let url = doc
                .get_first(self.fields.url)
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string();
            let content = doc
                .get_first(self.fields.content)
                .and_then(|v| v.as_str())
                .unwrap_or("");

            if !parsed.matches(content) {
                debug!("Dropping {}: not a literal match for '{}'", url, query);
                continue;
            }
            if is_query_in_links(content, query) {
                debug!("Dropping {}: '{}' only occurs in links", url, query);
                continue;
            }

            let snippet = self.snippet(content, &snippet_terms);
            results.push(SearchResult { url, snippet });
        }

        debug!(
            "Search for '{}' ({}): {} of {} hits kept",
            query,
            query_string,
            results.len(),
            hit_count
        );
        Ok(results)
    }

    /// First snippet found for any of `terms`, or the sentinel
    fn snippet(&self, content: &str, terms: &[String]) -> String {
        terms
            .iter()
            .map(|term| {
                generate_snippet(
                    content,
                    term,
                    self.config.snippet_window,
                    self.config.max_snippets,
                )
            })
            .find(|s| s != NO_SNIPPET)
            .unwrap_or_else(|| NO_SNIPPET.to_string())
    }
}

/// Candidate snippet terms, most specific first: the query without quotes,
/// each phrase, then each single word
fn snippet_terms(query: &str, parsed: &ParsedQuery) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    let mut push = |term: &str| {
        let term = term.trim();
        if !term.is_empty() && !terms.iter().any(|t| t == term) {
            terms.push(term.to_string());
        }
    };

    push(&query.replace('"', " ").split_whitespace().collect::<Vec<_>>().join(" "));
    for phrase in &parsed.phrases {
        push(phrase);
    }
    for phrase in &parsed.phrases {
        for word in phrase.split_whitespace() {
            push(word);
        }
    }
    for word in &parsed.words {
        push(word);
    }
    terms
}

/// Search the index at `index_dir` with default settings
pub fn search(query: &str, index_dir: &Path) -> Result<Vec<SearchResult>, IndexError> {
    QueryEngine::open(index_dir, SearchConfig::default())?.search(query)
}
