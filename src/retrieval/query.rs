//! Query parsing
//!
//! A raw query splits into quoted phrases and the remaining unquoted words.
//! Unbalanced quotes are not an error: a lone `"` stays part of a word.

use regex::Regex;
use std::sync::OnceLock;

use crate::preprocess::Stopwords;

static RE_PHRASE: OnceLock<Regex> = OnceLock::new();

fn phrase_pattern() -> &'static Regex {
    RE_PHRASE.get_or_init(|| Regex::new(r#""(.*?)""#).unwrap())
}

/// A query split into phrases and words, both in appearance order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    pub phrases: Vec<String>,
    pub words: Vec<String>,
}

impl ParsedQuery {
    pub fn parse(query: &str) -> Self {
        let re = phrase_pattern();
        let phrases = re
            .captures_iter(query)
            .map(|caps| caps[1].to_string())
            .collect();
        let words = re
            .replace_all(query, "")
            .split_whitespace()
            .map(str::to_string)
            .collect();
        Self { phrases, words }
    }

    /// Nothing to search for
    pub fn is_empty(&self) -> bool {
        self.phrases.iter().all(|p| p.trim().is_empty()) && self.words.is_empty()
    }

    /// Conjunctive query string for the index's query parser.
    ///
    /// Phrases become quoted phrase clauses and words bare terms, all joined
    /// with `AND`. Characters the parser treats as syntax are replaced by
    /// spaces; a word that splits into several terms becomes a phrase.
    /// Terms in `stopwords` are dropped, matching what the indexer stored.
    /// Blank parts are dropped, so the result is empty when nothing
    /// searchable is left.
    pub fn to_query_string(&self, stopwords: &Stopwords) -> String {
        let mut parts = Vec::with_capacity(self.phrases.len() + self.words.len());

        for phrase in &self.phrases {
            let terms = query_terms(phrase, stopwords);
            if !terms.is_empty() {
                parts.push(format!("\"{}\"", terms.join(" ")));
            }
        }
        for word in &self.words {
            let terms = query_terms(word, stopwords);
            match terms.len() {
                0 => {}
                1 => parts.push(terms[0].clone()),
                _ => parts.push(format!("\"{}\"", terms.join(" "))),
            }
        }

        parts.join(" AND ")
    }

    /// Every phrase and every word occurs in `content`, ignoring case
    pub fn matches(&self, content: &str) -> bool {
        let content = content.to_lowercase();
        self.phrases
            .iter()
            .chain(self.words.iter())
            .all(|part| content.contains(&part.to_lowercase()))
    }
}

/// Lowercased alphanumeric runs of `text` that are not stopwords
fn query_terms(text: &str, stopwords: &Stopwords) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .filter(|t| !stopwords.contains(t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrases_and_words() {
        let q = ParsedQuery::parse(r#""machine learning" deep "neural nets" models"#);
        assert_eq!(q.phrases, vec!["machine learning", "neural nets"]);
        assert_eq!(q.words, vec!["deep", "models"]);
    }

    #[test]
    fn test_plain_words() {
        let q = ParsedQuery::parse("  quantum   optics ");
        assert!(q.phrases.is_empty());
        assert_eq!(q.words, vec!["quantum", "optics"]);
        assert_eq!(q.to_query_string(&Stopwords::none()), "quantum AND optics");
    }

    #[test]
    fn test_query_string_conjunction() {
        let q = ParsedQuery::parse(r#""machine learning" deep"#);
        assert_eq!(q.to_query_string(&Stopwords::none()), r#""machine learning" AND deep"#);
    }

    #[test]
    fn test_unbalanced_quote_stays_in_words() {
        let q = ParsedQuery::parse(r#"machine "learning"#);
        assert!(q.phrases.is_empty());
        assert_eq!(q.words, vec!["machine", "\"learning"]);
        // the quote never reaches the parser
        assert_eq!(q.to_query_string(&Stopwords::none()), "machine AND learning");
        assert!(!q.matches("machine learning"));
    }

    #[test]
    fn test_operators_and_syntax_are_neutralized() {
        let q = ParsedQuery::parse("cats OR dogs e-mail c++");
        assert_eq!(
            q.to_query_string(&Stopwords::none()),
            r#"cats AND or AND dogs AND "e mail" AND c"#
        );

        let q = ParsedQuery::parse("++ ::");
        assert_eq!(q.to_query_string(&Stopwords::none()), "");
        assert!(!q.is_empty());
    }

    #[test]
    fn test_stopwords_are_dropped_from_index_query() {
        let english = Stopwords::english();

        let q = ParsedQuery::parse("the physics");
        assert_eq!(q.to_query_string(&english), "physics");
        assert_eq!(q.to_query_string(&Stopwords::none()), "the AND physics");
        // the literal filter still sees every word
        assert!(q.matches("theory physics department"));

        let q = ParsedQuery::parse(r#""history of the physics" for"#);
        assert_eq!(q.to_query_string(&english), r#""history physics""#);

        let q = ParsedQuery::parse("the and of");
        assert_eq!(q.to_query_string(&english), "");
    }

    #[test]
    fn test_empty_queries() {
        assert!(ParsedQuery::parse("").is_empty());
        assert!(ParsedQuery::parse("   ").is_empty());
        assert!(ParsedQuery::parse(r#""""#).is_empty());
    }

    #[test]
    fn test_matches_is_case_insensitive_substring() {
        let q = ParsedQuery::parse(r#""Machine Learning" DEEP"#);
        assert!(q.matches("deep machine learning research"));
        assert!(!q.matches("machine learning models"));
    }

    #[test]
    fn test_no_tokens_lost() {
        let raw = r#"alpha "beta gamma" delta "epsilon""#;
        let q = ParsedQuery::parse(raw);
        let mut got: Vec<&str> = q
            .phrases
            .iter()
            .chain(q.words.iter())
            .flat_map(|s| s.split_whitespace())
            .collect();
        let mut expected: Vec<&str> = raw
            .split_whitespace()
            .map(|t| t.trim_matches('"'))
            .collect();
        expected.sort();
        got.sort();
        assert_eq!(got, expected);
    }
}
