//! Snippet extraction for search results
//!
//! Takes a word window around the first matching word of each matching
//! sentence and highlights the query inside the window.

use regex::{Regex, RegexBuilder};

/// Returned when no sentence contains the query
pub const NO_SNIPPET: &str = "No relevant snippet found.";

/// Words of context on each side of the match
pub const DEFAULT_WORD_WINDOW: usize = 5;

/// Sentences contributing to one snippet
pub const DEFAULT_MAX_SNIPPETS: usize = 2;

const SEPARATOR: &str = " ... ";

/// Build a highlighted snippet of `content` around `query`.
///
/// Returns [`NO_SNIPPET`] when the query is blank or absent from every
/// sentence.
pub fn generate_snippet(
    content: &str,
    query: &str,
    word_window: usize,
    max_snippets: usize,
) -> String {
    let query = query.trim();
    if query.is_empty() || max_snippets == 0 {
        return NO_SNIPPET.to_string();
    }

    let query_lower = query.to_lowercase();
    let highlighter = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .ok();

    let mut snippets = Vec::new();
    for sentence in split_sentences(content) {
        if !sentence.to_lowercase().contains(&query_lower) {
            continue;
        }

        let words: Vec<&str> = sentence.split_whitespace().collect();
        let Some(i) = words
            .iter()
            .position(|w| w.to_lowercase().contains(&query_lower))
        else {
            // the match spans several words
            continue;
        };

        let start = i.saturating_sub(word_window);
        let end = (i + word_window + 1).min(words.len());
        let window: Vec<String> = words[start..end]
            .iter()
            .map(|w| highlight(w, highlighter.as_ref()))
            .collect();
        snippets.push(window.join(" "));

        if snippets.len() >= max_snippets {
            break;
        }
    }

    if snippets.is_empty() {
        NO_SNIPPET.to_string()
    } else {
        snippets.join(SEPARATOR)
    }
}

/// Wrap the first case-insensitive match in `word` with `<mark>` tags
fn highlight(word: &str, highlighter: Option<&Regex>) -> String {
    match highlighter.and_then(|re| re.find(word)) {
        Some(m) => format!(
            "{}<mark>{}</mark>{}",
            &word[..m.start()],
            m.as_str(),
            &word[m.end()..]
        ),
        None => word.to_string(),
    }
}

/// Split on `.`, `!` or `?` followed by whitespace; the punctuation stays
/// with its sentence and the whitespace run is dropped.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if ch.is_whitespace() && matches!(prev, Some('.' | '!' | '?')) {
            sentences.push(&text[start..i]);
            // consume the rest of the whitespace run
            let mut next = i + ch.len_utf8();
            while let Some(&(j, c)) = chars.peek() {
                if !c.is_whitespace() {
                    break;
                }
                next = j + c.len_utf8();
                chars.next();
            }
            start = next;
            prev = None;
            continue;
        }
        prev = Some(ch);
    }
    sentences.push(&text[start..]);

    sentences.retain(|s| !s.is_empty());
    sentences
}
