//! Plain-text crawl dump
//!
//! One record per page: `URL: <url>`, a blank line, `Content:` followed by
//! the page text, then an 80-character separator line and a blank line.
//! Extracted content never contains blank lines, so the separator followed
//! by a blank line always ends a record.

use std::io::{self, Write};
use std::path::Path;

use crate::types::Page;

const SEPARATOR_WIDTH: usize = 80;

/// Write every page as one dump record
pub fn write_dump<W: Write>(mut out: W, pages: &[Page]) -> io::Result<()> {
    let separator = "-".repeat(SEPARATOR_WIDTH);
    for page in pages {
        write!(out, "URL: {}\n\n", page.url)?;
        write!(out, "Content:\n{}\n", page.content)?;
        write!(out, "{}\n\n", separator)?;
    }
    out.flush()
}

/// Write the dump to `path`, creating parent directories as needed
pub fn write_dump_file(path: &Path, pages: &[Page]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = std::fs::File::create(path)?;
    write_dump(io::BufWriter::new(file), pages)
}

/// Parse a dump back into pages
pub fn parse_dump(text: &str) -> io::Result<Vec<Page>> {
    let terminator = format!("{}\n\n", "-".repeat(SEPARATOR_WIDTH));
    let mut pages = Vec::new();

    for (i, record) in text.split(terminator.as_str()).enumerate() {
        if record.trim().is_empty() {
            continue;
        }
        let parsed = record
            .strip_prefix("URL: ")
            .and_then(|rest| rest.split_once("\n\nContent:\n"))
            .map(|(url, content)| Page::new(url, content.strip_suffix('\n').unwrap_or(content)));

        match parsed {
            Some(page) => pages.push(page),
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("Malformed crawl dump record {}", i + 1),
                ))
            }
        }
    }

    Ok(pages)
}

/// Read and parse the dump at `path`
pub fn read_dump_file(path: &Path) -> io::Result<Vec<Page>> {
    parse_dump(&std::fs::read_to_string(path)?)
}
