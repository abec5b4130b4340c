//! On-disk tantivy stores
//!
//! Two stores share the same open/create rules: the document index
//! (`url`, `content`) and the autocomplete word store (`word`).

use std::path::Path;
use tantivy::{
    directory::MmapDirectory,
    schema::{Field, Schema, STORED, STRING, TEXT},
    Index, TantivyError,
};
use tracing::warn;

use super::error::IndexError;

/// Marker file tantivy writes on the first commit
const META_FILE: &str = "meta.json";

/// Fields of the document index
#[derive(Debug, Clone, Copy)]
pub struct DocumentFields {
    /// Unique key, indexed untokenized
    pub url: Field,
    /// Preprocessed page text
    pub content: Field,
}

impl DocumentFields {
    pub fn schema() -> (Schema, Self) {
        let mut schema_builder = Schema::builder();
        let url = schema_builder.add_text_field("url", STRING | STORED);
        let content = schema_builder.add_text_field("content", TEXT | STORED);
        (schema_builder.build(), Self { url, content })
    }

    /// Resolve the fields of an opened index
    pub fn from_index(index: &Index) -> Result<Self, IndexError> {
        let schema = index.schema();
        Ok(Self {
            url: schema.get_field("url")?,
            content: schema.get_field("content")?,
        })
    }
}

/// Fields of the autocomplete store
#[derive(Debug, Clone, Copy)]
pub struct WordFields {
    pub word: Field,
}

impl WordFields {
    pub fn schema() -> (Schema, Self) {
        let mut schema_builder = Schema::builder();
        let word = schema_builder.add_text_field("word", STRING | STORED);
        (schema_builder.build(), Self { word })
    }

    pub fn from_index(index: &Index) -> Result<Self, IndexError> {
        Ok(Self {
            word: index.schema().get_field("word")?,
        })
    }
}

/// True once a store has been committed at `dir`
pub fn exists(dir: &Path) -> bool {
    dir.join(META_FILE).is_file()
}

/// Open a committed store, reporting a missing one as [`IndexError::Absent`]
pub fn open_existing(dir: &Path) -> Result<Index, IndexError> {
    if !exists(dir) {
        return Err(IndexError::Absent(dir.to_path_buf()));
    }
    let directory = MmapDirectory::open(dir)?;
    Ok(Index::open(directory)?)
}

/// Open the store at `dir`, creating the directory and index if needed.
///
/// Callers that want overwrite semantics delete all documents through the
/// writer before committing; the old corpus stays readable until then. A
/// store with a different schema cannot be reused and is replaced outright.
pub fn create_or_open(dir: &Path, schema: Schema) -> Result<Index, IndexError> {
    std::fs::create_dir_all(dir)?;
    let directory = MmapDirectory::open(dir)?;
    match Index::open_or_create(directory, schema.clone()) {
        Ok(index) => Ok(index),
        Err(TantivyError::SchemaError(msg)) => {
            warn!("Replacing store at {}: {}", dir.display(), msg);
            std::fs::remove_dir_all(dir)?;
            std::fs::create_dir_all(dir)?;
            Ok(Index::create_in_dir(dir, schema)?)
        }
        Err(e) => Err(e.into()),
    }
}
