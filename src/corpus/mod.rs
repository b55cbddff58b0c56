use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Source of documents for indexing. Implementations resolve a document
/// identifier to the document's raw tokens, in order of appearance.
pub trait Corpus {
    fn load_document(&self, document: &str) -> Result<Vec<String>>;
}

/// Corpus backed by plain text files, resolved against a base directory.
pub struct FsCorpus {
    base_dir: PathBuf,
}

impl FsCorpus {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }
}

impl Corpus for FsCorpus {
    fn load_document(&self, document: &str) -> Result<Vec<String>> {
        if document.is_empty() {
            return Err(Error::InvalidInput(
                "empty document identifier".to_string(),
            ));
        }

        read_words(&self.base_dir.join(document), document)
    }
}

fn read_words(path: &Path, identifier: &str) -> Result<Vec<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents
            .split_whitespace()
            .map(ToString::to_string)
            .collect()),
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            Err(Error::NotFound(identifier.to_string()))
        }
        Err(error) => Err(Error::IO(error)),
    }
}

/// Reads the file listing the documents to index, one name per entry. Order
/// is preserved; it determines the indexing order.
pub fn read_document_list(path: &Path) -> Result<Vec<String>> {
    read_words(path, &path.display().to_string())
}

pub fn load_noise_words(path: &Path) -> Result<HashSet<String>> {
    Ok(read_words(path, &path.display().to_string())?
        .into_iter()
        .collect())
}

/// Collects every file under the given directory as a document identifier,
/// relative to the directory. Sorted, so the indexing order is deterministic.
pub fn discover_documents(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(Error::NotFound(dir.display().to_string()));
    }

    let mut documents: Vec<String> = WalkDir::new(dir)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            entry
                .path()
                .strip_prefix(dir)
                .unwrap_or_else(|_| entry.path())
                .display()
                .to_string()
        })
        .collect();

    documents.sort();

    Ok(documents)
}
