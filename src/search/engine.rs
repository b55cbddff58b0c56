use std::collections::HashSet;

use log::{debug, info};

use crate::{
    corpus::Corpus,
    error::Result,
    index::{DocumentKeywords, KeywordIndex, Occurrence},
    tokenizer::Tokenizer,
};

/// One search engine instance: the noise-word-aware tokenizer and the global
/// keyword index. Single writer while indexing; read-only for queries once
/// `build_index` has returned.
pub struct SearchEngine {
    tokenizer: Tokenizer,
    index: KeywordIndex,
}

impl SearchEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(HashSet::new()),
            index: KeywordIndex::new(),
        }
    }

    #[must_use]
    pub const fn index(&self) -> &KeywordIndex {
        &self.index
    }

    /// Scans one document and counts its keywords into a fresh local map.
    /// Tokens that fail normalization contribute nothing. Nothing is merged
    /// into the index if the document cannot be loaded.
    pub fn load_keywords_from_document(
        &self,
        corpus: &impl Corpus,
        document: &str,
    ) -> Result<DocumentKeywords> {
        let tokens = corpus.load_document(document)?;

        let mut keywords = DocumentKeywords::new();
        for token in tokens {
            if let Some(keyword) = self.tokenizer.keyword(&token) {
                keywords
                    .entry(keyword)
                    .and_modify(|occurrence| occurrence.frequency += 1)
                    .or_insert_with(|| Occurrence::new(document.to_string(), 1));
            }
        }

        Ok(keywords)
    }

    /// Indexes all keywords of the given documents, strictly in the given
    /// order. The order decides which document ranks first when frequencies
    /// tie. The first document that fails to load aborts the pass; callers
    /// should discard the engine on error.
    pub fn build_index(
        &mut self,
        corpus: &impl Corpus,
        documents: &[String],
        noise_words: HashSet<String>,
    ) -> Result<()> {
        self.tokenizer = Tokenizer::new(noise_words);
        self.index = KeywordIndex::new();

        for document in documents {
            let keywords = self.load_keywords_from_document(corpus, document)?;
            debug!("{document}: {} distinct keywords", keywords.len());
            self.index.merge_keywords(keywords);
        }

        info!(
            "Indexed {} documents, {} distinct keywords",
            documents.len(),
            self.index.len()
        );

        Ok(())
    }

    #[must_use]
    pub fn top_search(&self, kw1: &str, kw2: &str) -> Vec<String> {
        self.index.top_search(kw1, kw2)
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}
