//! Keyword extraction pipeline.
//!
//! Runs the lexical analyzer over free text, keeps noun-like tokens,
//! normalizes them through the keyword dictionary, and falls back to raw
//! promotion for unmatched tokens that pass the length and stoplist filters.
//! The result is a deduplicated, lexicographically sorted keyword list, so
//! identical input always produces identical output.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::debug;

use super::dictionary::{KeywordDictionary, StopList};
use super::lexicon::{BasicTagger, LexicalAnalyzer, LexicalClass};

/// Keyword extractor over a lexical-analysis capability.
pub struct KeywordExtractor {
    analyzer: Arc<dyn LexicalAnalyzer>,
    dictionary: KeywordDictionary,
    stoplist: StopList,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    /// Create an extractor with the built-in tagger, dictionary, and stoplist.
    pub fn new() -> Self {
        Self::with_config(
            Arc::new(BasicTagger::new()),
            KeywordDictionary::default(),
            StopList::default(),
        )
    }

    /// Create an extractor with a custom analyzer, dictionary, and stoplist.
    pub fn with_config(
        analyzer: Arc<dyn LexicalAnalyzer>,
        dictionary: KeywordDictionary,
        stoplist: StopList,
    ) -> Self {
        Self {
            analyzer,
            dictionary,
            stoplist,
        }
    }

    /// Extract the keyword set from free text.
    ///
    /// Pure and stateless: no state is carried between calls. Returns the
    /// set rendered as a strictly ascending sorted sequence with no
    /// duplicates. Empty or noun-free input yields an empty Vec.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut keywords = BTreeSet::new();

        for token in self.analyzer.tokens(text) {
            if token.class != LexicalClass::Noun {
                continue;
            }

            if let Some(label) = self.dictionary.resolve(&token.text) {
                keywords.insert(label.to_string());
                continue;
            }

            // Raw promotion: multi-character nouns not on the stoplist.
            if token.text.chars().count() > 1 && !self.stoplist.contains(&token.text) {
                keywords.insert(token.text);
            }
        }

        debug!(count = keywords.len(), "keyword extraction finished");
        keywords.into_iter().collect()
    }
}
