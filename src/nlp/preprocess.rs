//! Document preprocessing
//!
//! Turns a raw document into [`Sentence`]s: split, segment each sentence,
//! then drop stopwords and punctuation tokens.

use super::splitter::SentenceSplitter;
use super::stopwords::StopwordFilter;
use super::tokenizer::{default_segmenter, Segmenter};
use crate::types::Sentence;
use std::sync::Arc;

/// Splitter, segmenter and stopword filter bundled together
#[derive(Debug, Clone)]
pub struct Preprocessor {
    splitter: SentenceSplitter,
    segmenter: Arc<dyn Segmenter>,
    stopwords: StopwordFilter,
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self {
            splitter: SentenceSplitter::default(),
            segmenter: Arc::from(default_segmenter()),
            stopwords: StopwordFilter::default(),
        }
    }
}

impl Preprocessor {
    /// Create a preprocessor with the default splitter, segmenter and
    /// Chinese stopwords
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the sentence splitter
    pub fn with_splitter(mut self, splitter: SentenceSplitter) -> Self {
        self.splitter = splitter;
        self
    }

    /// Replace the segmenter
    pub fn with_segmenter(mut self, segmenter: impl Segmenter + 'static) -> Self {
        self.segmenter = Arc::new(segmenter);
        self
    }

    /// Replace the stopword filter
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// The stopword filter in use
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Split and tokenize a document; indices are positions in the split
    pub fn process(&self, document: &str) -> Vec<Sentence> {
        self.splitter
            .split(document)
            .into_iter()
            .enumerate()
            .map(|(index, text)| {
                let tokens = self.stopwords.filter(self.segmenter.segment(&text));
                Sentence::new(text, index, tokens)
            })
            .collect()
    }
}
