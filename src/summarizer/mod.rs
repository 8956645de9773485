//! Summarization components
//!
//! Provides extractive summarization with two interchangeable algorithms:
//!
//! - [`MmrSummarizer`]: greedy Maximal Marginal Relevance selection
//! - [`TextRankSummarizer`]: PageRank over the sentence-similarity graph
//!
//! Both implement [`Summarize`], which owns the shared steps: config
//! validation, preprocessing, short-sentence filtering and assembly.

pub mod assembler;
pub mod mmr;
pub mod selector;
pub mod textrank;

pub use assembler::{Summary, SummarySentence, SummarySet};
pub use mmr::MmrSummarizer;
pub use selector::{MmrSelector, SelectedSentence};
pub use textrank::TextRankSummarizer;

use crate::errors::Result;
use crate::nlp::Preprocessor;
use crate::types::{Sentence, SummaryConfig};
use tracing::debug;

/// An extractive summarization algorithm
pub trait Summarize {
    /// Algorithm name used in log spans
    fn name(&self) -> &'static str;

    /// The configuration in effect
    fn config(&self) -> &SummaryConfig;

    /// The preprocessor used by [`Summarize::summarize`]
    fn preprocessor(&self) -> &Preprocessor;

    /// Choose sentences from a non-empty, already filtered slice.
    ///
    /// Positions in the returned set index into `sentences`.
    fn select(&self, sentences: &[Sentence], target: usize) -> Result<SummarySet>;

    /// Summarize prepared sentences.
    ///
    /// Sentences of `min_sentence_chars` characters or fewer are discarded
    /// first; the rest keep their original `index`.
    fn summarize_sentences(&self, sentences: &[Sentence]) -> Result<Summary> {
        let config = self.config();
        config.validate()?;

        let span = tracing::debug_span!("summarize", algorithm = self.name());
        let _guard = span.enter();

        let kept: Vec<Sentence> = sentences
            .iter()
            .filter(|s| s.char_len() > config.min_sentence_chars)
            .cloned()
            .collect();

        let target = config.target_count(kept.len());
        debug!(
            sentences = sentences.len(),
            kept = kept.len(),
            target,
            "selecting sentences"
        );

        if target == 0 {
            return Ok(Summary::default());
        }

        let set = self.select(&kept, target)?;
        Ok(set.assemble(&kept))
    }

    /// Split, tokenize and summarize a raw document
    fn summarize(&self, document: &str) -> Result<Summary> {
        let sentences = self.preprocessor().process(document);
        self.summarize_sentences(&sentences)
    }
}
