//! MMR summarizer
//!
//! Scores every sentence by its similarity to the rest of the document and
//! greedily trades that relevance against redundancy with the summary built
//! so far.

use super::assembler::SummarySet;
use super::selector::MmrSelector;
use super::Summarize;
use crate::errors::Result;
use crate::nlp::Preprocessor;
use crate::similarity::SentenceIndex;
use crate::types::{Sentence, SummaryConfig};

/// Extractive summarizer using Maximal Marginal Relevance
#[derive(Debug, Clone, Default)]
pub struct MmrSummarizer {
    config: SummaryConfig,
    preprocessor: Preprocessor,
}

impl MmrSummarizer {
    /// Create a summarizer with the default preprocessor
    pub fn new(config: SummaryConfig) -> Self {
        Self {
            config,
            preprocessor: Preprocessor::default(),
        }
    }

    /// Replace the preprocessor
    pub fn with_preprocessor(mut self, preprocessor: Preprocessor) -> Self {
        self.preprocessor = preprocessor;
        self
    }

    fn selector(&self) -> MmrSelector {
        MmrSelector::new()
            .with_alpha(self.config.alpha)
            .with_redundancy(self.config.redundancy)
    }
}

impl Summarize for MmrSummarizer {
    fn name(&self) -> &'static str {
        "mmr"
    }

    fn config(&self) -> &SummaryConfig {
        &self.config
    }

    fn preprocessor(&self) -> &Preprocessor {
        &self.preprocessor
    }

    fn select(&self, sentences: &[Sentence], target: usize) -> Result<SummarySet> {
        let index = SentenceIndex::build(sentences, self.config.weighting);

        let mut set = SummarySet::with_capacity(target);
        for pick in self.selector().select(&index, target) {
            set.insert(pick.position, pick.mmr_score);
        }
        Ok(set)
    }
}
