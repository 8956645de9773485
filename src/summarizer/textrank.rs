//! TextRank summarizer
//!
//! Sentences are nodes of a graph whose edges are pairwise similarities.
//! PageRank over the row-normalized graph scores each sentence; the top
//! `target` sentences form the summary.

use super::assembler::SummarySet;
use super::Summarize;
use crate::errors::Result;
use crate::graph::TransitionMatrix;
use crate::nlp::Preprocessor;
use crate::pagerank::StandardPageRank;
use crate::similarity::SentenceIndex;
use crate::types::{Sentence, SummaryConfig};
use tracing::debug;

/// Extractive summarizer ranking sentences with PageRank
#[derive(Debug, Clone, Default)]
pub struct TextRankSummarizer {
    config: SummaryConfig,
    preprocessor: Preprocessor,
}

impl TextRankSummarizer {
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

    fn pagerank(&self) -> StandardPageRank {
        StandardPageRank::new()
            .with_damping(self.config.damping)
            .with_max_iterations(self.config.max_iterations)
            .with_threshold(self.config.convergence_threshold)
    }
}

impl Summarize for TextRankSummarizer {
    fn name(&self) -> &'static str {
        "textrank"
    }

    fn config(&self) -> &SummaryConfig {
        &self.config
    }

    fn preprocessor(&self) -> &Preprocessor {
        &self.preprocessor
    }

    fn select(&self, sentences: &[Sentence], target: usize) -> Result<SummarySet> {
        let index = SentenceIndex::build(sentences, self.config.weighting);
        let matrix = TransitionMatrix::from_similarity(&index);
        let result = self.pagerank().solve(&matrix)?;

        debug!(
            iterations = result.iterations,
            delta = result.delta,
            "ranked sentences"
        );

        let mut set = SummarySet::with_capacity(target);
        for (position, score) in result.top_n(target) {
            set.insert(position, score);
        }
        Ok(set)
    }
}
