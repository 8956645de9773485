//! MMR-based sentence selection for summarization
//!
//! Implements Maximal Marginal Relevance (MMR) for selecting
//! diverse yet relevant sentences for extractive summarization.
//!
//! Each round scores every unselected sentence as
//!
//! ```text
//! alpha * relevance(s) - (1 - alpha) * redundancy(s, selected)
//! ```
//!
//! and keeps the strictly highest, so ties go to the lowest position.

use super::assembler::SummarySet;
use crate::similarity::{SentenceIndex, TermVector};
use crate::types::RedundancyMode;
use tracing::trace;

/// A sentence picked by the selector
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedSentence {
    /// Position in the indexed sentence slice
    pub position: usize,
    /// Similarity to the rest of the document
    pub relevance: f64,
    /// Similarity to the summary at the time of the pick
    pub redundancy: f64,
    /// MMR score when selected
    pub mmr_score: f64,
}

/// MMR-based sentence selector
#[derive(Debug, Clone)]
pub struct MmrSelector {
    /// Relevance/diversity trade-off (0 = diversity only, 1 = relevance only)
    pub alpha: f64,
    /// How redundancy against the summary is measured
    pub redundancy: RedundancyMode,
}

impl Default for MmrSelector {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            redundancy: RedundancyMode::Pooled,
        }
    }
}

impl MmrSelector {
    /// Create a new selector with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set alpha (relevance vs diversity tradeoff)
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Set the redundancy mode
    pub fn with_redundancy(mut self, redundancy: RedundancyMode) -> Self {
        self.redundancy = redundancy;
        self
    }

    /// Select up to `target` sentences, returned in pick order
    pub fn select(&self, index: &SentenceIndex, target: usize) -> Vec<SelectedSentence> {
        let n = index.len();
        let target = target.min(n);

        let relevance: Vec<f64> = (0..n).map(|i| index.relevance(i)).collect();

        let mut set = SummarySet::with_capacity(target);
        let mut picks = Vec::with_capacity(target);
        let mut pooled = TermVector::new();

        while set.len() < target {
            let mut best: Option<SelectedSentence> = None;

            for i in 0..n {
                if set.contains(i) {
                    continue;
                }

                let redundancy = self.redundancy_of(index, i, &set, &pooled);
                let mmr = self.alpha * relevance[i] - (1.0 - self.alpha) * redundancy;

                if best.as_ref().map_or(true, |b| mmr > b.mmr_score) {
                    best = Some(SelectedSentence {
                        position: i,
                        relevance: relevance[i],
                        redundancy,
                        mmr_score: mmr,
                    });
                }
            }

            let Some(pick) = best else {
                break;
            };

            trace!(
                position = pick.position,
                relevance = pick.relevance,
                redundancy = pick.redundancy,
                mmr = pick.mmr_score,
                "mmr pick"
            );

            set.insert(pick.position, pick.mmr_score);
            if self.redundancy == RedundancyMode::Pooled {
                pooled.add_assign(index.vector(pick.position));
            }
            picks.push(pick);
        }

        picks
    }

    fn redundancy_of(
        &self,
        index: &SentenceIndex,
        i: usize,
        set: &SummarySet,
        pooled: &TermVector,
    ) -> f64 {
        if set.is_empty() {
            return 0.0;
        }
        match self.redundancy {
            RedundancyMode::Pooled => index.against(i, pooled),
            RedundancyMode::Max => set
                .positions()
                .map(|j| index.pair(i, j))
                .fold(0.0, f64::max),
        }
    }
}
