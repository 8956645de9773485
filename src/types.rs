//! Core types for rapid_summary
//!
//! This module defines the sentence representation shared by both
//! summarization pipelines, plus the summarizer configuration.

use crate::errors::{Result, SummaryError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// The original sentence text, terminal punctuation included
    pub text: String,
    /// Sentence index within the document
    pub index: usize,
    /// Content tokens with stopwords removed
    pub tokens: Vec<String>,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, index: usize, tokens: Vec<String>) -> Self {
        Self {
            text: text.into(),
            index,
            tokens,
        }
    }

    /// Build a sentence from borrowed tokens
    pub fn from_tokens(text: impl Into<String>, index: usize, tokens: &[&str]) -> Self {
        Self::new(text, index, tokens.iter().map(|t| t.to_string()).collect())
    }

    /// Length of the original text in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the sentence has no content tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

// ============================================================================
// Selection policy enums
// ============================================================================

/// Tolerance applied before rounding `count * ratio`, so that products such
/// as `10 * 0.3 = 3.0000000000000004` round to the intended integer.
const ROUNDING_EPSILON: f64 = 1e-9;

/// How the target sentence count `count * ratio` is rounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetRounding {
    /// Round down (`5 * 0.3` selects 1 sentence)
    #[default]
    Floor,
    /// Round up (`5 * 0.3` selects 2 sentences)
    Ceil,
}

impl TargetRounding {
    /// Compute the number of sentences to select, clamped to `count`
    pub fn target(self, count: usize, ratio: f64) -> usize {
        if count == 0 || ratio <= 0.0 {
            return 0;
        }
        let raw = count as f64 * ratio;
        let rounded = match self {
            TargetRounding::Floor => (raw + ROUNDING_EPSILON).floor(),
            TargetRounding::Ceil => (raw - ROUNDING_EPSILON).ceil(),
        };
        (rounded.max(0.0) as usize).min(count)
    }
}

/// How token occurrences become vector weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermWeighting {
    /// Raw term frequency
    #[default]
    Count,
    /// 1 if the term occurs, 0 otherwise
    Presence,
}

/// How a candidate's redundancy against the current summary is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedundancyMode {
    /// Similarity to all selected sentences pooled into one document
    #[default]
    Pooled,
    /// Maximum similarity to any single selected sentence
    Max,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration shared by the MMR and TextRank summarizers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// MMR trade-off (1 = relevance only, 0 = diversity only)
    pub alpha: f64,
    /// Fraction of sentences retained in the summary
    pub ratio: f64,
    /// Damping factor for PageRank (typically 0.85)
    pub damping: f64,
    /// Convergence threshold (stop when L1 delta <= threshold)
    pub convergence_threshold: f64,
    /// Maximum iterations for PageRank convergence
    pub max_iterations: usize,
    /// Rounding rule for the target sentence count
    pub rounding: TargetRounding,
    /// Term weighting used by the similarity engine
    pub weighting: TermWeighting,
    /// Redundancy measure for MMR
    pub redundancy: RedundancyMode,
    /// Sentences with this many characters or fewer are discarded (0 = keep all)
    pub min_sentence_chars: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            ratio: 0.2,
            damping: 0.85,
            convergence_threshold: 1e-4,
            max_iterations: 1000,
            rounding: TargetRounding::Floor,
            weighting: TermWeighting::Count,
            redundancy: RedundancyMode::Pooled,
            min_sentence_chars: 0,
        }
    }
}

impl SummaryConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(SummaryError::invalid_config(format!(
                "alpha must be between 0 and 1, got {}",
                self.alpha
            )));
        }

        if !(0.0..=1.0).contains(&self.ratio) {
            return Err(SummaryError::invalid_config(format!(
                "ratio must be between 0 and 1, got {}",
                self.ratio
            )));
        }

        if !(0.0..=1.0).contains(&self.damping) {
            return Err(SummaryError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(SummaryError::invalid_config("max_iterations must be > 0"));
        }

        if self.convergence_threshold.is_nan() || self.convergence_threshold <= 0.0 {
            return Err(SummaryError::invalid_config(
                "convergence_threshold must be > 0",
            ));
        }

        Ok(())
    }

    /// Target number of sentences for a document of `count` sentences
    pub fn target_count(&self, count: usize) -> usize {
        self.rounding.target(count, self.ratio)
    }

    /// Builder method: set MMR alpha
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Builder method: set retention ratio
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set target rounding
    pub fn with_rounding(mut self, rounding: TargetRounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Builder method: set term weighting
    pub fn with_weighting(mut self, weighting: TermWeighting) -> Self {
        self.weighting = weighting;
        self
    }

    /// Builder method: set MMR redundancy mode
    pub fn with_redundancy(mut self, redundancy: RedundancyMode) -> Self {
        self.redundancy = redundancy;
        self
    }

    /// Builder method: set minimum sentence length in characters
    pub fn with_min_sentence_chars(mut self, min_chars: usize) -> Self {
        self.min_sentence_chars = min_chars;
        self
    }
}
