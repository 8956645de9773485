//! Standard PageRank algorithm
//!
//! Damped power iteration over a [`TransitionMatrix`]:
//!
//! ```text
//! P₀    = 1/N
//! Pₖ₊₁  = (1 - d)/N + d · Aᵀ Pₖ
//! stop when Σ|Pₖ₊₁ - Pₖ| <= threshold
//! ```
//!
//! The iterate is returned as-is, not renormalized, so rows of `A` that sum
//! to less than one (isolated sentences) leak mass exactly as the formula
//! says.

use super::PageRankResult;
use crate::errors::{Result, SummaryError};
use crate::graph::TransitionMatrix;
use tracing::{debug, warn};

/// Standard PageRank implementation
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold on the L1 delta
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 1000,
            threshold: 1e-4,
        }
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run PageRank on a transition matrix
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    pub fn run(&self, matrix: &TransitionMatrix) -> PageRankResult {
        let n = matrix.size();
        if n == 0 {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }

        let mut scores = vec![1.0 / n as f64; n];
        let mut new_scores = vec![0.0; n];

        let teleport = (1.0 - self.damping) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations {
            iterations += 1;

            matrix.transpose_mul(&scores, &mut new_scores);
            for score in &mut new_scores {
                *score = teleport + self.damping * *score;
            }

            // Convergence delta (L1 norm)
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut new_scores);

            if delta <= self.threshold {
                break;
            }
        }

        let converged = delta <= self.threshold;
        if converged {
            debug!(nodes = n, iterations, delta, "pagerank converged");
        } else {
            warn!(
                nodes = n,
                iterations, delta, "pagerank hit iteration cap before converging"
            );
        }

        PageRankResult::new(scores, iterations, delta, converged)
    }

    /// Run PageRank, failing if it does not converge within `max_iterations`
    pub fn solve(&self, matrix: &TransitionMatrix) -> Result<PageRankResult> {
        let result = self.run(matrix);
        if result.converged {
            Ok(result)
        } else {
            Err(SummaryError::convergence_failure(
                result.iterations,
                result.delta,
            ))
        }
    }
}
