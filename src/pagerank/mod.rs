//! PageRank algorithms
//!
//! This module provides the power-iteration solver shared by the TextRank
//! summarizer and explicit-link graphs.

pub mod standard;

pub use standard::StandardPageRank;

use crate::errors::Result;
use crate::graph::{LinkGraph, TransitionMatrix};

/// Result of a PageRank computation
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta
    pub delta: f64,
    /// Whether the algorithm converged
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Node ids ordered by descending score; equal scores keep ascending id order
    pub fn ranking(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.scores.len()).collect();
        order.sort_by(|&a, &b| self.scores[b].total_cmp(&self.scores[a]));
        order
    }

    /// Get top N nodes by score
    pub fn top_n(&self, n: usize) -> Vec<(usize, f64)> {
        self.ranking()
            .into_iter()
            .take(n)
            .map(|i| (i, self.scores[i]))
            .collect()
    }

    /// Get the score for a specific node
    pub fn score(&self, node: usize) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }
}

/// Rank the nodes of a link graph, highest score first
pub fn rank_links(graph: &LinkGraph, pagerank: &StandardPageRank) -> Result<Vec<(String, f64)>> {
    let matrix = TransitionMatrix::from_links(graph);
    let result = pagerank.solve(&matrix)?;

    Ok(result
        .top_n(result.scores.len())
        .into_iter()
        .filter_map(|(id, score)| graph.get_name(id as u32).map(|name| (name.to_string(), score)))
        .collect())
}
