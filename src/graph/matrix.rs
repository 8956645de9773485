//! Dense transition matrices
//!
//! A [`TransitionMatrix`] is a square, row-major `f64` matrix where entry
//! `(i, j)` is the probability of stepping from node `i` to node `j`.
//! Document graphs are small (one node per sentence), so a dense layout
//! keeps the power iteration a straight pass over contiguous rows.

use super::builder::LinkGraph;
use crate::errors::{Result, SummaryError};
use crate::similarity::SentenceIndex;
use rayon::prelude::*;

/// Below this many sentences the similarity rows are built sequentially
const PARALLEL_ROW_THRESHOLD: usize = 64;

/// A square row-major transition matrix
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitionMatrix {
    /// Number of nodes
    n: usize,
    /// Row-major entries, `n * n` long
    data: Vec<f64>,
}

impl TransitionMatrix {
    /// An `n x n` all-zero matrix
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    /// An `n x n` matrix with every entry `1/n`
    pub fn uniform(n: usize) -> Self {
        if n == 0 {
            return Self::default();
        }
        Self {
            n,
            data: vec![1.0 / n as f64; n * n],
        }
    }

    /// Build from explicit rows; every row must have one entry per row
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(SummaryError::invalid_config(format!(
                    "transition matrix must be square: row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            data.extend(row);
        }
        Ok(Self { n, data })
    }

    /// Build the random-surfer matrix of a link graph.
    ///
    /// `A[i][j] = 1 / out_degree(i)` for each link `i -> j`. A dangling node
    /// spreads its mass uniformly: its row is `1/N` everywhere.
    pub fn from_links(graph: &LinkGraph) -> Self {
        let n = graph.node_count();
        let mut matrix = Self::zeros(n);

        for (id, node) in graph.nodes() {
            let row = matrix.row_mut(id as usize);
            if node.is_dangling() {
                row.fill(1.0 / n as f64);
            } else {
                let p = 1.0 / node.out_degree() as f64;
                for &target in &node.targets {
                    row[target as usize] = p;
                }
            }
        }

        matrix
    }

    /// Build the TextRank matrix of a document.
    ///
    /// `S[i][j]` is the similarity of sentences `i` and `j`, with a zero
    /// diagonal. Each row is then divided by its sum; a row summing to zero
    /// (a sentence sharing no terms with any other) stays all-zero.
    pub fn from_similarity(index: &SentenceIndex) -> Self {
        let n = index.len();
        let build_row = |i: usize| -> Vec<f64> {
            let mut row: Vec<f64> = (0..n)
                .map(|j| if i == j { 0.0 } else { index.pair(i, j) })
                .collect();
            let sum: f64 = row.iter().sum();
            if sum > 0.0 {
                for v in &mut row {
                    *v /= sum;
                }
            }
            row
        };

        let rows: Vec<Vec<f64>> = if n < PARALLEL_ROW_THRESHOLD {
            (0..n).map(build_row).collect()
        } else {
            (0..n).into_par_iter().map(build_row).collect()
        };

        Self {
            n,
            data: rows.into_iter().flatten().collect(),
        }
    }

    /// Number of nodes
    pub fn size(&self) -> usize {
        self.n
    }

    /// Check if the matrix is 0 x 0
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Entry `(i, j)`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Row `i`
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.data[i * self.n..(i + 1) * self.n]
    }

    /// Sum of row `i`
    pub fn row_sum(&self, i: usize) -> f64 {
        self.row(i).iter().sum()
    }

    /// Whether every row sums to 1 within `tolerance`
    pub fn is_stochastic(&self, tolerance: f64) -> bool {
        (0..self.n).all(|i| (self.row_sum(i) - 1.0).abs() <= tolerance)
    }

    /// Compute `out = Aᵀ · p`, i.e. `out[j] = Σᵢ A[i][j] · p[i]`
    pub fn transpose_mul(&self, p: &[f64], out: &mut [f64]) {
        out.fill(0.0);
        for (i, &pi) in p.iter().enumerate().take(self.n) {
            if pi == 0.0 {
                continue;
            }
            for (o, &a) in out.iter_mut().zip(self.row(i)) {
                *o += a * pi;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Sentence, TermWeighting};

    #[test]
    fn test_from_links_out_degree() {
        let graph = LinkGraph::from_adjacency([
            ("a", vec!["b", "c"]),
            ("b", vec!["c"]),
            ("c", vec!["a"]),
        ]);
        let m = TransitionMatrix::from_links(&graph);

        assert_eq!(m.size(), 3);
        assert!((m.get(0, 1) - 0.5).abs() < 1e-12);
        assert!((m.get(0, 2) - 0.5).abs() < 1e-12);
        assert_eq!(m.get(0, 0), 0.0);
        assert_eq!(m.get(1, 2), 1.0);
        assert!(m.is_stochastic(1e-12));
    }

    #[test]
    fn test_dangling_row_is_uniform() {
        let empty: Vec<&str> = Vec::new();
        let graph =
            LinkGraph::from_adjacency([("a", vec!["b"]), ("b", vec!["a"]), ("c", empty)]);
        let m = TransitionMatrix::from_links(&graph);

        assert_eq!(m.row(2), &[1.0 / 3.0; 3]);
        assert!(m.is_stochastic(1e-12));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        assert!(TransitionMatrix::from_rows(vec![vec![1.0, 0.0], vec![1.0]]).is_err());
        let m = TransitionMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        assert_eq!(m.get(0, 1), 1.0);
    }

    #[test]
    fn test_similarity_rows_normalized() {
        let sentences = vec![
            Sentence::from_tokens("a", 0, &["技术", "发展"]),
            Sentence::from_tokens("b", 1, &["技术"]),
            Sentence::from_tokens("c", 2, &["发展", "人才"]),
        ];
        let index = SentenceIndex::build(&sentences, TermWeighting::Count);
        let m = TransitionMatrix::from_similarity(&index);

        for i in 0..3 {
            assert_eq!(m.get(i, i), 0.0);
        }
        assert!(m.is_stochastic(1e-12));
    }

    #[test]
    fn test_isolated_sentence_row_stays_zero() {
        let sentences = vec![
            Sentence::from_tokens("a", 0, &["技术"]),
            Sentence::from_tokens("b", 1, &["技术"]),
            Sentence::from_tokens("c", 2, &["人才"]),
        ];
        let index = SentenceIndex::build(&sentences, TermWeighting::Count);
        let m = TransitionMatrix::from_similarity(&index);

        assert_eq!(m.row(2), &[0.0, 0.0, 0.0]);
        assert!(m.row(2).iter().all(|v| !v.is_nan()));
        assert!((m.row_sum(0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_parallel_rows_match_sequential() {
        let terms = ["技术", "发展", "人才", "创新", "产业", "应用", "科技"];
        let sentences: Vec<Sentence> = (0..PARALLEL_ROW_THRESHOLD + 6)
            .map(|i| {
                let tokens = vec![
                    terms[i % terms.len()].to_string(),
                    terms[(i * 3 + 1) % terms.len()].to_string(),
                ];
                Sentence::new(format!("句子{}。", i), i, tokens)
            })
            .collect();
        let index = SentenceIndex::build(&sentences, TermWeighting::Count);
        let m = TransitionMatrix::from_similarity(&index);

        for i in [0, 17, PARALLEL_ROW_THRESHOLD + 5] {
            for j in 0..m.size() {
                let expected = if i == j { 0.0 } else { index.pair(i, j) };
                let sum: f64 = (0..m.size())
                    .filter(|&k| k != i)
                    .map(|k| index.pair(i, k))
                    .sum();
                assert!((m.get(i, j) - expected / sum).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_transpose_mul() {
        let m = TransitionMatrix::from_rows(vec![vec![0.0, 1.0], vec![0.5, 0.5]]).unwrap();
        let mut out = vec![0.0; 2];
        m.transpose_mul(&[0.4, 0.6], &mut out);

        assert!((out[0] - 0.3).abs() < 1e-12);
        assert!((out[1] - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_uniform_matrix() {
        let m = TransitionMatrix::uniform(4);
        assert!(m.is_stochastic(1e-12));
        assert!(TransitionMatrix::uniform(0).is_empty());
    }
}
