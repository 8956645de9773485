//! Precomputed term vectors for one document
//!
//! The vocabulary is built once per summarization call and every sentence
//! is vectorized against it; all pairwise and sentence-to-document
//! comparisons then reuse these integer-keyed vectors.

use super::vector::TermVector;
use super::vocabulary::Vocabulary;
use crate::types::{Sentence, TermWeighting};

/// Term vectors for every sentence of a document
#[derive(Debug, Clone)]
pub struct SentenceIndex {
    vocabulary: Vocabulary,
    vectors: Vec<TermVector>,
    /// Sum of all sentence vectors
    total: TermVector,
    weighting: TermWeighting,
}

impl SentenceIndex {
    /// Vectorize all sentences against a shared vocabulary
    pub fn build(sentences: &[Sentence], weighting: TermWeighting) -> Self {
        let capacity = sentences.iter().map(|s| s.tokens.len()).sum();
        let mut vocabulary = Vocabulary::with_capacity(capacity);
        let mut total = TermVector::new();

        let vectors: Vec<TermVector> = sentences
            .iter()
            .map(|s| {
                let v = vocabulary.vectorize(&s.tokens);
                total.add_assign(&v);
                v
            })
            .collect();

        Self {
            vocabulary,
            vectors,
            total,
            weighting,
        }
    }

    /// Number of indexed sentences
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Check if the index holds no sentences
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// The shared vocabulary
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The weighting applied by every comparison
    pub fn weighting(&self) -> TermWeighting {
        self.weighting
    }

    /// Term vector of sentence `i`
    pub fn vector(&self, i: usize) -> &TermVector {
        &self.vectors[i]
    }

    /// Pairwise similarity between sentences `i` and `j`
    pub fn pair(&self, i: usize, j: usize) -> f64 {
        self.vectors[i].cosine_similarity(&self.vectors[j], self.weighting)
    }

    /// Similarity of sentence `i` to the concatenation of all other sentences.
    ///
    /// Returns 0 for a single-sentence document, where the other side is empty.
    pub fn relevance(&self, i: usize) -> f64 {
        if self.vectors.len() < 2 {
            return 0.0;
        }
        let rest = self.total.subtract(&self.vectors[i]);
        self.vectors[i].cosine_similarity(&rest, self.weighting)
    }

    /// Similarity of sentence `i` to a pooled document vector
    pub fn against(&self, i: usize, pooled: &TermVector) -> f64 {
        self.vectors[i].cosine_similarity(pooled, self.weighting)
    }
}
