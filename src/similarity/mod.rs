//! Sentence similarity
//!
//! Cosine similarity over term-frequency vectors, in two forms:
//!
//! - [`sentence_similarity`]: one sentence against another (TextRank edges)
//! - [`document_similarity`]: one sentence against a pooled set of sentences
//!   (MMR relevance and redundancy)
//!
//! Both build a throwaway vocabulary from the tokens being compared. The
//! pipelines use [`SentenceIndex`] instead, which vectorizes a whole
//! document once and yields the same scores.

pub mod index;
pub mod vector;
pub mod vocabulary;

pub use index::SentenceIndex;
pub use vector::TermVector;
pub use vocabulary::Vocabulary;

use crate::types::TermWeighting;

/// Cosine similarity between two token sequences.
///
/// Returns 0 when either sequence is empty.
pub fn sentence_similarity<S: AsRef<str>>(a: &[S], b: &[S], weighting: TermWeighting) -> f64 {
    let mut vocab = Vocabulary::with_capacity(a.len() + b.len());
    let va = vocab.vectorize(a);
    let vb = vocab.vectorize(b);
    va.cosine_similarity(&vb, weighting)
}

/// Cosine similarity between a sentence and the concatenation of `docs`.
///
/// Returns exactly 0 when `docs` is empty.
pub fn document_similarity<S: AsRef<str>>(
    sentence: &[S],
    docs: &[&[S]],
    weighting: TermWeighting,
) -> f64 {
    if docs.is_empty() {
        return 0.0;
    }

    let mut vocab = Vocabulary::new();
    let query = vocab.vectorize(sentence);
    let mut pooled = TermVector::new();
    for doc in docs {
        pooled.add_assign(&vocab.vectorize(doc));
    }
    query.cosine_similarity(&pooled, weighting)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sentence;

    #[test]
    fn test_sentence_similarity_self_is_one() {
        let a = ["人工智能", "技术", "技术"];
        let sim = sentence_similarity(&a, &a, TermWeighting::Count);
        assert!((sim - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sentence_similarity_symmetric() {
        let a = ["人工智能", "技术", "发展"];
        let b = ["技术", "创新", "发展", "发展"];
        assert_eq!(
            sentence_similarity(&a, &b, TermWeighting::Count),
            sentence_similarity(&b, &a, TermWeighting::Count)
        );
    }

    #[test]
    fn test_sentence_similarity_empty_is_zero() {
        let empty: [&str; 0] = [];
        let b = ["技术"];
        let sim = sentence_similarity(&empty, &b, TermWeighting::Count);
        assert_eq!(sim, 0.0);
        assert!(!sim.is_nan());
    }

    #[test]
    fn test_document_similarity_empty_doc_is_zero() {
        let s = ["技术"];
        let docs: [&[&str]; 0] = [];
        assert_eq!(document_similarity(&s, &docs, TermWeighting::Count), 0.0);
    }

    #[test]
    fn test_document_similarity_pools_counts() {
        // pooled doc: 技术 x2, 创新 x1 ; query: 技术 x1 -> 2 / sqrt(5)
        let s = ["技术"];
        let d1: &[&str] = &["技术", "创新"];
        let d2: &[&str] = &["技术"];
        let sim = document_similarity(&s, &[d1, d2], TermWeighting::Count);
        assert!((sim - 2.0 / 5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_index_matches_ad_hoc_similarity() {
        let sentences = vec![
            Sentence::from_tokens("a", 0, &["人工智能", "技术", "发展"]),
            Sentence::from_tokens("b", 1, &["技术", "创新"]),
            Sentence::from_tokens("c", 2, &["发展", "发展", "人才"]),
        ];
        let index = SentenceIndex::build(&sentences, TermWeighting::Count);

        for i in 0..sentences.len() {
            for j in 0..sentences.len() {
                let direct = sentence_similarity(
                    &sentences[i].tokens,
                    &sentences[j].tokens,
                    TermWeighting::Count,
                );
                assert!((index.pair(i, j) - direct).abs() < 1e-12);
            }

            let others: Vec<&[String]> = sentences
                .iter()
                .filter(|s| s.index != i)
                .map(|s| s.tokens.as_slice())
                .collect();
            let direct = document_similarity(&sentences[i].tokens, &others, TermWeighting::Count);
            assert!((index.relevance(i) - direct).abs() < 1e-12);
        }
    }
}
