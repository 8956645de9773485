//! Summary assembly
//!
//! Selected sentences are collected in a [`SummarySet`] in pick order, then
//! emitted in document order.

use crate::types::Sentence;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A sentence included in a summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarySentence {
    /// Sentence index within the document
    pub index: usize,
    /// Original sentence text
    pub text: String,
    /// Score the sentence was selected with
    pub score: f64,
}

/// An extractive summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentence texts concatenated in document order
    pub text: String,
    /// Selected sentences in document order
    pub sentences: Vec<SummarySentence>,
}

impl Summary {
    /// Number of selected sentences
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Check if nothing was selected
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Selected sentence indices in document order
    pub fn indices(&self) -> Vec<usize> {
        self.sentences.iter().map(|s| s.index).collect()
    }
}

/// Positions selected so far, without duplicates
#[derive(Debug, Clone, Default)]
pub struct SummarySet {
    /// (position, score) in pick order
    picks: Vec<(usize, f64)>,
    seen: FxHashSet<usize>,
}

impl SummarySet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set with room for `capacity` picks
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            picks: Vec::with_capacity(capacity),
            seen: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Add a position; returns false if it was already selected
    pub fn insert(&mut self, position: usize, score: f64) -> bool {
        if !self.seen.insert(position) {
            return false;
        }
        self.picks.push((position, score));
        true
    }

    /// Check if a position is selected
    pub fn contains(&self, position: usize) -> bool {
        self.seen.contains(&position)
    }

    /// Number of selected positions
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Selected positions in pick order
    pub fn positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.picks.iter().map(|&(p, _)| p)
    }

    /// Emit the selected `sentences` (by position) ordered by
    /// [`Sentence::index`], texts joined with no separator
    pub fn assemble(&self, sentences: &[Sentence]) -> Summary {
        let mut selected: Vec<SummarySentence> = self
            .picks
            .iter()
            .filter_map(|&(position, score)| {
                sentences.get(position).map(|s| SummarySentence {
                    index: s.index,
                    text: s.text.clone(),
                    score,
                })
            })
            .collect();
        selected.sort_by_key(|s| s.index);

        let text = selected.iter().map(|s| s.text.as_str()).collect();

        Summary {
            text,
            sentences: selected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences() -> Vec<Sentence> {
        ["甲。", "乙。", "丙。", "丁。"]
            .iter()
            .enumerate()
            .map(|(i, t)| Sentence::new(*t, i, vec![]))
            .collect()
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut set = SummarySet::new();
        assert!(set.insert(2, 0.5));
        assert!(!set.insert(2, 0.9));
        assert_eq!(set.len(), 1);
        assert!(set.contains(2));
        assert!(!set.contains(0));
    }

    #[test]
    fn test_assemble_in_document_order() {
        let mut set = SummarySet::new();
        set.insert(3, 0.9);
        set.insert(0, 0.4);
        set.insert(2, 0.7);

        assert_eq!(set.positions().collect::<Vec<_>>(), vec![3, 0, 2]);

        let summary = set.assemble(&sentences());
        assert_eq!(summary.text, "甲。丙。丁。");
        assert_eq!(summary.indices(), vec![0, 2, 3]);
        assert_eq!(summary.sentences[2].score, 0.9);
    }

    #[test]
    fn test_assemble_uses_sentence_index() {
        // Filtered sentences keep their document index
        let kept = vec![
            Sentence::new("长句子一。", 1, vec![]),
            Sentence::new("长句子二。", 4, vec![]),
        ];
        let mut set = SummarySet::new();
        set.insert(1, 1.0);
        set.insert(0, 1.0);

        let summary = set.assemble(&kept);
        assert_eq!(summary.indices(), vec![1, 4]);
        assert_eq!(summary.text, "长句子一。长句子二。");
    }

    #[test]
    fn test_empty_set() {
        let summary = SummarySet::new().assemble(&sentences());
        assert!(summary.is_empty());
        assert_eq!(summary.text, "");
    }
}
