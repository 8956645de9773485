//! Per-document term interning
//!
//! Stores each distinct token once and hands out dense `u32` ids, so term
//! vectors can be compared by integer keys instead of strings.

use super::vector::TermVector;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// A pool of interned terms
#[derive(Debug, Default, Clone)]
pub struct Vocabulary {
    /// Maps terms to their ids
    term_to_id: FxHashMap<Arc<str>, u32>,
    /// Maps ids back to terms
    id_to_term: Vec<Arc<str>>,
}

impl Vocabulary {
    /// Create a new empty vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a vocabulary with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            term_to_id: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            id_to_term: Vec::with_capacity(capacity),
        }
    }

    /// Intern a term, returning its id
    pub fn intern(&mut self, term: &str) -> u32 {
        if let Some(&id) = self.term_to_id.get(term) {
            return id;
        }

        let id = self.id_to_term.len() as u32;
        let arc: Arc<str> = term.into();
        self.term_to_id.insert(arc.clone(), id);
        self.id_to_term.push(arc);
        id
    }

    /// Look up the id of a term without inserting it
    pub fn id(&self, term: &str) -> Option<u32> {
        self.term_to_id.get(term).copied()
    }

    /// Get a term by its id
    pub fn term(&self, id: u32) -> Option<&str> {
        self.id_to_term.get(id as usize).map(|s| s.as_ref())
    }

    /// Intern every token and return the resulting count vector
    pub fn vectorize<S: AsRef<str>>(&mut self, tokens: &[S]) -> TermVector {
        let ids: Vec<u32> = tokens.iter().map(|t| self.intern(t.as_ref())).collect();
        TermVector::from_ids(ids)
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.id_to_term.len()
    }

    /// Check if the vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.id_to_term.is_empty()
    }
}
