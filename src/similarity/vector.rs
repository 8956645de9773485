//! Sparse term-frequency vectors
//!
//! Vectors store raw term counts keyed by vocabulary id, sorted by id.
//! Weighting (count or presence) is applied at comparison time so that
//! pooled vectors can be built by plain addition.

use crate::types::TermWeighting;

/// A sparse term-count vector, entries sorted by term id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    /// Non-zero dimensions: (term id, count), strictly increasing ids
    entries: Vec<(u32, f64)>,
}

impl TermVector {
    /// Create a new empty vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vector by counting term ids
    pub fn from_ids(ids: impl IntoIterator<Item = u32>) -> Self {
        let mut ids: Vec<u32> = ids.into_iter().collect();
        ids.sort_unstable();

        let mut entries: Vec<(u32, f64)> = Vec::with_capacity(ids.len());
        for id in ids {
            match entries.last_mut() {
                Some((last, count)) if *last == id => *count += 1.0,
                _ => entries.push((id, 1.0)),
            }
        }
        Self { entries }
    }

    /// Iterate over (term id, count)
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Count for a term id (0 when absent)
    pub fn get(&self, id: u32) -> f64 {
        self.entries
            .binary_search_by_key(&id, |&(k, _)| k)
            .map(|i| self.entries[i].1)
            .unwrap_or(0.0)
    }

    /// Number of non-zero dimensions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the vector is all-zero
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add another vector's counts into this one (pooling)
    pub fn add_assign(&mut self, other: &TermVector) {
        self.entries = merge(&self.entries, &other.entries, |a, b| a + b);
    }

    /// Return `self - other`, dropping dimensions that reach zero
    pub fn subtract(&self, other: &TermVector) -> TermVector {
        TermVector {
            entries: merge(&self.entries, &other.entries, |a, b| a - b),
        }
    }

    /// L2 norm under the given weighting
    pub fn norm(&self, weighting: TermWeighting) -> f64 {
        self.entries
            .iter()
            .map(|&(_, c)| {
                let w = weight(c, weighting);
                w * w
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Dot product under the given weighting
    pub fn dot(&self, other: &TermVector, weighting: TermWeighting) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut dot = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_id, a) = self.entries[i];
            let (b_id, b) = other.entries[j];
            match a_id.cmp(&b_id) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    dot += weight(a, weighting) * weight(b, weighting);
                    i += 1;
                    j += 1;
                }
            }
        }
        dot
    }

    /// Cosine similarity; 0 when either side is all-zero
    pub fn cosine_similarity(&self, other: &TermVector, weighting: TermWeighting) -> f64 {
        let denom = self.norm(weighting) * other.norm(weighting);
        if denom == 0.0 {
            return 0.0;
        }
        (self.dot(other, weighting) / denom).clamp(0.0, 1.0)
    }
}

fn weight(count: f64, weighting: TermWeighting) -> f64 {
    match weighting {
        TermWeighting::Count => count,
        TermWeighting::Presence => {
            if count > 0.0 {
                1.0
            } else {
                0.0
            }
        }
    }
}

/// Merge two sorted sparse vectors, combining shared ids with `op`.
/// Ids present on one side only are combined with an implicit 0.
fn merge(a: &[(u32, f64)], b: &[(u32, f64)], op: impl Fn(f64, f64) -> f64) -> Vec<(u32, f64)> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    loop {
        let (id, value) = match (a.get(i), b.get(j)) {
            (Some(&(a_id, x)), Some(&(b_id, y))) => match a_id.cmp(&b_id) {
                std::cmp::Ordering::Less => {
                    i += 1;
                    (a_id, op(x, 0.0))
                }
                std::cmp::Ordering::Greater => {
                    j += 1;
                    (b_id, op(0.0, y))
                }
                std::cmp::Ordering::Equal => {
                    i += 1;
                    j += 1;
                    (a_id, op(x, y))
                }
            },
            (Some(&(a_id, x)), None) => {
                i += 1;
                (a_id, op(x, 0.0))
            }
            (None, Some(&(b_id, y))) => {
                j += 1;
                (b_id, op(0.0, y))
            }
            (None, None) => break,
        };
        if value > 0.0 {
            out.push((id, value));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ids_counts() {
        let v = TermVector::from_ids([3, 1, 3, 2, 3]);
        assert_eq!(v.len(), 3);
        assert_eq!(v.get(3), 3.0);
        assert_eq!(v.get(1), 1.0);
        assert_eq!(v.get(9), 0.0);
    }

    #[test]
    fn test_cosine_similarity_identical() {
        let v1 = TermVector::from_ids([0, 1, 1]);
        let v2 = TermVector::from_ids([1, 0, 1]);

        let sim = v1.cosine_similarity(&v2, TermWeighting::Count);
        assert!((sim - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_similarity_orthogonal() {
        let v1 = TermVector::from_ids([0]);
        let v2 = TermVector::from_ids([1]);

        let sim = v1.cosine_similarity(&v2, TermWeighting::Count);
        assert_eq!(sim, 0.0);
    }

    #[test]
    fn test_zero_vector_similarity_is_zero() {
        let zero = TermVector::new();
        let v = TermVector::from_ids([0, 1]);

        assert!(zero.is_empty());
        assert_eq!(zero.cosine_similarity(&v, TermWeighting::Count), 0.0);
        assert_eq!(v.cosine_similarity(&zero, TermWeighting::Count), 0.0);
        assert_eq!(zero.cosine_similarity(&zero, TermWeighting::Count), 0.0);
    }

    #[test]
    fn test_presence_weighting_ignores_repeats() {
        // counts (2, 1) vs (1, 0): count cosine = 2/sqrt(5), presence = 1/sqrt(2)
        let a = TermVector::from_ids([0, 0, 1]);
        let b = TermVector::from_ids([0]);

        let count = a.cosine_similarity(&b, TermWeighting::Count);
        let presence = a.cosine_similarity(&b, TermWeighting::Presence);
        assert!((count - 2.0 / 5f64.sqrt()).abs() < 1e-12);
        assert!((presence - 1.0 / 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_add_and_subtract() {
        let mut pooled = TermVector::from_ids([0, 1]);
        let other = TermVector::from_ids([1, 2]);
        pooled.add_assign(&other);

        assert_eq!(pooled.get(0), 1.0);
        assert_eq!(pooled.get(1), 2.0);
        assert_eq!(pooled.get(2), 1.0);

        let back = pooled.subtract(&other);
        assert_eq!(back, TermVector::from_ids([0, 1]));
    }

    #[test]
    fn test_subtract_to_empty() {
        let v = TermVector::from_ids([4, 4]);
        assert!(v.subtract(&v).is_empty());
    }

    #[test]
    fn test_dot_is_symmetric() {
        let a = TermVector::from_ids([0, 2, 2, 5, 7]);
        let b = TermVector::from_ids([2, 3, 5, 5]);
        assert_eq!(
            a.dot(&b, TermWeighting::Count),
            b.dot(&a, TermWeighting::Count)
        );
        assert_eq!(a.dot(&b, TermWeighting::Count), 4.0);
    }
}
