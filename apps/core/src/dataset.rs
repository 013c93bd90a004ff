//! In-memory dataset collection.
//!
//! An ordered sequence of pairs with whole-record replacement semantics —
//! no partial patching, no identity beyond position. Persistence (and the
//! timestamps it stamps onto stored pairs) belongs to the storage
//! collaborator, not here. Insertion order is significant: trend analysis
//! treats it as chronology.

use serde::{Deserialize, Serialize};

use crate::models::{DatasetStats, Pair};

/// Ordered pair collection. Duplicates are allowed — uniqueness is a
/// quality metric, not a structural constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pairs: Vec<Pair>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from existing pairs, keeping their order.
    pub fn from_pairs(pairs: Vec<Pair>) -> Self {
        Self { pairs }
    }

    /// Append a pair at the end.
    pub fn add(&mut self, pair: Pair) {
        self.pairs.push(pair);
    }

    /// Append several pairs, keeping their order.
    pub fn extend(&mut self, pairs: impl IntoIterator<Item = Pair>) {
        self.pairs.extend(pairs);
    }

    /// Replace the pair at `index` wholesale. Returns false when the index
    /// is out of bounds.
    pub fn update(&mut self, index: usize, pair: Pair) -> bool {
        match self.pairs.get_mut(index) {
            Some(slot) => {
                *slot = pair;
                true
            }
            None => false,
        }
    }

    /// Remove and return the pair at `index`, shifting later pairs down.
    pub fn remove(&mut self, index: usize) -> Option<Pair> {
        if index < self.pairs.len() {
            Some(self.pairs.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    pub fn get(&self, index: usize) -> Option<&Pair> {
        self.pairs.get(index)
    }

    /// All pairs, in insertion order.
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Summary counts for display.
    pub fn stats(&self) -> DatasetStats {
        let total = self.pairs.len();
        let valid = self.pairs.iter().filter(|p| p.is_valid()).count();
        DatasetStats {
            total,
            valid,
            warnings: total - valid,
        }
    }

    /// Drop exact duplicates (`prompt|||completion` key), keeping first
    /// occurrences. Returns the number of pairs removed.
    pub fn remove_duplicates(&mut self) -> usize {
        let before = self.pairs.len();
        let mut seen = std::collections::HashSet::new();
        self.pairs
            .retain(|pair| seen.insert(format!("{}|||{}", pair.prompt, pair.completion)));
        before - self.pairs.len()
    }

    /// Drop incomplete pairs. Returns the number of pairs removed.
    pub fn retain_valid(&mut self) -> usize {
        let before = self.pairs.len();
        self.pairs.retain(|pair| pair.is_valid());
        before - self.pairs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(prompt: &str, completion: &str) -> Pair {
        Pair::tagged(prompt, completion, &[])
    }

    #[test]
    fn test_add_and_get() {
        let mut dataset = Dataset::new();
        dataset.add(pair("p1", "c1"));
        dataset.add(pair("p2", "c2"));

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.get(1).expect("pair").prompt, "p2");
        assert!(dataset.get(2).is_none());
    }

    #[test]
    fn test_update_replaces_wholesale() {
        let mut dataset = Dataset::from_pairs(vec![pair("old", "old")]);

        assert!(dataset.update(0, pair("new", "new")));
        assert_eq!(dataset.get(0).expect("pair").prompt, "new");
        assert!(!dataset.update(5, pair("x", "y")));
    }

    #[test]
    fn test_remove_shifts_order() {
        let mut dataset = Dataset::from_pairs(vec![pair("a", "1"), pair("b", "2"), pair("c", "3")]);

        let removed = dataset.remove(1).expect("removed pair");
        assert_eq!(removed.prompt, "b");
        assert_eq!(dataset.get(1).expect("pair").prompt, "c");
        assert!(dataset.remove(9).is_none());
    }

    #[test]
    fn test_stats_counts_validity() {
        let dataset = Dataset::from_pairs(vec![
            pair("complete", "pair"),
            pair("", "no prompt"),
            pair("no completion", "  "),
        ]);
        let stats = dataset.stats();

        assert_eq!(stats.total, 3);
        assert_eq!(stats.valid, 1);
        assert_eq!(stats.warnings, 2);
    }

    #[test]
    fn test_remove_duplicates_keeps_first() {
        let mut dataset = Dataset::from_pairs(vec![
            Pair::tagged("p", "c", &["first"]),
            Pair::tagged("p", "c", &["second"]),
            pair("other", "pair"),
        ]);

        assert_eq!(dataset.remove_duplicates(), 1);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.get(0).expect("pair").tags, vec!["first"]);
    }

    #[test]
    fn test_retain_valid() {
        let mut dataset = Dataset::from_pairs(vec![pair("keep", "me"), pair("", "drop me")]);

        assert_eq!(dataset.retain_valid(), 1);
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.get(0).expect("pair").prompt, "keep");
    }

    #[test]
    fn test_clear() {
        let mut dataset = Dataset::from_pairs(vec![pair("a", "b")]);
        dataset.clear();
        assert!(dataset.is_empty());
    }
}
