//! Deterministic token frequency ranking.

use std::collections::HashMap;

use crate::types::WordCount;

/// Counts token occurrences while remembering first-occurrence order.
///
/// Local accumulator state scoped to a single aggregation call; there are
/// no process-wide caches or shared counters. Ranking is deterministic for a
/// fixed input: count descending, ties broken by the order tokens were first
/// added.
#[derive(Debug, Default)]
pub struct FrequencyCounter {
    index: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl FrequencyCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `token`.
    pub fn add(&mut self, token: String) {
        if let Some(&slot) = self.index.get(&token) {
            self.entries[slot].1 += 1;
        } else {
            self.index.insert(token.clone(), self.entries.len());
            self.entries.push((token, 1));
        }
    }

    /// Count every token in `tokens`.
    pub fn extend<I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = String>,
    {
        for token in tokens {
            self.add(token);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the counter and return the top `k` tokens.
    ///
    /// The stable sort preserves insertion order among equal counts, which is
    /// exactly the first-occurrence tie-break.
    #[must_use]
    pub fn into_top_k(self, k: usize) -> Vec<WordCount> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(k);
        entries
            .into_iter()
            .map(|(token, count)| WordCount { token, count })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(counter: FrequencyCounter, k: usize) -> Vec<(String, u64)> {
        counter
            .into_top_k(k)
            .into_iter()
            .map(|wc| (wc.token, wc.count))
            .collect()
    }

    #[test]
    fn empty_counter_yields_empty_table() {
        let counter = FrequencyCounter::new();
        assert!(counter.is_empty());
        assert!(counter.into_top_k(10).is_empty());
    }

    #[test]
    fn ranks_by_count_descending() {
        let mut counter = FrequencyCounter::new();
        counter.extend(["low", "high", "high", "high", "mid", "mid"].map(String::from));
        assert_eq!(
            counts(counter, 10),
            [
                ("high".to_string(), 3),
                ("mid".to_string(), 2),
                ("low".to_string(), 1),
            ]
        );
    }

    #[test]
    fn ties_break_by_first_occurrence() {
        let mut counter = FrequencyCounter::new();
        counter.extend(["beta", "alpha", "gamma", "alpha"].map(String::from));
        // beta and gamma both count 1; beta was seen first
        assert_eq!(
            counts(counter, 10),
            [
                ("alpha".to_string(), 2),
                ("beta".to_string(), 1),
                ("gamma".to_string(), 1),
            ]
        );
    }

    #[test]
    fn truncates_to_k() {
        let mut counter = FrequencyCounter::new();
        counter.extend(["one", "two", "three", "four"].map(String::from));
        assert_eq!(counter.into_top_k(2).len(), 2);
    }

    #[test]
    fn zero_k_yields_empty_table() {
        let mut counter = FrequencyCounter::new();
        counter.add("word".to_string());
        assert!(counter.into_top_k(0).is_empty());
    }
}
