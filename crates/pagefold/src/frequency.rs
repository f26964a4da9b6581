//! Word-occurrence tally accumulated during pagination.

use std::collections::HashMap;

/// Occurrence count for a single distinct word.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordCount {
    /// The exact word as it appeared in the input, punctuation included.
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
}

/// Counts exact word strings with no normalization.
///
/// Entries remember first-seen order, so [`top`](FrequencyTable::top)
/// reports tied counts in encounter order. The running total always equals
/// the sum of all counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<WordCount>,
    total: usize,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `word`.
    pub fn record(&mut self, word: &str) {
        match self.index.get(word) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push(WordCount {
                    word: word.to_string(),
                    count: 1,
                });
            }
        }
        self.total += 1;
    }

    /// Occurrences of `word`, or 0 if never seen.
    pub fn count(&self, word: &str) -> usize {
        self.index
            .get(word)
            .map_or(0, |&slot| self.entries[slot].count)
    }

    /// Number of distinct words recorded.
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Total occurrences across all words.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &WordCount> {
        self.entries.iter()
    }

    /// The `n` most frequent words, descending by count.
    ///
    /// Sorting happens only here, at reporting time; storage stays
    /// unordered. The sort is stable, so ties keep first-encounter order.
    pub fn top(&self, n: usize) -> Vec<&WordCount> {
        let mut ranked: Vec<&WordCount> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }
}
