//! Type definitions for word statistics

use std::collections::BTreeMap;
use std::collections::btree_map;

/// Number of words seen for each word length.
///
/// Buckets are created on first increment and never hold a zero count.
/// Iteration yields lengths in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LengthHistogram {
    buckets: BTreeMap<usize, usize>,
}

impl LengthHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `length`, creating the bucket if absent
    pub fn increment(&mut self, length: usize) {
        *self.buckets.entry(length).or_insert(0) += 1;
    }

    /// Occurrences recorded for `length` (0 when absent)
    pub fn get(&self, length: usize) -> usize {
        self.buckets.get(&length).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> HistogramIter<'_> {
        HistogramIter {
            inner: self.buckets.iter(),
        }
    }

    /// Number of distinct word lengths
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Sum of all bucket counts
    pub fn total(&self) -> usize {
        self.buckets.values().sum()
    }

    /// Sum of `length * count` over all buckets
    pub fn weighted_total(&self) -> usize {
        self.buckets
            .iter()
            .map(|(length, count)| length * count)
            .sum()
    }

    /// Highest bucket count, 0 for an empty histogram
    pub fn max_count(&self) -> usize {
        self.buckets.values().copied().max().unwrap_or(0)
    }

    pub(crate) fn clear(&mut self) {
        self.buckets.clear();
    }
}

/// Iterator over `(length, count)` pairs of a [`LengthHistogram`]
pub struct HistogramIter<'a> {
    inner: btree_map::Iter<'a, usize, usize>,
}

impl Iterator for HistogramIter<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(length, count)| (*length, *count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a LengthHistogram {
    type Item = (usize, usize);
    type IntoIter = HistogramIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Point-in-time view of an accumulator's aggregates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub word_count: usize,
    pub total_word_length: usize,
    pub histogram: LengthHistogram,
}

impl StatsSnapshot {
    /// Mean word length with exactly three decimals, rounded half up
    pub fn formatted_average(&self) -> String {
        if self.word_count == 0 {
            return "0.000".to_string();
        }
        // Integer arithmetic keeps halves (e.g. 0.0625) rounding up
        let count = self.word_count as u128;
        let thousandths = (self.total_word_length as u128 * 2000 + count) / (2 * count);
        format!("{}.{:03}", thousandths / 1000, thousandths % 1000)
    }

    pub fn max_frequency(&self) -> usize {
        self.histogram.max_count()
    }

    /// Every word length whose count equals the maximum, ascending
    pub fn most_frequent_lengths(&self) -> Vec<usize> {
        let max = self.max_frequency();
        if max == 0 {
            return Vec::new();
        }
        self.histogram
            .iter()
            .filter(|(_, count)| *count == max)
            .map(|(length, _)| length)
            .collect()
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
