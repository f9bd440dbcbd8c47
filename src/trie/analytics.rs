//! Structural, memory, and word-length traversals over a [`Trie`].
//!
//! Each of the three traversals visits every node reachable from the root
//! exactly once and returns a small aggregate struct rather than a lazy
//! iterator, since the whole point is a single summary value.

use std::collections::HashMap;
use std::mem::size_of;

use crate::node::Node;
use crate::trie::Trie;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Depth statistics over every terminal (word-ending) node, where depth is
/// counted in nodes traversed from the root (the root itself is depth 0).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct HeightStats {
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    /// Most common depth; ties are broken toward the lowest depth.
    pub mode: usize,
    /// Depth of every terminal node, in traversal order.
    pub samples: Vec<usize>,
}

/// A rough but traceable estimate of the trie's heap footprint.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct MemoryStats {
    pub total_bytes: usize,
    pub node_count: usize,
    /// Sum of `key.len()` across every node.
    pub string_bytes: usize,
    /// `total_bytes - string_bytes`.
    pub overhead_bytes: usize,
    /// `total_bytes / word_count`, or `0.0` for an empty trie.
    pub bytes_per_word: f64,
}

/// Length statistics over every stored word, where length is the number of
/// bytes in the word (sum of edge-label lengths along its path).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct WordMetrics {
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    /// Most common word length; ties are broken toward the lowest length.
    pub mode: usize,
    pub total_chars: usize,
    /// Indexed by length, `0..=max`: `length_distribution[n]` is the number
    /// of stored words of length `n`.
    pub length_distribution: Vec<usize>,
}

/// Picks the most frequent value in `samples`, breaking ties toward the
/// lowest value, alongside the min, max, and mean.
fn summarize(samples: &[usize]) -> (usize, usize, f64, usize) {
    let min = *samples.iter().min().unwrap();
    let max = *samples.iter().max().unwrap();
    let mean = samples.iter().sum::<usize>() as f64 / samples.len() as f64;

    let mut counts: HashMap<usize, usize> = HashMap::new();
    for &sample in samples {
        *counts.entry(sample).or_insert(0) += 1;
    }
    let mut mode = min;
    let mut best_count = 0usize;
    let mut ordered: Vec<_> = counts.into_iter().collect();
    ordered.sort_unstable_by_key(|&(value, _)| value);
    for (value, count) in ordered {
        if count > best_count {
            best_count = count;
            mode = value;
        }
    }

    (min, max, mean, mode)
}

impl Trie {
    /// Computes depth statistics over every terminal node.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_trie_core::Trie;
    ///
    /// let mut trie = Trie::new();
    /// for word in [b"a".as_slice(), b"aa", b"aaa", b"aaaa"] {
    ///     trie.insert(word);
    /// }
    ///
    /// let stats = trie.height_stats();
    /// assert_eq!(stats.min, 1);
    /// assert_eq!(stats.max, 4);
    /// assert_eq!(stats.mean, 2.5);
    /// ```
    pub fn height_stats(&self) -> HeightStats {
        let mut samples = Vec::new();
        self.root.terminal_depths(0, &mut samples);

        if samples.is_empty() {
            return HeightStats {
                min: 0,
                max: 0,
                mean: 0.0,
                mode: 0,
                samples,
            };
        }

        let (min, max, mean, mode) = summarize(&samples);
        HeightStats {
            min,
            max,
            mean,
            mode,
            samples,
        }
    }

    /// Estimates the trie's in-memory footprint as
    /// `sizeof(Trie) + node_count * sizeof(Node) + string_bytes`.
    pub fn memory_stats(&self) -> MemoryStats {
        let (node_count, string_bytes) = self.root.structural_totals();
        let total_bytes = size_of::<Trie>() + node_count * size_of::<Node>() + string_bytes;
        let overhead_bytes = total_bytes - string_bytes;
        let bytes_per_word = if self.word_count == 0 {
            0.0
        } else {
            total_bytes as f64 / self.word_count as f64
        };

        MemoryStats {
            total_bytes,
            node_count,
            string_bytes,
            overhead_bytes,
            bytes_per_word,
        }
    }

    /// Computes word-length statistics and a length-distribution vector
    /// indexed from `0` to the longest stored word's length.
    ///
    /// # Examples
    ///
    /// ```
    /// use radix_trie_core::Trie;
    ///
    /// let mut trie = Trie::new();
    /// for word in [b"a".as_slice(), b"aa", b"aaa", b"aaaa"] {
    ///     trie.insert(word);
    /// }
    ///
    /// let metrics = trie.word_metrics();
    /// assert_eq!(metrics.length_distribution, vec![0, 1, 1, 1, 1]);
    /// ```
    pub fn word_metrics(&self) -> WordMetrics {
        let mut samples = Vec::new();
        self.root.terminal_lengths(0, &mut samples);

        if samples.is_empty() {
            return WordMetrics {
                min: 0,
                max: 0,
                mean: 0.0,
                mode: 0,
                total_chars: 0,
                length_distribution: Vec::new(),
            };
        }

        let (min, max, mean, mode) = summarize(&samples);
        let total_chars = samples.iter().sum();

        let mut length_distribution = vec![0usize; max + 1];
        for &length in &samples {
            length_distribution[length] += 1;
        }

        WordMetrics {
            min,
            max,
            mean,
            mode,
            total_chars,
            length_distribution,
        }
    }
}
