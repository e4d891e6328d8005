//! Bag-of-terms count vectorization.
//!
//! Builds a sparse term-count matrix over a vocabulary learned from the whole
//! corpus. Nothing persists across calls; the vocabulary depends on which
//! features produced the documents, so it is rebuilt per request.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Sparse term-count row: (term id, count) pairs sorted by term id.
pub type TermCounts = Vec<(u32, u32)>;

/// Term-count matrix with one row per input document, in input order.
///
/// L2 norms are precomputed at build time; a row of an all-empty corpus has
/// norm 0.0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TermCountMatrix {
    pub(crate) rows: Vec<TermCounts>,
    pub(crate) norms: Vec<f64>,
    vocab_len: usize,
}

impl TermCountMatrix {
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of distinct tokens observed across the corpus.
    #[inline]
    pub fn vocab_len(&self) -> usize {
        self.vocab_len
    }

    pub fn row(&self, index: usize) -> Option<&[(u32, u32)]> {
        self.rows.get(index).map(Vec::as_slice)
    }
}

/// Tokenize text the way the count matrix expects it.
///
/// Lowercase, split on non-alphanumeric boundaries, single-character tokens
/// dropped. Identical substrings always produce identical tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| s.len() > 1)
        .map(str::to_string)
        .collect()
}

/// Build a term-count matrix over the whole corpus.
///
/// Row `i` corresponds to `documents[i]`; cell values are raw occurrence
/// counts. Term ids are assigned in first-occurrence order, which makes the
/// matrix deterministic for identical input.
pub fn vectorize(documents: &[String]) -> TermCountMatrix {
    let mut vocab: AHashMap<String, u32> = AHashMap::new();
    let mut rows = Vec::with_capacity(documents.len());

    for doc in documents {
        let mut counts: AHashMap<u32, u32> = AHashMap::new();
        for token in tokenize(doc) {
            let next_id = vocab.len() as u32;
            let id = *vocab.entry(token).or_insert(next_id);
            *counts.entry(id).or_insert(0) += 1;
        }

        let mut row: TermCounts = counts.into_iter().collect();
        row.sort_unstable_by_key(|&(id, _)| id);
        rows.push(row);
    }

    let norms = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|&(_, count)| f64::from(count) * f64::from(count))
                .sum::<f64>()
                .sqrt()
        })
        .collect();

    TermCountMatrix {
        vocab_len: vocab.len(),
        rows,
        norms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(
            tokenize("Horror, SciFi: thriller"),
            vec!["horror", "scifi", "thriller"]
        );
    }

    #[test]
    fn test_tokenize_drops_single_chars() {
        assert_eq!(tokenize("a bc d ef"), vec!["bc", "ef"]);
    }

    #[test]
    fn test_one_row_per_document() {
        let matrix = vectorize(&docs(&["action comedy", "action", "drama"]));
        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix.vocab_len(), 3);
    }

    #[test]
    fn test_counts_are_raw_occurrences() {
        let matrix = vectorize(&docs(&["war war peace"]));
        let row = matrix.row(0).unwrap();
        assert_eq!(row.len(), 2);
        // "war" gets term id 0, counted twice
        assert_eq!(row[0], (0, 2));
        assert_eq!(row[1], (1, 1));
    }

    #[test]
    fn test_empty_corpus_has_empty_vocabulary() {
        let matrix = vectorize(&docs(&["", "", ""]));
        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix.vocab_len(), 0);
        assert_eq!(matrix.row(0), Some(&[][..]));
        assert_eq!(matrix.norms[0], 0.0);
    }

    #[test]
    fn test_identical_input_identical_matrix() {
        let corpus = docs(&["alpha beta", "beta gamma"]);
        assert_eq!(vectorize(&corpus), vectorize(&corpus));
    }
}
