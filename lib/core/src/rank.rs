//! Cosine similarity ranking over term-count rows.

use std::cmp::Ordering;

use crate::vectorize::TermCountMatrix;
use crate::{Error, Result};

/// Cosine similarity between two sparse count rows with precomputed norms.
///
/// Defined as 0.0 when either vector has zero magnitude.
fn cosine(a: &[(u32, u32)], b: &[(u32, u32)], norm_a: f64, norm_b: f64) -> f64 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let mut dot: u64 = 0;
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                dot += u64::from(a[i].1) * u64::from(b[j].1);
                i += 1;
                j += 1;
            }
        }
    }

    dot as f64 / (norm_a * norm_b)
}

/// Score every row against the query row, including the query row itself.
///
/// Returns (index, score) pairs in descending score order. `sort_by` is a
/// stable sort, so equal scores keep their original catalog order.
pub fn score_all(matrix: &TermCountMatrix, query_index: usize) -> Result<Vec<(usize, f64)>> {
    let query = matrix.rows.get(query_index).ok_or(Error::IndexOutOfRange {
        index: query_index,
        len: matrix.len(),
    })?;
    let query_norm = matrix.norms[query_index];

    let mut scored: Vec<(usize, f64)> = matrix
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| (i, cosine(query, row, query_norm, matrix.norms[i])))
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    Ok(scored)
}

/// Rank rows by similarity to the query row.
///
/// After sorting, if the top-ranked row satisfies `is_query_title`, exactly
/// that one entry is dropped; other rows carrying the same title keep their
/// own ranks. This reproduces catalogs with duplicate titles: only the single
/// best-matching duplicate is removed. Pass `|_| false` to disable the
/// exclusion.
///
/// Returns at most `limit` positional indices. `limit == 0` fails with
/// `InvalidLimit`; a query index outside the matrix fails with
/// `IndexOutOfRange`.
pub fn rank<F>(
    matrix: &TermCountMatrix,
    query_index: usize,
    is_query_title: F,
    limit: usize,
) -> Result<Vec<usize>>
where
    F: Fn(usize) -> bool,
{
    if limit == 0 {
        return Err(Error::InvalidLimit(limit));
    }

    let mut scored = score_all(matrix, query_index)?;

    if let Some(&(top, _)) = scored.first() {
        if is_query_title(top) {
            scored.remove(0);
        }
    }

    scored.truncate(limit);
    Ok(scored.into_iter().map(|(index, _)| index).collect())
}
