//! Recommendation strategies.

use std::sync::Arc;

use crate::{compose, rank, vectorize, Catalog, Result};

/// Strategy contract for movie recommenders.
///
/// Implementations rank catalog titles by similarity to a query title.
/// Alternative strategies (collaborative filtering and the like) implement
/// this same trait instead of sharing state with the content-based engine.
pub trait Recommender {
    /// Return up to `limit` titles similar to `title`, most similar first.
    ///
    /// Fails with `TitleNotFound` if the title is absent from the catalog,
    /// `UnknownFeature` if the selection names a column the catalog does not
    /// have, and `InvalidLimit` if `limit` is zero.
    fn similar(&self, title: &str, features: &[String], limit: usize) -> Result<Vec<String>>;
}

/// Recommender that scores movies by bag-of-terms overlap across a selected
/// set of catalog columns.
///
/// The catalog is shared read-only; every call builds its own composite
/// documents and term-count matrix, so concurrent requests never observe
/// partial state.
pub struct ContentBasedRecommender {
    catalog: Arc<Catalog>,
}

impl ContentBasedRecommender {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Recommender for ContentBasedRecommender {
    fn similar(&self, title: &str, features: &[String], limit: usize) -> Result<Vec<String>> {
        let query_index = self.catalog.index_of(title)?;

        let documents = compose::compose(&self.catalog, features)?;
        let matrix = vectorize::vectorize(&documents);

        // Exclusion is by title, not by index: with duplicate titles the
        // top-ranked row may be a different row than the query itself.
        let is_query_title = |index: usize| {
            self.catalog
                .title_of(index)
                .map(|t| t == title)
                .unwrap_or(false)
        };
        let indices = rank::rank(&matrix, query_index, is_query_title, limit)?;

        indices
            .into_iter()
            .map(|index| self.catalog.title_of(index).map(str::to_string))
            .collect()
    }
}
