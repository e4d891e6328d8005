//! # cinex
//!
//! A content-based movie similarity engine with a REST API.
//!
//! cinex recommends movies similar to a given title by comparing
//! textual/categorical attributes across a fixed catalog: the selected
//! attribute columns are concatenated into one composite document per movie,
//! counted into a sparse term-count matrix, and ranked by cosine similarity
//! against the query movie.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install cinex
//! cinex --catalog ./datasets/movies.csv --http-port 8000
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use cinex::prelude::*;
//! use std::sync::Arc;
//!
//! let catalog = Catalog::from_rows(
//!     vec!["title".to_string(), "genres".to_string()],
//!     vec![
//!         vec!["Alien".to_string(), "Horror SciFi".to_string()],
//!         vec!["Aliens".to_string(), "Horror SciFi Action".to_string()],
//!         vec!["Up".to_string(), "Animation".to_string()],
//!     ],
//! ).unwrap();
//!
//! let engine = ContentBasedRecommender::new(Arc::new(catalog));
//! let similar = engine.similar("Alien", &["genres".to_string()], 10).unwrap();
//! assert_eq!(similar, vec!["Aliens", "Up"]);
//! ```
//!
//! ## Crate Structure
//!
//! cinex is composed of two crates:
//!
//! - [`cinex-core`](https://docs.rs/cinex-core) - Catalog store, feature
//!   compositor, count vectorizer, cosine ranker, recommender strategies
//! - [`cinex-api`](https://docs.rs/cinex-api) - REST endpoints and error
//!   translation
//!
//! ## Identity Caveat
//!
//! A row's 0-based position in catalog load order is the engine's only notion
//! of movie identity. Titles are a secondary lookup key and are NOT unique;
//! title lookups return the first matching row, and querying a duplicated
//! title removes at most one occurrence from the results.

// Re-export core types
pub use cinex_core::{
    Catalog, ContentBasedRecommender, Recommender,
    Error, Result,
    TermCountMatrix, TermCounts,
    TITLE_COLUMN,
};

// Re-export core stages for callers composing their own pipeline
pub use cinex_core::{compose, rank, score_all, tokenize, vectorize};

// Re-export API
pub use cinex_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Catalog, ContentBasedRecommender, Recommender,
        Error, Result,
        TermCountMatrix,
        RestApi,
    };
}
