//! # cinex Core
//!
//! Core library for the cinex content-based movie recommender.
//!
//! This crate provides the similarity-ranking engine:
//!
//! - [`Catalog`] - In-memory movie attribute table with positional identity
//! - [`compose`](compose::compose) - Composite documents from a feature selection
//! - [`vectorize`](vectorize::vectorize) - Sparse term-count matrix over the corpus
//! - [`rank`](rank::rank) - Cosine similarity ranking with duplicate-title exclusion
//! - [`ContentBasedRecommender`] - The end-to-end [`Recommender`] strategy
//!
//! The engine is synchronous and request-scoped: the catalog is loaded once
//! and shared read-only, while composite documents and the term-count matrix
//! are rebuilt per request. The crate never logs or formats user-facing text;
//! callers translate [`Error`] kinds into their own response conventions.
//!
//! ## Example
//!
//! ```rust
//! use cinex_core::{Catalog, ContentBasedRecommender, Recommender};
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
//! let similar = engine.similar("Alien", &["genres".to_string()], 2).unwrap();
//! assert_eq!(similar[0], "Aliens");
//! ```

pub mod catalog;
pub mod compose;
pub mod engine;
pub mod error;
pub mod rank;
pub mod vectorize;

pub use catalog::{Catalog, TITLE_COLUMN};
pub use compose::compose;
pub use engine::{ContentBasedRecommender, Recommender};
pub use error::{Error, Result};
pub use rank::{rank, score_all};
pub use vectorize::{tokenize, vectorize, TermCountMatrix, TermCounts};
