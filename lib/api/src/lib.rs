//! # cinex API
//!
//! REST service layer for the cinex movie recommender. Translates HTTP
//! payloads into engine calls and engine errors into HTTP statuses; all
//! algorithmic work lives in `cinex-core`.

pub mod rest;

pub use rest::RestApi;
