use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Engine errors. `Io` and `Csv` only occur while loading a catalog and
/// belong to the same fatal class as `DataSource`; the remaining variants are
/// per-request input errors, except `IndexOutOfRange` which signals a broken
/// internal invariant.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Data source error: {0}")]
    DataSource(String),

    #[error("Title not found: {0}")]
    TitleNotFound(String),

    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    #[error("Invalid limit: {0}")]
    InvalidLimit(usize),

    #[error("Index out of range: {index} (catalog has {len} rows)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
