use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{Error, Result};

/// Name of the column every catalog must carry.
pub const TITLE_COLUMN: &str = "title";

/// The in-memory movie attribute table.
///
/// Loaded once, read-only thereafter; safe to share behind an `Arc` across
/// concurrent requests. A row's 0-based position in load order is its
/// identity for the life of the process. Any `id` or `index` column in the
/// source data is carried as plain text and never used for identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    title_col: usize,
}

impl Catalog {
    /// Load a catalog from a headered CSV file.
    ///
    /// Missing cells become empty strings, never null. Fails with a data
    /// source error if the file is unreadable, lacks a `title` column, or
    /// contains no data rows.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path.as_ref())?;

        let columns: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Self::from_rows(columns, rows)
    }

    /// Build a catalog from an already-loaded table.
    ///
    /// Rows shorter than the header are padded with empty strings; longer
    /// rows are truncated to the header width.
    pub fn from_rows(columns: Vec<String>, mut rows: Vec<Vec<String>>) -> Result<Self> {
        let title_col = columns
            .iter()
            .position(|c| c == TITLE_COLUMN)
            .ok_or_else(|| {
                Error::DataSource(format!("missing required column `{TITLE_COLUMN}`"))
            })?;

        if rows.is_empty() {
            return Err(Error::DataSource("catalog has no rows".to_string()));
        }

        for row in &mut rows {
            row.resize(columns.len(), String::new());
        }

        Ok(Self {
            columns,
            rows,
            title_col,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Position of a named column, if it exists.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell value at (row, column), `None` outside the table.
    pub fn value(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col)).map(String::as_str)
    }

    /// Title of the row at `index`.
    pub fn title_of(&self, index: usize) -> Result<&str> {
        self.rows
            .get(index)
            .map(|row| row[self.title_col].as_str())
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.rows.len(),
            })
    }

    /// Position of the first row whose title equals `title`.
    ///
    /// Titles are not unique in real exports; callers get the first match
    /// only and must tolerate that ambiguity.
    pub fn index_of(&self, title: &str) -> Result<usize> {
        self.rows
            .iter()
            .position(|row| row[self.title_col] == title)
            .ok_or_else(|| Error::TitleNotFound(title.to_string()))
    }

    /// Columns a caller may select as similarity features.
    ///
    /// Hides a literal `index` bookkeeping column if the source data carries
    /// one.
    pub fn feature_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(String::as_str)
            .filter(|c| *c != "index")
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample() -> Catalog {
        Catalog::from_rows(
            vec!["index".to_string(), "title".to_string(), "genres".to_string()],
            vec![
                vec!["0".to_string(), "Alien".to_string(), "Horror SciFi".to_string()],
                vec!["1".to_string(), "Aliens".to_string(), "Action SciFi".to_string()],
                vec!["2".to_string(), "Up".to_string(), "Animation".to_string()],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_lookups() {
        let catalog = sample();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.title_of(1).unwrap(), "Aliens");
        assert_eq!(catalog.index_of("Up").unwrap(), 2);
        assert_eq!(catalog.column_index("genres"), Some(2));
        assert_eq!(catalog.value(0, 2), Some("Horror SciFi"));
    }

    #[test]
    fn test_title_not_found() {
        let catalog = sample();
        assert!(matches!(
            catalog.index_of("NotInCatalog"),
            Err(Error::TitleNotFound(_))
        ));
    }

    #[test]
    fn test_index_out_of_range() {
        let catalog = sample();
        assert!(matches!(
            catalog.title_of(3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_first_match_for_duplicate_titles() {
        let catalog = Catalog::from_rows(
            vec!["title".to_string()],
            vec![
                vec!["Alpha".to_string()],
                vec!["Beta".to_string()],
                vec!["Alpha".to_string()],
            ],
        )
        .unwrap();
        assert_eq!(catalog.index_of("Alpha").unwrap(), 0);
    }

    #[test]
    fn test_missing_title_column() {
        let result = Catalog::from_rows(
            vec!["name".to_string()],
            vec![vec!["Alien".to_string()]],
        );
        assert!(matches!(result, Err(Error::DataSource(_))));
    }

    #[test]
    fn test_no_rows() {
        let result = Catalog::from_rows(vec!["title".to_string()], vec![]);
        assert!(matches!(result, Err(Error::DataSource(_))));
    }

    #[test]
    fn test_short_rows_padded() {
        let catalog = Catalog::from_rows(
            vec!["title".to_string(), "tagline".to_string()],
            vec![vec!["Alien".to_string()]],
        )
        .unwrap();
        assert_eq!(catalog.value(0, 1), Some(""));
    }

    #[test]
    fn test_feature_columns_hide_index() {
        let catalog = sample();
        assert_eq!(catalog.feature_columns(), vec!["title", "genres"]);
    }

    #[test]
    fn test_from_csv_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "index,title,genres,tagline").unwrap();
        writeln!(file, "0,Alien,Horror SciFi,In space").unwrap();
        writeln!(file, "1,Up,Animation").unwrap();
        file.flush().unwrap();

        let catalog = Catalog::from_csv_path(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.index_of("Up").unwrap(), 1);
        // Short record: missing tagline reads back as an empty string
        assert_eq!(catalog.value(1, 3), Some(""));
    }

    #[test]
    fn test_from_csv_path_missing_file() {
        let result = Catalog::from_csv_path("/nonexistent/movies.csv");
        assert!(result.is_err());
    }
}
