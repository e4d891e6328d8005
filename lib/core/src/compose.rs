//! Composite document construction.
//!
//! Turns a caller-supplied feature selection into one synthetic text per
//! catalog row. The documents exist only for the duration of a single
//! recommendation request; the catalog itself is never touched.

use crate::{Catalog, Error, Result};

/// Build one composite document per catalog row, in catalog order.
///
/// The selected attribute values are joined with single spaces in the given
/// feature order, no trailing separator. Fails with `UnknownFeature` if the
/// selection is empty or names a column the catalog does not have.
pub fn compose(catalog: &Catalog, features: &[String]) -> Result<Vec<String>> {
    if features.is_empty() {
        return Err(Error::UnknownFeature("(no features selected)".to_string()));
    }

    let mut cols = Vec::with_capacity(features.len());
    for feature in features {
        let col = catalog
            .column_index(feature)
            .ok_or_else(|| Error::UnknownFeature(feature.clone()))?;
        cols.push(col);
    }

    let docs = (0..catalog.len())
        .map(|row| {
            cols.iter()
                .map(|&col| catalog.value(row, col).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    Ok(docs)
}
