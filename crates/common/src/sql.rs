//! Partial-update SQL clause construction
//!
//! Builds the `SET` portion of an `UPDATE` statement from only the fields a
//! caller wants to change. Field names are `&'static str` so clause text can
//! only ever contain identifiers fixed at compile time; every value is
//! returned separately for binding to a positional placeholder.

use crate::error::{Error, Result};

/// A `SET` clause and the values to bind to its placeholders, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialUpdate<V> {
    /// e.g. `"first_name"=$1, "age"=$2`
    pub set_cols: String,
    pub values: Vec<V>,
}

impl<V> PartialUpdate<V> {
    /// Index of the first placeholder not used by the `SET` clause
    pub fn next_placeholder(&self) -> usize {
        self.values.len() + 1
    }
}

/// Build a parameterized `SET` clause from `(field, value)` pairs.
///
/// Each field is rendered as its column alias when `aliases` maps it,
/// otherwise verbatim. Fails with `Error::Validation` when `patch` is empty.
///
/// ```
/// use jobly_common::build_set_clause;
///
/// let update = build_set_clause(
///     vec![("firstName", "Aliya"), ("age", "32")],
///     &[("firstName", "first_name")],
/// )
/// .unwrap();
/// assert_eq!(update.set_cols, r#""first_name"=$1, "age"=$2"#);
/// assert_eq!(update.values, vec!["Aliya", "32"]);
/// ```
pub fn build_set_clause<V>(
    patch: Vec<(&'static str, V)>,
    aliases: &[(&'static str, &'static str)],
) -> Result<PartialUpdate<V>> {
    if patch.is_empty() {
        return Err(Error::Validation("No data".to_string()));
    }

    let mut columns = Vec::with_capacity(patch.len());
    let mut values = Vec::with_capacity(patch.len());

    for (idx, (field, value)) in patch.into_iter().enumerate() {
        let column = aliases
            .iter()
            .find(|(name, _)| *name == field)
            .map_or(field, |(_, column)| *column);
        columns.push(format!("\"{}\"=${}", column, idx + 1));
        values.push(value);
    }

    Ok(PartialUpdate {
        set_cols: columns.join(", "),
        values,
    })
}
