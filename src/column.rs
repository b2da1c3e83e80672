//! Typed column references.
//!
//! A [`Column`] names a database column (optionally schema/table qualified)
//! and carries the column's logical data type as a phantom parameter. The
//! type tag only drives inference in the fragment builders; it has no runtime
//! behavior.

use std::marker::PhantomData;

use crate::error::{FragError, FragResult};

/// A typed reference to a database column.
///
/// The identifier is validated at construction. Postgres doesn't allow
/// parameterizing identifiers, so each `.`-separated segment must match
/// `[A-Za-z_][A-Za-z0-9_$]*` to keep dynamic column names out of SQL text
/// unchecked.
pub struct Column<T> {
    ident: String,
    _data: PhantomData<fn() -> T>,
}

/// Create a column reference for the given identifier.
///
/// # Example
/// ```ignore
/// let amount: Column<i64> = pgfrag::column("orders.amount")?;
/// ```
pub fn column<T>(ident: impl Into<String>) -> FragResult<Column<T>> {
    Column::new(ident)
}

impl<T> Column<T> {
    /// Create a column reference, validating the identifier.
    pub fn new(ident: impl Into<String>) -> FragResult<Self> {
        let ident = ident.into();
        validate_ident(&ident)?;
        Ok(Self {
            ident,
            _data: PhantomData,
        })
    }

    /// The validated identifier text.
    pub fn name(&self) -> &str {
        &self.ident
    }

    /// Render the column reference as SQL.
    pub fn to_sql(&self) -> String {
        self.ident.clone()
    }

    pub(crate) fn write_sql(&self, out: &mut String) {
        out.push_str(&self.ident);
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            ident: self.ident.clone(),
            _data: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Column").field(&self.ident).finish()
    }
}

/// Check a single identifier segment: `[A-Za-z_][A-Za-z0-9_$]*`.
pub(crate) fn is_valid_segment(seg: &str) -> bool {
    let mut chars = seg.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if first != '_' && !first.is_ascii_alphabetic() {
        return false;
    }
    chars.all(|c| c == '_' || c == '$' || c.is_ascii_alphanumeric())
}

/// Validate a dotted identifier (schema/table/column).
pub(crate) fn validate_ident(ident: &str) -> FragResult<()> {
    if ident.is_empty() {
        return Err(FragError::validation("empty identifier"));
    }
    for seg in ident.split('.') {
        if !is_valid_segment(seg) {
            return Err(FragError::validation(format!(
                "invalid identifier '{ident}'"
            )));
        }
    }
    Ok(())
}
