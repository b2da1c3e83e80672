//! Typed, composable SQL fragments.
//!
//! A [`Fragment`] stores SQL pieces and bound parameters separately and
//! generates `$1, $2, ...` placeholders when rendered, so fragments can be
//! spliced into each other without manual index bookkeeping. The type
//! parameter tags the fragment's logical result type for inference only.
//!
//! # Example
//!
//! ```ignore
//! use pgfrag::{Fragment, column, Column};
//!
//! let amount: Column<i64> = column("orders.amount")?;
//! let mut f: Fragment<i64> = Fragment::raw("coalesce(");
//! f.push_column(&amount).push(", ").push_bind(0_i64).push(")");
//! assert_eq!(f.to_sql(), "coalesce(orders.amount, $1)");
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use tokio_postgres::types::ToSql;

use crate::column::{Column, is_valid_segment};
use crate::error::{FragError, FragResult};

#[derive(Debug, Clone)]
enum Part {
    Raw(String),
    Param,
}

/// A clone-friendly bound parameter.
///
/// Wrapping values in `Arc` lets fragments be cloned without copying the
/// underlying parameter values.
#[derive(Clone)]
pub struct Param(Arc<dyn ToSql + Send + Sync>);

impl Param {
    /// Wrap any `ToSql` value.
    pub fn new<V: ToSql + Send + Sync + 'static>(value: V) -> Self {
        Param(Arc::new(value))
    }

    /// Get a reference to the inner value as a ToSql trait object.
    pub fn as_ref(&self) -> &(dyn ToSql + Sync) {
        &*self.0 as &(dyn ToSql + Sync)
    }
}

impl std::fmt::Debug for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Param").field(&"<dyn ToSql>").finish()
    }
}

/// A composable SQL fragment tagged with its logical result type.
///
/// Fragments never execute SQL. Rendering with [`Fragment::to_sql`] produces
/// the final text with placeholders numbered in part order, and
/// [`Fragment::params_ref`] yields the matching parameter references for a
/// `tokio-postgres` executor.
pub struct Fragment<T = ()> {
    parts: Vec<Part>,
    params: Vec<Param>,
    _result: PhantomData<fn() -> T>,
}

/// Start a fragment from an initial piece of raw SQL.
pub fn frag<T>(initial_sql: impl Into<String>) -> Fragment<T> {
    Fragment::raw(initial_sql)
}

impl<T> Fragment<T> {
    /// Create a fragment from an initial piece of raw SQL.
    pub fn raw(sql: impl Into<String>) -> Self {
        Self {
            parts: vec![Part::Raw(sql.into())],
            params: Vec::new(),
            _result: PhantomData,
        }
    }

    /// Create an empty fragment.
    pub fn empty() -> Self {
        Self {
            parts: Vec::new(),
            params: Vec::new(),
            _result: PhantomData,
        }
    }

    /// A fragment consisting of a single bound parameter.
    pub fn bind<V: ToSql + Send + Sync + 'static>(value: V) -> Self {
        let mut f = Self::empty();
        f.push_bind(value);
        f
    }

    /// Append raw SQL (no parameters).
    pub fn push(&mut self, sql: &str) -> &mut Self {
        if sql.is_empty() {
            return self;
        }

        match self.parts.last_mut() {
            Some(Part::Raw(last)) => last.push_str(sql),
            _ => self.parts.push(Part::Raw(sql.to_string())),
        }
        self
    }

    /// Append a parameter placeholder and bind its value.
    pub fn push_bind<V: ToSql + Send + Sync + 'static>(&mut self, value: V) -> &mut Self {
        self.parts.push(Part::Param);
        self.params.push(Param::new(value));
        self
    }

    /// Append a column reference.
    pub fn push_column<U>(&mut self, column: &Column<U>) -> &mut Self {
        match self.parts.last_mut() {
            Some(Part::Raw(last)) => column.write_sql(last),
            _ => self.parts.push(Part::Raw(column.to_sql())),
        }
        self
    }

    /// Append another fragment, consuming it.
    ///
    /// The embedded fragment's logical type is erased; placeholder numbering
    /// is recomputed across the combined parts at render time.
    pub fn push_fragment<U>(&mut self, mut other: Fragment<U>) -> &mut Self {
        self.parts.append(&mut other.parts);
        self.params.append(&mut other.params);
        self
    }

    /// Reinterpret the fragment's logical result type.
    pub fn retype<U>(self) -> Fragment<U> {
        Fragment {
            parts: self.parts,
            params: self.params,
            _result: PhantomData,
        }
    }

    /// Name this fragment for use as a named sub-expression.
    ///
    /// The alias must be a single unquoted identifier segment.
    pub fn alias(self, name: impl Into<String>) -> FragResult<Aliased<T>> {
        let name = name.into();
        if !is_valid_segment(&name) {
            return Err(FragError::validation(format!("invalid alias '{name}'")));
        }
        Ok(Aliased {
            fragment: self,
            name,
        })
    }

    /// Render SQL with `$1, $2, ...` placeholders.
    pub fn to_sql(&self) -> String {
        let mut out = String::new();
        let mut idx: usize = 0;

        for part in &self.parts {
            match part {
                Part::Raw(s) => out.push_str(s),
                Part::Param => {
                    idx += 1;
                    use std::fmt::Write;
                    let _ = write!(&mut out, "${idx}");
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(sql = %out, params = self.params.len(), "rendered sql fragment");

        out
    }

    /// Parameter refs compatible with `tokio-postgres`.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params.iter().map(|p| p.as_ref()).collect()
    }
}

impl<T> Clone for Fragment<T> {
    fn clone(&self) -> Self {
        Self {
            parts: self.parts.clone(),
            params: self.params.clone(),
            _result: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for Fragment<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fragment")
            .field("sql", &self.to_sql())
            .field("params", &self.params.len())
            .finish()
    }
}

/// A fragment carrying a name for use as a named sub-expression.
///
/// Rendered standalone it produces `<sql> AS <alias>` for a select list.
/// Embedded into another fragment it contributes its alias name.
pub struct Aliased<T> {
    fragment: Fragment<T>,
    name: String,
}

impl<T> Aliased<T> {
    /// The alias name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying fragment.
    pub fn fragment(&self) -> &Fragment<T> {
        &self.fragment
    }

    /// Render as `<sql> AS <alias>`.
    pub fn to_sql(&self) -> String {
        format!("{} AS {}", self.fragment.to_sql(), self.name)
    }
}

impl<T> Clone for Aliased<T> {
    fn clone(&self) -> Self {
        Self {
            fragment: self.fragment.clone(),
            name: self.name.clone(),
        }
    }
}

impl<T> std::fmt::Debug for Aliased<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aliased")
            .field("sql", &self.fragment.to_sql())
            .field("name", &self.name)
            .finish()
    }
}

/// Convert a value into a [`Fragment`] for embedding.
///
/// This is mainly for ergonomics in builder APIs: plain fragments embed as
/// their own SQL, aliased fragments embed as their alias name.
pub trait IntoFragment<T> {
    fn into_fragment(self) -> Fragment<T>;
}

impl<T> IntoFragment<T> for Fragment<T> {
    fn into_fragment(self) -> Fragment<T> {
        self
    }
}

impl<T> IntoFragment<T> for Aliased<T> {
    fn into_fragment(self) -> Fragment<T> {
        Fragment::raw(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::column;

    #[test]
    fn builds_placeholders_in_order() {
        let mut f: Fragment<()> = Fragment::raw("greatest(");
        f.push_bind(1_i64).push(", ").push_bind(2_i64).push(")");

        assert_eq!(f.to_sql(), "greatest($1, $2)");
        assert_eq!(f.params_ref().len(), 2);
    }

    #[test]
    fn can_splice_fragments() {
        let mut inner: Fragment<i64> = Fragment::empty();
        inner.push("nullif(").push_bind(0_i64).push(", ").push_bind(1_i64).push(")");

        let mut f: Fragment<i64> = Fragment::raw("coalesce(");
        f.push_fragment(inner).push(", ").push_bind(42_i64).push(")");

        assert_eq!(f.to_sql(), "coalesce(nullif($1, $2), $3)");
        assert_eq!(f.params_ref().len(), 3);
    }

    #[test]
    fn push_merges_trailing_raw_parts() {
        let mut a: Fragment<()> = Fragment::raw("a");
        a.push("b").push("").push("c");

        assert_eq!(a.to_sql(), "abc");
        assert_eq!(a.parts.len(), 1);
    }

    #[test]
    fn push_column_renders_identifier() {
        let c = column::<i64>("users.id").unwrap();
        let mut f: Fragment<i64> = Fragment::raw("max(");
        f.push_column(&c).push(")");

        assert_eq!(f.to_sql(), "max(users.id)");
    }

    #[test]
    fn bind_is_single_placeholder() {
        let f: Fragment<i32> = Fragment::bind(7_i32);
        assert_eq!(f.to_sql(), "$1");
        assert_eq!(f.params_ref().len(), 1);
    }

    #[test]
    fn aliased_renders_as_clause() {
        let f: Fragment<i64> = Fragment::raw("sum(amount)");
        let a = f.alias("total").unwrap();
        assert_eq!(a.to_sql(), "sum(amount) AS total");
        assert_eq!(a.name(), "total");
    }

    #[test]
    fn aliased_embeds_as_its_name() {
        let f: Fragment<i64> = Fragment::raw("sum(amount)");
        let a = f.alias("total").unwrap();
        assert_eq!(a.into_fragment().to_sql(), "total");
    }

    #[test]
    fn alias_rejects_invalid_names() {
        let f: Fragment<i64> = Fragment::raw("sum(amount)");
        assert!(f.clone().alias("1total").is_err());
        assert!(f.clone().alias("t otal").is_err());
        assert!(f.alias("a.b").is_err());
    }

    #[test]
    fn clone_preserves_rendering_and_params() {
        let mut f: Fragment<()> = Fragment::raw("lower(");
        f.push_bind("X").push(")");
        let g = f.clone();

        assert_eq!(f.to_sql(), g.to_sql());
        assert_eq!(f.params_ref().len(), g.params_ref().len());
    }

    #[test]
    fn retype_keeps_text() {
        let f: Fragment<i64> = Fragment::raw("count(*)");
        let g: Fragment<i32> = f.retype();
        assert_eq!(g.to_sql(), "count(*)");
    }
}
