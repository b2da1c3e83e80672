//! SQL function fragment builders.
//!
//! Each helper arranges a SQL function call around its embedded column or
//! fragment and leaves placeholder interpolation to the fragment layer. None
//! of these execute SQL, validate column existence, or inspect runtime
//! values; a bad expression surfaces at query-execution time in the engine,
//! not here.

use crate::column::Column;
use crate::fragment::{Fragment, IntoFragment};

/// `distinct(<column>)`, keeping the column's data type.
pub fn distinct<T>(column: &Column<T>) -> Fragment<T> {
    let mut f = Fragment::raw("distinct(");
    f.push_column(column).push(")");
    f
}

/// `max(<column>)`, keeping the column's data type.
pub fn max<T>(column: &Column<T>) -> Fragment<T> {
    let mut f = Fragment::raw("max(");
    f.push_column(column).push(")");
    f
}

/// `cast(count(<column>) as integer)`.
///
/// The cast pins the driver's `bigint` count representation to a fixed-width
/// integer.
pub fn count<T>(column: &Column<T>) -> Fragment<i32> {
    let mut f = Fragment::raw("cast(count(");
    f.push_column(column).push(") as integer)");
    f
}

/// `coalesce(<value>, <default>)`, keeping the value's logical type.
///
/// The primary value may be a plain fragment or an aliased one; an aliased
/// fragment embeds as its alias name.
pub fn coalesce<T>(value: impl IntoFragment<T>, default: Fragment<T>) -> Fragment<T> {
    let mut f = Fragment::raw("coalesce(");
    f.push_fragment(value.into_fragment())
        .push(", ")
        .push_fragment(default)
        .push(")");
    f
}
