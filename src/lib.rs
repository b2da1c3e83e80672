//! # pgfrag
//!
//! Typed SQL fragment helpers for Postgres query building.
//!
//! ## Features
//!
//! - **Typed fragments**: [`Fragment`] stores SQL pieces and bound parameters
//!   separately and renders `$1, $2, ...` placeholders at the end
//! - **Typed columns**: [`Column`] validates identifiers at construction and
//!   carries the column's logical data type
//! - **SQL function helpers**: [`distinct`] / [`max`] / [`count`] /
//!   [`coalesce`] compose fragments without manual placeholder bookkeeping
//! - **Result-list helpers**: [`take_first`] / [`take_first_or_err`] for
//!   expected-first-row access
//! - **No execution**: fragments hand their SQL text and parameter refs to a
//!   `tokio-postgres` executor; nothing here touches a connection
//!
//! ```ignore
//! use pgfrag::{Column, Fragment, coalesce, column, max};
//!
//! let amount: Column<i64> = column("orders.amount")?;
//! let total = coalesce(max(&amount), Fragment::bind(0_i64));
//!
//! assert_eq!(total.to_sql(), "coalesce(max(orders.amount), $1)");
//! // total.params_ref() feeds straight into client.query(&sql, &params)
//! ```

pub mod column;
pub mod error;
pub mod fns;
pub mod fragment;
pub mod prelude;
pub mod rows;

pub use column::{Column, column};
pub use error::{FragError, FragResult};
pub use fns::{coalesce, count, distinct, max};
pub use fragment::{Aliased, Fragment, IntoFragment, Param, frag};
pub use rows::{take_first, take_first_or_err};
