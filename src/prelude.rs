//! Convenient imports for typical `pgfrag` usage.
//!
//! This module is intentionally small and focused on the most common APIs so
//! examples can start with:
//!
//! ```ignore
//! use pgfrag::prelude::*;
//! ```

pub use crate::{coalesce, column, count, distinct, frag, max, take_first, take_first_or_err};
pub use crate::{Aliased, Column, FragError, FragResult, Fragment, IntoFragment};
