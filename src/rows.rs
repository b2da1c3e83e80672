//! First-element helpers for query result lists.

use crate::error::{FragError, FragResult};

/// First element of a result list, or `None` when the list is empty.
pub fn take_first<T>(items: impl IntoIterator<Item = T>) -> Option<T> {
    items.into_iter().next()
}

/// First element of a result list, or a not found error when the list is
/// empty.
///
/// For callers that treat an empty result set as an invariant violation
/// (expected-exactly-one-row queries).
pub fn take_first_or_err<T>(items: impl IntoIterator<Item = T>) -> FragResult<T> {
    take_first(items).ok_or_else(|| FragError::not_found("first row not found"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_first_of_empty_is_none() {
        assert_eq!(take_first(Vec::<i32>::new()), None);
    }

    #[test]
    fn take_first_returns_head() {
        assert_eq!(take_first(vec![1, 2, 3]), Some(1));
    }

    #[test]
    fn take_first_or_err_of_empty_is_not_found() {
        let err = take_first_or_err(Vec::<i32>::new()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn take_first_or_err_returns_head() {
        assert_eq!(take_first_or_err(vec!["a", "b"]).unwrap(), "a");
    }

    #[test]
    fn input_is_consumed_not_mutated() {
        let rows = vec![String::from("only")];
        let first = take_first_or_err(rows).unwrap();
        assert_eq!(first, "only");
    }
}
