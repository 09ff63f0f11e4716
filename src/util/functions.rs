use std::collections::HashSet;
use std::hash::Hash;

/// Determines how many elements within the provided reference slice are unique by the given
/// property.
///
/// # Parameters
///
/// * `slice` A reference slice from which to derive values to count.
/// * `selector` A closure that defines the criteria used to determine when a value in the slice
/// should be added to the count.
///
/// # Examples
/// ```
/// use asset_approval_smart_contract::util::functions::distinct_count_by_property;
///
/// let values = vec!["a", "b", "c", "a"];
/// let distinct_count = distinct_count_by_property(&values, |s| s);
/// assert_eq!(3, distinct_count);
/// ```
pub fn distinct_count_by_property<F, T, U>(slice: &[T], selector: F) -> usize
where
    U: Sized + Eq + Hash,
    F: FnMut(&T) -> &U,
{
    slice.iter().map(selector).collect::<HashSet<_>>().len()
}

/// Clamps an optional caller-provided page size into the range allowed for listing queries.
///
/// # Examples
/// ```
/// use asset_approval_smart_contract::util::functions::query_limit;
///
/// assert_eq!(10, query_limit(None));
/// assert_eq!(30, query_limit(Some(500)));
/// assert_eq!(1, query_limit(Some(0)));
/// ```
pub fn query_limit(limit: Option<u32>) -> usize {
    use crate::util::constants::{DEFAULT_QUERY_LIMIT, MAX_QUERY_LIMIT};
    limit
        .unwrap_or(DEFAULT_QUERY_LIMIT)
        .clamp(1, MAX_QUERY_LIMIT) as usize
}
