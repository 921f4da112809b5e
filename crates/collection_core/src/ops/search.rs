//! Positional extrema and subset checks.
//!
//! Emptiness is reported as `None` rather than a sentinel index.

use std::collections::HashSet;
use std::hash::Hash;

/// Returns the index of the smallest element, or `None` when empty.
///
/// The first occurrence wins ties. Incomparable values (e.g. `NaN`) never
/// replace the current minimum.
///
/// # Examples
///
/// ```rust
/// use collection_core::ops::min_index;
///
/// assert_eq!(min_index(&[3, 4, 5, 7, 0, -1, 9, 0, 9]), Some(5));
/// assert_eq!(min_index::<i32>(&[]), None);
/// ```
pub fn min_index<T: PartialOrd>(items: &[T]) -> Option<usize> {
    extremum_index(items, |candidate, best| candidate < best)
}

/// Returns the index of the largest element, or `None` when empty.
///
/// The first occurrence wins ties.
///
/// # Examples
///
/// ```rust
/// use collection_core::ops::max_index;
///
/// assert_eq!(max_index(&[3, 4, 5, 7, 0, -1, 9, 0, 9]), Some(6));
/// ```
pub fn max_index<T: PartialOrd>(items: &[T]) -> Option<usize> {
    extremum_index(items, |candidate, best| candidate > best)
}

fn extremum_index<T, F>(items: &[T], better: F) -> Option<usize>
where
    F: Fn(&T, &T) -> bool,
{
    let mut iter = items.iter().enumerate();
    let (mut best_index, mut best) = iter.next()?;
    for (index, value) in iter {
        if better(value, best) {
            best_index = index;
            best = value;
        }
    }
    Some(best_index)
}

/// Returns `true` when every element of `subset` also occurs in `superset`.
///
/// Multiplicity is ignored and an empty subset is always contained.
///
/// # Examples
///
/// ```rust
/// use collection_core::ops::contains_all;
///
/// assert!(contains_all([1, 2, 3], [3, 3, 1]));
/// assert!(!contains_all([1, 2, 3], [4]));
/// assert!(contains_all(Vec::<i32>::new(), []));
/// ```
pub fn contains_all<T, A, B>(superset: A, subset: B) -> bool
where
    T: Eq + Hash,
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
{
    let superset: HashSet<T> = superset.into_iter().collect();
    subset.into_iter().all(|item| superset.contains(&item))
}
