//! Helpers treating an absent collection as an empty one.

/// Returns the slice, or an empty slice when absent.
///
/// # Examples
///
/// ```rust
/// use collection_core::ops::or_empty;
///
/// let missing: Option<&[i32]> = None;
/// assert!(or_empty(missing).is_empty());
/// assert_eq!(or_empty(Some(&[1, 2][..])), &[1, 2]);
/// ```
#[inline]
pub fn or_empty<T>(items: Option<&[T]>) -> &[T] {
    items.unwrap_or_default()
}

/// Returns `true` when the slice is absent or has no elements.
#[inline]
pub fn is_none_or_empty<T>(items: Option<&[T]>) -> bool {
    or_empty(items).is_empty()
}

/// Appends every element of `items` to `target`; an absent source adds nothing.
///
/// # Examples
///
/// ```rust
/// use collection_core::ops::add_all;
///
/// let mut target = vec![1];
/// add_all(&mut target, Some(vec![2, 3]));
/// add_all(&mut target, None::<Vec<i32>>);
/// assert_eq!(target, vec![1, 2, 3]);
/// ```
pub fn add_all<T, C, I>(target: &mut C, items: Option<I>)
where
    C: Extend<T>,
    I: IntoIterator<Item = T>,
{
    if let Some(items) = items {
        target.extend(items);
    }
}

/// Removes, for each element of `items`, its first equal occurrence in `target`.
///
/// Elements without a match are ignored; an absent source removes nothing.
/// Runs in `O(n * m)`.
pub fn remove_all<T, I>(target: &mut Vec<T>, items: Option<I>)
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
{
    for item in items.into_iter().flatten() {
        if let Some(position) = target.iter().position(|existing| *existing == item) {
            target.remove(position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_or_empty() {
        assert_eq!(or_empty::<u8>(None), &[] as &[u8]);
        assert_eq!(or_empty(Some(&[1, 2, 3][..])), &[1, 2, 3]);
    }

    #[test]
    fn test_is_none_or_empty() {
        assert!(is_none_or_empty::<u8>(None));
        assert!(is_none_or_empty::<u8>(Some(&[])));
        assert!(!is_none_or_empty(Some(&[0][..])));
    }

    #[test]
    fn test_add_all_into_set() {
        let mut set = BTreeSet::from([1, 2]);
        add_all(&mut set, Some([2, 3, 4]));
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_remove_all_first_occurrence_only() {
        let mut target = vec![1, 2, 1, 3, 1];
        remove_all(&mut target, Some(vec![1, 1, 7]));
        assert_eq!(target, vec![2, 3, 1]);
    }

    #[test]
    fn test_remove_all_absent_source() {
        let mut target = vec![1, 2];
        remove_all(&mut target, None::<Vec<i32>>);
        assert_eq!(target, vec![1, 2]);
    }
}
