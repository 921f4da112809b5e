//! Ordering, filtering and grouping into owned collections.

use std::collections::HashMap;
use std::hash::Hash;

/// Sort direction for [`order_by_to_vec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Smallest key first.
    #[default]
    Ascending,
    /// Largest key first.
    Descending,
}

/// Collects `items` into a vector sorted by `key`.
///
/// The sort is stable in both directions: elements with equal keys keep
/// their source order.
///
/// # Examples
///
/// ```rust
/// use collection_core::ops::{order_by_to_vec, Order};
///
/// let words = ["pear", "fig", "apple", "kiwi"];
/// let by_len = order_by_to_vec(words, |w| w.len(), Order::Descending);
/// assert_eq!(by_len, vec!["apple", "pear", "kiwi", "fig"]);
/// ```
pub fn order_by_to_vec<T, K, I, F>(items: I, mut key: F, order: Order) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut sorted: Vec<T> = items.into_iter().collect();
    match order {
        Order::Ascending => sorted.sort_by_key(|item| key(item)),
        Order::Descending => sorted.sort_by(|a, b| key(b).cmp(&key(a))),
    }
    sorted
}

/// Collects the elements of `items` matching `predicate`.
pub fn where_to_vec<T, I, P>(items: I, predicate: P) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    P: FnMut(&T) -> bool,
{
    items.into_iter().filter(predicate).collect()
}

/// Groups `items` by `key`.
///
/// Each group keeps its elements in source order.
///
/// # Examples
///
/// ```rust
/// use collection_core::ops::make_dictionary;
///
/// let books = [("Le Guin", "Lathe"), ("Banks", "Excession"), ("Le Guin", "Tehanu")];
/// let by_author = make_dictionary(books, |book| book.0);
/// assert_eq!(by_author["Le Guin"].len(), 2);
/// assert_eq!(by_author["Banks"], vec![("Banks", "Excession")]);
/// ```
pub fn make_dictionary<T, K, I, F>(items: I, mut key: F) -> HashMap<K, Vec<T>>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_ascending_is_stable() {
        let pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        let sorted = order_by_to_vec(pairs, |p| p.0, Order::Ascending);
        assert_eq!(sorted, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_order_descending_is_stable() {
        let pairs = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        let sorted = order_by_to_vec(pairs, |p| p.0, Order::Descending);
        assert_eq!(sorted, vec![(2, 'a'), (2, 'c'), (1, 'b'), (1, 'd')]);
    }

    #[test]
    fn test_where_to_vec() {
        let evens = where_to_vec(1..=10, |x| x % 2 == 0);
        assert_eq!(evens, vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_make_dictionary_keeps_source_order() {
        let groups = make_dictionary(0..10, |x| x % 3);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[&0], vec![0, 3, 6, 9]);
        assert_eq!(groups[&1], vec![1, 4, 7]);
        assert_eq!(groups[&2], vec![2, 5, 8]);
    }

    #[test]
    fn test_make_dictionary_empty() {
        let groups = make_dictionary(Vec::<String>::new(), |s| s.len());
        assert!(groups.is_empty());
    }
}
