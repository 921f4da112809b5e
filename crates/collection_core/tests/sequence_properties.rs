//! End-to-end behaviour of shuffling and chunking together.

use collection_core::ext::{IteratorExt, SliceExt};
use collection_core::rng::CollectionRng;
use collection_core::shuffle::{shuffle_in_place_seeded, shuffle_iter_seeded};
use collection_core::split::split;
use collection_core::CollectionError;

fn sample() -> Vec<i32> {
    vec![
        4, 8, 4, 8, 5, 9, 6, 2, 7, 6, 7, 2, 4, 8, 1, 1, 6, 9, 8, 9, 6, 7, 3, 7, 0, 9, 6, 8, 5, 4, 3,
        8, 4,
    ]
}

#[test]
fn test_split_thirty_three_by_ten() {
    let chunks = split(&sample(), 10).unwrap();
    let lengths: Vec<usize> = chunks.iter().map(Vec::len).collect();

    assert_eq!(lengths, vec![10, 10, 10, 3]);
    assert_eq!(chunks.concat(), sample());
}

#[test]
fn test_split_rejects_non_positive_sizes() {
    assert_eq!(
        split(&sample(), 0),
        Err(CollectionError::InvalidArgument(
            "group size must be strictly positive, got 0".to_string()
        ))
    );
    assert!(collection_core::split::group_size_from_signed(-5).is_err());
}

#[test]
fn test_shuffled_chunks_preserve_multiset() {
    let mut items = sample();
    shuffle_in_place_seeded(&mut items, 666);

    let mut rejoined = items.split_chunks(7).unwrap().concat();
    rejoined.sort_unstable();

    let mut expected = sample();
    expected.sort_unstable();
    assert_eq!(rejoined, expected);
}

#[test]
fn test_same_seed_same_order_across_sequences() {
    let mut a = sample();
    let mut b = sample();
    a.shuffle_in_place_seeded(666);
    b.shuffle_in_place_seeded(666);
    assert_eq!(a, b);
    assert_ne!(a, sample());
}

#[test]
fn test_lazy_shuffle_restarts_by_reinvocation() {
    let first: Vec<i32> = shuffle_iter_seeded(sample(), 10).collect();
    let again: Vec<i32> = shuffle_iter_seeded(sample(), 10).collect();
    assert_eq!(first, again);

    let mut rng = CollectionRng::from_seed(10);
    let advanced: Vec<i32> = sample().into_iter().shuffle_iter_with(&mut rng).collect();
    let next: Vec<i32> = sample().into_iter().shuffle_iter_with(&mut rng).collect();
    assert_eq!(advanced, first);
    assert_ne!(next, first);
}
