use bin_radix_sort::{partition_by_bit, sort_iterative, sort_recursive, RadixKey};
use proptest::prelude::*;

fn counts<T: Ord + Copy>(values: &[T]) -> std::collections::BTreeMap<T, usize> {
    let mut counts = std::collections::BTreeMap::new();
    for v in values {
        *counts.entry(*v).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn prop_recursive_orders_and_permutes(values in prop::collection::vec(any::<u16>(), 0..512)) {
        let mut sorted = values.clone();
        sort_recursive(&mut sorted);

        prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(counts(&sorted), counts(&values));
    }

    #[test]
    fn prop_iterative_orders_and_permutes(values in prop::collection::vec(any::<u32>(), 0..512)) {
        let mut sorted = values.clone();
        sort_iterative(&mut sorted);

        prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(counts(&sorted), counts(&values));
    }

    #[test]
    fn prop_variants_match_reference(values in prop::collection::vec(any::<u64>(), 0..512)) {
        let mut reference = values.clone();
        reference.sort_unstable();
        let mut recursive = values.clone();
        sort_recursive(&mut recursive);
        let mut iterative = values;
        sort_iterative(&mut iterative);

        prop_assert_eq!(&recursive, &reference);
        prop_assert_eq!(&iterative, &reference);
    }

    #[test]
    fn prop_idempotent(values in prop::collection::vec(any::<u8>(), 0..512)) {
        let mut once = values;
        sort_iterative(&mut once);
        let mut twice = once.clone();
        sort_recursive(&mut twice);
        sort_iterative(&mut twice);

        prop_assert_eq!(twice, once);
    }

    #[test]
    fn prop_partition_splits_by_bit(values in prop::collection::vec(any::<u32>(), 0..256), bit in 0u32..32) {
        let mut partitioned = values.clone();
        let split = partition_by_bit(&mut partitioned, bit);

        prop_assert_eq!(split, values.iter().filter(|v| !v.bit(bit)).count());
        prop_assert!(partitioned[..split].iter().all(|v| !v.bit(bit)));
        prop_assert!(partitioned[split..].iter().all(|v| v.bit(bit)));
        prop_assert_eq!(counts(&partitioned), counts(&values));
    }
}
