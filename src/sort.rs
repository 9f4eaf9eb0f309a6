// In-place MSD binary radix sort (radix 2).
// Each pass splits a range by one bit, starting at the most significant bit, and then handles both
// halves with the next lower bit. Unsigned integers compare lexicographically over their bits from
// the top, so after the last bit every range is sorted.

use crate::RadixKey;

/// Partition `values` by bit `bit`, moving all values with that bit cleared to the front.
///
/// Returns the number of values with the bit cleared, which is the index of the first value with
/// the bit set. The partition is not stable.
#[inline]
pub fn partition_by_bit<T: RadixKey>(values: &mut [T], bit: u32) -> usize {
    debug_assert!(bit < T::BITS);

    let mut left = 0;
    // exclusive, the last unclassified value is at `end - 1`
    let mut end = values.len();

    while left < end {
        if values[left].bit(bit) {
            end -= 1;
            // the value swapped in from the back is not classified yet, so `left` stays
            values.swap(left, end);
        } else {
            left += 1;
        }
    }

    left
}

/// Sort `values` in ascending order by recursing on both halves of every partition.
///
/// The recursion depth is bounded by the bit width of `T`.
#[inline(never)]
pub fn sort_recursive<T: RadixKey>(values: &mut [T]) {
    sort_recursive_bits(values, T::BITS);
}

/// `bits` is the number of low bits that still have to be looked at, 0 means none are left.
fn sort_recursive_bits<T: RadixKey>(values: &mut [T], bits: u32) {
    if values.len() <= 1 || bits == 0 {
        return;
    }

    let bit = bits - 1;
    let split = partition_by_bit(values, bit);
    let (low, high) = values.split_at_mut(split);

    sort_recursive_bits(low, bit);
    sort_recursive_bits(high, bit);
}

/// A range of the input that still has to be partitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Task {
    pub(crate) start: usize,
    pub(crate) len: usize,
    /// Number of low bits not yet partitioned on.
    pub(crate) bits: u32,
}

/// Upper bound for the number of tasks pending at the same time in [`sort_iterative`].
///
/// The work-list is processed depth first. Every split pushes a low and a high half one level
/// deeper, and the high half is popped immediately. So at any time there is at most one waiting
/// low half per level `1..=BITS`, plus the high half of the deepest split.
pub fn work_list_capacity<T: RadixKey>() -> usize {
    T::BITS as usize + 1
}

/// Sort `values` in ascending order using an explicit work-list instead of recursion.
///
/// Produces the same result as [`sort_recursive`]. The work-list is allocated once, with room for
/// [`work_list_capacity`] tasks.
#[inline(never)]
pub fn sort_iterative<T: RadixKey>(values: &mut [T]) {
    let mut work_list = Vec::with_capacity(work_list_capacity::<T>());
    drain_work_list(values, &mut work_list, |_| ());
}

/// Run the work-list until it is empty.
///
/// `after_split` sees the pending tasks after both halves of a split have been pushed.
pub(crate) fn drain_work_list<T, F>(values: &mut [T], work_list: &mut Vec<Task>, mut after_split: F)
where
    T: RadixKey,
    F: FnMut(&[Task]),
{
    work_list.push(Task {
        start: 0,
        len: values.len(),
        bits: T::BITS,
    });

    while let Some(Task { start, len, bits }) = work_list.pop() {
        if len <= 1 || bits == 0 {
            continue;
        }

        let bit = bits - 1;
        let split = partition_by_bit(&mut values[start..start + len], bit);

        work_list.push(Task {
            start,
            len: split,
            bits: bit,
        });
        work_list.push(Task {
            start: start + split,
            len: len - split,
            bits: bit,
        });

        debug_assert!(work_list.len() <= work_list_capacity::<T>());
        after_split(work_list.as_slice());
    }
}
