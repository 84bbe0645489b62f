use super::Comparator;

// Implicit complete binary tree over a slice, rooted at position 0.

#[inline(always)]
pub(crate) fn parent_of(position: usize) -> usize {
    debug_assert!(position != 0);
    return (position - 1) / 2;
}

#[inline(always)]
pub(crate) fn left_of(position: usize) -> usize {
    return 2 * position + 1;
}

#[inline(always)]
pub(crate) fn right_of(position: usize) -> usize {
    2 * position + 2
}

/// Moves the value at `position` towards the root until its parent is not
/// outranked by it.
pub fn up_heap<ValueT, CompareT>(array: &mut [ValueT], position: usize, compare: &CompareT)
where
    CompareT: Comparator<ValueT> + ?Sized,
{
    debug_assert!(position < array.len());
    let mut current = position;
    while current != 0 {
        let parent = parent_of(current);
        if compare.precedes(&array[parent], &array[current]) {
            array.swap(parent, current);
            current = parent;
        } else {
            break;
        }
    }
}

/// Moves the value at `position` towards the leaves, treating every
/// position at or beyond `bound` as absent.
///
/// A child replaces the current candidate only when it strictly outranks
/// it, so equal values are never exchanged.
pub fn down_heap<ValueT, CompareT>(
    array: &mut [ValueT],
    position: usize,
    bound: usize,
    compare: &CompareT,
) where
    CompareT: Comparator<ValueT> + ?Sized,
{
    debug_assert!(bound <= array.len());
    let mut current = position;
    loop {
        let left = left_of(current);
        if left >= bound {
            break;
        }
        let right = right_of(current);
        let mut winner = current;
        if compare.precedes(&array[winner], &array[left]) {
            winner = left;
        }
        if right < bound && compare.precedes(&array[winner], &array[right]) {
            winner = right;
        }
        if winner == current {
            break;
        }
        array.swap(current, winner);
        current = winner;
    }
}

/// Restores the heap order around a value whose priority changed in either
/// direction: sifts up if it now outranks its parent, down otherwise.
pub fn update_heap<ValueT, CompareT>(array: &mut [ValueT], position: usize, compare: &CompareT)
where
    CompareT: Comparator<ValueT> + ?Sized,
{
    debug_assert!(position < array.len());
    if position != 0 && compare.precedes(&array[parent_of(position)], &array[position]) {
        up_heap(array, position, compare);
    } else {
        down_heap(array, position, array.len(), compare);
    }
}

/// Rearranges `array` into heap order in linear time.
pub fn make_heap<ValueT, CompareT>(array: &mut [ValueT], compare: &CompareT)
where
    CompareT: Comparator<ValueT> + ?Sized,
{
    let len = array.len();
    // internal positions are 0..len / 2, the rest are leaves
    for position in (0..len / 2).rev() {
        down_heap(array, position, len, compare);
    }
}

/// Sorts a slice that is already in heap order. The top is repeatedly
/// moved behind the shrinking heap, so the result runs from the lowest
/// priority to the highest (ascending for `Less`).
pub fn sort_heap<ValueT, CompareT>(array: &mut [ValueT], compare: &CompareT)
where
    CompareT: Comparator<ValueT> + ?Sized,
{
    for bound in (1..array.len()).rev() {
        array.swap(0, bound);
        down_heap(array, 0, bound, compare);
    }
}

/// In-place heap-sort without auxiliary storage.
pub fn heap_sort<ValueT, CompareT>(array: &mut [ValueT], compare: &CompareT)
where
    CompareT: Comparator<ValueT> + ?Sized,
{
    make_heap(array, compare);
    sort_heap(array, compare);
}

/// Whether no value in `array` outranks its parent.
pub fn is_heap<ValueT, CompareT>(array: &[ValueT], compare: &CompareT) -> bool
where
    CompareT: Comparator<ValueT> + ?Sized,
{
    (1..array.len())
        .all(|position| !compare.precedes(&array[parent_of(position)], &array[position]))
}

#[cfg(test)]
mod test {
    use rand::{Rng, SeedableRng, rngs::SmallRng};

    use super::{
        down_heap, heap_sort, is_heap, left_of, make_heap, parent_of, right_of, sort_heap,
        up_heap, update_heap,
    };
    use crate::{Greater, Less};

    #[test]
    fn test_topology() {
        assert_eq!(parent_of(1), 0);
        assert_eq!(parent_of(2), 0);
        assert_eq!(parent_of(3), 1);
        assert_eq!(parent_of(6), 2);
        for position in 0..100 {
            assert_eq!(parent_of(left_of(position)), position);
            assert_eq!(parent_of(right_of(position)), position);
            assert_eq!(right_of(position), left_of(position) + 1);
        }
    }

    #[test]
    fn test_up_heap() {
        let mut array = vec![9, 5, 8, 1, 3, 2, 7];
        array.push(10);
        let last = array.len() - 1;
        up_heap(&mut array, last, &Less);
        assert_eq!(array[0], 10);
        assert!(is_heap(&array, &Less));
    }

    #[test]
    fn test_down_heap_respects_bound() {
        // the 9 at position 3 is past the bound and must not move up
        let mut array = vec![1, 2, 3, 9];
        down_heap(&mut array, 0, 3, &Less);
        assert_eq!(array, vec![3, 2, 1, 9]);

        let mut array = vec![1, 2, 3, 9];
        down_heap(&mut array, 0, 4, &Less);
        assert_eq!(array, vec![3, 2, 1, 9]);
        down_heap(&mut array, 1, 4, &Less);
        assert_eq!(array, vec![3, 9, 1, 2]);
    }

    #[test]
    fn test_down_heap_keeps_equal_values() {
        // equal children never displace the parent, and the right child only
        // wins on strict domination over the left
        let mut array = vec![(5, 'p'), (5, 'l'), (5, 'r')];
        let by_key = |lhs: &(i32, char), rhs: &(i32, char)| lhs.0 < rhs.0;
        down_heap(&mut array, 0, 3, &by_key);
        assert_eq!(array, vec![(5, 'p'), (5, 'l'), (5, 'r')]);

        let mut array = vec![(1, 'p'), (5, 'l'), (5, 'r')];
        down_heap(&mut array, 0, 3, &by_key);
        assert_eq!(array, vec![(5, 'l'), (1, 'p'), (5, 'r')]);
    }

    #[test]
    fn test_update_heap() {
        let mut array = vec![9, 5, 8, 1, 3, 2, 7];
        array[5] = 20;
        update_heap(&mut array, 5, &Less);
        assert_eq!(array[0], 20);
        assert!(is_heap(&array, &Less));

        array[0] = 0;
        update_heap(&mut array, 0, &Less);
        assert!(is_heap(&array, &Less));
    }

    #[test]
    fn test_make_heap() {
        let mut array = vec![5, 3, 8, 1, 9, 2];
        make_heap(&mut array, &Less);
        assert!(is_heap(&array, &Less));
        assert_eq!(array[0], 9);

        let snapshot = array.clone();
        make_heap(&mut array, &Less);
        assert_eq!(array, snapshot);

        let mut empty: Vec<i32> = Vec::new();
        make_heap(&mut empty, &Less);
        assert!(empty.is_empty());

        let mut single = vec![42];
        make_heap(&mut single, &Greater);
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn test_heap_sort() {
        let mut array = vec![5, 3, 8, 1, 9, 2];
        heap_sort(&mut array, &Less);
        assert_eq!(array, vec![1, 2, 3, 5, 8, 9]);

        let mut array = vec![5, 3, 8, 1, 9, 2];
        heap_sort(&mut array, &Greater);
        assert_eq!(array, vec![9, 8, 5, 3, 2, 1]);

        let mut array = vec![4, 4, 2, 4, 2];
        heap_sort(&mut array, &Less);
        assert_eq!(array, vec![2, 2, 4, 4, 4]);
    }

    #[test]
    fn test_random() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let len = rng.gen_range(0..64);
            let values: Vec<i32> = (0..len).map(|_| rng.gen_range(-20..20)).collect();

            let mut array = values.clone();
            make_heap(&mut array, &Less);
            assert!(is_heap(&array, &Less));
            if let Some(&top) = array.first() {
                assert_eq!(Some(&top), values.iter().max());
            }

            sort_heap(&mut array, &Less);
            let mut expected = values.clone();
            expected.sort();
            assert_eq!(array, expected);

            let mut array = values.clone();
            heap_sort(&mut array, &Greater);
            expected.reverse();
            assert_eq!(array, expected);
        }
    }
}
