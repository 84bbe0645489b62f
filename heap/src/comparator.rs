/// Ordering policy of a heap.
///
/// `precedes(a, b)` is true when `a` must yield priority to `b`, that is,
/// `b` belongs closer to the root. The relation has to be a strict weak
/// ordering.
pub trait Comparator<ValueT: ?Sized> {
    fn precedes(&self, lhs: &ValueT, rhs: &ValueT) -> bool;
}

impl<ValueT, CompareT> Comparator<ValueT> for CompareT
where
    ValueT: ?Sized,
    CompareT: Fn(&ValueT, &ValueT) -> bool,
{
    #[inline(always)]
    fn precedes(&self, lhs: &ValueT, rhs: &ValueT) -> bool {
        self(lhs, rhs)
    }
}

/// `lhs < rhs`; the greatest value stays on top.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub struct Less;

impl<ValueT: PartialOrd + ?Sized> Comparator<ValueT> for Less {
    #[inline(always)]
    fn precedes(&self, lhs: &ValueT, rhs: &ValueT) -> bool {
        lhs < rhs
    }
}

/// `lhs > rhs`; the least value stays on top.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub struct Greater;

impl<ValueT: PartialOrd + ?Sized> Comparator<ValueT> for Greater {
    #[inline(always)]
    fn precedes(&self, lhs: &ValueT, rhs: &ValueT) -> bool {
        lhs > rhs
    }
}

#[cfg(test)]
mod test {
    use super::{Comparator, Greater, Less};

    #[test]
    fn test_policies() {
        assert!(Less.precedes(&1, &2));
        assert!(!Less.precedes(&2, &1));
        assert!(!Less.precedes(&2, &2));

        assert!(Greater.precedes(&2, &1));
        assert!(!Greater.precedes(&1, &2));
        assert!(!Greater.precedes(&2, &2));
    }

    #[test]
    fn test_closure() {
        let by_length = |lhs: &&str, rhs: &&str| lhs.len() < rhs.len();
        assert!(by_length.precedes(&"ab", &"abc"));
        assert!(!by_length.precedes(&"abc", &"xyz"));
    }
}
