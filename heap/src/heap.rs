use std::collections::TryReserveError;

use super::{Comparator, Greater, Less, heap_sort};

/// Array-backed binary heap ordered by `CompareT`.
///
/// The length of `array` is the logical size; its spare capacity is kept
/// across removals so that later insertions reuse it. Positions handed to
/// [`Heap::remove`] are plain indices into [`Heap::as_slice`] and are only
/// meaningful until the next mutation.
pub struct Heap<ValueT, CompareT>
where
    CompareT: Comparator<ValueT>,
{
    compare: CompareT,
    array: Vec<ValueT>,
}

/// The greatest value on top.
pub type MaxHeap<ValueT> = Heap<ValueT, Less>;

/// The least value on top.
pub type MinHeap<ValueT> = Heap<ValueT, Greater>;

impl<ValueT, CompareT> Heap<ValueT, CompareT>
where
    CompareT: Comparator<ValueT>,
{
    #[inline(always)]
    pub fn new(compare: CompareT) -> Self {
        Self {
            compare,
            array: Vec::default(),
        }
    }

    pub fn with_capacity(compare: CompareT, capacity: usize) -> Self {
        Self {
            compare,
            array: Vec::with_capacity(capacity),
        }
    }

    /// Takes over `array` and arranges it into heap order in linear time.
    pub fn from_vec(compare: CompareT, array: Vec<ValueT>) -> Self {
        let mut heap = Self { compare, array };
        heap.build();
        heap
    }

    pub fn from_values(compare: CompareT, values: impl IntoIterator<Item = ValueT>) -> Self {
        Self::from_vec(compare, values.into_iter().collect())
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.array.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.array.capacity()
    }

    pub fn comparator(&self) -> &CompareT {
        &self.compare
    }

    /// Active values in array order, not in priority order.
    #[inline(always)]
    pub fn as_slice(&self) -> &[ValueT] {
        &self.array
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValueT> {
        self.array.iter()
    }

    #[inline(always)]
    pub fn peek(&self) -> Option<&ValueT> {
        self.array.first()
    }

    /// The value with the highest priority.
    ///
    /// # Panics
    /// If the heap is empty.
    pub fn top(&self) -> &ValueT {
        assert!(!self.is_empty(), "top of an empty heap");
        &self.array[0]
    }

    pub fn reserve(&mut self, additional: usize) {
        self.array.reserve(additional);
    }

    pub fn insert(&mut self, value: ValueT) {
        let position = self.array.len();
        self.array.push(value);
        heap_sort::up_heap(&mut self.array, position, &self.compare);
    }

    /// Like [`Heap::insert`], but reports a failed allocation instead of
    /// aborting. The heap is untouched on failure.
    pub fn try_insert(&mut self, value: ValueT) -> Result<(), TryReserveError> {
        self.array.try_reserve(1)?;
        self.insert(value);
        return Ok(());
    }

    /// Removes the value at `position` of [`Heap::as_slice`].
    ///
    /// The last value takes over the slot and is sifted up or down from
    /// there, whichever the heap order requires.
    ///
    /// # Panics
    /// If `position` is not below [`Heap::len`].
    pub fn remove(&mut self, position: usize) -> ValueT {
        assert!(
            position < self.array.len(),
            "removal position {} out of range for heap of size {}",
            position,
            self.array.len()
        );
        let value = self.array.swap_remove(position);
        if position != self.array.len() {
            heap_sort::update_heap(&mut self.array, position, &self.compare);
        }
        return value;
    }

    /// # Panics
    /// If the heap is empty.
    pub fn remove_top(&mut self) -> ValueT {
        assert!(!self.is_empty(), "remove_top on an empty heap");
        self.remove(0)
    }

    pub fn pop(&mut self) -> Option<ValueT> {
        if self.array.is_empty() {
            return None;
        } else {
            return Some(self.remove(0));
        }
    }

    /// Restores heap order over the whole array, e.g. after [`Heap::sort`].
    pub fn build(&mut self) {
        heap_sort::make_heap(&mut self.array, &self.compare);
    }

    /// Heap-sorts the values in place, lowest priority first (ascending for
    /// [`MaxHeap`]).
    ///
    /// The array is left sorted rather than in heap order; call
    /// [`Heap::build`] before inserting or removing again.
    pub fn sort(&mut self) {
        heap_sort::sort_heap(&mut self.array, &self.compare);
    }

    pub fn clear(&mut self) {
        self.array.clear();
    }

    /// The underlying array in its current layout.
    pub fn into_vec(self) -> Vec<ValueT> {
        self.array
    }

    pub fn into_sorted_vec(mut self) -> Vec<ValueT> {
        self.sort();
        self.array
    }

    #[cfg(test)]
    pub(crate) fn is_heap(&self) -> bool {
        heap_sort::is_heap(&self.array, &self.compare)
    }
}

impl<ValueT, CompareT> Default for Heap<ValueT, CompareT>
where
    CompareT: Comparator<ValueT> + Default,
{
    fn default() -> Self {
        Self::new(CompareT::default())
    }
}

impl<ValueT, CompareT> Clone for Heap<ValueT, CompareT>
where
    ValueT: Clone,
    CompareT: Comparator<ValueT> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            compare: self.compare.clone(),
            array: self.array.clone(),
        }
    }
}

// Array layout equality: the same values arranged differently compare unequal.
impl<ValueT, CompareT> PartialEq for Heap<ValueT, CompareT>
where
    ValueT: PartialEq,
    CompareT: Comparator<ValueT>,
{
    fn eq(&self, other: &Self) -> bool {
        self.array == other.array
    }
}

impl<ValueT, CompareT> Eq for Heap<ValueT, CompareT>
where
    ValueT: Eq,
    CompareT: Comparator<ValueT>,
{
}

impl<ValueT, CompareT> From<Vec<ValueT>> for Heap<ValueT, CompareT>
where
    CompareT: Comparator<ValueT> + Default,
{
    fn from(array: Vec<ValueT>) -> Self {
        Self::from_vec(CompareT::default(), array)
    }
}

impl<ValueT, CompareT> FromIterator<ValueT> for Heap<ValueT, CompareT>
where
    CompareT: Comparator<ValueT> + Default,
{
    fn from_iter<IteratorT: IntoIterator<Item = ValueT>>(values: IteratorT) -> Self {
        Self::from_values(CompareT::default(), values)
    }
}

impl<ValueT, CompareT> Extend<ValueT> for Heap<ValueT, CompareT>
where
    CompareT: Comparator<ValueT>,
{
    fn extend<IteratorT: IntoIterator<Item = ValueT>>(&mut self, values: IteratorT) {
        let values = values.into_iter();
        self.array.reserve(values.size_hint().0);
        for value in values {
            self.insert(value);
        }
    }
}

impl<'a, ValueT, CompareT> IntoIterator for &'a Heap<ValueT, CompareT>
where
    CompareT: Comparator<ValueT>,
{
    type Item = &'a ValueT;
    type IntoIter = std::slice::Iter<'a, ValueT>;

    fn into_iter(self) -> Self::IntoIter {
        self.array.iter()
    }
}

impl<ValueT, CompareT> std::fmt::Debug for Heap<ValueT, CompareT>
where
    ValueT: std::fmt::Debug,
    CompareT: Comparator<ValueT>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.array.fmt(f)
    }
}

/// Active values in array order, separated by single spaces.
impl<ValueT, CompareT> std::fmt::Display for Heap<ValueT, CompareT>
where
    ValueT: std::fmt::Display,
    CompareT: Comparator<ValueT>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut values = self.array.iter();
        if let Some(first) = values.next() {
            write!(f, "{}", first)?;
            for value in values {
                write!(f, " {}", value)?;
            }
        }
        Ok(())
    }
}
