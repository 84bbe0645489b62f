mod comparator;
mod heap;
mod heap_sort;

pub use comparator::{Comparator, Greater, Less};
pub use heap::{Heap, MaxHeap, MinHeap};
pub use heap_sort::{down_heap, heap_sort, is_heap, make_heap, sort_heap, up_heap, update_heap};
